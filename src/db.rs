use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};

use crate::config::Config;

pub const MAX_CONNECTIONS: u32 = 10;

#[derive(Clone)]
pub struct Database {
    pub pool: sqlx::MySqlPool,
}

impl Database {
    /// Builds the pool without opening a connection; the first query connects.
    pub fn connect(config: &Config) -> Self {
        let options = MySqlConnectOptions::new()
            .host(&config.db_host)
            .port(config.db_port)
            .username(&config.db_user)
            .password(&config.db_pass)
            .database(&config.db_name);

        let pool = MySqlPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_lazy_with(options);

        Database { pool }
    }
}
