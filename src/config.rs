use std::env::VarError;
use std::path::{Path, PathBuf};

use anyhow::anyhow;

pub const REQUIRED_VARIABLES: &[&str] = &["DB_HOST", "DB_USER", "DB_NAME"];

pub const DEFAULT_LISTEN_PORT: u16 = 5000;
pub const DEFAULT_DB_PORT: u16 = 3306;

/// Loads a `.env` file into the process environment; variables that are
/// already set keep their values. `None` searches the working directory and
/// its parents. Returns the loaded path, or `None` when there is no file.
pub fn load_env_file(path: Option<&Path>) -> anyhow::Result<Option<PathBuf>> {
    let loaded = match path {
        Some(path) => dotenvy::from_path(path).map(|()| path.to_path_buf()),
        None => dotenvy::dotenv(),
    };

    match loaded {
        Ok(path) => Ok(Some(path)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(anyhow!("error reading .env file: {e}")),
    }
}

pub struct Config {
    pub db_host: String,
    pub db_port: u16,
    pub db_user: String,
    pub db_pass: String,
    pub db_name: String,
    pub listen_port: u16,
}

impl Config {
    pub fn env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| std::env::var(name))
    }

    /// Builds the config from any variable source; `env()` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let required = |name: &str| -> anyhow::Result<String> {
            lookup(name).map_err(|e| match e {
                VarError::NotPresent => anyhow!("{name} not set"),
                VarError::NotUnicode(_) => anyhow!("{name} value is not valid unicode"),
            })
        };

        let optional = |name: &str| -> anyhow::Result<Option<String>> {
            match lookup(name) {
                Ok(value) => Ok(Some(value)),
                Err(VarError::NotPresent) => Ok(None),
                Err(VarError::NotUnicode(_)) => Err(anyhow!("{name} value is not valid unicode")),
            }
        };

        let port = |name: &str, default: u16| -> anyhow::Result<u16> {
            match optional(name)? {
                Some(value) => value
                    .trim()
                    .parse()
                    .map_err(|e| anyhow!("{name} is not a valid port ({value}): {e}")),
                None => Ok(default),
            }
        };

        Ok(Self {
            db_host: required("DB_HOST")?,
            db_port: port("DB_PORT", DEFAULT_DB_PORT)?,
            db_user: required("DB_USER")?,
            db_pass: optional("DB_PASS")?.unwrap_or_default(),
            db_name: required("DB_NAME")?,
            listen_port: port("PORT", DEFAULT_LISTEN_PORT)?,
        })
    }

    pub fn log(&self) {
        log::info!(
            "Config: db {}@{}:{}/{} (password {}), listen port {}",
            self.db_user,
            self.db_host,
            self.db_port,
            self.db_name,
            if self.db_pass.is_empty() { "unset" } else { "set" },
            self.listen_port,
        );
    }
}
