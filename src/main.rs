use school_locator::api::service::{router, State};
use school_locator::config::{self, Config, REQUIRED_VARIABLES};
use school_locator::db::{Database, MAX_CONNECTIONS};

#[tokio::main]
async fn main() {
    // read before the logger so RUST_LOG may come from .env
    let dotenv = config::load_env_file(None);

    env_logger::init();

    match dotenv {
        Ok(Some(path)) => log::info!("Loaded environment from {}", path.display()),
        Ok(None) => log::debug!("No .env file found"),
        Err(e) => log::warn!("Ignoring .env file: {e}"),
    }

    if let Err(e) = run().await {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let config = Config::env().inspect_err(|e| {
        log::error!(
            "config: {e}. Check all required environment variables ({}) are set.",
            REQUIRED_VARIABLES.join(", ")
        );
    })?;

    config.log();

    let database = Database::connect(&config);
    log::info!(
        "Created database pool for {}:{}/{} (max {MAX_CONNECTIONS} connections, connects on first use)",
        config.db_host,
        config.db_port,
        config.db_name
    );

    let state = State::new(database);

    let listen_addr = format!("0.0.0.0:{}", config.listen_port);
    let listener = tokio::net::TcpListener::bind(&listen_addr).await?;

    let router = router::router(state);

    log::info!("Server running on port {}", config.listen_port);
    axum::serve(listener, router).await?;

    Ok(())
}
