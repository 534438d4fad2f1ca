use booking_store::{Config, Server, init_logger};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    let _ = dotenv::dotenv();

    let config = Config::from_env();
    init_logger(&config)?;

    tracing::info!(
        "Starting booking-store {} (env: {})",
        env!("CARGO_PKG_VERSION"),
        config.environment
    );
    if config.is_development() {
        tracing::debug!(?config, "Loaded configuration");
    }

    Server::new(config).run().await?;
    Ok(())
}
