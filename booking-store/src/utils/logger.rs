//! Logging Infrastructure
//!
//! Console logging for development, JSON for log shippers, and optional
//! daily-rotated files.

use std::path::Path;

use tracing_subscriber::EnvFilter;

use crate::core::Config;

/// Initialize the logger from server configuration
pub fn init_logger(config: &Config) -> anyhow::Result<()> {
    init_logger_with_file(
        Some(&config.log_level),
        Some(config.log_json),
        config.log_dir.as_deref(),
    )
}

/// Initialize the logger with optional file output
///
/// `RUST_LOG` wins over `log_level` when set.
pub fn init_logger_with_file(
    log_level: Option<&str>,
    json: Option<bool>,
    log_dir: Option<&str>,
) -> anyhow::Result<()> {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("booking_store={level},tower_http={level}")));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        std::fs::create_dir_all(log_path)?;
        let file_appender = tracing_appender::rolling::daily(log_path, "booking-store");
        let builder = builder.with_ansi(false).with_writer(file_appender);
        if json.unwrap_or(false) {
            builder.json().try_init().map_err(anyhow::Error::msg)?;
        } else {
            builder.try_init().map_err(anyhow::Error::msg)?;
        }
        return Ok(());
    }

    if json.unwrap_or(false) {
        builder.json().try_init().map_err(anyhow::Error::msg)?;
    } else {
        builder.try_init().map_err(anyhow::Error::msg)?;
    }
    Ok(())
}
