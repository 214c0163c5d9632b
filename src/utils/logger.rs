use anyhow::{Context, Result};
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Builds the filter from RUST_LOG, falling back to the configured level
fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Installs a file logger for the server
///
/// Each run writes to its own timestamped file inside `log_dir`.
///
/// # Returns
/// * `Result<PathBuf>` - Path of the log file that was created
pub fn init_logger(log_dir: &str, default_level: &str) -> Result<PathBuf> {
    // Create log directory if it doesn't exist
    if !Path::new(log_dir).exists() {
        fs::create_dir_all(log_dir)
            .with_context(|| format!("Failed to create log directory {}", log_dir))?;
    }

    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let log_file = Path::new(log_dir).join(format!("url_decomposer_{}.log", timestamp));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter(default_level))
        .with_file(true)
        .with_line_number(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_target(false)
        .with_ansi(false)
        .with_writer(fs::File::create(&log_file)?)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    info!("Logger initialized");

    Ok(log_file)
}

/// Installs a compact stderr logger for one-shot CLI commands
pub fn init_stderr_logger(default_level: &str) -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter(default_level))
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
