//! Logging configuration using tracing
//!
//! The terminal belongs to the UI, so logs go to a daily-rolling file in
//! the data directory. Nothing is logged unless `--debug` is given or
//! `DOCQA_LOG` is set; `DOCQA_LOG` also sets the filter.

use anyhow::{Context, Result};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const LOG_ENV: &str = "DOCQA_LOG";

pub fn init(debug: bool) -> Result<()> {
    let from_env = EnvFilter::try_from_env(LOG_ENV).ok();
    if !debug && from_env.is_none() {
        return Ok(());
    }

    let log_dir = crate::utils::log_dir();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "docqa.log");
    let env_filter = from_env.unwrap_or_else(|| EnvFilter::new("docqa=info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .try_init()
        .context("Logging already initialized")?;

    tracing::info!("docqa starting, logging to {}", log_dir.display());
    Ok(())
}
