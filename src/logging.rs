use tracing::{Subscriber, info};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

use crate::shared::config::{CONFIG, LoggingConfig};

/// Installs stdout and daily-rolling file layers using the logging settings
pub fn init() -> anyhow::Result<()> {
    subscriber(&CONFIG.logging)?.try_init()?;
    info!("Logging initialized");
    Ok(())
}

/// Builds the stdout + `<log_dir>/timechart.log.<date>` subscriber without installing it
pub fn subscriber(cfg: &LoggingConfig) -> anyhow::Result<impl Subscriber + Send + Sync + 'static> {
    let stdout_filter = cfg.stdout_level.parse::<LevelFilter>()?;
    let file_filter = cfg.file_level.parse::<LevelFilter>()?;

    let stdout_layer = fmt::layer().with_ansi(true).with_filter(stdout_filter);

    let file_appender = tracing_appender::rolling::daily(&cfg.log_dir, "timechart.log");
    let file_layer = fmt::layer()
        .with_ansi(false)
        .with_writer(file_appender)
        .with_filter(file_filter);

    Ok(tracing_subscriber::registry()
        .with(stdout_layer)
        .with(file_layer))
}

#[cfg(test)]
pub fn init_for_tests() {
    use std::sync::Once;
    use tracing_subscriber::EnvFilter;

    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let filter =
            EnvFilter::from_default_env().add_directive("snel_timechart=debug".parse().unwrap());

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .init();
    });
}
