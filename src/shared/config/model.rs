use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub logging: LoggingConfig,
    pub timechart: Option<TimechartSettings>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_stdout_level")]
    pub stdout_level: String,
    #[serde(default = "default_file_level")]
    pub file_level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_dir: default_log_dir(),
            stdout_level: default_stdout_level(),
            file_level: default_file_level(),
        }
    }
}

fn default_log_dir() -> String {
    "logs".to_string()
}

fn default_stdout_level() -> String {
    "info".to_string()
}

fn default_file_level() -> String {
    "debug".to_string()
}

/// Tuning for timechart grouping and the "other" series
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TimechartSettings {
    /// Limit applied when a split-by field is given without an explicit limit
    #[serde(default = "default_limit")]
    pub default_limit: usize,
    /// Upper bound on distinct split-by values tracked per query (None = unbounded)
    #[serde(default)]
    pub max_group_values: Option<usize>,
    /// HyperLogLog precision used for the "other" series cardinality sketch
    #[serde(default = "default_sketch_precision")]
    pub sketch_precision: u8,
}

fn default_limit() -> usize {
    10
}

fn default_sketch_precision() -> u8 {
    14
}

impl Default for TimechartSettings {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_group_values: None,
            sketch_precision: default_sketch_precision(),
        }
    }
}

impl TimechartSettings {
    /// Create from application configuration
    pub fn from_app_config() -> Self {
        super::CONFIG.timechart.clone().unwrap_or_default()
    }
}

pub fn load_settings() -> Result<Settings, config::ConfigError> {
    let config_path =
        env::var("SNEL_TIMECHART_CONFIG").unwrap_or_else(|_| "config".to_string());

    let settings: Settings = config::Config::builder()
        .add_source(config::File::with_name(&config_path).required(false))
        .build()?
        .try_deserialize()?;

    Ok(settings)
}
