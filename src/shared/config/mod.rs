mod global;
pub mod model;

pub use global::CONFIG;
pub use model::{LoggingConfig, Settings, TimechartSettings, load_settings};
