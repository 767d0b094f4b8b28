pub mod factories;
pub mod factory;
pub mod recording_sink;

pub use recording_sink::RecordingSink;
