pub mod errors;
pub mod timechart;

pub use errors::*;
