use thiserror::Error;
use tracing::{debug, error};

/// Errors raised by the timechart bucketing and merge engine.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TimechartError {
    #[error("Bucket interval must be greater than zero")]
    ZeroInterval,

    #[error("No time buckets were generated for lookup")]
    EmptyBuckets,

    #[error("Timestamp {timestamp} is outside bucket range [{first}, {last_end})")]
    TimestampOutOfRange {
        timestamp: u64,
        first: u64,
        last_end: u64,
    },

    #[error("Value is not numeric: {0}")]
    NotNumeric(String),

    #[error("Cannot reduce {left} with {right} under {func}")]
    TypeMismatch {
        left: String,
        right: String,
        func: String,
    },

    #[error("Reduce is not supported for {0}")]
    UnsupportedReduce(String),

    #[error("Sketch precision mismatch: {left} vs {right}")]
    SketchPrecisionMismatch { left: u8, right: u8 },

    #[error("Sketch precision {0} is outside 4..=18")]
    InvalidSketchPrecision(u8),

    #[error("Sketch operation failed: {0}")]
    SketchBackend(String),

    #[error("Group limit was already classified for this query")]
    AlreadyClassified,

    #[error("Unknown time unit: {0}")]
    UnknownTimeUnit(String),
}

impl TimechartError {
    pub fn log_error(&self) {
        match self {
            TimechartError::ZeroInterval | TimechartError::EmptyBuckets => {
                error!("Time bucket setup failed: {}", self);
            }
            TimechartError::TimestampOutOfRange { .. } => {
                error!("Bucket lookup failed: {}", self);
                debug!("Bucket lookup error details: {:?}", self);
            }
            TimechartError::NotNumeric(_)
            | TimechartError::TypeMismatch { .. }
            | TimechartError::UnsupportedReduce(_) => {
                error!("Value merge failed: {}", self);
                debug!("Value merge error details: {:?}", self);
            }
            TimechartError::SketchPrecisionMismatch { .. }
            | TimechartError::InvalidSketchPrecision(_)
            | TimechartError::SketchBackend(_) => {
                error!("Sketch operation failed: {}", self);
            }
            TimechartError::AlreadyClassified => {
                error!("{}", self);
            }
            TimechartError::UnknownTimeUnit(unit) => {
                error!("Unknown time unit: {}", unit);
            }
        }
    }
}
