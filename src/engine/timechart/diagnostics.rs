use tracing::error;

use crate::engine::errors::TimechartError;
use crate::engine::timechart::value::{Reducer, ScalarReducer};

/// Non-fatal conditions hit while classifying or merging partial results
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    UnreadableScore {
        group: String,
        error: TimechartError,
    },
    ReduceFailed {
        error: TimechartError,
    },
    SketchMergeFailed {
        error: TimechartError,
    },
}

/// Receives diagnostics; none of them abort the query
pub trait DiagnosticSink {
    fn report(&self, diagnostic: Diagnostic);
}

/// Forwards diagnostics to `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: Diagnostic) {
        match diagnostic {
            Diagnostic::UnreadableScore { group, error } => {
                error!(
                    target: "snel_timechart::limit",
                    "{} does not have a score: {}", group, error
                );
            }
            Diagnostic::ReduceFailed { error } | Diagnostic::SketchMergeFailed { error } => {
                error.log_error();
            }
        }
    }
}

static TRACING_SINK: TracingSink = TracingSink;
static SCALAR_REDUCER: ScalarReducer = ScalarReducer;

/// Collaborators used while merging partial values
#[derive(Clone, Copy)]
pub struct MergeContext<'a> {
    pub reducer: &'a dyn Reducer,
    pub sink: &'a dyn DiagnosticSink,
}

impl<'a> MergeContext<'a> {
    pub fn new(reducer: &'a dyn Reducer, sink: &'a dyn DiagnosticSink) -> Self {
        Self { reducer, sink }
    }

    /// Default reducer, diagnostics routed to the given sink
    pub fn with_sink(sink: &'a dyn DiagnosticSink) -> Self {
        Self {
            reducer: &SCALAR_REDUCER,
            sink,
        }
    }
}

impl MergeContext<'static> {
    pub fn tracing() -> Self {
        Self {
            reducer: &SCALAR_REDUCER,
            sink: &TRACING_SINK,
        }
    }
}
