use parking_lot::Mutex;

use crate::engine::timechart::diagnostics::{Diagnostic, DiagnosticSink};

/// Captures diagnostics so tests can assert on them
#[derive(Default)]
pub struct RecordingSink {
    seen: Mutex<Vec<Diagnostic>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.seen.lock().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.lock().is_empty()
    }

    pub fn unreadable_groups(&self) -> Vec<String> {
        self.seen
            .lock()
            .iter()
            .filter_map(|d| match d {
                Diagnostic::UnreadableScore { group, .. } => Some(group.clone()),
                _ => None,
            })
            .collect()
    }
}

impl DiagnosticSink for RecordingSink {
    fn report(&self, diagnostic: Diagnostic) {
        self.seen.lock().push(diagnostic);
    }
}
