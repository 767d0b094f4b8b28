use crate::engine::timechart::config::{LimitConfig, ScoreMode, TimechartConfig};

pub struct TimechartFactory {
    by_field: String,
    limit: Option<LimitConfig>,
}

impl TimechartFactory {
    pub fn new() -> Self {
        Self {
            by_field: "host".to_string(),
            limit: None,
        }
    }

    pub fn with_by_field(mut self, by_field: &str) -> Self {
        self.by_field = by_field.to_string();
        self
    }

    pub fn with_limit(mut self, limit: LimitConfig) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn top_by_sum(count: usize) -> TimechartConfig {
        Self::new()
            .with_limit(LimitConfig::top(count, ScoreMode::BySum))
            .create()
    }

    pub fn top_by_frequency(count: usize) -> TimechartConfig {
        Self::new()
            .with_limit(LimitConfig::top(count, ScoreMode::ByFrequency))
            .create()
    }

    pub fn create(self) -> TimechartConfig {
        TimechartConfig {
            by_field: self.by_field,
            limit: self.limit,
        }
    }
}
