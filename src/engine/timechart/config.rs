use crate::engine::errors::TimechartError;
use crate::engine::timechart::buckets::{generate_buckets, locate_bucket};
use crate::shared::config::TimechartSettings;
use crate::shared::datetime::interval::TimeUnit;

/// Which end of the ranking is kept
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitDirection {
    Top,
    Bottom,
}

/// How split-by values are scored for ranking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreMode {
    /// Sum of the measure; only known once every partial has been seen
    BySum,
    /// Number of occurrences of the split-by value
    ByFrequency,
}

/// `limit=top5`-style clause of a timechart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LimitConfig {
    pub direction: LimitDirection,
    pub count: usize,
    pub score_mode: ScoreMode,
}

impl LimitConfig {
    pub fn top(count: usize, score_mode: ScoreMode) -> Self {
        Self {
            direction: LimitDirection::Top,
            count,
            score_mode,
        }
    }

    pub fn bottom(count: usize, score_mode: ScoreMode) -> Self {
        Self {
            direction: LimitDirection::Bottom,
            count,
            score_mode,
        }
    }

    /// Limit used when a split-by field is given without an explicit clause.
    /// A single measure is ranked by its sum, several measures by frequency.
    pub fn default_for(measure_count: usize, count: usize) -> Self {
        let score_mode = if measure_count > 1 {
            ScoreMode::ByFrequency
        } else {
            ScoreMode::BySum
        };
        Self::top(count, score_mode)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TimechartConfig {
    /// Split-by field; empty means no grouping
    pub by_field: String,
    pub limit: Option<LimitConfig>,
}

impl TimechartConfig {
    pub fn has_split_by(&self) -> bool {
        !self.by_field.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TimeBucketConfig {
    pub start_time: u64,
    pub end_time: u64,
    pub interval_millis: u64,
    pub timechart: Option<TimechartConfig>,
}

impl TimeBucketConfig {
    pub fn with_range(mut self, start_time: u64, end_time: u64) -> Self {
        self.start_time = start_time;
        self.end_time = end_time;
        self
    }

    pub fn limit(&self) -> Option<&LimitConfig> {
        self.timechart.as_ref().and_then(|tc| tc.limit.as_ref())
    }

    pub fn buckets(&self) -> Result<Vec<u64>, TimechartError> {
        generate_buckets(self.start_time, self.end_time, self.interval_millis)
    }

    /// Bucket start for `ts`, given buckets produced by [`Self::buckets`]
    pub fn bucket_of(&self, buckets: &[u64], ts: u64) -> Result<u64, TimechartError> {
        locate_bucket(buckets, ts, self.interval_millis)
    }
}

/// Resolves a timechart span and split-by clause using application settings
pub fn build_time_bucket_config(
    interval_number: u64,
    unit: TimeUnit,
    by_field: &str,
    explicit_limit: Option<LimitConfig>,
    measure_count: usize,
) -> TimeBucketConfig {
    build_time_bucket_config_with(
        &TimechartSettings::from_app_config(),
        interval_number,
        unit,
        by_field,
        explicit_limit,
        measure_count,
    )
}

pub fn build_time_bucket_config_with(
    settings: &TimechartSettings,
    interval_number: u64,
    unit: TimeUnit,
    by_field: &str,
    explicit_limit: Option<LimitConfig>,
    measure_count: usize,
) -> TimeBucketConfig {
    let limit = if by_field.is_empty() {
        None
    } else {
        Some(explicit_limit.unwrap_or_else(|| {
            LimitConfig::default_for(measure_count, settings.default_limit)
        }))
    };

    TimeBucketConfig {
        start_time: 0,
        end_time: 0,
        interval_millis: unit.interval_millis(interval_number),
        timechart: Some(TimechartConfig {
            by_field: by_field.to_string(),
            limit,
        }),
    }
}
