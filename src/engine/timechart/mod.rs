pub mod buckets;
pub mod config;
pub mod diagnostics;
pub mod limit;
pub mod limit_result;
pub mod measure;
pub mod merge;
pub mod running_stats;
pub mod sketch;
pub mod value;

pub use buckets::{generate_buckets, locate_bucket};
pub use config::{
    LimitConfig, LimitDirection, ScoreMode, TimeBucketConfig, TimechartConfig,
    build_time_bucket_config, build_time_bucket_config_with,
};
pub use diagnostics::{Diagnostic, DiagnosticSink, MergeContext, TracingSink};
pub use limit::{
    GroupCounts, GroupScores, LimitMembership, classify, initial_score_map, is_demoted,
    is_sum_ranked,
};
pub use limit_result::{LimitResult, should_add_result};
pub use measure::{AggregateFunction, MeasureAggregator, MergeKind};
pub use merge::{merge_count_maps, merge_scalar};
pub use running_stats::RunningStats;
pub use sketch::{CardinalitySketch, HyperLogLog};
pub use value::{CValue, Reducer, ScalarReducer};

pub use crate::shared::datetime::interval::TimeUnit;
