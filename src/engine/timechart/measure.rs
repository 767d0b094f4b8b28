use std::fmt;

/// Aggregate function applied to a measure column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AggregateFunction {
    Count,
    Sum,
    Avg,
    Min,
    Max,
    Range,
    Cardinality,
    Values,
}

/// How partial results of a function combine once they leave a shard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeKind {
    /// Partials are added together
    Additive,
    /// Partials are unioned through a cardinality sketch
    Cardinality,
    /// Partials are distinct string sets
    StringValued,
}

impl AggregateFunction {
    pub fn merge_kind(&self) -> MergeKind {
        match self {
            AggregateFunction::Count
            | AggregateFunction::Sum
            | AggregateFunction::Avg
            | AggregateFunction::Min
            | AggregateFunction::Max
            | AggregateFunction::Range => MergeKind::Additive,
            AggregateFunction::Cardinality => MergeKind::Cardinality,
            AggregateFunction::Values => MergeKind::StringValued,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AggregateFunction::Count => "count",
            AggregateFunction::Sum => "sum",
            AggregateFunction::Avg => "avg",
            AggregateFunction::Min => "min",
            AggregateFunction::Max => "max",
            AggregateFunction::Range => "range",
            AggregateFunction::Cardinality => "dc",
            AggregateFunction::Values => "values",
        }
    }
}

impl fmt::Display for AggregateFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single measure requested by the timechart, e.g. `avg(latency)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeasureAggregator {
    pub measure_column: String,
    pub function: AggregateFunction,
    /// Set when the measure is computed over string-encoded values
    pub str_enc: Option<String>,
}

impl MeasureAggregator {
    pub fn new(measure_column: impl Into<String>, function: AggregateFunction) -> Self {
        Self {
            measure_column: measure_column.into(),
            function,
            str_enc: None,
        }
    }

    pub fn with_str_enc(mut self, str_enc: impl Into<String>) -> Self {
        self.str_enc = Some(str_enc.into());
        self
    }

    /// Same column and encoding, different function
    pub fn rewritten(&self, function: AggregateFunction) -> Self {
        Self {
            measure_column: self.measure_column.clone(),
            function,
            str_enc: self.str_enc.clone(),
        }
    }
}
