use indexmap::IndexMap;

use crate::engine::timechart::measure::{AggregateFunction, MeasureAggregator};

/// Primitive measures pushed down to the scan, plus the way back to the
/// measures the user asked for.
///
/// `reverse_index[i]` is the position of the requested measure that
/// `measures[i]` was derived from. `col_to_index` lists, per column, the
/// positions in `measures` computed over it. All three only ever grow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunningStats {
    pub measures: Vec<MeasureAggregator>,
    pub reverse_index: Vec<usize>,
    pub col_to_index: IndexMap<String, Vec<usize>>,
}

impl RunningStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expands every requested measure, in order
    pub fn expand(originals: &[MeasureAggregator]) -> Self {
        originals
            .iter()
            .enumerate()
            .fold(Self::new(), |stats, (idx, m)| match m.function {
                AggregateFunction::Count => stats.with_count(m, idx),
                AggregateFunction::Avg => stats.with_avg(m, idx),
                _ => stats.with_primitive(m, idx),
            })
    }

    /// `count(col)` stays a single count
    pub fn with_count(self, original: &MeasureAggregator, original_index: usize) -> Self {
        self.push(original.rewritten(AggregateFunction::Count), original_index)
    }

    /// `avg(col)` is carried as `sum(col)` followed by `count(col)`
    pub fn with_avg(self, original: &MeasureAggregator, original_index: usize) -> Self {
        self.push(original.rewritten(AggregateFunction::Sum), original_index)
            .push(original.rewritten(AggregateFunction::Count), original_index)
    }

    /// Measures that are already mergeable are passed through unchanged
    pub fn with_primitive(self, original: &MeasureAggregator, original_index: usize) -> Self {
        self.push(original.clone(), original_index)
    }

    pub fn len(&self) -> usize {
        self.measures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.measures.is_empty()
    }

    /// Positions in `measures` derived from the requested measure at `original_index`
    pub fn primitives_of(&self, original_index: usize) -> Vec<usize> {
        self.reverse_index
            .iter()
            .enumerate()
            .filter(|(_, orig)| **orig == original_index)
            .map(|(pos, _)| pos)
            .collect()
    }

    fn push(mut self, measure: MeasureAggregator, original_index: usize) -> Self {
        let position = self.measures.len();
        self.col_to_index
            .entry(measure.measure_column.clone())
            .or_default()
            .push(position);
        self.reverse_index.push(original_index);
        self.measures.push(measure);
        self
    }
}
