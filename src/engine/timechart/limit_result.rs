use ahash::RandomState as AHashRandomState;
use indexmap::IndexSet;
use once_cell::unsync::OnceCell;
use tracing::debug;

use crate::engine::errors::TimechartError;
use crate::engine::timechart::config::{LimitConfig, TimechartConfig};
use crate::engine::timechart::diagnostics::{DiagnosticSink, MergeContext};
use crate::engine::timechart::limit::{
    GroupCounts, GroupScores, LimitMembership, classify, initial_score_map, is_demoted,
    is_sum_ranked,
};
use crate::engine::timechart::measure::{AggregateFunction, MergeKind};
use crate::engine::timechart::merge::{merge_count_maps, merge_scalar};
use crate::engine::timechart::sketch::{CardinalitySketch, HyperLogLog};
use crate::engine::timechart::value::CValue;
use crate::shared::config::TimechartSettings;

/// Per-query state for the top-N split and the "other" series.
///
/// Owned by one query's merge context; callers serialize access to it.
#[derive(Debug)]
pub struct LimitResult<S = HyperLogLog> {
    pub group_value_count: GroupCounts,
    pub group_score_map: Option<GroupScores>,
    /// One slot per output column, materialized on the first demotion
    pub other_values: Option<Vec<CValue>>,
    /// Union of demoted sketches, indexed like `other_values`
    pub other_sketches: Vec<Option<S>>,
    blank_sketch: S,
    num_columns: usize,
    max_groups: Option<usize>,
    /// Groups turned away by `max_groups`; always demoted once classified
    capped_groups: IndexSet<String, AHashRandomState>,
    value_is_in_limit: OnceCell<Option<LimitMembership>>,
}

impl LimitResult<HyperLogLog> {
    /// Builds the state with the configured sketch precision and group cap
    pub fn from_settings(
        num_columns: usize,
        settings: &TimechartSettings,
    ) -> Result<Self, TimechartError> {
        let sketch = HyperLogLog::new(settings.sketch_precision)?;
        Ok(Self::new(num_columns, sketch).with_group_cap(settings.max_group_values))
    }
}

impl<S: CardinalitySketch + Clone> LimitResult<S> {
    /// `blank_sketch` is cloned whenever a column's "other" sketch is first needed
    pub fn new(num_columns: usize, blank_sketch: S) -> Self {
        Self {
            group_value_count: GroupCounts::new(),
            group_score_map: None,
            other_values: None,
            other_sketches: Vec::new(),
            blank_sketch,
            num_columns,
            max_groups: None,
            capped_groups: IndexSet::with_hasher(AHashRandomState::new()),
            value_is_in_limit: OnceCell::new(),
        }
    }

    pub fn with_group_cap(mut self, max_groups: Option<usize>) -> Self {
        self.max_groups = max_groups;
        self
    }

    pub fn blank_sketch(&self) -> &S {
        &self.blank_sketch
    }

    pub fn other_sketch(&self, column_index: usize) -> Option<&S> {
        self.other_sketches.get(column_index).and_then(|s| s.as_ref())
    }

    /// Records `count` more occurrences of `group`. New groups beyond the cap
    /// are not counted and end up in the "other" series.
    pub fn observe_group(&mut self, group: &str, count: u64) -> bool {
        if let Some(existing) = self.group_value_count.get_mut(group) {
            *existing = existing.saturating_add(count);
            return true;
        }
        if self.capped_groups.contains(group) {
            return false;
        }
        if self
            .max_groups
            .is_some_and(|max| self.group_value_count.len() >= max)
        {
            debug!(target: "snel_timechart::limit", group, "Group cap reached");
            self.capped_groups.insert(group.to_string());
            return false;
        }
        self.group_value_count.insert(group.to_string(), count);
        true
    }

    /// Folds counts reported by another shard into this query's counts
    pub fn absorb_counts(&mut self, incoming: &GroupCounts) {
        if self.max_groups.is_none() {
            merge_count_maps(&mut self.group_value_count, incoming);
            return;
        }
        for (group, cnt) in incoming {
            self.observe_group(group, *cnt);
        }
    }

    pub fn is_capped(&self, group_value: &str) -> bool {
        self.capped_groups.contains(group_value)
    }

    /// Prepares score slots for every known group when ranking by sum
    pub fn seed_score_map(&mut self, limit: Option<&LimitConfig>) {
        self.group_score_map = initial_score_map(limit, &self.group_value_count);
    }

    /// Runs the top-N classification. The result is frozen for the rest of the query.
    ///
    /// Capped groups never compete for a slot and are recorded as demoted.
    pub fn finalize_limit(
        &self,
        limit: Option<&LimitConfig>,
        sink: &dyn DiagnosticSink,
    ) -> Result<Option<&LimitMembership>, TimechartError> {
        if self.value_is_in_limit.get().is_some() {
            return Err(TimechartError::AlreadyClassified);
        }
        let membership = if self.capped_groups.is_empty() {
            classify(
                limit,
                &self.group_value_count,
                self.group_score_map.as_ref(),
                sink,
            )
        } else {
            let scores: Option<GroupScores> = self.group_score_map.as_ref().map(|scores| {
                scores
                    .iter()
                    .filter(|(group, _)| !self.capped_groups.contains(group.as_str()))
                    .map(|(group, score)| (group.clone(), score.clone()))
                    .collect()
            });
            let mut membership = classify(limit, &self.group_value_count, scores.as_ref(), sink);
            if let Some(membership) = membership.as_mut() {
                for group in &self.capped_groups {
                    membership.insert(group.clone(), false);
                }
            }
            membership
        };
        let stored = self.value_is_in_limit.get_or_init(|| membership);
        Ok(stored.as_ref())
    }

    pub fn membership(&self) -> Option<&LimitMembership> {
        self.value_is_in_limit.get().and_then(|m| m.as_ref())
    }

    pub fn is_classified(&self) -> bool {
        self.value_is_in_limit.get().is_some()
    }

    pub fn is_demoted(&self, group_value: &str) -> bool {
        is_demoted(self.membership(), group_value)
    }
}

/// Decides what happens to a partial value for `group_value` at `column_index`.
///
/// Demoted groups are folded into the "other" series. Under sum ranking, while
/// the limit is unclassified and the "other" series does not exist yet, values
/// feed the group's score instead. Returns `true` only when the caller should
/// insert the value as a regular result row.
#[allow(clippy::too_many_arguments)]
pub fn should_add_result<S: CardinalitySketch + Clone>(
    timechart: Option<&TimechartConfig>,
    limit_result: &mut LimitResult<S>,
    column_index: usize,
    incoming: &CValue,
    incoming_sketch: Option<&S>,
    func: AggregateFunction,
    group_value: &str,
    is_demoted: bool,
    ctx: &MergeContext<'_>,
) -> bool {
    let use_addition_for_merge = limit_result.other_values.is_none();

    if is_demoted {
        let width = limit_result.num_columns.max(column_index + 1);
        let other_values = limit_result
            .other_values
            .get_or_insert_with(|| vec![CValue::Invalid; width]);
        if other_values.len() <= column_index {
            other_values.resize(column_index + 1, CValue::Invalid);
        }

        let other_sketch = match (func.merge_kind(), incoming_sketch) {
            (MergeKind::Cardinality, Some(_)) => {
                let sketches = &mut limit_result.other_sketches;
                if sketches.len() <= column_index {
                    sketches.resize_with(column_index + 1, || None);
                }
                let blank = &limit_result.blank_sketch;
                Some(sketches[column_index].get_or_insert_with(|| blank.clone()))
            }
            _ => None,
        };

        merge_scalar(
            &mut other_values[column_index],
            incoming,
            other_sketch,
            incoming_sketch,
            func,
            use_addition_for_merge,
            ctx,
        );
        return false;
    }

    let limit = timechart.and_then(|tc| tc.limit.as_ref());
    if is_sum_ranked(limit)
        && limit_result.other_values.is_none()
        && !limit_result.is_classified()
    {
        // capped groups are demoted at classification and never ranked
        if limit_result.is_capped(group_value) {
            return false;
        }
        let score = limit_result
            .group_score_map
            .get_or_insert_with(GroupScores::new)
            .entry(group_value.to_string())
            .or_insert(CValue::Invalid);
        merge_scalar(
            score,
            incoming,
            None::<&mut S>,
            None,
            func,
            use_addition_for_merge,
            ctx,
        );
        return false;
    }

    true
}
