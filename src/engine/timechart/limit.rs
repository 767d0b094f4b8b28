use std::cmp::Ordering;

use indexmap::IndexMap;
use tracing::debug;

use crate::engine::timechart::config::{LimitConfig, LimitDirection, ScoreMode};
use crate::engine::timechart::diagnostics::{Diagnostic, DiagnosticSink};
use crate::engine::timechart::value::CValue;

/// Occurrences per split-by value, in first-seen order
pub type GroupCounts = IndexMap<String, u64>;
/// Accumulated score per split-by value, in first-seen order
pub type GroupScores = IndexMap<String, CValue>;
/// Whether each split-by value made it into the top/bottom N
pub type LimitMembership = IndexMap<String, bool>;

pub fn is_sum_ranked(limit: Option<&LimitConfig>) -> bool {
    matches!(
        limit,
        Some(LimitConfig {
            score_mode: ScoreMode::BySum,
            ..
        })
    )
}

/// Placeholder score slots for every known group; only used when ranking by sum
pub fn initial_score_map(
    limit: Option<&LimitConfig>,
    group_value_count: &GroupCounts,
) -> Option<GroupScores> {
    if !is_sum_ranked(limit) {
        return None;
    }
    Some(
        group_value_count
            .keys()
            .map(|group| (group.clone(), CValue::Invalid))
            .collect(),
    )
}

/// Decides which split-by values stay in the top/bottom N.
///
/// Must run once, after every partial contributing to the decision has been
/// merged into `group_value_count` / `group_score_map`. Ties keep first-seen
/// order.
pub fn classify(
    limit: Option<&LimitConfig>,
    group_value_count: &GroupCounts,
    group_score_map: Option<&GroupScores>,
    sink: &dyn DiagnosticSink,
) -> Option<LimitMembership> {
    let limit = limit?;
    let mut membership = LimitMembership::new();

    let winners = match limit.score_mode {
        ScoreMode::BySum => {
            let mut ranked = Vec::new();
            for (group, score) in group_score_map.into_iter().flatten() {
                membership.insert(group.clone(), false);
                match score.as_f64() {
                    Ok(s) => ranked.push((group.as_str(), s)),
                    Err(error) => sink.report(Diagnostic::UnreadableScore {
                        group: group.clone(),
                        error,
                    }),
                }
            }
            select(ranked, limit, f64::total_cmp)
        }
        ScoreMode::ByFrequency => {
            let mut ranked = Vec::with_capacity(group_value_count.len());
            for (group, &cnt) in group_value_count {
                membership.insert(group.clone(), false);
                ranked.push((group.as_str(), cnt));
            }
            select(ranked, limit, u64::cmp)
        }
    };

    debug!(
        target: "snel_timechart::limit",
        "classified {} groups, {} kept",
        membership.len(),
        winners.len()
    );
    for group in winners {
        if let Some(in_limit) = membership.get_mut(group) {
            *in_limit = true;
        }
    }

    Some(membership)
}

fn select<'a, K>(
    mut ranked: Vec<(&'a str, K)>,
    limit: &LimitConfig,
    cmp: impl Fn(&K, &K) -> Ordering,
) -> Vec<&'a str> {
    // sort_by is stable, so equal scores keep first-seen order
    ranked.sort_by(|a, b| match limit.direction {
        LimitDirection::Top => cmp(&b.1, &a.1),
        LimitDirection::Bottom => cmp(&a.1, &b.1),
    });
    ranked.truncate(limit.count.min(ranked.len()));
    ranked.into_iter().map(|(group, _)| group).collect()
}

/// A value is demoted only when classification ran and explicitly left it out
pub fn is_demoted(membership: Option<&LimitMembership>, group_value: &str) -> bool {
    membership
        .and_then(|m| m.get(group_value))
        .is_some_and(|in_limit| !in_limit)
}
