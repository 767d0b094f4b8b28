use crate::engine::timechart::diagnostics::{Diagnostic, MergeContext};
use crate::engine::timechart::limit::GroupCounts;
use crate::engine::timechart::measure::{AggregateFunction, MergeKind};
use crate::engine::timechart::sketch::CardinalitySketch;
use crate::engine::timechart::value::CValue;

/// Merges a partial value into `target` in place.
///
/// Count, Sum, Avg, Min, Max and Range partials are added: by the time they
/// reach this layer each one is already a running primitive. Cardinality
/// partials union `incoming_sketch` into `sketch`; while `use_addition_for_merge`
/// is set the scalar is summed, afterwards it is replaced by the union's
/// estimate. Values partials are unioned as distinct strings.
///
/// Failures are reported to the context's sink and leave `target` unchanged.
pub fn merge_scalar<S: CardinalitySketch>(
    target: &mut CValue,
    incoming: &CValue,
    sketch: Option<&mut S>,
    incoming_sketch: Option<&S>,
    func: AggregateFunction,
    use_addition_for_merge: bool,
    ctx: &MergeContext<'_>,
) {
    let reduce_with = match func.merge_kind() {
        MergeKind::Additive => AggregateFunction::Sum,
        MergeKind::StringValued => AggregateFunction::Values,
        MergeKind::Cardinality => match (sketch, incoming_sketch) {
            (Some(sketch), Some(incoming_sketch)) => {
                if let Err(error) = sketch.merge(incoming_sketch) {
                    ctx.sink.report(Diagnostic::SketchMergeFailed { error });
                    return;
                }
                if !use_addition_for_merge {
                    *target = CValue::Unsigned(sketch.estimate());
                    return;
                }
                AggregateFunction::Sum
            }
            _ => AggregateFunction::Sum,
        },
    };

    match ctx.reducer.reduce(incoming, target, reduce_with) {
        Ok(merged) => *target = merged,
        Err(error) => ctx.sink.report(Diagnostic::ReduceFailed { error }),
    }
}

/// Adds `incoming` counts into `target`; keys only in `incoming` are appended.
/// Applying the same `incoming` twice counts it twice.
pub fn merge_count_maps(target: &mut GroupCounts, incoming: &GroupCounts) {
    for (group, cnt) in incoming {
        match target.get_mut(group) {
            Some(existing) => *existing = existing.saturating_add(*cnt),
            None => {
                target.insert(group.clone(), *cnt);
            }
        }
    }
}
