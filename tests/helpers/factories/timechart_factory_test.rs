use crate::engine::timechart::config::{LimitDirection, ScoreMode};
use crate::test_helpers::factories::TimechartFactory;

#[test]
fn builds_top_by_sum_timechart() {
    let tc = TimechartFactory::top_by_sum(3);
    assert_eq!(tc.by_field, "host");
    let limit = tc.limit.unwrap();
    assert_eq!(limit.direction, LimitDirection::Top);
    assert_eq!(limit.count, 3);
    assert_eq!(limit.score_mode, ScoreMode::BySum);
}

#[test]
fn builds_timechart_without_limit() {
    let tc = TimechartFactory::new().with_by_field("region").create();
    assert_eq!(tc.by_field, "region");
    assert!(tc.limit.is_none());
}
