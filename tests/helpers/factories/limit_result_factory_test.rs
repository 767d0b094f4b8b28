use crate::engine::timechart::value::CValue;
use crate::test_helpers::factories::LimitResultFactory;

#[test]
fn builds_limit_result_with_counts_and_scores() {
    let lr = LimitResultFactory::new()
        .with_columns(3)
        .with_counts(&[("a", 2), ("b", 1)])
        .with_scores(&[("a", CValue::Signed(7))])
        .create();
    assert_eq!(lr.group_value_count.get("a"), Some(&2));
    assert_eq!(lr.group_value_count.get("b"), Some(&1));
    assert_eq!(
        lr.group_score_map.as_ref().and_then(|m| m.get("a")),
        Some(&CValue::Signed(7))
    );
    assert!(lr.other_values.is_none());
    assert!(!lr.is_classified());
}

#[test]
fn factory_entry_point_builds_the_same_defaults() {
    use crate::test_helpers::factory::Factory;

    let lr = Factory::limit_result().create();
    assert!(lr.group_value_count.is_empty());
    assert!(lr.group_score_map.is_none());
    assert_eq!(lr.blank_sketch().precision(), 10);
    assert!(lr.other_sketch(0).is_none());

    let tc = Factory::timechart().create();
    assert_eq!(tc.by_field, "host");
    assert_eq!(Factory::measure().create().measure_column, "latency");
    assert!(Factory::sketch().create().is_empty());
}
