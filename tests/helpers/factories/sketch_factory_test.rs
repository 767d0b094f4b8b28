use crate::engine::timechart::sketch::CardinalitySketch;
use crate::test_helpers::factories::SketchFactory;

#[test]
fn builds_sketch_from_values() {
    let mut hll = SketchFactory::new()
        .with_precision(12)
        .with_values(&["a", "b", "a"])
        .create();
    assert_eq!(hll.precision(), 12);
    assert_eq!(hll.estimate(), 2);
}
