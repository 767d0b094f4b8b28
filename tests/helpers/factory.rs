pub use super::factories::{LimitResultFactory, MeasureFactory, SketchFactory, TimechartFactory};

pub struct Factory;

impl Factory {
    pub fn limit_result() -> LimitResultFactory {
        LimitResultFactory::new()
    }

    pub fn timechart() -> TimechartFactory {
        TimechartFactory::new()
    }

    pub fn measure() -> MeasureFactory {
        MeasureFactory::new()
    }

    pub fn sketch() -> SketchFactory {
        SketchFactory::new()
    }
}
