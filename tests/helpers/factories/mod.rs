pub mod limit_result_factory;
pub mod measure_factory;
pub mod sketch_factory;
pub mod timechart_factory;

pub use limit_result_factory::LimitResultFactory;
pub use measure_factory::MeasureFactory;
pub use sketch_factory::SketchFactory;
pub use timechart_factory::TimechartFactory;

#[cfg(test)]
mod limit_result_factory_test;
#[cfg(test)]
mod sketch_factory_test;
#[cfg(test)]
mod timechart_factory_test;
