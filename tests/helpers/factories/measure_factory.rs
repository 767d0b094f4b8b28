use crate::engine::timechart::measure::{AggregateFunction, MeasureAggregator};

pub struct MeasureFactory {
    column: String,
    function: AggregateFunction,
    str_enc: Option<String>,
}

impl MeasureFactory {
    pub fn new() -> Self {
        Self {
            column: "latency".to_string(),
            function: AggregateFunction::Sum,
            str_enc: None,
        }
    }

    pub fn with_column(mut self, column: &str) -> Self {
        self.column = column.to_string();
        self
    }

    pub fn with_function(mut self, function: AggregateFunction) -> Self {
        self.function = function;
        self
    }

    pub fn with_str_enc(mut self, str_enc: &str) -> Self {
        self.str_enc = Some(str_enc.to_string());
        self
    }

    pub fn avg(column: &str) -> MeasureAggregator {
        Self::new()
            .with_column(column)
            .with_function(AggregateFunction::Avg)
            .create()
    }

    pub fn count(column: &str) -> MeasureAggregator {
        Self::new()
            .with_column(column)
            .with_function(AggregateFunction::Count)
            .create()
    }

    pub fn create(self) -> MeasureAggregator {
        MeasureAggregator {
            measure_column: self.column,
            function: self.function,
            str_enc: self.str_enc,
        }
    }
}
