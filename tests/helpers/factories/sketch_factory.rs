use crate::engine::timechart::sketch::HyperLogLog;

pub struct SketchFactory {
    precision: u8,
    values: Vec<String>,
}

impl SketchFactory {
    pub fn new() -> Self {
        Self {
            precision: 10,
            values: Vec::new(),
        }
    }

    pub fn with_precision(mut self, precision: u8) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_values(mut self, values: &[&str]) -> Self {
        self.values.extend(values.iter().map(|v| v.to_string()));
        self
    }

    /// Adds `prefix0 .. prefix{n-1}`
    pub fn with_range(mut self, prefix: &str, range: std::ops::Range<u32>) -> Self {
        self.values.extend(range.map(|i| format!("{}{}", prefix, i)));
        self
    }

    pub fn create(self) -> HyperLogLog {
        let mut hll = HyperLogLog::new(self.precision).unwrap();
        for v in &self.values {
            hll.insert(v.as_str());
        }
        hll
    }
}
