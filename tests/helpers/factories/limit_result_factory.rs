use crate::engine::timechart::limit::{GroupCounts, GroupScores};
use crate::engine::timechart::limit_result::LimitResult;
use crate::engine::timechart::sketch::HyperLogLog;
use crate::engine::timechart::value::CValue;

pub struct LimitResultFactory {
    num_columns: usize,
    counts: GroupCounts,
    scores: Option<GroupScores>,
    precision: u8,
    max_groups: Option<usize>,
}

impl LimitResultFactory {
    pub fn new() -> Self {
        Self {
            num_columns: 1,
            counts: GroupCounts::new(),
            scores: None,
            precision: 10,
            max_groups: None,
        }
    }

    pub fn with_columns(mut self, num_columns: usize) -> Self {
        self.num_columns = num_columns;
        self
    }

    pub fn with_counts(mut self, counts: &[(&str, u64)]) -> Self {
        for (group, cnt) in counts {
            self.counts.insert(group.to_string(), *cnt);
        }
        self
    }

    pub fn with_scores(mut self, scores: &[(&str, CValue)]) -> Self {
        let map = self.scores.get_or_insert_with(GroupScores::new);
        for (group, score) in scores {
            map.insert(group.to_string(), score.clone());
        }
        self
    }

    pub fn with_precision(mut self, precision: u8) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_group_cap(mut self, max_groups: usize) -> Self {
        self.max_groups = Some(max_groups);
        self
    }

    pub fn create(self) -> LimitResult<HyperLogLog> {
        let sketch = HyperLogLog::new(self.precision).unwrap();
        let mut result =
            LimitResult::new(self.num_columns, sketch).with_group_cap(self.max_groups);
        result.group_value_count = self.counts;
        result.group_score_map = self.scores;
        result
    }
}
