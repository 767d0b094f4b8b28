use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::engine::errors::TimechartError;
use crate::engine::timechart::measure::AggregateFunction;

/// Scalar aggregate state exchanged between shards
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CValue {
    /// Placeholder for a slot that has not received a value yet
    #[default]
    Invalid,
    Signed(i64),
    Unsigned(u64),
    Float(f64),
    Str(String),
    /// Distinct string values, kept sorted
    List(Vec<String>),
}

impl CValue {
    pub fn is_invalid(&self) -> bool {
        matches!(self, CValue::Invalid)
    }

    pub fn dtype(&self) -> &'static str {
        match self {
            CValue::Invalid => "invalid",
            CValue::Signed(_) => "signed",
            CValue::Unsigned(_) => "unsigned",
            CValue::Float(_) => "float",
            CValue::Str(_) => "string",
            CValue::List(_) => "list",
        }
    }

    /// Reads the value as a float, used for ranking groups by score
    pub fn as_f64(&self) -> Result<f64, TimechartError> {
        match self {
            CValue::Signed(v) => Ok(*v as f64),
            CValue::Unsigned(v) => Ok(*v as f64),
            CValue::Float(v) => Ok(*v),
            CValue::Str(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| TimechartError::NotNumeric(s.clone())),
            CValue::Invalid | CValue::List(_) => {
                Err(TimechartError::NotNumeric(self.dtype().to_string()))
            }
        }
    }

    fn is_numeric(&self) -> bool {
        matches!(
            self,
            CValue::Signed(_) | CValue::Unsigned(_) | CValue::Float(_)
        )
    }
}

/// Reduces two scalar partials under an aggregate function
pub trait Reducer {
    fn reduce(
        &self,
        left: &CValue,
        right: &CValue,
        func: AggregateFunction,
    ) -> Result<CValue, TimechartError>;
}

/// Default reducer over `CValue`
#[derive(Debug, Clone, Copy, Default)]
pub struct ScalarReducer;

impl Reducer for ScalarReducer {
    fn reduce(
        &self,
        left: &CValue,
        right: &CValue,
        func: AggregateFunction,
    ) -> Result<CValue, TimechartError> {
        match func {
            AggregateFunction::Count | AggregateFunction::Sum => add(left, right, func),
            AggregateFunction::Min => pick(left, right, func, Ordering::Less),
            AggregateFunction::Max => pick(left, right, func, Ordering::Greater),
            AggregateFunction::Values => union(left, right, func),
            AggregateFunction::Avg | AggregateFunction::Range | AggregateFunction::Cardinality => {
                Err(TimechartError::UnsupportedReduce(func.to_string()))
            }
        }
    }
}

fn mismatch(left: &CValue, right: &CValue, func: AggregateFunction) -> TimechartError {
    TimechartError::TypeMismatch {
        left: left.dtype().to_string(),
        right: right.dtype().to_string(),
        func: func.to_string(),
    }
}

fn add(left: &CValue, right: &CValue, func: AggregateFunction) -> Result<CValue, TimechartError> {
    let out = match (left, right) {
        (CValue::Invalid, other) | (other, CValue::Invalid) if other.is_numeric() => other.clone(),
        (CValue::Invalid, CValue::Invalid) => CValue::Invalid,
        (CValue::Signed(a), CValue::Signed(b)) => a
            .checked_add(*b)
            .map(CValue::Signed)
            .unwrap_or(CValue::Float(*a as f64 + *b as f64)),
        (CValue::Unsigned(a), CValue::Unsigned(b)) => a
            .checked_add(*b)
            .map(CValue::Unsigned)
            .unwrap_or(CValue::Float(*a as f64 + *b as f64)),
        (CValue::Signed(s), CValue::Unsigned(u)) | (CValue::Unsigned(u), CValue::Signed(s)) => {
            i64::try_from(*u)
                .ok()
                .and_then(|u| s.checked_add(u))
                .map(CValue::Signed)
                .unwrap_or(CValue::Float(*s as f64 + *u as f64))
        }
        (a, b) if a.is_numeric() && b.is_numeric() => CValue::Float(a.as_f64()? + b.as_f64()?),
        _ => return Err(mismatch(left, right, func)),
    };
    Ok(out)
}

fn pick(
    left: &CValue,
    right: &CValue,
    func: AggregateFunction,
    wanted: Ordering,
) -> Result<CValue, TimechartError> {
    match (left, right) {
        (CValue::Invalid, other) | (other, CValue::Invalid) => Ok(other.clone()),
        (CValue::Str(a), CValue::Str(b)) => {
            if b.cmp(a) == wanted {
                Ok(right.clone())
            } else {
                Ok(left.clone())
            }
        }
        (a, b) if a.is_numeric() && b.is_numeric() => {
            if b.as_f64()?.total_cmp(&a.as_f64()?) == wanted {
                Ok(right.clone())
            } else {
                Ok(left.clone())
            }
        }
        _ => Err(mismatch(left, right, func)),
    }
}

fn union(left: &CValue, right: &CValue, func: AggregateFunction) -> Result<CValue, TimechartError> {
    let mut set = BTreeSet::new();
    for v in [left, right] {
        match v {
            CValue::Invalid => {}
            CValue::Str(s) => {
                set.insert(s.clone());
            }
            CValue::List(items) => set.extend(items.iter().cloned()),
            _ => return Err(mismatch(left, right, func)),
        }
    }
    if set.is_empty() {
        return Ok(CValue::Invalid);
    }
    Ok(CValue::List(set.into_iter().collect()))
}
