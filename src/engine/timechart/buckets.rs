use crate::engine::errors::TimechartError;

/// Builds bucket start timestamps `start, start + interval, ...` for `[start, end)`.
///
/// The final bucket may be a partial interval that extends past `end` when the
/// range is not a multiple of the interval.
pub fn generate_buckets(
    start: u64,
    end: u64,
    interval_millis: u64,
) -> Result<Vec<u64>, TimechartError> {
    if interval_millis == 0 {
        return Err(TimechartError::ZeroInterval);
    }

    let mut buckets = Vec::new();
    let mut current = start;
    while current < end {
        buckets.push(current);
        let Some(next) = current.checked_add(interval_millis) else {
            break;
        };
        if next > end {
            break;
        }
        current = next;
    }

    Ok(buckets)
}

/// Maps `timestamp` to the start of its enclosing bucket
pub fn locate_bucket(
    buckets: &[u64],
    timestamp: u64,
    interval_millis: u64,
) -> Result<u64, TimechartError> {
    if interval_millis == 0 {
        return Err(TimechartError::ZeroInterval);
    }
    let (Some(&first), Some(&last)) = (buckets.first(), buckets.last()) else {
        return Err(TimechartError::EmptyBuckets);
    };

    let out_of_range = || TimechartError::TimestampOutOfRange {
        timestamp,
        first,
        last_end: last.saturating_add(interval_millis),
    };

    let offset = timestamp.checked_sub(first).ok_or_else(out_of_range)?;
    let index = usize::try_from(offset / interval_millis).map_err(|_| out_of_range())?;
    buckets.get(index).copied().ok_or_else(out_of_range)
}
