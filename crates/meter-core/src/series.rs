//! Timestamped series storage with windowed views.

use crate::{Error, Result};
use chrono::{DateTime, Utc};

/// A single timestamped reading.
///
/// Immutable once ingested. Ordering follows insertion order, which is the
/// source of truth for time order; duplicate timestamps are permitted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPoint {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
}

impl SeriesPoint {
    pub fn new(timestamp: DateTime<Utc>, value: f64) -> Self {
        Self { timestamp, value }
    }
}

/// Ordered, non-empty buffer of series points.
///
/// Timestamps and values are stored as parallel vectors so detectors can
/// borrow the raw value slice without copying. The buffer is lent immutably
/// to detectors; it is never mutated after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesBuffer {
    timestamps: Vec<DateTime<Utc>>,
    values: Vec<f64>,
}

impl SeriesBuffer {
    /// Build a buffer from points, preserving insertion order.
    ///
    /// Fails with `InvalidInput` if the sequence is empty or any value is
    /// NaN or infinite.
    pub fn new(points: Vec<SeriesPoint>) -> Result<Self> {
        Self::from_pairs(points.into_iter().map(|p| (p.timestamp, p.value)))
    }

    /// Build a buffer from `(timestamp, value)` pairs.
    pub fn from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (DateTime<Utc>, f64)>,
    {
        let mut timestamps = Vec::new();
        let mut values = Vec::new();
        for (ts, v) in pairs {
            if !v.is_finite() {
                return Err(Error::non_finite("series values"));
            }
            timestamps.push(ts);
            values.push(v);
        }
        if values.is_empty() {
            return Err(Error::InvalidInput("series must be non-empty".to_string()));
        }
        Ok(Self { timestamps, values })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false: an empty buffer cannot be constructed.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Raw values in time order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn timestamps(&self) -> &[DateTime<Utc>] {
        &self.timestamps
    }

    /// Contiguous window of values starting at `start`.
    ///
    /// Fails with `InvalidParameter` if the window extends past the end.
    pub fn window(&self, start: usize, len: usize) -> Result<&[f64]> {
        let end = start
            .checked_add(len)
            .filter(|&e| e <= self.values.len())
            .ok_or_else(|| {
                Error::InvalidParameter(format!(
                    "window [{start}, {start}+{len}) out of bounds for series of length {}",
                    self.values.len()
                ))
            })?;
        Ok(&self.values[start..end])
    }

    /// The most recent `len` values (the whole series if shorter).
    pub fn tail(&self, len: usize) -> &[f64] {
        let start = self.values.len().saturating_sub(len);
        &self.values[start..]
    }

    /// Iterate over `(timestamp, value)` pairs in time order.
    pub fn iter(&self) -> impl Iterator<Item = (DateTime<Utc>, f64)> + '_ {
        self.timestamps
            .iter()
            .copied()
            .zip(self.values.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts(i: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_600_000_000 + i * 60, 0).unwrap()
    }

    #[test]
    fn test_construction_preserves_order() {
        let buffer =
            SeriesBuffer::from_pairs((0..5).map(|i| (ts(i), i as f64 * 0.5))).unwrap();
        assert_eq!(buffer.len(), 5);
        assert_eq!(buffer.values(), &[0.0, 0.5, 1.0, 1.5, 2.0]);
        assert_eq!(buffer.timestamps()[0], ts(0));
    }

    #[test]
    fn test_rejects_empty_and_non_finite() {
        assert!(SeriesBuffer::from_pairs(std::iter::empty::<(DateTime<Utc>, f64)>()).is_err());
        assert!(SeriesBuffer::from_pairs(vec![(ts(0), f64::NAN)]).is_err());
        assert!(SeriesBuffer::from_pairs(vec![(ts(0), f64::INFINITY)]).is_err());
    }

    #[test]
    fn test_duplicate_timestamps_kept_in_insertion_order() {
        let buffer =
            SeriesBuffer::from_pairs(vec![(ts(0), 1.0), (ts(0), 2.0), (ts(1), 3.0)]).unwrap();
        assert_eq!(buffer.values(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_window_and_tail() {
        let buffer = SeriesBuffer::from_pairs((0..10).map(|i| (ts(i), i as f64))).unwrap();
        assert_eq!(buffer.window(2, 3).unwrap(), &[2.0, 3.0, 4.0]);
        assert!(buffer.window(8, 3).is_err());
        assert_eq!(buffer.tail(3), &[7.0, 8.0, 9.0]);
        assert_eq!(buffer.tail(100).len(), 10);
    }
}
