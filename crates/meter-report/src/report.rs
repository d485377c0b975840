//! Read-only zip of series points with detector verdicts.

use chrono::{DateTime, Utc};
use meter_core::{AnomalyResult, Error, Result, SeriesBuffer};
use std::fmt;

/// One output record: `(timestamp, raw value, verdict)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportRow {
    pub timestamp: DateTime<Utc>,
    pub value: f64,
    pub result: AnomalyResult,
}

/// Per-detector detection report.
///
/// Pure aggregation: zips the original `(timestamp, value)` pairs with a
/// detector's result sequence. Construction fails with `MisalignedLength`
/// if the detector ever returned a sequence of a different length than the
/// input; that is an internal-consistency check, never expected to trigger
/// for a correct detector.
#[derive(Debug, Clone)]
pub struct DetectionReport {
    algorithm: String,
    rows: Vec<ReportRow>,
}

impl DetectionReport {
    pub fn new(
        series: &SeriesBuffer,
        algorithm: impl Into<String>,
        results: Vec<AnomalyResult>,
    ) -> Result<Self> {
        if results.len() != series.len() {
            return Err(Error::MisalignedLength {
                expected: series.len(),
                actual: results.len(),
            });
        }
        let rows = series
            .iter()
            .zip(results)
            .map(|((timestamp, value), result)| ReportRow {
                timestamp,
                value,
                result,
            })
            .collect();
        Ok(Self {
            algorithm: algorithm.into(),
            rows,
        })
    }

    /// Name of the detector that produced these results.
    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows flagged as alerts, in time order.
    pub fn alerts(&self) -> impl Iterator<Item = &ReportRow> {
        self.rows.iter().filter(|row| row.result.is_alert)
    }

    pub fn alert_count(&self) -> usize {
        self.alerts().count()
    }
}

impl fmt::Display for DetectionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "====== {} anomalies ======", self.algorithm)?;
        writeln!(f, "Date\tReadingDiff\tAlert\tScore\tP-Value")?;
        for row in &self.rows {
            writeln!(
                f,
                "{}\t{:.4}\t{}",
                row.timestamp.format("%Y-%m-%d %H:%M:%S"),
                row.value,
                row.result
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn series(n: usize) -> SeriesBuffer {
        SeriesBuffer::from_pairs((0..n).map(|i| {
            (
                Utc.timestamp_opt(1_600_000_000 + i as i64 * 60, 0).unwrap(),
                i as f64,
            )
        }))
        .unwrap()
    }

    #[test]
    fn test_zip_preserves_order_and_length() {
        let buffer = series(5);
        let results: Vec<AnomalyResult> = (0..5)
            .map(|i| AnomalyResult::new(i == 3, i as f64, 1.0))
            .collect();
        let report = DetectionReport::new(&buffer, "SSA spike", results).unwrap();

        assert_eq!(report.len(), 5);
        assert_eq!(report.algorithm(), "SSA spike");
        assert_eq!(report.rows()[2].value, 2.0);
        assert_eq!(report.alert_count(), 1);
        assert_eq!(report.alerts().next().unwrap().value, 3.0);
    }

    #[test]
    fn test_misaligned_lengths_rejected() {
        let buffer = series(5);
        let results = vec![AnomalyResult::neutral(1.0); 4];
        assert!(matches!(
            DetectionReport::new(&buffer, "SSA spike", results),
            Err(Error::MisalignedLength { expected: 5, actual: 4 })
        ));
    }

    #[test]
    fn test_display_is_tab_separated() {
        let buffer = series(2);
        let results = vec![AnomalyResult::neutral(1.0); 2];
        let report = DetectionReport::new(&buffer, "spectral residual", results).unwrap();
        let text = report.to_string();
        assert!(text.contains("Date\tReadingDiff\tAlert\tScore\tP-Value"));
        assert!(text.lines().count() >= 4);
    }
}
