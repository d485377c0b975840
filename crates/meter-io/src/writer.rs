//! Report rendering: tab-separated files and plain console output.
//!
//! Coloring stays with the caller; alert rows are marked with a textual
//! prefix so the output is grep-able as-is.

use meter_report::DetectionReport;
use meter_core::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const HEADER: &str = "Date\tReadingDiff\tAlert\tScore\tP-Value";

/// Write a report as tab-separated values, one row per input point.
pub fn write_report_tsv<W: Write>(report: &DetectionReport, mut writer: W) -> Result<()> {
    writeln!(writer, "{HEADER}")?;
    for row in report.rows() {
        writeln!(
            writer,
            "{}\t{:.4}\t{}",
            row.timestamp.format("%Y-%m-%d %H:%M:%S"),
            row.value,
            row.result
        )?;
    }
    writer.flush()?;
    Ok(())
}

/// Write a report to a TSV file on disk.
pub fn save_report_tsv<P: AsRef<Path>>(report: &DetectionReport, path: P) -> Result<()> {
    write_report_tsv(report, BufWriter::new(File::create(path)?))
}

/// Render a report for the console, marking alert rows.
pub fn render_report<W: Write>(report: &DetectionReport, mut writer: W) -> Result<()> {
    writeln!(
        writer,
        "====== {} anomalies ({} alerts) ======",
        report.algorithm(),
        report.alert_count()
    )?;
    writeln!(writer, "{HEADER}")?;
    for row in report.rows() {
        let marker = if row.result.is_alert { ">>> " } else { "    " };
        writeln!(
            writer,
            "{marker}{}\t{:.4}\t{}",
            row.timestamp.format("%Y-%m-%d %H:%M:%S"),
            row.value,
            row.result
        )?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use meter_core::{AnomalyResult, SeriesBuffer};

    fn sample_report() -> DetectionReport {
        let series = SeriesBuffer::from_pairs((0..3).map(|i| {
            (
                Utc.timestamp_opt(1_614_556_800 + i * 900, 0).unwrap(),
                0.01 * i as f64,
            )
        }))
        .unwrap();
        let results = vec![
            AnomalyResult::neutral(1.0),
            AnomalyResult::new(true, 6.2, 0.004),
            AnomalyResult::neutral(1.0),
        ];
        DetectionReport::new(&series, "SSA spike", results).unwrap()
    }

    #[test]
    fn test_tsv_layout() {
        let mut out = Vec::new();
        write_report_tsv(&sample_report(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next().unwrap(), HEADER);
        assert_eq!(text.lines().count(), 4);
        assert!(text.contains("1\t6.2000\t0.0040"));
    }

    #[test]
    fn test_console_marks_alert_rows() {
        let mut out = Vec::new();
        render_report(&sample_report(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("(1 alerts)"));
        assert_eq!(text.matches(">>> ").count(), 1);
    }
}
