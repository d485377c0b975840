//! Loading the meter table into a series buffer.

use crate::schema::ColumnSchema;
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use meter_core::{Error, Result, SeriesBuffer};
use std::fs::File;
use std::io;
use std::path::Path;

/// Accepted timestamp layouts, tried in order after RFC 3339.
const TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

fn parse_timestamp(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in TIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(Utc.from_utc_datetime(&naive));
        }
    }
    None
}

/// Read meter records from any CSV source, in file order.
pub fn read_meter_records<R: io::Read>(reader: R) -> Result<SeriesBuffer> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| Error::InvalidInput(format!("unreadable CSV header: {e}")))?
        .clone();
    let schema = ColumnSchema::resolve(&headers)?;

    let mut pairs = Vec::new();
    for (row, record) in csv_reader.records().enumerate() {
        let record =
            record.map_err(|e| Error::InvalidInput(format!("row {}: {e}", row + 2)))?;
        let time_text = record.get(schema.time).unwrap_or_default();
        let timestamp = parse_timestamp(time_text).ok_or_else(|| {
            Error::InvalidInput(format!("row {}: unparsable timestamp '{time_text}'", row + 2))
        })?;
        let value_text = record.get(schema.value).unwrap_or_default();
        let value: f64 = value_text.parse().map_err(|_| {
            Error::InvalidInput(format!("row {}: unparsable value '{value_text}'", row + 2))
        })?;
        pairs.push((timestamp, value));
    }
    log::debug!("loaded {} meter readings", pairs.len());
    SeriesBuffer::from_pairs(pairs)
}

/// Read meter records from a CSV file on disk.
pub fn read_meter_csv<P: AsRef<Path>>(path: P) -> Result<SeriesBuffer> {
    read_meter_records(File::open(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Name,ConsumptionTime,ConsumptionDiffNormalized
meter-1,2021-03-01 00:15:00,0.0125
meter-1,2021-03-01 00:30:00,0.0143
meter-1,2021-03-01T00:45:00,0.9812
";

    #[test]
    fn test_reads_ordered_series() {
        let series = read_meter_records(SAMPLE.as_bytes()).unwrap();
        assert_eq!(series.len(), 3);
        assert_eq!(series.values(), &[0.0125, 0.0143, 0.9812]);
        assert!(series.timestamps()[0] < series.timestamps()[1]);
    }

    #[test]
    fn test_bad_timestamp_carries_row_context() {
        let data = "\
Name,ConsumptionTime,ConsumptionDiffNormalized
meter-1,not-a-date,0.5
";
        let err = read_meter_records(data.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("row 2"));
        assert!(err.to_string().contains("not-a-date"));
    }

    #[test]
    fn test_bad_value_rejected() {
        let data = "\
Name,ConsumptionTime,ConsumptionDiffNormalized
meter-1,2021-03-01 00:15:00,oops
";
        let err = read_meter_records(data.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("oops"));
    }

    #[test]
    fn test_missing_column_fails_before_parsing() {
        let data = "Name,Time,Value\nmeter-1,2021-03-01 00:15:00,0.5\n";
        assert!(matches!(
            read_meter_records(data.as_bytes()),
            Err(Error::InvalidInput(_))
        ));
    }
}
