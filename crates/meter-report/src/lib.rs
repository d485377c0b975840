//! Detection report aggregation.
//!
//! Zips detector outputs with the original timestamps and raw values into
//! uniform records ready for external formatting, and provides the single
//! combination point for running both detectors over one series.

pub mod report;
pub mod run;

pub use report::{DetectionReport, ReportRow};
pub use run::{detect_both, report_both};
