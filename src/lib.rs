//! Anomaly detection for utility-meter consumption series.
//!
//! Two independent detectors over the same timestamped series of consumption
//! deltas, each producing one `(alert, score, confidence)` triple per input
//! point:
//!
//! - [`SsaSpikeDetector`]: fits a low-rank singular-spectrum model over a
//!   training window, then flags points whose projection residual is an
//!   extreme outlier (rank p-value) relative to recent history.
//! - [`SaliencyDetector`]: flags points whose spectral-residual saliency
//!   exceeds the smoothed local background.
//!
//! [`DetectionReport`] zips either output with timestamps and raw values for
//! downstream formatting, and `meter_io` handles the CSV/TSV boundary.

pub use meter_core::{
    AnomalyResult, Detector, DetectorProperties, Error, Result, SeriesBuffer, SeriesPoint,
};
pub use meter_report::{detect_both, report_both, DetectionReport, ReportRow};
pub use meter_saliency::{SaliencyDetector, SaliencyParameters};
pub use meter_ssa::{SsaModel, SsaParameters, SsaSpikeDetector};

pub use meter_io as io;
pub use meter_report as report;
pub use meter_saliency as saliency;
pub use meter_ssa as ssa;
