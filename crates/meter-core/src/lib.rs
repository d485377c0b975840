//! Core types and traits for meter anomaly detection.
//!
//! This crate holds the pieces shared by every detector:
//! - [`SeriesBuffer`]: the ordered, timestamped input series
//! - [`AnomalyResult`]: the per-point `(alert, score, confidence)` triple
//! - [`Detector`] / [`DetectorProperties`]: the capability both detectors implement
//! - [`Error`] / [`Result`]: the unified error type
//! - `stats`: small rolling-statistics helpers

pub mod error;
pub mod series;
pub mod stats;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
pub use series::{SeriesBuffer, SeriesPoint};
pub use traits::{Detector, DetectorProperties};
pub use types::AnomalyResult;
