//! SSA-based spike detection.
//!
//! Singular-spectrum analysis separates a series' trend and seasonal
//! structure from noise by decomposing a trajectory matrix of lagged
//! windows. The [`SsaSpikeDetector`] fits that decomposition once over a
//! training prefix ([`SsaModel`]), then scores every subsequent point by the
//! rank of its projection residual within a rolling history.
//!
//! ```rust
//! use meter_core::{Detector, SeriesBuffer};
//! use meter_ssa::{SsaParameters, SsaSpikeDetector};
//! use chrono::{TimeZone, Utc};
//!
//! let series = SeriesBuffer::from_pairs((0..120).map(|i| {
//!     let ts = Utc.timestamp_opt(1_600_000_000 + i * 900, 0).unwrap();
//!     (ts, (i as f64 / 12.0).sin())
//! }))
//! .unwrap();
//!
//! let detector = SsaSpikeDetector::fit(&series, SsaParameters::default()).unwrap();
//! let results = detector.detect(&series).unwrap();
//! assert_eq!(results.len(), series.len());
//! ```

pub mod detector;
pub mod model;

pub use detector::{SsaParameters, SsaSpikeDetector};
pub use model::SsaModel;
