//! Spectral-residual saliency detection.
//!
//! Flags points whose local saliency in the frequency domain exceeds the
//! smoothed background. Unlike the SSA detector there is no training phase:
//! the detector is always ready, and each call is a pure function of the
//! series and parameters.
//!
//! ```rust
//! use meter_core::{Detector, SeriesBuffer};
//! use meter_saliency::SaliencyDetector;
//! use chrono::{TimeZone, Utc};
//!
//! let series = SeriesBuffer::from_pairs((0..60).map(|i| {
//!     let ts = Utc.timestamp_opt(1_600_000_000 + i * 900, 0).unwrap();
//!     (ts, if i == 45 { 9.0 } else { 0.0 })
//! }))
//! .unwrap();
//!
//! let results = SaliencyDetector::default().detect(&series).unwrap();
//! assert!(results[45].is_alert);
//! ```

pub mod detector;
pub mod spectrum;

pub use detector::{SaliencyDetector, SaliencyParameters, MIN_SPECTRUM_LEN};
pub use spectrum::SpectralResidual;
