//! Core traits for anomaly detectors.
//!
//! Both detectors implement the same `Detector` capability over a shared
//! `SeriesBuffer`; there is no inheritance hierarchy. The SSA spike detector
//! additionally has a fit stage that produces an immutable model before it
//! can be used; the saliency detector is stateless and always ready.

use crate::{AnomalyResult, Result, SeriesBuffer};

/// Properties of a detector that don't depend on the input series
pub trait DetectorProperties {
    /// Name of the detection algorithm
    fn algorithm_name(&self) -> &'static str;

    /// Minimum series length required for detection
    fn minimum_sample_size(&self) -> usize;
}

/// Core detection capability.
///
/// Implementations must return exactly one `AnomalyResult` per input point,
/// in input order, with no backtracking: the result at index `i` depends only
/// on points at indices `<= i`. Points that cannot be scored meaningfully yet
/// (warmup) still produce well-formed neutral results so index alignment with
/// the input is preserved.
pub trait Detector: DetectorProperties {
    /// Score every point of the series.
    ///
    /// Fails with `InsufficientData` when the series is shorter than
    /// `minimum_sample_size()`. Repeated calls on the same input are
    /// deterministic; the detector holds no cross-call state beyond a fitted
    /// model.
    fn detect(&self, series: &SeriesBuffer) -> Result<Vec<AnomalyResult>>;
}
