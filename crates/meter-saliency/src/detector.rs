//! Saliency thresholding over the spectral-residual map.

use crate::spectrum::SpectralResidual;
use meter_core::stats;
use meter_core::{AnomalyResult, Detector, DetectorProperties, Error, Result, SeriesBuffer};
use rustfft::FftPlanner;

/// Shortest window a spectrum is computed over.
pub const MIN_SPECTRUM_LEN: usize = 4;

/// Variances below this are treated as degenerate.
const VAR_EPS: f64 = 1e-12;

/// Parameters for spectral-residual saliency detection.
///
/// Defaults mirror the original pipeline's period of 30; the threshold and
/// smoothing width are tunable configuration, not calibrated constants.
#[derive(Debug, Clone, PartialEq)]
pub struct SaliencyParameters {
    /// Trailing window length the spectrum and local statistics are computed over
    pub window: usize,
    /// Width of the local-average filter applied to the log spectrum
    pub smoothing_width: usize,
    /// A point alerts when its saliency exceeds this many local standard
    /// deviations above the trailing average
    pub threshold: f64,
}

impl Default for SaliencyParameters {
    fn default() -> Self {
        Self {
            window: 30,
            smoothing_width: 3,
            threshold: 3.0,
        }
    }
}

impl SaliencyParameters {
    /// Validate every field eagerly, before any computation starts.
    pub fn validate(&self) -> Result<()> {
        if self.window < MIN_SPECTRUM_LEN {
            return Err(Error::InvalidParameter(format!(
                "window = {} must be at least {MIN_SPECTRUM_LEN}",
                self.window
            )));
        }
        if self.smoothing_width == 0 {
            return Err(Error::InvalidParameter(
                "smoothing_width must be positive".to_string(),
            ));
        }
        if !(self.threshold > 0.0 && self.threshold.is_finite()) {
            return Err(Error::InvalidParameter(format!(
                "threshold = {} must be positive and finite",
                self.threshold
            )));
        }
        Ok(())
    }
}

/// Spectral-residual saliency detector.
///
/// Stateless per call: there is no fit stage. Each point is scored from the
/// saliency of its trailing window, so the score at index `i` depends only
/// on points up to `i` (append-only streaming), normalized against
/// the trailing average and standard deviation of recent saliency values.
/// `confidence` is the z-score mapped into `[0, 1]`; larger means more
/// anomalous, unlike the SSA detector's p-value scale.
#[derive(Debug, Clone)]
pub struct SaliencyDetector {
    params: SaliencyParameters,
}

impl Default for SaliencyDetector {
    fn default() -> Self {
        Self::new(SaliencyParameters::default()).expect("default parameters are valid")
    }
}

impl SaliencyDetector {
    pub fn new(params: SaliencyParameters) -> Result<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn parameters(&self) -> &SaliencyParameters {
        &self.params
    }

    /// Saliency of the most recent element of each trailing window.
    fn saliency_series(&self, values: &[f64]) -> Vec<f64> {
        let sr = SpectralResidual::new(self.params.smoothing_width);
        let mut planner = FftPlanner::new();
        let mut saliency = vec![0.0; values.len()];
        for i in 0..values.len() {
            let take = (i + 1).min(self.params.window);
            if take < MIN_SPECTRUM_LEN {
                continue;
            }
            let window = &values[i + 1 - take..=i];
            saliency[i] = sr.saliency_map(&mut planner, window)[take - 1];
        }
        saliency
    }
}

impl DetectorProperties for SaliencyDetector {
    fn algorithm_name(&self) -> &'static str {
        "spectral residual"
    }

    fn minimum_sample_size(&self) -> usize {
        MIN_SPECTRUM_LEN
    }
}

impl Detector for SaliencyDetector {
    fn detect(&self, series: &SeriesBuffer) -> Result<Vec<AnomalyResult>> {
        let values = series.values();
        let n = values.len();
        if n < MIN_SPECTRUM_LEN {
            return Err(Error::InsufficientData {
                expected: MIN_SPECTRUM_LEN,
                actual: n,
            });
        }

        let saliency = self.saliency_series(values);
        let scored_start = MIN_SPECTRUM_LEN - 1;
        let mut results = Vec::with_capacity(n);
        let mut alerts = 0usize;

        for (i, &s) in saliency.iter().enumerate() {
            if i < scored_start {
                results.push(AnomalyResult::neutral(0.0));
                continue;
            }
            // Trailing saliency values, excluding the unscored boundary points.
            let start = i.saturating_sub(self.params.window).max(scored_start);
            let trailing = &saliency[start..i];
            if trailing.len() < MIN_SPECTRUM_LEN {
                // Too little history to normalize against: conservative default.
                results.push(AnomalyResult::new(false, s, 0.0));
                continue;
            }

            let deviation = s - stats::mean(trailing);
            let spread = stats::std_dev(trailing);
            let z = if spread > VAR_EPS {
                deviation / spread
            } else if deviation.abs() > VAR_EPS {
                // Degenerate background with a real excursion: cap instead of
                // propagating an infinite z-score.
                2.0 * self.params.threshold
            } else {
                0.0
            };

            let is_alert = z > self.params.threshold;
            if is_alert {
                alerts += 1;
            }
            let confidence = (z / (2.0 * self.params.threshold)).clamp(0.0, 1.0);
            results.push(AnomalyResult::new(is_alert, s, confidence));
        }

        log::debug!(
            "saliency detect: {n} points, {alerts} alerts at threshold {}",
            self.params.threshold
        );
        Ok(results)
    }
}
