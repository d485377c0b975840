//! SSA-based spike detection with a sequential rank test.

use crate::SsaModel;
use meter_core::stats;
use meter_core::{AnomalyResult, Detector, DetectorProperties, Error, Result, SeriesBuffer};

/// Residuals this close to zero (relative to the observed value) are snapped
/// to exactly zero so constant series stay degenerate instead of amplifying
/// floating-point dust into alerts.
const RESIDUAL_ATOL: f64 = 1e-9;

/// Parameters for SSA spike detection.
///
/// Defaults follow the original pipeline configuration: confidence 95,
/// p-value history 30, training window 70, seasonality window 30.
#[derive(Debug, Clone, PartialEq)]
pub struct SsaParameters {
    /// Number of leading points used to fit the model
    pub training_window: usize,
    /// Lag window length `L` (period scale of the expected seasonality)
    pub seasonal_window: usize,
    /// Maximum number of singular components retained as signal
    pub max_rank: usize,
    /// Alerting confidence in percent, open interval (0, 100)
    pub confidence: f64,
    /// Number of recent residuals ranked against when computing p-values
    pub pvalue_history: usize,
}

impl Default for SsaParameters {
    fn default() -> Self {
        Self {
            training_window: 70,
            seasonal_window: 30,
            max_rank: 4,
            confidence: 95.0,
            pvalue_history: 30,
        }
    }
}

impl SsaParameters {
    /// Validate every field eagerly, before any computation starts.
    pub fn validate(&self) -> Result<()> {
        if self.seasonal_window < 2 {
            return Err(Error::InvalidParameter(format!(
                "seasonal_window = {} must be at least 2",
                self.seasonal_window
            )));
        }
        if self.training_window < self.seasonal_window {
            return Err(Error::InvalidParameter(format!(
                "training_window = {} must be at least seasonal_window = {}",
                self.training_window, self.seasonal_window
            )));
        }
        if self.max_rank == 0 {
            return Err(Error::InvalidParameter("max_rank must be positive".to_string()));
        }
        if !(self.confidence > 0.0 && self.confidence < 100.0) {
            return Err(Error::out_of_range("confidence", self.confidence, 0.0, 100.0));
        }
        if self.pvalue_history < 2 {
            return Err(Error::InvalidParameter(format!(
                "pvalue_history = {} must be at least 2",
                self.pvalue_history
            )));
        }
        Ok(())
    }
}

/// Trend/seasonality-aware spike detector.
///
/// Two-phase: [`fit`](Self::fit) learns an immutable [`SsaModel`] over the
/// training prefix, then [`Detector::detect`] streams the series through it.
/// For each point past the training window the trailing lag window is
/// projected onto the learned subspace; the residual (observed minus
/// reconstruction) is ranked against a rolling history to obtain a two-sided
/// p-value. A point alerts when its p-value falls below `1 - confidence/100`
/// and the history is fully warmed up.
#[derive(Debug, Clone)]
pub struct SsaSpikeDetector {
    model: SsaModel,
    params: SsaParameters,
}

impl SsaSpikeDetector {
    /// Fit a model on the series' training prefix.
    pub fn fit(series: &SeriesBuffer, params: SsaParameters) -> Result<Self> {
        params.validate()?;
        let model = SsaModel::fit(
            series.values(),
            params.training_window,
            params.seasonal_window,
            params.max_rank,
        )?;
        Ok(Self { model, params })
    }

    /// Reconstitute a detector from a previously fitted (possibly
    /// deserialized) model. Behaves identically to the detector that
    /// produced the model, given the same parameters.
    pub fn from_model(model: SsaModel, params: SsaParameters) -> Result<Self> {
        params.validate()?;
        if model.window_len() != params.seasonal_window {
            return Err(Error::InvalidParameter(format!(
                "model window length {} does not match seasonal_window {}",
                model.window_len(),
                params.seasonal_window
            )));
        }
        Ok(Self { model, params })
    }

    pub fn model(&self) -> &SsaModel {
        &self.model
    }

    pub fn parameters(&self) -> &SsaParameters {
        &self.params
    }
}

impl DetectorProperties for SsaSpikeDetector {
    fn algorithm_name(&self) -> &'static str {
        "SSA spike"
    }

    fn minimum_sample_size(&self) -> usize {
        self.model.window_len()
    }
}

impl Detector for SsaSpikeDetector {
    fn detect(&self, series: &SeriesBuffer) -> Result<Vec<AnomalyResult>> {
        let values = series.values();
        let n = values.len();
        let l = self.model.window_len();
        if n < l {
            return Err(Error::InsufficientData {
                expected: l,
                actual: n,
            });
        }

        let alpha = 1.0 - self.params.confidence / 100.0;
        let warmup = self.model.training_len();
        let cap = self.params.pvalue_history;
        let mut history: Vec<f64> = Vec::with_capacity(cap);
        let mut results = Vec::with_capacity(n);
        let mut alerts = 0usize;

        for i in 0..n {
            if i < warmup {
                // Training prefix: aligned neutral result, p-value scale.
                results.push(AnomalyResult::neutral(1.0));
                continue;
            }
            let window = &values[i + 1 - l..=i];
            let observed = values[i];
            let expected = self.model.project_last(window);
            let mut residual = observed - expected;
            if residual.abs() <= RESIDUAL_ATOL * observed.abs().max(1.0) {
                residual = 0.0;
            }

            if history.len() == cap {
                history.remove(0);
            }
            history.push(residual);

            let p = stats::two_sided_p(stats::midrank_fraction(&history, residual));
            let spread = stats::std_dev(&history);
            let raw_score = if spread > f64::EPSILON {
                ((residual - stats::mean(&history)) / spread).abs()
            } else {
                // Degenerate variance: all-equal history scores neutrally.
                0.0
            };

            // Alerts stay suppressed until a full history has been scored
            // before this point, so the first warmup + cap results never fire.
            let is_alert = i >= warmup + cap && p <= alpha;
            if is_alert {
                alerts += 1;
            }
            results.push(AnomalyResult::new(is_alert, raw_score, p));
        }

        log::debug!(
            "SSA detect: {n} points, {alerts} alerts at confidence {}",
            self.params.confidence
        );
        Ok(results)
    }
}
