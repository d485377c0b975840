//! Per-point detection results.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Verdict for a single input point.
///
/// Detectors produce exactly one result per input point, in input order.
/// The `confidence` scale is detector-specific: the SSA spike detector emits
/// a two-sided rank p-value (smaller means more anomalous), while the
/// saliency detector emits a bounded probability-like score (larger means
/// more anomalous). Callers must not compare the two scales directly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnomalyResult {
    /// Whether this point crossed the detector's alerting threshold
    pub is_alert: bool,
    /// Magnitude of the anomaly (standardized residual or saliency); always finite
    pub raw_score: f64,
    /// Detector-specific statistical confidence; always finite
    pub confidence: f64,
}

impl AnomalyResult {
    pub fn new(is_alert: bool, raw_score: f64, confidence: f64) -> Self {
        Self {
            is_alert,
            raw_score,
            confidence,
        }
    }

    /// Non-alerting placeholder for points that cannot be scored yet.
    ///
    /// `confidence` is the detector's neutral value on its own scale
    /// (1.0 for a p-value scale, 0.0 for a saliency scale).
    pub fn neutral(confidence: f64) -> Self {
        Self {
            is_alert: false,
            raw_score: 0.0,
            confidence,
        }
    }
}

impl fmt::Display for AnomalyResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{:.4}\t{:.4}",
            u8::from(self.is_alert),
            self.raw_score,
            self.confidence
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_is_non_alerting() {
        let r = AnomalyResult::neutral(1.0);
        assert!(!r.is_alert);
        assert_eq!(r.raw_score, 0.0);
        assert_eq!(r.confidence, 1.0);
    }

    #[test]
    fn test_display_format() {
        let r = AnomalyResult::new(true, 5.25, 0.0125);
        assert_eq!(r.to_string(), "1\t5.2500\t0.0125");
    }
}
