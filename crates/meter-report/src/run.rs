//! Running the two detectors over one series.
//!
//! The detectors share no mutable state, so the pair may run as independent
//! parallel tasks; combining their outputs is the only join point. Each
//! detector's failure is reported separately so the caller can degrade
//! gracefully (report one detector's results when the other fails).

use crate::DetectionReport;
use meter_core::{AnomalyResult, Detector, Result, SeriesBuffer};

/// Run both detectors over the same series.
///
/// With the `parallel` feature the detectors run on a rayon join; otherwise
/// sequentially. Outputs are index-aligned with the input by the detector
/// contract.
pub fn detect_both<A, B>(
    series: &SeriesBuffer,
    first: &A,
    second: &B,
) -> (Result<Vec<AnomalyResult>>, Result<Vec<AnomalyResult>>)
where
    A: Detector + Sync,
    B: Detector + Sync,
{
    #[cfg(feature = "parallel")]
    {
        rayon::join(|| first.detect(series), || second.detect(series))
    }
    #[cfg(not(feature = "parallel"))]
    {
        (first.detect(series), second.detect(series))
    }
}

/// Run both detectors and zip each output into a [`DetectionReport`].
///
/// Fails if either detector fails; use [`detect_both`] directly for
/// per-detector degradation.
pub fn report_both<A, B>(
    series: &SeriesBuffer,
    first: &A,
    second: &B,
) -> Result<(DetectionReport, DetectionReport)>
where
    A: Detector + Sync,
    B: Detector + Sync,
{
    let (a, b) = detect_both(series, first, second);
    Ok((
        DetectionReport::new(series, first.algorithm_name(), a?)?,
        DetectionReport::new(series, second.algorithm_name(), b?)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use meter_saliency::SaliencyDetector;
    use meter_ssa::{SsaParameters, SsaSpikeDetector};

    fn spiked_series() -> SeriesBuffer {
        SeriesBuffer::from_pairs((0..100).map(|i| {
            let ts = Utc.timestamp_opt(1_600_000_000 + i * 900, 0).unwrap();
            (ts, if i == 90 { 500.0 } else { 0.0 })
        }))
        .unwrap()
    }

    #[test]
    fn test_both_reports_are_aligned() {
        let series = spiked_series();
        let ssa = SsaSpikeDetector::fit(
            &series,
            SsaParameters {
                training_window: 50,
                seasonal_window: 20,
                ..Default::default()
            },
        )
        .unwrap();
        let saliency = SaliencyDetector::default();

        let (spike_report, saliency_report) = report_both(&series, &ssa, &saliency).unwrap();
        assert_eq!(spike_report.len(), series.len());
        assert_eq!(saliency_report.len(), series.len());
        assert!(spike_report.rows()[90].result.is_alert);
        assert!(saliency_report.rows()[90].result.is_alert);
    }

    #[test]
    fn test_failures_surface_per_detector() {
        let series = spiked_series();
        let long = SsaSpikeDetector::fit(
            &series,
            SsaParameters {
                training_window: 50,
                seasonal_window: 20,
                ..Default::default()
            },
        )
        .unwrap();
        let saliency = SaliencyDetector::default();

        let tiny = SeriesBuffer::from_pairs((0..5).map(|i| {
            (Utc.timestamp_opt(1_600_000_000 + i, 0).unwrap(), 0.0)
        }))
        .unwrap();

        // SSA needs 20 points here; the saliency detector only needs 4.
        let (spike, saliency_out) = detect_both(&tiny, &long, &saliency);
        assert!(spike.is_err());
        assert_eq!(saliency_out.unwrap().len(), 5);
    }
}
