//! Spectral-residual transform.
//!
//! The spectral residual of a window is the part of its log-amplitude
//! spectrum not explained by the locally smoothed (expected) spectrum.
//! Recombining that residual with the original phase and transforming back
//! to the time domain yields a saliency map whose large values mark locally
//! anomalous points.

use meter_core::stats;
use rustfft::{num_complex::Complex, FftPlanner};

/// Floor applied to amplitudes before taking logs, so empty frequency bins
/// don't produce infinities.
const LOG_AMPLITUDE_FLOOR: f64 = 1e-8;

/// Computes time-domain saliency maps from the spectral residual.
#[derive(Debug, Clone)]
pub struct SpectralResidual {
    smoothing_width: usize,
}

impl SpectralResidual {
    pub fn new(smoothing_width: usize) -> Self {
        Self { smoothing_width }
    }

    /// Saliency map of `window`, same length as the input.
    ///
    /// Pipeline: FFT, log-amplitude spectrum, local-average smoothing,
    /// residual = log-amplitude − smoothed, recombine `exp(residual)` with
    /// the original phase, inverse FFT, take magnitudes.
    ///
    /// The planner is threaded through by the caller so FFT plans are reused
    /// across the many equal-length windows of a streaming pass.
    pub fn saliency_map(&self, planner: &mut FftPlanner<f64>, window: &[f64]) -> Vec<f64> {
        let n = window.len();
        let mut spectrum: Vec<Complex<f64>> =
            window.iter().map(|&x| Complex::new(x, 0.0)).collect();

        let fft = planner.plan_fft_forward(n);
        fft.process(&mut spectrum);

        let log_amplitude: Vec<f64> = spectrum
            .iter()
            .map(|c| c.norm().max(LOG_AMPLITUDE_FLOOR).ln())
            .collect();
        let expected = stats::moving_average(&log_amplitude, self.smoothing_width);

        for (k, bin) in spectrum.iter_mut().enumerate() {
            let residual = log_amplitude[k] - expected[k];
            *bin = Complex::from_polar(residual.exp(), bin.arg());
        }

        let ifft = planner.plan_fft_inverse(n);
        ifft.process(&mut spectrum);

        let norm = 1.0 / n as f64;
        spectrum.iter().map(|c| c.norm() * norm).collect()
    }
}
