//! Low-rank trajectory-matrix model fitted over a training window.

use meter_core::{Error, Result};
use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

/// Relative cutoff below which a singular component is treated as noise.
const SINGULAR_VALUE_RTOL: f64 = 1e-9;

/// Signal subspace learned from a training window.
///
/// Contains the lag window length `L`, the training length the model was
/// fitted on, and the retained right singular vectors of the trajectory
/// matrix (the projection basis, stored row-major as `rank` rows of length
/// `L`). Immutable after fit; a re-fit replaces the model wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SsaModel {
    window_len: usize,
    training_len: usize,
    rank: usize,
    basis: Vec<f64>,
}

impl SsaModel {
    /// Fit a model on the first `training_len` values.
    ///
    /// Builds the `(training_len - window_len + 1) x window_len` trajectory
    /// matrix of sliding sub-sequences, decomposes it, and retains up to
    /// `max_rank` components ordered by singular value. Components whose
    /// singular value is negligible relative to the largest are discarded;
    /// a zero-energy training window therefore yields an empty basis that
    /// projects every window to zero.
    ///
    /// Fails with `InvalidParameter` when `window_len` is below 2 or longer
    /// than `training_len`.
    pub fn fit(values: &[f64], training_len: usize, window_len: usize, max_rank: usize) -> Result<Self> {
        if window_len < 2 {
            return Err(Error::InvalidParameter(format!(
                "window_len = {window_len}, must be at least 2"
            )));
        }
        if training_len < window_len {
            return Err(Error::InvalidParameter(format!(
                "training_len = {training_len} shorter than window_len = {window_len}"
            )));
        }
        if values.len() < training_len {
            return Err(Error::InsufficientData {
                expected: training_len,
                actual: values.len(),
            });
        }
        let training = &values[..training_len];
        let k = training_len - window_len + 1;
        let trajectory = DMatrix::from_fn(k, window_len, |i, j| training[i + j]);

        let svd = trajectory.svd(false, true);
        let v_t = svd
            .v_t
            .ok_or_else(|| Error::Computation("SVD did not produce right singular vectors".to_string()))?;

        // Order components by singular value; nalgebra does not guarantee it.
        let mut order: Vec<usize> = (0..svd.singular_values.len()).collect();
        order.sort_by(|&a, &b| {
            svd.singular_values[b]
                .partial_cmp(&svd.singular_values[a])
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let sigma_max = order
            .first()
            .map(|&i| svd.singular_values[i])
            .unwrap_or(0.0);
        let cutoff = (sigma_max * SINGULAR_VALUE_RTOL).max(f64::MIN_POSITIVE);

        let mut basis = Vec::new();
        let mut rank = 0;
        for &idx in order.iter().take(max_rank) {
            if svd.singular_values[idx] <= cutoff {
                break;
            }
            basis.extend(v_t.row(idx).iter().copied());
            rank += 1;
        }
        log::debug!(
            "SSA fit: retained {rank} of {} components (L = {window_len}, K = {k})",
            svd.singular_values.len()
        );

        Ok(Self {
            window_len,
            training_len,
            rank,
            basis,
        })
    }

    /// Lag window length `L`.
    pub fn window_len(&self) -> usize {
        self.window_len
    }

    /// Number of training points the model was fitted on.
    pub fn training_len(&self) -> usize {
        self.training_len
    }

    /// Number of retained singular components.
    pub fn rank(&self) -> usize {
        self.rank
    }

    /// Reconstructed last coordinate of `window` after projection onto the
    /// signal subspace.
    ///
    /// `window` must have length `window_len`. With an empty basis the
    /// projection is the zero vector and the expected value is 0.
    pub fn project_last(&self, window: &[f64]) -> f64 {
        debug_assert_eq!(window.len(), self.window_len);
        let l = self.window_len;
        let mut expected = 0.0;
        for row in self.basis.chunks_exact(l) {
            let coef: f64 = row.iter().zip(window).map(|(b, w)| b * w).sum();
            expected += coef * row[l - 1];
        }
        expected
    }

    /// Encode the model as self-describing bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self).map_err(|e| Error::Serialization(e.to_string()))
    }

    /// Decode a model previously produced by [`to_bytes`](Self::to_bytes).
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let model: Self =
            serde_json::from_slice(bytes).map_err(|e| Error::Serialization(e.to_string()))?;
        if model.basis.len() != model.rank * model.window_len || model.window_len == 0 {
            return Err(Error::Serialization(
                "model basis dimensions are inconsistent".to_string(),
            ));
        }
        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_constant_series_reconstructs_itself() {
        let values = vec![3.25; 60];
        let model = SsaModel::fit(&values, 50, 20, 4).unwrap();
        assert_eq!(model.rank(), 1);
        let window = vec![3.25; 20];
        assert_relative_eq!(model.project_last(&window), 3.25, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_training_yields_empty_basis() {
        let values = vec![0.0; 60];
        let model = SsaModel::fit(&values, 50, 20, 4).unwrap();
        assert_eq!(model.rank(), 0);
        assert_eq!(model.project_last(&vec![42.0; 20]), 0.0);
    }

    #[test]
    fn test_sine_is_captured_by_low_rank() {
        let values: Vec<f64> = (0..120)
            .map(|i| (2.0 * std::f64::consts::PI * i as f64 / 12.0).sin())
            .collect();
        let model = SsaModel::fit(&values, 96, 24, 4).unwrap();
        // a pure sinusoid lives in a two-dimensional subspace
        assert!(model.rank() >= 2);
        for t in 96..120 {
            let window = &values[t + 1 - 24..=t];
            assert_relative_eq!(model.project_last(window), values[t], epsilon = 1e-6);
        }
    }

    #[test]
    fn test_byte_round_trip_is_exact() {
        let values: Vec<f64> = (0..80).map(|i| (i as f64 * 0.7).sin() + 0.01 * i as f64).collect();
        let model = SsaModel::fit(&values, 70, 30, 4).unwrap();
        let restored = SsaModel::from_bytes(&model.to_bytes().unwrap()).unwrap();
        assert_eq!(model, restored);
    }

    #[test]
    fn test_degenerate_window_parameters_rejected() {
        let values = vec![1.0; 40];
        assert!(matches!(
            SsaModel::fit(&values, 10, 20, 4),
            Err(Error::InvalidParameter(_))
        ));
        assert!(matches!(
            SsaModel::fit(&values, 10, 0, 4),
            Err(Error::InvalidParameter(_))
        ));
        assert!(matches!(
            SsaModel::fit(&values, 10, 1, 4),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_insufficient_training_data() {
        let values = vec![1.0; 10];
        assert!(matches!(
            SsaModel::fit(&values, 50, 20, 4),
            Err(Error::InsufficientData { expected: 50, actual: 10 })
        ));
    }
}
