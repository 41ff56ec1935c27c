//! Window functions for spectral leakage demonstrations
//!
//! Every family is evaluated over an index domain whose largest index is `N`.
//! For the usual zero-based domain of length `L` this means `N = L - 1`.

use serde::Deserialize;
use std::f64::consts::PI;

/// Default shape parameter for [`WindowType::Hamming`]
pub const DEFAULT_HAMMING_ALPHA: f64 = 0.2;

/// Flat-top cosine coefficients a_0..a_4
pub const FLAT_TOP_COEFFICIENTS: [f64; 5] = [0.215, -0.417, 0.277, -0.0836, 0.006947];

/// Window function types
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowType {
    /// Rectangular window (no weighting): w[k] = 1
    Rectangular,

    /// Triangular window: w[k] = 1 - |2k - N| / (N + 1)
    Triangular,

    /// Generalized Hamming window: w[k] = a - (1 - a)*cos(2πk/N)
    Hamming { alpha: f64 },

    /// Hann window, the Hamming family with a = 0.5
    /// Both endpoints are exactly zero
    Hann,

    /// Flat-top window: w[k] = Σ a_m*cos(2πmk/N), m = 0..4
    /// Trades resolution for amplitude accuracy
    FlatTop,
}

impl WindowType {
    /// Hamming-family window with the default shape parameter
    pub fn hamming() -> Self {
        WindowType::Hamming {
            alpha: DEFAULT_HAMMING_ALPHA,
        }
    }

    /// Human-readable family name
    pub fn name(&self) -> &'static str {
        match self {
            WindowType::Rectangular => "rectangular",
            WindowType::Triangular => "triangular",
            WindowType::Hamming { .. } => "Hamming",
            WindowType::Hann => "Hann",
            WindowType::FlatTop => "flat top",
        }
    }

    /// Evaluate the window at index `k` of a domain whose largest index is `n_max`
    ///
    /// A single-point domain (`n_max <= 0`) has weight 1 for every family.
    pub fn weight(&self, k: f64, n_max: f64) -> f64 {
        if matches!(self, WindowType::Rectangular) || n_max <= 0.0 {
            return 1.0;
        }

        match *self {
            WindowType::Rectangular => 1.0,
            WindowType::Triangular => 1.0 - ((2.0 * k - n_max) / (n_max + 1.0)).abs(),
            WindowType::Hamming { alpha } => hamming_weight(k, n_max, alpha),
            WindowType::Hann => hamming_weight(k, n_max, 0.5),
            WindowType::FlatTop => FLAT_TOP_COEFFICIENTS
                .iter()
                .enumerate()
                .map(|(m, &a)| a * (2.0 * PI * m as f64 * k / n_max).cos())
                .sum(),
        }
    }
}

fn hamming_weight(k: f64, n_max: f64, alpha: f64) -> f64 {
    alpha - (1.0 - alpha) * (2.0 * PI * k / n_max).cos()
}

/// Generate window coefficients over the domain 0..length
///
/// # Arguments
/// * `window_type` - Type of window function
/// * `length` - Number of samples (L), largest index is L - 1
///
/// # Returns
/// Vector of window coefficients w[k] for k = 0..L-1
pub fn generate_window(window_type: WindowType, length: usize) -> Vec<f64> {
    let n_max = length.saturating_sub(1) as f64;
    (0..length)
        .map(|k| window_type.weight(k as f64, n_max))
        .collect()
}

/// Evaluate a window over an arbitrary index domain
///
/// `N` is taken as the largest index present, so `[1, 2, .., 99]` gives the
/// same shape as the domain the weights are plotted against.
pub fn window_over(window_type: WindowType, indices: &[f64]) -> Vec<f64> {
    let n_max = indices.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    indices
        .iter()
        .map(|&k| window_type.weight(k, n_max))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [WindowType; 5] = [
        WindowType::Rectangular,
        WindowType::Triangular,
        WindowType::Hamming {
            alpha: DEFAULT_HAMMING_ALPHA,
        },
        WindowType::Hann,
        WindowType::FlatTop,
    ];

    #[test]
    fn test_rectangular_window() {
        assert_eq!(generate_window(WindowType::Rectangular, 4), vec![1.0; 4]);
        let window = generate_window(WindowType::Rectangular, 100);
        assert!(window.iter().all(|&w| w == 1.0));
    }

    #[test]
    fn test_hann_four_points() {
        let hann = generate_window(WindowType::Hann, 4);

        assert_eq!(hann.len(), 4);
        assert!(hann[0].abs() < 1e-12);
        assert!(hann[3].abs() < 1e-12);
        assert!((hann[1] - 0.75).abs() < 1e-12);
        assert!((hann[1] - hann[2]).abs() < 1e-12);
    }

    #[test]
    fn test_symmetry() {
        for window_type in ALL {
            let w = generate_window(window_type, 9);
            for k in 0..9 {
                assert!(
                    (w[k] - w[8 - k]).abs() < 1e-12,
                    "{} not symmetric at {}",
                    window_type.name(),
                    k
                );
            }
        }
    }

    #[test]
    fn test_boundary_values() {
        let length = 101;
        let n_max = (length - 1) as f64;

        let tri = generate_window(WindowType::Triangular, length);
        assert!((tri[0] - 1.0 / (n_max + 1.0)).abs() < 1e-12);
        assert!((tri[length - 1] - 1.0 / (n_max + 1.0)).abs() < 1e-12);
        assert!((tri[length / 2] - 1.0).abs() < 1e-12);

        let hamming = generate_window(WindowType::hamming(), length);
        assert!((hamming[0] - (-0.6)).abs() < 1e-12);
        assert!((hamming[length / 2] - 1.0).abs() < 1e-12);

        let flat = generate_window(WindowType::FlatTop, length);
        let closed_form: f64 = FLAT_TOP_COEFFICIENTS.iter().sum();
        assert!((flat[0] - closed_form).abs() < 1e-12);
        assert!((flat[length - 1] - closed_form).abs() < 1e-12);
    }

    #[test]
    fn test_flat_top_peak() {
        let flat = generate_window(WindowType::FlatTop, 201);
        let peak = flat.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        // a0 - a1 + a2 - a3 + a4 at the center
        let expected = 0.215 + 0.417 + 0.277 + 0.0836 + 0.006947;
        assert!((flat[100] - expected).abs() < 1e-12);
        assert!((peak - expected).abs() < 1e-12);
    }

    #[test]
    fn test_window_over_offset_domain() {
        let indices: Vec<f64> = (1..100).map(|n| n as f64).collect();
        let hann = window_over(WindowType::Hann, &indices);

        assert_eq!(hann.len(), 99);
        // Largest index is 99, so the last weight closes the period
        assert!(hann[98].abs() < 1e-12);
        assert!((hann[0] - (0.5 - 0.5 * (2.0 * PI / 99.0).cos())).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_domains() {
        for window_type in ALL {
            assert!(generate_window(window_type, 0).is_empty());
            assert_eq!(generate_window(window_type, 1), vec![1.0]);
            assert!(window_over(window_type, &[]).is_empty());
            assert!(generate_window(window_type, 2).iter().all(|w| w.is_finite()));
        }
    }
}
