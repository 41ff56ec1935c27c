//! Applying windows to time-domain signals
//!
//! Windows are applied before the transform to reduce spectral leakage

use super::functions::{generate_window, WindowType};

/// Apply window to signal
///
/// # Arguments
/// * `signal` - Input signal
/// * `window_type` - Type of window to apply
///
/// # Returns
/// Windowed signal
pub fn apply_window(signal: &[f64], window_type: WindowType) -> Vec<f64> {
    let window = generate_window(window_type, signal.len());

    signal
        .iter()
        .zip(window.iter())
        .map(|(&s, &w)| s * w)
        .collect()
}

/// Multiply a signal in place by precomputed weights
pub fn apply_weights_inplace(signal: &mut [f64], weights: &[f64]) {
    for (s, w) in signal.iter_mut().zip(weights.iter()) {
        *s *= w;
    }
}

/// Window placed on a longer domain
///
/// Builds a full-length overlay which is zero everywhere except
/// `[start, start + weights.len())`, where it carries the window weights.
/// The region is truncated at the end of the domain.
///
/// # Arguments
/// * `weights` - Window coefficients for the sampled region
/// * `start` - First index of the region
/// * `out` - Overlay buffer, its length is the domain length
pub fn place_window_into(weights: &[f64], start: usize, out: &mut [f64]) {
    out.fill(0.0);

    let start = start.min(out.len());
    let end = (start + weights.len()).min(out.len());
    out[start..end].copy_from_slice(&weights[..end - start]);
}

/// Allocating form of [`place_window_into`]
pub fn placed_window(
    window_type: WindowType,
    window_size: usize,
    domain_length: usize,
    start: usize,
) -> Vec<f64> {
    let weights = generate_window(window_type, window_size);
    let mut out = vec![0.0; domain_length];
    place_window_into(&weights, start, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_window() {
        let signal = vec![1.0; 101];
        let windowed = apply_window(&signal, WindowType::Hann);

        assert_eq!(windowed.len(), 101);

        // Center is untouched, edges go to zero
        assert!((windowed[50] - 1.0).abs() < 1e-12);
        assert!(windowed[0].abs() < 1e-12);
        assert!(windowed[100].abs() < 1e-12);
    }

    #[test]
    fn test_apply_weights_inplace() {
        let mut signal = vec![2.0, 4.0, 6.0];
        apply_weights_inplace(&mut signal, &[0.5, 0.25, 0.0]);
        assert_eq!(signal, vec![1.0, 1.0, 0.0]);
    }

    #[test]
    fn test_placed_window() {
        let overlay = placed_window(WindowType::Rectangular, 3, 8, 2);
        assert_eq!(overlay, vec![0.0, 0.0, 1.0, 1.0, 1.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_placed_window_truncated() {
        let overlay = placed_window(WindowType::Rectangular, 4, 6, 4);
        assert_eq!(overlay, vec![0.0, 0.0, 0.0, 0.0, 1.0, 1.0]);

        let outside = placed_window(WindowType::Rectangular, 4, 6, 10);
        assert!(outside.iter().all(|&w| w == 0.0));
    }
}
