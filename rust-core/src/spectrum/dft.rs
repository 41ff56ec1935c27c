//! Naive discrete Fourier transform
//!
//! Reference implementation, O(N²) in time and memory. It builds the full
//! N×N kernel from the outer product of the index vector with itself and
//! reduces it against the signal in one matrix-vector product.

use ndarray::{Array1, Array2, Axis};
use num_complex::Complex64;
use std::f64::consts::PI;

/// Discrete Fourier transform of `signal`
///
/// X[k] = Σ_n x[n]·exp(-2πi·k·n/N)
///
/// # Arguments
/// * `signal` - N real or complex samples
///
/// # Returns
/// N complex coefficients
pub fn dft<T>(signal: &[T]) -> Vec<Complex64>
where
    T: Copy + Into<Complex64>,
{
    let n = signal.len();
    if n == 0 {
        return Vec::new();
    }

    let kernel = dft_kernel(n);
    let x: Array1<Complex64> = signal.iter().map(|&s| s.into()).collect();

    kernel.dot(&x).to_vec()
}

/// N×N matrix of exp(-2πi·k·n/N)
fn dft_kernel(n: usize) -> Array2<Complex64> {
    let index = Array1::from_iter(0..n);
    let k_n = &index.view().insert_axis(Axis(1)) * &index.view().insert_axis(Axis(0));

    // k·n is reduced modulo N in integers first so the phase stays in [0, 2π)
    let step = -2.0 * PI / n as f64;
    k_n.mapv(|kn| Complex64::from_polar(1.0, step * (kn % n) as f64))
}
