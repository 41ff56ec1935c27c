//! Magnitude spectrum normalization and axes
//!
//! Every displayed spectrum goes through [`magnitude_spectrum_into`]: the
//! first half of the bins, scaled by 2/N.

use crate::error::{Result, SweepError};
use num_complex::Complex64;

use super::fft::fft_real;

/// Normalized magnitude spectrum
///
/// mag[b] = (2/N)·|X[b]| for b in [0, N/2)
///
/// # Arguments
/// * `transform` - Transform output, at least N/2 bins
/// * `n` - Number of time-domain samples the transform was taken over
pub fn magnitude_spectrum(transform: &[Complex64], n: usize) -> Vec<f64> {
    let mut out = Vec::with_capacity(n / 2);
    magnitude_spectrum_into(transform, n, &mut out);
    out
}

/// In-place form of [`magnitude_spectrum`], reusing `out`'s allocation
pub fn magnitude_spectrum_into(transform: &[Complex64], n: usize, out: &mut Vec<f64>) {
    out.clear();
    if n == 0 {
        return;
    }

    let scale = 2.0 / n as f64;
    out.extend(transform.iter().take(n / 2).map(|c| scale * c.norm()));
}

/// `num` evenly spaced values over [start, stop], both ends included
pub fn linspace(start: f64, stop: f64, num: usize) -> Vec<f64> {
    let mut out = Vec::with_capacity(num);
    linspace_into(start, stop, num, &mut out);
    out
}

/// In-place form of [`linspace`]
pub fn linspace_into(start: f64, stop: f64, num: usize, out: &mut Vec<f64>) {
    out.clear();
    match num {
        0 => {}
        1 => out.push(start),
        _ => {
            let step = (stop - start) / (num - 1) as f64;
            out.extend((0..num - 1).map(|i| start + step * i as f64));
            out.push(stop);
        }
    }
}

/// Frequency axis for N samples spread over `t_max` seconds
///
/// linspace(0, 1/(2T), N/2) with T = t_max / N, so the axis ends at the
/// Nyquist frequency.
pub fn frequency_axis(t_max: f64, n: usize) -> Vec<f64> {
    let mut out = Vec::with_capacity(n / 2);
    frequency_axis_into(t_max, n, &mut out);
    out
}

/// In-place form of [`frequency_axis`]
pub fn frequency_axis_into(t_max: f64, n: usize, out: &mut Vec<f64>) {
    if n == 0 {
        out.clear();
        return;
    }
    let sample_interval = t_max / n as f64;
    linspace_into(0.0, 1.0 / (2.0 * sample_interval), n / 2, out);
}

/// Transfer function magnitude between two measurement channels
///
/// |FFT(output)| / |FFT(input)| over the full transform length. Bins where
/// the input has no energy come out as infinity or NaN.
pub fn transfer(input: &[f64], output: &[f64]) -> Result<Vec<f64>> {
    if input.len() != output.len() {
        return Err(SweepError::LengthMismatch {
            expected: input.len(),
            found: output.len(),
        });
    }
    if input.is_empty() {
        return Err(SweepError::EmptySignal);
    }

    let f_in = fft_real(input);
    let f_out = fft_real(output);

    Ok(f_out
        .iter()
        .zip(f_in.iter())
        .map(|(o, i)| o.norm() / i.norm())
        .collect())
}
