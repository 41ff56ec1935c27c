//! Fast transforms used as the reference for the naive DFT
//!
//! `FftEngine` wraps realfft for the per-frame spectra of real signals;
//! `fft` runs a full complex rustfft for equivalence checks and transfer
//! functions.

use crate::error::{Result, SweepError};
use num_complex::Complex64;
use realfft::{RealFftPlanner, RealToComplex};
use rustfft::FftPlanner;
use std::sync::Arc;

use super::magnitude::magnitude_spectrum_into;

/// Full complex FFT of `signal` (N in, N out)
pub fn fft(signal: &[Complex64]) -> Vec<Complex64> {
    let mut buffer = signal.to_vec();
    if buffer.is_empty() {
        return buffer;
    }

    let mut planner = FftPlanner::<f64>::new();
    let fft = planner.plan_fft_forward(buffer.len());
    fft.process(&mut buffer);

    buffer
}

/// Full complex FFT of a real signal
pub fn fft_real(signal: &[f64]) -> Vec<Complex64> {
    let complex: Vec<Complex64> = signal.iter().map(|&s| Complex64::new(s, 0.0)).collect();
    fft(&complex)
}

/// FFT engine for real-valued signals of one fixed size
pub struct FftEngine {
    /// FFT size (number of samples)
    fft_size: usize,

    /// Real FFT processor
    r2c: Arc<dyn RealToComplex<f64>>,

    /// Reusable input buffer
    input_buffer: Vec<f64>,

    /// Reusable output buffer (non-negative half of the spectrum)
    output_buffer: Vec<Complex64>,
}

impl FftEngine {
    /// Create new FFT engine
    ///
    /// # Arguments
    /// * `fft_size` - FFT size (number of samples)
    pub fn new(fft_size: usize) -> Self {
        let mut planner = RealFftPlanner::<f64>::new();
        let r2c = planner.plan_fft_forward(fft_size);

        let input_buffer = r2c.make_input_vec();
        let output_buffer = r2c.make_output_vec();

        log::debug!("Planned real FFT of size {}", fft_size);

        Self {
            fft_size,
            r2c,
            input_buffer,
            output_buffer,
        }
    }

    /// Transform `signal` and return bins 0..=N/2
    ///
    /// The signal is zero-padded or truncated to the engine size.
    pub fn process(&mut self, signal: &[f64]) -> Result<&[Complex64]> {
        let copy_len = signal.len().min(self.fft_size);
        self.input_buffer[..copy_len].copy_from_slice(&signal[..copy_len]);
        self.input_buffer[copy_len..].fill(0.0);

        self.r2c
            .process(&mut self.input_buffer, &mut self.output_buffer)
            .map_err(|e| SweepError::Transform(e.to_string()))?;

        Ok(&self.output_buffer)
    }

    /// Compute the normalized magnitude spectrum, `floor(N/2)` bins
    pub fn compute_magnitude_into(&mut self, signal: &[f64], out: &mut Vec<f64>) -> Result<()> {
        let fft_size = self.fft_size;
        let bins = self.process(signal)?;
        magnitude_spectrum_into(bins, fft_size, out);
        Ok(())
    }

    /// Get FFT size
    pub fn fft_size(&self) -> usize {
        self.fft_size
    }

    /// Get number of visible magnitude bins (N/2)
    pub fn num_bins(&self) -> usize {
        self.fft_size / 2
    }
}
