//! High-level spectrum analyzer
//!
//! Picks the naive or fast transform once and turns sample buffers into
//! normalized magnitude spectra frame after frame

use serde::Deserialize;

use super::dft::dft;
use super::fft::FftEngine;
use super::magnitude::magnitude_spectrum_into;
use crate::error::Result;

/// Transform used to derive magnitude spectra
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformMethod {
    /// O(N²) reference DFT
    Naive,

    /// realfft engine
    #[default]
    Fast,
}

/// Spectrum analyzer for frames of varying size
pub struct SpectrumAnalyzer {
    method: TransformMethod,

    /// Planned engine for the most recent frame size
    fft_engine: Option<FftEngine>,
}

impl SpectrumAnalyzer {
    /// Create new spectrum analyzer
    pub fn new(method: TransformMethod) -> Self {
        Self {
            method,
            fft_engine: None,
        }
    }

    /// Analyze signal into a caller-owned magnitude buffer
    ///
    /// # Arguments
    /// * `samples` - Time-domain samples, N of them
    /// * `out` - Receives floor(N/2) magnitudes
    pub fn analyze_into(&mut self, samples: &[f64], out: &mut Vec<f64>) -> Result<()> {
        let n = samples.len();
        if n == 0 {
            out.clear();
            return Ok(());
        }

        match self.method {
            TransformMethod::Naive => {
                let transform = dft(samples);
                magnitude_spectrum_into(&transform, n, out);
            }
            TransformMethod::Fast => {
                let needs_new_fft = self
                    .fft_engine
                    .as_ref()
                    .map_or(true, |engine| engine.fft_size() != n);

                if needs_new_fft {
                    self.fft_engine = Some(FftEngine::new(n));
                }

                if let Some(engine) = self.fft_engine.as_mut() {
                    engine.compute_magnitude_into(samples, out)?;
                }
            }
        }

        Ok(())
    }

    /// Analyze signal and return magnitude spectrum
    pub fn analyze(&mut self, samples: &[f64]) -> Result<Vec<f64>> {
        let mut out = Vec::with_capacity(samples.len() / 2);
        self.analyze_into(samples, &mut out)?;
        Ok(out)
    }

    /// Get configured transform
    pub fn method(&self) -> TransformMethod {
        self.method
    }
}
