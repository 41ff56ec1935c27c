//! Spectral analysis: naive DFT, fast reference transforms, magnitude spectra

pub mod dft;
pub mod fft;
pub mod magnitude;
pub mod analysis;

pub use dft::dft;
pub use fft::{fft, fft_real, FftEngine};
pub use magnitude::{frequency_axis, linspace, magnitude_spectrum, transfer};
pub use analysis::{SpectrumAnalyzer, TransformMethod};
