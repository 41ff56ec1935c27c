//! Sliding window extraction and periodic reconstruction
//!
//! A spectrum estimator only sees the sampled window; implicitly it assumes
//! the window repeats forever. The reconstructed view shows that assumption
//! across the whole display domain.

use crate::error::{Result, SweepError};

/// Validated window geometry over a signal of fixed length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlidingWindow {
    window_size: usize,
    signal_length: usize,
    repeat_count: usize,
}

impl SlidingWindow {
    /// # Errors
    /// The window must be non-empty and strictly shorter than the signal.
    pub fn new(window_size: usize, signal_length: usize) -> Result<Self> {
        if window_size == 0 || window_size >= signal_length {
            return Err(SweepError::InvalidWindowSize {
                window_size,
                signal_length,
            });
        }

        Ok(Self {
            window_size,
            signal_length,
            repeat_count: signal_length.div_ceil(window_size),
        })
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    pub fn signal_length(&self) -> usize {
        self.signal_length
    }

    /// Number of window copies needed to cover the signal
    pub fn repeat_count(&self) -> usize {
        self.repeat_count
    }

    /// Largest offset at which the window still fits entirely
    pub fn max_offset(&self) -> usize {
        self.signal_length - self.window_size
    }

    /// `full[offset..offset + window_size]`, truncated at the end of `full`
    pub fn sample<'a>(&self, full: &'a [f64], offset: usize) -> &'a [f64] {
        sample_slice(full, offset, self.window_size)
    }

    /// Periodic full-length view of `sample` placed at `offset`
    pub fn reconstruct_into(&self, sample: &[f64], offset: usize, out: &mut Vec<f64>) {
        reconstruct_into(sample, offset, self.signal_length, out);
    }
}

fn sample_slice(full: &[f64], offset: usize, window_size: usize) -> &[f64] {
    let start = offset.min(full.len());
    let end = offset.saturating_add(window_size).min(full.len());
    &full[start..end]
}

/// Tile `sample`, rotate it right by `offset` and cut it to `length`
///
/// Equivalent to `roll(tile(sample, ceil(length / len(sample))), offset)[..length]`
/// but always exactly `length` long: `out[offset + m] == sample[m]` and the
/// pattern repeats with the sample's period in both directions. An empty
/// sample (offset past the end) yields zeros.
pub fn reconstruct_into(sample: &[f64], offset: usize, length: usize, out: &mut Vec<f64>) {
    out.clear();

    let period = sample.len();
    if period == 0 {
        out.resize(length, 0.0);
        return;
    }

    let shift = period - offset % period;
    out.extend((0..length).map(|j| sample[(j + shift) % period]));
}

/// Extract the window at `offset` and its reconstructed full-length view
///
/// # Returns
/// `(sample, view)` where `view.len() == full.len()`
pub fn extract(full: &[f64], offset: usize, window_size: usize) -> (Vec<f64>, Vec<f64>) {
    let sample = sample_slice(full, offset, window_size).to_vec();
    let mut view = Vec::with_capacity(full.len());
    reconstruct_into(&sample, offset, full.len(), &mut view);
    (sample, view)
}
