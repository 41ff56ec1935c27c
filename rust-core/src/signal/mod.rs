//! Signal sources and the sliding window extractor

pub mod extract;

pub use extract::{extract, SlidingWindow};

use crate::error::{Result, SweepError};
use crate::spectrum::magnitude::linspace;
use std::f64::consts::PI;
use std::fmt;
use std::sync::Arc;

/// Immutable signal shared by the animators of one run
///
/// The engine only ever evaluates a signal; it never looks inside.
#[derive(Clone)]
pub enum Signal {
    /// Closed-form amplitude as a function of time
    Continuous(Arc<dyn Fn(f64) -> f64 + Send + Sync>),

    /// Closed-form family: amplitude as a function of (parameter, time)
    Parametric(Arc<dyn Fn(f64, f64) -> f64 + Send + Sync>),

    /// Fixed measured sequence
    Sampled(SampledSignal),
}

/// Finite real-valued sequence and its sampling rate
#[derive(Debug, Clone, PartialEq)]
pub struct SampledSignal {
    values: Arc<[f64]>,
    sample_rate: f64,
}

impl SampledSignal {
    /// # Errors
    /// Empty sequences and non-positive (or non-finite) rates are rejected.
    pub fn new(values: Vec<f64>, sample_rate: f64) -> Result<Self> {
        if values.is_empty() {
            return Err(SweepError::EmptySignal);
        }
        if !(sample_rate.is_finite() && sample_rate > 0.0) {
            return Err(SweepError::InvalidSampleRate(sample_rate));
        }

        Ok(Self {
            values: values.into(),
            sample_rate,
        })
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Duration covered by the samples, N / rate
    pub fn duration(&self) -> f64 {
        self.values.len() as f64 / self.sample_rate
    }

    /// Display time axis, linspace(0, N / rate, N)
    pub fn time_axis(&self) -> Vec<f64> {
        linspace(0.0, self.duration(), self.len())
    }

    /// Sample at or before time `t`, clamped to the sequence
    fn at(&self, t: f64) -> f64 {
        let idx = (t * self.sample_rate).floor().max(0.0) as usize;
        self.values[idx.min(self.values.len() - 1)]
    }
}

impl Signal {
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Signal::Continuous(Arc::new(f))
    }

    pub fn parametric<F>(f: F) -> Self
    where
        F: Fn(f64, f64) -> f64 + Send + Sync + 'static,
    {
        Signal::Parametric(Arc::new(f))
    }

    /// sin(2π·f·t)
    pub fn sine(frequency_hz: f64) -> Self {
        Signal::from_fn(move |t| (2.0 * PI * frequency_hz * t).sin())
    }

    /// sin(2π·k·t·scale), where k is the frame parameter
    ///
    /// With `scale = 0.25` a phase sweep parameter k plays a k/4 Hz tone.
    pub fn swept_sine(scale: f64) -> Self {
        Signal::parametric(move |k, t| (2.0 * PI * k * t * scale).sin())
    }

    /// Wrap a measured sequence, see [`SampledSignal::new`]
    pub fn sampled(values: Vec<f64>, sample_rate: f64) -> Result<Self> {
        SampledSignal::new(values, sample_rate).map(Signal::Sampled)
    }

    /// Amplitude at time `t` with frame parameter `parameter`
    ///
    /// Parameter-free signals ignore `parameter`.
    pub fn value_at(&self, parameter: f64, t: f64) -> f64 {
        match self {
            Signal::Continuous(f) => f(t),
            Signal::Parametric(f) => f(parameter, t),
            Signal::Sampled(s) => s.at(t),
        }
    }

    /// Evaluate at every time point into `out`
    pub fn evaluate_into(&self, parameter: f64, ts: &[f64], out: &mut Vec<f64>) {
        out.clear();
        out.extend(ts.iter().map(|&t| self.value_at(parameter, t)));
    }

    /// Measured sequence, if this signal is one
    pub fn as_sampled(&self) -> Option<&SampledSignal> {
        match self {
            Signal::Sampled(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Debug for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Signal::Continuous(_) => f.write_str("Signal::Continuous"),
            Signal::Parametric(_) => f.write_str("Signal::Parametric"),
            Signal::Sampled(s) => f
                .debug_struct("Signal::Sampled")
                .field("len", &s.len())
                .field("sample_rate", &s.sample_rate)
                .finish(),
        }
    }
}
