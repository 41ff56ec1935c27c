//! Run configuration
//!
//! Plain structs with defaults, optionally read from TOML:
//!
//! ```toml
//! transform = "naive"
//!
//! [animation]
//! duration_s = 7.0
//! interval_ms = 20
//!
//! [display]
//! log_amplitude = true
//! ```

use serde::Deserialize;

use crate::error::{Result, SweepError};
use crate::schedule::{FrameClock, DEFAULT_INTERVAL_MS};
use crate::spectrum::TransformMethod;

/// Smallest magnitude reported when a log amplitude axis is requested
pub const LOG_AMPLITUDE_FLOOR: f64 = 1e-5;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SweepConfig {
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub display: DisplayOptions,
    #[serde(default)]
    pub transform: TransformMethod,
}

/// Total duration and frame interval of a run
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct AnimationConfig {
    #[serde(default = "default_duration")]
    pub duration_s: f64,
    #[serde(default = "default_interval")]
    pub interval_ms: u32,
}

/// Recognized display options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct DisplayOptions {
    /// Spectrum is drawn on a log axis, magnitudes are floored above zero
    #[serde(default)]
    pub log_amplitude: bool,
    /// Draw sample points with markers
    #[serde(default)]
    pub plot_markers: bool,
    /// Emit the window overlay artifact
    #[serde(default)]
    pub plot_window: bool,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            duration_s: default_duration(),
            interval_ms: default_interval(),
        }
    }
}

fn default_duration() -> f64 {
    5.0
}

fn default_interval() -> u32 {
    DEFAULT_INTERVAL_MS
}

impl AnimationConfig {
    pub fn new(duration_s: f64) -> Self {
        Self {
            duration_s,
            ..Self::default()
        }
    }

    /// Frame clock for this run
    pub fn clock(&self) -> Result<FrameClock> {
        FrameClock::new(self.duration_s, self.interval_ms)
    }
}

impl DisplayOptions {
    pub fn with_log_amplitude(mut self) -> Self {
        self.log_amplitude = true;
        self
    }

    pub fn with_markers(mut self) -> Self {
        self.plot_markers = true;
        self
    }

    pub fn with_window(mut self) -> Self {
        self.plot_window = true;
        self
    }

    /// Floor magnitudes for a log axis when requested
    pub fn apply_amplitude_scale(&self, spectrum: &mut [f64]) {
        if self.log_amplitude {
            for m in spectrum.iter_mut() {
                *m = m.max(LOG_AMPLITUDE_FLOOR);
            }
        }
    }
}

impl SweepConfig {
    /// Parse a TOML document; missing fields take their defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SweepConfig =
            toml::from_str(content).map_err(|e| SweepError::Config(e.to_string()))?;
        config.animation.clock()?;
        Ok(config)
    }
}
