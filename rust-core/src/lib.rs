//! Spectral Sweep - Windowed Spectral Analysis Core
//!
//! Window functions, naive and fast Fourier transforms, sliding window
//! extraction and per-frame parameter schedules, driven by animators that
//! hand borrowed plot buffers to a rendering loop.

pub mod animation;
pub mod config;
pub mod error;
pub mod presets;
pub mod schedule;
pub mod signal;
pub mod spectrum;
pub mod window;

pub use animation::{Animator, Artifact, ArtifactKind, GroupAnimator};
pub use config::{DisplayOptions, SweepConfig};
pub use error::{Result, SweepError};
pub use schedule::{FrameClock, FrameParameter, FrameSchedule};
pub use signal::{SampledSignal, Signal};
pub use spectrum::{SpectrumAnalyzer, TransformMethod};
pub use window::WindowType;
