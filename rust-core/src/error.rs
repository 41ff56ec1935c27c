//! Error type shared by every stage of the engine

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SweepError {
    #[error("Signal is empty")]
    EmptySignal,

    #[error(
        "Window size {window_size} must be in 1..{signal_length} (signal length {signal_length})"
    )]
    InvalidWindowSize {
        window_size: usize,
        signal_length: usize,
    },

    #[error("At least 2 samples are required (found: {0})")]
    TooFewSamples(usize),

    #[error("Sampling rate must be positive (found: {0} Hz)")]
    InvalidSampleRate(f64),

    #[error("Duration must be positive (found: {0} s)")]
    InvalidDuration(f64),

    #[error("Frame interval must be positive (found: {0} ms)")]
    InvalidInterval(u32),

    #[error("Configured duration yields no frames ({duration_s} s at {interval_ms} ms per frame)")]
    NoFrames { duration_s: f64, interval_ms: u32 },

    #[error("Schedule '{schedule}' is not monotonic: {reason}")]
    NonMonotonicSchedule {
        schedule: &'static str,
        reason: String,
    },

    #[error("Schedule '{schedule}' yields {found} parameters, animator requires {expected}")]
    ScheduleMismatch {
        schedule: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Schedule '{schedule}' does not fit the animator: {reason}")]
    ScheduleGeometry {
        schedule: &'static str,
        reason: String,
    },

    #[error("Frame {frame} asks for {requested} samples (maximum: {max})")]
    SampleCountTooLarge {
        frame: usize,
        requested: f64,
        max: usize,
    },

    #[error("Frame {frame} out of range (total frames: {total_frames})")]
    FrameOutOfRange { frame: usize, total_frames: usize },

    #[error("Length mismatch: expected {expected}, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("Time axis must end after it starts (t_max: {0} s)")]
    InvalidTimeSpan(f64),

    #[error("FFT processing failed: {0}")]
    Transform(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, SweepError>;
