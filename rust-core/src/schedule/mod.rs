//! Frame parameter scheduling
//!
//! Maps an animation frame index to the parameter that drives that frame.
//! Every schedule is a pure function of the frame index; the variant is
//! chosen once when an animator is built.

use crate::error::{Result, SweepError};
use std::fmt;

/// Default frame interval
pub const DEFAULT_INTERVAL_MS: u32 = 20;

/// Lead-in frames of the offset phase sweep, keeps k away from zero
pub const PHASE_LEAD_IN_FRAMES: usize = 10;

/// Smallest sample count a frame may use
pub const MIN_SAMPLE_COUNT: usize = 2;

/// Largest sample count a frame may use
///
/// Sample count sweeps are capped here; animators reject runs whose last
/// frame would need more.
pub const MAX_SAMPLE_COUNT: usize = 1 << 20;

/// Frame count and interval of one animation run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameClock {
    interval_ms: u32,
    total_frames: usize,
}

impl FrameClock {
    /// total_frames = floor(duration * 1000 / interval)
    ///
    /// # Errors
    /// Duration and interval must be positive and yield at least one frame.
    pub fn new(duration_s: f64, interval_ms: u32) -> Result<Self> {
        if interval_ms == 0 {
            return Err(SweepError::InvalidInterval(interval_ms));
        }
        if !(duration_s.is_finite() && duration_s > 0.0) {
            return Err(SweepError::InvalidDuration(duration_s));
        }

        let total_frames = (duration_s * 1000.0 / interval_ms as f64).floor() as usize;
        if total_frames == 0 {
            return Err(SweepError::NoFrames {
                duration_s,
                interval_ms,
            });
        }

        Ok(Self {
            interval_ms,
            total_frames,
        })
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn total_frames(&self) -> usize {
        self.total_frames
    }

    /// Frame interval in seconds
    pub fn interval_s(&self) -> f64 {
        self.interval_ms as f64 / 1000.0
    }

    pub fn contains(&self, frame: usize) -> bool {
        frame < self.total_frames
    }

    pub fn frames(&self) -> std::ops::Range<usize> {
        0..self.total_frames
    }
}

/// Parameter produced for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameParameter {
    /// Continuous time / frequency parameter
    Time(f64),

    /// Window start offset in samples
    Offset(usize),

    /// Number of samples taken over the time span
    SampleCount(usize),

    /// Sampling rate in Hz
    SampleRate(f64),
}

/// Kind of parameter a schedule yields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterKind {
    Time,
    Offset,
    SampleCount,
    SampleRate,
}

impl ParameterKind {
    pub fn name(&self) -> &'static str {
        match self {
            ParameterKind::Time => "time",
            ParameterKind::Offset => "offset",
            ParameterKind::SampleCount => "sample count",
            ParameterKind::SampleRate => "sample rate",
        }
    }
}

impl FrameParameter {
    pub fn kind(&self) -> ParameterKind {
        match self {
            FrameParameter::Time(_) => ParameterKind::Time,
            FrameParameter::Offset(_) => ParameterKind::Offset,
            FrameParameter::SampleCount(_) => ParameterKind::SampleCount,
            FrameParameter::SampleRate(_) => ParameterKind::SampleRate,
        }
    }

    /// Scalar value, for signals parameterized by the swept quantity
    pub fn value(&self) -> f64 {
        match *self {
            FrameParameter::Time(k) | FrameParameter::SampleRate(k) => k,
            FrameParameter::Offset(k) | FrameParameter::SampleCount(k) => k as f64,
        }
    }
}

/// Frame schedule variants
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameSchedule {
    /// k = i * interval
    PhaseSweep { interval_ms: u32 },

    /// k = (i + 10) * interval / divisor
    OffsetPhaseSweep { interval_ms: u32, divisor: f64 },

    /// k = floor(i / total_frames * (signal_length - window_size))
    WindowSlide {
        total_frames: usize,
        signal_length: usize,
        window_size: usize,
    },

    /// k = i * stride; may run past the last full window
    StrideSlide { stride: usize },

    /// k = max(2, floor(exp(i / growth) + 1)), capped at [`MAX_SAMPLE_COUNT`]
    SampleCount { growth: f64 },

    /// k = i / step + 1
    SamplingRate { step: f64 },
}

impl FrameSchedule {
    pub fn phase_sweep(clock: &FrameClock) -> Self {
        FrameSchedule::PhaseSweep {
            interval_ms: clock.interval_ms(),
        }
    }

    /// Offset phase sweep, quarter speed
    pub fn offset_phase_sweep(clock: &FrameClock) -> Self {
        FrameSchedule::OffsetPhaseSweep {
            interval_ms: clock.interval_ms(),
            divisor: 4.0,
        }
    }

    /// Offset phase sweep, eighth speed
    pub fn slow_offset_phase_sweep(clock: &FrameClock) -> Self {
        FrameSchedule::OffsetPhaseSweep {
            interval_ms: clock.interval_ms(),
            divisor: 8.0,
        }
    }

    pub fn window_slide(clock: &FrameClock, signal_length: usize, window_size: usize) -> Self {
        FrameSchedule::WindowSlide {
            total_frames: clock.total_frames(),
            signal_length,
            window_size,
        }
    }

    /// Sample count sweep doubling every ~28 frames
    pub fn sample_count() -> Self {
        FrameSchedule::SampleCount { growth: 40.0 }
    }

    /// Slower sample count sweep
    pub fn slow_sample_count() -> Self {
        FrameSchedule::SampleCount { growth: 60.0 }
    }

    /// Sampling rate growing by 1 Hz every 20 frames
    pub fn sampling_rate() -> Self {
        FrameSchedule::SamplingRate { step: 20.0 }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FrameSchedule::PhaseSweep { .. } => "phase sweep",
            FrameSchedule::OffsetPhaseSweep { .. } => "offset phase sweep",
            FrameSchedule::WindowSlide { .. } => "window slide",
            FrameSchedule::StrideSlide { .. } => "stride slide",
            FrameSchedule::SampleCount { .. } => "sample count sweep",
            FrameSchedule::SamplingRate { .. } => "sampling rate sweep",
        }
    }

    pub fn kind(&self) -> ParameterKind {
        match self {
            FrameSchedule::PhaseSweep { .. } | FrameSchedule::OffsetPhaseSweep { .. } => {
                ParameterKind::Time
            }
            FrameSchedule::WindowSlide { .. } | FrameSchedule::StrideSlide { .. } => {
                ParameterKind::Offset
            }
            FrameSchedule::SampleCount { .. } => ParameterKind::SampleCount,
            FrameSchedule::SamplingRate { .. } => ParameterKind::SampleRate,
        }
    }

    /// Check the constants before any frame is evaluated
    pub fn validate(&self) -> Result<()> {
        let non_monotonic = |reason: String| SweepError::NonMonotonicSchedule {
            schedule: self.name(),
            reason,
        };

        match *self {
            FrameSchedule::PhaseSweep { interval_ms } => {
                if interval_ms == 0 {
                    return Err(SweepError::InvalidInterval(interval_ms));
                }
            }
            FrameSchedule::OffsetPhaseSweep {
                interval_ms,
                divisor,
            } => {
                if interval_ms == 0 {
                    return Err(SweepError::InvalidInterval(interval_ms));
                }
                if !(divisor.is_finite() && divisor > 0.0) {
                    return Err(non_monotonic(format!("divisor must be positive, got {}", divisor)));
                }
            }
            FrameSchedule::WindowSlide {
                total_frames,
                signal_length,
                window_size,
            } => {
                if window_size == 0 || window_size >= signal_length {
                    return Err(SweepError::InvalidWindowSize {
                        window_size,
                        signal_length,
                    });
                }
                if total_frames == 0 {
                    return Err(non_monotonic("no frames to sweep over".into()));
                }
            }
            FrameSchedule::StrideSlide { .. } => {}
            FrameSchedule::SampleCount { growth } => {
                if !(growth.is_finite() && growth > 0.0) {
                    return Err(non_monotonic(format!("growth must be positive, got {}", growth)));
                }
            }
            FrameSchedule::SamplingRate { step } => {
                if !(step.is_finite() && step > 0.0) {
                    return Err(non_monotonic(format!("step must be positive, got {}", step)));
                }
            }
        }

        Ok(())
    }

    /// Parameter for frame `frame`
    pub fn parameter(&self, frame: usize) -> FrameParameter {
        match *self {
            FrameSchedule::PhaseSweep { interval_ms } => {
                FrameParameter::Time(frame as f64 * (interval_ms as f64 / 1000.0))
            }
            FrameSchedule::OffsetPhaseSweep {
                interval_ms,
                divisor,
            } => FrameParameter::Time(
                (frame + PHASE_LEAD_IN_FRAMES) as f64 * (interval_ms as f64 / 1000.0) / divisor,
            ),
            FrameSchedule::WindowSlide {
                total_frames,
                signal_length,
                window_size,
            } => {
                let range = signal_length.saturating_sub(window_size);
                let frame = frame.min(total_frames);
                let scaled = frame as u128 * range as u128 / total_frames.max(1) as u128;
                let offset = scaled as usize;
                FrameParameter::Offset(offset.min(range))
            }
            FrameSchedule::StrideSlide { stride } => {
                FrameParameter::Offset(frame.saturating_mul(stride))
            }
            FrameSchedule::SampleCount { growth } => {
                FrameParameter::SampleCount(bounded_count(sample_count_at(growth, frame)))
            }
            FrameSchedule::SamplingRate { step } => {
                FrameParameter::SampleRate(frame as f64 / step + 1.0)
            }
        }
    }

    /// Uncapped number of samples frame `frame` asks for over `t_max` seconds
    ///
    /// `None` for schedules that do not drive a sample count.
    pub fn samples_requested(&self, frame: usize, t_max: f64) -> Option<f64> {
        match *self {
            FrameSchedule::SampleCount { growth } => Some(sample_count_at(growth, frame)),
            FrameSchedule::SamplingRate { step } => Some((frame as f64 / step + 1.0) * t_max),
            _ => None,
        }
    }
}

fn sample_count_at(growth: f64, frame: usize) -> f64 {
    (frame as f64 / growth).exp() + 1.0
}

/// Floor a requested count into `[MIN_SAMPLE_COUNT, MAX_SAMPLE_COUNT]`
///
/// Non-finite and oversized requests land on the cap.
pub fn bounded_count(requested: f64) -> usize {
    if requested.is_nan() || requested >= MAX_SAMPLE_COUNT as f64 {
        MAX_SAMPLE_COUNT
    } else {
        (requested.floor().max(0.0) as usize).max(MIN_SAMPLE_COUNT)
    }
}

impl fmt::Display for FrameSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            FrameSchedule::PhaseSweep { interval_ms } => {
                write!(f, "phase sweep ({} ms)", interval_ms)
            }
            FrameSchedule::OffsetPhaseSweep {
                interval_ms,
                divisor,
            } => write!(f, "offset phase sweep ({} ms / {})", interval_ms, divisor),
            FrameSchedule::WindowSlide {
                total_frames,
                signal_length,
                window_size,
            } => write!(
                f,
                "window slide ({} of {} over {} frames)",
                window_size, signal_length, total_frames
            ),
            FrameSchedule::StrideSlide { stride } => {
                write!(f, "stride slide ({} per frame)", stride)
            }
            FrameSchedule::SampleCount { growth } => {
                write!(f, "sample count sweep (exp(i/{}))", growth)
            }
            FrameSchedule::SamplingRate { step } => {
                write!(f, "sampling rate sweep (i/{} + 1)", step)
            }
        }
    }
}
