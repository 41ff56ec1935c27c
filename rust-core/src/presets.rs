//! Ready-made animator groups
//!
//! Each preset wires signals, windows and schedules into a [`GroupAnimator`]
//! for one of the standard demonstrations. Rendering is left to the caller.

use std::f64::consts::PI;

use crate::animation::{
    Animator, GroupAnimator, RegionMarkerAnimator, ResamplingAnimator, ResamplingConfig,
    SlidingWindowAnimator, SlidingWindowConfig, WindowedSweepAnimator, WindowedSweepConfig,
};
use crate::config::{AnimationConfig, DisplayOptions};
use crate::error::Result;
use crate::schedule::FrameSchedule;
use crate::signal::{SampledSignal, Signal};
use crate::spectrum::{linspace, TransformMethod};
use crate::window::WindowType;

/// Window families compared side by side
pub const COMPARED_WINDOWS: [WindowType; 4] = [
    WindowType::Rectangular,
    WindowType::Triangular,
    WindowType::Hann,
    WindowType::FlatTop,
];

/// Window sizes of the sample time comparison
pub const SAMPLE_TIME_WINDOWS: [usize; 3] = [50, 350, 650];

/// Window size of the sliding window analysis
pub const ANALYSIS_WINDOW: usize = 3000;

/// Four window families applied to the same swept sine
///
/// sin(2π·k·t/4) over 20 s and 1000 points, k following the frame clock,
/// for 5 s.
pub fn window_comparison(transform: TransformMethod) -> Result<GroupAnimator> {
    let animation = AnimationConfig::new(5.0);
    let clock = animation.clock()?;
    let signal = Signal::swept_sine(0.25);

    let mut animators: Vec<Box<dyn Animator>> = Vec::with_capacity(COMPARED_WINDOWS.len());
    for window in COMPARED_WINDOWS {
        let config = WindowedSweepConfig {
            t_max: 20.0,
            samples: 1000,
            window,
            schedule: FrameSchedule::phase_sweep(&clock),
            transform,
            display: DisplayOptions::default().with_window(),
        };
        animators.push(Box::new(WindowedSweepAnimator::new(config, signal.clone())?));
    }

    GroupAnimator::new(&animation, animators)
}

/// Growing sample count over a 4.1 Hz tone
///
/// 2 s span, sample points drawn with markers, 7 s.
pub fn sample_count_sweep(transform: TransformMethod) -> Result<GroupAnimator> {
    let animation = AnimationConfig::new(7.0);
    let config = ResamplingConfig {
        t_max: 2.0,
        schedule: FrameSchedule::sample_count(),
        window: None,
        transform,
        display: DisplayOptions::default().with_markers(),
    };
    let animators: Vec<Box<dyn Animator>> =
        vec![Box::new(ResamplingAnimator::new(config, Signal::sine(4.1))?)];

    GroupAnimator::new(&animation, animators)
}

/// How the length of a sampled stretch limits resolution
///
/// sin(2πt) over 10 s at 100 Hz, rectangular windows of 50, 350 and 650
/// samples sliding by 3 samples per frame, 3 s.
pub fn sample_time_comparison(transform: TransformMethod) -> Result<GroupAnimator> {
    let animation = AnimationConfig::new(3.0);
    let values = linspace(0.0, 10.0, 1000)
        .into_iter()
        .map(|t| (2.0 * PI * t).sin())
        .collect();
    let signal = SampledSignal::new(values, 100.0)?;

    let mut animators: Vec<Box<dyn Animator>> = Vec::with_capacity(SAMPLE_TIME_WINDOWS.len());
    for window_size in SAMPLE_TIME_WINDOWS {
        let config = SlidingWindowConfig {
            window: WindowType::Rectangular,
            window_size,
            schedule: FrameSchedule::StrideSlide { stride: 3 },
            reference_frequency: Some(1.0),
            transform,
            display: DisplayOptions::default().with_window(),
        };
        animators.push(Box::new(SlidingWindowAnimator::new(config, signal.clone())?));
    }

    GroupAnimator::new(&animation, animators)
}

/// Hann and flat-top windows sliding across a measured sequence
///
/// The region marker comes first, followed by one analyzer per window,
/// over 10 s with a log amplitude axis.
pub fn sliding_window_analysis(
    values: Vec<f64>,
    sample_rate: f64,
    transform: TransformMethod,
) -> Result<GroupAnimator> {
    let animation = AnimationConfig::new(10.0);
    let clock = animation.clock()?;
    let signal = SampledSignal::new(values, sample_rate)?;

    let mut animators: Vec<Box<dyn Animator>> = vec![Box::new(RegionMarkerAnimator::new(
        signal.clone(),
        ANALYSIS_WINDOW,
        &clock,
    )?)];

    for window in [WindowType::Hann, WindowType::FlatTop] {
        let config = SlidingWindowConfig {
            window,
            window_size: ANALYSIS_WINDOW,
            schedule: FrameSchedule::window_slide(&clock, signal.len(), ANALYSIS_WINDOW),
            reference_frequency: None,
            transform,
            display: DisplayOptions::default().with_window().with_log_amplitude(),
        };
        animators.push(Box::new(SlidingWindowAnimator::new(config, signal.clone())?));
    }

    GroupAnimator::new(&animation, animators)
}
