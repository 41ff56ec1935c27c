//! Sliding window animator
//!
//! A window slides across a fixed measured signal. Each frame the windowed
//! samples are extracted, tiled periodically over the whole signal, and the
//! spectrum of that periodic extension is what the estimator reports.

use super::{expect_schedule, expect_slide_frames, Animator, Artifact, ArtifactKind};
use crate::config::{DisplayOptions, LOG_AMPLITUDE_FLOOR};
use crate::error::{Result, SweepError};
use crate::schedule::{FrameParameter, FrameSchedule, ParameterKind};
use crate::signal::{SampledSignal, SlidingWindow};
use crate::spectrum::magnitude::frequency_axis;
use crate::spectrum::{SpectrumAnalyzer, TransformMethod};
use crate::window::apply::place_window_into;
use crate::window::{generate_window, WindowType};

/// Sliding window configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlidingWindowConfig {
    pub window: WindowType,

    /// Samples inside the window
    pub window_size: usize,

    /// Must yield offsets
    pub schedule: FrameSchedule,

    /// Known frequency of the signal, drawn as a vertical marker
    pub reference_frequency: Option<f64>,

    pub transform: TransformMethod,

    pub display: DisplayOptions,
}

pub struct SlidingWindowAnimator {
    config: SlidingWindowConfig,
    signal: SampledSignal,
    extractor: SlidingWindow,
    analyzer: SpectrumAnalyzer,

    ts: Vec<f64>,
    fs: Vec<f64>,
    weights: Vec<f64>,

    /// Window placed at the current offset, zero elsewhere
    overlay: Vec<f64>,
    windowed: Vec<f64>,
    sample: Vec<f64>,
    offset: usize,

    y_time: Vec<f64>,
    y_freq: Vec<f64>,

    marker_x: [f64; 2],
    marker_y: [f64; 2],
}

impl SlidingWindowAnimator {
    pub fn new(config: SlidingWindowConfig, signal: SampledSignal) -> Result<Self> {
        let extractor = SlidingWindow::new(config.window_size, signal.len())?;
        expect_schedule(&config.schedule, &[ParameterKind::Offset], "offset")?;
        if let FrameSchedule::WindowSlide {
            signal_length,
            window_size,
            ..
        } = config.schedule
        {
            if signal_length != signal.len() || window_size != config.window_size {
                return Err(SweepError::ScheduleGeometry {
                    schedule: config.schedule.name(),
                    reason: format!(
                        "planned a {}-sample window over {} samples, animator has {} over {}",
                        window_size,
                        signal_length,
                        config.window_size,
                        signal.len()
                    ),
                });
            }
        }

        let length = signal.len();
        let marker = config.reference_frequency.unwrap_or(0.0);

        log::debug!(
            "Sliding window: {} window of {} over {} samples at {} Hz, {}",
            config.window.name(),
            config.window_size,
            length,
            signal.sample_rate(),
            config.schedule
        );

        Ok(Self {
            ts: signal.time_axis(),
            fs: frequency_axis(signal.duration(), length),
            weights: generate_window(config.window, config.window_size),
            analyzer: SpectrumAnalyzer::new(config.transform),
            overlay: vec![0.0; length],
            windowed: Vec::with_capacity(length),
            sample: Vec::with_capacity(config.window_size),
            offset: 0,
            y_time: Vec::with_capacity(length),
            y_freq: Vec::with_capacity(length / 2),
            marker_x: [marker, marker],
            marker_y: [LOG_AMPLITUDE_FLOOR, 1.0],
            extractor,
            signal,
            config,
        })
    }

    /// Window start offset of the last evaluated frame
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn config(&self) -> &SlidingWindowConfig {
        &self.config
    }

    fn offset_for(&self, frame: usize) -> usize {
        match self.config.schedule.parameter(frame) {
            FrameParameter::Offset(k) => k,
            other => other.value() as usize,
        }
    }
}

impl Animator for SlidingWindowAnimator {
    fn step(&mut self, frame: usize) -> Result<Vec<Artifact<'_>>> {
        let k = self.offset_for(frame);
        log::trace!("Sliding window frame {}: offset {}", frame, k);
        self.offset = k;

        place_window_into(&self.weights, k, &mut self.overlay);

        self.windowed.clear();
        self.windowed.extend(
            self.signal
                .values()
                .iter()
                .zip(self.overlay.iter())
                .map(|(&s, &w)| s * w),
        );

        self.sample.clear();
        self.sample.extend_from_slice(self.extractor.sample(&self.windowed, k));
        self.extractor.reconstruct_into(&self.sample, k, &mut self.y_time);

        self.analyzer.analyze_into(&self.y_time, &mut self.y_freq)?;
        self.config.display.apply_amplitude_scale(&mut self.y_freq);

        let start = k.min(self.ts.len());
        let region_ts = &self.ts[start..start + self.sample.len()];

        let display = self.config.display;
        let mut artifacts = vec![
            Artifact::new(ArtifactKind::Signal, &self.ts, &self.y_time)
                .with_markers(display.plot_markers),
            Artifact::new(ArtifactKind::Spectrum, &self.fs, &self.y_freq),
        ];
        if display.plot_window {
            artifacts.push(Artifact::new(ArtifactKind::WindowOverlay, &self.ts, &self.overlay));
        }
        artifacts.push(Artifact::new(ArtifactKind::SampledRegion, region_ts, &self.sample));
        if self.config.reference_frequency.is_some() {
            artifacts.push(Artifact::new(
                ArtifactKind::ReferenceFrequency,
                &self.marker_x,
                &self.marker_y,
            ));
        }

        Ok(artifacts)
    }

    fn check_frames(&self, total_frames: usize) -> Result<()> {
        expect_slide_frames(&self.config.schedule, total_frames)
    }
}
