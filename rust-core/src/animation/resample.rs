//! Resampling animator
//!
//! Resamples a continuous signal over a fixed time span with a growing
//! sample count (or sampling rate), showing resolution improving and
//! aliasing disappearing as N grows.

use super::{expect_schedule, Animator, Artifact, ArtifactKind};
use crate::config::DisplayOptions;
use crate::error::{Result, SweepError};
use crate::schedule::{
    bounded_count, FrameSchedule, ParameterKind, MAX_SAMPLE_COUNT, MIN_SAMPLE_COUNT,
};
use crate::signal::Signal;
use crate::spectrum::magnitude::{frequency_axis, frequency_axis_into, linspace, linspace_into};
use crate::spectrum::{SpectrumAnalyzer, TransformMethod};
use crate::window::apply::apply_weights_inplace;
use crate::window::{generate_window, WindowType};

/// Points used for the dense reference curve
pub const REFERENCE_SAMPLES: usize = 1000;

/// Resampling configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResamplingConfig {
    /// Time span sampled every frame, seconds
    pub t_max: f64,

    /// Must yield sample counts or sampling rates
    pub schedule: FrameSchedule,

    /// Optional window over the sampled points
    pub window: Option<WindowType>,

    pub transform: TransformMethod,

    pub display: DisplayOptions,
}

pub struct ResamplingAnimator {
    config: ResamplingConfig,
    signal: Signal,
    analyzer: SpectrumAnalyzer,

    /// Sample count of the most recent frame
    sample_count: usize,

    ts: Vec<f64>,
    fs: Vec<f64>,
    weights: Vec<f64>,
    y_time: Vec<f64>,
    y_freq: Vec<f64>,

    reference_ts: Vec<f64>,
    reference_y: Vec<f64>,
    reference_fs: Vec<f64>,
    reference_freq: Vec<f64>,
}

impl ResamplingAnimator {
    pub fn new(config: ResamplingConfig, signal: Signal) -> Result<Self> {
        if !(config.t_max.is_finite() && config.t_max > 0.0) {
            return Err(SweepError::InvalidTimeSpan(config.t_max));
        }
        expect_schedule(
            &config.schedule,
            &[ParameterKind::SampleCount, ParameterKind::SampleRate],
            "sample count or sample rate",
        )?;

        // Dense reference, drawn once behind the animated lines
        let reference_ts = linspace(0.0, config.t_max, REFERENCE_SAMPLES);
        let mut reference_y = Vec::with_capacity(REFERENCE_SAMPLES);
        signal.evaluate_into(0.0, &reference_ts, &mut reference_y);

        let mut reference_freq =
            SpectrumAnalyzer::new(TransformMethod::Fast).analyze(&reference_y)?;
        config.display.apply_amplitude_scale(&mut reference_freq);

        log::debug!(
            "Resampling: {} s span, {}, window {:?}",
            config.t_max,
            config.schedule,
            config.window.map(|w| w.name())
        );

        Ok(Self {
            analyzer: SpectrumAnalyzer::new(config.transform),
            sample_count: 0,
            ts: Vec::new(),
            fs: Vec::new(),
            weights: Vec::new(),
            y_time: Vec::new(),
            y_freq: Vec::new(),
            reference_fs: frequency_axis(config.t_max, REFERENCE_SAMPLES),
            reference_ts,
            reference_y,
            reference_freq,
            signal,
            config,
        })
    }

    /// Sample count for `frame`, within `[MIN_SAMPLE_COUNT, MAX_SAMPLE_COUNT]`
    pub fn sample_count_for(&self, frame: usize) -> usize {
        let requested = self
            .config
            .schedule
            .samples_requested(frame, self.config.t_max)
            .unwrap_or(MIN_SAMPLE_COUNT as f64);

        if requested < MIN_SAMPLE_COUNT as f64 {
            log::warn!(
                "Frame {} asks for {} samples, clamping to {}",
                frame,
                requested,
                MIN_SAMPLE_COUNT
            );
        }
        bounded_count(requested)
    }

    /// Sample count of the last evaluated frame
    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    /// Dense signal and its spectrum, static for the whole run
    pub fn reference_artifacts(&self) -> Vec<Artifact<'_>> {
        vec![
            Artifact::new(ArtifactKind::ReferenceSignal, &self.reference_ts, &self.reference_y),
            Artifact::new(
                ArtifactKind::ReferenceSpectrum,
                &self.reference_fs,
                &self.reference_freq,
            ),
        ]
    }

    pub fn config(&self) -> &ResamplingConfig {
        &self.config
    }

    fn evaluate(&mut self, frame: usize) -> Result<()> {
        let n = self.sample_count_for(frame);
        log::trace!("Resampling frame {}: {} samples", frame, n);

        self.sample_count = n;
        linspace_into(0.0, self.config.t_max, n, &mut self.ts);
        frequency_axis_into(self.config.t_max, n, &mut self.fs);

        self.signal.evaluate_into(0.0, &self.ts, &mut self.y_time);
        if let Some(window) = self.config.window {
            self.weights = generate_window(window, n);
            apply_weights_inplace(&mut self.y_time, &self.weights);
        }

        self.analyzer.analyze_into(&self.y_time, &mut self.y_freq)?;
        self.config.display.apply_amplitude_scale(&mut self.y_freq);
        Ok(())
    }

    fn frame_artifacts(&self) -> Vec<Artifact<'_>> {
        let display = self.config.display;
        let mut artifacts = vec![
            Artifact::new(ArtifactKind::Signal, &self.ts, &self.y_time)
                .with_markers(display.plot_markers),
            Artifact::new(ArtifactKind::Spectrum, &self.fs, &self.y_freq),
        ];
        if display.plot_window && self.config.window.is_some() {
            artifacts.push(Artifact::new(ArtifactKind::WindowOverlay, &self.ts, &self.weights));
        }
        artifacts
    }
}

impl Animator for ResamplingAnimator {
    /// Frame 0 followed by the static reference curves
    fn initialize(&mut self) -> Result<Vec<Artifact<'_>>> {
        self.evaluate(0)?;
        let mut artifacts = self.frame_artifacts();
        artifacts.extend(self.reference_artifacts());
        Ok(artifacts)
    }

    fn step(&mut self, frame: usize) -> Result<Vec<Artifact<'_>>> {
        self.evaluate(frame)?;
        Ok(self.frame_artifacts())
    }

    /// The last frame must stay below [`MAX_SAMPLE_COUNT`]
    fn check_frames(&self, total_frames: usize) -> Result<()> {
        let last = total_frames.saturating_sub(1);
        match self.config.schedule.samples_requested(last, self.config.t_max) {
            Some(requested) if !requested.is_finite() || requested >= MAX_SAMPLE_COUNT as f64 => {
                Err(SweepError::SampleCountTooLarge {
                    frame: last,
                    requested,
                    max: MAX_SAMPLE_COUNT,
                })
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::assert_deterministic;
    use crate::schedule::FrameClock;
    use crate::GroupAnimator;

    fn config(schedule: FrameSchedule) -> ResamplingConfig {
        ResamplingConfig {
            t_max: 2.0,
            schedule,
            window: None,
            transform: TransformMethod::Naive,
            display: DisplayOptions::default().with_markers(),
        }
    }

    fn sine_sweep(schedule: FrameSchedule) -> ResamplingAnimator {
        ResamplingAnimator::new(config(schedule), Signal::sine(2.0)).unwrap()
    }

    fn peak_frequency(artifact: &Artifact<'_>) -> f64 {
        let (peak, _) = artifact
            .y
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap())
            .unwrap();
        artifact.x[peak]
    }

    #[test]
    fn test_sample_count_sweep() {
        let mut anim = sine_sweep(FrameSchedule::sample_count());

        let artifacts = anim.initialize().unwrap();
        assert_eq!(artifacts[0].x.len(), 2);
        assert_eq!(artifacts[1].y.len(), 1);
        assert!(artifacts[0].markers);
        assert_eq!(anim.sample_count(), 2);

        anim.step(40).unwrap();
        assert_eq!(anim.sample_count(), 3);
    }

    #[test]
    fn test_peak_converges_to_signal_frequency() {
        let mut anim = sine_sweep(FrameSchedule::sample_count());

        // exp(i/40) + 1 reaches 17, 55 and 404 samples
        for frame in [111, 160, 240] {
            let artifacts = anim.step(frame).unwrap();
            let spectrum = &artifacts[1];
            let bin_width = spectrum.x[1] - spectrum.x[0];

            let error = (peak_frequency(spectrum) - 2.0).abs();
            assert!(error <= bin_width, "frame {}", frame);
        }
    }

    #[test]
    fn test_sampling_rate_sweep() {
        let mut anim = sine_sweep(FrameSchedule::sampling_rate());

        anim.step(0).unwrap();
        assert_eq!(anim.sample_count(), 2);

        // rate = 400/20 + 1 = 21 Hz over 2 s
        let artifacts = anim.step(400).unwrap();
        assert_eq!(artifacts[0].x.len(), 42);
        assert_eq!(artifacts[1].x.len(), 21);
        assert_eq!(anim.sample_count(), 42);
    }

    #[test]
    fn test_initialize_emits_reference() {
        let mut anim =
            ResamplingAnimator::new(config(FrameSchedule::sample_count()), Signal::sine(4.1))
                .unwrap();
        let artifacts = anim.initialize().unwrap();

        let kinds: Vec<ArtifactKind> = artifacts.iter().map(|a| a.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ArtifactKind::Signal,
                ArtifactKind::Spectrum,
                ArtifactKind::ReferenceSignal,
                ArtifactKind::ReferenceSpectrum,
            ]
        );
        assert_eq!(artifacts[2].x.len(), REFERENCE_SAMPLES);
        assert_eq!(artifacts[3].y.len(), REFERENCE_SAMPLES / 2);
        assert!((peak_frequency(&artifacts[3]) - 4.1).abs() < 0.5);

        // Later frames only redraw the moving lines
        assert_eq!(anim.step(10).unwrap().len(), 2);
    }

    #[test]
    fn test_window_overlay_follows_sample_count() {
        let mut cfg = config(FrameSchedule::sample_count());
        cfg.window = Some(WindowType::Hann);
        cfg.display = cfg.display.with_window();
        let mut anim = ResamplingAnimator::new(cfg, Signal::sine(2.0)).unwrap();

        let artifacts = anim.step(80).unwrap();
        assert_eq!(artifacts.len(), 3);
        assert_eq!(artifacts[2].kind, ArtifactKind::WindowOverlay);
        assert_eq!(artifacts[2].y.len(), 8);
        assert!(artifacts[2].y[0].abs() < 1e-12);
    }

    #[test]
    fn test_long_run_rejected_up_front() {
        // 2000 frames: exp(1999/40) is far past the cap
        let clock = FrameClock::new(40.0, 20).unwrap();
        let animators: Vec<Box<dyn Animator>> =
            vec![Box::new(sine_sweep(FrameSchedule::sample_count()))];
        assert!(matches!(
            GroupAnimator::from_clock(clock, animators),
            Err(SweepError::SampleCountTooLarge { frame: 1999, .. })
        ));

        // The 7 s run tops out near 6150 samples
        let clock = FrameClock::new(7.0, 20).unwrap();
        let animators: Vec<Box<dyn Animator>> =
            vec![Box::new(sine_sweep(FrameSchedule::sample_count()))];
        assert!(GroupAnimator::from_clock(clock, animators).is_ok());
    }

    #[test]
    fn test_oversized_frame_is_capped() {
        let anim = sine_sweep(FrameSchedule::sample_count());
        assert_eq!(anim.sample_count_for(1800), MAX_SAMPLE_COUNT);
        assert_eq!(anim.sample_count_for(100_000), MAX_SAMPLE_COUNT);
    }

    #[test]
    fn test_rejects_time_schedule() {
        let schedule = FrameSchedule::PhaseSweep { interval_ms: 20 };
        assert!(matches!(
            ResamplingAnimator::new(config(schedule), Signal::sine(2.0)),
            Err(SweepError::ScheduleMismatch { .. })
        ));

        let flat = ResamplingConfig {
            t_max: 0.0,
            ..config(FrameSchedule::sample_count())
        };
        assert!(matches!(
            ResamplingAnimator::new(flat, Signal::sine(2.0)),
            Err(SweepError::InvalidTimeSpan(_))
        ));
    }

    #[test]
    fn test_deterministic() {
        assert_deterministic(
            || sine_sweep(FrameSchedule::slow_sample_count()),
            &[0, 40, 200, 5, 120],
        );
    }
}
