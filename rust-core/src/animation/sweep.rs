//! Windowed sweep animator
//!
//! A parametric signal is evaluated on a fixed time axis with the swept
//! parameter, weighted by a window spanning the whole axis, and analyzed.

use super::{expect_schedule, Animator, Artifact, ArtifactKind};
use crate::config::DisplayOptions;
use crate::error::{Result, SweepError};
use crate::schedule::{FrameSchedule, ParameterKind};
use crate::signal::Signal;
use crate::spectrum::magnitude::{frequency_axis, linspace};
use crate::spectrum::{SpectrumAnalyzer, TransformMethod};
use crate::window::apply::apply_weights_inplace;
use crate::window::{generate_window, WindowType};

/// Windowed sweep configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowedSweepConfig {
    /// Length of the time axis in seconds
    pub t_max: f64,

    /// Number of points on the time axis
    pub samples: usize,

    /// Window applied over the whole axis
    pub window: WindowType,

    /// Must yield time parameters
    pub schedule: FrameSchedule,

    pub transform: TransformMethod,

    pub display: DisplayOptions,
}

pub struct WindowedSweepAnimator {
    config: WindowedSweepConfig,
    signal: Signal,
    analyzer: SpectrumAnalyzer,

    ts: Vec<f64>,
    fs: Vec<f64>,
    weights: Vec<f64>,

    y_time: Vec<f64>,
    y_freq: Vec<f64>,
}

impl WindowedSweepAnimator {
    pub fn new(config: WindowedSweepConfig, signal: Signal) -> Result<Self> {
        if !(config.t_max.is_finite() && config.t_max > 0.0) {
            return Err(SweepError::InvalidTimeSpan(config.t_max));
        }
        if config.samples < 2 {
            return Err(SweepError::TooFewSamples(config.samples));
        }
        expect_schedule(&config.schedule, &[ParameterKind::Time], "time")?;

        log::debug!(
            "Windowed sweep: {} window, {} samples over {} s, {}",
            config.window.name(),
            config.samples,
            config.t_max,
            config.schedule
        );

        Ok(Self {
            ts: linspace(0.0, config.t_max, config.samples),
            fs: frequency_axis(config.t_max, config.samples),
            weights: generate_window(config.window, config.samples),
            y_time: Vec::with_capacity(config.samples),
            y_freq: Vec::with_capacity(config.samples / 2),
            analyzer: SpectrumAnalyzer::new(config.transform),
            signal,
            config,
        })
    }

    pub fn config(&self) -> &WindowedSweepConfig {
        &self.config
    }

    pub fn window_weights(&self) -> &[f64] {
        &self.weights
    }
}

impl Animator for WindowedSweepAnimator {
    fn step(&mut self, frame: usize) -> Result<Vec<Artifact<'_>>> {
        let k = self.config.schedule.parameter(frame).value();
        log::trace!("Windowed sweep frame {}: k = {}", frame, k);

        self.signal.evaluate_into(k, &self.ts, &mut self.y_time);
        apply_weights_inplace(&mut self.y_time, &self.weights);

        self.analyzer.analyze_into(&self.y_time, &mut self.y_freq)?;
        self.config.display.apply_amplitude_scale(&mut self.y_freq);

        let display = self.config.display;
        let mut artifacts = vec![
            Artifact::new(ArtifactKind::Signal, &self.ts, &self.y_time)
                .with_markers(display.plot_markers),
            Artifact::new(ArtifactKind::Spectrum, &self.fs, &self.y_freq),
        ];
        if display.plot_window {
            artifacts.push(Artifact::new(ArtifactKind::WindowOverlay, &self.ts, &self.weights));
        }

        Ok(artifacts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::assert_deterministic;
    use crate::schedule::FrameClock;

    fn config(window: WindowType) -> WindowedSweepConfig {
        let clock = FrameClock::new(5.0, 20).unwrap();
        WindowedSweepConfig {
            t_max: 20.0,
            samples: 1000,
            window,
            schedule: FrameSchedule::phase_sweep(&clock),
            transform: TransformMethod::Fast,
            display: DisplayOptions::default().with_window(),
        }
    }

    fn sweep(window: WindowType) -> WindowedSweepAnimator {
        WindowedSweepAnimator::new(config(window), Signal::swept_sine(0.25)).unwrap()
    }

    #[test]
    fn test_artifact_shapes() {
        let mut anim = sweep(WindowType::Hann);
        let artifacts = anim.step(100).unwrap();

        assert_eq!(artifacts.len(), 3);
        assert_eq!(artifacts[0].kind, ArtifactKind::Signal);
        assert_eq!(artifacts[0].x.len(), 1000);
        assert_eq!(artifacts[0].y.len(), 1000);
        assert_eq!(artifacts[1].kind, ArtifactKind::Spectrum);
        assert_eq!(artifacts[1].x.len(), 500);
        assert_eq!(artifacts[1].y.len(), 500);
        assert_eq!(artifacts[2].kind, ArtifactKind::WindowOverlay);

        // Hann pins both ends of the weighted signal to zero
        assert!(artifacts[0].y[0].abs() < 1e-12);
        assert!(artifacts[0].y[999].abs() < 1e-12);
    }

    #[test]
    fn test_frame_zero_is_silent() {
        // k = 0 makes the swept sine identically zero
        let mut anim = sweep(WindowType::Rectangular);
        let artifacts = anim.initialize().unwrap();

        assert!(artifacts[0].y.iter().all(|y| y.abs() < 1e-12));
        assert!(artifacts[1].y.iter().all(|m| m.abs() < 1e-12));
    }

    #[test]
    fn test_peak_follows_sweep() {
        let mut anim = sweep(WindowType::Rectangular);

        // Frame 200: k = 4, a 1 Hz tone
        let artifacts = anim.step(200).unwrap();
        let spectrum = &artifacts[1];
        let (peak, _) = spectrum
            .y
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap())
            .unwrap();

        assert!((spectrum.x[peak] - 1.0).abs() <= spectrum.x[1]);
    }

    #[test]
    fn test_rejects_offset_schedule() {
        let mut bad = config(WindowType::Hann);
        bad.schedule = FrameSchedule::StrideSlide { stride: 3 };

        assert!(matches!(
            WindowedSweepAnimator::new(bad, Signal::swept_sine(0.25)),
            Err(SweepError::ScheduleMismatch { .. })
        ));
    }

    #[test]
    fn test_deterministic() {
        assert_deterministic(
            || sweep(WindowType::FlatTop),
            &[0, 17, 120, 3, 249],
        );
    }
}
