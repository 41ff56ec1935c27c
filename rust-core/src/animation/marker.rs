//! Region marker animator
//!
//! Draws the bounds of a window moving across a raw measured signal and
//! emits the samples currently inside it. Nothing is analyzed here; it runs
//! next to a [`SlidingWindowAnimator`](super::SlidingWindowAnimator) to show
//! where that one is looking.

use super::{expect_slide_frames, Animator, Artifact, ArtifactKind};
use crate::error::Result;
use crate::schedule::{FrameClock, FrameParameter, FrameSchedule};
use crate::signal::{SampledSignal, SlidingWindow};

pub struct RegionMarkerAnimator {
    signal: SampledSignal,
    schedule: FrameSchedule,
    total_frames: usize,
    window_size: usize,

    ts: Vec<f64>,

    /// Window width in seconds
    time_size: f64,

    bounds_x: [f64; 2],
    bounds_y: [f64; 2],
    offset: usize,
}

impl RegionMarkerAnimator {
    pub fn new(signal: SampledSignal, window_size: usize, clock: &FrameClock) -> Result<Self> {
        SlidingWindow::new(window_size, signal.len())?;
        let schedule = FrameSchedule::window_slide(clock, signal.len(), window_size);
        schedule.validate()?;

        let ts = signal.time_axis();
        let t_end = ts.last().copied().unwrap_or(0.0);
        let time_size = window_size as f64 / signal.len() as f64 * t_end;

        let (low, high) = signal
            .values()
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));

        log::debug!(
            "Region marker: {} of {} samples ({:.3} s) over {} frames",
            window_size,
            signal.len(),
            time_size,
            clock.total_frames()
        );

        Ok(Self {
            total_frames: clock.total_frames(),
            bounds_x: [0.0, time_size],
            bounds_y: [low, high],
            offset: 0,
            window_size,
            time_size,
            schedule,
            signal,
            ts,
        })
    }

    /// Sample index where the marked region starts
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Width of the marked region in seconds
    pub fn time_size(&self) -> f64 {
        self.time_size
    }
}

impl Animator for RegionMarkerAnimator {
    fn step(&mut self, frame: usize) -> Result<Vec<Artifact<'_>>> {
        let t_end = self.ts.last().copied().unwrap_or(0.0);
        let progress = frame.min(self.total_frames) as f64 / self.total_frames as f64;
        let start = progress * (t_end - self.time_size);
        self.bounds_x = [start, start + self.time_size];

        let k = match self.schedule.parameter(frame) {
            FrameParameter::Offset(k) => k,
            other => other.value() as usize,
        };
        self.offset = k;
        log::trace!("Region marker frame {}: {:.3} s, offset {}", frame, start, k);

        let region = k..k + self.window_size;
        Ok(vec![
            Artifact::new(ArtifactKind::RegionBounds, &self.bounds_x, &self.bounds_y),
            Artifact::new(
                ArtifactKind::SampledRegion,
                &self.ts[region.clone()],
                &self.signal.values()[region],
            ),
        ])
    }

    fn check_frames(&self, total_frames: usize) -> Result<()> {
        expect_slide_frames(&self.schedule, total_frames)
    }
}
