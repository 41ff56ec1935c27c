//! Animation state machine
//!
//! Animators recompute their buffers from the frame index alone and hand
//! borrowed views of them to the rendering loop. The loop calls
//! `initialize` once, then `step(i)` for every frame in order.

pub mod sweep;
pub mod resample;
pub mod sliding;
pub mod marker;
pub mod group;

pub use sweep::{WindowedSweepAnimator, WindowedSweepConfig};
pub use resample::{ResamplingAnimator, ResamplingConfig};
pub use sliding::{SlidingWindowAnimator, SlidingWindowConfig};
pub use marker::RegionMarkerAnimator;
pub use group::{GroupAnimator, Phase};

use crate::error::{Result, SweepError};
use crate::schedule::{FrameSchedule, ParameterKind};

/// What a series represents, so the renderer knows which line to redraw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// (time, amplitude) of the evaluated or reconstructed signal
    Signal,
    /// (frequency, magnitude)
    Spectrum,
    /// (time, weight) of the window over the display domain
    WindowOverlay,
    /// (time, amplitude) of the samples inside the window
    SampledRegion,
    /// Vertical marker: x = [f, f], y = [low, high]
    ReferenceFrequency,
    /// Window bounds in time: x = [start, end], y = [low, high]
    RegionBounds,
    /// Static dense signal drawn once for comparison
    ReferenceSignal,
    /// Static spectrum of the dense signal
    ReferenceSpectrum,
}

/// Borrowed view of one animator buffer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Artifact<'a> {
    pub kind: ArtifactKind,
    pub x: &'a [f64],
    pub y: &'a [f64],
    /// Draw individual points with markers
    pub markers: bool,
}

impl<'a> Artifact<'a> {
    pub fn new(kind: ArtifactKind, x: &'a [f64], y: &'a [f64]) -> Self {
        Self {
            kind,
            x,
            y,
            markers: false,
        }
    }

    pub fn with_markers(mut self, markers: bool) -> Self {
        self.markers = markers;
        self
    }

    /// Owned copy, for keeping a frame beyond the next `step`
    pub fn snapshot(&self) -> ArtifactSnapshot {
        ArtifactSnapshot {
            kind: self.kind,
            x: self.x.to_vec(),
            y: self.y.to_vec(),
            markers: self.markers,
        }
    }
}

/// Owned copy of an [`Artifact`]
#[derive(Debug, Clone, PartialEq)]
pub struct ArtifactSnapshot {
    pub kind: ArtifactKind,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub markers: bool,
}

/// Snapshot a whole frame
pub fn snapshot(artifacts: &[Artifact<'_>]) -> Vec<ArtifactSnapshot> {
    artifacts.iter().map(Artifact::snapshot).collect()
}

/// Two-phase protocol driven by the rendering loop
pub trait Animator {
    /// Evaluate frame 0
    fn initialize(&mut self) -> Result<Vec<Artifact<'_>>> {
        self.step(0)
    }

    /// Recompute every buffer for `frame` and return the ones that changed
    ///
    /// Calling `step` twice with the same frame yields identical artifacts.
    fn step(&mut self, frame: usize) -> Result<Vec<Artifact<'_>>>;

    /// Reject a run of `total_frames` frames this animator cannot serve
    ///
    /// [`GroupAnimator`] calls this once before any frame is evaluated.
    fn check_frames(&self, total_frames: usize) -> Result<()> {
        let _ = total_frames;
        Ok(())
    }
}

/// Reject a schedule whose parameter the animator cannot use
pub(crate) fn expect_schedule(
    schedule: &FrameSchedule,
    accepted: &[ParameterKind],
    expected: &'static str,
) -> Result<()> {
    schedule.validate()?;
    if accepted.contains(&schedule.kind()) {
        Ok(())
    } else {
        Err(SweepError::ScheduleMismatch {
            schedule: schedule.name(),
            expected,
            found: schedule.kind().name(),
        })
    }
}

/// A window slide spreads its offsets over the frame count it was built for
pub(crate) fn expect_slide_frames(schedule: &FrameSchedule, total_frames: usize) -> Result<()> {
    match *schedule {
        FrameSchedule::WindowSlide {
            total_frames: planned,
            ..
        } if planned != total_frames => Err(SweepError::ScheduleGeometry {
            schedule: schedule.name(),
            reason: format!("built for {} frames, run has {}", planned, total_frames),
        }),
        _ => Ok(()),
    }
}

/// Asserts `step(i)` ignores earlier frames and is idempotent
#[cfg(test)]
pub(crate) fn assert_deterministic<A, F>(make: F, frames: &[usize])
where
    A: Animator,
    F: Fn() -> A,
{
    let mut replayed = make();
    replayed.initialize().unwrap();
    for &frame in frames.iter().rev() {
        replayed.step(frame).unwrap();
    }

    for &frame in frames {
        let mut fresh = make();
        fresh.initialize().unwrap();
        let expected = snapshot(&fresh.step(frame).unwrap());
        let first = snapshot(&replayed.step(frame).unwrap());
        let second = snapshot(&replayed.step(frame).unwrap());

        assert_eq!(expected, first, "frame {} depends on history", frame);
        assert_eq!(first, second, "frame {} is not idempotent", frame);
    }
}
