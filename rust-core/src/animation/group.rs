//! Composite animator
//!
//! Owns several animators that share one frame clock, fans each call out in
//! insertion order and concatenates what they return.

use super::{Animator, Artifact};
use crate::config::AnimationConfig;
use crate::error::{Result, SweepError};
use crate::schedule::FrameClock;

/// Which half of the protocol produced a batch of artifacts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Initialize,
    Frame(usize),
}

pub struct GroupAnimator {
    clock: FrameClock,
    animators: Vec<Box<dyn Animator>>,
}

impl GroupAnimator {
    /// # Errors
    /// Fails if the duration or interval yields no frames, or if an animator
    /// cannot serve that many frames.
    pub fn new(config: &AnimationConfig, animators: Vec<Box<dyn Animator>>) -> Result<Self> {
        Self::from_clock(config.clock()?, animators)
    }

    /// # Errors
    /// Fails if an animator cannot serve `clock.total_frames()` frames.
    pub fn from_clock(clock: FrameClock, animators: Vec<Box<dyn Animator>>) -> Result<Self> {
        for animator in &animators {
            animator.check_frames(clock.total_frames())?;
        }

        log::debug!(
            "Animator group: {} animators, {} frames at {} ms",
            animators.len(),
            clock.total_frames(),
            clock.interval_ms()
        );

        Ok(Self { clock, animators })
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    pub fn total_frames(&self) -> usize {
        self.clock.total_frames()
    }

    pub fn len(&self) -> usize {
        self.animators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animators.is_empty()
    }

    /// Run the whole protocol in frame order
    ///
    /// `sink` sees the initial artifacts once, then every frame in
    /// `[0, total_frames)`. The first error from an animator or the sink
    /// stops the run.
    pub fn drive<F>(&mut self, mut sink: F) -> Result<()>
    where
        F: FnMut(Phase, &[Artifact<'_>]) -> Result<()>,
    {
        let artifacts = self.initialize()?;
        sink(Phase::Initialize, &artifacts)?;

        for frame in self.clock.frames() {
            let artifacts = self.step(frame)?;
            sink(Phase::Frame(frame), &artifacts)?;
        }

        Ok(())
    }
}

impl Animator for GroupAnimator {
    fn initialize(&mut self) -> Result<Vec<Artifact<'_>>> {
        let mut artifacts = Vec::new();
        for animator in self.animators.iter_mut() {
            artifacts.extend(animator.initialize()?);
        }
        Ok(artifacts)
    }

    fn step(&mut self, frame: usize) -> Result<Vec<Artifact<'_>>> {
        if !self.clock.contains(frame) {
            return Err(SweepError::FrameOutOfRange {
                frame,
                total_frames: self.clock.total_frames(),
            });
        }
        log::trace!("Group frame {}/{}", frame, self.clock.total_frames());

        let mut artifacts = Vec::new();
        for animator in self.animators.iter_mut() {
            artifacts.extend(animator.step(frame)?);
        }
        Ok(artifacts)
    }
}
