//! Ordered color sequences played through a [`ColorFader`].

use embassy_time::Duration;

use crate::StripDriver;
use crate::color::{Rgb, solid};
use crate::fade::{ColorFader, FadeStatus};
use crate::time::Ticks;

/// A single step of a color sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceStep<const N: usize> {
    /// Vector to fade to
    pub target: [Rgb; N],
    /// Fade duration; zero jumps straight to the target
    pub duration: Duration,
}

impl<const N: usize> SequenceStep<N> {
    pub const fn new(target: [Rgb; N], duration_ms: u64) -> Self {
        Self {
            target,
            duration: Duration::from_millis(duration_ms),
        }
    }

    /// Step that fills every LED with one color
    pub const fn solid(color: Rgb, duration_ms: u64) -> Self {
        Self::new(solid(color), duration_ms)
    }
}

/// Static list of sequence steps
pub type Sequence<const N: usize> = &'static [SequenceStep<N>];

/// Sequence validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceError {
    /// No steps provided
    EmptySequence,
}

impl core::fmt::Display for SequenceError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SequenceError::EmptySequence => write!(f, "sequence must have at least one step"),
        }
    }
}

/// Drives a [`ColorFader`] through a sequence, optionally looping.
///
/// Holds at most one session: a new `play` or `fade_to` preempts whatever
/// was running.
#[derive(Debug, Clone)]
pub struct SequencePlayer<const N: usize> {
    fader: ColorFader<N>,
    steps: Sequence<N>,
    index: usize,
    looping: bool,
    active: bool,
}

impl<const N: usize> SequencePlayer<N> {
    pub const fn new() -> Self {
        Self {
            fader: ColorFader::new(),
            steps: &[],
            index: 0,
            looping: false,
            active: false,
        }
    }

    /// Fade the strip to `target` outside of any sequence.
    ///
    /// The fade starts from whatever the strip currently shows.
    pub fn fade_to<S: StripDriver<N>>(
        &mut self,
        strip: &S,
        target: [Rgb; N],
        duration: Duration,
        now: Ticks,
    ) {
        self.active = false;
        self.fader.start(strip.current(), target, duration, now);
    }

    /// Start playing `steps` from the first one.
    ///
    /// An empty sequence is rejected and leaves the current session running.
    pub fn play<S: StripDriver<N>>(
        &mut self,
        strip: &S,
        steps: Sequence<N>,
        looping: bool,
        now: Ticks,
    ) -> Result<(), SequenceError> {
        let Some(first) = steps.first() else {
            return Err(SequenceError::EmptySequence);
        };

        self.steps = steps;
        self.index = 0;
        self.looping = looping;
        self.active = true;
        self.fader
            .start(strip.current(), first.target, first.duration, now);
        Ok(())
    }

    /// Turn the strip off and end the session
    pub fn stop<S: StripDriver<N>>(&mut self, strip: &mut S) {
        self.active = false;
        self.fader.stop(strip);
    }

    /// Advance the current fade and, on completion, the sequence
    pub fn tick<S: StripDriver<N>>(&mut self, strip: &mut S, now: Ticks) {
        if self.fader.tick(strip, now) != FadeStatus::Complete || !self.active {
            return;
        }

        self.index += 1;
        if self.index >= self.steps.len() {
            if !self.looping {
                // Last target stays on the strip
                self.active = false;
                return;
            }
            self.index = 0;
        }

        let step = self.steps[self.index];
        self.fader
            .start(strip.current(), step.target, step.duration, now);
    }

    /// Check if a sequence session is running
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Check if a fade (standalone or sequence step) is in progress
    pub const fn is_fading(&self) -> bool {
        self.fader.is_active()
    }

    /// Index of the step currently being played
    pub const fn step_index(&self) -> usize {
        self.index
    }
}

impl<const N: usize> Default for SequencePlayer<N> {
    fn default() -> Self {
        Self::new()
    }
}
