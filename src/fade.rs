//! Time-bounded linear fade of a whole LED vector.

use embassy_time::Duration;

use crate::StripDriver;
use crate::color::{OFF, Rgb, lerp_color};
use crate::time::Ticks;

/// Outcome of a single fader tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeStatus {
    /// No fade in progress, nothing was written
    Idle,
    /// Interpolated frame written, fade continues
    Running,
    /// Exact target written, fade is over
    Complete,
}

/// Interpolates an LED vector from a captured source state to a target.
///
/// Writes the full vector on every running tick; the last write of a fade is
/// always the exact target, so no interpolation error is carried over.
#[derive(Debug, Clone)]
pub struct ColorFader<const N: usize> {
    start_time: Ticks,
    duration: Duration,
    source: [Rgb; N],
    target: [Rgb; N],
    active: bool,
}

impl<const N: usize> ColorFader<N> {
    pub const fn new() -> Self {
        Self {
            start_time: Ticks::ZERO,
            duration: Duration::from_millis(0),
            source: [OFF; N],
            target: [OFF; N],
            active: false,
        }
    }

    /// Begin a fade from `source` to `target`, replacing any fade in progress
    pub fn start(&mut self, source: [Rgb; N], target: [Rgb; N], duration: Duration, now: Ticks) {
        self.source = source;
        self.target = target;
        self.duration = duration;
        self.start_time = now;
        self.active = true;
    }

    /// Advance the fade and render it
    pub fn tick<S: StripDriver<N>>(&mut self, strip: &mut S, now: Ticks) -> FadeStatus {
        if !self.active {
            return FadeStatus::Idle;
        }

        let elapsed = now.elapsed_since(self.start_time);
        if elapsed >= self.duration {
            strip.write(&self.target);
            self.active = false;
            return FadeStatus::Complete;
        }

        let mut frame = self.source;
        for ((led, source), target) in frame.iter_mut().zip(&self.source).zip(&self.target) {
            *led = lerp_color(*source, *target, elapsed, self.duration);
        }
        strip.write(&frame);
        FadeStatus::Running
    }

    /// Force every LED off with a single write and drop the fade
    pub fn stop<S: StripDriver<N>>(&mut self, strip: &mut S) {
        self.active = false;
        strip.write(&[OFF; N]);
    }

    pub const fn is_active(&self) -> bool {
        self.active
    }
}

impl<const N: usize> Default for ColorFader<N> {
    fn default() -> Self {
        Self::new()
    }
}
