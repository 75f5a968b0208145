//! Bitmap matrix frames and frame cycling.

use embassy_time::Duration;

use crate::time::Ticks;

/// Number of bytes in one matrix frame (16x8 pixels)
pub const FRAME_LEN: usize = 16;

/// One still image for the matrix display, in linear pixel order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Frame(pub [u8; FRAME_LEN]);

impl Frame {
    /// Frame with every pixel off
    pub const BLANK: Self = Self([0; FRAME_LEN]);

    pub const fn new(bytes: [u8; FRAME_LEN]) -> Self {
        Self(bytes)
    }

    pub const fn as_bytes(&self) -> &[u8; FRAME_LEN] {
        &self.0
    }
}

impl TryFrom<&[u8]> for Frame {
    type Error = FrameError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; FRAME_LEN] = bytes
            .try_into()
            .map_err(|_| FrameError::InvalidLength(bytes.len()))?;
        Ok(Self(bytes))
    }
}

/// Frame validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameError {
    /// Frame data is not exactly [`FRAME_LEN`] bytes long
    InvalidLength(usize),
    /// Animation has no frames
    Empty,
}

impl core::fmt::Display for FrameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FrameError::InvalidLength(len) => {
                write!(f, "frame must be {FRAME_LEN} bytes, got {len}")
            }
            FrameError::Empty => write!(f, "animation must have at least one frame"),
        }
    }
}

/// Static list of animation frames
pub type Frames = &'static [Frame];

/// Matrix display sink
///
/// Implement this trait to support different matrix drivers.
pub trait MatrixSink {
    /// Power up the display. Called once at startup.
    fn init(&mut self);

    /// Turn every pixel off
    fn clear(&mut self);

    /// Show one frame
    fn show(&mut self, frame: &Frame);
}

/// Cycles through frames at a fixed interval.
///
/// Frame switches are phase-locked to the delay: each switch moves the
/// reference time forward by exactly one delay, unless the cycler fell more
/// than a whole delay behind, in which case it restarts from `now`. The
/// frame period is therefore exactly `delay`, whatever the loop period.
#[derive(Debug, Clone)]
pub struct FrameCycler {
    frames: Frames,
    delay: Duration,
    last_tick: Ticks,
    index: usize,
    active: bool,
}

impl FrameCycler {
    pub const fn new() -> Self {
        Self {
            frames: &[],
            delay: Duration::from_millis(0),
            last_tick: Ticks::ZERO,
            index: 0,
            active: false,
        }
    }

    /// Start cycling `frames`, showing the first one immediately
    pub fn play<M: MatrixSink>(
        &mut self,
        sink: &mut M,
        frames: Frames,
        delay: Duration,
        now: Ticks,
    ) -> Result<(), FrameError> {
        let Some(first) = frames.first() else {
            return Err(FrameError::Empty);
        };

        self.frames = frames;
        self.delay = delay;
        self.index = 0;
        self.last_tick = now;
        self.active = true;
        sink.show(first);
        Ok(())
    }

    /// Stop cycling and show a single frame
    pub fn show_static<M: MatrixSink>(&mut self, sink: &mut M, frame: &Frame) {
        self.stop();
        sink.show(frame);
    }

    /// Stop cycling; the last frame stays on the display
    pub fn stop(&mut self) {
        self.active = false;
    }

    /// Switch to the next frame once the delay has passed
    pub fn tick<M: MatrixSink>(&mut self, sink: &mut M, now: Ticks) {
        if !self.active || self.frames.is_empty() {
            return;
        }
        if now.elapsed_since(self.last_tick) <= self.delay {
            return;
        }

        self.index = (self.index + 1) % self.frames.len();
        sink.show(&self.frames[self.index]);

        let due = self.last_tick.wrapping_add(self.delay);
        self.last_tick = if now.elapsed_since(due) > self.delay {
            now
        } else {
            due
        };
    }

    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Index of the frame currently shown
    pub const fn frame_index(&self) -> usize {
        self.index
    }
}

impl Default for FrameCycler {
    fn default() -> Self {
        Self::new()
    }
}
