//! Drive directions and the motor auto-stop deadline.

use embassy_time::Duration;

use crate::time::Ticks;

/// Number of driven wheels
pub const WHEEL_COUNT: usize = 4;

/// Rotation of a single wheel (`-1`, `0`, `1` in remote tables)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Reverse,
    #[default]
    Neutral,
    Forward,
}

/// Every wheel stopped
pub const ALL_NEUTRAL: [Direction; WHEEL_COUNT] = [Direction::Neutral; WHEEL_COUNT];

/// Motor output stage
///
/// Wheel order is front-left, front-right, rear-left, rear-right.
pub trait Actuators {
    /// Apply one direction per wheel
    fn drive(&mut self, wheels: [Direction; WHEEL_COUNT]);
}

/// Single deferred stop after a drive command.
///
/// A new schedule overwrites the pending one.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActuatorTimer {
    deadline: Option<Ticks>,
}

impl ActuatorTimer {
    pub const fn new() -> Self {
        Self { deadline: None }
    }

    /// Arm the stop `duration` from `now`; zero disarms it.
    ///
    /// Durations beyond [`Ticks::MAX_OFFSET`] (about 24 days) are capped.
    pub fn schedule(&mut self, duration: Duration, now: Ticks) {
        self.deadline = if duration.as_millis() > 0 {
            Some(now.wrapping_add(duration))
        } else {
            None
        };
    }

    /// Drop the pending stop
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Returns `true` exactly once, on the first tick at or past the deadline
    pub fn tick(&mut self, now: Ticks) -> bool {
        match self.deadline {
            Some(deadline) if now.is_at_or_after(deadline) => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub const fn deadline(&self) -> Option<Ticks> {
        self.deadline
    }
}
