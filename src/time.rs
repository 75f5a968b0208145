//! Millisecond tick counter with wraparound-safe arithmetic.
//!
//! The rover loop only ever compares instants that are close to each other
//! (well under 2^31 ms apart), so a wrapping `u32` counter is enough and
//! keeps every session state small. Differences are taken modulo 2^32 and
//! interpreted as signed, the same way hardware tick counters are compared.

use embassy_time::{Duration, Instant};

/// Point on a wrapping millisecond counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Ticks(u32);

impl Ticks {
    /// Counter origin.
    pub const ZERO: Self = Self(0);

    /// Largest offset, in milliseconds, that [`Ticks::wrapping_add`] applies.
    pub const MAX_OFFSET: u32 = u32::MAX >> 1;

    /// Create a tick value from a raw millisecond count.
    pub const fn from_millis(millis: u32) -> Self {
        Self(millis)
    }

    /// Raw millisecond count.
    pub const fn as_millis(self) -> u32 {
        self.0
    }

    /// Signed distance `self - earlier` in milliseconds.
    ///
    /// Correct across a single counter wrap as long as the true distance
    /// fits in an `i32`.
    #[allow(clippy::cast_possible_wrap)]
    pub const fn diff(self, earlier: Self) -> i32 {
        self.0.wrapping_sub(earlier.0) as i32
    }

    /// Time elapsed since `earlier`.
    ///
    /// Returns zero if `earlier` lies in the future.
    #[allow(clippy::cast_sign_loss)]
    pub const fn elapsed_since(self, earlier: Self) -> Duration {
        let diff = self.diff(earlier);
        if diff <= 0 {
            return Duration::from_millis(0);
        }
        Duration::from_millis(diff as u64)
    }

    /// Check whether `self` is at or past `deadline`.
    pub const fn is_at_or_after(self, deadline: Self) -> bool {
        self.diff(deadline) >= 0
    }

    /// Add a duration, wrapping around the counter.
    ///
    /// Offsets saturate at [`Ticks::MAX_OFFSET`], the furthest point that
    /// still compares as later than `self`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
    pub const fn wrapping_add(self, duration: Duration) -> Self {
        let millis = duration.as_millis();
        let offset = if millis > Self::MAX_OFFSET as u64 {
            Self::MAX_OFFSET
        } else {
            millis as u32
        };
        Self(self.0.wrapping_add(offset))
    }
}

/// Source of the current tick value.
pub trait Clock {
    /// Current time.
    fn now(&self) -> Ticks;
}

/// Clock backed by the `embassy-time` driver.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[allow(clippy::cast_possible_truncation)]
    fn now(&self) -> Ticks {
        // Truncation is the wrap.
        Ticks::from_millis(Instant::now().as_millis() as u32)
    }
}
