//! Table-driven mapping from remote codes to rover actions.

use embassy_time::Duration;
use heapless::FnvIndexMap;

use crate::actuator::{Direction, WHEEL_COUNT};
use crate::assets::{self, ROVER_LEDS};
use crate::matrix::{Frame, Frames};
use crate::sequence::Sequence;

/// How long a single drive command keeps the motors running
pub const DRIVE_PULSE: Duration = Duration::from_millis(400);

/// Maximum number of bound codes
pub const KEYMAP_CAPACITY: usize = 32;

/// Something the rover can do in response to a remote code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action<const N: usize> {
    /// Run the wheels, then stop automatically after `duration`
    Drive {
        wheels: [Direction; WHEEL_COUNT],
        duration: Duration,
    },
    /// Play a color sequence
    RgbStart {
        sequence: Sequence<N>,
        looping: bool,
    },
    /// Turn the light strip off
    RgbStop,
    /// Cycle through matrix frames
    MatrixStart { frames: Frames, delay: Duration },
    /// Show one still matrix frame
    MatrixShowStatic(Frame),
    /// Stop frame cycling, keep the current frame
    MatrixStop,
    /// Unknown code or decoder sentinel
    NoOp,
}

/// Keymap validation errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeymapError {
    /// All slots are taken
    CapacityExceeded,
    /// Bound color sequence has no steps
    EmptySequence,
    /// Bound animation has no frames
    EmptyFrames,
}

impl core::fmt::Display for KeymapError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            KeymapError::CapacityExceeded => write!(f, "keymap capacity exceeded"),
            KeymapError::EmptySequence => write!(f, "bound sequence has no steps"),
            KeymapError::EmptyFrames => write!(f, "bound animation has no frames"),
        }
    }
}

/// Explicit code-to-action table.
///
/// Lookups never mutate the table, so dispatching is a pure function of the
/// code.
#[derive(Debug, Clone)]
pub struct Keymap<const N: usize> {
    bindings: FnvIndexMap<u8, Action<N>, KEYMAP_CAPACITY>,
}

impl<const N: usize> Keymap<N> {
    /// Create an empty keymap; every code maps to [`Action::NoOp`]
    pub const fn new() -> Self {
        Self {
            bindings: FnvIndexMap::new(),
        }
    }

    /// Build a keymap from a list of bindings
    pub fn from_bindings(bindings: &[(u8, Action<N>)]) -> Result<Self, KeymapError> {
        let mut keymap = Self::new();
        for (code, action) in bindings {
            keymap.bind(*code, *action)?;
        }
        Ok(keymap)
    }

    /// Bind `code` to `action`, replacing any previous binding
    pub fn bind(&mut self, code: u8, action: Action<N>) -> Result<(), KeymapError> {
        match action {
            Action::RgbStart { sequence, .. } if sequence.is_empty() => {
                return Err(KeymapError::EmptySequence);
            }
            Action::MatrixStart { frames, .. } if frames.is_empty() => {
                return Err(KeymapError::EmptyFrames);
            }
            _ => {}
        }

        self.bindings
            .insert(code, action)
            .map_err(|_| KeymapError::CapacityExceeded)?;
        Ok(())
    }

    /// Resolve a raw decoder code.
    ///
    /// Negative sentinels, codes outside `0..=255` and unbound codes all
    /// resolve to [`Action::NoOp`].
    pub fn dispatch(&self, code: i32) -> Action<N> {
        u8::try_from(code)
            .ok()
            .and_then(|code| self.bindings.get(&code))
            .copied()
            .unwrap_or(Action::NoOp)
    }

    /// Number of bound codes
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl<const N: usize> Default for Keymap<N> {
    fn default() -> Self {
        Self::new()
    }
}

const fn drive<const N: usize>(wheels: [i8; WHEEL_COUNT]) -> Action<N> {
    let mut directions = [Direction::Neutral; WHEEL_COUNT];
    let mut i = 0;
    while i < WHEEL_COUNT {
        directions[i] = match wheels[i] {
            1 => Direction::Forward,
            -1 => Direction::Reverse,
            _ => Direction::Neutral,
        };
        i += 1;
    }
    Action::Drive {
        wheels: directions,
        duration: DRIVE_PULSE,
    }
}

const fn looping<const N: usize>(sequence: Sequence<N>) -> Action<N> {
    Action::RgbStart {
        sequence,
        looping: true,
    }
}

const fn animate<const N: usize>(frames: Frames, delay_ms: u64) -> Action<N> {
    Action::MatrixStart {
        frames,
        delay: Duration::from_millis(delay_ms),
    }
}

/// Button layout of the stock remote
pub static ROVER_BINDINGS: [(u8, Action<ROVER_LEDS>); 20] = [
    // Movement
    (64, drive([1, 1, 1, 1])),
    (25, drive([-1, -1, -1, -1])),
    (7, drive([-1, 1, 1, -1])),
    (9, drive([1, -1, -1, 1])),
    (68, drive([-1, 1, -1, 1])),
    (67, drive([1, -1, 1, -1])),
    // Light strip
    (69, looping(&assets::POLICE)),
    (74, looping(&assets::BEACON)),
    (71, looping(&assets::RAINBOW)),
    (21, looping(&assets::BREATHE)),
    (22, looping(&assets::SCANNER)),
    (13, Action::RgbStop),
    // Matrix
    (12, Action::MatrixShowStatic(assets::FACE)),
    (24, animate(&assets::TALK, 200)),
    (94, animate(&assets::BLINK, 80)),
    (8, Action::MatrixShowStatic(assets::FLO)),
    (28, animate(&assets::SPIN, 80)),
    (90, animate(&assets::CROSS_ZOOM, 300)),
    (66, animate(&assets::CROSS_BLINK, 300)),
    (82, Action::MatrixShowStatic(Frame::BLANK)),
];

impl Keymap<ROVER_LEDS> {
    /// Keymap for the stock remote
    pub fn rover_default() -> Result<Self, KeymapError> {
        Self::from_bindings(&ROVER_BINDINGS)
    }
}
