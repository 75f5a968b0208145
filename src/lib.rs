#![no_std]

pub mod actuator;
pub mod assets;
pub mod color;
pub mod dispatch;
pub mod driver;
pub mod event;
pub mod fade;
pub mod matrix;
pub mod rover;
pub mod sequence;
pub mod time;

pub use actuator::{ActuatorTimer, Actuators, Direction};
pub use dispatch::{Action, Keymap, KeymapError};
pub use event::{EventSender, EventSlot, RemoteDecoder, RemoteEvent, ShutdownSignal};
pub use fade::{ColorFader, FadeStatus};
pub use matrix::{Frame, FrameCycler, FrameError, MatrixSink};
pub use rover::{Rover, RoverConfig, TickResult};
pub use sequence::{Sequence, SequenceError, SequencePlayer, SequenceStep};
pub use time::{Clock, SystemClock, Ticks};

pub use color::Rgb;
pub use embassy_time::Duration;

/// Abstract LED strip driver
///
/// Implement this trait to support different strip hardware. Besides
/// writing, a driver reports the vector it currently shows, which seeds the
/// start state of every new fade.
pub trait StripDriver<const N: usize> {
    /// Write a whole vector to the strip
    fn write(&mut self, colors: &[Rgb; N]);

    /// Vector currently shown
    fn current(&self) -> [Rgb; N];
}
