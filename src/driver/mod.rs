//! Hardware adapters and their no-op fallbacks.
//!
//! Each sink is chosen once at startup: a real adapter when the hardware
//! answers, otherwise a null sink that keeps the rest of the rover running.

mod ht16k33;
mod motor;
mod servo;
mod strip;

pub use ht16k33::{HT16K33_DEFAULT_ADDRESS, Ht16k33, MatrixDisplay, NullMatrix, interleave};
pub use motor::{DEFAULT_DRIVE_DUTY_PERCENT, MotorBank, MotorChannel};
pub use servo::{SERVO_CENTER_DUTY, park_servo};
pub use strip::{NullStrip, SmartLedsStrip};
