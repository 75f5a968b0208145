//! HT16K33 16x8 LED matrix over I2C.

use embedded_hal::i2c::I2c;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::matrix::{FRAME_LEN, Frame, FrameError, MatrixSink};

/// Address of the matrix backpack on the rover
pub const HT16K33_DEFAULT_ADDRESS: u8 = 0x71;

const CMD_OSCILLATOR_ON: u8 = 0x21;
const CMD_DISPLAY_ON: u8 = 0x81;
const CMD_BRIGHTNESS_MAX: u8 = 0xef;
const DISPLAY_RAM: u8 = 0x00;

/// Reorder a linear frame into the controller's column-interleaved RAM layout
pub fn interleave(frame: &Frame) -> [u8; FRAME_LEN] {
    let linear = frame.as_bytes();
    let half = FRAME_LEN / 2;
    let mut wire = [0u8; FRAME_LEN];
    for i in 0..half {
        wire[i * 2] = linear[i];
        wire[i * 2 + 1] = linear[i + half];
    }
    wire
}

pub struct Ht16k33<I> {
    i2c: I,
    address: u8,
}

impl<I: I2c> Ht16k33<I> {
    pub const fn new(i2c: I, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Start the oscillator, enable the display, full brightness
    pub fn try_init(&mut self) -> Result<(), I::Error> {
        self.i2c.write(self.address, &[CMD_OSCILLATOR_ON])?;
        self.i2c.write(self.address, &[CMD_DISPLAY_ON])?;
        self.i2c.write(self.address, &[CMD_BRIGHTNESS_MAX])
    }

    /// Show raw linear frame data.
    ///
    /// Data of the wrong length is rejected before anything is written.
    pub fn show_linear(&mut self, linear: &[u8]) -> Result<(), FrameError> {
        let frame = Frame::try_from(linear)?;
        self.show(&frame);
        Ok(())
    }

    /// Give the bus back
    pub fn release(self) -> I {
        self.i2c
    }

    fn write_ram(&mut self, data: &[u8; FRAME_LEN]) -> Result<(), I::Error> {
        let mut buf = [0u8; FRAME_LEN + 1];
        buf[0] = DISPLAY_RAM;
        buf[1..].copy_from_slice(data);
        self.i2c.write(self.address, &buf)
    }
}

impl<I: I2c> MatrixSink for Ht16k33<I> {
    fn init(&mut self) {
        if self.try_init().is_err() {
            #[cfg(feature = "esp32-log")]
            println!("[Matrix] init failed");
        }
    }

    fn clear(&mut self) {
        if self.write_ram(&[0; FRAME_LEN]).is_err() {
            #[cfg(feature = "esp32-log")]
            println!("[Matrix] clear failed");
        }
    }

    fn show(&mut self, frame: &Frame) {
        if self.write_ram(&interleave(frame)).is_err() {
            #[cfg(feature = "esp32-log")]
            println!("[Matrix] frame write failed");
        }
    }
}

/// Matrix sink that discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NullMatrix;

impl MatrixSink for NullMatrix {
    fn init(&mut self) {}

    fn clear(&mut self) {}

    fn show(&mut self, _frame: &Frame) {}
}

/// Matrix sink decided once at startup
pub enum MatrixDisplay<I> {
    /// Controller answered on the bus
    Ht16k33(Ht16k33<I>),
    /// No controller; every call is a no-op
    Disabled,
}

impl<I: I2c> MatrixDisplay<I> {
    /// Probe the bus for a controller at `address`.
    ///
    /// Falls back to [`MatrixDisplay::Disabled`] if the oscillator command
    /// is not acknowledged.
    pub fn probe(mut i2c: I, address: u8) -> Self {
        if i2c.write(address, &[CMD_OSCILLATOR_ON]).is_ok() {
            return Self::Ht16k33(Ht16k33::new(i2c, address));
        }
        #[cfg(feature = "esp32-log")]
        println!("[Matrix] no controller at {:#04x}, display disabled", address);
        Self::Disabled
    }

    pub const fn is_enabled(&self) -> bool {
        matches!(self, Self::Ht16k33(_))
    }
}

impl<I: I2c> MatrixSink for MatrixDisplay<I> {
    fn init(&mut self) {
        match self {
            Self::Ht16k33(display) => display.init(),
            Self::Disabled => {}
        }
    }

    fn clear(&mut self) {
        match self {
            Self::Ht16k33(display) => display.clear(),
            Self::Disabled => {}
        }
    }

    fn show(&mut self, frame: &Frame) {
        match self {
            Self::Ht16k33(display) => display.show(frame),
            Self::Disabled => {}
        }
    }
}
