//! Recording test doubles for the rover sinks.

#![allow(dead_code)] // Each test binary uses a different subset

use std::cell::Cell;
use std::rc::Rc;
use std::vec::Vec;

use embedded_hal::i2c::{self, I2c, Operation};
use embedded_hal::pwm::{self, SetDutyCycle};
use rover_composer::color::OFF;
use rover_composer::{Actuators, Direction, Frame, MatrixSink, RemoteDecoder, Rgb, StripDriver, Ticks};

pub fn at(millis: u32) -> Ticks {
    Ticks::from_millis(millis)
}

/// Strip that records every write
pub struct RecordingStrip<const N: usize> {
    current: [Rgb; N],
    pub writes: Vec<[Rgb; N]>,
}

impl<const N: usize> RecordingStrip<N> {
    pub fn new() -> Self {
        Self::showing([OFF; N])
    }

    pub fn showing(current: [Rgb; N]) -> Self {
        Self {
            current,
            writes: Vec::new(),
        }
    }

    pub fn last(&self) -> Option<[Rgb; N]> {
        self.writes.last().copied()
    }
}

impl<const N: usize> StripDriver<N> for RecordingStrip<N> {
    fn write(&mut self, colors: &[Rgb; N]) {
        self.current = *colors;
        self.writes.push(*colors);
    }

    fn current(&self) -> [Rgb; N] {
        self.current
    }
}

/// Matrix that records every call
#[derive(Default)]
pub struct RecordingMatrix {
    pub inits: usize,
    pub clears: usize,
    pub shown: Vec<Frame>,
}

impl RecordingMatrix {
    pub fn calls(&self) -> usize {
        self.inits + self.clears + self.shown.len()
    }
}

impl MatrixSink for RecordingMatrix {
    fn init(&mut self) {
        self.inits += 1;
    }

    fn clear(&mut self) {
        self.clears += 1;
    }

    fn show(&mut self, frame: &Frame) {
        self.shown.push(*frame);
    }
}

/// Motors that record every drive command
#[derive(Default)]
pub struct RecordingMotors {
    pub commands: Vec<[Direction; 4]>,
}

impl RecordingMotors {
    pub fn last(&self) -> Option<[Direction; 4]> {
        self.commands.last().copied()
    }
}

impl Actuators for RecordingMotors {
    fn drive(&mut self, wheels: [Direction; 4]) {
        self.commands.push(wheels);
    }
}

/// Decoder that counts how often it was closed
#[derive(Clone, Default)]
pub struct CountingDecoder {
    pub closes: Rc<Cell<usize>>,
}

impl RemoteDecoder for CountingDecoder {
    fn close(&mut self) {
        self.closes.set(self.closes.get() + 1);
    }
}

/// PWM output holding its last duty
#[derive(Debug, Default)]
pub struct MockPwm {
    pub duty: u16,
    pub fail: bool,
}

impl pwm::ErrorType for MockPwm {
    type Error = pwm::ErrorKind;
}

impl SetDutyCycle for MockPwm {
    fn max_duty_cycle(&self) -> u16 {
        u16::MAX
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        if self.fail {
            return Err(pwm::ErrorKind::Other);
        }
        self.duty = duty;
        Ok(())
    }
}

/// I2C bus recording every write
#[derive(Debug, Default)]
pub struct MockI2c {
    pub writes: Vec<(u8, Vec<u8>)>,
    pub fail: bool,
}

impl i2c::ErrorType for MockI2c {
    type Error = i2c::ErrorKind;
}

impl I2c for MockI2c {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        if self.fail {
            return Err(i2c::ErrorKind::Other);
        }
        for operation in operations {
            if let Operation::Write(bytes) = operation {
                self.writes.push((address, bytes.to_vec()));
            }
        }
        Ok(())
    }
}
