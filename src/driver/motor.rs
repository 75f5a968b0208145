//! Four H-bridge channels driven by PWM pairs.

use embedded_hal::pwm::SetDutyCycle;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::actuator::{Actuators, Direction, WHEEL_COUNT};

/// Half duty, the speed the rover was tuned for
pub const DEFAULT_DRIVE_DUTY_PERCENT: u8 = 50;

/// One motor: a PWM output per rotation direction
pub struct MotorChannel<P> {
    pub forward: P,
    pub reverse: P,
}

impl<P: SetDutyCycle> MotorChannel<P> {
    pub const fn new(forward: P, reverse: P) -> Self {
        Self { forward, reverse }
    }

    fn set(&mut self, direction: Direction, duty_percent: u8) -> Result<(), P::Error> {
        let (forward, reverse) = match direction {
            Direction::Forward => (duty_percent, 0),
            Direction::Reverse => (0, duty_percent),
            Direction::Neutral => (0, 0),
        };
        self.forward.set_duty_cycle_percent(forward)?;
        self.reverse.set_duty_cycle_percent(reverse)
    }
}

/// All four wheels, front-left, front-right, rear-left, rear-right
pub struct MotorBank<P> {
    channels: [MotorChannel<P>; WHEEL_COUNT],
    duty_percent: u8,
}

impl<P: SetDutyCycle> MotorBank<P> {
    pub fn new(channels: [MotorChannel<P>; WHEEL_COUNT]) -> Self {
        Self::with_duty(channels, DEFAULT_DRIVE_DUTY_PERCENT)
    }

    /// Create a motor bank with a custom drive duty (clamped to 100 %)
    pub fn with_duty(channels: [MotorChannel<P>; WHEEL_COUNT], duty_percent: u8) -> Self {
        Self {
            channels,
            duty_percent: duty_percent.min(100),
        }
    }

    pub fn channels(&self) -> &[MotorChannel<P>; WHEEL_COUNT] {
        &self.channels
    }
}

impl<P: SetDutyCycle> Actuators for MotorBank<P> {
    fn drive(&mut self, wheels: [Direction; WHEEL_COUNT]) {
        for (channel, direction) in self.channels.iter_mut().zip(wheels) {
            if channel.set(direction, self.duty_percent).is_err() {
                #[cfg(feature = "esp32-log")]
                println!("[Motor] duty write failed for {:?}", direction);
            }
        }
    }
}
