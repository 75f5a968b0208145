//! Camera servo on a 50 Hz PWM output.

use embedded_hal::pwm::SetDutyCycle;

/// Center pulse (1.5 ms) as a fraction of a 20 ms period, out of `u16::MAX`
pub const SERVO_CENTER_DUTY: u16 = 4915;

/// Move the servo to its center position.
///
/// The rover does not drive the servo afterwards; call this once during
/// hardware setup so it holds still.
pub fn park_servo<P: SetDutyCycle>(pwm: &mut P) -> Result<(), P::Error> {
    pwm.set_duty_cycle_fraction(SERVO_CENTER_DUTY, u16::MAX)
}
