//! Built-in frames and color sequences for the 8-LED rover.

use crate::color::{OFF, Rgb, rgb};
use crate::matrix::Frame;
use crate::sequence::SequenceStep;

/// LED count of the rover light bar
pub const ROVER_LEDS: usize = 8;

type Step = SequenceStep<ROVER_LEDS>;

// Matrix frames

pub const FACE: Frame = Frame::new([
    0x0e, 0x11, 0x11, 0x11, 0x8e, 0x40, 0x20, 0x20, 0x20, 0x20, 0x40, 0x8e, 0x11, 0x11, 0x11, 0x0e,
]);
pub const FACE_TALK: Frame = Frame::new([
    0x0e, 0x11, 0x11, 0x0e, 0x00, 0x60, 0x90, 0x90, 0x90, 0x90, 0x60, 0x00, 0x0e, 0x11, 0x11, 0x0e,
]);
pub const FLO: Frame = Frame::new([
    0x00, 0x7e, 0x12, 0x12, 0x02, 0x00, 0x7e, 0x40, 0x40, 0x40, 0x00, 0x3c, 0x42, 0x42, 0x3c, 0x00,
]);

const EYES_OPEN: Frame = Frame::new([
    0x06, 0x09, 0x09, 0x06, 0x00, 0x60, 0x40, 0x40, 0x40, 0x40, 0x60, 0x00, 0x06, 0x09, 0x09, 0x06,
]);
const EYES_HALF: Frame = Frame::new([
    0x04, 0x0a, 0x0a, 0x04, 0x00, 0x60, 0x40, 0x40, 0x40, 0x40, 0x60, 0x00, 0x04, 0x0a, 0x0a, 0x04,
]);
const EYES_CLOSED: Frame = Frame::new([
    0x04, 0x08, 0x08, 0x04, 0x00, 0x60, 0x40, 0x40, 0x40, 0x40, 0x60, 0x00, 0x04, 0x08, 0x08, 0x04,
]);
const EYES_OPEN_MOUTH: Frame = Frame::new([
    0x06, 0x09, 0x09, 0x06, 0x00, 0x60, 0x90, 0x90, 0x90, 0x90, 0x60, 0x00, 0x06, 0x09, 0x09, 0x06,
]);

const SPIN_1: Frame = Frame::new([
    0x11, 0xd2, 0x34, 0x00, 0x07, 0xe0, 0x00, 0x00, 0x07, 0xe0, 0x00, 0x00, 0x07, 0xe4, 0x22, 0x22,
]);
const SPIN_2: Frame = Frame::new([
    0x88, 0x4b, 0x2c, 0x00, 0xe0, 0x07, 0x00, 0x00, 0xe0, 0x07, 0x00, 0x00, 0xe0, 0x27, 0x44, 0x44,
]);
const SPIN_3: Frame = Frame::new([
    0x44, 0x44, 0x27, 0xe0, 0x00, 0x00, 0x07, 0xe0, 0x00, 0x00, 0x07, 0xe0, 0x00, 0x2c, 0x4b, 0x88,
]);
const SPIN_4: Frame = Frame::new([
    0x22, 0x22, 0xe4, 0x07, 0x00, 0x00, 0xe0, 0x07, 0x00, 0x00, 0xe0, 0x07, 0x00, 0x34, 0xd2, 0x11,
]);

const CROSS_LARGE: Frame = Frame::new([
    0x00, 0x00, 0x00, 0x00, 0x3c, 0x24, 0xe7, 0x81, 0x81, 0xe7, 0x24, 0x3c, 0x00, 0x00, 0x00, 0x00,
]);
const CROSS_FILLED: Frame = Frame::new([
    0x00, 0x00, 0x00, 0x00, 0x3c, 0x3c, 0xff, 0xff, 0xff, 0xff, 0x3c, 0x3c, 0x00, 0x00, 0x00, 0x00,
]);
const CROSS_SMALL: Frame = Frame::new([
    0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x7e, 0x7e, 0x18, 0x18, 0x00, 0x00, 0x00, 0x00, 0x00,
]);

// Matrix animations

pub static TALK: [Frame; 2] = [FACE, FACE_TALK];
pub static BLINK: [Frame; 10] = [
    EYES_OPEN,
    EYES_HALF,
    EYES_CLOSED,
    EYES_HALF,
    EYES_OPEN,
    EYES_OPEN,
    EYES_OPEN,
    EYES_OPEN_MOUTH,
    EYES_OPEN_MOUTH,
    EYES_OPEN,
];
pub static SPIN: [Frame; 4] = [SPIN_1, SPIN_2, SPIN_3, SPIN_4];
pub static CROSS_ZOOM: [Frame; 3] = [CROSS_SMALL, CROSS_FILLED, CROSS_LARGE];
pub static CROSS_BLINK: [Frame; 2] = [CROSS_SMALL, Frame::BLANK];

// Color sequences

const WARM: Rgb = rgb(140, 100, 20);
const RED: Rgb = rgb(150, 0, 0);
const BLUE: Rgb = rgb(0, 0, 150);
const DIM_RED: Rgb = rgb(40, 0, 0);

/// Warm outer LEDs, red center, blue pairs alternating
pub static BEACON: [Step; 2] = [
    Step::new([WARM, BLUE, BLUE, RED, RED, OFF, OFF, WARM], 300),
    Step::new([WARM, OFF, OFF, RED, RED, BLUE, BLUE, WARM], 300),
];

pub static BREATHE: [Step; 2] = [
    Step::solid(rgb(0, 60, 0), 1500),
    Step::solid(rgb(0, 2, 0), 1500),
];

pub static POLICE: [Step; 4] = [
    Step::solid(RED, 100),
    Step::solid(OFF, 50),
    Step::solid(BLUE, 100),
    Step::solid(OFF, 50),
];

pub static RAINBOW: [Step; 6] = [
    Step::solid(rgb(100, 0, 0), 500),
    Step::solid(rgb(80, 80, 0), 500),
    Step::solid(rgb(0, 100, 0), 500),
    Step::solid(rgb(0, 80, 80), 500),
    Step::solid(rgb(0, 0, 100), 500),
    Step::solid(rgb(80, 0, 80), 500),
];

/// Red dot sweeping across the bar and back, with a dim trail
pub static SCANNER: [Step; 2 * ROVER_LEDS - 2] = scanner();

const SCANNER_STEP_MS: u64 = 100;

const fn scanner() -> [Step; 2 * ROVER_LEDS - 2] {
    let mut steps = [Step::solid(OFF, SCANNER_STEP_MS); 2 * ROVER_LEDS - 2];

    // Outbound: head at 0..=7, trail behind it
    let mut head = 0;
    while head < ROVER_LEDS {
        steps[head].target[head] = RED;
        if head > 0 {
            steps[head].target[head - 1] = DIM_RED;
        }
        head += 1;
    }

    // Return: head at 6..=1, trail on the right
    let mut step = ROVER_LEDS;
    let mut head = ROVER_LEDS - 2;
    while head > 0 {
        steps[step].target[head] = RED;
        steps[step].target[head + 1] = DIM_RED;
        step += 1;
        head -= 1;
    }

    steps
}
