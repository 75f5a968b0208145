use embassy_time::Duration;
use smart_leds::RGB8;

pub type Rgb = RGB8;

/// All channels off
pub const OFF: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Build a color from its channels
pub const fn rgb(r: u8, g: u8, b: u8) -> Rgb {
    Rgb { r, g, b }
}

/// Fill a whole LED vector with one color
pub const fn solid<const N: usize>(color: Rgb) -> [Rgb; N] {
    [color; N]
}

/// Interpolate a single channel.
///
/// Computes `start + (target - start) * elapsed / duration` truncated toward
/// zero. The result is a convex combination of `start` and `target`, so it
/// never leaves the range spanned by them.
#[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
#[inline]
pub const fn lerp8(start: u8, target: u8, elapsed: Duration, duration: Duration) -> u8 {
    let duration = duration.as_millis();
    if duration == 0 {
        return target;
    }
    let elapsed = if elapsed.as_millis() > duration {
        duration
    } else {
        elapsed.as_millis()
    };
    let weighted = start as u64 * (duration - elapsed) + target as u64 * elapsed;
    (weighted / duration) as u8
}

/// Interpolate every channel of a color
#[inline]
pub const fn lerp_color(start: Rgb, target: Rgb, elapsed: Duration, duration: Duration) -> Rgb {
    Rgb {
        r: lerp8(start.r, target.r, elapsed, duration),
        g: lerp8(start.g, target.g, elapsed, duration),
        b: lerp8(start.b, target.b, elapsed, duration),
    }
}
