use smart_leds::SmartLedsWrite;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::StripDriver;
use crate::color::{OFF, Rgb};

/// Strip sink over any `smart-leds` writer (WS2812 over RMT, SPI, ...).
///
/// Keeps a copy of the last requested vector so fades can start from it.
/// A failed hardware write still updates the copy; the strip catches up on
/// the next successful write.
pub struct SmartLedsStrip<W, const N: usize> {
    writer: W,
    buffer: [Rgb; N],
}

impl<W, const N: usize> SmartLedsStrip<W, N>
where
    W: SmartLedsWrite<Color = Rgb>,
{
    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            buffer: [OFF; N],
        }
    }

    /// Give the writer back
    pub fn release(self) -> W {
        self.writer
    }
}

impl<W, const N: usize> StripDriver<N> for SmartLedsStrip<W, N>
where
    W: SmartLedsWrite<Color = Rgb>,
{
    fn write(&mut self, colors: &[Rgb; N]) {
        self.buffer = *colors;
        if self.writer.write(colors.iter().copied()).is_err() {
            #[cfg(feature = "esp32-log")]
            println!("[Strip] write failed, frame dropped");
        }
    }

    fn current(&self) -> [Rgb; N] {
        self.buffer
    }
}

/// Strip sink used when no strip is available.
///
/// Remembers what was written so fades still progress, outputs nothing.
#[derive(Debug, Clone)]
pub struct NullStrip<const N: usize> {
    buffer: [Rgb; N],
}

impl<const N: usize> NullStrip<N> {
    pub const fn new() -> Self {
        Self { buffer: [OFF; N] }
    }
}

impl<const N: usize> Default for NullStrip<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> StripDriver<N> for NullStrip<N> {
    fn write(&mut self, colors: &[Rgb; N]) {
        self.buffer = *colors;
    }

    fn current(&self) -> [Rgb; N] {
        self.buffer
    }
}
