//! Strip output
//!
//! [`StripDriver`] is the seam to the physical transport. [`SmartLedsDriver`]
//! implements it on top of any `smart-leds` writer.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use smart_leds::{RGB8, SmartLedsWrite};

use crate::color::Color;

/// Abstract LED strip driver
///
/// Implement this trait to support different hardware platforms.
/// The frame scheduler is generic over this trait.
pub trait StripDriver {
    /// Number of pixels on the strip
    fn pixel_count(&self) -> usize;

    /// Push a full frame to the strip
    fn write(&mut self, pixels: &[Color]);
}

/// One-time strip configuration
#[derive(Debug, Clone, Copy)]
pub struct StripConfig {
    /// Number of pixels on the strip
    pub pixel_count: usize,
    /// Number of leading pixels with green and blue wired the other way round
    pub swapped_pixels: usize,
}

/// Driver writing 15-bit frames through a `smart-leds` writer
///
/// Colors are expanded to `RGB8` on the fly.
pub struct SmartLedsDriver<W> {
    writer: W,
    config: StripConfig,
}

impl<W> SmartLedsDriver<W>
where
    W: SmartLedsWrite<Color = RGB8>,
{
    pub const fn new(writer: W, config: StripConfig) -> Self {
        Self { writer, config }
    }

    /// Convert a pixel to the color sent on the wire
    pub fn wire_color(&self, index: usize, color: Color) -> RGB8 {
        wire_color(index, color, self.config.swapped_pixels)
    }

    pub const fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> StripDriver for SmartLedsDriver<W>
where
    W: SmartLedsWrite<Color = RGB8>,
{
    fn pixel_count(&self) -> usize {
        self.config.pixel_count
    }

    fn write(&mut self, pixels: &[Color]) {
        let swapped = self.config.swapped_pixels;
        let colors = pixels
            .iter()
            .enumerate()
            .map(|(index, color)| wire_color(index, *color, swapped));

        if self.writer.write(colors).is_err() {
            #[cfg(feature = "esp32-log")]
            println!("[SmartLedsDriver.write] failed to write {} pixels", pixels.len());
        }
    }
}

fn wire_color(index: usize, color: Color, swapped_pixels: usize) -> RGB8 {
    let rgb = color.to_rgb8();
    if index < swapped_pixels {
        RGB8 {
            r: rgb.r,
            g: rgb.b,
            b: rgb.g,
        }
    } else {
        rgb
    }
}
