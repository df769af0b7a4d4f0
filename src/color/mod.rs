//! 15-bit color model
//!
//! Colors are packed into a `u16` with three 5-bit channels:
//! green in bits 10..15, blue in bits 5..10 and red in bits 0..5.

mod color_wheel;
mod palette;
mod utils;

use core::fmt;

use smart_leds::RGB8;

pub use color_wheel::{WHEEL_STEPS, wheel};
pub use palette::ColorToken;
pub use utils::{decode, encode, interpolate, mask5};

/// Largest value a single channel can hold
pub const CHANNEL_MAX: u8 = 0x1F;

/// Right edge of the interpolation range, `interpolate(a, b, INTERPOLATION_STEPS) == b`
pub const INTERPOLATION_STEPS: u8 = 32;

const RED_SHIFT: u16 = 0;
const BLUE_SHIFT: u16 = 5;
const GREEN_SHIFT: u16 = 10;
const RAW_MASK: u16 = 0x7FFF;

/// Packed 15-bit color
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Color(u16);

impl Color {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const RED: Self = Self::new(31, 0, 0);
    pub const GREEN: Self = Self::new(0, 31, 0);
    pub const BLUE: Self = Self::new(0, 0, 31);
    pub const WHITE: Self = Self::new(31, 31, 31);

    /// Pack three channels into a color
    ///
    /// Every channel is truncated to its low 5 bits, so `new(32, 0, 0)` is black.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self(
            ((mask5(g) as u16) << GREEN_SHIFT)
                | ((mask5(b) as u16) << BLUE_SHIFT)
                | ((mask5(r) as u16) << RED_SHIFT),
        )
    }

    /// Build a color from its packed representation. Bit 15 is dropped.
    pub const fn from_raw(raw: u16) -> Self {
        Self(raw & RAW_MASK)
    }

    /// Packed representation
    pub const fn raw(self) -> u16 {
        self.0
    }

    #[allow(clippy::cast_possible_truncation)]
    pub const fn r(self) -> u8 {
        mask5((self.0 >> RED_SHIFT) as u8)
    }

    #[allow(clippy::cast_possible_truncation)]
    pub const fn g(self) -> u8 {
        mask5((self.0 >> GREEN_SHIFT) as u8)
    }

    #[allow(clippy::cast_possible_truncation)]
    pub const fn b(self) -> u8 {
        mask5((self.0 >> BLUE_SHIFT) as u8)
    }

    /// Unpack into `(r, g, b)`
    pub const fn channels(self) -> (u8, u8, u8) {
        (self.r(), self.g(), self.b())
    }

    /// Expand to 8 bits per channel for `smart-leds` writers
    ///
    /// The top bits are replicated into the low bits so 31 maps to 255.
    pub const fn to_rgb8(self) -> RGB8 {
        RGB8 {
            r: expand5(self.r()),
            g: expand5(self.g()),
            b: expand5(self.b()),
        }
    }
}

impl From<Color> for RGB8 {
    fn from(color: Color) -> Self {
        color.to_rgb8()
    }
}

impl fmt::UpperHex for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(&self.0, f)
    }
}

const fn expand5(value: u8) -> u8 {
    (value << 3) | (value >> 2)
}
