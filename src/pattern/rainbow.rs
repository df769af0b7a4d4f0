//! Rotating rainbow
//!
//! Spreads one full turn of the color wheel evenly along the strip and
//! rotates it by one wheel step per frame.

use super::{Pattern, PatternContext};
use crate::color::{Color, WHEEL_STEPS, wheel};

#[derive(Debug, Clone, Copy, Default)]
pub struct RainbowPattern;

impl RainbowPattern {
    /// Wheel position of pixel `index` on a strip of `len` pixels
    ///
    /// `len` must not be zero.
    #[allow(clippy::cast_possible_truncation)]
    pub const fn wheel_position(index: usize, len: usize, phase: u8) -> u8 {
        let steps = WHEEL_STEPS as usize;
        ((index * steps / len + phase as usize) % steps) as u8
    }
}

impl Pattern for RainbowPattern {
    fn render(&self, ctx: &PatternContext, leds: &mut [Color]) {
        let len = leds.len();
        if len == 0 {
            return;
        }

        let phase = ctx.counters.rainbow;
        for (index, led) in leds.iter_mut().enumerate() {
            *led = wheel(Self::wheel_position(index, len, phase));
        }
    }
}
