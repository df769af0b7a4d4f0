//! Breathing fade
//!
//! The whole strip blends between the base color and black following a
//! triangle wave with a period of 64 frames.

use super::{Pattern, PatternContext};
use crate::color::{Color, INTERPOLATION_STEPS, interpolate};
use crate::state::FADE_PERIOD;

/// Blend position for a fade counter value
///
/// Rises from 0 to 32 over the first half of the period and falls back
/// to 0 over the second half.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn fade_factor(counter: u8) -> u8 {
    let phase = (counter % FADE_PERIOD) as i16;
    let half = INTERPOLATION_STEPS as i16;
    (half - (half - phase).abs()) as u8
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FadePattern;

impl Pattern for FadePattern {
    fn render(&self, ctx: &PatternContext, leds: &mut [Color]) {
        let factor = fade_factor(ctx.counters.fade);
        leds.fill(interpolate(ctx.color, Color::BLACK, factor));
    }
}
