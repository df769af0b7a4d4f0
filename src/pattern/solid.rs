//! Solid fill
//!
//! Fills all pixels with the base color.

use super::{Pattern, PatternContext};
use crate::color::Color;

#[derive(Debug, Clone, Copy, Default)]
pub struct SolidPattern;

impl Pattern for SolidPattern {
    fn render(&self, ctx: &PatternContext, leds: &mut [Color]) {
        leds.fill(ctx.color);
    }
}
