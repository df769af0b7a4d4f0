//! Scanning pulse
//!
//! A block of `pulse_width` lit pixels travels along the strip and wraps
//! around at the end. Each frame only the head is lit and the tail is
//! cleared; the pixels in between keep the color written by earlier frames.
//! The pattern is therefore only correct on a buffer that was cleared when
//! the mode was selected.

use super::{Pattern, PatternContext};
use crate::color::Color;

#[derive(Debug, Clone, Copy, Default)]
pub struct PulsePattern;

impl PulsePattern {
    /// Index of the pixel cleared in this frame
    ///
    /// A tail before the start of the strip wraps to its end. Widths longer
    /// than the strip keep wrapping instead of producing a negative index.
    /// Returns `None` for an empty strip.
    #[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
    pub fn tail_index(head: usize, pulse_width: u16, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let tail = head as isize - pulse_width as isize;
        let tail = if tail < 0 {
            tail.rem_euclid(len as isize)
        } else {
            tail
        };
        Some(tail as usize)
    }
}

impl Pattern for PulsePattern {
    const FULL_REPAINT: bool = false;

    fn render(&self, ctx: &PatternContext, leds: &mut [Color]) {
        let head = ctx.counters.pulse;
        let Some(tail) = Self::tail_index(head, ctx.pulse_width, leds.len()) else {
            return;
        };

        // The head runs one step past the last pixel before wrapping
        if let Some(led) = leds.get_mut(head) {
            *led = ctx.color;
        }
        if let Some(led) = leds.get_mut(tail) {
            *led = Color::BLACK;
        }
    }
}
