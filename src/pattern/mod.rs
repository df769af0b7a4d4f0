//! Pattern system with compile-time known pattern variants
//!
//! Every mode maps to one zero-sized pattern renderer. Patterns hold no
//! state of their own: the animation clock lives in [`FrameCounters`] and is
//! passed in through [`PatternContext`] on every frame.

mod fade;
mod pulse;
mod rainbow;
mod solid;

pub use fade::{FadePattern, fade_factor};
pub use pulse::PulsePattern;
pub use rainbow::RainbowPattern;
pub use solid::SolidPattern;

use crate::color::Color;
use crate::state::FrameCounters;

const MODE_NAME_SOLID: &str = "solid";
const MODE_NAME_PULSE: &str = "pulse";
const MODE_NAME_FADE: &str = "fade";
const MODE_NAME_RAINBOW: &str = "rainbow";

const MODE_ID_RAINBOW: u8 = 0;
const MODE_ID_PULSE: u8 = 1;
const MODE_ID_FADE: u8 = 2;
const MODE_ID_SOLID: u8 = 3;

/// Inputs a pattern reads while rendering one frame
#[derive(Debug, Clone, Copy)]
pub struct PatternContext {
    /// Selected base color
    pub color: Color,
    /// Pulse length in pixels
    pub pulse_width: u16,
    /// Animation clock for the current frame
    pub counters: FrameCounters,
}

pub trait Pattern {
    /// Whether every frame overwrites every pixel
    ///
    /// Patterns that only touch a few pixels per frame rely on the previous
    /// frame staying in the buffer.
    const FULL_REPAINT: bool = true;

    /// Render a single frame
    fn render(&self, ctx: &PatternContext, leds: &mut [Color]);
}

/// Known animation modes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum Mode {
    #[default]
    Solid = MODE_ID_SOLID,
    Pulse = MODE_ID_PULSE,
    Fade = MODE_ID_FADE,
    Rainbow = MODE_ID_RAINBOW,
}

impl Mode {
    pub const ALL: [Self; 4] = [Self::Solid, Self::Pulse, Self::Fade, Self::Rainbow];

    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            MODE_ID_SOLID => Self::Solid,
            MODE_ID_PULSE => Self::Pulse,
            MODE_ID_FADE => Self::Fade,
            MODE_ID_RAINBOW => Self::Rainbow,
            _ => return None,
        })
    }

    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Solid => MODE_NAME_SOLID,
            Self::Pulse => MODE_NAME_PULSE,
            Self::Fade => MODE_NAME_FADE,
            Self::Rainbow => MODE_NAME_RAINBOW,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            MODE_NAME_SOLID => Some(Self::Solid),
            MODE_NAME_PULSE => Some(Self::Pulse),
            MODE_NAME_FADE => Some(Self::Fade),
            MODE_NAME_RAINBOW => Some(Self::Rainbow),
            _ => None,
        }
    }

    /// Returns if the mode's pattern overwrites the whole frame
    ///
    /// Derived from each pattern's `Pattern::FULL_REPAINT` constant.
    pub const fn repaints_fully(self) -> bool {
        match self {
            Self::Solid => SolidPattern::FULL_REPAINT,
            Self::Pulse => PulsePattern::FULL_REPAINT,
            Self::Fade => FadePattern::FULL_REPAINT,
            Self::Rainbow => RainbowPattern::FULL_REPAINT,
        }
    }

    /// Render one frame of the mode's pattern
    pub fn render(self, ctx: &PatternContext, leds: &mut [Color]) {
        match self {
            Self::Solid => SolidPattern.render(ctx, leds),
            Self::Pulse => PulsePattern.render(ctx, leds),
            Self::Fade => FadePattern.render(ctx, leds),
            Self::Rainbow => RainbowPattern.render(ctx, leds),
        }
    }
}
