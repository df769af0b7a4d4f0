//! Animation state
//!
//! Everything the pattern engine reads or mutates lives in a single
//! [`AnimationState`] owned by the render loop.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::{Color, WHEEL_STEPS};
use crate::pattern::{Mode, PatternContext};

/// Number of frames in one rainbow rotation
pub const RAINBOW_PERIOD: u8 = WHEEL_STEPS;

/// Number of frames in one fade cycle
pub const FADE_PERIOD: u8 = 64;

/// Default frame delay in milliseconds
pub const DEFAULT_SPEED_MS: u32 = 100;

/// Default pulse length in pixels
pub const DEFAULT_PULSE_WIDTH: u16 = 40;

/// Per-pattern frame counters
///
/// All three counters advance on every frame regardless of the active mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameCounters {
    /// Pulse head position, `0..=pixel_count`
    pub pulse: usize,
    /// Rainbow phase, `0..RAINBOW_PERIOD`
    pub rainbow: u8,
    /// Fade phase, `0..FADE_PERIOD`
    pub fade: u8,
}

impl FrameCounters {
    pub const fn new() -> Self {
        Self {
            pulse: 0,
            rainbow: 0,
            fade: 0,
        }
    }

    /// Move every counter one frame forward
    ///
    /// The pulse counter wraps only after it passed the last pixel, so the
    /// head spends one frame just outside the strip.
    pub fn advance(&mut self, pixel_count: usize) {
        self.pulse += 1;
        if self.pulse > pixel_count {
            self.pulse = 0;
        }
        self.rainbow = (self.rainbow + 1) % RAINBOW_PERIOD;
        self.fade = (self.fade + 1) % FADE_PERIOD;
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

/// Initial animation settings
#[derive(Debug, Clone, Copy)]
pub struct AnimatorConfig {
    pub mode: Mode,
    pub color: Color,
    /// Delay between frames in milliseconds
    pub speed_ms: u32,
    /// Pulse length in pixels
    pub pulse_width: u16,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Solid,
            color: Color::GREEN,
            speed_ms: DEFAULT_SPEED_MS,
            pulse_width: DEFAULT_PULSE_WIDTH,
        }
    }
}

/// Mode, parameters, counters and pixel buffer of the animation
///
/// `MAX_PIXELS` is the buffer capacity; only the first `pixel_count`
/// entries form the frame sent to the strip.
#[derive(Debug, Clone)]
pub struct AnimationState<const MAX_PIXELS: usize> {
    pub(crate) mode: Mode,
    pub(crate) color: Color,
    pub(crate) speed_ms: u32,
    pub(crate) pulse_width: u16,
    pub(crate) counters: FrameCounters,
    pixel_count: usize,
    pixels: [Color; MAX_PIXELS],
}

impl<const MAX_PIXELS: usize> AnimationState<MAX_PIXELS> {
    /// Create a state for a strip of `pixel_count` pixels
    ///
    /// Strips longer than `MAX_PIXELS` are truncated to the buffer capacity.
    pub fn new(pixel_count: usize, config: &AnimatorConfig) -> Self {
        #[cfg(feature = "esp32-log")]
        if pixel_count > MAX_PIXELS {
            println!(
                "[AnimationState.new] strip has {} pixels, rendering only {}",
                pixel_count, MAX_PIXELS
            );
        }
        Self {
            mode: config.mode,
            color: config.color,
            speed_ms: config.speed_ms,
            pulse_width: config.pulse_width,
            counters: FrameCounters::new(),
            pixel_count: pixel_count.min(MAX_PIXELS),
            pixels: [Color::BLACK; MAX_PIXELS],
        }
    }

    pub const fn mode(&self) -> Mode {
        self.mode
    }

    pub const fn color(&self) -> Color {
        self.color
    }

    pub const fn speed_ms(&self) -> u32 {
        self.speed_ms
    }

    pub const fn pulse_width(&self) -> u16 {
        self.pulse_width
    }

    pub const fn counters(&self) -> FrameCounters {
        self.counters
    }

    pub const fn pixel_count(&self) -> usize {
        self.pixel_count
    }

    /// Current frame
    pub fn frame(&self) -> &[Color] {
        &self.pixels[..self.pixel_count]
    }

    /// Inputs for the active pattern
    pub const fn context(&self) -> PatternContext {
        PatternContext {
            color: self.color,
            pulse_width: self.pulse_width,
            counters: self.counters,
        }
    }

    /// Render the active pattern into the frame
    pub fn render(&mut self) {
        let ctx = self.context();
        self.mode.render(&ctx, &mut self.pixels[..self.pixel_count]);
    }

    /// Advance the animation clock by one frame
    pub fn advance(&mut self) {
        self.counters.advance(self.pixel_count);
    }

    /// Restart the animation from a black frame
    pub fn reset(&mut self) {
        self.counters.reset();
        self.pixels.fill(Color::BLACK);
    }
}
