//! Mode controller
//!
//! Owns the [`AnimationState`], applies remote commands to it and renders
//! one frame per [`ModeController::tick`].

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::Color;
use crate::command::Command;
use crate::error::CommandError;
use crate::pattern::Mode;
use crate::state::{AnimationState, AnimatorConfig, FrameCounters};

/// State machine selecting the pattern rendered on every frame
pub struct ModeController<const MAX_PIXELS: usize> {
    state: AnimationState<MAX_PIXELS>,
}

impl<const MAX_PIXELS: usize> ModeController<MAX_PIXELS> {
    pub fn new(pixel_count: usize, config: &AnimatorConfig) -> Self {
        Self {
            state: AnimationState::new(pixel_count, config),
        }
    }

    /// Render the active pattern and advance the animation clock
    ///
    /// Returns the frame that should be sent to the strip.
    pub fn tick(&mut self) -> &[Color] {
        self.state.render();
        self.state.advance();
        self.state.frame()
    }

    /// Apply a validated command
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::SetMode(mode) => self.switch_mode(mode),
            Command::SetColor(color) => self.state.color = color,
            Command::SetSpeed(speed_ms) => self.state.speed_ms = speed_ms,
            Command::SetPulseWidth(width) => self.state.pulse_width = width,
        }
    }

    /// Switch mode by name
    ///
    /// An unknown name leaves the current mode and frame untouched.
    pub fn set_mode(&mut self, name: &str) -> Result<(), CommandError> {
        let command = Command::parse_mode(name).inspect_err(|_err| {
            #[cfg(feature = "esp32-log")]
            println!("[ModeController.set_mode] {}: {:?}", _err, name);
        })?;
        self.apply(command);
        Ok(())
    }

    /// Change the base color by palette token
    pub fn set_base_color(&mut self, token: &str) -> Result<(), CommandError> {
        let command = Command::parse_color(token).inspect_err(|_err| {
            #[cfg(feature = "esp32-log")]
            println!("[ModeController.set_base_color] {}: {:?}", _err, token);
        })?;
        self.apply(command);
        Ok(())
    }

    /// Set the frame delay from decimal text
    ///
    /// Text that does not parse sets the delay to zero. Returns the applied value.
    pub fn set_speed(&mut self, text: &str) -> u32 {
        let speed_ms = match Command::parse_speed(text) {
            Ok(Command::SetSpeed(speed_ms)) => speed_ms,
            _ => {
                #[cfg(feature = "esp32-log")]
                println!("[ModeController.set_speed] {:?}, using 0", text);
                0
            }
        };
        self.apply(Command::SetSpeed(speed_ms));
        speed_ms
    }

    /// Set the pulse width from decimal text
    ///
    /// Text that does not parse sets the width to zero. Returns the applied value.
    pub fn set_pulse_width(&mut self, text: &str) -> u16 {
        let width = match Command::parse_pulse_width(text) {
            Ok(Command::SetPulseWidth(width)) => width,
            _ => {
                #[cfg(feature = "esp32-log")]
                println!("[ModeController.set_pulse_width] {:?}, using 0", text);
                0
            }
        };
        self.apply(Command::SetPulseWidth(width));
        width
    }

    pub const fn mode(&self) -> Mode {
        self.state.mode()
    }

    pub const fn color(&self) -> Color {
        self.state.color()
    }

    /// Delay between frames in milliseconds
    pub const fn speed(&self) -> u32 {
        self.state.speed_ms()
    }

    pub const fn pulse_width(&self) -> u16 {
        self.state.pulse_width()
    }

    pub const fn counters(&self) -> FrameCounters {
        self.state.counters()
    }

    pub const fn pixel_count(&self) -> usize {
        self.state.pixel_count()
    }

    /// Last rendered frame
    pub fn frame(&self) -> &[Color] {
        self.state.frame()
    }

    pub const fn state(&self) -> &AnimationState<MAX_PIXELS> {
        &self.state
    }

    /// Every mode selection restarts the animation, even for the active mode
    fn switch_mode(&mut self, mode: Mode) {
        #[cfg(feature = "esp32-log")]
        println!(
            "[ModeController.switch_mode] {} -> {}",
            self.state.mode.as_str(),
            mode.as_str()
        );
        self.state.mode = mode;
        self.state.reset();
    }
}
