//! Remote commands
//!
//! Free-text arguments from the host are validated here and turned into
//! typed [`Command`]s, which can be queued on a [`CommandQueue`] and
//! applied by the render loop between two frames.

use core::cell::RefCell;

use critical_section::Mutex;
#[cfg(feature = "esp32-log")]
use esp_println::println;
use heapless::Deque;

use crate::color::{Color, ColorToken};
use crate::controller::ModeController;
use crate::error::CommandError;
use crate::pattern::Mode;

/// Changes that can be applied to the animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Switch pattern, restarting the animation
    SetMode(Mode),
    /// Change the base color
    SetColor(Color),
    /// Change the delay between frames (milliseconds)
    SetSpeed(u32),
    /// Change the pulse length (pixels)
    SetPulseWidth(u16),
}

impl Command {
    pub fn parse_mode(text: &str) -> Result<Self, CommandError> {
        Mode::parse_from_str(text)
            .map(Self::SetMode)
            .ok_or(CommandError::UnrecognizedMode)
    }

    pub fn parse_color(text: &str) -> Result<Self, CommandError> {
        ColorToken::parse_from_str(text)
            .map(|token| Self::SetColor(token.color()))
            .ok_or(CommandError::UnrecognizedColorToken)
    }

    pub fn parse_speed(text: &str) -> Result<Self, CommandError> {
        parse_decimal(text).map(Self::SetSpeed)
    }

    pub fn parse_pulse_width(text: &str) -> Result<Self, CommandError> {
        let width = parse_decimal(text)?;
        u16::try_from(width)
            .map(Self::SetPulseWidth)
            .map_err(|_| CommandError::ParseFailure)
    }
}

/// Parse the leading decimal digits of `text`
///
/// Leading whitespace and a single `+` are skipped and anything after the
/// digits is ignored, so `" 120ms"` is 120. Text without leading digits,
/// negative numbers and values that do not fit in `u32` are rejected.
pub fn parse_decimal(text: &str) -> Result<u32, CommandError> {
    let text = text.trim_start();
    let text = text.strip_prefix('+').unwrap_or(text);
    let digits = text.bytes().take_while(u8::is_ascii_digit).count();

    text[..digits]
        .parse()
        .map_err(|_| CommandError::ParseFailure)
}

/// Bounded queue of commands waiting for the next frame
///
/// The host dispatcher pushes through a [`CommandSender`], possibly from an
/// interrupt or another thread. The render loop drains it through a
/// [`CommandReceiver`] before each frame, in a single critical section, so a
/// frame never sees half of a batch.
pub struct CommandQueue<const SIZE: usize> {
    pending: Mutex<RefCell<Deque<Command, SIZE>>>,
}

impl<const SIZE: usize> CommandQueue<SIZE> {
    pub const fn new() -> Self {
        Self {
            pending: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    pub const fn sender(&self) -> CommandSender<'_, SIZE> {
        CommandSender { queue: self }
    }

    pub const fn receiver(&self) -> CommandReceiver<'_, SIZE> {
        CommandReceiver { queue: self }
    }

    /// Queue a command
    ///
    /// Returns the command back if `SIZE` commands are already waiting.
    pub fn push(&self, command: Command) -> Result<(), Command> {
        critical_section::with(|cs| self.pending.borrow_ref_mut(cs).push_back(command))
    }

    /// Number of commands waiting for the next frame
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.pending.borrow_ref(cs).len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Apply every waiting command to `controller`, oldest first
    ///
    /// Returns the number of applied commands.
    pub fn drain_into<const MAX_PIXELS: usize>(
        &self,
        controller: &mut ModeController<MAX_PIXELS>,
    ) -> usize {
        critical_section::with(|cs| {
            let mut pending = self.pending.borrow_ref_mut(cs);
            let mut applied = 0;
            while let Some(command) = pending.pop_front() {
                controller.apply(command);
                applied += 1;
            }
            applied
        })
    }
}

impl<const SIZE: usize> Default for CommandQueue<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

/// Dispatcher side of a [`CommandQueue`]
#[derive(Clone, Copy)]
pub struct CommandSender<'a, const SIZE: usize> {
    queue: &'a CommandQueue<SIZE>,
}

impl<const SIZE: usize> CommandSender<'_, SIZE> {
    pub fn push(&self, command: Command) -> Result<(), Command> {
        self.queue.push(command)
    }

    /// Parse a mode name and queue the switch
    ///
    /// Returns `UnrecognizedMode` without queueing anything for unknown names.
    /// A full queue drops the command.
    pub fn push_mode(&self, name: &str) -> Result<(), CommandError> {
        self.push_or_drop(Command::parse_mode(name)?);
        Ok(())
    }

    /// Parse a color token and queue the change
    pub fn push_color(&self, token: &str) -> Result<(), CommandError> {
        self.push_or_drop(Command::parse_color(token)?);
        Ok(())
    }

    fn push_or_drop(&self, command: Command) {
        if let Err(_command) = self.push(command) {
            #[cfg(feature = "esp32-log")]
            println!("[CommandSender.push] queue full, dropping {:?}", _command);
        }
    }
}

/// Render loop side of a [`CommandQueue`]
#[derive(Clone, Copy)]
pub struct CommandReceiver<'a, const SIZE: usize> {
    queue: &'a CommandQueue<SIZE>,
}

impl<const SIZE: usize> CommandReceiver<'_, SIZE> {
    /// See [`CommandQueue::drain_into`]
    pub fn drain_into<const MAX_PIXELS: usize>(
        &self,
        controller: &mut ModeController<MAX_PIXELS>,
    ) -> usize {
        self.queue.drain_into(controller)
    }
}
