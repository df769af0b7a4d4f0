#![no_std]

pub mod color;
pub mod command;
pub mod controller;
pub mod driver;
pub mod error;
pub mod frame_scheduler;
pub mod pattern;
pub mod state;

pub use command::{Command, CommandQueue, CommandReceiver, CommandSender};
pub use controller::ModeController;
pub use driver::{SmartLedsDriver, StripConfig, StripDriver};
pub use error::CommandError;
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use pattern::{Mode, Pattern, PatternContext};
pub use state::{AnimationState, AnimatorConfig, FrameCounters};

pub use color::{Color, ColorToken, decode, encode, interpolate, mask5, wheel};
pub use embassy_time::{Duration, Instant};
