//! Frame scheduling and timing utilities.
//!
//! Provides portable frame pacing without async/await or platform-specific timers.
//! The caller is responsible for sleeping/waiting between frames.

use embassy_time::{Duration, Instant};

use crate::command::CommandReceiver;
use crate::controller::ModeController;
use crate::driver::StripDriver;
use crate::state::AnimatorConfig;

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Portable frame scheduler that manages timing without async.
///
/// This scheduler:
/// - Applies queued commands before a frame is rendered
/// - Calls the mode controller and the strip driver
/// - Paces frames by the current speed, with drift correction
///
/// # Usage
///
/// ```ignore
/// static COMMANDS: CommandQueue<4> = CommandQueue::new();
///
/// let mut scheduler = FrameScheduler::new(driver, COMMANDS.receiver(), &AnimatorConfig::default());
///
/// loop {
///     let now = get_current_time_ms();
///     let result = scheduler.tick(Instant::from_millis(now));
///
///     // Platform-specific sleep
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct FrameScheduler<'a, D: StripDriver, const MAX_PIXELS: usize, const COMMAND_CHANNEL_SIZE: usize>
{
    driver: D,
    controller: ModeController<MAX_PIXELS>,
    commands: CommandReceiver<'a, COMMAND_CHANNEL_SIZE>,
    next_frame: Instant,
}

impl<'a, D: StripDriver, const MAX_PIXELS: usize, const COMMAND_CHANNEL_SIZE: usize>
    FrameScheduler<'a, D, MAX_PIXELS, COMMAND_CHANNEL_SIZE>
{
    /// Create a scheduler for the driver's strip.
    pub fn new(
        driver: D,
        commands: CommandReceiver<'a, COMMAND_CHANNEL_SIZE>,
        config: &AnimatorConfig,
    ) -> Self {
        let controller = ModeController::new(driver.pixel_count(), config);
        Self {
            driver,
            controller,
            commands,
            next_frame: Instant::from_millis(0),
        }
    }

    /// Process one frame and return timing information.
    ///
    /// This method:
    /// 1. Applies every queued command
    /// 2. Applies drift correction if we've fallen too far behind
    /// 3. Renders the current frame and writes it to the driver
    /// 4. Returns the deadline for the next frame
    ///
    /// The caller is responsible for waiting until `next_deadline` before
    /// calling `tick` again.
    pub fn tick(&mut self, now: Instant) -> FrameResult {
        self.commands.drain_into(&mut self.controller);

        // Drift correction: if we've fallen too far behind, reset to now
        // This prevents catch-up bursts after long stalls
        let frame_duration = self.frame_duration();
        let max_drift = frame_duration.as_millis() * 2;
        if now.as_millis() > self.next_frame.as_millis() + max_drift {
            self.next_frame = now;
        }

        let frame = self.controller.tick();
        self.driver.write(frame);

        self.next_frame += frame_duration;

        let sleep_duration = if self.next_frame.as_millis() > now.as_millis() {
            Duration::from_millis(self.next_frame.as_millis() - now.as_millis())
        } else {
            Duration::from_millis(0)
        };

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
        }
    }

    /// Delay between frames for the current speed.
    pub fn frame_duration(&self) -> Duration {
        Duration::from_millis(u64::from(self.controller.speed()))
    }

    pub fn controller(&self) -> &ModeController<MAX_PIXELS> {
        &self.controller
    }

    /// Direct access for hosts that apply commands without the queue.
    pub fn controller_mut(&mut self) -> &mut ModeController<MAX_PIXELS> {
        &mut self.controller
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }
}
