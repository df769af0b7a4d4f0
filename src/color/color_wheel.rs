use super::{CHANNEL_MAX, Color};

/// Number of distinct wheel positions before the colors repeat
pub const WHEEL_STEPS: u8 = 96;

const SEGMENT_SHIFT: u8 = 5;
const SEGMENT_LEN: u8 = 32;

/// Map a position on the red -> green -> blue -> red wheel to a color
///
/// The wheel has three 32-step segments. Inside each segment one channel
/// fades out while the next one fades in. Positions past the last segment
/// (96 and above) are reduced modulo 96, so the wheel is continuous.
pub const fn wheel(pos: u8) -> Color {
    let pos = pos % WHEEL_STEPS;
    let rising = pos % SEGMENT_LEN;
    let falling = CHANNEL_MAX - rising;

    match pos >> SEGMENT_SHIFT {
        0 => Color::new(falling, rising, 0),
        1 => Color::new(0, falling, rising),
        _ => Color::new(rising, 0, falling),
    }
}
