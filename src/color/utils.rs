use super::{CHANNEL_MAX, Color, INTERPOLATION_STEPS};

/// Keep the low 5 bits of a channel value
///
/// This is the only overflow policy of the color model: out-of-range values
/// wrap instead of saturating.
#[inline]
pub const fn mask5(value: u8) -> u8 {
    value & CHANNEL_MAX
}

/// Pack `(r, g, b)` into a color. See [`Color::new`].
#[inline]
pub const fn encode(r: u8, g: u8, b: u8) -> Color {
    Color::new(r, g, b)
}

/// Unpack a color into `(r, g, b)`
#[inline]
pub const fn decode(color: Color) -> (u8, u8, u8) {
    color.channels()
}

/// Linear blend between two colors
///
/// `pos` runs from 0 (all `a`) to 32 (all `b`). Each channel is computed as
/// `a - (a - b) * pos / 32` in signed arithmetic with truncating division,
/// and only masked when packed back. Positions above 32 extrapolate and wrap.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn interpolate(a: Color, b: Color, pos: u8) -> Color {
    const fn channel(from: u8, to: u8, pos: u8) -> u8 {
        let from = from as i32;
        let delta = from - to as i32;
        let value = from - delta * pos as i32 / INTERPOLATION_STEPS as i32;
        // Two's complement truncation followed by the 5-bit mask in `Color::new`
        value as u8
    }

    Color::new(
        channel(a.r(), b.r(), pos),
        channel(a.g(), b.g(), pos),
        channel(a.b(), b.b(), pos),
    )
}
