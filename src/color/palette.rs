use super::Color;

const TOKEN_RED: &str = "r";
const TOKEN_GREEN: &str = "g";
const TOKEN_BLUE: &str = "b";
const TOKEN_YELLOW: &str = "y";
const TOKEN_CYAN: &str = "c";
const TOKEN_PURPLE: &str = "p";
const TOKEN_WHITE: &str = "w";
const TOKEN_BLACK: &str = "k";

/// Named colors accepted by the remote color command
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorToken {
    Red,
    Green,
    Blue,
    Yellow,
    Cyan,
    Purple,
    White,
    Black,
}

impl ColorToken {
    pub const ALL: [Self; 8] = [
        Self::Red,
        Self::Green,
        Self::Blue,
        Self::Yellow,
        Self::Cyan,
        Self::Purple,
        Self::White,
        Self::Black,
    ];

    /// Full-intensity color named by the token
    ///
    /// Channels follow the [`Color`] layout of this crate, not a strip's wire
    /// order: `Red` packs to `0x001F`. Any per-strip channel swap is applied
    /// by the driver.
    pub const fn color(self) -> Color {
        match self {
            Self::Red => Color::new(31, 0, 0),
            Self::Green => Color::new(0, 31, 0),
            Self::Blue => Color::new(0, 0, 31),
            Self::Yellow => Color::new(31, 31, 0),
            Self::Cyan => Color::new(0, 31, 31),
            Self::Purple => Color::new(31, 0, 31),
            Self::White => Color::new(31, 31, 31),
            Self::Black => Color::new(0, 0, 0),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Red => TOKEN_RED,
            Self::Green => TOKEN_GREEN,
            Self::Blue => TOKEN_BLUE,
            Self::Yellow => TOKEN_YELLOW,
            Self::Cyan => TOKEN_CYAN,
            Self::Purple => TOKEN_PURPLE,
            Self::White => TOKEN_WHITE,
            Self::Black => TOKEN_BLACK,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            TOKEN_RED => Some(Self::Red),
            TOKEN_GREEN => Some(Self::Green),
            TOKEN_BLUE => Some(Self::Blue),
            TOKEN_YELLOW => Some(Self::Yellow),
            TOKEN_CYAN => Some(Self::Cyan),
            TOKEN_PURPLE => Some(Self::Purple),
            TOKEN_WHITE => Some(Self::White),
            TOKEN_BLACK => Some(Self::Black),
            _ => None,
        }
    }
}

impl From<ColorToken> for Color {
    fn from(token: ColorToken) -> Self {
        token.color()
    }
}
