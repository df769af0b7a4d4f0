use core::fmt;

/// Reasons a remote command is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    /// Mode name is not one of `solid`, `pulse`, `fade`, `rainbow`
    UnrecognizedMode,
    /// Color token is not one of `r g b y c p w k`
    UnrecognizedColorToken,
    /// Numeric argument is not a non-negative decimal integer
    ParseFailure,
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::UnrecognizedMode => "unrecognized mode",
            Self::UnrecognizedColorToken => "unrecognized color token",
            Self::ParseFailure => "not a decimal integer",
        };
        f.write_str(message)
    }
}

impl core::error::Error for CommandError {}
