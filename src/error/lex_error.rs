#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing a line.
///
/// Positions are character offsets into the line, starting at zero.
pub enum LexError {
    /// A character that does not start any token.
    UnexpectedChar {
        /// The offending character.
        character: char,
        /// Where the character appears.
        position:  usize,
    },
    /// A numeric literal containing more than one decimal point.
    MalformedNumber {
        /// The literal as written.
        literal:  String,
        /// Where the literal starts.
        position: usize,
    },
    /// An integer literal too large for a 64-bit signed integer.
    LiteralTooLarge {
        /// The literal as written.
        literal:  String,
        /// Where the literal starts.
        position: usize,
    },
}

impl LexError {
    /// Returns the character position the error points at.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedChar { position, .. }
            | Self::MalformedNumber { position, .. }
            | Self::LiteralTooLarge { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedChar { character, position } => {
                write!(f, "Error at position {position}: Unexpected character '{character}'.")
            },
            Self::MalformedNumber { literal, position } => write!(f,
                                                                  "Error at position {position}: Malformed number '{literal}' has more than one decimal point."),
            Self::LiteralTooLarge { literal, position } => {
                write!(f, "Error at position {position}: Literal '{literal}' is too large.")
            },
        }
    }
}

impl std::error::Error for LexError {}
