/// Lexing errors.
///
/// Raised while turning a line of text into tokens: unrecognised characters
/// and numeric literals that cannot be represented.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree from
/// tokens, such as unexpected tokens, missing parentheses, or trailing input.
pub mod parse_error;

use std::fmt;

pub use lex_error::LexError;
pub use parse_error::ParseError;

/// Any error that can end the processing of one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The line could not be tokenized.
    Lex(LexError),
    /// The tokens do not form an expression.
    Parse(ParseError),
}

impl Error {
    /// Returns the character position in the line the error points at, if
    /// it has one.
    ///
    /// ```
    /// use arithfront::process_line;
    ///
    /// assert_eq!(process_line("1 + x", false).unwrap_err().position(), Some(4));
    /// assert_eq!(process_line("1 +", false).unwrap_err().position(), None);
    /// ```
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::Lex(err) => Some(err.position()),
            Self::Parse(err) => err.position(),
        }
    }
}

impl From<LexError> for Error {
    fn from(err: LexError) -> Self {
        Self::Lex(err)
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Self::Parse(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lex(err) => write!(f, "{err}"),
            Self::Parse(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(err) => Some(err),
            Self::Parse(err) => Some(err),
        }
    }
}
