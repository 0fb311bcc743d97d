use crate::interpreter::lexer::TokenKind;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing a token sequence.
///
/// Positions are character offsets into the source line.
pub enum ParseError {
    /// Found a token that cannot start an operand.
    UnexpectedToken {
        /// The kind of token encountered.
        token:    TokenKind,
        /// Where the token starts.
        position: usize,
    },
    /// Reached the end of input while an operand was expected.
    UnexpectedEnd,
    /// An opening parenthesis `(` is never closed.
    MissingCloseParen {
        /// Where the unmatched `(` is.
        position: usize,
    },
    /// Found extra tokens after a complete expression.
    TrailingTokens {
        /// The first extra token.
        token:    TokenKind,
        /// Where the first extra token starts.
        position: usize,
    },
    /// Parentheses, prefix operators or operator chains nest deeper than the
    /// parser accepts.
    NestingTooDeep {
        /// The deepest nesting accepted.
        limit:    usize,
        /// The token that went one level too deep.
        position: usize,
    },
}

impl ParseError {
    /// Returns the character position the error points at, if it has one.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::UnexpectedToken { position, .. }
            | Self::MissingCloseParen { position }
            | Self::TrailingTokens { position, .. }
            | Self::NestingTooDeep { position, .. } => Some(*position),
            Self::UnexpectedEnd => None,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, position } => {
                write!(f, "Error at position {position}: Unexpected token: {token}.")
            },

            Self::UnexpectedEnd => write!(f, "Error: Unexpected end of input."),

            Self::MissingCloseParen { position } => write!(f,
                                                           "Error at position {position}: Opening parenthesis '(' is never closed."),

            Self::TrailingTokens { token, position } => write!(f,
                                                               "Error at position {position}: Extra tokens after expression, starting with {token}."),

            Self::NestingTooDeep { limit, position } => write!(f,
                                                               "Error at position {position}: Expression nests deeper than {limit} levels."),
        }
    }
}

impl std::error::Error for ParseError {}
