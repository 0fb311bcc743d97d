use std::fmt;

use log::{debug, trace};
use logos::Logos;

use crate::{ast::LiteralValue, error::LexError};

/// Result of tokenizing one line.
pub type LexResult<T> = Result<T, LexError>;

/// A token paired with the character position where it starts.
pub type Spanned = (Token, usize);

/// Represents a lexical token in the source input.
///
/// Literal variants carry their parsed value, every other variant carries
/// nothing, so a value can never be attached to the wrong kind of token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// Integer literal tokens, such as `42`.
    IntLiteral(i64),
    /// Decimal literal tokens, such as `3.14` or `3.`.
    FloatLiteral(f64),
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// `(`
    LParen,
    /// `)`
    RParen,
}

/// The kind of a token, without its value.
///
/// `EndOfInput` is never produced by [`tokenize`]; the parser reports it when
/// it looks past the last token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// An integer literal.
    IntLiteral,
    /// A decimal literal.
    FloatLiteral,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// Lookahead past the last token.
    EndOfInput,
}

impl Token {
    /// Returns the kind of this token.
    ///
    /// ```
    /// use arithfront::interpreter::lexer::{Token, TokenKind};
    ///
    /// assert_eq!(Token::IntLiteral(7).kind(), TokenKind::IntLiteral);
    /// assert_eq!(Token::Percent.kind(), TokenKind::Percent);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        match self {
            Self::IntLiteral(_) => TokenKind::IntLiteral,
            Self::FloatLiteral(_) => TokenKind::FloatLiteral,
            Self::Plus => TokenKind::Plus,
            Self::Minus => TokenKind::Minus,
            Self::Star => TokenKind::Star,
            Self::Slash => TokenKind::Slash,
            Self::Percent => TokenKind::Percent,
            Self::LParen => TokenKind::LParen,
            Self::RParen => TokenKind::RParen,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IntLiteral(value) => write!(f, "INT:{value}"),
            Self::FloatLiteral(value) => write!(f, "FLOAT:{}", LiteralValue::from(*value)),
            Self::Plus => write!(f, "PLUS"),
            Self::Minus => write!(f, "MINUS"),
            Self::Star => write!(f, "MUL"),
            Self::Slash => write!(f, "DIV"),
            Self::Percent => write!(f, "MOD"),
            Self::LParen => write!(f, "LPAREN"),
            Self::RParen => write!(f, "RPAREN"),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::IntLiteral => "integer literal",
            Self::FloatLiteral => "decimal literal",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Star => "'*'",
            Self::Slash => "'/'",
            Self::Percent => "'%'",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::EndOfInput => "end of input",
        };
        f.write_str(text)
    }
}

/// Character classes recognised by the scanner before number validation.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
enum RawToken {
    /// A run of digits and decimal points starting with a digit.
    #[regex(r"[0-9][0-9.]*")]
    Number,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    /// Spaces and newlines.
    #[regex(r"[ \n]+", logos::skip)]
    Ignored,
}

/// Converts one line of text into a sequence of tokens.
///
/// Each token is paired with the character position where it starts. Spaces
/// and newlines are skipped. Nothing is appended at the end of the sequence.
///
/// The call is all-or-nothing: the first malformed number or unrecognised
/// character discards every token scanned so far.
///
/// # Errors
/// - [`LexError::UnexpectedChar`] for a character that starts no token.
/// - [`LexError::MalformedNumber`] for a number with two or more `.`.
/// - [`LexError::LiteralTooLarge`] for an integer that does not fit in `i64`
///   or a decimal that does not fit in a finite `f64`.
///
/// # Example
/// ```
/// use arithfront::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("2 + 3.5").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::IntLiteral(2), 0), (Token::Plus, 2), (Token::FloatLiteral(3.5), 4)]);
/// ```
pub fn tokenize(source: &str) -> LexResult<Vec<Spanned>> {
    let mut tokens = Vec::new();
    let mut lexer = RawToken::lexer(source);

    while let Some(raw) = lexer.next() {
        // Everything accepted so far is ASCII, so the byte offset is also the
        // character position.
        let position = lexer.span().start;
        let token = match raw {
            Ok(RawToken::Number) => scan_number(lexer.slice(), position)?,
            Ok(RawToken::Plus) => Token::Plus,
            Ok(RawToken::Minus) => Token::Minus,
            Ok(RawToken::Star) => Token::Star,
            Ok(RawToken::Slash) => Token::Slash,
            Ok(RawToken::Percent) => Token::Percent,
            Ok(RawToken::LParen) => Token::LParen,
            Ok(RawToken::RParen) => Token::RParen,
            Ok(RawToken::Ignored) => continue,
            Err(()) => {
                let character = source.get(position..)
                                      .and_then(|rest| rest.chars().next())
                                      .unwrap_or(char::REPLACEMENT_CHARACTER);
                return Err(LexError::UnexpectedChar { character, position });
            },
        };
        trace!("scanned {token} at {position}");
        tokens.push((token, position));
    }

    debug!("tokenized {} token(s) from {} byte(s)", tokens.len(), source.len());
    Ok(tokens)
}

/// Turns a digit/point run into a literal token.
///
/// No point gives an integer, exactly one point gives a decimal (digits are
/// not required after the point), more than one is malformed.
fn scan_number(literal: &str, position: usize) -> LexResult<Token> {
    match literal.matches('.').count() {
        0 => literal.parse()
                    .map(Token::IntLiteral)
                    .map_err(|_| LexError::LiteralTooLarge { literal: literal.to_string(),
                                                             position }),
        1 => {
            let value: f64 =
                literal.parse()
                       .map_err(|_| LexError::MalformedNumber { literal: literal.to_string(),
                                                                position })?;
            if value.is_finite() {
                Ok(Token::FloatLiteral(value))
            } else {
                Err(LexError::LiteralTooLarge { literal: literal.to_string(),
                                                position })
            }
        },
        _ => Err(LexError::MalformedNumber { literal: literal.to_string(),
                                             position }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).unwrap().iter().map(|(tok, _)| tok.kind()).collect()
    }

    #[test]
    fn operators_map_one_to_one() {
        assert_eq!(kinds("+-*/%()"),
                   vec![TokenKind::Plus,
                        TokenKind::Minus,
                        TokenKind::Star,
                        TokenKind::Slash,
                        TokenKind::Percent,
                        TokenKind::LParen,
                        TokenKind::RParen]);
    }

    #[test]
    fn trailing_point_is_a_float() {
        assert_eq!(scan_number("3.", 0).unwrap(), Token::FloatLiteral(3.0));
    }

    #[test]
    fn oversized_decimal_is_rejected() {
        let literal = format!("{}.5", "9".repeat(400));
        assert_eq!(tokenize(&literal).unwrap_err(),
                   LexError::LiteralTooLarge { literal,
                                               position: 0, });
    }

    #[test]
    fn leading_point_is_not_a_number() {
        assert_eq!(tokenize(".5").unwrap_err(),
                   LexError::UnexpectedChar { character: '.',
                                              position:  0, });
    }

    #[test]
    fn tabs_are_rejected() {
        assert_eq!(tokenize("1\t2").unwrap_err(),
                   LexError::UnexpectedChar { character: '\t',
                                              position:  1, });
    }

    #[test]
    fn non_ascii_character_is_reported_whole() {
        assert_eq!(tokenize("1 + é").unwrap_err(),
                   LexError::UnexpectedChar { character: 'é',
                                              position:  4, });
    }

    #[test]
    fn display_uses_short_labels() {
        let line = tokenize("1.5*(2.)").unwrap()
                                      .iter()
                                      .map(|(tok, _)| tok.to_string())
                                      .collect::<Vec<_>>()
                                      .join(", ");
        assert_eq!(line, "FLOAT:1.5, MUL, LPAREN, FLOAT:2.0, RPAREN");
    }
}
