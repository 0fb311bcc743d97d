use std::iter::Peekable;

use log::debug;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Spanned, TokenKind},
        parser::binary::parse_additive,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// A parsed subtree together with its height (a lone literal has height 1).
pub(in crate::interpreter::parser) type Measured = (Expr, usize);

/// Deepest nesting accepted in one expression.
///
/// Counts both open parentheses and prefix operators on the way down, and the
/// height of the finished tree on the way up, so a tree returned by [`parse`]
/// can always be formatted and dropped without exhausting the stack.
pub const MAX_NESTING: usize = 256;

/// Parses a complete token sequence into one expression.
///
/// This is the entry point for parsing a line. The whole sequence must form a
/// single expression; tokens left over after it are an error. The sequence is
/// only read, never modified.
///
/// Grammar: `line := expression <end of input>`
///
/// # Errors
/// - [`ParseError::UnexpectedEnd`] for an empty sequence or a missing operand.
/// - [`ParseError::TrailingTokens`] if tokens remain after the expression.
/// - [`ParseError::NestingTooDeep`] past [`MAX_NESTING`].
/// - Any error raised while parsing the expression itself.
///
/// # Example
/// ```
/// use arithfront::interpreter::{lexer::tokenize, parser::core::parse};
///
/// let tokens = tokenize("(2+3)*4").unwrap();
/// assert_eq!(parse(&tokens).unwrap().format(), "((2+3)*4)");
/// ```
pub fn parse(tokens: &[Spanned]) -> ParseResult<Expr> {
    let mut iter = tokens.iter().peekable();
    let (expr, height) = parse_additive(&mut iter, 0)?;

    if let Some((token, position)) = iter.next() {
        return Err(ParseError::TrailingTokens { token:    token.kind(),
                                                position: *position, });
    }

    debug!("parsed {} node(s), height {height}", expr.node_count());
    Ok(expr)
}

/// Parses a full expression.
///
/// It begins at the lowest-precedence level, addition, and recursively
/// descends through the precedence hierarchy. Parsing stops at the first
/// token that cannot continue the expression, which is left unconsumed.
///
/// Grammar: `expression := additive`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned>
{
    parse_additive(tokens, 0).map(|(expr, _)| expr)
}

/// Returns the kind of the next token, or [`TokenKind::EndOfInput`] when the
/// sequence is exhausted.
pub(in crate::interpreter::parser) fn peek_kind<'a, I>(tokens: &mut Peekable<I>) -> TokenKind
    where I: Iterator<Item = &'a Spanned>
{
    tokens.peek()
          .map_or(TokenKind::EndOfInput, |(token, _)| token.kind())
}

/// Fails with [`ParseError::NestingTooDeep`] once `level` passes
/// [`MAX_NESTING`]. `position` is the token that went one level too far.
pub(in crate::interpreter::parser) const fn check_nesting(level: usize,
                                                          position: usize)
                                                          -> ParseResult<usize> {
    if level > MAX_NESTING {
        Err(ParseError::NestingTooDeep { limit: MAX_NESTING,
                                         position })
    } else {
        Ok(level)
    }
}
