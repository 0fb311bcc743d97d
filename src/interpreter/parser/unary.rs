use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{Spanned, Token, TokenKind},
        parser::{
            binary::parse_additive,
            core::{Measured, ParseResult, check_nesting, peek_kind},
        },
    },
};

/// Parses a unary expression.
///
/// Supports prefix operators:
/// - `+`  (no-op)
/// - `-`  (numeric negation)
///
/// Unary operators are right-associative and bind tighter than any binary
/// operator, so `--5` is parsed as `-( -5 )`. Each prefix operator opens one
/// nesting level.
///
/// Grammar:
/// ```text
///     unary := ("+" | "-") unary
///            | primary
/// ```
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Measured>
    where I: Iterator<Item = &'a Spanned>
{
    let op = match peek_kind(tokens) {
        TokenKind::Plus => UnaryOperator::Plus,
        TokenKind::Minus => UnaryOperator::Minus,
        _ => return parse_primary(tokens, depth),
    };
    let position = tokens.next().map_or(0, |(_, position)| *position);
    let depth = check_nesting(depth + 1, position)?;
    let (operand, height) = parse_unary(tokens, depth)?;
    let height = check_nesting(height + 1, position)?;
    Ok((Expr::unary(op, operand), height))
}

/// Parses a primary (atomic) expression: a literal or a parenthesized
/// expression.
///
/// Grammar:
/// ```text
///     primary := INT | FLOAT | "(" expression ")"
/// ```
///
/// # Errors
/// - [`ParseError::UnexpectedEnd`] if the tokens run out.
/// - [`ParseError::UnexpectedToken`] for an operator or `)`.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Measured>
    where I: Iterator<Item = &'a Spanned>
{
    match tokens.next() {
        Some((Token::IntLiteral(value), _)) => Ok((Expr::number(*value), 1)),
        Some((Token::FloatLiteral(value), _)) => Ok((Expr::number(*value), 1)),
        Some((Token::LParen, position)) => parse_grouping(tokens, depth, *position),
        Some((token, position)) => Err(ParseError::UnexpectedToken { token:    token.kind(),
                                                                     position: *position, }),
        None => Err(ParseError::UnexpectedEnd),
    }
}

/// Parses the rest of a parenthesized expression after its `(`.
///
/// The group yields the inner expression itself; parentheses leave no node
/// in the tree, but they still count as a nesting level.
///
/// # Parameters
/// - `tokens`: Token stream positioned just after `(`.
/// - `depth`: Nesting level outside the group.
/// - `open`: Position of the `(`, reported if it is never closed.
///
/// # Errors
/// - [`ParseError::MissingCloseParen`] if the input ends before `)`.
/// - [`ParseError::UnexpectedToken`] if some other token stands where `)`
///   belongs.
/// - [`ParseError::NestingTooDeep`] if the group opens one level too many.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, depth: usize, open: usize) -> ParseResult<Measured>
    where I: Iterator<Item = &'a Spanned>
{
    let depth = check_nesting(depth + 1, open)?;
    let inner = parse_additive(tokens, depth)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(inner),
        Some((token, position)) => Err(ParseError::UnexpectedToken { token:    token.kind(),
                                                                     position: *position, }),
        None => Err(ParseError::MissingCloseParen { position: open }),
    }
}
