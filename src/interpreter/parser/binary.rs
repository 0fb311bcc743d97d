use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::{Spanned, Token},
        parser::{
            core::{Measured, ParseResult, check_nesting},
            unary::parse_unary,
        },
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`, so `a - b - c`
/// parses as `(a - b) - c`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with position information.
/// - `depth`: Open parentheses and prefix operators enclosing this expression.
///
/// # Returns
/// An `Expr::Binary` tree representing the parsed expression, with its height.
pub(crate) fn parse_additive<'a, I>(tokens: &mut Peekable<I>,
                                    depth: usize)
                                    -> ParseResult<Measured>
    where I: Iterator<Item = &'a Spanned>
{
    let (mut left, mut height) = parse_multiplicative(tokens, depth)?;
    loop {
        if let Some((token, position)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            let position = *position;
            tokens.next();
            let (right, right_height) = parse_multiplicative(tokens, depth)?;
            height = check_nesting(height.max(right_height) + 1, position)?;
            left = Expr::binary(left, op, right);
            continue;
        }
        break;
    }
    Ok((left, height))
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators: `*`, `/` and `%`.
///
/// The rule is: `multiplicative := unary (("*" | "/" | "%") unary)*`
pub(crate) fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>,
                                          depth: usize)
                                          -> ParseResult<Measured>
    where I: Iterator<Item = &'a Spanned>
{
    let (mut left, mut height) = parse_unary(tokens, depth)?;
    loop {
        if let Some((token, position)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod)
        {
            let position = *position;
            tokens.next();
            let (right, right_height) = parse_unary(tokens, depth)?;
            height = check_nesting(height.max(right_height) + 1, position)?;
            left = Expr::binary(left, op, right);
            continue;
        }
        break;
    }
    Ok((left, height))
}

/// Maps a token to its corresponding binary operator.
///
/// The mapping looks only at the token's kind. Returns `None` for literals and
/// parentheses.
///
/// # Example
/// ```
/// use arithfront::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Star),
///            Some(BinaryOperator::Mul));
/// assert_eq!(token_to_binary_operator(&Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Percent => Some(BinaryOperator::Mod),
        Token::IntLiteral(_) | Token::FloatLiteral(_) | Token::LParen | Token::RParen => None,
    }
}
