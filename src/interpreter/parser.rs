/// Entry points and shared helpers.
///
/// Contains the line-level [`core::parse`] function, the expression entry
/// point and lookahead helpers.
pub mod core;

/// Prefix operators and operands.
///
/// Handles unary `+`/`-`, literals and parenthesized groups.
pub mod unary;

/// Binary operator parsing.
///
/// Implements the left-associative additive and multiplicative levels of the
/// precedence hierarchy.
pub mod binary;
