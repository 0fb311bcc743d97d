//! # arithfront
//!
//! arithfront is the front end of an arithmetic expression interpreter.
//! It turns one line of text into tokens, parses them into an expression tree
//! honoring operator precedence, and renders the tree back as a fully
//! parenthesized string.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::fmt;

use crate::{
    ast::Expr,
    error::Error,
    interpreter::{
        lexer::{Token, tokenize},
        parser::core::parse,
    },
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and its operator and literal types.
/// The AST is built by the parser and rendered by [`Expr::format`].
///
/// # Responsibilities
/// - Defines the closed set of node types: numbers, unary and binary
///   operations.
/// - Renders trees in a canonical, fully parenthesized form.
pub mod ast;
/// Provides unified error types for lexing and parsing.
///
/// This module defines all errors that can be raised while processing a line.
/// Every error carries the position in the line it refers to, where there is
/// one.
///
/// # Responsibilities
/// - Defines error enums for both stages (lexer, parser).
/// - Supports integration with standard error handling traits.
pub mod error;
/// Turns text into trees.
///
/// This module ties together the lexer and the parser.
pub mod interpreter;

/// What a successfully processed line produced.
#[derive(Debug, Clone, PartialEq)]
pub enum LineOutput {
    /// The tokens of the line, when parsing was not requested.
    Tokens(Vec<Token>),
    /// The parsed expression.
    Expression(Expr),
}

impl fmt::Display for LineOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tokens(tokens) => {
                for (i, token) in tokens.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{token}")?;
                }
                Ok(())
            },
            Self::Expression(expr) => write!(f, "{expr}"),
        }
    }
}

/// Tokenizes one line and, unless `tokens_only` is set, parses it.
///
/// This is the single operation the read loop relies on. Each call is
/// self-contained: nothing is shared between lines.
///
/// # Errors
/// Returns [`Error::Lex`] if the line cannot be tokenized and
/// [`Error::Parse`] if the tokens do not form exactly one expression.
///
/// # Examples
/// ```
/// use arithfront::process_line;
///
/// let output = process_line("2+3*4", false).unwrap();
/// assert_eq!(output.to_string(), "(2+(3*4))");
///
/// let output = process_line("2+3*4", true).unwrap();
/// assert_eq!(output.to_string(), "INT:2, PLUS, INT:3, MUL, INT:4");
///
/// assert!(process_line("2@3", false).is_err());
/// ```
pub fn process_line(source: &str, tokens_only: bool) -> Result<LineOutput, Error> {
    let tokens = tokenize(source)?;

    if tokens_only {
        return Ok(LineOutput::Tokens(tokens.into_iter().map(|(token, _)| token).collect()));
    }

    Ok(LineOutput::Expression(parse(&tokens)?))
}
