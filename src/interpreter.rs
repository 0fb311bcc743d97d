/// The lexer module tokenizes source text for further parsing.
///
/// The lexer reads one line of text and produces a sequence of tokens, each
/// paired with the position where it starts.
///
/// # Responsibilities
/// - Recognises operators, parentheses and numeric literals.
/// - Decides between integer and decimal literals.
/// - Reports malformed numbers and unrecognised characters.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser reads the token sequence produced by the lexer and constructs an
/// [`Expr`](crate::ast::Expr) honoring operator precedence and associativity.
///
/// # Responsibilities
/// - Converts tokens into AST nodes.
/// - Validates the grammar, reporting errors with position info.
pub mod parser;
