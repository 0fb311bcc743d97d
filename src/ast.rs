use std::fmt;

use ordered_float::OrderedFloat;

/// Represents a literal value in an expression.
///
/// Decimal values are wrapped in [`OrderedFloat`] so that whole trees can be
/// compared and hashed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A 64-bit floating-point literal.
    Real(OrderedFloat<f64>),
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Real(OrderedFloat(value))
    }
}

impl LiteralValue {
    /// Whether the value carries a minus sign (including `-0.0`).
    #[must_use]
    pub const fn is_negative(self) -> bool {
        match self {
            Self::Integer(value) => value < 0,
            Self::Real(OrderedFloat(value)) => value.is_sign_negative(),
        }
    }

    /// The value's text without its sign.
    fn magnitude(self) -> String {
        match self {
            Self::Integer(value) => value.unsigned_abs().to_string(),
            Self::Real(OrderedFloat(value)) => Self::Real(OrderedFloat(value.abs())).to_string(),
        }
    }
}

impl fmt::Display for LiteralValue {
    /// Integers print without a point; decimals always print with one and
    /// never in exponent notation, so the text tokenizes back to the same
    /// value.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Real(OrderedFloat(value)) => {
                let text = value.to_string();
                if value.is_finite() && !text.contains('.') {
                    write!(f, "{text}.0")
                } else {
                    f.write_str(&text)
                }
            },
        }
    }
}

/// Prefix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    /// `+x`, kept in the tree but invisible when formatted.
    Plus,
    /// `-x`
    Minus,
}

/// Infix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Mod,
}

impl BinaryOperator {
    /// Returns the operator as written in source.
    ///
    /// ```
    /// use arithfront::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::Mod.symbol(), '%');
    /// ```
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Mod => '%',
        }
    }
}

/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// Every node owns its children outright, so a tree is always finite and
/// acyclic. Nodes are built once by the parser and never modified.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    /// A literal number.
    Number(LiteralValue),
    /// A prefix operation.
    Unary {
        /// The operator to apply.
        op:      UnaryOperator,
        /// The operand expression.
        operand: Box<Self>,
    },
    /// An infix operation.
    Binary {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
}

impl Expr {
    /// Builds a literal node.
    ///
    /// The lexer only ever produces non-negative literals. A negative value
    /// given here is formatted as `(-x)`, the same text a negated literal
    /// produces, so the output still reads back to the same text.
    #[must_use]
    pub fn number(value: impl Into<LiteralValue>) -> Self {
        Self::Number(value.into())
    }

    /// Builds a prefix node that owns `operand`.
    #[must_use]
    pub fn unary(op: UnaryOperator, operand: Self) -> Self {
        Self::Unary { op,
                      operand: Box::new(operand) }
    }

    /// Builds an infix node that owns both operands.
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self) -> Self {
        Self::Binary { left: Box::new(left),
                       op,
                       right: Box::new(right) }
    }

    /// Renders the expression in its canonical, fully parenthesized form.
    ///
    /// - literals print as themselves,
    /// - unary plus prints its operand unchanged,
    /// - unary minus prints as `(-x)`,
    /// - every binary operation prints as `(l op r)` with no spaces.
    ///
    /// ## Example
    /// ```
    /// use arithfront::ast::{BinaryOperator, Expr, UnaryOperator};
    ///
    /// let expr = Expr::binary(Expr::number(2),
    ///                         BinaryOperator::Add,
    ///                         Expr::unary(UnaryOperator::Minus, Expr::number(1.5)));
    ///
    /// assert_eq!(expr.format(), "(2+(-1.5))");
    /// ```
    #[must_use]
    pub fn format(&self) -> String {
        let mut out = String::new();
        self.write_to(&mut out);
        out
    }

    fn write_to(&self, out: &mut String) {
        match self {
            Self::Number(value) if value.is_negative() => {
                out.push_str("(-");
                out.push_str(&value.magnitude());
                out.push(')');
            },
            Self::Number(value) => out.push_str(&value.to_string()),
            Self::Unary { op: UnaryOperator::Plus,
                          operand, } => operand.write_to(out),
            Self::Unary { op: UnaryOperator::Minus,
                          operand, } => {
                out.push_str("(-");
                operand.write_to(out);
                out.push(')');
            },
            Self::Binary { left, op, right } => {
                out.push('(');
                left.write_to(out);
                out.push(op.symbol());
                right.write_to(out);
                out.push(')');
            },
        }
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn node_count(&self) -> usize {
        match self {
            Self::Number(_) => 1,
            Self::Unary { operand, .. } => 1 + operand.node_count(),
            Self::Binary { left, right, .. } => 1 + left.node_count() + right.node_count(),
        }
    }

    /// Length of the longest path from this node to a literal, counting both
    /// ends. A lone literal has depth 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Number(_) => 1,
            Self::Unary { operand, .. } => 1 + operand.depth(),
            Self::Binary { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_decimals_keep_their_point() {
        assert_eq!(Expr::number(3.0).format(), "3.0");
        assert_eq!(Expr::number(1e21).format(), "1000000000000000000000.0");
        assert_eq!(Expr::number(0.000_1).format(), "0.0001");
    }

    #[test]
    fn unary_plus_is_elided() {
        let expr = Expr::unary(UnaryOperator::Plus,
                               Expr::unary(UnaryOperator::Minus, Expr::number(4)));
        assert_eq!(expr.format(), "(-4)");
    }

    #[test]
    fn negative_literals_format_like_negation() {
        assert_eq!(Expr::number(-5).format(), "(-5)");
        assert_eq!(Expr::number(-2.5).format(), "(-2.5)");
        assert_eq!(Expr::number(-0.0).format(), "(-0.0)");
        assert_eq!(Expr::number(i64::MIN).format(), "(-9223372036854775808)");
        assert_eq!(Expr::unary(UnaryOperator::Minus, Expr::number(5)).format(),
                   Expr::number(-5).format());
    }

    #[test]
    fn counts_nodes_and_depth() {
        let expr = Expr::binary(Expr::number(1),
                                BinaryOperator::Mul,
                                Expr::unary(UnaryOperator::Minus, Expr::number(2)));
        assert_eq!(expr.node_count(), 4);
        assert_eq!(expr.depth(), 3);
    }
}
