use arithfront::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::LexError,
    interpreter::{
        lexer::{Token, tokenize},
        parser::core::parse,
    },
};
use proptest::prelude::*;

fn literal() -> impl Strategy<Value = Expr> {
    prop_oneof![(0i64..100_000).prop_map(Expr::number),
                (0u32..10_000, 1u32..1_000).prop_map(|(whole, frac)| {
                                               let text = format!("{whole}.{frac}");
                                               Expr::number(text.parse::<f64>().unwrap())
                                           }),]
}

fn binary_operator() -> impl Strategy<Value = BinaryOperator> {
    prop_oneof![Just(BinaryOperator::Add),
                Just(BinaryOperator::Sub),
                Just(BinaryOperator::Mul),
                Just(BinaryOperator::Div),
                Just(BinaryOperator::Mod),]
}

/// Trees without unary plus, which formatting drops.
fn expression() -> impl Strategy<Value = Expr> {
    literal().prop_recursive(6, 48, 2, |inner| {
                 prop_oneof![inner.clone()
                                  .prop_map(|operand| Expr::unary(UnaryOperator::Minus, operand)),
                             (inner.clone(), binary_operator(), inner)
                                 .prop_map(|(left, op, right)| Expr::binary(left, op, right)),]
             })
}

proptest! {
    #[test]
    fn digit_runs_are_single_integers(n in any::<u32>()) {
        let tokens = tokenize(&n.to_string()).unwrap();
        prop_assert_eq!(tokens, vec![(Token::IntLiteral(i64::from(n)), 0)]);
    }

    #[test]
    fn one_point_makes_a_single_decimal(text in "[0-9]{1,9}\\.[0-9]{1,9}") {
        let tokens = tokenize(&text).unwrap();
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].0, Token::FloatLiteral(text.parse::<f64>().unwrap()));
    }

    #[test]
    fn two_points_are_malformed(text in "[0-9]{1,4}\\.[0-9]{0,4}\\.[0-9.]{0,4}",
                                prefix in "(1 \\+ )?") {
        let line = format!("{prefix}{text}");
        let is_malformed = matches!(tokenize(&line),
                                    Err(LexError::MalformedNumber { position, .. })
                                        if position == prefix.len());
        prop_assert!(is_malformed);
    }

    #[test]
    fn formatted_trees_parse_back_to_themselves(expr in expression()) {
        let text = expr.format();
        let tokens = tokenize(&text).unwrap();
        let reparsed = parse(&tokens).unwrap();
        prop_assert_eq!(reparsed.format(), text);
        prop_assert_eq!(reparsed, expr);
    }

    #[test]
    fn arbitrary_lines_never_panic(line in "[0-9+*/%() .\\-]{0,40}") {
        if let Ok(tokens) = tokenize(&line) {
            let _ = parse(&tokens);
        }
    }
}
