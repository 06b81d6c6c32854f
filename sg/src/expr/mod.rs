//! Sandboxed arithmetic expression evaluator
//!
//! Expressions pass through four stages before a value comes out:
//!
//! ```text
//! input ──▶ tokenize ──▶ parse ──▶ validate ──▶ evaluate
//!           (screen idents) (RawExpr)  (Program)    (Number)
//! ```
//!
//! Identifiers are screened against the allow-list as soon as the input is
//! tokenized, and the parsed tree is converted into a [`Program`] whose nodes
//! can only name allow-listed constants and functions. Nothing is evaluated
//! until the whole tree has been validated. There is no path from the input
//! string to any general-purpose interpreter.
//!
//! Allow-list: constants `pi`, `e`; functions `abs`, `round`, `min`, `max`,
//! `sum`, `pow`, `sqrt`, `sin`, `cos`, `tan`, `log`, `log10`, `exp`, `ceil`,
//! `floor`. Operators: `+ - * / **` and parentheses.

mod eval;
mod number;
mod parser;
mod program;
mod token;

use tracing::debug;

use crate::Result;

pub use number::Number;
pub use program::{BinaryOp, Constant, Expr, Function, Program, UnaryOp};

/// Maximum nesting of parentheses and unary operators
pub const MAX_DEPTH: usize = 100;

/// Maximum operators plus nesting levels along any path of the tree
///
/// Flat chains such as `1+1+...+1` count here even though they need no
/// parentheses, so evaluation depth stays bounded for any input length.
pub const MAX_HEIGHT: usize = 256;

/// Compile and evaluate `input`
///
/// Fractional results are rounded to 10 decimal digits; integral results
/// are returned unchanged.
pub fn evaluate_expression(input: &str) -> Result<Number> {
    debug!(len = input.len(), "evaluate_expression: called");
    Program::compile(input)?.evaluate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GenError;

    fn eval(input: &str) -> Number {
        evaluate_expression(input).unwrap()
    }

    #[test]
    fn test_sqrt_plus_pow() {
        assert_eq!(eval("sqrt(144) + pow(2,3)").as_f64(), 20.0);
        assert_eq!(eval("sqrt(144) + pow(2, 3)").as_f64(), 20.0);
    }

    #[test]
    fn test_sin_half_pi() {
        assert_eq!(eval("sin(pi/2)").as_f64(), 1.0);
    }

    #[test]
    fn test_precedence() {
        assert_eq!(eval("2 + 3 * 4"), Number::Int(14));
        assert_eq!(eval("(2 + 3) * 4"), Number::Int(20));
        assert_eq!(eval("-2 ** 2"), Number::Int(-4));
        assert_eq!(eval("2 ** 3 ** 2"), Number::Int(512));
        assert_eq!(eval("10 - 4 - 3"), Number::Int(3));
        assert_eq!(eval("2 ** -1"), Number::Float(0.5));
    }

    #[test]
    fn test_integers_preserved() {
        assert_eq!(eval("7 * 6"), Number::Int(42));
        assert_eq!(eval("max(3, 9, 4)"), Number::Int(9));
        assert_eq!(eval("floor(2.7)"), Number::Int(2));
        assert_eq!(eval("6 / 3"), Number::Float(2.0));
    }

    #[test]
    fn test_float_rounded_to_ten_places() {
        assert_eq!(eval("0.1 + 0.2"), Number::Float(0.3));
        assert_eq!(eval("1 / 3"), Number::Float(0.3333333333));
    }

    #[test]
    fn test_disallowed_identifiers_never_execute() {
        for input in [
            "__import__('os')",
            "__import__('os').system('ls')",
            "os.system('ls')",
            "math.sqrt(4)",
            "eval(1)",
            "exec",
            "open('/etc/passwd')",
            "x + 1",
            "PI",
        ] {
            let err = evaluate_expression(input).unwrap_err();
            assert!(
                matches!(err, GenError::DisallowedIdentifier { .. }),
                "{} produced {:?}",
                input,
                err
            );
        }
    }

    #[test]
    fn test_domain_errors() {
        for input in ["sqrt(-1)", "1 / 0", "log(0)", "log10(-5)", "0 ** -1", "exp(1000)", "(-8) ** 0.5"] {
            let err = evaluate_expression(input).unwrap_err();
            assert!(matches!(err, GenError::Evaluation { .. }), "{} produced {:?}", input, err);
        }
    }

    #[test]
    fn test_sqrt_negative_names_operation() {
        match evaluate_expression("sqrt(-1)").unwrap_err() {
            GenError::Evaluation { operation, .. } => assert_eq!(operation, "sqrt"),
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_syntax_errors() {
        for input in ["(1 + 2", "1 + 2)", "", "1 +", "2 3", "sqrt(1, 2)", "1 $ 2", "min()"] {
            let err = evaluate_expression(input).unwrap_err();
            assert!(matches!(err, GenError::Syntax { .. }), "{} produced {:?}", input, err);
        }
    }

    #[test]
    fn test_long_flat_chain() {
        let input = format!("{}1", "1+".repeat(199));
        assert_eq!(eval(&input), Number::Int(200));

        let input = format!("{}1", "1+".repeat(50_000));
        assert!(matches!(evaluate_expression(&input), Err(GenError::Syntax { .. })));
    }

    #[test]
    fn test_too_deep() {
        let input = format!("{}1{}", "(".repeat(MAX_DEPTH + 5), ")".repeat(MAX_DEPTH + 5));
        assert!(matches!(evaluate_expression(&input), Err(GenError::Syntax { .. })));
    }
}
