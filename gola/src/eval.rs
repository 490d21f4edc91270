use crate::ast::{BinaryOp, Expr};
use crate::error::GolaError;
use crate::symtab::SymbolTable;

/// Reduces an expression to a value against a read-only view of the table.
///
/// Division truncates toward zero. Results outside `i64` are an error rather
/// than wrapping.
pub fn evaluate(expr: &Expr, symbols: &SymbolTable) -> Result<i64, GolaError> {
    match expr {
        Expr::Term(term) => symbols.resolve(term),
        Expr::BinOp { left, op, right } => {
            let left_val = evaluate(left, symbols)?;
            let right_val = evaluate(right, symbols)?;
            apply(*op, left_val, right_val)
        }
    }
}

pub fn apply(op: BinaryOp, left: i64, right: i64) -> Result<i64, GolaError> {
    let result = match op {
        BinaryOp::Add => left.checked_add(right),
        BinaryOp::Sub => left.checked_sub(right),
        BinaryOp::Mul => left.checked_mul(right),
        BinaryOp::Div => {
            if right == 0 {
                return Err(GolaError::DivisionByZero);
            }
            left.checked_div(right)
        }
    };
    result.ok_or(GolaError::Overflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_expression;

    fn eval_str(text: &str, symbols: &SymbolTable) -> Result<i64, GolaError> {
        evaluate(&parse_expression(text).unwrap(), symbols)
    }

    fn eval_ok(text: &str) -> i64 {
        eval_str(text, &SymbolTable::new()).unwrap()
    }

    #[test]
    fn test_evaluate_number() {
        assert_eq!(eval_ok("42"), 42);
    }

    #[test]
    fn test_evaluate_each_operator() {
        assert_eq!(eval_ok("1 + 4"), 5);
        assert_eq!(eval_ok("43 - 3"), 40);
        assert_eq!(eval_ok("32 * 4"), 128);
        assert_eq!(eval_ok("30 / 10"), 3);
    }

    #[test]
    fn test_precedence() {
        assert_eq!(eval_ok("2 + 3 * 4"), 14);
        assert_eq!(eval_ok("2 * 3 + 4 * 5"), 26);
        assert_eq!(eval_ok("0 * 4 + 45 * 5"), 225);
        assert_eq!(eval_ok("1 * 2 + 5 / 2 - 99"), -95);
    }

    #[test]
    fn test_left_associativity() {
        assert_eq!(eval_ok("10 - 3 - 2"), 5);
        assert_eq!(eval_ok("100 / 10 / 5"), 2);
        assert_eq!(eval_ok("8 / 2 * 4"), 16);
    }

    #[test]
    fn test_variables() {
        let mut symbols = SymbolTable::new();
        symbols.assign("x", 1);
        symbols.assign("y", 2);
        assert_eq!(eval_str("x * x + y * y", &symbols).unwrap(), 5);
    }

    #[test]
    fn test_undefined_variable() {
        let err = eval_str("1 + q", &SymbolTable::new()).unwrap_err();
        assert!(matches!(err, GolaError::UndefinedVariable(ref name) if name == "q"));
    }

    #[test]
    fn test_division_by_zero() {
        let err = eval_str("10 / 0", &SymbolTable::new()).unwrap_err();
        assert!(matches!(err, GolaError::DivisionByZero));

        let mut symbols = SymbolTable::new();
        symbols.assign("z", 0);
        let err = eval_str("1 + 10 / z", &symbols).unwrap_err();
        assert!(matches!(err, GolaError::DivisionByZero));
    }

    #[test]
    fn test_division_truncates_toward_zero() {
        assert_eq!(apply(BinaryOp::Div, -7, 2).unwrap(), -3);
        assert_eq!(apply(BinaryOp::Div, 7, -2).unwrap(), -3);
        assert_eq!(apply(BinaryOp::Div, -7, -2).unwrap(), 3);
        assert_eq!(apply(BinaryOp::Div, 7, 2).unwrap(), 3);
        assert_eq!(eval_ok("0 - 7 / 2"), -3);
    }

    #[test]
    fn test_overflow() {
        assert!(matches!(
            apply(BinaryOp::Add, i64::MAX, 1),
            Err(GolaError::Overflow)
        ));
        assert!(matches!(
            apply(BinaryOp::Sub, i64::MIN, 1),
            Err(GolaError::Overflow)
        ));
        assert!(matches!(
            apply(BinaryOp::Mul, i64::MAX, 2),
            Err(GolaError::Overflow)
        ));
        assert!(matches!(
            apply(BinaryOp::Div, i64::MIN, -1),
            Err(GolaError::Overflow)
        ));
    }

    #[test]
    fn test_evaluation_does_not_touch_table() {
        let mut symbols = SymbolTable::new();
        symbols.assign("x", 3);
        let before = symbols.clone();
        let _ = eval_str("x / 0", &symbols);
        assert_eq!(symbols, before);
    }
}
