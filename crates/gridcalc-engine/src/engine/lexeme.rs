//! Formula tokens.

use serde::{Deserialize, Serialize};

use super::coordinate::Coordinate;
use super::error::ExprError;

/// A binary integer operator. Operators apply strictly left to right;
/// there is no precedence between them.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// The operator's integer function. Division truncates toward zero and
    /// fails on a zero divisor; all operators wrap on overflow.
    pub fn apply(self, left: i64, right: i64) -> Result<i64, ExprError> {
        match self {
            Operation::Add => Ok(left.wrapping_add(right)),
            Operation::Subtract => Ok(left.wrapping_sub(right)),
            Operation::Multiply => Ok(left.wrapping_mul(right)),
            Operation::Divide => {
                if right == 0 {
                    Err(ExprError::DivisionByZero)
                } else {
                    Ok(left.wrapping_div(right))
                }
            }
        }
    }
}

/// Parse a single operator character.
pub fn parse_operation(raw: char) -> Result<Operation, ExprError> {
    match raw {
        '+' => Ok(Operation::Add),
        '-' => Ok(Operation::Subtract),
        '*' => Ok(Operation::Multiply),
        '/' => Ok(Operation::Divide),
        _ => Err(ExprError::UnknownOperation(raw)),
    }
}

/// Parse a non-negative integer literal: non-empty, ASCII digits only (no
/// sign, no decimal point, no surrounding whitespace).
pub fn parse_number(raw: &str) -> Result<i64, ExprError> {
    if raw.is_empty() || !raw.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(ExprError::NotANumber(raw.to_string()));
    }
    raw.parse().map_err(|_| ExprError::NotANumber(raw.to_string()))
}

/// One token of a tokenized formula.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Lexeme {
    Text(String),
    Number(i64),
    CellReference(Coordinate),
    Operation(Operation),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_left_operand_first() {
        assert_eq!(Operation::Subtract.apply(5, 9), Ok(-4));
        assert_eq!(Operation::Divide.apply(8, 3), Ok(2));
    }

    #[test]
    fn test_division_truncates_toward_zero() {
        assert_eq!(Operation::Divide.apply(-7, 2), Ok(-3));
        assert_eq!(Operation::Divide.apply(7, -2), Ok(-3));
    }

    #[test]
    fn test_division_by_zero_fails() {
        assert_eq!(Operation::Divide.apply(5, 0), Err(ExprError::DivisionByZero));
    }

    #[test]
    fn test_parse_operation() {
        assert_eq!(parse_operation('+'), Ok(Operation::Add));
        assert_eq!(parse_operation('-'), Ok(Operation::Subtract));
        assert_eq!(parse_operation('*'), Ok(Operation::Multiply));
        assert_eq!(parse_operation('/'), Ok(Operation::Divide));
        assert_eq!(parse_operation('&'), Err(ExprError::UnknownOperation('&')));
        assert_eq!(parse_operation('é'), Err(ExprError::UnknownOperation('é')));
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("0"), Ok(0));
        assert_eq!(parse_number("007"), Ok(7));
        assert_eq!(parse_number("9323"), Ok(9323));
    }

    #[test]
    fn test_parse_number_rejects_non_digit_input() {
        for raw in ["", "12a", "a12", "+5", "-5", " 5", "5 ", "1.5"] {
            assert_eq!(
                parse_number(raw),
                Err(ExprError::NotANumber(raw.to_string())),
                "input {raw:?}",
            );
        }
    }

    #[test]
    fn test_parse_number_rejects_overflow() {
        let raw = "99999999999999999999";
        assert_eq!(parse_number(raw), Err(ExprError::NotANumber(raw.to_string())));
    }
}
