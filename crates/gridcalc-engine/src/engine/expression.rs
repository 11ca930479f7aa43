//! Parsed cell contents.

use serde::{Deserialize, Serialize};

use super::lexeme::Lexeme;

/// What a cell's raw text turned out to be.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum ExpressionKind {
    #[default]
    None,
    Text,
    Arithmetic,
    Error,
}

/// A parsed cell: a kind tag and the ordered lexeme sequence.
///
/// An arithmetic expression starts out as the parser's unresolved lexeme
/// run and is later replaced wholesale by the evaluator, either with its
/// resolved single-number form or with an error expression. Text, error
/// and empty cells are terminal from the start.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Expression {
    pub kind: ExpressionKind,
    pub lexemes: Vec<Lexeme>,
}

impl Expression {
    pub fn new(kind: ExpressionKind, lexemes: Vec<Lexeme>) -> Expression {
        Expression { kind, lexemes }
    }

    /// A resolved arithmetic expression holding a single number.
    pub fn number(value: i64) -> Expression {
        Expression::new(ExpressionKind::Arithmetic, vec![Lexeme::Number(value)])
    }

    /// An error expression; its display text is `#` followed by the message.
    pub fn error(message: &str) -> Expression {
        Expression::new(
            ExpressionKind::Error,
            vec![Lexeme::Text(format!("#{message}"))],
        )
    }

    /// The value of an arithmetic expression collapsed to a single number,
    /// `None` for every other shape.
    pub fn resolved_number(&self) -> Option<i64> {
        match (self.kind, self.lexemes.as_slice()) {
            (ExpressionKind::Arithmetic, [Lexeme::Number(value)]) => Some(*value),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::parse_expression;

    #[test]
    fn test_default_is_empty_cell() {
        let expression = Expression::default();
        assert_eq!(expression.kind, ExpressionKind::None);
        assert!(expression.lexemes.is_empty());
    }

    #[test]
    fn test_error_expression_prefixes_message() {
        let expression = Expression::error("Division by 0");
        assert_eq!(expression.kind, ExpressionKind::Error);
        assert_eq!(
            expression.lexemes,
            vec![Lexeme::Text("#Division by 0".to_string())],
        );
    }

    #[test]
    fn test_resolved_number() {
        assert_eq!(Expression::number(-4).resolved_number(), Some(-4));
        assert_eq!(Expression::default().resolved_number(), None);
        assert_eq!(parse_expression("=1+2").resolved_number(), None);
    }

    #[test]
    fn test_serde_round_trip() {
        let expression = parse_expression("=a1+2*3");
        let encoded = serde_json::to_string(&expression).unwrap();
        let decoded: Expression = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, expression);
    }
}
