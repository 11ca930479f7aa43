//! Raw cell text classification and formula tokenization.

use super::coordinate::parse_coordinate;
use super::error::ExprError;
use super::expression::{Expression, ExpressionKind};
use super::lexeme::{Lexeme, parse_number, parse_operation};

/// Parse one cell's raw text. Total: malformed input yields an error
/// expression instead of failing.
///
/// Classification by the first character, in order:
/// - empty input is an empty cell
/// - `'` marks text; the remainder is kept verbatim
/// - `=` marks a formula to tokenize
/// - anything else must be a bare integer literal
pub fn parse_expression(raw: &str) -> Expression {
    if raw.is_empty() {
        return Expression::default();
    }

    let parsed = if let Some(text) = raw.strip_prefix('\'') {
        Ok(Expression::new(
            ExpressionKind::Text,
            vec![Lexeme::Text(text.to_string())],
        ))
    } else if let Some(formula) = raw.strip_prefix('=') {
        tokenize_formula(formula)
    } else {
        parse_number(raw)
            .map(|number| Expression::new(ExpressionKind::Arithmetic, vec![Lexeme::Number(number)]))
    };

    match parsed {
        Ok(expression) => expression,
        Err(error) => Expression::error(&error.to_string()),
    }
}

/// The pending token kind of an alphanumeric run, decided by the run's
/// first character.
#[derive(Clone, Copy)]
enum RunKind {
    Number,
    Reference,
}

fn flush_run(kind: RunKind, run: &str) -> Result<Lexeme, ExprError> {
    match kind {
        RunKind::Number => Ok(Lexeme::Number(parse_number(run)?)),
        RunKind::Reference => Ok(Lexeme::CellReference(parse_coordinate(run)?)),
    }
}

/// Tokenize the body of an `=` formula.
///
/// Contiguous ASCII-alphanumeric runs become operands (a run starting with
/// a digit must be a number, one starting with a letter must be a cell
/// reference); every other character must be a single-character operator.
/// Operand/operator alternation is not checked here, that happens at
/// evaluation time.
fn tokenize_formula(formula: &str) -> Result<Expression, ExprError> {
    let mut lexemes = Vec::new();
    let mut run = String::new();
    let mut run_kind = RunKind::Number;

    for character in formula.chars() {
        if character.is_ascii_alphanumeric() {
            if run.is_empty() {
                run_kind = if character.is_ascii_digit() {
                    RunKind::Number
                } else {
                    RunKind::Reference
                };
            }
            run.push(character);
        } else {
            if !run.is_empty() {
                lexemes.push(flush_run(run_kind, &run)?);
                run.clear();
            }
            lexemes.push(Lexeme::Operation(parse_operation(character)?));
        }
    }
    if !run.is_empty() {
        lexemes.push(flush_run(run_kind, &run)?);
    }

    Ok(Expression::new(ExpressionKind::Arithmetic, lexemes))
}
