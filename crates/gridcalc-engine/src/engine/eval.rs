//! Dependency-driven evaluation of arithmetic cells.
//!
//! One pass over the grid resolves every arithmetic cell to a single
//! number or an error expression, following cell references depth-first.
//! A single visited set shared by the whole pass doubles as the cycle
//! detector: a cell is marked visited before its references are walked,
//! and it keeps its unresolved multi-lexeme expression until its own
//! evaluation completes, so a reference back into the active chain reads
//! an uncollapsed expression and fails the single-number check.

use std::collections::HashSet;

use super::coordinate::Coordinate;
use super::error::ExprError;
use super::expression::{Expression, ExpressionKind};
use super::grid::Grid;
use super::lexeme::{Lexeme, Operation};

/// Resolve every arithmetic cell of the grid in place.
///
/// Total: all failures become per-cell error expressions. Cells of other
/// kinds are left untouched, and a cell transitions at most once.
pub fn evaluate_grid(grid: &mut Grid<Expression>) {
    let mut visited: HashSet<Coordinate> = HashSet::new();

    let arithmetic_cells: Vec<Coordinate> = grid
        .iter()
        .filter(|(_, expression)| expression.kind == ExpressionKind::Arithmetic)
        .map(|(coordinate, _)| coordinate)
        .collect();

    for coordinate in arithmetic_cells {
        if !visited.contains(&coordinate) {
            evaluate_cell(grid, &mut visited, coordinate);
        }
    }
}

/// One step of the depth-first walk: resolve the cell at `coordinate` and
/// replace its expression with the outcome.
fn evaluate_cell(
    grid: &mut Grid<Expression>,
    visited: &mut HashSet<Coordinate>,
    coordinate: Coordinate,
) {
    // Invariant: visited is marked before any recursive work, and the
    // cell's expression is replaced only after its resolution finishes.
    visited.insert(coordinate);

    let replacement = match fold_lexemes(grid, visited, coordinate) {
        Ok(value) => Expression::number(value),
        Err(error) => Expression::error(&error.to_string()),
    };
    grid.insert(coordinate, replacement);
}

/// Left-fold the cell's lexemes, enforcing strict operand/operator
/// alternation and resolving operands as they are encountered.
fn fold_lexemes(
    grid: &mut Grid<Expression>,
    visited: &mut HashSet<Coordinate>,
    coordinate: Coordinate,
) -> Result<i64, ExprError> {
    let lexemes = grid.get(coordinate).lexemes.clone();

    let mut accumulator: Option<i64> = None;
    let mut pending: Option<Operation> = None;

    for lexeme in &lexemes {
        if let Lexeme::Operation(operation) = lexeme {
            if accumulator.is_none() || pending.is_some() {
                return Err(ExprError::MisplacedOperation);
            }
            pending = Some(*operation);
            continue;
        }

        let value = resolve_operand(grid, visited, lexeme)?;
        accumulator = Some(match (accumulator, pending.take()) {
            (Some(left), Some(operation)) => operation.apply(left, value)?,
            (None, None) => value,
            _ => return Err(ExprError::MisplacedOperation),
        });
    }

    if pending.is_some() {
        return Err(ExprError::TrailingOperation);
    }
    accumulator.ok_or(ExprError::EmptyExpression)
}

/// Resolve one operand lexeme to its integer value, first following a
/// cell reference depth-first if its target is still unresolved.
fn resolve_operand(
    grid: &mut Grid<Expression>,
    visited: &mut HashSet<Coordinate>,
    lexeme: &Lexeme,
) -> Result<i64, ExprError> {
    let target = match lexeme {
        Lexeme::Number(value) => return Ok(*value),
        Lexeme::CellReference(target) => *target,
        _ => return Err(ExprError::MisplacedOperation),
    };

    // The notation admits coordinates up to z9; the declared grid may be
    // smaller.
    if !grid.in_bounds(target) {
        return Err(ExprError::OutOfRange {
            row: target.row,
            column: target.column,
            height: grid.height(),
            width: grid.width(),
        });
    }

    if !visited.contains(&target) && grid.get(target).kind == ExpressionKind::Arithmetic {
        evaluate_cell(grid, visited, target);
    }
    referred_value(grid.get(target))
}

/// Require the referred cell to have collapsed to a single number.
fn referred_value(expression: &Expression) -> Result<i64, ExprError> {
    match expression.kind {
        ExpressionKind::Error => Err(ExprError::ErrorInReferredCell),
        ExpressionKind::Arithmetic => expression.resolved_number().ok_or(ExprError::ReferenceCycle),
        _ => Err(ExprError::ReferredCellNotANumber),
    }
}
