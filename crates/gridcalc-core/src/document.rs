//! Document pipeline: raw text table to computed display table.

use std::io::{Read, Write};

use gridcalc_engine::engine::{
    Expression, ExpressionKind, Grid, Lexeme, evaluate_grid, parse_expression,
};

use crate::error::Result;
use crate::storage::{read_table, write_table};

/// A table of parsed cell expressions.
pub struct Document {
    pub grid: Grid<Expression>,
}

impl Document {
    /// Read a raw text table and parse every cell.
    pub fn from_reader<R: Read>(input: R) -> Result<Document> {
        Ok(Document::from_raw_table(&read_table(input)?))
    }

    /// Parse every cell of a raw text table.
    pub fn from_raw_table(raw: &Grid<String>) -> Document {
        let mut grid = Grid::new(raw.height(), raw.width());
        for (coordinate, cell) in raw.iter() {
            grid.insert(coordinate, parse_expression(cell));
        }
        Document { grid }
    }

    /// Resolve all arithmetic cells in place.
    pub fn evaluate(&mut self) {
        evaluate_grid(&mut self.grid);
    }

    /// Project every cell to its display string. Empty cells are omitted.
    pub fn display_table(&self) -> Grid<String> {
        let mut printed = Grid::new(self.grid.height(), self.grid.width());
        for (coordinate, expression) in self.grid.iter() {
            if let Some(text) = display_cell(expression) {
                printed.insert(coordinate, text);
            }
        }
        printed
    }

    /// Serialize the current display table.
    pub fn write_to<W: Write>(&self, output: W) -> Result<()> {
        write_table(&self.display_table(), output)
    }
}

/// One cell's display text; `None` for an empty cell. Error text already
/// carries its `#` prefix.
fn display_cell(expression: &Expression) -> Option<String> {
    match expression.kind {
        ExpressionKind::None => None,
        ExpressionKind::Text | ExpressionKind::Error => match expression.lexemes.first() {
            Some(Lexeme::Text(text)) => Some(text.clone()),
            _ => Some(illegal_expression()),
        },
        ExpressionKind::Arithmetic => Some(
            expression
                .resolved_number()
                .map(|value| value.to_string())
                .unwrap_or_else(illegal_expression),
        ),
    }
}

fn illegal_expression() -> String {
    "#Illegal expression".to_string()
}
