//! Writer for the tab/newline-delimited table format.

use std::io::Write;

use gridcalc_engine::engine::Grid;

use crate::error::Result;

/// Write every row of the display table: cells separated by tabs, one
/// newline per row (including the last). Absent cells print as empty.
pub fn write_table<W: Write>(grid: &Grid<String>, mut output: W) -> Result<()> {
    for row in grid.flatten_rows() {
        let last_column = row.len().saturating_sub(1);
        for (column, cell) in row.into_iter().enumerate() {
            let terminator = if column == last_column { '\n' } else { '\t' };
            write!(output, "{cell}{terminator}")?;
        }
    }
    Ok(())
}

/// Write a table to an in-memory string.
pub fn write_table_content(grid: &Grid<String>) -> String {
    let mut buffer = Vec::new();
    write_table(grid, &mut buffer).expect("writing to a Vec cannot fail");
    String::from_utf8(buffer).expect("display strings are valid UTF-8")
}
