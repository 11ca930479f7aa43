//! Reader for the tab/newline-delimited table format.
//!
//! The first two whitespace-separated integers give the table height and
//! width; the following lines hold one tab-separated row each. Short
//! input is tolerated with warnings so a truncated table still computes;
//! only a malformed or negative dimension header is fatal.

use std::io::Read;

use gridcalc_engine::engine::{Coordinate, Grid};

use crate::error::{GridcalcError, Result};

/// Read a raw text table. Absent and empty cells stay absent in the
/// returned grid.
pub fn read_table<R: Read>(mut input: R) -> Result<Grid<String>> {
    let mut content = String::new();
    input.read_to_string(&mut content)?;
    read_table_content(&content)
}

/// Read a raw text table from an in-memory string.
pub fn read_table_content(content: &str) -> Result<Grid<String>> {
    let mut rest = content;
    let height = scan_dimension(&mut rest)?;
    let width = scan_dimension(&mut rest)?;

    if height < 0 || width < 0 {
        return Err(GridcalcError::NegativeDimensions);
    }
    if height == 0 || width == 0 {
        tracing::warn!("Table height or width is 0, do nothing");
        return Ok(Grid::new(0, 0));
    }
    let (height, width) = (height as usize, width as usize);

    let mut grid = Grid::new(height, width);

    let Some((dimension_line_rest, body)) = split_line(rest) else {
        tracing::warn!("Table has 0 rows instead of {height}");
        return Ok(grid);
    };
    if !dimension_line_rest.is_empty() {
        tracing::warn!("Excess information in first line, ignore it");
    }

    let mut lines = body.lines();
    for row in 0..height {
        let raw_row = match lines.next() {
            Some(line) => line,
            None => {
                // A missing last row is tolerated silently.
                if row + 1 < height {
                    tracing::warn!("Table has {} rows instead of {height}", row + 1);
                    break;
                }
                ""
            }
        };

        let mut cells: Vec<&str> = raw_row.split('\t').collect();
        // A trailing tab does not open one more cell.
        if cells.last() == Some(&"") {
            cells.pop();
        }

        for column in 0..width {
            match cells.get(column) {
                Some(cell) => {
                    if !cell.is_empty() {
                        grid.insert(Coordinate::new(row, column), (*cell).to_string());
                    }
                }
                None => {
                    // As with rows, a missing last cell is tolerated silently.
                    if column + 1 < width {
                        tracing::warn!(
                            "Row {} has {} cells instead of {width}",
                            row + 1,
                            column + 1,
                        );
                    }
                    break;
                }
            }
        }
    }

    Ok(grid)
}

/// Scan the next whitespace-separated integer, consuming it from `input`.
/// Whitespace here includes line breaks, so the two dimensions may span
/// lines.
fn scan_dimension(input: &mut &str) -> Result<i64> {
    let rest = input.trim_start();
    let after_sign = rest.strip_prefix(['+', '-']).unwrap_or(rest);
    let digit_count = after_sign.len()
        - after_sign
            .trim_start_matches(|character: char| character.is_ascii_digit())
            .len();
    if digit_count == 0 {
        return Err(GridcalcError::MissingDimensions);
    }

    let token_length = rest.len() - after_sign.len() + digit_count;
    let (token, remainder) = rest.split_at(token_length);
    let value = token
        .parse::<i64>()
        .map_err(|_| GridcalcError::MissingDimensions)?;
    *input = remainder;
    Ok(value)
}

/// Split off the remainder of the current line (CRLF tolerated). `None`
/// only at end of input.
fn split_line(input: &str) -> Option<(&str, &str)> {
    if input.is_empty() {
        return None;
    }
    match input.find('\n') {
        Some(position) => {
            let line = &input[..position];
            Some((line.strip_suffix('\r').unwrap_or(line), &input[position + 1..]))
        }
        None => Some((input.strip_suffix('\r').unwrap_or(input), "")),
    }
}
