//! Cell coordinates and their text notation.
//!
//! A coordinate names one cell of the grid. The text notation is exactly
//! two characters: a column letter (case-insensitive, `a` is column 0)
//! followed by a row digit `1`-`9`.
//!
//! # Examples
//!
//! ```ignore
//! let cell = parse_coordinate("b3").unwrap();
//! assert_eq!(cell.row, 2);
//! assert_eq!(cell.column, 1);
//! ```

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use super::error::ExprError;

/// A (row, column) cell position (0-indexed), ordered row-major.
#[derive(
    Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize,
)]
pub struct Coordinate {
    pub row: usize,
    pub column: usize,
}

impl Coordinate {
    pub fn new(row: usize, column: usize) -> Coordinate {
        Coordinate { row, column }
    }
}

fn coordinate_re() -> &'static Regex {
    static COORDINATE_RE: OnceLock<Regex> = OnceLock::new();
    COORDINATE_RE.get_or_init(|| {
        Regex::new(r"^(?<column>[A-Za-z])(?<row>[1-9])$")
            .expect("coordinate notation regex must compile")
    })
}

/// Parse the 2-character cell notation (`a1`, `B3`, ...).
pub fn parse_coordinate(raw: &str) -> Result<Coordinate, ExprError> {
    let caps = coordinate_re()
        .captures(raw)
        .ok_or_else(|| ExprError::IllFormedCoordinate(raw.to_string()))?;

    let column = (caps["column"].as_bytes()[0].to_ascii_lowercase() - b'a') as usize;
    let row = (caps["row"].as_bytes()[0] - b'1') as usize;

    Ok(Coordinate::new(row, column))
}
