//! Error types for gridcalc core.

use thiserror::Error;

/// Errors that abort the whole run. Everything cell-scoped is rendered
/// into the offending cell by the engine instead of surfacing here.
#[derive(Error, Debug)]
pub enum GridcalcError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("First input line should contain two integers: table height and width")]
    MissingDimensions,

    #[error("Table height and width should be positive integers")]
    NegativeDimensions,
}

pub type Result<T> = std::result::Result<T, GridcalcError>;
