//! Cell-scoped failure messages.
//!
//! Every variant here is contained to a single cell: the parser and the
//! evaluator both convert it into an error expression whose display text
//! is `#` followed by the message. Nothing in this enum aborts the run.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExprError {
    #[error("'{0}' is not a non-negative integer number")]
    NotANumber(String),

    #[error("Coordinate '{0}' is ill-formed")]
    IllFormedCoordinate(String),

    #[error("Operation '{0}' is unknown")]
    UnknownOperation(char),

    #[error("Division by 0")]
    DivisionByZero,

    #[error("Operation in wrong place")]
    MisplacedOperation,

    #[error("Empty expression")]
    EmptyExpression,

    #[error("Excess operation at end")]
    TrailingOperation,

    #[error("Error in referred cell")]
    ErrorInReferredCell,

    #[error("Not a number in referred cell")]
    ReferredCellNotANumber,

    #[error("Infinite cycle in references")]
    ReferenceCycle,

    #[error("Coordinates ({row}, {column}) are out of range ({height}, {width})")]
    OutOfRange {
        row: usize,
        column: usize,
        height: usize,
        width: usize,
    },
}
