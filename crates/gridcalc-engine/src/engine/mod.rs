//! Table formula engine API.
//!
//! This module provides the core computation engine for the table:
//!
//! - [`Coordinate`] - Cell positions and the 2-character text notation
//! - [`Grid`] - Sparse fixed-dimension cell storage
//! - [`Lexeme`], [`Operation`] - Formula tokens
//! - [`Expression`], [`ExpressionKind`] - Parsed cell contents
//! - [`parse_expression`] - Raw cell text to expression
//! - [`evaluate_grid`] - Cycle-aware reference resolution

mod coordinate;
mod error;
mod eval;
mod expression;
mod grid;
mod lexeme;
mod parser;

pub use coordinate::{Coordinate, parse_coordinate};
pub use error::ExprError;
pub use eval::evaluate_grid;
pub use expression::{Expression, ExpressionKind};
pub use grid::Grid;
pub use lexeme::{Lexeme, Operation, parse_number, parse_operation};
pub use parser::parse_expression;
