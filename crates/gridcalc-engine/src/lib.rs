//! gridcalc_engine - table formula parsing and evaluation.

pub mod engine;
