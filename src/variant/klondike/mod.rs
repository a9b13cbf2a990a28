//! The Klondike rules: the deal builder and the move validator/executor
//! (spec.md §4.2, §4.3).

pub mod deal;
pub mod rules;

pub use deal::deal;
