//! Positional token diff for spotdiff.
//!
//! Splits each line of two documents into tokens and compares the lines
//! index-for-index, producing per-token masks that mark what changed.
//! Whitespace is never marked.
//!
//! # Key Types
//!
//! - [`tokenize`] / [`tokenize_document`] -- Unicode-aware line tokenizer
//! - [`diff_lines`] / [`LineDiff`] / [`DiffReport`] -- Per-line change masks
//! - [`Comparison`] / [`compare`] -- Token matrices plus report for a document pair
//! - [`DiffCache`] -- Memoized comparison keyed on document content ids

pub mod cache;
pub mod comparison;
pub mod line_diff;
pub mod tokenizer;

pub use cache::DiffCache;
pub use comparison::{compare, Comparison};
pub use line_diff::{diff_line, diff_lines, DiffReport, LineDiff};
pub use tokenizer::{tokenize, tokenize_document};
