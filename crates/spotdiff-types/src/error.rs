use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    /// Lines handed to a document must already be split on `'\n'`.
    #[error("line {line} contains an embedded line break")]
    EmbeddedLineBreak { line: usize },
}
