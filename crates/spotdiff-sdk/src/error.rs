use thiserror::Error;

use crate::session::Side;

#[derive(Debug, Error)]
pub enum SdkError {
    #[error("document {side} is {bytes} bytes, limit is {limit}")]
    DocumentTooLarge {
        side: Side,
        bytes: usize,
        limit: usize,
    },

    #[error("document {side} has {lines} lines, limit is {limit}")]
    TooManyLines {
        side: Side,
        lines: usize,
        limit: usize,
    },

    #[error("review cannot finish yet: {elapsed_ms} ms elapsed, {required_ms} ms required")]
    TooEarly { elapsed_ms: u64, required_ms: u64 },

    #[error("invalid document: {0}")]
    InvalidDocument(#[from] spotdiff_types::TypeError),

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SdkResult<T> = Result<T, SdkError>;
