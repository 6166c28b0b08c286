//! Foundation types for spotdiff.
//!
//! This crate provides the token and document types shared by the
//! comparator and the review session. Every other spotdiff crate depends on
//! `spotdiff-types`.
//!
//! # Key Types
//!
//! - [`Token`] / [`TokenKind`] — A classified substring of one line
//! - [`LineTokens`] — The ordered tokens of one line
//! - [`TokenMatrix`] — Per-line token sequences for a whole document
//! - [`Document`] — Immutable ordered lines of text
//! - [`DocumentId`] — Content-addressed document identifier (BLAKE3 hash)

pub mod document;
pub mod error;
pub mod token;

pub use document::{Document, DocumentId};
pub use error::TypeError;
pub use token::{LineTokens, Token, TokenKind, TokenMatrix};
