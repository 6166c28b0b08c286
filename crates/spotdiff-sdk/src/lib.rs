//! Review sessions for spotdiff.
//!
//! Wraps the positional comparator with what an application around it
//! needs: size-checked document intake, a memoized comparison that is
//! recomputed when a document changes, tracking of which differing lines
//! the reviewer has found, a minimum review time, and an end-of-review
//! summary listing the lines that were missed.

pub mod config;
pub mod error;
pub mod session;
pub mod summary;

pub use config::SessionConfig;
pub use error::{SdkError, SdkResult};
pub use session::{ReviewSession, RevealOutcome, Side};
pub use summary::{format_elapsed, MissedLine, ReviewSummary};

// Re-export key types
pub use spotdiff_diff::{tokenize, tokenize_document, Comparison, DiffReport, LineDiff};
pub use spotdiff_types::{Document, DocumentId, LineTokens, Token, TokenKind, TokenMatrix};
