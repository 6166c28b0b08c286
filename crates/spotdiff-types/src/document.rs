//! Documents and their content-addressed identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

/// Domain tag mixed into every document hash.
const DOCUMENT_DOMAIN: &str = "spotdiff-document-v1";

/// Content-addressed identifier for a [`Document`].
///
/// A `DocumentId` is the domain-separated BLAKE3 hash of a document's lines.
/// Two documents with identical lines always share an id, which makes the
/// id usable as a memoization key for comparisons.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DocumentId([u8; 32]);

impl DocumentId {
    /// Hash a sequence of lines.
    ///
    /// The line count is hashed ahead of the content so that a document with
    /// no lines and a document with one empty line get distinct ids.
    pub fn of_lines<S: AsRef<str>>(lines: &[S]) -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(DOCUMENT_DOMAIN.as_bytes());
        hasher.update(b":");
        hasher.update(&(lines.len() as u64).to_le_bytes());
        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                hasher.update(b"\n");
            }
            hasher.update(line.as_ref().as_bytes());
        }
        Self(*hasher.finalize().as_bytes())
    }

    /// Hex-encoded string representation.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Short hex representation (first 8 characters).
    pub fn short_hex(&self) -> String {
        hex::encode(&self.0[..4])
    }
}

impl fmt::Debug for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DocumentId({})", self.short_hex())
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// An immutable, ordered sequence of lines.
///
/// Lines never contain `'\n'`; splitting raw text happens once, on intake.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Document {
    id: DocumentId,
    lines: Vec<String>,
}

impl Document {
    /// Split raw text on `'\n'`.
    ///
    /// Every separator produces a boundary, so a trailing newline yields a
    /// trailing empty line and the empty string yields a single empty line.
    /// A `'\r'` before the separator stays part of the line.
    pub fn from_text(text: &str) -> Self {
        let lines: Vec<String> = text.split('\n').map(str::to_owned).collect();
        Self {
            id: DocumentId::of_lines(&lines),
            lines,
        }
    }

    /// Build a document from lines that were already split.
    pub fn from_lines<I, S>(lines: I) -> Result<Self, TypeError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        if let Some(line) = lines.iter().position(|l| l.contains('\n')) {
            return Err(TypeError::EmbeddedLineBreak { line });
        }
        Ok(Self {
            id: DocumentId::of_lines(&lines),
            lines,
        })
    }

    pub fn id(&self) -> DocumentId {
        self.id
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total size of the line content in bytes, separators included.
    pub fn byte_len(&self) -> usize {
        let content: usize = self.lines.iter().map(String::len).sum();
        content + self.lines.len().saturating_sub(1)
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("id", &self.id)
            .field("lines", &self.lines.len())
            .finish()
    }
}

impl TryFrom<Vec<String>> for Document {
    type Error = TypeError;

    fn try_from(lines: Vec<String>) -> Result<Self, Self::Error> {
        Self::from_lines(lines)
    }
}

impl From<Document> for Vec<String> {
    fn from(doc: Document) -> Self {
        doc.lines
    }
}
