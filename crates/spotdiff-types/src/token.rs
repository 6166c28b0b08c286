//! Tokens and the per-line / per-document containers that hold them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The class a token was matched as.
///
/// Classes are listed in matching priority: a run of whitespace wins over
/// everything, then a run of letters, then a number with its trailing
/// grouping characters, then any single remaining character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Whitespace,
    Word,
    Number,
    Other,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Whitespace => "whitespace",
            TokenKind::Word => "word",
            TokenKind::Number => "number",
            TokenKind::Other => "other",
        };
        f.write_str(name)
    }
}

/// A maximal substring of a line belonging to one [`TokenKind`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
}

impl Token {
    pub fn new(text: impl Into<String>, kind: TokenKind) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }

    /// Whitespace tokens are never highlighted as changes.
    pub fn is_whitespace(&self) -> bool {
        self.kind == TokenKind::Whitespace
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// The ordered tokens of a single line.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineTokens(Vec<Token>);

impl LineTokens {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Token> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.0.iter()
    }

    /// Concatenate the token texts back into the line they came from.
    pub fn reconstruct(&self) -> String {
        self.0.iter().map(Token::as_str).collect()
    }
}

impl From<Vec<Token>> for LineTokens {
    fn from(tokens: Vec<Token>) -> Self {
        Self(tokens)
    }
}

impl FromIterator<Token> for LineTokens {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a LineTokens {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Token sequences for every line of a document, indexed by 0-based line number.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMatrix {
    pub lines: Vec<LineTokens>,
}

impl TokenMatrix {
    /// Number of lines (including empty ones).
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, index: usize) -> Option<&LineTokens> {
        self.lines.get(index)
    }

    /// Total token count across all lines.
    pub fn token_count(&self) -> usize {
        self.lines.iter().map(LineTokens::len).sum()
    }
}

impl FromIterator<LineTokens> for TokenMatrix {
    fn from_iter<I: IntoIterator<Item = LineTokens>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().collect(),
        }
    }
}
