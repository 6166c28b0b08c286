//! Line tokenizer.
//!
//! A line is cut into maximal tokens of four classes, tried in order at
//! each position: a whitespace run, a run of Unicode letters, an ASCII
//! number followed by any of `0-9 . , %`, and finally any single character.
//! The last class matches everything, so the tokens always cover the whole
//! line.
//!
//! Whitespace is Unicode `White_Space` plus U+FEFF and minus U+0085 (NEL),
//! the ECMAScript `\s` set.

use once_cell::sync::Lazy;
use regex::Regex;
use spotdiff_types::{Document, LineTokens, Token, TokenKind, TokenMatrix};

static TOKEN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?P<space>[[\s\x{FEFF}]--\x{85}]+)",
        r"|(?P<word>\p{L}+)",
        r"|(?P<number>[0-9][0-9.,%]*)",
        r"|(?P<other>(?s:.))",
    ))
    .unwrap()
});

/// Split one line into tokens.
///
/// The line must not contain `'\n'`; splitting is the caller's job.
pub fn tokenize(line: &str) -> LineTokens {
    TOKEN_REGEX
        .captures_iter(line)
        .filter_map(|caps| {
            let (kind, m) = if let Some(m) = caps.name("space") {
                (TokenKind::Whitespace, m)
            } else if let Some(m) = caps.name("word") {
                (TokenKind::Word, m)
            } else if let Some(m) = caps.name("number") {
                (TokenKind::Number, m)
            } else {
                (TokenKind::Other, caps.name("other")?)
            };
            Some(Token::new(m.as_str(), kind))
        })
        .collect()
}

/// Tokenize every line of a document, preserving line order.
pub fn tokenize_document(doc: &Document) -> TokenMatrix {
    doc.lines().iter().map(|line| tokenize(line)).collect()
}
