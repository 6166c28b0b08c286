//! A complete comparison of two documents.

use serde::Serialize;
use spotdiff_types::{Document, DocumentId, TokenMatrix};

use crate::line_diff::{diff_lines, DiffReport};
use crate::tokenizer::tokenize_document;

/// Token matrices for both documents together with their diff report.
///
/// Renderers need the tokens as well as the masks, so they travel together.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Comparison {
    pub id_a: DocumentId,
    pub id_b: DocumentId,
    pub tokens_a: TokenMatrix,
    pub tokens_b: TokenMatrix,
    pub report: DiffReport,
}

impl Comparison {
    pub fn total_diffs(&self) -> usize {
        self.report.total_diffs()
    }

    /// Whether this comparison was computed from exactly these two documents.
    pub fn matches(&self, a: &Document, b: &Document) -> bool {
        self.id_a == a.id() && self.id_b == b.id()
    }
}

/// Tokenize both documents and diff them.
pub fn compare(a: &Document, b: &Document) -> Comparison {
    let tokens_a = tokenize_document(a);
    let tokens_b = tokenize_document(b);
    let report = diff_lines(&tokens_a, &tokens_b);
    Comparison {
        id_a: a.id(),
        id_b: b.id(),
        tokens_a,
        tokens_b,
        report,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compare_carries_ids_and_tokens() {
        let a = Document::from_text("Стоимость 5 000 000 тенге.");
        let b = Document::from_text("Стоимость 5 000 000 тенге без учета НДС.");
        let cmp = compare(&a, &b);

        assert!(cmp.matches(&a, &b));
        assert!(!cmp.matches(&b, &a));
        assert_eq!(cmp.tokens_a.len(), 1);
        assert_eq!(cmp.total_diffs(), 1);
        assert_eq!(cmp.tokens_b.line(0).unwrap().reconstruct(), b.line(0).unwrap());
    }

    #[test]
    fn compare_is_pure() {
        let a = Document::from_text("one\ntwo");
        let b = Document::from_text("one\nthree");
        assert_eq!(compare(&a, &b), compare(&a, &b));
    }
}
