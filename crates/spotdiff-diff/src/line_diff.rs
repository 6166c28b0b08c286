//! Positional line diff.
//!
//! Lines are paired by index and, within a line, tokens are paired by
//! index. There is no alignment step: inserting one token early in a line
//! shifts every later token and marks all of them as changed.

use serde::{Deserialize, Serialize};
use spotdiff_types::{LineTokens, Token, TokenMatrix};
use tracing::{debug, trace};

/// Change masks for one line that differs between the two documents.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineDiff {
    /// 0-based line index.
    pub line: usize,
    /// `mask_a[i]` is true iff token `i` of document A's line is highlighted.
    pub mask_a: Vec<bool>,
    /// `mask_b[i]` is true iff token `i` of document B's line is highlighted.
    pub mask_b: Vec<bool>,
}

impl LineDiff {
    /// Token positions highlighted on side A.
    pub fn changed_a(&self) -> impl Iterator<Item = usize> + '_ {
        marked(&self.mask_a)
    }

    /// Token positions highlighted on side B.
    pub fn changed_b(&self) -> impl Iterator<Item = usize> + '_ {
        marked(&self.mask_b)
    }

    /// False when the line only differs in whitespace.
    pub fn has_highlights(&self) -> bool {
        self.mask_a.iter().chain(&self.mask_b).any(|m| *m)
    }
}

fn marked(mask: &[bool]) -> impl Iterator<Item = usize> + '_ {
    mask.iter().enumerate().filter_map(|(i, m)| m.then_some(i))
}

/// The differing lines of a comparison, in ascending line order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffReport {
    pub lines: Vec<LineDiff>,
}

impl DiffReport {
    /// Returns `true` if no line differs.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct differing lines.
    pub fn total_diffs(&self) -> usize {
        self.lines.len()
    }

    /// Look up the masks for a line.
    pub fn get(&self, line: usize) -> Option<&LineDiff> {
        self.lines
            .binary_search_by_key(&line, |d| d.line)
            .ok()
            .map(|i| &self.lines[i])
    }

    pub fn contains(&self, line: usize) -> bool {
        self.get(line).is_some()
    }

    pub fn line_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.lines.iter().map(|d| d.line)
    }
}

/// Compare one pair of lines position by position.
///
/// Returns `None` when every position holds the same token on both sides.
/// A position differs when the token texts differ or when only one side
/// has a token there. A differing position is marked on a side only if that
/// side has a token and it is not whitespace.
pub fn diff_line(line: usize, a: &LineTokens, b: &LineTokens) -> Option<LineDiff> {
    let len = a.len().max(b.len());
    let mut mask_a = vec![false; len];
    let mut mask_b = vec![false; len];
    let mut differs = false;

    for i in 0..len {
        let ta = a.get(i);
        let tb = b.get(i);
        if ta.map(Token::as_str) == tb.map(Token::as_str) {
            continue;
        }
        differs = true;
        mask_a[i] = ta.is_some_and(|t| !t.is_whitespace());
        mask_b[i] = tb.is_some_and(|t| !t.is_whitespace());
    }

    differs.then_some(LineDiff {
        line,
        mask_a,
        mask_b,
    })
}

/// Compare two token matrices line by line.
///
/// Every index below the longer matrix's length is inspected; a line
/// missing from one side compares as an empty line.
pub fn diff_lines(a: &TokenMatrix, b: &TokenMatrix) -> DiffReport {
    let empty = LineTokens::new();
    let rows = a.len().max(b.len());

    let lines: Vec<LineDiff> = (0..rows)
        .filter_map(|r| {
            let la = a.line(r).unwrap_or(&empty);
            let lb = b.line(r).unwrap_or(&empty);
            let diff = diff_line(r, la, lb)?;
            trace!(
                line = r,
                changed_a = diff.changed_a().count(),
                changed_b = diff.changed_b().count(),
                "line differs"
            );
            Some(diff)
        })
        .collect();

    debug!(
        lines_a = a.len(),
        lines_b = b.len(),
        differing = lines.len(),
        "compared token matrices"
    );
    DiffReport { lines }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::{tokenize, tokenize_document};
    use proptest::prelude::*;
    use spotdiff_types::Document;

    fn matrix(text: &str) -> TokenMatrix {
        tokenize_document(&Document::from_text(text))
    }

    fn highlighted(line: &str, mask: &[bool]) -> Vec<String> {
        tokenize(line)
            .iter()
            .zip(mask)
            .filter(|(_, m)| **m)
            .map(|(t, _)| t.text.clone())
            .collect()
    }

    #[test]
    fn identical_documents_have_no_diffs() {
        let text = "ДОГОВОР № 15/2025\n\nг. Алматы, 01 сентября 2025 г.";
        let report = diff_lines(&matrix(text), &matrix(text));
        assert!(report.is_empty());
        assert_eq!(report.total_diffs(), 0);
    }

    #[test]
    fn changed_date_is_the_only_highlight() {
        let a = "Срок оказания услуг — с 01.09.2025 по 30.09.2025.";
        let b = "Срок оказания услуг — с 02.09.2025 по 30.09.2025.";
        let report = diff_lines(&matrix(a), &matrix(b));

        assert_eq!(report.total_diffs(), 1);
        let diff = report.get(0).unwrap();
        assert_eq!(highlighted(a, &diff.mask_a), vec!["01.09.2025"]);
        assert_eq!(highlighted(b, &diff.mask_b), vec!["02.09.2025"]);
    }

    #[test]
    fn percentage_changes_as_one_token() {
        let a = "...в размере 0,1% за каждый день.";
        let b = "...в размере 0,2% за каждый день.";
        let report = diff_lines(&matrix(a), &matrix(b));

        let diff = report.get(0).unwrap();
        assert_eq!(highlighted(a, &diff.mask_a), vec!["0,1%"]);
        assert_eq!(highlighted(b, &diff.mask_b), vec!["0,2%"]);
    }

    #[test]
    fn whitespace_only_change_marks_nothing() {
        let report = diff_lines(&matrix("a  b"), &matrix("a b"));
        assert!(report.lines.iter().all(|d| !d.has_highlights()));
        // The line is still counted as differing.
        assert_eq!(report.total_diffs(), 1);
    }

    #[test]
    fn insertion_shifts_every_later_position() {
        let report = diff_lines(&matrix("x y z"), &matrix("w x y z"));
        let diff = report.get(0).unwrap();
        // a: x _ y _ z      b: w _ x _ y _ z
        assert_eq!(diff.mask_a, vec![true, false, true, false, true, false, false]);
        assert_eq!(diff.mask_b, vec![true, false, true, false, true, false, true]);
    }

    #[test]
    fn appended_clause_marks_only_the_longer_side() {
        let a = "compliance.";
        let b = "compliance и аудита.";
        let diff = diff_line(0, &tokenize(a), &tokenize(b)).unwrap();
        assert_eq!(diff.mask_a.len(), diff.mask_b.len());
        assert_eq!(diff.mask_a, vec![false, true, false, false, false, false]);
        assert_eq!(highlighted(b, &diff.mask_b), vec!["и", "аудита", "."]);
    }

    #[test]
    fn absent_whitespace_is_never_marked() {
        let diff = diff_line(0, &tokenize("a"), &tokenize("a ")).unwrap();
        assert_eq!(diff.mask_a, vec![false, false]);
        assert_eq!(diff.mask_b, vec![false, false]);
    }

    #[test]
    fn next_line_character_is_highlighted() {
        let diff = diff_line(0, &tokenize("a\u{85}b"), &tokenize("a b")).unwrap();
        assert_eq!(diff.mask_a, vec![false, true, false]);
        assert_eq!(diff.mask_b, vec![false, false, false]);
    }

    #[test]
    fn mask_length_is_the_longer_line() {
        let diff = diff_line(3, &tokenize("one two"), &tokenize("one")).unwrap();
        assert_eq!(diff.line, 3);
        assert_eq!(diff.mask_a.len(), 3);
        assert_eq!(diff.mask_b.len(), 3);
        assert_eq!(diff.changed_a().collect::<Vec<_>>(), vec![2]);
        assert_eq!(diff.changed_b().count(), 0);
    }

    #[test]
    fn extra_lines_are_recorded() {
        let report = diff_lines(&matrix("same\nextra"), &matrix("same"));
        assert_eq!(report.line_indices().collect::<Vec<_>>(), vec![1]);
        assert_eq!(report.get(1).unwrap().mask_a, vec![true]);
    }

    #[test]
    fn missing_line_against_empty_line_is_identical() {
        let a = matrix("same\n");
        let b = matrix("same");
        assert_eq!(a.len(), 2);
        assert!(diff_lines(&a, &b).is_empty());
    }

    #[test]
    fn empty_matrices() {
        let empty = TokenMatrix::default();
        assert!(diff_lines(&empty, &empty).is_empty());
        let report = diff_lines(&empty, &matrix("x"));
        assert_eq!(report.total_diffs(), 1);
        assert_eq!(report.get(0).unwrap().mask_b, vec![true]);
    }

    #[test]
    fn report_lookup_by_line() {
        let report = diff_lines(&matrix("a\nb\nc\nd"), &matrix("a\nB\nc\nD"));
        assert!(report.contains(1));
        assert!(report.contains(3));
        assert!(!report.contains(0));
        assert!(report.get(2).is_none());
        assert!(report.get(10).is_none());
    }

    #[test]
    fn contract_scenario_counts_changed_lines() {
        let a = "г. Алматы, 01 сентября 2025 г.\n\
                 2.2. Оплата производится в течение 10 (десяти) банковских дней.\n\
                 Подписи сторон:";
        let b = "г. Алматы, 02 сентября 2025 г.\n\
                 2.2. Оплата производится в течение 15 (пятнадцати) банковских дней.\n\
                 Подписи сторон:";
        let report = diff_lines(&matrix(a), &matrix(b));
        assert_eq!(report.line_indices().collect::<Vec<_>>(), vec![0, 1]);

        let second_a = a.lines().nth(1).unwrap();
        let second_b = b.lines().nth(1).unwrap();
        let diff = report.get(1).unwrap();
        assert_eq!(highlighted(second_a, &diff.mask_a), vec!["10", "десяти"]);
        assert_eq!(highlighted(second_b, &diff.mask_b), vec!["15", "пятнадцати"]);
    }

    fn document_text() -> impl Strategy<Value = String> {
        proptest::collection::vec("[a-zа-я0-9 .,%()\\t]{0,30}", 0..8).prop_map(|l| l.join("\n"))
    }

    proptest! {
        #[test]
        fn document_against_itself_is_empty(text in document_text()) {
            let m = matrix(&text);
            prop_assert!(diff_lines(&m, &m).is_empty());
        }

        #[test]
        fn diff_is_deterministic(a in document_text(), b in document_text()) {
            let (ma, mb) = (matrix(&a), matrix(&b));
            prop_assert_eq!(diff_lines(&ma, &mb), diff_lines(&ma, &mb));
        }

        #[test]
        fn whitespace_is_never_marked(a in document_text(), b in document_text()) {
            let (ma, mb) = (matrix(&a), matrix(&b));
            for diff in diff_lines(&ma, &mb).lines {
                let empty = LineTokens::new();
                let la = ma.line(diff.line).unwrap_or(&empty);
                let lb = mb.line(diff.line).unwrap_or(&empty);
                for i in diff.changed_a() {
                    prop_assert!(!la.get(i).unwrap().is_whitespace());
                }
                for i in diff.changed_b() {
                    prop_assert!(!lb.get(i).unwrap().is_whitespace());
                }
                prop_assert_eq!(diff.mask_a.len(), la.len().max(lb.len()));
            }
        }

        #[test]
        fn swapping_sides_swaps_masks(a in document_text(), b in document_text()) {
            let (ma, mb) = (matrix(&a), matrix(&b));
            let forward = diff_lines(&ma, &mb);
            let backward = diff_lines(&mb, &ma);
            prop_assert_eq!(forward.total_diffs(), backward.total_diffs());
            for (f, r) in forward.lines.iter().zip(&backward.lines) {
                prop_assert_eq!(f.line, r.line);
                prop_assert_eq!(&f.mask_a, &r.mask_b);
                prop_assert_eq!(&f.mask_b, &r.mask_a);
            }
        }
    }
}
