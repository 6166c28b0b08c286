//! Review session state around a comparison.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use spotdiff_diff::{Comparison, DiffCache, LineDiff};
use spotdiff_types::{Document, Token};
use tracing::{debug, info};

use crate::config::SessionConfig;
use crate::error::{SdkError, SdkResult};
use crate::summary::{MissedLine, ReviewSummary};

/// Which of the two compared documents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    A,
    B,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::A => f.write_str("A"),
            Side::B => f.write_str("B"),
        }
    }
}

/// Result of asking to reveal a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// The line differs and is now revealed.
    Revealed,
    /// The line differs and was already revealed.
    AlreadyRevealed,
    /// The line is identical on both sides; nothing changed.
    NotADifference,
}

/// A reviewer's pass over two documents.
///
/// The comparison is derived from the two documents through a [`DiffCache`]
/// and is only recomputed when one of them is replaced.
pub struct ReviewSession {
    config: SessionConfig,
    doc_a: Document,
    doc_b: Document,
    cache: DiffCache,
    comparison: Arc<Comparison>,
    revealed: BTreeSet<usize>,
    started: Instant,
}

impl ReviewSession {
    /// Start a session over two raw texts, split on `'\n'`.
    pub fn new(config: SessionConfig, text_a: &str, text_b: &str) -> SdkResult<Self> {
        let doc_a = intake(&config, Side::A, text_a)?;
        let doc_b = intake(&config, Side::B, text_b)?;
        Self::from_documents(config, doc_a, doc_b)
    }

    /// Start a session over documents that were already split into lines.
    pub fn from_documents(
        config: SessionConfig,
        doc_a: Document,
        doc_b: Document,
    ) -> SdkResult<Self> {
        check_limits(&config, Side::A, &doc_a)?;
        check_limits(&config, Side::B, &doc_b)?;

        let mut cache = DiffCache::new();
        let comparison = cache.get_or_compute(&doc_a, &doc_b);
        info!(
            a = %doc_a.id().short_hex(),
            b = %doc_b.id().short_hex(),
            total_diffs = comparison.total_diffs(),
            "review session started"
        );

        Ok(Self {
            config,
            doc_a,
            doc_b,
            cache,
            comparison,
            revealed: BTreeSet::new(),
            started: Instant::now(),
        })
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn document(&self, side: Side) -> &Document {
        match side {
            Side::A => &self.doc_a,
            Side::B => &self.doc_b,
        }
    }

    pub fn comparison(&self) -> &Comparison {
        &self.comparison
    }

    /// Replace one document with new text.
    ///
    /// When the content actually changes the comparison is recomputed and
    /// all reveals are cleared, since line indices may now mean something else.
    pub fn replace_document(&mut self, side: Side, text: &str) -> SdkResult<()> {
        let doc = intake(&self.config, side, text)?;
        if doc.id() == self.document(side).id() {
            return Ok(());
        }
        match side {
            Side::A => self.doc_a = doc,
            Side::B => self.doc_b = doc,
        }
        self.comparison = self.cache.get_or_compute(&self.doc_a, &self.doc_b);
        self.revealed.clear();
        debug!(%side, total_diffs = self.comparison.total_diffs(), "document replaced");
        Ok(())
    }

    /// Clear reveals and restart the clock at `now`.
    pub fn restart_at(&mut self, now: Instant) {
        self.revealed.clear();
        self.started = now;
    }

    pub fn restart(&mut self) {
        self.restart_at(Instant::now());
    }

    /// Reveal a 0-based line. Lines that do not differ are ignored.
    pub fn reveal(&mut self, line: usize) -> RevealOutcome {
        if !self.comparison.report.contains(line) {
            return RevealOutcome::NotADifference;
        }
        if !self.revealed.insert(line) {
            return RevealOutcome::AlreadyRevealed;
        }
        debug!(line, found = self.revealed.len(), "line revealed");
        RevealOutcome::Revealed
    }

    pub fn is_revealed(&self, line: usize) -> bool {
        self.revealed.contains(&line)
    }

    pub fn found_count(&self) -> usize {
        self.revealed.len()
    }

    pub fn total_diffs(&self) -> usize {
        self.comparison.total_diffs()
    }

    /// Tokens of one side's line, each paired with whether it is shown highlighted.
    ///
    /// Tokens are highlighted only on revealed lines, and only where the
    /// line's mask for that side is set. Returns `None` past the end of the
    /// document.
    pub fn highlight(&self, side: Side, line: usize) -> Option<Vec<(&Token, bool)>> {
        let tokens = match side {
            Side::A => self.comparison.tokens_a.line(line)?,
            Side::B => self.comparison.tokens_b.line(line)?,
        };
        let mask = self
            .comparison
            .report
            .get(line)
            .filter(|_| self.is_revealed(line))
            .map(|diff| side_mask(diff, side));

        Some(
            tokens
                .iter()
                .enumerate()
                .map(|(i, token)| {
                    let on = mask.is_some_and(|m| m.get(i).copied().unwrap_or(false));
                    (token, on)
                })
                .collect(),
        )
    }

    /// When the review clock started.
    pub fn started(&self) -> Instant {
        self.started
    }

    pub fn elapsed_at(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started)
    }

    pub fn can_finish_at(&self, now: Instant) -> bool {
        self.elapsed_at(now) >= self.config.min_review()
    }

    pub fn can_finish(&self) -> bool {
        self.can_finish_at(Instant::now())
    }

    /// Summarize the review as of `now` without checking the minimum time.
    pub fn summary_at(&self, now: Instant) -> ReviewSummary {
        let missed = self
            .comparison
            .report
            .line_indices()
            .filter(|line| !self.revealed.contains(line))
            .map(|line| MissedLine {
                line,
                text: self
                    .doc_b
                    .line(line)
                    .or_else(|| self.doc_a.line(line))
                    .unwrap_or_default()
                    .to_owned(),
            })
            .collect();

        ReviewSummary {
            found: self.found_count(),
            total: self.total_diffs(),
            elapsed_ms: u64::try_from(self.elapsed_at(now).as_millis()).unwrap_or(u64::MAX),
            missed,
        }
    }

    /// Finish the review, provided the minimum review time has passed.
    pub fn finish_at(&self, now: Instant) -> SdkResult<ReviewSummary> {
        if !self.can_finish_at(now) {
            let elapsed = self.elapsed_at(now);
            return Err(SdkError::TooEarly {
                elapsed_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
                required_ms: self.config.min_review_ms,
            });
        }
        let summary = self.summary_at(now);
        info!(
            found = summary.found,
            total = summary.total,
            missed = summary.missed.len(),
            "review finished"
        );
        Ok(summary)
    }

    pub fn finish(&self) -> SdkResult<ReviewSummary> {
        self.finish_at(Instant::now())
    }
}

fn side_mask(diff: &LineDiff, side: Side) -> &[bool] {
    match side {
        Side::A => &diff.mask_a,
        Side::B => &diff.mask_b,
    }
}

fn intake(config: &SessionConfig, side: Side, text: &str) -> SdkResult<Document> {
    if text.len() > config.max_document_bytes {
        return Err(SdkError::DocumentTooLarge {
            side,
            bytes: text.len(),
            limit: config.max_document_bytes,
        });
    }
    let doc = Document::from_text(text);
    check_limits(config, side, &doc)?;
    Ok(doc)
}

fn check_limits(config: &SessionConfig, side: Side, doc: &Document) -> SdkResult<()> {
    let bytes = doc.byte_len();
    if bytes > config.max_document_bytes {
        return Err(SdkError::DocumentTooLarge {
            side,
            bytes,
            limit: config.max_document_bytes,
        });
    }
    if doc.len() > config.max_lines {
        return Err(SdkError::TooManyLines {
            side,
            lines: doc.len(),
            limit: config.max_lines,
        });
    }
    Ok(())
}
