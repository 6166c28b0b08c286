use serde::{Deserialize, Serialize};

/// Outcome of a finished review.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewSummary {
    /// Differing lines the reviewer revealed.
    pub found: usize,
    /// Differing lines in the comparison.
    pub total: usize,
    /// Review duration in milliseconds.
    pub elapsed_ms: u64,
    /// Differing lines that were never revealed, in line order.
    pub missed: Vec<MissedLine>,
}

impl ReviewSummary {
    pub fn all_found(&self) -> bool {
        self.missed.is_empty()
    }

    /// Elapsed time as `MM:SS`.
    pub fn elapsed_display(&self) -> String {
        format_elapsed(self.elapsed_ms)
    }
}

/// A differing line the reviewer did not reveal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissedLine {
    /// 0-based line index.
    pub line: usize,
    /// The line as it reads in document B, or in document A when B has no
    /// such line.
    pub text: String,
}

/// Format milliseconds as zero-padded `MM:SS`, truncating partial seconds.
pub fn format_elapsed(ms: u64) -> String {
    let secs = ms / 1000;
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
