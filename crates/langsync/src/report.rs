//! Console reporting for a sync run.
//!
//! One human-readable line per configured language plus a closing summary.
//! The report is for eyes, not machines; structured diagnostics go through
//! `tracing` instead.

use crate::sync::Mode;

/// What happened to a single language during the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageStatus {
    /// No drift in the direction the mode cares about; file untouched.
    UpToDate,
    /// The file was rewritten.
    Changed {
        /// Placeholder entries inserted.
        added: usize,
        /// Stale entries removed.
        removed: usize,
    },
    /// Status mode: drift counts, no write.
    Drift {
        /// Keys in the base but not this language.
        missing: usize,
        /// Keys in this language but not the base.
        unused: usize,
    },
    /// The language was skipped; the reason distinguishes missing file,
    /// missing marker, and unbalanced literal.
    Failed {
        /// Human-readable failure reason.
        reason: String,
    },
}

/// Per-language report entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageOutcome {
    /// Language code.
    pub lang: String,
    /// Outcome for this language.
    pub status: LanguageStatus,
}

impl LanguageOutcome {
    /// Render the per-language report line.
    #[must_use]
    pub fn line(&self) -> String {
        match &self.status {
            LanguageStatus::UpToDate => format!("{}: up to date", self.lang),
            LanguageStatus::Changed { added, removed } => match (added, removed) {
                (0, n) => format!("{}: removed {} stale {}", self.lang, n, entry_word(*n)),
                (n, 0) => format!("{}: added {} placeholder {}", self.lang, n, entry_word(*n)),
                (a, r) => format!(
                    "{}: added {a}, removed {r} {}",
                    self.lang,
                    entry_word(a + r)
                ),
            },
            LanguageStatus::Drift { missing, unused } => format!(
                "{}: {} missing, {} unused",
                self.lang, missing, unused
            ),
            LanguageStatus::Failed { reason } => format!("{}: error: {reason}", self.lang),
        }
    }
}

fn entry_word(count: usize) -> &'static str {
    if count == 1 { "entry" } else { "entries" }
}

/// Full report for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Mode the run executed in.
    pub mode: Mode,
    /// One outcome per configured target, in manifest order.
    pub outcomes: Vec<LanguageOutcome>,
}

impl RunReport {
    /// Total placeholder entries inserted across languages.
    #[must_use]
    pub fn total_added(&self) -> usize {
        self.outcomes
            .iter()
            .map(|o| match o.status {
                LanguageStatus::Changed { added, .. } => added,
                _ => 0,
            })
            .sum()
    }

    /// Total stale entries removed across languages.
    #[must_use]
    pub fn total_removed(&self) -> usize {
        self.outcomes
            .iter()
            .map(|o| match o.status {
                LanguageStatus::Changed { removed, .. } => removed,
                _ => 0,
            })
            .sum()
    }

    /// Number of languages that failed.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, LanguageStatus::Failed { .. }))
            .count()
    }

    /// Render the closing summary line.
    #[must_use]
    pub fn summary(&self) -> String {
        let verb = match self.mode {
            Mode::Generate => "generate",
            Mode::Cleanup => "cleanup",
            Mode::Status => "status",
        };
        format!(
            "{verb}: {} languages, {} added, {} removed, {} failed",
            self.outcomes.len(),
            self.total_added(),
            self.total_removed(),
            self.failure_count()
        )
    }

    /// Print the per-language lines and the summary to stdout.
    pub fn print(&self) {
        for outcome in &self.outcomes {
            println!("{}", outcome.line());
        }
        println!("{}", self.summary());
    }
}
