//! Derived values of the ledger and the boundary that recomputes them.

use crate::{CategoryAnalysis, Ledger, Summary, analyze_categories, compute_summary};

/// Everything the views derive from the entry list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Report {
    pub summary: Summary,
    pub analysis: CategoryAnalysis,
}

impl Report {
    pub fn build(ledger: &Ledger) -> Self {
        Self {
            summary: compute_summary(ledger.entries()),
            analysis: analyze_categories(ledger.entries()),
        }
    }
}

/// Caches a [`Report`] for one ledger revision.
///
/// The report is never edited on its own; it is rebuilt from the ledger the
/// first time it is read after a mutation.
#[derive(Clone, Debug, Default)]
pub struct ReportCache {
    revision: Option<u64>,
    report: Report,
}

impl ReportCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the report for the current state of `ledger`.
    pub fn get(&mut self, ledger: &Ledger) -> &Report {
        if self.revision != Some(ledger.revision()) {
            self.report = Report::build(ledger);
            self.revision = Some(ledger.revision());
            tracing::trace!(revision = ledger.revision(), "report recomputed");
        }
        &self.report
    }

    /// Last computed report, possibly stale.
    pub fn last(&self) -> &Report {
        &self.report
    }

    pub fn is_fresh(&self, ledger: &Ledger) -> bool {
        self.revision == Some(ledger.revision())
    }
}
