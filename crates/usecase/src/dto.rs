// crates/usecase/src/dto.rs
use customer_importer_domain::SortedReport;

/// Outcome of one import run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSummary {
    /// Email candidates handed over by the source.
    pub candidates: usize,
    /// Candidates that had a `local@domain` shape.
    pub valid_emails: usize,
    pub report: SortedReport,
}

impl ImportSummary {
    pub fn distinct_domains(&self) -> usize {
        self.report.len()
    }
}
