// crates/domain/src/analytics/sort.rs
use std::{cmp::Ordering, fmt};

use customer_importer_shared_kernel::{DomainName, OccurrenceCount};

use crate::{analytics::DomainCountTable, options::ReportOrder};

/// One rendered row of the report: `<domain>: <count>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    domain: DomainName,
    count: OccurrenceCount,
}

impl ReportLine {
    pub fn new(domain: DomainName, count: OccurrenceCount) -> Self {
        Self { domain, count }
    }

    pub fn domain(&self) -> &DomainName {
        &self.domain
    }

    pub fn count(&self) -> OccurrenceCount {
        self.count
    }
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.domain, self.count)
    }
}

impl ReportOrder {
    #[inline]
    pub fn compare(&self, a: &ReportLine, b: &ReportLine) -> Ordering {
        match self {
            Self::Domain => a.domain.cmp(&b.domain),
            Self::CountDesc => b.count.cmp(&a.count).then_with(|| a.domain.cmp(&b.domain)),
        }
    }
}

/// Report rows in their final order. Built once from a [`DomainCountTable`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortedReport {
    lines: Vec<ReportLine>,
}

impl SortedReport {
    pub fn from_table(table: &DomainCountTable, order: ReportOrder) -> Self {
        let mut lines: Vec<ReportLine> = table
            .iter()
            .map(|(domain, count)| ReportLine::new(domain.clone(), *count))
            .collect();
        // Keys are unique, so an unstable sort cannot reorder equal rows.
        lines.sort_unstable_by(|a, b| order.compare(a, b));
        Self { lines }
    }

    pub fn lines(&self) -> &[ReportLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ReportLine> {
        self.lines.iter()
    }

    pub fn total(&self) -> OccurrenceCount {
        self.lines.iter().map(ReportLine::count).sum()
    }

    /// Rendered `"<domain>: <count>"` strings, in order.
    pub fn to_strings(&self) -> Vec<String> {
        self.lines.iter().map(ToString::to_string).collect()
    }
}

impl<'a> IntoIterator for &'a SortedReport {
    type Item = &'a ReportLine;
    type IntoIter = std::slice::Iter<'a, ReportLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

/// Alphabetical report, the default presentation.
pub fn sort_domains(table: &DomainCountTable) -> SortedReport {
    sort_domains_by(table, ReportOrder::Domain)
}

pub fn sort_domains_by(table: &DomainCountTable, order: ReportOrder) -> SortedReport {
    SortedReport::from_table(table, order)
}

// ============================================================================
// Tests
// ============================================================================
