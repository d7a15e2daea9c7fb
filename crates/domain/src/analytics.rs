// crates/domain/src/analytics.rs
//! Domain counting and report ordering.
//!
//! Counting goes into an unordered table; ordering happens only when the
//! table is turned into a [`SortedReport`].

pub mod aggregate;
pub mod sort;

pub use aggregate::{DomainAggregator, DomainCountTable};
pub use sort::{ReportLine, SortedReport, sort_domains, sort_domains_by};
