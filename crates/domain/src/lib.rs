// crates/domain/src/lib.rs
//! # Domain
//!
//! Pure logic of the customer import pipeline. Nothing here touches the
//! filesystem:
//!
//! - [`record`]: splitting a CSV line and picking the email column
//! - [`email`]: the `local@domain` shape check
//! - [`analytics`]: counting domains and ordering the report
//! - [`options`]: user-selectable report ordering

#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod email;
pub mod options;
pub mod record;

pub use analytics::{DomainAggregator, DomainCountTable, ReportLine, SortedReport};
pub use email::EmailMatcher;
pub use options::ReportOrder;
pub use record::RecordLayout;
