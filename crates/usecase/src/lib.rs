// crates/usecase/src/lib.rs
//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`orchestrator`]: reads emails, counts domains, writes the report
//! - [`dto`]: data returned across the use case boundary
//!
//! Use cases depend on domain and ports, never on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod orchestrator;

pub use dto::ImportSummary;
pub use orchestrator::ImportCustomers;
