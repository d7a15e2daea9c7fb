// crates/ports/src/lib.rs
//! # Ports
//!
//! Interface definitions for the ends of the import pipeline.
//!
//! - [`source`]: where email candidates come from
//! - [`sink`]: where the finished report goes
//!
//! The use case only talks to these traits, so it stays independent of
//! files, terminals and test doubles alike.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod sink;
pub mod source;

pub use sink::ReportSink;
pub use source::EmailSource;
