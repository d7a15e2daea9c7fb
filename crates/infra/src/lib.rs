// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod console;
pub mod persistence;

pub use console::ConsoleReportWriter;
pub use persistence::{CsvEmailReader, ReportFileWriter};
