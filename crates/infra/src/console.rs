// crates/infra/src/console.rs
use std::io::{self, Write};

use customer_importer_domain::SortedReport;
use customer_importer_ports::ReportSink;
use customer_importer_shared_kernel::{InfrastructureError, Result};

use crate::persistence::file_writer::write_lines;

/// Prints the report to standard output instead of a file.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReportWriter;

impl ConsoleReportWriter {
    pub fn new() -> Self {
        Self
    }

    /// Same rendering as the console sink, aimed at any writer.
    pub fn write_to<W: Write>(&self, writer: &mut W, report: &SortedReport) -> Result<()> {
        write_lines(writer, report).map_err(|source| {
            InfrastructureError::OutputError {
                message: "failed to write report to standard output".to_string(),
                source: Some(Box::new(source)),
            }
            .into()
        })
    }
}

impl ReportSink for ConsoleReportWriter {
    fn describe(&self) -> String {
        "standard output".to_string()
    }

    fn write_report(&self, report: &SortedReport) -> Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.write_to(&mut handle, report)
    }
}
