// crates/infra/src/persistence/file_writer.rs
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use customer_importer_domain::{DomainCountTable, SortedReport, analytics::sort_domains};
use customer_importer_ports::ReportSink;
use customer_importer_shared_kernel::{InfrastructureError, Result};
use tracing::debug;

/// Terminator written after every report line, the last one included.
pub const LINE_ENDING: &str = if cfg!(windows) { "\r\n" } else { "\n" };

/// Helper utilities for writing files.
pub struct FileWriter;

impl FileWriter {
    /// Create (or truncate) `path` behind a buffered writer.
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<BufWriter<File>> {
        File::create(path.as_ref()).map(BufWriter::new)
    }
}

/// Writes each report row followed by [`LINE_ENDING`] and flushes.
pub fn write_lines<W: Write>(writer: &mut W, report: &SortedReport) -> std::io::Result<()> {
    for line in report {
        write!(writer, "{line}{LINE_ENDING}")?;
    }
    writer.flush()
}

/// Persists the report to a text file, replacing previous contents.
#[derive(Debug, Clone)]
pub struct ReportFileWriter {
    path: PathBuf,
}

impl ReportFileWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sorts `table` alphabetically and writes it.
    pub fn write_table(&self, table: &DomainCountTable) -> Result<()> {
        self.write_report(&sort_domains(table))
    }

    fn write_err(&self, source: std::io::Error) -> InfrastructureError {
        InfrastructureError::FileWrite { path: self.path.clone(), source }
    }
}

impl ReportSink for ReportFileWriter {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn write_report(&self, report: &SortedReport) -> Result<()> {
        let mut writer = FileWriter::create(&self.path).map_err(|e| self.write_err(e))?;
        write_lines(&mut writer, report).map_err(|e| self.write_err(e))?;
        debug!(path = %self.path.display(), lines = report.len(), "report file written");
        Ok(())
    }
}
