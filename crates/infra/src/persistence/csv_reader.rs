// crates/infra/src/persistence/csv_reader.rs
use std::path::{Path, PathBuf};

use customer_importer_domain::RecordLayout;
use customer_importer_ports::EmailSource;
use customer_importer_shared_kernel::{InfrastructureError, Result};
use tracing::{debug, trace};

use crate::persistence::{FileReader, file_reader::split_lines};

/// Reads email candidates from a delimited customer export.
///
/// The first line is a header and is skipped unconditionally. The whole file
/// is consumed before anything is returned. Lines may end in `\n`, `\r\n` or
/// a lone `\r`; undecodable bytes are replaced rather than rejected.
#[derive(Debug, Clone)]
pub struct CsvEmailReader {
    path: PathBuf,
    layout: RecordLayout,
}

impl CsvEmailReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_layout(path, RecordLayout::default())
    }

    pub fn with_layout(path: impl Into<PathBuf>, layout: RecordLayout) -> Self {
        Self { path: path.into(), layout }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn layout(&self) -> RecordLayout {
        self.layout
    }
}

impl EmailSource for CsvEmailReader {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn read_emails(&self) -> Result<Vec<String>> {
        let path = self.path.as_path();
        let text = FileReader::read_lossy(path)
            .map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })?;

        let mut emails = Vec::new();
        for (index, line) in split_lines(&text).enumerate().skip(1) {
            match self.layout.email_candidate(line) {
                Some(email) => emails.push(email.to_owned()),
                None => trace!(line = index + 1, "skipping record with too few fields"),
            }
        }

        debug!(path = %path.display(), candidates = emails.len(), "read customer records");
        Ok(emails)
    }
}
