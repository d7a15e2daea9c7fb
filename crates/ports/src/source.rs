// crates/ports/src/source.rs
use customer_importer_shared_kernel::Result;

/// Port producing the raw email strings of every data record, header excluded.
pub trait EmailSource {
    /// Short human label used in logs and error context (usually a path).
    fn describe(&self) -> String;

    /// Reads every candidate. Any I/O failure aborts the whole read.
    fn read_emails(&self) -> Result<Vec<String>>;
}
