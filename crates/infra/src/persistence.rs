// crates/infra/src/persistence.rs
pub mod csv_reader;
pub mod file_reader;
pub mod file_writer;

pub use csv_reader::CsvEmailReader;
pub use file_reader::FileReader;
pub use file_writer::{FileWriter, ReportFileWriter};
