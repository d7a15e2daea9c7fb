// crates/ports/src/sink.rs
use customer_importer_domain::SortedReport;
use customer_importer_shared_kernel::Result;

/// Port persisting a finished report.
pub trait ReportSink {
    fn describe(&self) -> String;

    fn write_report(&self, report: &SortedReport) -> Result<()>;
}
