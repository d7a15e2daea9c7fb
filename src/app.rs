// src/app.rs
use customer_importer_infra::{ConsoleReportWriter, CsvEmailReader, ReportFileWriter};
use customer_importer_ports::ReportSink;
use customer_importer_shared_kernel::Result;
use customer_importer_usecase::{ImportCustomers, ImportSummary};

use crate::config::{ImportConfig, OutputTarget};

/// Wires the file adapters for `config` and runs the import once.
pub fn run(config: &ImportConfig) -> Result<ImportSummary> {
    let source = CsvEmailReader::with_layout(&config.input, config.layout);
    let file_sink;
    let console_sink = ConsoleReportWriter::new();
    let sink: &dyn ReportSink = match &config.output {
        OutputTarget::File(path) => {
            file_sink = ReportFileWriter::new(path);
            &file_sink
        }
        OutputTarget::Stdout => &console_sink,
    };

    ImportCustomers::new(&source, sink)?.with_order(config.order).run()
}
