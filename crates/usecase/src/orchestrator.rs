// crates/usecase/src/orchestrator.rs
use customer_importer_domain::{DomainAggregator, ReportOrder, analytics::sort_domains_by};
use customer_importer_ports::{EmailSource, ReportSink};
use customer_importer_shared_kernel::{ErrorContext, Result};
use tracing::{debug, info};

use crate::dto::ImportSummary;

/// Reader → aggregator → writer, run once to completion.
pub struct ImportCustomers<'a> {
    source: &'a dyn EmailSource,
    sink: &'a dyn ReportSink,
    aggregator: DomainAggregator,
    order: ReportOrder,
}

impl<'a> ImportCustomers<'a> {
    pub fn new(source: &'a dyn EmailSource, sink: &'a dyn ReportSink) -> Result<Self> {
        Ok(Self {
            source,
            sink,
            aggregator: DomainAggregator::new()?,
            order: ReportOrder::default(),
        })
    }

    pub fn with_order(mut self, order: ReportOrder) -> Self {
        self.order = order;
        self
    }

    pub fn run(&self) -> Result<ImportSummary> {
        let emails = self
            .source
            .read_emails()
            .with_context(|| format!("reading customers from {}", self.source.describe()))?;
        debug!(candidates = emails.len(), "read email candidates");

        let table = self.aggregator.count_domains(&emails);
        let report = sort_domains_by(&table, self.order);

        self.sink
            .write_report(&report)
            .with_context(|| format!("writing report to {}", self.sink.describe()))?;
        info!(
            domains = report.len(),
            valid = table.total().value(),
            destination = %self.sink.describe(),
            "domain report written"
        );

        Ok(ImportSummary {
            candidates: emails.len(),
            valid_emails: table.total().value(),
            report,
        })
    }
}
