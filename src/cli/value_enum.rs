// src/cli/value_enum.rs
use clap::ValueEnum;
use customer_importer_domain::ReportOrder;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliReportOrder {
    /// Alphabetical by domain
    #[default]
    Domain,
    /// Most frequent domain first
    Count,
}

impl From<CliReportOrder> for ReportOrder {
    fn from(value: CliReportOrder) -> Self {
        match value {
            CliReportOrder::Domain => ReportOrder::Domain,
            CliReportOrder::Count => ReportOrder::CountDesc,
        }
    }
}
