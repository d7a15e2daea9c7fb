// crates/domain/src/options.rs
use std::{fmt, str::FromStr};

/// Ordering applied when the domain table is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ReportOrder {
    /// Ascending ordinal comparison on the domain name.
    #[default]
    Domain,
    /// Highest count first, domain name ascending on ties.
    CountDesc,
}

impl FromStr for ReportOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "domain" | "name" => Ok(Self::Domain),
            "count" | "count:desc" => Ok(Self::CountDesc),
            other => Err(format!("Unknown report order: {other}")),
        }
    }
}

impl fmt::Display for ReportOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Domain => f.write_str("domain"),
            Self::CountDesc => f.write_str("count"),
        }
    }
}
