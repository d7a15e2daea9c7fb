// crates/domain/src/analytics/aggregate.rs
use std::collections::{HashMap, hash_map};

use customer_importer_shared_kernel::{DomainName, DomainResult, OccurrenceCount};
use tracing::{debug, trace};

use crate::email::EmailMatcher;

/// Occurrences per email domain.
///
/// Iteration order is unspecified; use [`crate::analytics::sort_domains`] for a stable order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainCountTable {
    counts: HashMap<DomainName, OccurrenceCount>,
}

impl DomainCountTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one occurrence of `domain`, inserting it with a count of one if absent.
    pub fn record(&mut self, domain: &str) {
        match self.counts.get_mut(domain) {
            Some(count) => count.increment(),
            None => {
                self.counts.insert(DomainName::from(domain), OccurrenceCount::one());
            }
        }
    }

    pub fn get(&self, domain: &str) -> Option<OccurrenceCount> {
        self.counts.get(domain).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the number of valid emails seen.
    pub fn total(&self) -> OccurrenceCount {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, DomainName, OccurrenceCount> {
        self.counts.iter()
    }
}

impl<'a> IntoIterator for &'a DomainCountTable {
    type Item = (&'a DomainName, &'a OccurrenceCount);
    type IntoIter = hash_map::Iter<'a, DomainName, OccurrenceCount>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.iter()
    }
}

impl<D: Into<DomainName>> FromIterator<(D, usize)> for DomainCountTable {
    fn from_iter<T: IntoIterator<Item = (D, usize)>>(iter: T) -> Self {
        let mut table = Self::new();
        for (domain, count) in iter {
            *table.counts.entry(domain.into()).or_default() += OccurrenceCount::new(count);
        }
        table
    }
}

/// Counts domains of well-formed emails.
#[derive(Debug, Clone)]
pub struct DomainAggregator {
    matcher: EmailMatcher,
}

impl DomainAggregator {
    pub fn new() -> DomainResult<Self> {
        Ok(Self::with_matcher(EmailMatcher::new()?))
    }

    pub fn with_matcher(matcher: EmailMatcher) -> Self {
        Self { matcher }
    }

    pub fn matcher(&self) -> &EmailMatcher {
        &self.matcher
    }

    /// Builds the table for `emails`. Strings that are not `local@domain` are dropped.
    pub fn count_domains<I, S>(&self, emails: I) -> DomainCountTable
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = DomainCountTable::new();
        for email in emails {
            let email = email.as_ref();
            match self.matcher.domain_of(email) {
                Some(domain) => table.record(domain),
                None => trace!(email = %email, "skipping invalid email"),
            }
        }
        debug!(domains = table.len(), valid = table.total().value(), "aggregated email domains");
        table
    }
}
