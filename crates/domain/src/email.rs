// crates/domain/src/email.rs
use customer_importer_shared_kernel::{DomainError, DomainResult};
use regex::Regex;

/// Exactly one `@` with at least one character on either side.
pub const EMAIL_SHAPE: &str = r"^[^@]+@([^@]+)$";

/// Compiled email shape check.
///
/// Built once and owned by whoever counts domains; holds no mutable state.
#[derive(Debug, Clone)]
pub struct EmailMatcher {
    pattern: Regex,
}

impl EmailMatcher {
    pub fn new() -> DomainResult<Self> {
        let pattern = Regex::new(EMAIL_SHAPE).map_err(|err| DomainError::InvalidPattern {
            pattern: EMAIL_SHAPE.to_string(),
            details: err.to_string(),
            source: Some(Box::new(err)),
        })?;
        Ok(Self { pattern })
    }

    /// Domain part of `email`, or `None` if the address does not have the expected shape.
    pub fn domain_of<'a>(&self, email: &'a str) -> Option<&'a str> {
        self.pattern
            .captures(email)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}
