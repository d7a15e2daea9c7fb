// crates/shared-kernel/src/value_objects/domain_name.rs
use std::{borrow::Borrow, fmt, ops::Deref};

/// Email domain exactly as written after the `@`.
///
/// No case folding or IDNA normalisation happens here: `Example.com` and
/// `example.com` are different domains. Ordering is ordinal on the UTF-8 bytes.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct DomainName(String);

impl DomainName {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for DomainName {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Borrow<str> for DomainName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for DomainName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DomainName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for DomainName {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for DomainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
