// crates/domain/src/record.rs
use customer_importer_shared_kernel::{DomainError, DomainResult};

/// Where the email lives inside a customer line.
///
/// Splitting is a plain split on `separator`; quoted fields containing the
/// separator are not recognised and will shift the columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordLayout {
    separator: char,
    email_column: usize,
}

impl RecordLayout {
    pub const DEFAULT_SEPARATOR: char = ',';
    pub const DEFAULT_EMAIL_COLUMN: usize = 2;

    pub fn new(separator: char, email_column: usize) -> DomainResult<Self> {
        if matches!(separator, '\n' | '\r') {
            return Err(DomainError::InvalidLayout {
                reason: format!("separator {separator:?} would split inside the line terminator"),
            });
        }
        Ok(Self { separator, email_column })
    }

    #[inline]
    pub const fn separator(&self) -> char {
        self.separator
    }

    #[inline]
    pub const fn email_column(&self) -> usize {
        self.email_column
    }

    /// Splits one data line into its raw fields.
    pub fn fields<'a>(&self, line: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        line.split(self.separator)
    }

    /// Returns the trimmed email field, or `None` when the line has too few fields.
    ///
    /// Only spaces and ASCII control characters are trimmed; other Unicode
    /// whitespace such as U+00A0 stays part of the field.
    pub fn email_candidate<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.fields(line)
            .nth(self.email_column)
            .map(|field| field.trim_matches(|c: char| c <= ' '))
    }

    /// Email candidates for a whole file body. The first line is the header and is always dropped.
    pub fn email_candidates<'a, I>(&'a self, lines: I) -> impl Iterator<Item = &'a str> + 'a
    where
        I: IntoIterator<Item = &'a str>,
        I::IntoIter: 'a,
    {
        lines.into_iter().skip(1).filter_map(|line| self.email_candidate(line))
    }
}

impl Default for RecordLayout {
    fn default() -> Self {
        Self {
            separator: Self::DEFAULT_SEPARATOR,
            email_column: Self::DEFAULT_EMAIL_COLUMN,
        }
    }
}
