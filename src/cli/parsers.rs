// src/cli/parsers.rs
use std::str::FromStr;

/// Single-character field separator. Accepts `tab` and `\t` as aliases for a tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelimiterArg(pub char);

impl Default for DelimiterArg {
    fn default() -> Self {
        Self(',')
    }
}

impl FromStr for DelimiterArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tab" | "\\t" => return Ok(Self('\t')),
            "" => return Err("Delimiter must not be empty".to_string()),
            _ => {}
        }
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(Self(c)),
            _ => Err(format!("Delimiter must be a single character: {s}")),
        }
    }
}
