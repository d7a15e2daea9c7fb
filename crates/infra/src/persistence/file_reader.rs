// crates/infra/src/persistence/file_reader.rs
use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Read the whole file at `path` as text.
    ///
    /// Bytes that are not valid UTF-8 become U+FFFD instead of failing the
    /// read; only real I/O errors are returned.
    pub fn read_lossy(path: &Path) -> std::io::Result<String> {
        let mut bytes = Vec::new();
        BufReader::new(File::open(path)?).read_to_end(&mut bytes)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// Splits `text` into lines ended by `\n`, `\r\n` or a lone `\r`.
///
/// A terminator at the very end does not produce a trailing empty line.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> + '_ {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(['\n', '\r']) {
            Some(end) => {
                let line = &rest[..end];
                let width = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[end + width..];
                Some(line)
            }
            None => Some(std::mem::take(&mut rest)),
        }
    })
}
