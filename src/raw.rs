//! Raw statement text before any tabular interpretation.

use crate::error::StatementError;
use std::io::Read;

/// Raw semicolon-delimited statement export, undecoded.
#[derive(Debug, Clone)]
pub struct RawStatement {
    /// Full text of the export, header row included.
    pub text: String,
}

impl RawStatement {
    /// Reads statement text from an arbitrary `Read`.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, StatementError> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Ok(Self { text })
    }

    /// Wraps an already-loaded string.
    #[inline]
    #[must_use]
    pub fn from_str(s: &str) -> Self {
        Self {
            text: s.to_string(),
        }
    }
}
