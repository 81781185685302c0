//! JSON encoding and decoding of the report document.
//!
//! The document is a bare JSON array of `{"rule", "violations"}` objects.
//! Readers and writers are borrowed, never closed.

use std::io::{Read, Write};

use crate::error::ReportError;
use crate::types::{ResultSet, RuleResult};

/// Decode a previously written report.
///
/// Empty input, whitespace-only input, and a literal `null` all decode to an
/// empty set. Anything else that is not a valid report is a decode error.
pub fn decode_results<R: Read>(mut reader: R) -> Result<ResultSet, ReportError> {
    let mut content = Vec::new();
    reader.read_to_end(&mut content)?;
    decode_slice(&content)
}

/// Decode a report already held in memory.
pub fn decode_str(content: &str) -> Result<ResultSet, ReportError> {
    decode_slice(content.as_bytes())
}

/// Decode raw report bytes. Invalid UTF-8 is a decode error.
pub fn decode_slice(content: &[u8]) -> Result<ResultSet, ReportError> {
    if content.iter().all(u8::is_ascii_whitespace) {
        return Ok(ResultSet::new());
    }
    let results: Option<Vec<RuleResult>> =
        serde_json::from_slice(content).map_err(ReportError::Decode)?;
    Ok(ResultSet::from_results(results.unwrap_or_default()))
}

/// Encode `results` onto `writer` and flush it.
pub fn encode_results<W: Write>(
    results: &ResultSet,
    mut writer: W,
    pretty: bool,
) -> Result<(), ReportError> {
    if pretty {
        serde_json::to_writer_pretty(&mut writer, results).map_err(ReportError::Encode)?;
    } else {
        serde_json::to_writer(&mut writer, results).map_err(ReportError::Encode)?;
    }
    writer
        .flush()
        .map_err(|e| ReportError::Encode(serde_json::Error::io(e)))
}
