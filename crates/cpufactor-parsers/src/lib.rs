//! Shared parsing utilities for scheduler accounting logs.
//!
//! Field-level helpers used by the accounting log reader: delimited
//! splitting, placeholder handling, timestamps, durations and exit codes.

pub mod time;

pub use time::{ExitCode, parse_duration, parse_exit_code, parse_slurm_timestamp};

use thiserror::Error;

/// A delimited line did not have the expected number of fields.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Expected {expected} fields, got {found}: {line}")]
pub struct FieldCountError {
    pub expected: usize,
    pub found: usize,
    pub line: String,
}

/// Filter helper for optional string fields.
/// Returns None if the string is empty or a placeholder value.
pub fn non_empty_string(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty()
        || trimmed == "-"
        || trimmed == "N/A"
        || trimmed == "Unknown"
        || trimmed == "None"
    {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Split a pipe-delimited line that must have exactly `fields` columns.
pub fn split_exact(line: &str, fields: usize) -> Result<Vec<&str>, FieldCountError> {
    let parts: Vec<&str> = line.split('|').collect();
    if parts.len() != fields {
        return Err(FieldCountError {
            expected: fields,
            found: parts.len(),
            line: line.to_string(),
        });
    }
    Ok(parts)
}
