//! Parse SLURM accounting `.log` files.
//!
//! Each line is one job record with 16 `|`-separated fields (see
//! [`LOG_FIELDS`]); there is no header row.

use crate::types::{AccountingRecord, LOG_FIELDS, LogTable};
use camino::{Utf8Path, Utf8PathBuf};
use cpufactor_parsers::{
    FieldCountError, non_empty_string, parse_duration, parse_exit_code, parse_slurm_timestamp,
    split_exact,
};
use std::fs;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LogError {
    #[error("Failed to read {path}")]
    Io {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    FieldCount(#[from] FieldCountError),
    #[error("Invalid CPU count: {0:?}")]
    InvalidCpuCount(String),
    #[error("Malformed record at line {line}")]
    Line {
        line: usize,
        #[source]
        source: Box<LogError>,
    },
    #[error("Failed to parse {path}")]
    File {
        path: Utf8PathBuf,
        #[source]
        source: Box<LogError>,
    },
}

/// Parse the CPU count column. Must be a finite, non-negative number.

fn parse_cpu_count(s: &str) -> Result<f64, LogError> {
    match s.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
        _ => Err(LogError::InvalidCpuCount(s.to_string())),
    }
}

/// Parse a single line of an accounting log.
pub fn parse_log_line(line: &str) -> Result<AccountingRecord, LogError> {
    let fields = split_exact(line, LOG_FIELDS.len())?;

    Ok(AccountingRecord {
        job_id: fields[0].trim().to_string(),
        cluster: non_empty_string(fields[1]),
        partition: non_empty_string(fields[2]),
        account: non_empty_string(fields[3]),
        group: non_empty_string(fields[4]),
        user: non_empty_string(fields[5]),
        submit_time: parse_slurm_timestamp(fields[6]),
        eligible_time: parse_slurm_timestamp(fields[7]),
        start_time: parse_slurm_timestamp(fields[8]),
        end_time: parse_slurm_timestamp(fields[9]),
        elapsed: parse_duration(fields[10]),
        exit_code: parse_exit_code(fields[11]),
        nodes: fields[12].trim().parse().ok(),
        cpus: parse_cpu_count(fields[13])?,
        nodelist: non_empty_string(fields[14]),
        name: fields[15].to_string(),
    })
}

/// Parse accounting log content.
///
/// Blank lines are skipped. The first malformed line aborts parsing.
pub fn parse_log_content(content: &str) -> Result<LogTable, LogError> {
    let mut records = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let record = parse_log_line(line).map_err(|e| LogError::Line {
            line: idx + 1,
            source: Box::new(e),
        })?;
        records.push(record);
    }

    let parsed = records.len();
    let table = LogTable::new(records);
    if table.len() < parsed {
        tracing::debug!(
            "Dropped {} zero-CPU records of {}",
            parsed - table.len(),
            parsed
        );
    }
    Ok(table)
}

/// Parse a specific accounting log file.
pub fn parse_log_file(path: &Utf8Path) -> Result<LogTable, LogError> {
    let content = fs::read_to_string(path).map_err(|source| LogError::Io {
        path: path.to_owned(),
        source,
    })?;

    let table = parse_log_content(&content).map_err(|e| LogError::File {
        path: path.to_owned(),
        source: Box::new(e),
    })?;
    tracing::debug!("Read {} records from {}", table.len(), path);
    Ok(table)
}
