//! Directory scan over accounting logs.

use crate::factor::summarize;
use crate::summary::{SummaryRow, SummaryTable};
use camino::{Utf8Path, Utf8PathBuf};
use cpufactor_slurm::{LogError, LogTable, parse_log_file};
use std::fs;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Failed to read directory {path}")]
    Io {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Log(#[from] LogError),
}

/// What to scan and how to summarize it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    /// Directory holding the accounting logs (not searched recursively)
    pub dir: Utf8PathBuf,

    /// File extension of accounting logs, without the dot
    pub extension: String,

    /// Average rescaled CPU counts instead of raw ones
    pub refactor: bool,
}

impl ScanConfig {
    pub const DEFAULT_EXTENSION: &'static str = "log";

    pub fn new(dir: impl Into<Utf8PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            extension: Self::DEFAULT_EXTENSION.to_string(),
            refactor: false,
        }
    }

    pub fn with_refactor(mut self, refactor: bool) -> Self {
        self.refactor = refactor;
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }
}

/// File name of a log, falling back to the full path.
fn file_label(path: &Utf8Path) -> &str {
    path.file_name().unwrap_or(path.as_str())
}

/// List accounting logs directly inside the configured directory, sorted by name.
///
/// Hidden files are ignored.
pub fn find_log_files(config: &ScanConfig) -> Result<Vec<Utf8PathBuf>, ScanError> {
    let entries = fs::read_dir(&config.dir).map_err(|source| ScanError::Io {
        path: config.dir.clone(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| ScanError::Io {
            path: config.dir.clone(),
            source,
        })?;
        let path = match Utf8PathBuf::try_from(entry.path()) {
            Ok(p) => p,
            Err(e) => {
                tracing::warn!("Skipping non UTF-8 path: {}", e);
                continue;
            }
        };

        let Some(name) = path.file_name() else {
            continue;
        };
        if name.starts_with('.') || path.extension() != Some(config.extension.as_str()) {
            continue;
        }
        if !path.is_file() {
            tracing::warn!("Skipping {}: not a regular file", path);
            continue;
        }
        files.push(path);
    }

    files.sort();
    tracing::debug!("Found {} .{} files in {}", files.len(), config.extension, config.dir);
    Ok(files)
}

fn load_tables(config: &ScanConfig) -> Result<Vec<(Utf8PathBuf, LogTable)>, ScanError> {
    find_log_files(config)?
        .into_iter()
        .map(|path| {
            let table = parse_log_file(&path)?;
            Ok::<_, ScanError>((path, table))
        })
        .collect()
}

fn summarize_all(tables: &[(Utf8PathBuf, LogTable)], refactor: bool) -> SummaryTable {
    let rows: Vec<SummaryRow> = tables
        .iter()
        .map(|(path, table)| summarize(file_label(path), table, refactor))
        .collect();
    SummaryTable::new(rows, refactor)
}

/// Summarize every accounting log in a directory, one row per file.
///
/// A file that cannot be read or parsed aborts the scan.
pub fn scan(config: &ScanConfig) -> Result<SummaryTable, ScanError> {
    let tables = load_tables(config)?;
    let summary = summarize_all(&tables, config.refactor);
    tracing::info!("Summarized {} files from {}", summary.len(), config.dir);
    Ok(summary)
}

/// Summarize a directory both raw and refactored, reading each file once.
///
/// Returns `(raw, refactored)`; `config.refactor` is ignored.
pub fn scan_both(config: &ScanConfig) -> Result<(SummaryTable, SummaryTable), ScanError> {
    let tables = load_tables(config)?;
    let raw = summarize_all(&tables, false);
    let refactored = summarize_all(&tables, true);
    tracing::info!("Summarized {} files from {}", raw.len(), config.dir);
    Ok((raw, refactored))
}
