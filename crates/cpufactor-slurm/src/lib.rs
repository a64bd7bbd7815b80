//! SLURM accounting log ingestion for cpufactor.
//!
//! Reads pipe-delimited job-accounting `.log` files into tables of records.

pub mod log;
pub mod types;

pub use log::{LogError, parse_log_content, parse_log_file, parse_log_line};
pub use types::{AccountingRecord, LOG_FIELDS, LogTable};
