//! CPU allocation factor analysis for cpufactor.
//!
//! Detects the common CPU-count granularity of each accounting log and
//! summarizes a directory of logs into one table.

pub mod factor;
pub mod scan;
pub mod summary;

pub use factor::{Factor, detect_factor, gcd, mean, rescale, summarize, summarize_counts};
pub use scan::{ScanConfig, ScanError, find_log_files, scan, scan_both};
pub use summary::{SummaryRow, SummaryTable};
