//! SLURM accounting record types.

use chrono::{DateTime, Utc};
use cpufactor_parsers::ExitCode;
use std::time::Duration;

/// Column order of an accounting log line.
pub const LOG_FIELDS: [&str; 16] = [
    "job-id",
    "cluster",
    "partition",
    "account",
    "group",
    "user",
    "submit-time",
    "eligible-time",
    "start-time",
    "end-time",
    "elapsed-time",
    "exit code",
    "num-nodes",
    "num-cpus",
    "node-list",
    "job-name",
];

/// One job record from an accounting log.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountingRecord {
    /// SLURM job ID, kept as text (array and step IDs are not numeric)
    pub job_id: String,

    pub cluster: Option<String>,
    pub partition: Option<String>,
    pub account: Option<String>,
    pub group: Option<String>,
    pub user: Option<String>,

    /// Submit time
    pub submit_time: Option<DateTime<Utc>>,

    /// Time the job became eligible to run
    pub eligible_time: Option<DateTime<Utc>>,

    /// Start time
    pub start_time: Option<DateTime<Utc>>,

    /// End time
    pub end_time: Option<DateTime<Utc>>,

    /// Wall-clock time used
    pub elapsed: Option<Duration>,

    pub exit_code: Option<ExitCode>,

    /// Allocated nodes
    pub nodes: Option<u32>,

    /// Allocated CPUs (fractional on clusters that bill half cores)
    pub cpus: f64,

    pub nodelist: Option<String>,

    /// Job name
    pub name: String,
}

/// Records of a single accounting log, in file order.
///
/// Jobs that were allocated zero CPUs are never stored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogTable {
    records: Vec<AccountingRecord>,
}

impl LogTable {
    /// Build a table, dropping records with a CPU count of zero.
    pub fn new(records: Vec<AccountingRecord>) -> Self {
        let records = records.into_iter().filter(|r| r.cpus != 0.0).collect();
        Self { records }
    }

    pub fn records(&self) -> &[AccountingRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The CPU-count column in file order.
    pub fn cpu_counts(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.cpus).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(job_id: &str, cpus: f64) -> AccountingRecord {
        AccountingRecord {
            job_id: job_id.to_string(),
            cluster: None,
            partition: None,
            account: None,
            group: None,
            user: None,
            submit_time: None,
            eligible_time: None,
            start_time: None,
            end_time: None,
            elapsed: None,
            exit_code: None,
            nodes: None,
            cpus,
            nodelist: None,
            name: "job".to_string(),
        }
    }

    #[test]
    fn test_log_table_drops_zero_cpu_rows() {
        let table = LogTable::new(vec![
            record("1", 4.0),
            record("2", 0.0),
            record("3", 1.5),
        ]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.cpu_counts(), vec![4.0, 1.5]);
        assert_eq!(table.records()[1].job_id, "3");
    }

    #[test]
    fn test_log_table_all_zero_is_empty() {
        let table = LogTable::new(vec![record("1", 0.0), record("2", 0.0)]);
        assert!(table.is_empty());
        assert!(table.cpu_counts().is_empty());
    }
}
