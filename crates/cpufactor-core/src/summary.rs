//! Per-file summary table.

use crate::factor::Factor;
use camino::Utf8Path;
use serde::Serialize;
use std::fmt;
use std::io;

/// Summary of one accounting log.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    /// File name without its directory
    pub file: String,

    /// Records with a non-zero CPU count
    pub len: usize,

    /// Average CPU count, rescaled in refactor mode; -1 for an empty file
    pub avg: f64,

    /// Granularity of the raw CPU counts
    pub factor: Factor,
}

/// Summary rows of a directory scan, in file name order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SummaryTable {
    pub rows: Vec<SummaryRow>,

    /// Whether averages were computed from rescaled counts.
    pub refactored: bool,
}

impl SummaryTable {
    pub fn new(rows: Vec<SummaryRow>, refactored: bool) -> Self {
        Self { rows, refactored }
    }

    pub fn rows(&self) -> &[SummaryRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Write the table as CSV with a `file,len,avg,factor` header.
    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<(), csv::Error> {
        let mut wtr = csv::Writer::from_writer(writer);
        if self.rows.is_empty() {
            wtr.write_record(["file", "len", "avg", "factor"])?;
        }
        for row in &self.rows {
            wtr.serialize(row)?;
        }
        wtr.flush()?;
        Ok(())
    }

    /// Save the table as a CSV file.
    pub fn save_csv(&self, path: &Utf8Path) -> Result<(), csv::Error> {
        let file = std::fs::File::create(path)?;
        self.write_csv(file)?;
        tracing::info!("Wrote {} summary rows to {}", self.rows.len(), path);
        Ok(())
    }
}

impl fmt::Display for SummaryTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .rows
            .iter()
            .map(|r| r.file.len())
            .max()
            .unwrap_or(0)
            .max("file".len());

        writeln!(
            f,
            "{:<width$}  {:>6}  {:>8}  {:>6}",
            "file", "len", "avg", "factor"
        )?;
        for row in &self.rows {
            writeln!(
                f,
                "{:<width$}  {:>6}  {:>8.2}  {:>6}",
                row.file, row.len, row.avg, row.factor
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn table() -> SummaryTable {
        SummaryTable::new(
            vec![
                SummaryRow {
                    file: "2017-01.log".to_string(),
                    len: 3,
                    avg: 8.0,
                    factor: Factor::Gcd(4.0),
                },
                SummaryRow {
                    file: "2017-02.log".to_string(),
                    len: 3,
                    avg: 3.0,
                    factor: Factor::Half,
                },
                SummaryRow {
                    file: "2017-03.log".to_string(),
                    len: 0,
                    avg: -1.0,
                    factor: Factor::Empty,
                },
            ],
            false,
        )
    }

    #[test]
    fn test_write_csv() {
        let mut out = Vec::new();
        table().write_csv(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "file,len,avg,factor");
        assert_eq!(lines[1], "2017-01.log,3,8.0,4");
        assert_eq!(lines[2], "2017-02.log,3,3.0,0.5");
        assert_eq!(lines[3], "2017-03.log,0,-1.0,-1");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_write_csv_empty_table_has_header() {
        let mut out = Vec::new();
        SummaryTable::default().write_csv(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "file,len,avg,factor\n");
    }

    #[test]
    fn test_save_csv() {
        let temp = TempDir::new().unwrap();
        let path = Utf8Path::from_path(temp.path()).unwrap().join("slurm-avgs.csv");
        table().save_csv(&path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 4);
    }

    #[test]
    fn test_display() {
        let text = table().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("file"));
        assert!(lines[1].starts_with("2017-01.log"));
        assert!(lines[1].ends_with("     4"));
        assert!(lines[2].contains("3.00"));
        assert!(lines[3].contains("-1.00"));
    }
}
