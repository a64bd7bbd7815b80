//! CPU allocation factor detection.
//!
//! A file's factor is the common granularity of its CPU counts: 0.5 when any
//! job was allocated a half core, otherwise the GCD of every count.

use crate::summary::SummaryRow;
use cpufactor_slurm::LogTable;
use serde::{Serialize, Serializer};
use std::fmt;

/// Common CPU-count granularity of one accounting log.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Factor {
    /// No usable records; reported as -1
    Empty,
    /// At least one count has a fractional part of exactly .5
    Half,
    /// Greatest common divisor of all counts
    Gcd(f64),
}

impl Factor {
    /// Numeric form used in tables and charts.
    pub fn value(&self) -> f64 {
        match self {
            Self::Empty => -1.0,
            Self::Half => 0.5,
            Self::Gcd(g) => *g,
        }
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.value().to_string())
    }
}

impl Serialize for Factor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let value = self.value();
        if value.fract() == 0.0 {
            serializer.serialize_i64(value as i64)
        } else {
            serializer.serialize_f64(value)
        }
    }
}

/// Greatest common divisor by Euclid's algorithm, `gcd(a, 0) == a`.
///
/// Defined for non-negative values. Integral inputs give the usual integer GCD.
pub fn gcd(mut a: f64, mut b: f64) -> f64 {
    while b != 0.0 {
        (a, b) = (b, a % b);
    }
    a
}

fn is_half(value: f64) -> bool {
    (value - 0.5) % 1.0 == 0.0
}

/// Detect the factor of a CPU-count sequence.
///
/// A single half-core value decides the result; the GCD is then never computed.
pub fn detect_factor(counts: &[f64]) -> Factor {
    if counts.iter().any(|&v| is_half(v)) {
        return Factor::Half;
    }
    match counts.iter().copied().reduce(gcd) {
        Some(g) => Factor::Gcd(g),
        None => Factor::Empty,
    }
}

/// Arithmetic mean, None for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Rescale CPU counts by their detected factor.
///
/// Half-core files are doubled. Files with a factor of 2 or more are halved,
/// whatever the factor's actual magnitude.
// FIXME: halving ignores the factor's magnitude ([8, 16] becomes [4, 8], not [1, 2]).
pub fn rescale(counts: &[f64], factor: Factor) -> Vec<f64> {
    let scale = match factor {
        Factor::Half => 2.0,
        Factor::Gcd(g) if g >= 2.0 => 0.5,
        _ => 1.0,
    };
    counts.iter().map(|v| v * scale).collect()
}

/// Summarize a raw CPU-count sequence.
pub fn summarize_counts(file: impl Into<String>, counts: &[f64], refactor: bool) -> SummaryRow {
    let file = file.into();
    let factor = detect_factor(counts);
    let avg = if refactor {
        mean(&rescale(counts, factor))
    } else {
        mean(counts)
    };

    SummaryRow {
        file,
        len: counts.len(),
        avg: avg.unwrap_or(-1.0),
        factor,
    }
}

/// Summarize one parsed accounting log.
pub fn summarize(file: impl Into<String>, table: &LogTable, refactor: bool) -> SummaryRow {
    summarize_counts(file, &table.cpu_counts(), refactor)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{} != {}", a, b);
    }

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(12.0, 0.0), 12.0);
        assert_eq!(gcd(0.0, 7.0), 7.0);
        assert_eq!(gcd(12.0, 18.0), 6.0);
        assert_eq!(gcd(18.0, 12.0), 6.0);
        assert_eq!(gcd(17.0, 5.0), 1.0);
    }

    #[test]
    fn test_detect_factor_coprime_is_one() {
        assert_eq!(detect_factor(&[3.0, 4.0]), Factor::Gcd(1.0));
        assert_eq!(detect_factor(&[6.0, 10.0, 15.0]), Factor::Gcd(1.0));
        assert_eq!(detect_factor(&[1.0]), Factor::Gcd(1.0));
    }

    #[test]
    fn test_detect_factor_gcd() {
        assert_eq!(detect_factor(&[4.0, 8.0, 12.0]), Factor::Gcd(4.0));
        assert_eq!(detect_factor(&[24.0]), Factor::Gcd(24.0));
        assert_eq!(detect_factor(&[28.0, 56.0, 14.0]), Factor::Gcd(14.0));
    }

    #[test]
    fn test_detect_factor_order_independent() {
        let counts = [12.0, 30.0, 18.0, 42.0];
        let mut reversed = counts;
        reversed.reverse();
        assert_eq!(detect_factor(&counts), detect_factor(&reversed));
        assert_eq!(detect_factor(&counts), Factor::Gcd(6.0));
    }

    #[test]
    fn test_detect_factor_half_wins() {
        assert_eq!(detect_factor(&[1.5, 3.0, 4.5]), Factor::Half);
        assert_eq!(detect_factor(&[8.0, 16.0, 32.0, 0.5]), Factor::Half);
        assert_eq!(detect_factor(&[4.0, 8.0, 2.5, 12.0]), Factor::Half);
    }

    #[test]
    fn test_detect_factor_empty() {
        assert_eq!(detect_factor(&[]), Factor::Empty);
        assert_eq!(Factor::Empty.value(), -1.0);
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[]), None);
        assert_close(mean(&[4.0, 8.0, 12.0]).unwrap(), 8.0);
        assert_close(mean(&[1.0, 2.0]).unwrap(), 1.5);
    }

    #[test]
    fn test_rescale() {
        assert_eq!(rescale(&[1.5, 3.0, 4.5], Factor::Half), vec![3.0, 6.0, 9.0]);
        assert_eq!(rescale(&[8.0, 16.0], Factor::Gcd(8.0)), vec![4.0, 8.0]);
        assert_eq!(rescale(&[2.0, 4.0], Factor::Gcd(2.0)), vec![1.0, 2.0]);
        assert_eq!(rescale(&[3.0, 4.0], Factor::Gcd(1.0)), vec![3.0, 4.0]);
    }

    #[test]
    fn test_summarize_counts() {
        let row = summarize_counts("a.log", &[4.0, 8.0, 12.0], false);
        assert_eq!(row.len, 3);
        assert_eq!(row.factor, Factor::Gcd(4.0));
        assert_close(row.avg, 8.0);
    }

    #[test]
    fn test_summarize_counts_refactor_half() {
        let raw = summarize_counts("a.log", &[1.5, 3.0, 4.5], false);
        assert_eq!(raw.factor, Factor::Half);
        assert_close(raw.avg, 3.0);

        let refactored = summarize_counts("a.log", &[1.5, 3.0, 4.5], true);
        assert_eq!(refactored.factor, Factor::Half);
        assert_close(refactored.avg, 6.0);
    }

    #[test]
    fn test_summarize_counts_refactor_halves_large_factor() {
        let row = summarize_counts("a.log", &[8.0, 16.0], true);
        // Factor reflects the counts before rescaling
        assert_eq!(row.factor, Factor::Gcd(8.0));
        assert_close(row.avg, 6.0);
    }

    #[test]
    fn test_summarize_counts_refactor_unit_unchanged() {
        let raw = summarize_counts("a.log", &[3.0, 4.0, 5.0], false);
        let refactored = summarize_counts("a.log", &[3.0, 4.0, 5.0], true);
        assert_close(raw.avg, refactored.avg);
    }

    #[test]
    fn test_summarize_counts_empty() {
        for refactor in [false, true] {
            let row = summarize_counts("empty.log", &[], refactor);
            assert_eq!(row.len, 0);
            assert_eq!(row.avg, -1.0);
            assert_eq!(row.factor, Factor::Empty);
        }
    }

    #[test]
    fn test_factor_display() {
        assert_eq!(Factor::Empty.to_string(), "-1");
        assert_eq!(Factor::Half.to_string(), "0.5");
        assert_eq!(Factor::Gcd(4.0).to_string(), "4");
    }
}
