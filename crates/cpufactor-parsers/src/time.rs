//! Time parsing utilities for accounting log fields.

use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use std::time::Duration;

/// Parse a SLURM timestamp (YYYY-MM-DDTHH:MM:SS or placeholder values).
///
/// Returns None for empty strings or placeholder values like "N/A", "Unknown", "None".
pub fn parse_slurm_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() || s == "N/A" || s == "Unknown" || s == "None" {
        return None;
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .and_then(|dt| Utc.from_local_datetime(&dt).single())
}

/// Parse a duration in various formats.
///
/// Supports:
/// - D-HH:MM:SS (elapsed time with days)
/// - HH:MM:SS
/// - MM:SS
/// - Seconds as integer
///
/// Fractional seconds (`01:30:00.123`) are truncated.
/// Returns None for "UNLIMITED" or empty strings.
pub fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim();
    if s.is_empty() || s == "UNLIMITED" || s == "-" {
        return None;
    }
    let s = s.split('.').next().unwrap_or(s);

    // Check for day separator (D-HH:MM:SS)
    let (days, time_part) = match s.split_once('-') {
        Some((days, rest)) => (days.parse::<u64>().ok()?, rest),
        None => (0, s),
    };

    let time_parts = time_part
        .split(':')
        .map(|p| p.parse::<u64>().ok())
        .collect::<Option<Vec<u64>>>()?;

    // Oversized fields yield None rather than overflowing
    let seconds = match time_parts.as_slice() {
        [h, m, s] => h.checked_mul(3600)?.checked_add(m.checked_mul(60)?)?.checked_add(*s)?,
        [m, s] => m.checked_mul(60)?.checked_add(*s)?,
        [s] => *s,
        _ => return None,
    };

    let total = days.checked_mul(86400)?.checked_add(seconds)?;
    Some(Duration::from_secs(total))
}

/// Exit status as recorded by the accounting log (`code:signal`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExitCode {
    pub code: i32,
    pub signal: i32,
}

impl ExitCode {
    pub fn success(&self) -> bool {
        self.code == 0 && self.signal == 0
    }
}

/// Parse exit code from SLURM format (exit_code:signal).
///
/// A missing signal part is read as 0. Returns None if the code is not numeric.
pub fn parse_exit_code(s: &str) -> Option<ExitCode> {
    let mut parts = s.trim().split(':');
    let code = parts.next()?.parse().ok()?;
    let signal = match parts.next() {
        Some(sig) => sig.parse().ok()?,
        None => 0,
    };
    Some(ExitCode { code, signal })
}
