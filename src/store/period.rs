//! Period resolution: mapping a record date to its month+year storage bucket.
//!
//! Every path that needs the period key (table naming, bundle naming,
//! retrieval) goes through `Period::key()`. Nothing else in the crate
//! formats a month/year pair by hand.

use chrono::{Datelike, NaiveDate};
use std::fmt;

/// A calendar month+year bucket. Records and their receipts are
/// partitioned by this key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Period {
    pub year: i32,
    pub month: u32,
}

impl Period {
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The storage key, e.g. March 2024 -> "03_2024".
    ///
    /// Same month+year always produces the same key; different month or
    /// year always produces a different one.
    pub fn key(&self) -> String {
        format!("{:02}_{:04}", self.month, self.year)
    }

    /// Backing table filename for this period.
    pub fn table_file_name(&self) -> String {
        format!("expenses_{}.csv", self.key())
    }

    /// Default receipt-bundle filename for this period.
    pub fn bundle_file_name(&self) -> String {
        format!("receipts_{}.zip", self.key())
    }

    /// Parse a user-supplied period: `YYYY-MM` (CLI convention) or the
    /// storage form `MM_YYYY`.
    pub fn parse(s: &str) -> Option<Self> {
        let (a, b, year_first) = if let Some((a, b)) = s.split_once('-') {
            (a, b, true)
        } else if let Some((a, b)) = s.split_once('_') {
            (a, b, false)
        } else {
            return None;
        };

        let (year_str, month_str) = if year_first { (a, b) } else { (b, a) };

        let year: i32 = year_str.parse().ok()?;
        let month: u32 = month_str.parse().ok()?;

        if year_str.len() != 4 || !(1..=12).contains(&month) {
            return None;
        }

        Some(Self { year, month })
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
