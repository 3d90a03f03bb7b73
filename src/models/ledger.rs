//! Monthly attendance ledger model.
//!
//! This module defines the per-user, per-month day-to-code mapping and the
//! calendar helpers the reconciler works over.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// One user's attendance ledger for one month.
///
/// Day keys are two-digit day-of-month strings (`"01"`, `"02"`, ...), which
/// keeps the `BTreeMap` iteration order strictly day-ascending. Values are
/// kept as raw strings so unrecognized legacy codes survive read-modify-write
/// cycles untouched.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
/// use timesheet_engine::models::MonthLedger;
///
/// let ledger = MonthLedger::new("2024-06", BTreeMap::new());
/// assert_eq!(ledger.year_month().unwrap(), (2024, 6));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthLedger {
    /// The month this ledger covers, as `YYYY-MM`.
    pub month: String,
    /// Mapping from two-digit day-of-month key to raw attendance code.
    #[serde(default)]
    pub days: BTreeMap<String, String>,
}

impl MonthLedger {
    /// Creates a ledger for the given month with the given entries.
    pub fn new(month: impl Into<String>, days: BTreeMap<String, String>) -> Self {
        Self {
            month: month.into(),
            days,
        }
    }

    /// Parses the `YYYY-MM` month field.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidMonth`] when the field is malformed or
    /// names an impossible month.
    pub fn year_month(&self) -> EngineResult<(i32, u32)> {
        let invalid = || EngineError::InvalidMonth {
            value: self.month.clone(),
        };
        let (year_part, month_part) = self.month.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year_part.parse().map_err(|_| invalid())?;
        let month: u32 = month_part.parse().map_err(|_| invalid())?;
        if !(1..=12).contains(&month) {
            return Err(invalid());
        }
        Ok((year, month))
    }

    /// Returns the entry for a day number, if any.
    pub fn entry(&self, day: u32) -> Option<&str> {
        self.days.get(&day_key(day)).map(String::as_str)
    }
}

/// Formats a day-of-month number as the two-digit ledger key.
pub fn day_key(day: u32) -> String {
    format!("{:02}", day)
}

/// Returns every calendar date of the given month, ascending.
///
/// # Errors
///
/// Returns [`EngineError::InvalidMonth`] when the year/month pair is not
/// representable.
pub fn month_days(year: i32, month: u32) -> EngineResult<Vec<NaiveDate>> {
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| EngineError::InvalidMonth {
        value: format!("{:04}-{:02}", year, month),
    })?;

    let mut days = Vec::with_capacity(31);
    let mut current = first;
    while current.month() == month {
        days.push(current);
        current = match current.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }
    Ok(days)
}
