//! Labor span model.
//!
//! This module defines the [`LaborSpan`] struct representing the interval a
//! daily-wage task was worked over, as entered by the user: a start date and
//! time and an end date and time.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The interval over which billable hours are computed.
///
/// A span may cover a single calendar day or several. Spans whose combined
/// end datetime is not after the combined start datetime are valid but yield
/// zero hours.
///
/// # Example
///
/// ```
/// use timesheet_engine::models::LaborSpan;
///
/// let span = LaborSpan::parse("2024-06-10", "2024-06-12", "14:00", "10:00").unwrap();
/// assert!(span.spans_multiple_days());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaborSpan {
    /// The calendar date work started.
    pub start_date: NaiveDate,
    /// The calendar date work ended.
    pub end_date: NaiveDate,
    /// The time of day work started.
    pub start_time: NaiveTime,
    /// The time of day work ended.
    pub end_time: NaiveTime,
}

impl LaborSpan {
    /// Creates a span from already-parsed components.
    pub fn new(
        start_date: NaiveDate,
        end_date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> Self {
        Self {
            start_date,
            end_date,
            start_time,
            end_time,
        }
    }

    /// Parses a span from the raw strings the persistence layer stores.
    ///
    /// Dates must be `YYYY-MM-DD`. Times accept both `HH:MM` and `HH:MM:SS`,
    /// matching the two formats legacy rows carry.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidDate`] or [`EngineError::InvalidTime`]
    /// for unparseable input.
    pub fn parse(
        start_date: &str,
        end_date: &str,
        start_time: &str,
        end_time: &str,
    ) -> EngineResult<Self> {
        Ok(Self {
            start_date: parse_date(start_date)?,
            end_date: parse_date(end_date)?,
            start_time: parse_time(start_time)?,
            end_time: parse_time(end_time)?,
        })
    }

    /// Returns the combined start datetime.
    pub fn start(&self) -> NaiveDateTime {
        self.start_date.and_time(self.start_time)
    }

    /// Returns the combined end datetime.
    pub fn end(&self) -> NaiveDateTime {
        self.end_date.and_time(self.end_time)
    }

    /// Returns true when the span yields no billable time at all, i.e. the
    /// end datetime is not after the start datetime.
    pub fn is_empty(&self) -> bool {
        self.end() <= self.start()
    }

    /// Returns true when the span covers more than one calendar day.
    pub fn spans_multiple_days(&self) -> bool {
        self.end_date > self.start_date
    }
}

/// Parses a `YYYY-MM-DD` date string.
fn parse_date(value: &str) -> EngineResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| EngineError::InvalidDate {
        value: value.to_string(),
    })
}

/// Parses a time string in `HH:MM` or `HH:MM:SS` form.
fn parse_time(value: &str) -> EngineResult<NaiveTime> {
    let trimmed = value.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
        .map_err(|_| EngineError::InvalidTime {
            value: value.to_string(),
        })
}
