//! Request types for the Timesheet Engine API.
//!
//! This module defines the JSON request structures for all endpoints and
//! their conversions into domain types.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{LaborSpan, MonthLedger};

/// Request body for the `/hours` endpoint.
///
/// Fields arrive as the raw strings the persistence layer stores. Any
/// missing field means the user has not finished entering the span, and the
/// calculation short-circuits to zero hours rather than failing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoursRequest {
    /// The calendar date work started, `YYYY-MM-DD`.
    #[serde(default)]
    pub start_date: Option<String>,
    /// The calendar date work ended, `YYYY-MM-DD`.
    #[serde(default)]
    pub end_date: Option<String>,
    /// The time of day work started, `HH:MM` or `HH:MM:SS`.
    #[serde(default)]
    pub start_time: Option<String>,
    /// The time of day work ended, `HH:MM` or `HH:MM:SS`.
    #[serde(default)]
    pub end_time: Option<String>,
}

impl HoursRequest {
    /// Converts the request into a [`LaborSpan`], or `None` when any field
    /// is missing.
    ///
    /// # Errors
    ///
    /// Propagates the validation error for present but unparseable values.
    pub fn into_span(self) -> EngineResult<Option<LaborSpan>> {
        match (
            self.start_date,
            self.end_date,
            self.start_time,
            self.end_time,
        ) {
            (Some(start_date), Some(end_date), Some(start_time), Some(end_time)) => Ok(Some(
                LaborSpan::parse(&start_date, &end_date, &start_time, &end_time)?,
            )),
            _ => Ok(None),
        }
    }
}

/// Request body for the `/attendance/fill` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FillRequest {
    /// The month to reconcile, `YYYY-MM`.
    pub month: String,
    /// The reconciliation boundary: days after this date stay blank.
    pub today: NaiveDate,
    /// The sparse day-to-code entries already recorded.
    #[serde(default)]
    pub entries: BTreeMap<String, String>,
}

impl From<FillRequest> for MonthLedger {
    fn from(req: FillRequest) -> Self {
        MonthLedger::new(req.month, req.entries)
    }
}

/// Request body for the `/attendance/summary` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRequest {
    /// The day-to-code entries to aggregate.
    #[serde(default)]
    pub entries: BTreeMap<String, String>,
}

/// Request body for the `/note/extract` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteRequest {
    /// The free-text note to decompose.
    pub note: String,
}
