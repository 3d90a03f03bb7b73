//! Attendance code aggregation.
//!
//! This module folds a month of day codes into per-category totals for the
//! payroll overview: work, leave, meetings, social-insurance leave, unpaid
//! leave, and probation days.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::{AttendanceCode, DayCode};

/// Per-category day totals for one user's month.
///
/// All fields are in day units; a composite half-day contributes 0.5.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
/// use rust_decimal::Decimal;
/// use timesheet_engine::calculation::summarize;
///
/// let mut days = BTreeMap::new();
/// days.insert("01".to_string(), "K/P".to_string());
/// let summary = summarize(&days);
///
/// assert_eq!(summary.work, Decimal::new(5, 1));
/// assert_eq!(summary.leave, Decimal::new(5, 1));
/// assert_eq!(summary.total, Decimal::ONE);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceSummary {
    /// Full work days (`K`).
    pub work: Decimal,
    /// Paid leave (`P`).
    pub leave: Decimal,
    /// Meetings (`H`).
    pub meetings: Decimal,
    /// Leave covered by social insurance (`O`, `TS`, `VS`).
    pub social_insurance: Decimal,
    /// Unpaid and company-event leave (`VR`, `NM`, `TQ`, `BD`, `L`).
    pub unpaid: Decimal,
    /// Probation days (`TV`).
    pub probation: Decimal,
    /// Sum of all buckets.
    pub total: Decimal,
}

impl AttendanceSummary {
    /// Adds `units` to the bucket the code belongs to.
    fn apply(&mut self, code: AttendanceCode, units: Decimal) {
        let bucket = match code {
            AttendanceCode::K => &mut self.work,
            AttendanceCode::P => &mut self.leave,
            AttendanceCode::H => &mut self.meetings,
            AttendanceCode::O | AttendanceCode::Ts | AttendanceCode::Vs => {
                &mut self.social_insurance
            }
            AttendanceCode::Vr
            | AttendanceCode::Nm
            | AttendanceCode::Tq
            | AttendanceCode::Bd
            | AttendanceCode::L => &mut self.unpaid,
            AttendanceCode::Tv => &mut self.probation,
        };
        *bucket += units;
    }
}

/// Aggregates a month of day codes into category totals.
///
/// Single codes contribute one full unit to their bucket; composite `X/Y`
/// codes contribute half a unit to each side. Unrecognized values are
/// skipped with a warning and contribute to no bucket: historical rows
/// carry codes that predate the current catalog, and a summary must never
/// fail over them.
pub fn summarize(days: &BTreeMap<String, String>) -> AttendanceSummary {
    let half = Decimal::new(5, 1);
    let mut summary = AttendanceSummary::default();

    for (day, raw) in days {
        match DayCode::parse(raw) {
            Some(DayCode::Blank) => {}
            Some(DayCode::Single(code)) => summary.apply(code, Decimal::ONE),
            Some(DayCode::Split(first, second)) => {
                summary.apply(first, half);
                summary.apply(second, half);
            }
            None => {
                warn!(day = %day, code = %raw, "skipping unrecognized attendance code");
            }
        }
    }

    summary.total = summary.work
        + summary.leave
        + summary.meetings
        + summary.social_insurance
        + summary.unpaid
        + summary.probation;
    summary
}
