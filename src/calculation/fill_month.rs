//! Monthly attendance-ledger reconciliation.
//!
//! This module fills a sparse day-to-code ledger out to a complete month:
//! past weekdays default to a full work day, weekends and future days stay
//! blank.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::EngineResult;
use crate::models::{AttendanceCode, MonthLedger, day_key, month_days};

/// Reconciles a sparse monthly ledger into a complete one.
///
/// For every calendar day of the ledger's month up to and including `today`,
/// an existing entry is kept; missing weekday entries default to
/// [`AttendanceCode::K`] and missing weekend entries to blank. Every day
/// strictly after `today` is forced blank, overriding any stale future entry
/// a UI may have written speculatively. The result covers the whole month
/// with two-digit day keys in strict ascending order.
///
/// `today` is injected by the caller so the past/future boundary is
/// testable; the engine never reads the wall clock.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::InvalidMonth`] when the ledger's
/// month field is malformed.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
/// use chrono::NaiveDate;
/// use timesheet_engine::calculation::fill_month;
/// use timesheet_engine::models::MonthLedger;
///
/// let ledger = MonthLedger::new("2024-06", BTreeMap::new());
/// let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
/// let filled = fill_month(&ledger, today).unwrap();
///
/// assert_eq!(filled.days.len(), 30);
/// assert_eq!(filled.days["14"], "K"); // Friday the 14th
/// assert_eq!(filled.days["15"], "");  // Saturday the 15th
/// assert_eq!(filled.days["17"], "");  // future Monday
/// ```
pub fn fill_month(ledger: &MonthLedger, today: NaiveDate) -> EngineResult<MonthLedger> {
    let (year, month) = ledger.year_month()?;

    let mut days = BTreeMap::new();
    for date in month_days(year, month)? {
        let key = day_key(date.day());
        let value = if date > today {
            String::new()
        } else {
            match ledger.entry(date.day()).map(str::trim) {
                Some(existing) if !existing.is_empty() => existing.to_string(),
                _ if is_weekend(date) => String::new(),
                _ => AttendanceCode::K.to_string(),
            }
        };
        days.insert(key, value);
    }

    Ok(MonthLedger::new(ledger.month.clone(), days))
}

/// Saturday and Sunday are never auto-filled with a work day.
fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_ledger(entries: &[(&str, &str)]) -> MonthLedger {
        let days = entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        MonthLedger::new("2024-06", days)
    }

    /// FM-001: past weekdays default to K, weekends stay blank
    #[test]
    fn test_past_defaults() {
        // 2024-06-15 is a Saturday.
        let filled = fill_month(&make_ledger(&[]), make_date("2024-06-15")).unwrap();

        assert_eq!(filled.days["14"], "K"); // Friday
        assert_eq!(filled.days["15"], ""); // Saturday
        assert_eq!(filled.days["09"], ""); // Sunday the 9th
        assert_eq!(filled.days["10"], "K"); // Monday the 10th
    }

    /// FM-002: future days are blank even when previously set
    #[test]
    fn test_future_overrides_stale_entries() {
        let ledger = make_ledger(&[("16", "K"), ("20", "P"), ("30", "K")]);
        let filled = fill_month(&ledger, make_date("2024-06-15")).unwrap();

        for day in 16..=30 {
            assert_eq!(filled.days[&day_key(day)], "", "day {} must be blank", day);
        }
    }

    /// FM-003: existing past entries are preserved verbatim
    #[test]
    fn test_past_entries_preserved() {
        let ledger = make_ledger(&[("03", "P"), ("04", "K/P"), ("08", "O")]);
        let filled = fill_month(&ledger, make_date("2024-06-15")).unwrap();

        assert_eq!(filled.days["03"], "P");
        assert_eq!(filled.days["04"], "K/P");
        // The 8th is a Saturday; a manual entry still wins over the blank.
        assert_eq!(filled.days["08"], "O");
    }

    /// FM-004: output covers the whole month in ascending order with no gaps
    #[test]
    fn test_complete_ascending_coverage() {
        let filled = fill_month(&make_ledger(&[]), make_date("2024-06-15")).unwrap();

        assert_eq!(filled.days.len(), 30);
        let keys: Vec<&String> = filled.days.keys().collect();
        for (i, key) in keys.iter().enumerate() {
            assert_eq!(**key, day_key(i as u32 + 1));
        }
    }

    /// FM-005: a month entirely in the future stays blank
    #[test]
    fn test_future_month_all_blank() {
        let filled = fill_month(&make_ledger(&[("05", "K")]), make_date("2024-05-20")).unwrap();
        assert!(filled.days.values().all(String::is_empty));
    }

    /// FM-006: a month entirely in the past is fully populated
    #[test]
    fn test_past_month_fully_populated() {
        let filled = fill_month(&make_ledger(&[]), make_date("2024-07-10")).unwrap();
        // June 2024 has 20 weekdays and 10 weekend days.
        let work_days = filled.days.values().filter(|v| *v == "K").count();
        let blank_days = filled.days.values().filter(|v| v.is_empty()).count();
        assert_eq!(work_days, 20);
        assert_eq!(blank_days, 10);
    }

    /// FM-007: today itself is populated when it's a weekday
    #[test]
    fn test_today_inclusive() {
        // 2024-06-14 is a Friday.
        let filled = fill_month(&make_ledger(&[]), make_date("2024-06-14")).unwrap();
        assert_eq!(filled.days["14"], "K");
        assert_eq!(filled.days["15"], "");
    }

    /// FM-008: whitespace-only entries count as absent
    #[test]
    fn test_blank_entry_treated_as_absent() {
        let ledger = make_ledger(&[("10", "  ")]);
        let filled = fill_month(&ledger, make_date("2024-06-15")).unwrap();
        assert_eq!(filled.days["10"], "K");
    }

    /// FM-009: malformed month reports InvalidMonth
    #[test]
    fn test_invalid_month_errors() {
        let ledger = MonthLedger::new("2024-13", BTreeMap::new());
        let result = fill_month(&ledger, make_date("2024-06-15"));
        assert!(result.is_err());
    }

    /// FM-010: unrecognized legacy codes in the past survive the fill
    #[test]
    fn test_unrecognized_past_entry_survives() {
        let ledger = make_ledger(&[("05", "???")]);
        let filled = fill_month(&ledger, make_date("2024-06-15")).unwrap();
        assert_eq!(filled.days["05"], "???");
    }
}
