//! Billable-hour calculation for labor spans.
//!
//! This module converts a [`LaborSpan`] into decimal billable hours,
//! excluding the unpaid lunch break and handling spans that cover several
//! calendar days.

use chrono::NaiveTime;
use rust_decimal::Decimal;

use crate::config::{HourPolicy, ShiftWindow};
use crate::models::LaborSpan;

/// Computes the billable hours for a labor span.
///
/// The result is rounded to 2 decimal places and never negative. A span
/// whose end datetime is not after its start yields zero.
///
/// # Rules
///
/// * **Same calendar day**: end minus start in decimal hours; when the
///   interval overlaps the lunch break the full lunch duration is deducted
///   once.
/// * **Multi-day**: the first day bills from the start time to the end of
///   the afternoon shift (lunch deducted when the start falls before the
///   lunch break); every full intervening day bills a flat working day;
///   the last day bills from the start of the morning shift to the end time
///   (lunch deducted when the end falls after the lunch break).
/// * Under [`HourPolicy::ClampToShift`] boundary times are clamped into the
///   shift window first, so work outside it earns nothing. Under
///   [`HourPolicy::AccrueOvertime`] early and evening work accrues
///   additively.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use timesheet_engine::calculation::compute_hours;
/// use timesheet_engine::config::{HourPolicy, ShiftWindow};
/// use timesheet_engine::models::LaborSpan;
///
/// let window = ShiftWindow::default();
/// let span = LaborSpan::parse("2024-06-10", "2024-06-10", "09:00", "14:00").unwrap();
/// // 5 raw hours minus the 1-hour lunch break.
/// assert_eq!(
///     compute_hours(&span, &window, HourPolicy::ClampToShift),
///     Decimal::from(4)
/// );
/// ```
pub fn compute_hours(span: &LaborSpan, window: &ShiftWindow, policy: HourPolicy) -> Decimal {
    if span.is_empty() {
        return Decimal::ZERO;
    }

    let hours = if span.spans_multiple_days() {
        let first = first_day_hours(span.start_time, window, policy);
        let last = last_day_hours(span.end_time, window, policy);
        let full_days = (span.end_date - span.start_date).num_days() - 1;
        first + last + Decimal::from(full_days) * window.full_day_hours()
    } else {
        same_day_hours(span.start_time, span.end_time, window, policy)
    };

    hours.max(Decimal::ZERO).round_dp(2)
}

/// Hours for a span contained in one calendar day.
fn same_day_hours(
    start: NaiveTime,
    end: NaiveTime,
    window: &ShiftWindow,
    policy: HourPolicy,
) -> Decimal {
    let (start, end) = match policy {
        HourPolicy::ClampToShift => (clamp_to_window(start, window), clamp_to_window(end, window)),
        HourPolicy::AccrueOvertime => (start, end),
    };
    if end <= start {
        return Decimal::ZERO;
    }

    let mut hours = hours_between(start, end);
    if crosses_lunch(start, end, window) {
        hours -= window.lunch_hours();
    }
    hours.max(Decimal::ZERO)
}

/// Hours for the opening day of a multi-day span: start time through the end
/// of the afternoon shift.
fn first_day_hours(start: NaiveTime, window: &ShiftWindow, policy: HourPolicy) -> Decimal {
    let start = match policy {
        HourPolicy::ClampToShift => clamp_to_window(start, window),
        HourPolicy::AccrueOvertime => start,
    };
    let end = window.day_end();
    if end <= start {
        return Decimal::ZERO;
    }

    let mut hours = hours_between(start, end);
    if start < window.lunch_start() {
        hours -= window.lunch_hours();
    }
    hours.max(Decimal::ZERO)
}

/// Hours for the closing day of a multi-day span: start of the morning shift
/// through the end time.
fn last_day_hours(end: NaiveTime, window: &ShiftWindow, policy: HourPolicy) -> Decimal {
    let end = match policy {
        HourPolicy::ClampToShift => end.min(window.day_end()),
        HourPolicy::AccrueOvertime => end,
    };
    let start = window.day_start();
    if end <= start {
        return Decimal::ZERO;
    }

    let mut hours = hours_between(start, end);
    if end > window.lunch_end() {
        hours -= window.lunch_hours();
    }
    hours.max(Decimal::ZERO)
}

/// Whether an interval overlaps the lunch break at all.
fn crosses_lunch(start: NaiveTime, end: NaiveTime, window: &ShiftWindow) -> bool {
    start < window.lunch_end() && end > window.lunch_start()
}

fn clamp_to_window(time: NaiveTime, window: &ShiftWindow) -> NaiveTime {
    time.clamp(window.day_start(), window.day_end())
}

/// Decimal hours between two times of day.
fn hours_between(start: NaiveTime, end: NaiveTime) -> Decimal {
    let minutes = (end - start).num_minutes();
    Decimal::new(minutes, 0) / Decimal::new(60, 0)
}
