//! Core data models for the Timesheet Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod labor_span;
mod ledger;

pub use attendance::{AttendanceCode, DayCode};
pub use labor_span::LaborSpan;
pub use ledger::{MonthLedger, day_key, month_days};
