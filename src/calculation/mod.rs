//! Calculation logic for the Timesheet Engine.
//!
//! This module contains the three core computations: billable-hour
//! calculation for labor spans (lunch-aware, multi-day capable), monthly
//! attendance-ledger reconciliation with past/future auto-fill, attendance
//! code aggregation into category totals, and extraction/re-insertion of the
//! time and date tokens embedded in task notes.

mod fill_month;
mod labor_hours;
mod note_token;
mod summarize;

pub use fill_month::fill_month;
pub use labor_hours::compute_hours;
pub use note_token::{NoteParts, extract, reinsert};
pub use summarize::{AttendanceSummary, summarize};
