//! HTTP API module for the Timesheet Engine.
//!
//! This module provides the REST endpoints the UI and persistence layers
//! call for hour calculation, ledger reconciliation and note-token handling.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{FillRequest, HoursRequest, NoteRequest, SummaryRequest};
pub use response::{ApiError, ComposedNote, HoursResponse};
pub use state::AppState;
