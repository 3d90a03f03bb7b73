//! HTTP request handlers for the Timesheet Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use rust_decimal::Decimal;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{NoteParts, compute_hours, extract, fill_month, reinsert, summarize};
use crate::models::MonthLedger;

use super::request::{FillRequest, HoursRequest, NoteRequest, SummaryRequest};
use super::response::{ApiError, ApiErrorResponse, ComposedNote, HoursResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/hours", post(hours_handler))
        .route("/attendance/fill", post(fill_handler))
        .route("/attendance/summary", post(summary_handler))
        .route("/note/extract", post(extract_handler))
        .route("/note/compose", post(compose_handler))
        .with_state(state)
}

/// Handler for the POST /hours endpoint.
///
/// Converts a raw labor span into billable hours. Missing fields yield zero
/// hours; malformed values are validation errors.
async fn hours_handler(
    State(state): State<AppState>,
    payload: Result<Json<HoursRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing hours request");

    let request = match unwrap_payload(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let span = match request.into_span() {
        Ok(span) => span,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Invalid labor span");
            return ApiErrorResponse::from(err).into_response();
        }
    };

    let hours = match span {
        Some(span) => compute_hours(
            &span,
            state.config().shift_window(),
            state.config().hour_policy(),
        ),
        None => {
            info!(correlation_id = %correlation_id, "Incomplete span, zero hours");
            Decimal::ZERO
        }
    };

    info!(correlation_id = %correlation_id, hours = %hours, "Hours computed");
    (StatusCode::OK, Json(HoursResponse { hours })).into_response()
}

/// Handler for the POST /attendance/fill endpoint.
///
/// Reconciles a sparse monthly ledger into a complete one.
async fn fill_handler(
    State(_state): State<AppState>,
    payload: Result<Json<FillRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing attendance fill request");

    let request = match unwrap_payload(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let today = request.today;
    let ledger: MonthLedger = request.into();
    match fill_month(&ledger, today) {
        Ok(filled) => {
            info!(
                correlation_id = %correlation_id,
                month = %filled.month,
                days = filled.days.len(),
                "Ledger reconciled"
            );
            (StatusCode::OK, Json(filled)).into_response()
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Ledger reconciliation failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for the POST /attendance/summary endpoint.
///
/// Aggregates day codes into category totals. Never fails on malformed
/// codes; they are skipped.
async fn summary_handler(
    State(_state): State<AppState>,
    payload: Result<Json<SummaryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing attendance summary request");

    let request = match unwrap_payload(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let summary = summarize(&request.entries);
    info!(correlation_id = %correlation_id, total = %summary.total, "Summary computed");
    (StatusCode::OK, Json(summary)).into_response()
}

/// Handler for the POST /note/extract endpoint.
async fn extract_handler(
    State(_state): State<AppState>,
    payload: Result<Json<NoteRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing note extract request");

    let request = match unwrap_payload(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    (StatusCode::OK, Json(extract(&request.note))).into_response()
}

/// Handler for the POST /note/compose endpoint.
async fn compose_handler(
    State(_state): State<AppState>,
    payload: Result<Json<NoteParts>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing note compose request");

    let parts = match unwrap_payload(correlation_id, payload) {
        Ok(parts) => parts,
        Err(response) => return response,
    };

    let note = reinsert(&parts);
    (StatusCode::OK, Json(ComposedNote { note })).into_response()
}

/// Unwraps a JSON payload, turning extraction failures into error responses.
fn unwrap_payload<T>(
    correlation_id: Uuid,
    payload: Result<Json<T>, JsonRejection>,
) -> Result<T, Response> {
    match payload {
        Ok(Json(request)) => Ok(request),
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // The body text carries the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            Err((StatusCode::BAD_REQUEST, Json(error)).into_response())
        }
    }
}
