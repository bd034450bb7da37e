//! HTTP request handlers for the trip expense API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    body::Bytes,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate_expenses;
use crate::interchange::{EXPORT_CONTENT_TYPE, EXPORT_FILE_NAME, decode_upload};
use crate::models::{Route, TripInputs};

use super::request::{CalculationRequest, ImportResponse, RateOverrides};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/ledger/rates", get(rates_handler).put(update_rates_handler))
        .route(
            "/ledger/routes",
            get(routes_handler)
                .post(import_routes_handler)
                .put(replace_routes_handler),
        )
        .route("/ledger/save", post(save_handler))
        .route("/ledger/rows", get(rows_handler))
        .route("/ledger/export", get(export_handler))
        .with_state(state)
}

/// Maps a JSON body rejection to an error response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> ApiErrorResponse {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            ApiError::malformed_json(body_text)
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    ApiErrorResponse::bad_request(error)
}

/// Handler for POST /calculate endpoint.
///
/// Calculates one trip against the configured rates and routes, or the
/// overrides carried by the request. Does not touch the shared ledger.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection).into_response(),
    };

    let config = state.config();
    let rates = request.rates.apply(*config.rates());
    if let Err(err) = rates.validate() {
        warn!(
            correlation_id = %correlation_id,
            error = %err,
            "Rejected rate override"
        );
        return ApiErrorResponse::from(err).into_response();
    }
    let routes = request.routes.as_deref().unwrap_or(config.routes());

    let start_time = Instant::now();
    let summary = calculate_expenses(&request.trip, routes, &rates);
    info!(
        correlation_id = %correlation_id,
        day_count = summary.day_count,
        legs = request.trip.legs.len(),
        warnings = summary.audit_trace.warnings.len(),
        grand_total = summary.totals.grand_total,
        duration_us = start_time.elapsed().as_micros(),
        "Calculation completed successfully"
    );

    (StatusCode::OK, Json(summary)).into_response()
}

/// Handler for GET /ledger/rates endpoint.
async fn rates_handler(State(state): State<AppState>) -> Response {
    let rates = *state.ledger().rates();
    (StatusCode::OK, Json(rates)).into_response()
}

/// Handler for PUT /ledger/rates endpoint.
///
/// Applies the given fields on top of the ledger's current rates. Later
/// saves are calculated at the new rates; rows already saved keep theirs.
async fn update_rates_handler(
    State(state): State<AppState>,
    payload: Result<Json<RateOverrides>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let overrides = match payload {
        Ok(Json(overrides)) => overrides,
        Err(rejection) => return rejection_response(correlation_id, rejection).into_response(),
    };

    let result = {
        let mut ledger = state.ledger();
        let rates = overrides.apply(*ledger.rates());
        ledger.set_rates(rates).map(|()| rates)
    };

    match result {
        Ok(rates) => {
            info!(
                correlation_id = %correlation_id,
                daily_rate = rates.daily_rate,
                meal_rate_per_day = rates.meal_rate_per_day,
                meal_unit_rate = rates.meal_unit_rate,
                "Ledger rates updated"
            );
            (StatusCode::OK, Json(rates)).into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Rate update rejected"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /ledger/routes endpoint.
async fn routes_handler(State(state): State<AppState>) -> Response {
    let routes = state.ledger().routes().to_vec();
    (StatusCode::OK, Json(routes)).into_response()
}

/// Handler for PUT /ledger/routes endpoint.
///
/// Replaces the ledger's route table with edited rows. An empty list is
/// accepted and clears the table.
async fn replace_routes_handler(
    State(state): State<AppState>,
    payload: Result<Json<Vec<Route>>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let routes = match payload {
        Ok(Json(routes)) => routes,
        Err(rejection) => return rejection_response(correlation_id, rejection).into_response(),
    };

    let imported = routes.len();
    state.ledger().set_routes(routes);
    info!(
        correlation_id = %correlation_id,
        imported,
        "Route table edited"
    );
    (StatusCode::OK, Json(ImportResponse { imported })).into_response()
}

/// Handler for POST /ledger/routes endpoint.
///
/// Replaces the ledger's route table with the routes parsed from a raw
/// CSV body. Invalid UTF-8 is decoded lossily.
async fn import_routes_handler(State(state): State<AppState>, body: Bytes) -> Response {
    let correlation_id = Uuid::new_v4();
    let text = decode_upload(&body);

    let result = state.ledger().import_routes(&text);
    match result {
        Ok(imported) => {
            info!(
                correlation_id = %correlation_id,
                imported,
                "Route table replaced"
            );
            (StatusCode::OK, Json(ImportResponse { imported })).into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                bytes = body.len(),
                "Route import rejected"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /ledger/save endpoint.
///
/// Loads the posted trip into the ledger and saves it as the next row.
async fn save_handler(
    State(state): State<AppState>,
    payload: Result<Json<TripInputs>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let inputs = match payload {
        Ok(Json(inputs)) => inputs,
        Err(rejection) => return rejection_response(correlation_id, rejection).into_response(),
    };

    let saved = {
        let mut ledger = state.ledger();
        ledger.set_inputs(inputs);
        ledger.save().cloned()
    };

    match saved {
        Ok(row) => {
            info!(
                correlation_id = %correlation_id,
                sequence_number = row.sequence_number,
                grand_total = row.grand_total,
                "Saved trip row"
            );
            (StatusCode::CREATED, Json(row)).into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Save rejected"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /ledger/rows endpoint.
async fn rows_handler(State(state): State<AppState>) -> Response {
    let rows = state.ledger().saved_rows().to_vec();
    (StatusCode::OK, Json(rows)).into_response()
}

/// Handler for GET /ledger/export endpoint.
///
/// Returns the saved rows as a UTF-8 CSV attachment with a byte order mark.
async fn export_handler(State(state): State<AppState>) -> Response {
    let csv = state.ledger().export_csv();
    info!(bytes = csv.len(), "Exporting saved rows");
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, EXPORT_CONTENT_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, content_disposition(EXPORT_FILE_NAME)),
        ],
        csv,
    )
        .into_response()
}

/// Builds an `attachment` disposition with an RFC 5987 encoded file name.
fn content_disposition(file_name: &str) -> String {
    let mut encoded = String::with_capacity(file_name.len() * 3);
    for byte in file_name.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'.' | b'_' | b'~') {
            encoded.push(char::from(byte));
        } else {
            encoded.push_str(&format!("%{:02X}", byte));
        }
    }
    format!(
        "attachment; filename=\"trip_expenses.csv\"; filename*=UTF-8''{}",
        encoded
    )
}
