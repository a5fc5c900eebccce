// SPDX-License-Identifier: Apache-2.0

use crate::http::response::status_for;
use crate::timefmt::now_rfc3339;
use crate::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use elmwood_api::{ApiErrorCode, Envelope};
use serde_json::json;

pub(crate) async fn health(State(state): State<AppState>) -> Response {
    let body = json!({
        "status": "OK",
        "message": "Elmwood House API is running",
        "database": if state.store.durable() { "Connected" } else { "Disconnected" },
        "timestamp": now_rfc3339(),
    });
    (StatusCode::OK, Json(body)).into_response()
}

pub(crate) async fn db_status(State(state): State<AppState>) -> Response {
    let body = json!({
        "success": true,
        "database": {
            "kind": state.store.kind(),
            "status": if state.store.durable() { "Connected" } else { "Disconnected" },
        },
    });
    (StatusCode::OK, Json(body)).into_response()
}

pub(crate) async fn fallback() -> Response {
    (
        status_for(ApiErrorCode::NotFound),
        Json(Envelope::failure("Route not found")),
    )
        .into_response()
}
