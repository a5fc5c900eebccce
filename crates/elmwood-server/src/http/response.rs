// SPDX-License-Identifier: Apache-2.0

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use elmwood_api::{ApiError, ApiErrorCode, Envelope, Source};
use serde_json::json;

#[must_use]
pub(crate) fn status_for(code: ApiErrorCode) -> StatusCode {
    match code {
        ApiErrorCode::ValidationFailed | ApiErrorCode::BackendUnavailable => {
            StatusCode::BAD_REQUEST
        }
        ApiErrorCode::NotFound => StatusCode::NOT_FOUND,
        ApiErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub(crate) fn success(message: &str, data: serde_json::Value) -> Response {
    (StatusCode::OK, Json(Envelope::ok(message, data))).into_response()
}

pub(crate) fn created(message: &str, data: serde_json::Value) -> Response {
    (StatusCode::CREATED, Json(Envelope::ok(message, data))).into_response()
}

pub(crate) fn sourced(message: &str, data: serde_json::Value, source: Source) -> Response {
    (StatusCode::OK, Json(Envelope::sourced(message, data, source))).into_response()
}

pub(crate) fn failure(err: &ApiError) -> Response {
    let mut envelope = Envelope::failure(err.message.clone());
    if !err.errors.is_empty() {
        envelope.errors = Some(json!(err.errors));
    }
    (status_for(err.code), Json(envelope)).into_response()
}

pub(crate) fn not_found(message: &str) -> Response {
    failure(&ApiError::not_found(message))
}
