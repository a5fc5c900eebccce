// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApiErrorCode {
    ValidationFailed,
    NotFound,
    BackendUnavailable,
    Internal,
}

/// One field-level violation, reported alongside its siblings so a form can
/// highlight every broken input in a single round trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub code: ApiErrorCode,
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldError>,
}

impl ApiError {
    #[must_use]
    pub fn new(code: ApiErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            errors: Vec::new(),
        }
    }

    #[must_use]
    pub fn validation(errors: Vec<FieldError>) -> Self {
        Self {
            code: ApiErrorCode::ValidationFailed,
            message: "Validation failed".to_string(),
            errors,
        }
    }

    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ApiErrorCode::NotFound, message)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_carries_every_violation() {
        let err = ApiError::validation(vec![
            FieldError::new("email", "Email is required"),
            FieldError::new("phone", "Please provide a valid phone number"),
        ]);
        assert_eq!(err.code, ApiErrorCode::ValidationFailed);
        assert_eq!(err.errors.len(), 2);
        let body = serde_json::to_value(&err).expect("serialize error");
        assert_eq!(body["errors"][1]["field"], "phone");
    }

    #[test]
    fn plain_errors_serialize_without_an_errors_array() {
        let err = ApiError::not_found("Service not found");
        let body = serde_json::to_value(&err).expect("serialize error");
        assert!(body.get("errors").is_none());
    }
}
