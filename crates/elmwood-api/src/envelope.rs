// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Which tier answered a content read. Informational only; callers must not
/// branch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
    Database,
    Static,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub pages: u64,
}

impl Pagination {
    #[must_use]
    pub fn new(page: u64, limit: u64, total: u64) -> Self {
        let pages = if limit == 0 { 0 } else { total.div_ceil(limit) };
        Self {
            page,
            limit,
            total,
            pages,
        }
    }
}

/// The uniform response body. One shape for success and failure keeps the
/// frontend's fetch wrapper trivial.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Value>,
}

impl Envelope {
    #[must_use]
    pub fn ok(message: impl Into<String>, data: Value) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            pagination: None,
            source: None,
            errors: None,
        }
    }

    #[must_use]
    pub fn sourced(message: impl Into<String>, data: Value, source: Source) -> Self {
        Self {
            source: Some(source),
            ..Self::ok(message, data)
        }
    }

    #[must_use]
    pub fn paginated(message: impl Into<String>, data: Value, pagination: Pagination) -> Self {
        Self {
            pagination: Some(pagination),
            ..Self::ok(message, data)
        }
    }

    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            pagination: None,
            source: None,
            errors: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_envelope_omits_absent_fields() {
        let env = Envelope::ok("Done", json!({"id": 1}));
        let body = serde_json::to_value(&env).expect("serialize envelope");
        assert_eq!(body["success"], json!(true));
        assert!(body.get("pagination").is_none());
        assert!(body.get("source").is_none());
        assert!(body.get("errors").is_none());
    }

    #[test]
    fn source_tag_uses_wire_names() {
        let env = Envelope::sourced("Done", json!([]), Source::Static);
        let body = serde_json::to_value(&env).expect("serialize envelope");
        assert_eq!(body["source"], json!("static"));
    }

    #[test]
    fn pagination_rounds_pages_up() {
        let p = Pagination::new(1, 20, 41);
        assert_eq!(p.pages, 3);
        assert_eq!(Pagination::new(1, 20, 40).pages, 2);
        assert_eq!(Pagination::new(1, 20, 0).pages, 0);
    }
}
