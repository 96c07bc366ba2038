use std::collections::BTreeMap;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;

/// Per-field validation messages, keyed by the wire name of the field.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[cfg(test)]
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// Reads a string field. Null or missing reads as empty; any other type is recorded.
    pub fn string(&mut self, field: &str, value: Value) -> Option<String> {
        match value {
            Value::Null => Some(String::new()),
            Value::String(s) => Some(s),
            other => {
                self.push(field, expected("string", &other));
                None
            }
        }
    }

    /// Reads a list of strings. Null or missing reads as empty.
    pub fn string_list(&mut self, field: &str, value: Value) -> Option<Vec<String>> {
        let items = match value {
            Value::Null => return Some(Vec::new()),
            Value::Array(items) => items,
            other => {
                self.push(field, expected("array", &other));
                return None;
            }
        };

        let mut strings = Vec::with_capacity(items.len());
        for (i, item) in items.into_iter().enumerate() {
            match item {
                Value::String(s) => strings.push(s),
                other => {
                    self.push(field, format!("{} at index {i}", expected("string", &other)));
                    return None;
                }
            }
        }
        Some(strings)
    }

    /// Returns `Ok(value)` when no errors were recorded.
    pub fn into_result<T>(self, value: T) -> Result<T, AppError> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(AppError::InvalidFields(self))
        }
    }
}

fn expected(wanted: &str, got: &Value) -> String {
    let kind = match got {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    };
    format!("Expected {wanted}, received {kind}")
}

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Validation failed: {0:?}")]
    InvalidFields(FieldErrors),

    #[error("AI service unavailable")]
    AiUnavailable,

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": { "code": "VALIDATION_ERROR", "message": msg } }),
            ),
            AppError::InvalidFields(fields) => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": {
                        "code": "VALIDATION_ERROR",
                        "message": "Validation error",
                        "fields": fields
                    }
                }),
            ),
            AppError::AiUnavailable => {
                tracing::error!("AI request received but no provider is configured");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": {
                            "code": "AI_UNAVAILABLE",
                            "message": "AI service is not available right now"
                        }
                    }),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": {
                            "code": "INTERNAL_ERROR",
                            "message": "An internal server error occurred"
                        }
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_errors_groups_messages_by_field() {
        let mut errors = FieldErrors::new();
        errors.push("email", "Invalid email");
        errors.push("email", "Too long");
        errors.push("name", "Too short");

        assert_eq!(errors.get("email").unwrap().len(), 2);
        assert_eq!(errors.get("name").unwrap(), ["Too short".to_string()]);
        assert!(errors.get("message").is_none());
    }

    #[test]
    fn test_string_field_reports_wrong_type() {
        let mut errors = FieldErrors::new();
        assert_eq!(errors.string("name", json!("Ada")), Some("Ada".to_string()));
        assert_eq!(errors.string("email", Value::Null), Some(String::new()));
        assert!(errors.is_empty());

        assert_eq!(errors.string("name", json!(42)), None);
        assert_eq!(
            errors.get("name").unwrap(),
            ["Expected string, received number".to_string()]
        );
    }

    #[test]
    fn test_string_list_field_reports_wrong_type() {
        let mut errors = FieldErrors::new();
        assert_eq!(
            errors.string_list("skills", json!(["Rust", "Go"])),
            Some(vec!["Rust".to_string(), "Go".to_string()])
        );
        assert_eq!(errors.string_list("skills", Value::Null), Some(vec![]));
        assert!(errors.is_empty());

        assert_eq!(errors.string_list("skills", json!("Rust")), None);
        assert_eq!(errors.string_list("interests", json!(["ok", 7])), None);
        assert_eq!(
            errors.get("skills").unwrap(),
            ["Expected array, received string".to_string()]
        );
        assert_eq!(
            errors.get("interests").unwrap(),
            ["Expected string, received number at index 1".to_string()]
        );
    }

    #[test]
    fn test_field_errors_into_result() {
        assert_eq!(FieldErrors::new().into_result(7).unwrap(), 7);

        let mut errors = FieldErrors::new();
        errors.push("skill", "required");
        assert!(matches!(
            errors.into_result(()),
            Err(AppError::InvalidFields(_))
        ));
    }

    #[test]
    fn test_status_codes() {
        let mut errors = FieldErrors::new();
        errors.push("name", "required");
        assert_eq!(
            AppError::InvalidFields(errors).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::AiUnavailable.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::Internal(anyhow::anyhow!("boom"))
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_field_errors_serialize_as_plain_map() {
        let mut errors = FieldErrors::new();
        errors.push("message", "String must contain at least 10 character(s)");
        let value = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            value["message"][0],
            "String must contain at least 10 character(s)"
        );
    }
}
