//! # REST API Errors
//!
//! Error types for the REST layer, mapped onto HTTP status codes.
//!
//! Response bodies follow the API contract:
//! - Validation failures carry the per-field error map
//! - Authentication/authorization failures and missing resources
//!   carry no body
//! - Server errors carry a `{error, code}` JSON body

use std::collections::BTreeMap;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::auth::AuthError;

/// Result type for REST operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Per-field validation error map
///
/// Keys are field names; `BTreeMap` keeps the serialized order
/// deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error for a field
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the message recorded for a field
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// REST API errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Submitted fields failed validation
    #[error("Validation failed")]
    Validation(FieldErrors),

    /// Resource not found
    #[error("Resource not found")]
    NotFound,

    // ==================
    // Auth Errors
    // ==================
    /// Authentication or authorization error
    #[error("{0}")]
    Auth(#[from] AuthError),

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Internal error during request execution
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 400 Bad Request
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,

            // 404 Not Found
            ApiError::NotFound => StatusCode::NOT_FOUND,

            // 401/403 from auth
            ApiError::Auth(auth_err) => {
                StatusCode::from_u16(auth_err.status_code()).unwrap_or(StatusCode::UNAUTHORIZED)
            }

            // 500 Internal Server Error
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body for server errors
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            // Field errors are the body, keyed by field name
            ApiError::Validation(errors) => (status, Json(errors)).into_response(),

            // Auth failures and missing resources carry no body
            ApiError::Auth(_) | ApiError::NotFound => status.into_response(),

            ApiError::Internal(msg) => {
                let body = ErrorResponse {
                    code: status.as_u16(),
                    error: format!("Internal error: {}", msg),
                };
                (status, Json(body)).into_response()
            }
        }
    }
}
