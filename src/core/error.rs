//! Typed error handling for the exposure layer
//!
//! Errors carry their HTTP status code and a stable error code so clients
//! can handle them programmatically rather than matching on messages.
//!
//! # Error Categories
//!
//! - [`ResourceError`]: missing records
//! - [`QueryError`]: bad pagination or query parameters
//! - [`ConfigError`]: exposure configuration loading
//!
//! Everything else is folded into `Internal` and surfaces as a 500.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// The main error type for the exposure layer
#[derive(Debug)]
pub enum VitrineError {
    /// Record lookup failures
    Resource(ResourceError),

    /// Query-string and pagination failures
    Query(QueryError),

    /// Configuration failures
    Config(ConfigError),

    /// Anything the layer cannot express more precisely
    Internal(String),
}

/// Errors related to record lookups
#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("{resource_type} not found: {id}")]
    NotFound { resource_type: String, id: Uuid },
}

/// Errors related to query parameters
#[derive(Debug, Error)]
pub enum QueryError {
    /// Fixed message; the offending page number only appears in the details
    #[error("no such page: out of bounds")]
    PageOutOfRange { page: usize, max_page: usize },

    #[error("invalid page number: {raw}")]
    InvalidPage { raw: String },
}

/// Errors related to configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {message}")]
    Io { path: String, message: String },

    #[error("failed to parse config: {message}")]
    Parse { message: String },
}

impl fmt::Display for VitrineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VitrineError::Resource(e) => write!(f, "{}", e),
            VitrineError::Query(e) => write!(f, "{}", e),
            VitrineError::Config(e) => write!(f, "{}", e),
            VitrineError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for VitrineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            VitrineError::Resource(e) => Some(e),
            VitrineError::Query(e) => Some(e),
            VitrineError::Config(e) => Some(e),
            VitrineError::Internal(_) => None,
        }
    }
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl VitrineError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            VitrineError::Resource(ResourceError::NotFound { .. }) => StatusCode::NOT_FOUND,
            VitrineError::Query(QueryError::PageOutOfRange { .. }) => StatusCode::NOT_FOUND,
            VitrineError::Query(QueryError::InvalidPage { .. }) => StatusCode::BAD_REQUEST,
            VitrineError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            VitrineError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the stable error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            VitrineError::Resource(ResourceError::NotFound { .. }) => "RESOURCE_NOT_FOUND",
            VitrineError::Query(QueryError::PageOutOfRange { .. }) => "PAGE_OUT_OF_RANGE",
            VitrineError::Query(QueryError::InvalidPage { .. }) => "INVALID_PAGE",
            VitrineError::Config(_) => "CONFIG_ERROR",
            VitrineError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to an error response body
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            VitrineError::Resource(ResourceError::NotFound { resource_type, id }) => {
                Some(serde_json::json!({
                    "resource_type": resource_type,
                    "id": id.to_string(),
                }))
            }
            VitrineError::Query(QueryError::PageOutOfRange { page, max_page }) => {
                Some(serde_json::json!({
                    "page": page,
                    "max_page": max_page,
                }))
            }
            _ => None,
        }
    }
}

impl IntoResponse for VitrineError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

impl From<ResourceError> for VitrineError {
    fn from(err: ResourceError) -> Self {
        VitrineError::Resource(err)
    }
}

impl From<QueryError> for VitrineError {
    fn from(err: QueryError) -> Self {
        VitrineError::Query(err)
    }
}

impl From<ConfigError> for VitrineError {
    fn from(err: ConfigError) -> Self {
        VitrineError::Config(err)
    }
}

impl From<anyhow::Error> for VitrineError {
    fn from(err: anyhow::Error) -> Self {
        VitrineError::Internal(err.to_string())
    }
}
