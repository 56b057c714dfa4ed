//! Server-specific error types

use axum::extract::rejection::BytesRejection;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    BadRequest(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Request body exceeds {limit_mb} MB")]
    PayloadTooLarge { limit_mb: usize },

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ServerError {
    /// Short label used for error metrics
    pub fn kind(&self) -> &'static str {
        match self {
            ServerError::Config(_) => "config",
            ServerError::Io(_) => "io",
            ServerError::BadRequest(_) => "bad_request",
            ServerError::MethodNotAllowed => "method_not_allowed",
            ServerError::PayloadTooLarge { .. } => "payload_too_large",
            ServerError::Internal(_) => "internal",
        }
    }

    /// Map a body extraction failure. Only an exceeded length limit is the
    /// caller's size problem; anything else is a malformed request.
    pub fn from_body_rejection(rejection: BytesRejection, limit_mb: usize) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ServerError::PayloadTooLarge { limit_mb }
        } else {
            ServerError::BadRequest(rejection.body_text())
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ServerError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(serde_json::json!({ "error": self.to_string() }));

        let mut response = (status, body).into_response();
        if matches!(self, ServerError::MethodNotAllowed) {
            response
                .headers_mut()
                .insert(header::ALLOW, HeaderValue::from_static("POST"));
        }
        response
    }
}
