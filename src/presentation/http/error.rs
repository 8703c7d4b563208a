use crate::domain::errors::{DomainError, DomainResult, ErrorKind};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Translates a domain error kind into its transport status.
pub const fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Conflict => StatusCode::CONFLICT,
        ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// How the message is rendered on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Body {
    /// `{"message": "..."}`
    Envelope,
    /// The message alone, as a JSON string.
    Bare,
}

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
    body: Body,
}

impl HttpError {
    pub fn from_error(err: DomainError) -> Self {
        Self::new(status_for(err.kind()), err.to_string(), Body::Envelope)
    }

    /// Request body parsed but failed structural checks. Rendered as a bare
    /// JSON string.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, msg.into(), Body::Bare)
    }

    /// Request body could not be parsed at all. Rendered as a bare JSON string.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, msg.into(), Body::Bare)
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, msg.into(), Body::Envelope)
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, msg.into(), Body::Envelope)
    }

    const fn new(status: StatusCode, message: String, body: Body) -> Self {
        Self {
            status,
            message,
            body,
        }
    }

    pub const fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<DomainError> for HttpError {
    fn from(err: DomainError) -> Self {
        Self::from_error(err)
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = self.status.as_u16(), message = %self.message, "request failed");
        } else {
            tracing::warn!(status = self.status.as_u16(), message = %self.message, "request rejected");
        }

        match self.body {
            Body::Envelope => {
                let payload = ErrorResponse {
                    message: self.message,
                };
                (self.status, Json(payload)).into_response()
            }
            Body::Bare => (self.status, Json(self.message)).into_response(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub message: String,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for DomainResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}
