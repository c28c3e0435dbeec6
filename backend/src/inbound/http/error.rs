//! HTTP adapter mapping for domain errors.
//!
//! Handlers raise a domain [`Error`] or a [`ValidationReport`]; this module
//! is the only place that decides status codes and wire messages. Causes are
//! logged with the request's trace id and never reach the client.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::domain::{Error, ErrorKind, ValidationReport};
use crate::middleware::trace::TraceId;

use super::response::json_response;

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Client-facing message for storage failures.
pub const STORAGE_FAILURE_MESSAGE: &str = "database operation failed";
/// Client-facing message for unexpected failures.
pub const INTERNAL_FAILURE_MESSAGE: &str = "an unexpected error occurred";

const ERROR_STATUS: &str = "Error";

/// Error envelope returned for every failed request.
///
/// ```json
/// {"status":"Error","error":"student with id 42 not found"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Always `"Error"`.
    #[schema(example = "Error")]
    pub status: String,
    /// Client-safe description of the failure.
    #[schema(example = "student with id 42 not found")]
    pub error: String,
}

impl ErrorBody {
    /// Wrap a client-safe message in the error envelope.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            status: ERROR_STATUS.to_owned(),
            error: error.into(),
        }
    }
}

/// Failure raised by an HTTP handler.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Classified domain failure.
    #[error(transparent)]
    Domain(#[from] Error),
    /// One or more fields failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationReport),
}

impl From<actix_web::Error> for ApiError {
    fn from(err: actix_web::Error) -> Self {
        Self::Domain(Error::unexpected(err.to_string()))
    }
}

fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::InvalidInput => StatusCode::BAD_REQUEST,
        ErrorKind::Storage | ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Translate a domain error into its status code and client-safe body.
///
/// Not-found and invalid-input messages pass through verbatim; storage and
/// internal failures are replaced by fixed generic messages.
///
/// # Examples
/// ```
/// use actix_web::http::StatusCode;
/// use students_api::domain::Error;
/// use students_api::inbound::http::error::translate;
///
/// let (status, body) = translate(&Error::storage("insert failed"));
/// assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
/// assert_eq!(body.error, "database operation failed");
/// ```
pub fn translate(error: &Error) -> (StatusCode, ErrorBody) {
    let message = match error.kind() {
        kind if kind.is_client_safe() => error.message(),
        ErrorKind::Storage => STORAGE_FAILURE_MESSAGE,
        _ => INTERNAL_FAILURE_MESSAGE,
    };
    (status_for(error.kind()), ErrorBody::new(message))
}

impl ApiError {
    fn log(&self) {
        let trace_id = TraceId::current().map(|id| id.to_string());
        let trace_id = trace_id.as_deref().unwrap_or("-");
        match self {
            Self::Domain(err) => {
                let kind = err.kind().as_str();
                let message = err.message();
                let cause = err.cause().map(ToString::to_string);
                match err.kind() {
                    ErrorKind::Storage | ErrorKind::Internal => {
                        error!(kind, message, cause, trace_id, "request failed");
                    }
                    ErrorKind::InvalidInput => {
                        warn!(kind, message, cause, trace_id, "request rejected");
                    }
                    ErrorKind::NotFound => info!(kind, message, trace_id, "resource not found"),
                }
            }
            Self::Validation(report) => {
                warn!(
                    kind = ErrorKind::InvalidInput.as_str(),
                    message = %report,
                    trace_id,
                    "request failed validation"
                );
            }
        }
    }

    fn translate(&self) -> (StatusCode, ErrorBody) {
        match self {
            Self::Domain(err) => translate(err),
            Self::Validation(report) => (StatusCode::BAD_REQUEST, ErrorBody::new(report.to_string())),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.translate().0
    }

    fn error_response(&self) -> HttpResponse {
        self.log();
        let (status, body) = self.translate();
        json_response(status, &body)
    }
}

/// Fallback service for requests that match no route.
pub async fn route_not_found() -> HttpResponse {
    json_response(StatusCode::NOT_FOUND, &ErrorBody::new("route not found"))
}
