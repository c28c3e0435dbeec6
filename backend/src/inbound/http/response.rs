//! JSON response construction shared by handlers, probes and the error
//! translator.

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use serde::Serialize;
use tracing::error;

/// Content type stamped on every JSON body.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

const SERIALISATION_FALLBACK: &str =
    r#"{"status":"Error","error":"an unexpected error occurred"}"#;

/// Serialise `body` into a response with `status`.
///
/// A body that fails to serialise yields a 500 with the generic internal
/// error envelope.
///
/// # Examples
/// ```
/// use actix_web::http::StatusCode;
/// use students_api::inbound::http::response::{JSON_CONTENT_TYPE, json_response};
///
/// let response = json_response(StatusCode::CREATED, &serde_json::json!({"id": 1}));
/// assert_eq!(response.status(), StatusCode::CREATED);
/// assert_eq!(
///     response.headers().get("content-type").and_then(|v| v.to_str().ok()),
///     Some(JSON_CONTENT_TYPE)
/// );
/// ```
pub fn json_response<T>(status: StatusCode, body: &T) -> HttpResponse
where
    T: Serialize + ?Sized,
{
    match serde_json::to_vec(body) {
        Ok(bytes) => HttpResponse::build(status)
            .content_type(JSON_CONTENT_TYPE)
            .body(bytes),
        Err(err) => {
            error!(error = %err, "failed to serialise response body");
            HttpResponse::InternalServerError()
                .content_type(JSON_CONTENT_TYPE)
                .body(SERIALISATION_FALLBACK)
        }
    }
}
