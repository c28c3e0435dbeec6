//! Request decoding for the students endpoints.
//!
//! Bodies are read from the raw payload stream so that oversized bodies,
//! empty bodies, malformed JSON and malformed path ids each surface as an
//! [`ApiError`] instead of an extractor rejection rendered by the framework.

use actix_web::web;
use futures_util::StreamExt;
use serde::de::DeserializeOwned;

use crate::domain::{Error, StudentId};
use crate::inbound::http::{ApiError, ApiResult};

/// Largest request body the students routes accept.
pub const MAX_BODY_BYTES: usize = 256 * 1024;

/// Collect a request payload of at most `limit` bytes.
///
/// # Errors
/// - `"request body is too large"` once the body grows past `limit`.
/// - Transport failures while reading the stream are wrapped as internal
///   errors.
pub async fn read_body(mut payload: web::Payload, limit: usize) -> ApiResult<web::BytesMut> {
    let mut body = web::BytesMut::new();
    while let Some(chunk) = payload.next().await {
        let chunk = chunk.map_err(|err| ApiError::from(actix_web::Error::from(err)))?;
        if body.len() + chunk.len() > limit {
            return Err(Error::invalid_input("request body is too large").into());
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body)
}

/// Decode a JSON request body.
///
/// # Errors
/// - `"request body is empty"` when the body has no bytes or only whitespace.
/// - `"invalid JSON format"` when the bytes are not JSON of the expected
///   shape, including fields of the wrong JSON type.
///
/// # Examples
/// ```
/// use students_api::domain::StudentInput;
/// use students_api::inbound::http::payload::decode_json;
///
/// let input: StudentInput = decode_json(br#"{"name":"Al"}"#).expect("valid JSON");
/// assert_eq!(input.name.as_deref(), Some("Al"));
///
/// let err = decode_json::<StudentInput>(b"  ").expect_err("blank body");
/// assert_eq!(err.message(), "request body is empty");
/// ```
pub fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, Error> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(Error::invalid_input("request body is empty"));
    }
    serde_json::from_slice(body)
        .map_err(|err| Error::invalid_input("invalid JSON format").with_cause(err))
}

/// Parse the `{id}` path segment.
pub fn parse_student_id(raw: &str) -> Result<StudentId, Error> {
    raw.parse::<i64>()
        .map(StudentId::new)
        .map_err(|err| Error::invalid_input("invalid student id").with_cause(err))
}
