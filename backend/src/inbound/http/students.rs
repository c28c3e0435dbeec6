//! Students API handlers.
//!
//! ```text
//! POST   /students        {"name":"Al","email":"a@b.com","age":30}
//! GET    /students
//! GET    /students/{id}
//! PUT    /students/{id}   {"name":"Al","email":"a@b.com","age":31}
//! DELETE /students/{id}
//! ```
//!
//! Every handler runs the same stages: decode, validate, sanitize, one
//! repository call, respond. Any stage may short-circuit with an
//! [`ApiError`](super::ApiError).

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{StudentDraft, StudentId, StudentInput};
use crate::inbound::http::ApiResult;
use crate::inbound::http::ErrorBody;
use crate::inbound::http::payload::{MAX_BODY_BYTES, decode_json, parse_student_id, read_body};
use crate::inbound::http::response::json_response;
use crate::inbound::http::schemas::{StudentInputSchema, StudentSchema};
use crate::inbound::http::state::HttpState;

/// Message returned after a successful update.
pub const UPDATED_MESSAGE: &str = "student updated successfully";
/// Message returned after a successful delete.
pub const DELETED_MESSAGE: &str = "student deleted successfully";

/// Body returned by `POST /students`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreatedResponse {
    #[schema(value_type = i64, example = 1)]
    pub id: StudentId,
}

/// Body returned by update and delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "student updated successfully")]
    pub message: String,
}

impl MessageResponse {
    fn new(message: &str) -> Self {
        Self {
            message: message.to_owned(),
        }
    }
}

/// Validate decoded input and sanitize the free-text fields of the result.
///
/// Sanitizing can shorten, empty or escape a field, so the cleaned draft is
/// validated again before it may reach storage.
fn accept(state: &HttpState, input: StudentInput) -> ApiResult<StudentDraft> {
    let draft = state.validator.validate(input)?;
    let cleaned = draft.map_text(|text| state.sanitizer.sanitize(text));
    state.validator.validate(cleaned.into()).map_err(Into::into)
}

/// Register the students routes on `cfg`.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use students_api::inbound::http::students::configure;
///
/// let app = App::new()
///     .configure(configure)
///     .service(web::scope("/api").configure(configure));
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(create_student)
        .service(list_students)
        .service(get_student)
        .service(update_student)
        .service(delete_student);
}

/// Create a student.
#[utoipa::path(
    post,
    path = "/students",
    request_body = StudentInputSchema,
    responses(
        (status = 201, description = "Student created", body = CreatedResponse),
        (status = 400, description = "Empty, oversized or malformed body, or failed validation", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    ),
    tags = ["students"],
    operation_id = "createStudent"
)]
#[post("/students")]
pub async fn create_student(
    state: web::Data<HttpState>,
    payload: web::Payload,
) -> ApiResult<HttpResponse> {
    let body = read_body(payload, MAX_BODY_BYTES).await?;
    let input: StudentInput = decode_json(&body)?;
    let draft = accept(&state, input)?;
    let id = state.students.create(&draft).await?;
    Ok(json_response(StatusCode::CREATED, &CreatedResponse { id }))
}

/// List every student.
#[utoipa::path(
    get,
    path = "/students",
    responses(
        (status = 200, description = "All students, possibly empty", body = [StudentSchema]),
        (status = 500, description = "Storage failure", body = ErrorBody)
    ),
    tags = ["students"],
    operation_id = "listStudents"
)]
#[get("/students")]
pub async fn list_students(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let students = state.students.list().await?;
    Ok(json_response(StatusCode::OK, &students))
}

/// Fetch one student.
#[utoipa::path(
    get,
    path = "/students/{id}",
    params(("id" = i64, Path, description = "Student identifier")),
    responses(
        (status = 200, description = "Student", body = StudentSchema),
        (status = 400, description = "Malformed id", body = ErrorBody),
        (status = 404, description = "No such student", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    ),
    tags = ["students"],
    operation_id = "getStudent"
)]
#[get("/students/{id}")]
pub async fn get_student(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_student_id(&path)?;
    let student = state.students.find_by_id(id).await?;
    Ok(json_response(StatusCode::OK, &student))
}

/// Replace every field of a student.
#[utoipa::path(
    put,
    path = "/students/{id}",
    params(("id" = i64, Path, description = "Student identifier")),
    request_body = StudentInputSchema,
    responses(
        (status = 200, description = "Student updated", body = MessageResponse),
        (status = 400, description = "Malformed id, body or fields", body = ErrorBody),
        (status = 404, description = "No such student", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    ),
    tags = ["students"],
    operation_id = "updateStudent"
)]
#[put("/students/{id}")]
pub async fn update_student(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Payload,
) -> ApiResult<HttpResponse> {
    let id = parse_student_id(&path)?;
    let body = read_body(payload, MAX_BODY_BYTES).await?;
    let input: StudentInput = decode_json(&body)?;
    let draft = accept(&state, input)?;
    state.students.update(id, &draft).await?;
    Ok(json_response(
        StatusCode::OK,
        &MessageResponse::new(UPDATED_MESSAGE),
    ))
}

/// Remove a student.
#[utoipa::path(
    delete,
    path = "/students/{id}",
    params(("id" = i64, Path, description = "Student identifier")),
    responses(
        (status = 200, description = "Student deleted", body = MessageResponse),
        (status = 400, description = "Malformed id", body = ErrorBody),
        (status = 404, description = "No such student", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    ),
    tags = ["students"],
    operation_id = "deleteStudent"
)]
#[delete("/students/{id}")]
pub async fn delete_student(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_student_id(&path)?;
    state.students.delete(id).await?;
    Ok(json_response(
        StatusCode::OK,
        &MessageResponse::new(DELETED_MESSAGE),
    ))
}

#[cfg(test)]
mod tests;
