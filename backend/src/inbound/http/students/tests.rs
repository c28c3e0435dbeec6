//! Handler tests driving the students routes against mocked ports.

use std::sync::Arc;

use actix_web::{App, test as actix_test, web};
use mockall::predicate::eq;
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::domain::ports::{
    MockStudentRepository, MockStudentValidator, MockTextSanitizer, PassthroughSanitizer,
    StudentRepository, StudentValidator, TextSanitizer,
};
use crate::domain::{Error, FieldViolation, Student, StudentFieldValidator, ValidationReport};

fn state_with(
    students: impl StudentRepository + 'static,
    validator: impl StudentValidator + 'static,
    sanitizer: impl TextSanitizer + 'static,
) -> web::Data<HttpState> {
    web::Data::new(HttpState::new(
        Arc::new(students),
        Arc::new(validator),
        Arc::new(sanitizer),
    ))
}

fn repo_only(students: MockStudentRepository) -> web::Data<HttpState> {
    state_with(students, StudentFieldValidator, PassthroughSanitizer)
}

fn test_app(
    state: web::Data<HttpState>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new().app_data(state).configure(configure)
}

async fn send(state: web::Data<HttpState>, request: actix_test::TestRequest) -> (StatusCode, Value) {
    let app = actix_test::init_service(test_app(state)).await;
    let response = actix_test::call_service(&app, request.to_request()).await;
    let status = response.status();
    let body = actix_test::read_body(response).await;
    let value = serde_json::from_slice(&body).expect("JSON body");
    (status, value)
}

fn valid_body() -> Value {
    json!({"name": "Al", "email": "a@b.com", "age": 30})
}

fn stored(id: i64) -> Student {
    Student::new(StudentId::new(id), StudentDraft::new("Al", "a@b.com", 30))
}

#[rstest]
#[actix_web::test]
async fn create_returns_201_with_id() {
    let mut repo = MockStudentRepository::new();
    repo.expect_create()
        .withf(|draft| draft == &StudentDraft::new("Al", "a@b.com", 30))
        .times(1)
        .return_once(|_| Ok(StudentId::new(1)));

    let (status, body) = send(
        repo_only(repo),
        actix_test::TestRequest::post().uri("/students").set_json(valid_body()),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"id": 1}));
}

#[rstest]
#[actix_web::test]
async fn create_sanitizes_then_revalidates() {
    let mut validator = MockStudentValidator::new();
    validator
        .expect_validate()
        .withf(|input| input.name.as_deref() == Some("<b>Al</b>"))
        .times(1)
        .return_once(|_| Ok(StudentDraft::new("<b>Al</b>", "a@b.com", 30)));
    validator
        .expect_validate()
        .withf(|input| input.name.as_deref() == Some("Al"))
        .times(1)
        .return_once(|_| Ok(StudentDraft::new("Al", "a@b.com", 30)));
    let mut sanitizer = MockTextSanitizer::new();
    sanitizer
        .expect_sanitize()
        .times(2)
        .returning(|text| text.replace("<b>", "").replace("</b>", ""));
    let mut repo = MockStudentRepository::new();
    repo.expect_create()
        .withf(|draft| draft.name() == "Al")
        .times(1)
        .return_once(|_| Ok(StudentId::new(7)));

    let (status, body) = send(
        state_with(repo, validator, sanitizer),
        actix_test::TestRequest::post()
            .uri("/students")
            .set_json(json!({"name": "<b>Al</b>", "email": "a@b.com", "age": 30})),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"id": 7}));
}

#[rstest]
#[case(actix_test::TestRequest::post().uri("/students").set_json(valid_body()))]
#[case(actix_test::TestRequest::put().uri("/students/1").set_json(valid_body()))]
#[actix_web::test]
async fn fields_emptied_by_sanitizer_are_rejected(#[case] request: actix_test::TestRequest) {
    let mut sanitizer = MockTextSanitizer::new();
    sanitizer
        .expect_sanitize()
        .returning(|text| if text == "Al" { String::new() } else { text.to_owned() });
    let mut repo = MockStudentRepository::new();
    repo.expect_create().never();
    repo.expect_update().never();

    let (status, body) = send(state_with(repo, StudentFieldValidator, sanitizer), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"status": "Error", "error": "field Name is required field"})
    );
}

#[rstest]
#[case("", "request body is empty")]
#[case("  \n ", "request body is empty")]
#[case(r#"{"name":"Al""#, "invalid JSON format")]
#[case(r#"{"name":1,"email":"a@b.com","age":30}"#, "invalid JSON format")]
#[actix_web::test]
async fn create_rejects_undecodable_bodies_before_storage(
    #[case] payload: &'static str,
    #[case] message: &str,
) {
    let mut repo = MockStudentRepository::new();
    repo.expect_create().never();

    let (status, body) = send(
        repo_only(repo),
        actix_test::TestRequest::post()
            .uri("/students")
            .insert_header(("content-type", "application/json"))
            .set_payload(payload),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"status": "Error", "error": message}));
}

#[rstest]
#[actix_web::test]
async fn validation_failures_skip_sanitizer_and_storage() {
    let mut validator = MockStudentValidator::new();
    validator.expect_validate().times(1).return_once(|_| {
        Err(ValidationReport::new(vec![
            FieldViolation::required("Name"),
            FieldViolation::invalid("Age"),
        ]))
    });
    let mut sanitizer = MockTextSanitizer::new();
    sanitizer.expect_sanitize().never();
    let mut repo = MockStudentRepository::new();
    repo.expect_create().never();

    let (status, body) = send(
        state_with(repo, validator, sanitizer),
        actix_test::TestRequest::post().uri("/students").set_json(valid_body()),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "field Name is required field, field Age is invalid"
    );
}

#[rstest]
#[actix_web::test]
async fn get_returns_student() {
    let mut repo = MockStudentRepository::new();
    repo.expect_find_by_id()
        .with(eq(StudentId::new(1)))
        .times(1)
        .return_once(|_| Ok(stored(1)));

    let (status, body) = send(
        repo_only(repo),
        actix_test::TestRequest::get().uri("/students/1"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"id": 1, "name": "Al", "email": "a@b.com", "age": 30})
    );
}

#[rstest]
#[case(actix_test::TestRequest::get().uri("/students/abc"))]
#[case(actix_test::TestRequest::delete().uri("/students/1.5"))]
#[case(actix_test::TestRequest::put().uri("/students/x").set_json(valid_body()))]
#[actix_web::test]
async fn malformed_ids_are_rejected(#[case] request: actix_test::TestRequest) {
    let (status, body) = send(repo_only(MockStudentRepository::new()), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid student id");
}

#[rstest]
#[actix_web::test]
async fn list_returns_array() {
    let mut repo = MockStudentRepository::new();
    repo.expect_list()
        .times(1)
        .return_once(|| Ok(vec![stored(1), stored(2)]));

    let (status, body) = send(repo_only(repo), actix_test::TestRequest::get().uri("/students")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(2));
}

#[rstest]
#[actix_web::test]
async fn update_returns_message() {
    let mut repo = MockStudentRepository::new();
    repo.expect_update()
        .withf(|id, draft| id.get() == 3 && draft.age() == 30)
        .times(1)
        .return_once(|_, _| Ok(()));

    let (status, body) = send(
        repo_only(repo),
        actix_test::TestRequest::put().uri("/students/3").set_json(valid_body()),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": UPDATED_MESSAGE}));
}

#[rstest]
#[actix_web::test]
async fn delete_returns_message() {
    let mut repo = MockStudentRepository::new();
    repo.expect_delete()
        .with(eq(StudentId::new(3)))
        .times(1)
        .return_once(|_| Ok(()));

    let (status, body) = send(
        repo_only(repo),
        actix_test::TestRequest::delete().uri("/students/3"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": DELETED_MESSAGE}));
}

#[rstest]
#[actix_web::test]
async fn missing_student_maps_to_404() {
    let mut repo = MockStudentRepository::new();
    repo.expect_delete()
        .return_once(|id| Err(Error::student_not_found(id)));

    let (status, body) = send(
        repo_only(repo),
        actix_test::TestRequest::delete().uri("/students/42"),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({"status": "Error", "error": "student with id 42 not found"})
    );
}

#[rstest]
#[actix_web::test]
async fn storage_failures_hide_driver_text() {
    let mut repo = MockStudentRepository::new();
    repo.expect_list().return_once(|| {
        Err(Error::storage("failed to query students")
            .with_cause(std::io::Error::other("pq: connection reset by peer")))
    });

    let (status, body) = send(repo_only(repo), actix_test::TestRequest::get().uri("/students")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({"status": "Error", "error": "database operation failed"})
    );
}
