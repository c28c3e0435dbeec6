//! Shared helpers for backend integration tests.
//!
//! Each test binary builds the full application (middleware, routes, default
//! service) around a chosen `StudentRepository` and drives it through
//! `actix_web::test`.

#![allow(dead_code, reason = "each test binary uses a different subset")]

use std::sync::Arc;

use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{test as actix_test, web};
use async_trait::async_trait;
use serde_json::Value;

use students_api::domain::ports::{StudentRepository, TextSanitizer};
use students_api::domain::{Error, Student, StudentDraft, StudentFieldValidator, StudentId};
use students_api::inbound::http::health::HealthState;
use students_api::inbound::http::state::HttpState;
use students_api::outbound::memory::InMemoryStudentRepository;
use students_api::outbound::sanitizer::AmmoniaSanitizer;
use students_api::server::{AppDependencies, build_app};

/// Repository whose every operation fails the way a dropped database
/// connection would.
#[derive(Debug, Default)]
pub struct FailingStudentRepository;

fn driver_failure(operation: &'static str) -> Error {
    Error::storage(operation).with_cause(std::io::Error::other(
        "pq: terminating connection due to administrator command",
    ))
}

#[async_trait]
impl StudentRepository for FailingStudentRepository {
    async fn create(&self, _draft: &StudentDraft) -> Result<StudentId, Error> {
        Err(driver_failure("failed to insert student"))
    }

    async fn find_by_id(&self, _id: StudentId) -> Result<Student, Error> {
        Err(driver_failure("failed to query student"))
    }

    async fn list(&self) -> Result<Vec<Student>, Error> {
        Err(driver_failure("failed to query students"))
    }

    async fn update(&self, _id: StudentId, _draft: &StudentDraft) -> Result<(), Error> {
        Err(driver_failure("failed to update student"))
    }

    async fn delete(&self, _id: StudentId) -> Result<(), Error> {
        Err(driver_failure("failed to delete student"))
    }
}

/// Build application dependencies around `repository`, marked ready.
pub fn dependencies(repository: Arc<dyn StudentRepository>) -> AppDependencies {
    dependencies_with(repository, Arc::new(AmmoniaSanitizer))
}

/// Build application dependencies with an explicit sanitizer.
pub fn dependencies_with(
    repository: Arc<dyn StudentRepository>,
    sanitizer: Arc<dyn TextSanitizer>,
) -> AppDependencies {
    let health_state = web::Data::new(HealthState::new());
    health_state.mark_ready();
    AppDependencies {
        health_state,
        http_state: web::Data::new(HttpState::new(
            repository,
            Arc::new(StudentFieldValidator),
            sanitizer,
        )),
    }
}

/// Initialise the full application backed by a fresh in-memory repository.
pub async fn memory_app()
-> impl Service<actix_http::Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>
{
    actix_test::init_service(build_app(dependencies(Arc::new(
        InMemoryStudentRepository::default(),
    ))))
    .await
}

/// Initialise the full application backed by [`FailingStudentRepository`].
pub async fn failing_app()
-> impl Service<actix_http::Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>
{
    actix_test::init_service(build_app(dependencies(Arc::new(FailingStudentRepository))))
        .await
}

/// Send `request` and decode the JSON response.
pub async fn call_json<S>(app: &S, request: actix_test::TestRequest) -> (StatusCode, Value)
where
    S: Service<actix_http::Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
{
    let response = actix_test::call_service(app, request.to_request()).await;
    let status = response.status();
    let body = actix_test::read_body(response).await;
    let value = serde_json::from_slice(&body).unwrap_or_else(|err| {
        panic!(
            "response body is not JSON ({err}): {}",
            String::from_utf8_lossy(&body)
        )
    });
    (status, value)
}
