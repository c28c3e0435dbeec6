//! Storage failures surface as a generic 500 on every operation.

mod support;

use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use rstest::rstest;
use serde_json::json;

use support::{call_json, failing_app};

fn valid_body() -> serde_json::Value {
    json!({"name": "Al", "email": "a@b.com", "age": 30})
}

#[rstest]
#[case(actix_test::TestRequest::post().uri("/students").set_json(valid_body()))]
#[case(actix_test::TestRequest::get().uri("/students"))]
#[case(actix_test::TestRequest::get().uri("/students/1"))]
#[case(actix_test::TestRequest::put().uri("/students/1").set_json(valid_body()))]
#[case(actix_test::TestRequest::delete().uri("/students/1"))]
#[case(actix_test::TestRequest::get().uri("/api/students"))]
#[actix_web::test]
async fn storage_failures_hide_driver_text(#[case] request: actix_test::TestRequest) {
    let app = failing_app().await;
    let (status, body) = call_json(&app, request).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({"status": "Error", "error": "database operation failed"})
    );
    assert!(!body.to_string().contains("pq:"));
}

#[rstest]
#[actix_web::test]
async fn client_errors_win_before_storage_is_reached() {
    let app = failing_app().await;

    let (status, body) = call_json(
        &app,
        actix_test::TestRequest::post()
            .uri("/students")
            .set_json(json!({"name": "Al", "email": "a@b.com", "age": 0})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "field Age is invalid");

    let (status, body) =
        call_json(&app, actix_test::TestRequest::delete().uri("/students/x")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "invalid student id");
}

#[rstest]
#[actix_web::test]
async fn health_probes_do_not_touch_storage() {
    let app = failing_app().await;
    let (status, body) = call_json(&app, actix_test::TestRequest::get().uri("/health/ready")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "OK"}));
}
