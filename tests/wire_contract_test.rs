//! Wire-contract suite
//!
//! Drives the full router and checks that every failure lane ends in one
//! of the two structured error shapes, with the right status and the
//! request URI as the failing instance.

mod common;

use axum::http::{Request, StatusCode};
use common::{get, json_request, send, test_app};
use pretty_assertions::assert_eq;

#[tokio::test]
async fn a_generic_error_answers_the_secondary_shape() {
    let (status, body) = send(test_app(), get("/mock/error")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["status"], 500);
    assert_eq!(body["title"], "Internal Server Error");
    assert_eq!(body["detail"], "This is a test error!");
    assert_eq!(body["instance"], "/mock/error");
}

#[tokio::test]
async fn a_typed_error_answers_its_own_body() {
    let request = json_request("POST", "/mock/customerror", serde_json::json!({}));
    let (status, body) = send(test_app(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);
    assert_eq!(body["type"], "/errors/validation-error");
    assert_eq!(body["title"], "Field is invalid");
    assert_eq!(body["instance"], "/mock/customerror");
}

#[tokio::test]
async fn a_unique_violation_answers_a_conflict() {
    let (status, body) = send(test_app(), get("/mock/pgerror")).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["status"], 409);
    assert_eq!(body["type"], "/errors/conflict");
    assert_eq!(body["instance"], "/mock/pgerror");
}

#[tokio::test]
async fn a_non_error_failure_answers_the_fixed_generic_detail() {
    let (status, body) = send(test_app(), get("/mock/unerror")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["status"], 500);
    assert_eq!(body["title"], "Internal Server Error");
    assert_eq!(body["detail"], "An unknown error occurred");
    assert_eq!(body["instance"], "/mock/unerror");
}

#[tokio::test]
async fn a_schema_failure_lists_each_issue_path_first() {
    let (status, body) = send(test_app(), get("/mock/zoderror")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let issues = body["issues"].as_array().expect("issues array");
    assert_eq!(issues.len(), 1);
    let message = issues[0]["message"].as_str().expect("issue message");
    assert!(message.starts_with("names is "), "unexpected message: {message}");
}

#[tokio::test]
async fn an_unmatched_route_answers_404_with_the_full_path() {
    let (status, body) = send(test_app(), get("/admin/new?a=b")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["type"], "/errors/route-not-found");
    assert_eq!(body["instance"], "/admin/new?a=b");
    let detail = body["detail"].as_str().expect("detail");
    assert!(detail.contains("/admin/new?a=b"));
}

#[tokio::test]
async fn blank_update_fields_fail_before_the_store() {
    let request = json_request(
        "PUT",
        "/users",
        serde_json::json!({"id": "", "newPassword": "x"}),
    );
    let (status, body) = send(test_app(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["type"], "/errors/validation-error");
    let detail = body["detail"].as_str().expect("detail");
    assert!(detail.contains("Update user fields"), "unexpected detail: {detail}");
    assert_eq!(body["instance"], "/users");
}

#[tokio::test]
async fn rule_breaking_registrations_report_every_issue() {
    let request = json_request(
        "POST",
        "/users/register",
        serde_json::json!({
            "firstName": "A",
            "lastName": "Nowak",
            "email": "bad",
            "password": "123"
        }),
    );
    let (status, body) = send(test_app(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let issues = body["issues"].as_array().expect("issues array");
    // first_name and password fail one rule each, email fails two
    assert_eq!(issues.len(), 4);
    for issue in issues {
        let message = issue["message"].as_str().expect("issue message");
        assert!(message.contains(" is "), "not path-first: {message}");
    }
}

#[tokio::test]
async fn an_unreadable_body_is_a_bad_request() {
    let request = Request::builder()
        .method("POST")
        .uri("/users/login")
        .header("content-type", "application/json")
        .body(axum::body::Body::from("{not json"))
        .expect("request builds");
    let (status, body) = send(test_app(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["type"], "/errors/bad-request-error");
    assert_eq!(body["instance"], "/users/login");
}

#[tokio::test]
async fn the_banner_round_trips_the_success_envelope() {
    let (status, body) = send(test_app(), get("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["innerBodyData"]["info"],
        "VetDesk API over Axum and Postgres"
    );
    assert!(body.get("message").is_none());
}

#[tokio::test]
async fn store_failures_surface_as_the_secondary_shape() {
    // The test pool points at a closed port, so the first checkout fails
    let (status, body) = send(test_app(), get("/users/all")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["status"], 500);
    assert_eq!(body["title"], "Internal Server Error");
    assert_eq!(body["instance"], "/users/all");
}

#[tokio::test]
async fn error_replies_carry_the_cors_headers() {
    let request = Request::builder()
        .method("GET")
        .uri("/mock/error")
        .header("origin", "http://localhost:5173")
        .body(axum::body::Body::empty())
        .expect("request builds");
    let response = tower::ServiceExt::oneshot(test_app(), request)
        .await
        .expect("router is infallible");
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|value| value.to_str().ok()),
        Some("http://localhost:5173")
    );
}
