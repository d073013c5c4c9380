//! Integration tests for the `/api/v1/journey` endpoints.

mod common;

use axum::http::StatusCode;
use common::{expect_json, get, post_json};
use serde_json::json;

// ---------------------------------------------------------------------------
// Test: GET /journey/steps lists all nine steps in order
// ---------------------------------------------------------------------------

#[tokio::test]
async fn steps_are_listed_in_journey_order() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/journey/steps").await;

    let body = expect_json(response, StatusCode::OK).await;
    let steps = body["data"].as_array().unwrap();

    assert_eq!(steps.len(), 9);
    assert_eq!(steps[0]["number"], 1);
    assert_eq!(steps[0]["label"], "Strategic Canvas");
    assert_eq!(steps[8]["step"], "ai_tools_selection");
}

// ---------------------------------------------------------------------------
// Test: POST /journey/progress computes the dashboard percentage
// ---------------------------------------------------------------------------

#[tokio::test]
async fn progress_for_fresh_project_is_zero() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/api/v1/journey/progress",
        json!({ "current_step": 1 }),
    )
    .await;

    let body = expect_json(response, StatusCode::OK).await;
    assert_eq!(body["data"]["percentage"], 0);
    assert_eq!(body["data"]["step"], "strategic_canvas");
    assert_eq!(body["data"]["step_label"], "Strategic Canvas");
}

#[tokio::test]
async fn progress_counts_optional_process_mapping_as_half() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/api/v1/journey/progress",
        json!({ "current_step": 7 }),
    )
    .await;

    let body = expect_json(response, StatusCode::OK).await;
    // 6/9 complete + half of step 7 -> 72%.
    assert_eq!(body["data"]["percentage"], 72);
}

#[tokio::test]
async fn invalid_step_number_is_rejected() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/api/v1/journey/progress",
        json!({ "current_step": 12 }),
    )
    .await;

    let body = expect_json(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}
