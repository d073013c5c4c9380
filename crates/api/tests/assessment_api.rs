//! Integration tests for the `/api/v1/assessment` endpoints.

mod common;

use axum::http::StatusCode;
use common::{expect_json, post_json};
use serde_json::json;

fn triage_task() -> serde_json::Value {
    json!({
        "id": "t1",
        "workflow_id": "w1",
        "name": "Triage",
        "description": "Categorize incoming email text",
        "predictability": 5,
        "data_availability": 5,
        "complexity": 2,
        "frequency": 5
    })
}

// ---------------------------------------------------------------------------
// Test: POST /assessment/score computes the canonical score
// ---------------------------------------------------------------------------

#[tokio::test]
async fn score_returns_rounded_potential() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/api/v1/assessment/score",
        json!({ "task": triage_task() }),
    )
    .await;

    let body = expect_json(response, StatusCode::OK).await;
    // (5*0.3 + 5*0.3 + 4*0.2 + 5*0.2) * 2 = 9.6 -> 9.5
    assert_eq!(body["data"]["ai_potential"], 9.5);
    assert_eq!(body["data"]["task_id"], "t1");
}

// ---------------------------------------------------------------------------
// Test: out-of-range ratings are rejected with 400
// ---------------------------------------------------------------------------

#[tokio::test]
async fn out_of_range_rating_is_rejected() {
    let mut task = triage_task();
    task["predictability"] = json!(9);

    let app = common::build_test_app();
    let response = post_json(app, "/api/v1/assessment/score", json!({ "task": task })).await;

    let body = expect_json(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Test: malformed body is rejected by the extractor
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_task_body_is_rejected() {
    let app = common::build_test_app();
    let response = post_json(app, "/api/v1/assessment/score", json!({})).await;

    // Axum's Json extractor rejects the body before the handler runs.
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// ---------------------------------------------------------------------------
// Test: POST /assessment/workflows/analyze end-to-end insight
// ---------------------------------------------------------------------------

#[tokio::test]
async fn workflow_analysis_produces_insight() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/api/v1/assessment/workflows/analyze",
        json!({
            "workflows": [{ "id": "w1", "name": "Support" }],
            "tasks": [triage_task()]
        }),
    )
    .await;

    let body = expect_json(response, StatusCode::OK).await;
    let insight = &body["data"][0];

    assert_eq!(insight["workflow_id"], "w1");
    assert_eq!(insight["average_potential"], 9.5);
    assert_eq!(insight["high_potential_task_count"], 1);
    assert_eq!(insight["quick_win_count"], 1);
    assert_eq!(insight["automation_potential"], 100);
    assert_eq!(insight["recommendation"], "high_priority");
    // One quick win is below the cluster threshold of two, so the
    // approach falls through to implementing high-potential tasks.
    assert_eq!(insight["approach"], "implement_high_potential_tasks");
    assert_eq!(insight["quick_wins"][0], "t1");
}

// ---------------------------------------------------------------------------
// Test: POST /assessment/characteristics flags NLP from the description
// ---------------------------------------------------------------------------

#[tokio::test]
async fn characteristics_flag_nlp() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/api/v1/assessment/characteristics",
        json!({ "tasks": [triage_task()] }),
    )
    .await;

    let body = expect_json(response, StatusCode::OK).await;
    assert_eq!(body["data"]["needs_nlp"], true);
    assert_eq!(body["data"]["needs_computer_vision"], false);
}

// ---------------------------------------------------------------------------
// Test: POST /assessment/plan generates phases / returns null when empty
// ---------------------------------------------------------------------------

#[tokio::test]
async fn plan_generation_returns_quick_win_phase() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/api/v1/assessment/plan",
        json!({
            "workflows": [{ "id": "w1", "name": "Support" }],
            "tasks": [triage_task()]
        }),
    )
    .await;

    let body = expect_json(response, StatusCode::OK).await;
    let plan = &body["data"];

    assert_eq!(plan["phases"][0]["kind"], "quick_wins");
    assert_eq!(plan["phases"][0]["duration"], 4);
    assert_eq!(plan["phases"][0]["tasks"][0], "t1");
    assert_eq!(plan["timeline"], "short");
}

#[tokio::test]
async fn plan_generation_without_tasks_returns_null() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/api/v1/assessment/plan",
        json!({
            "workflows": [{ "id": "w1", "name": "Support" }],
            "tasks": []
        }),
    )
    .await;

    let body = expect_json(response, StatusCode::OK).await;
    assert!(body["data"].is_null());
}
