//! Integration tests for the `/api/v1/tools` endpoints.

mod common;

use axum::http::StatusCode;
use common::{expect_json, get, post_json};
use serde_json::json;

// ---------------------------------------------------------------------------
// Test: GET /tools lists the builtin catalog
// ---------------------------------------------------------------------------

#[tokio::test]
async fn catalog_lists_twenty_tools() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/tools").await;

    let body = expect_json(response, StatusCode::OK).await;
    let tools = body["data"].as_array().unwrap();
    assert_eq!(tools.len(), 20);
    assert_eq!(tools[0]["id"], "tool-1");
    assert_eq!(tools[0]["category"], "Language Models");
}

// ---------------------------------------------------------------------------
// Test: GET /tools/{id}
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_tool_by_id() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/tools/tool-14").await;

    let body = expect_json(response, StatusCode::OK).await;
    assert_eq!(body["data"]["name"], "Roboflow");
}

#[tokio::test]
async fn unknown_tool_returns_404() {
    let app = common::build_test_app();
    let response = get(app, "/api/v1/tools/tool-999").await;

    let body = expect_json(response, StatusCode::NOT_FOUND).await;
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// Test: POST /tools/match ranks NLP platforms for NLP-heavy projects
// ---------------------------------------------------------------------------

#[tokio::test]
async fn match_returns_ranked_ids() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/api/v1/tools/match",
        json!({
            "tasks": [{
                "id": "t1",
                "workflow_id": "w1",
                "name": "Triage",
                "description": "Categorize chat and email text",
                "predictability": 5,
                "data_availability": 5,
                "complexity": 2,
                "frequency": 5
            }]
        }),
    )
    .await;

    let body = expect_json(response, StatusCode::OK).await;
    let ids = body["data"]["tool_ids"].as_array().unwrap();

    assert_eq!(ids.len(), 10);
    // GPT-4 is the first language model in catalog order and collects the
    // top score for an NLP-heavy, medium-constraint project.
    assert_eq!(ids[0], "tool-1");
}

// ---------------------------------------------------------------------------
// Test: POST /tools/categories applies constraint additions
// ---------------------------------------------------------------------------

#[tokio::test]
async fn categories_include_constraint_additions() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/api/v1/tools/categories",
        json!({
            "tasks": [],
            "implementation_plan": {
                "phases": [],
                "timeline": "short",
                "resources": "low",
                "budget": "low"
            }
        }),
    )
    .await;

    let body = expect_json(response, StatusCode::OK).await;
    let categories = body["data"]["categories"].as_array().unwrap();

    // Short timeline + low resources derives low complexity: managed
    // services, plus open source for the low budget.
    assert!(categories.contains(&json!("AI Services")));
    assert!(categories.contains(&json!("Open Source")));
}
