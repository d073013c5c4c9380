//! Route definitions for the `/assessment` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::assessment;
use crate::state::AppState;

/// Routes mounted at `/assessment`.
///
/// ```text
/// POST /score               -> score_task
/// POST /characteristics     -> analyze_characteristics
/// POST /workflows/analyze   -> analyze_workflows
/// POST /plan                -> generate_plan
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/score", post(assessment::score_task))
        .route("/characteristics", post(assessment::analyze_characteristics))
        .route("/workflows/analyze", post(assessment::analyze_workflows))
        .route("/plan", post(assessment::generate_plan))
}
