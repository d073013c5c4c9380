//! Route definitions for the `/charts` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::charts;
use crate::state::AppState;

/// Routes mounted at `/charts`. Each returns a chart-ready
/// `{labels, datasets}` payload for the visualization layer.
///
/// ```text
/// POST /workflow-potential     -> workflow_potential
/// POST /task-distribution      -> task_distribution
/// POST /timeline               -> timeline
/// POST /task-characteristics   -> task_characteristics
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/workflow-potential", post(charts::workflow_potential))
        .route("/task-distribution", post(charts::task_distribution))
        .route("/timeline", post(charts::timeline))
        .route("/task-characteristics", post(charts::task_characteristics))
}
