pub mod assessment;
pub mod charts;
pub mod health;
pub mod journey;
pub mod tools;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /assessment/score                  score one task
/// /assessment/characteristics        derive capability needs from tasks
/// /assessment/workflows/analyze      per-workflow insights
/// /assessment/plan                   generate plan recommendations
///
/// /tools                             builtin catalog (list, get by id)
/// /tools/match                       ranked tool recommendations
/// /tools/categories                  recommended category labels
///
/// /journey/steps                     wizard step definitions
/// /journey/progress                  overall progress percentage
///
/// /charts/workflow-potential         bar: potential per workflow
/// /charts/task-distribution          pie: tasks per potential band
/// /charts/timeline                   bar: phase durations
/// /charts/task-characteristics       radar: one task's ratings
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/assessment", assessment::router())
        .nest("/tools", tools::router())
        .nest("/journey", journey::router())
        .nest("/charts", charts::router())
}
