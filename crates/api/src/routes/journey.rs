//! Route definitions for the `/journey` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::journey;
use crate::state::AppState;

/// Routes mounted at `/journey`.
///
/// ```text
/// GET  /steps      -> list_steps
/// POST /progress   -> compute_progress
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/steps", get(journey::list_steps))
        .route("/progress", post(journey::compute_progress))
}
