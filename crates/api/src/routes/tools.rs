//! Route definitions for the `/tools` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::tools;
use crate::state::AppState;

/// Routes mounted at `/tools`.
///
/// ```text
/// GET  /             -> list_tools (builtin catalog)
/// GET  /{id}         -> get_tool
/// POST /match        -> match_tools (ranked recommendations)
/// POST /categories   -> recommended_categories
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(tools::list_tools))
        .route("/match", post(tools::match_tools))
        .route("/categories", post(tools::recommended_categories))
        .route("/{id}", get(tools::get_tool))
}
