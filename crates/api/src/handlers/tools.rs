//! Handlers for the `/tools` resource: the builtin catalog and the
//! matcher endpoints.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use journey_core::catalog::{self, AiTool};
use journey_core::error::CoreError;
use journey_core::model::{ImplementationPlan, Task};
use journey_core::tool_matching;
use journey_core::types::EntityId;

use crate::error::AppResult;
use crate::handlers::validate_tasks;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/tools
///
/// The builtin catalog, in canonical order.
pub async fn list_tools(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    Ok(Json(DataResponse {
        data: state.catalog.as_ref().clone(),
    }))
}

/// GET /api/v1/tools/{id}
pub async fn get_tool(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DataResponse<AiTool>>> {
    let tool = catalog::find_tool(&state.catalog, &id)
        .ok_or(CoreError::NotFound {
            entity: "AiTool",
            id,
        })?
        .clone();

    Ok(Json(DataResponse { data: tool }))
}

// ---------------------------------------------------------------------------
// Matching
// ---------------------------------------------------------------------------

/// Request body for tool matching and category recommendation.
#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub implementation_plan: Option<ImplementationPlan>,
}

/// Response payload for tool matching.
#[derive(Debug, Serialize)]
pub struct MatchResponse {
    /// Top tool ids, best match first.
    pub tool_ids: Vec<EntityId>,
}

/// POST /api/v1/tools/match
///
/// Rank the catalog against the project's high-potential tasks and plan
/// constraints.
pub async fn match_tools(
    State(state): State<AppState>,
    Json(req): Json<MatchRequest>,
) -> AppResult<Json<DataResponse<MatchResponse>>> {
    validate_tasks(&req.tasks)?;

    let tool_ids = tool_matching::match_tools(
        &req.tasks,
        req.implementation_plan.as_ref(),
        &state.catalog,
    );
    tracing::debug!(count = tool_ids.len(), "Matched tools");

    Ok(Json(DataResponse {
        data: MatchResponse { tool_ids },
    }))
}

/// Response payload for category recommendation.
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<&'static str>,
}

/// POST /api/v1/tools/categories
///
/// Recommend tool-category labels worth exploring for a project.
pub async fn recommended_categories(
    Json(req): Json<MatchRequest>,
) -> AppResult<Json<DataResponse<CategoriesResponse>>> {
    validate_tasks(&req.tasks)?;

    let categories = tool_matching::recommended_categories_for_project(
        &req.tasks,
        req.implementation_plan.as_ref(),
    );

    Ok(Json(DataResponse {
        data: CategoriesResponse { categories },
    }))
}
