//! Handlers for the scoring and analysis endpoints.
//!
//! All endpoints are pure computations over the collections in the
//! request body; nothing is stored server-side.

use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use journey_core::characteristics::{self, TaskCharacteristics};
use journey_core::model::{Task, Workflow};
use journey_core::planning::{self, PlanRecommendations};
use journey_core::scoring;
use journey_core::types::EntityId;
use journey_core::workflow_analysis::{self, WorkflowInsight};

use crate::error::AppResult;
use crate::handlers::validate_tasks;
use crate::response::DataResponse;

// ---------------------------------------------------------------------------
// Score
// ---------------------------------------------------------------------------

/// Request body for task scoring.
#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub task: Task,
}

/// Response payload for task scoring.
#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub task_id: EntityId,
    /// AI potential in `[0, 10]`, rounded to the nearest 0.5.
    pub ai_potential: f64,
}

/// POST /api/v1/assessment/score
///
/// Score a single task.
pub async fn score_task(Json(req): Json<ScoreRequest>) -> AppResult<impl IntoResponse> {
    req.task.validate_ratings()?;

    let ai_potential = scoring::ai_potential(&req.task);

    Ok(Json(DataResponse {
        data: ScoreResponse {
            task_id: req.task.id,
            ai_potential,
        },
    }))
}

// ---------------------------------------------------------------------------
// Characteristics
// ---------------------------------------------------------------------------

/// Request body for characteristic analysis.
#[derive(Debug, Deserialize)]
pub struct CharacteristicsRequest {
    #[serde(default)]
    pub tasks: Vec<Task>,
}

/// POST /api/v1/assessment/characteristics
///
/// Derive the aggregated capability needs of a task set.
pub async fn analyze_characteristics(
    Json(req): Json<CharacteristicsRequest>,
) -> AppResult<Json<DataResponse<TaskCharacteristics>>> {
    validate_tasks(&req.tasks)?;

    Ok(Json(DataResponse {
        data: characteristics::analyze_tasks(&req.tasks),
    }))
}

// ---------------------------------------------------------------------------
// Workflow analysis
// ---------------------------------------------------------------------------

/// Request body carrying a project's workflows and tasks.
#[derive(Debug, Deserialize)]
pub struct ProjectSnapshot {
    #[serde(default)]
    pub workflows: Vec<Workflow>,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

/// POST /api/v1/assessment/workflows/analyze
///
/// Analyze every workflow in the snapshot, in input order.
pub async fn analyze_workflows(
    Json(req): Json<ProjectSnapshot>,
) -> AppResult<Json<DataResponse<Vec<WorkflowInsight>>>> {
    validate_tasks(&req.tasks)?;

    let insights: Vec<WorkflowInsight> = req
        .workflows
        .iter()
        .map(|workflow| workflow_analysis::analyze_workflow(workflow, &req.tasks))
        .collect();

    Ok(Json(DataResponse { data: insights }))
}

// ---------------------------------------------------------------------------
// Plan generation
// ---------------------------------------------------------------------------

/// POST /api/v1/assessment/plan
///
/// Generate phased plan recommendations. Returns `data: null` when either
/// collection is empty -- there is nothing to phase yet.
pub async fn generate_plan(
    Json(req): Json<ProjectSnapshot>,
) -> AppResult<Json<DataResponse<Option<PlanRecommendations>>>> {
    validate_tasks(&req.tasks)?;

    let plan = planning::generate_plan(&req.workflows, &req.tasks);
    if let Some(ref plan) = plan {
        tracing::debug!(
            phases = plan.phases.len(),
            workflows = plan.workflow_analyses.len(),
            "Generated plan recommendations"
        );
    }

    Ok(Json(DataResponse { data: plan }))
}
