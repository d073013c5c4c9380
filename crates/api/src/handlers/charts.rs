//! Handlers for the `/charts` resource.
//!
//! Thin adapters: each deserializes the collections it needs and returns
//! the matching chart payload from the engine.

use axum::Json;
use serde::Deserialize;

use journey_core::charts::{self, ChartData};
use journey_core::model::{ImplementationPlan, Task, Workflow};

use crate::error::AppResult;
use crate::handlers::validate_tasks;
use crate::response::DataResponse;

#[derive(Debug, Deserialize)]
pub struct WorkflowChartRequest {
    #[serde(default)]
    pub workflows: Vec<Workflow>,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

/// POST /api/v1/charts/workflow-potential
pub async fn workflow_potential(
    Json(req): Json<WorkflowChartRequest>,
) -> AppResult<Json<DataResponse<ChartData>>> {
    validate_tasks(&req.tasks)?;
    Ok(Json(DataResponse {
        data: charts::workflow_potential_chart(&req.workflows, &req.tasks),
    }))
}

#[derive(Debug, Deserialize)]
pub struct TaskChartRequest {
    #[serde(default)]
    pub tasks: Vec<Task>,
}

/// POST /api/v1/charts/task-distribution
pub async fn task_distribution(
    Json(req): Json<TaskChartRequest>,
) -> AppResult<Json<DataResponse<ChartData>>> {
    validate_tasks(&req.tasks)?;
    Ok(Json(DataResponse {
        data: charts::task_distribution_chart(&req.tasks),
    }))
}

#[derive(Debug, Deserialize)]
pub struct TimelineChartRequest {
    pub implementation_plan: ImplementationPlan,
}

/// POST /api/v1/charts/timeline
pub async fn timeline(
    Json(req): Json<TimelineChartRequest>,
) -> AppResult<Json<DataResponse<ChartData>>> {
    req.implementation_plan.validate_phases()?;
    Ok(Json(DataResponse {
        data: charts::implementation_timeline_chart(&req.implementation_plan),
    }))
}

#[derive(Debug, Deserialize)]
pub struct TaskRadarRequest {
    pub task: Task,
}

/// POST /api/v1/charts/task-characteristics
pub async fn task_characteristics(
    Json(req): Json<TaskRadarRequest>,
) -> AppResult<Json<DataResponse<ChartData>>> {
    req.task.validate_ratings()?;
    Ok(Json(DataResponse {
        data: charts::task_characteristics_chart(&req.task),
    }))
}
