//! Handlers for the `/journey` resource: wizard step definitions and the
//! dashboard progress percentage.

use axum::Json;
use serde::Serialize;

use journey_core::journey::{JourneyStep, ProjectProgress};

use crate::error::AppResult;
use crate::response::DataResponse;

/// One wizard step, as shown in the step indicator.
#[derive(Debug, Serialize)]
pub struct StepDefinition {
    /// 1-based step number.
    pub number: u8,
    pub step: JourneyStep,
    pub label: &'static str,
}

/// GET /api/v1/journey/steps
///
/// All nine wizard steps, in journey order.
pub async fn list_steps() -> Json<DataResponse<Vec<StepDefinition>>> {
    let steps = JourneyStep::all()
        .into_iter()
        .map(|step| StepDefinition {
            number: step.to_number(),
            step,
            label: step.label(),
        })
        .collect();

    Json(DataResponse { data: steps })
}

/// Response payload for progress computation.
#[derive(Debug, Serialize)]
pub struct ProgressResponse {
    /// Overall completion, 0-100.
    pub percentage: u32,
    pub step: JourneyStep,
    pub step_label: &'static str,
}

/// POST /api/v1/journey/progress
///
/// Compute the overall journey completion for a project snapshot.
pub async fn compute_progress(
    Json(progress): Json<ProjectProgress>,
) -> AppResult<Json<DataResponse<ProgressResponse>>> {
    let step = progress.step()?;
    let percentage = progress.progress_percentage()?;

    Ok(Json(DataResponse {
        data: ProgressResponse {
            percentage,
            step,
            step_label: step.label(),
        },
    }))
}
