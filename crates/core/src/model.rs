//! Core data model: tasks, workflows, and the implementation plan.
//!
//! These are the caller-owned inputs every engine function reads. The
//! engine never mutates them; referential integrity (a task pointing at an
//! existing workflow) is the caller's responsibility. Rating ranges are a
//! documented precondition of the scorer -- the explicit `validate_*`
//! entry points let boundary layers check them without the scoring math
//! ever re-validating.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;
use crate::types::{EntityId, Tier, Timeline};

/// Minimum value for a task rating.
pub const RATING_MIN: u8 = 1;
/// Maximum value for a task rating.
pub const RATING_MAX: u8 = 5;

// ---------------------------------------------------------------------------
// Task
// ---------------------------------------------------------------------------

/// One unit of work inside a workflow, rated on the four factors the
/// scorer consumes. Each rating is an integer in `1..=5`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Task {
    pub id: EntityId,
    /// The workflow this task belongs to (exactly one).
    pub workflow_id: EntityId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// How rule-like and repeatable the task is.
    #[validate(range(min = 1, max = 5, message = "must be between 1 and 5"))]
    pub predictability: u8,
    /// How much usable data exists for the task.
    #[validate(range(min = 1, max = 5, message = "must be between 1 and 5"))]
    pub data_availability: u8,
    /// Implementation difficulty. Higher complexity lowers AI potential.
    #[validate(range(min = 1, max = 5, message = "must be between 1 and 5"))]
    pub complexity: u8,
    /// How often the task is performed.
    #[validate(range(min = 1, max = 5, message = "must be between 1 and 5"))]
    pub frequency: u8,
}

impl Task {
    /// Check all four ratings against `1..=5`, reporting the offending
    /// fields as a [`CoreError::Validation`].
    pub fn validate_ratings(&self) -> Result<(), CoreError> {
        self.validate().map_err(validation_error)
    }
}

// ---------------------------------------------------------------------------
// Workflow
// ---------------------------------------------------------------------------

/// A named business process containing zero or more tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workflow {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    /// Qualitative process complexity as rated during workflow inventory.
    #[serde(default)]
    pub complexity: Tier,
    /// How ready the workflow's data is for automation.
    #[serde(default)]
    pub data_readiness: Tier,
}

// ---------------------------------------------------------------------------
// Implementation plan
// ---------------------------------------------------------------------------

/// A named, time-boxed bucket of tasks in an implementation plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct PlanPhase {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Phase duration in weeks.
    #[validate(range(min = 1, message = "must be at least 1 week"))]
    pub duration: u32,
    /// Ids of the tasks assigned to this phase.
    #[serde(default)]
    pub tasks: Vec<EntityId>,
}

/// The per-project implementation plan: ordered phases plus the three
/// qualitative tier fields the user picks (or the generator recommends).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ImplementationPlan {
    #[serde(default)]
    #[validate(nested)]
    pub phases: Vec<PlanPhase>,
    #[serde(default)]
    pub timeline: Timeline,
    #[serde(default)]
    pub resources: Tier,
    #[serde(default)]
    pub budget: Tier,
}

impl ImplementationPlan {
    /// Sum of all phase durations, in weeks.
    pub fn total_duration(&self) -> u32 {
        self.phases.iter().map(|p| p.duration).sum()
    }

    /// Check phase durations, reporting violations as a
    /// [`CoreError::Validation`].
    pub fn validate_phases(&self) -> Result<(), CoreError> {
        self.validate().map_err(validation_error)
    }
}

/// Flatten a `validator` error report into the domain error type.
fn validation_error(errors: validator::ValidationErrors) -> CoreError {
    CoreError::Validation(errors.to_string())
}
