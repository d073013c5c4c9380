//! Journey progress tracking: the nine assessment-wizard steps and the
//! overall completion percentage shown on the project dashboard.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::CoreError;
use crate::model::{PlanPhase, Task, Workflow};
use crate::types::{EntityId, Timestamp};

// ---------------------------------------------------------------------------
// Steps
// ---------------------------------------------------------------------------

/// Total number of steps in the assessment journey.
pub const TOTAL_STEPS: u8 = 9;

/// Minimum step number (1-based).
pub const MIN_STEP: u8 = 1;

/// Maximum step number (1-based).
pub const MAX_STEP: u8 = 9;

/// The nine steps of the assessment journey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JourneyStep {
    StrategicCanvas,
    StartingPointAnalysis,
    StrategySelection,
    StrategyOnboarding,
    WorkflowAnalysis,
    TaskDeconstruction,
    ProcessMapping,
    ImplementationPlan,
    AiToolsSelection,
}

impl JourneyStep {
    /// Convert a 1-based step number to a `JourneyStep`.
    pub fn from_number(n: u8) -> Result<Self, CoreError> {
        match n {
            1 => Ok(Self::StrategicCanvas),
            2 => Ok(Self::StartingPointAnalysis),
            3 => Ok(Self::StrategySelection),
            4 => Ok(Self::StrategyOnboarding),
            5 => Ok(Self::WorkflowAnalysis),
            6 => Ok(Self::TaskDeconstruction),
            7 => Ok(Self::ProcessMapping),
            8 => Ok(Self::ImplementationPlan),
            9 => Ok(Self::AiToolsSelection),
            _ => Err(CoreError::Validation(format!(
                "Invalid step number {n}. Must be between {MIN_STEP} and {MAX_STEP}"
            ))),
        }
    }

    /// Convert to a 1-based step number.
    pub fn to_number(self) -> u8 {
        match self {
            Self::StrategicCanvas => 1,
            Self::StartingPointAnalysis => 2,
            Self::StrategySelection => 3,
            Self::StrategyOnboarding => 4,
            Self::WorkflowAnalysis => 5,
            Self::TaskDeconstruction => 6,
            Self::ProcessMapping => 7,
            Self::ImplementationPlan => 8,
            Self::AiToolsSelection => 9,
        }
    }

    /// Human-readable label for the step.
    pub fn label(self) -> &'static str {
        match self {
            Self::StrategicCanvas => "Strategic Canvas",
            Self::StartingPointAnalysis => "Starting Point Analysis",
            Self::StrategySelection => "Strategy Selection",
            Self::StrategyOnboarding => "Strategy Onboarding",
            Self::WorkflowAnalysis => "Workflow Analysis",
            Self::TaskDeconstruction => "Task Deconstruction",
            Self::ProcessMapping => "Process Mapping",
            Self::ImplementationPlan => "Implementation Plan",
            Self::AiToolsSelection => "AI Tools Selection",
        }
    }

    /// All steps, in journey order.
    pub fn all() -> [JourneyStep; TOTAL_STEPS as usize] {
        [
            Self::StrategicCanvas,
            Self::StartingPointAnalysis,
            Self::StrategySelection,
            Self::StrategyOnboarding,
            Self::WorkflowAnalysis,
            Self::TaskDeconstruction,
            Self::ProcessMapping,
            Self::ImplementationPlan,
            Self::AiToolsSelection,
        ]
    }
}

// ---------------------------------------------------------------------------
// Wizard selections
// ---------------------------------------------------------------------------

/// Implementation strategy chosen in step 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Improve existing processes incrementally.
    Evolutionary,
    /// Rebuild processes around AI from scratch.
    Revolutionary,
}

impl Strategy {
    /// Wire/database string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Evolutionary => "evolutionary",
            Self::Revolutionary => "revolutionary",
        }
    }
}

/// Where the organization starts from, chosen in step 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StartingPoint {
    /// Processes are currently manual.
    Manual,
    /// Existing software automates parts of the process.
    ExistingSoftware,
    /// A brand-new problem with no current process.
    NewProblem,
}

impl StartingPoint {
    /// Wire/database string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Manual => "manual",
            Self::ExistingSoftware => "existing_software",
            Self::NewProblem => "new_problem",
        }
    }
}

// ---------------------------------------------------------------------------
// Project progress
// ---------------------------------------------------------------------------

/// Snapshot of one project's journey state, as stored per project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectProgress {
    /// Current step number, 1-based.
    pub current_step: u8,
    #[serde(default)]
    pub strategic_vision: Map<String, Value>,
    #[serde(default)]
    pub starting_point: Option<StartingPoint>,
    #[serde(default)]
    pub strategy: Option<Strategy>,
    #[serde(default)]
    pub strategy_preferences: Map<String, Value>,
    #[serde(default)]
    pub workflows: Vec<Workflow>,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub implementation_phases: Vec<PlanPhase>,
    #[serde(default)]
    pub selected_tools: Vec<EntityId>,
    #[serde(default)]
    pub updated_at: Option<Timestamp>,
}

impl ProjectProgress {
    /// The current step, validating the stored step number.
    pub fn step(&self) -> Result<JourneyStep, CoreError> {
        JourneyStep::from_number(self.current_step)
    }

    /// Completion fraction of the current step, in `[0, 1]`.
    ///
    /// A step counts as complete once its data exists. Process mapping is
    /// optional under the evolutionary strategy and counts as half done
    /// otherwise.
    fn step_completion(&self, step: JourneyStep) -> f64 {
        let complete = match step {
            JourneyStep::StrategicCanvas => !self.strategic_vision.is_empty(),
            JourneyStep::StartingPointAnalysis => self.starting_point.is_some(),
            JourneyStep::StrategySelection => self.strategy.is_some(),
            JourneyStep::StrategyOnboarding => !self.strategy_preferences.is_empty(),
            JourneyStep::WorkflowAnalysis => !self.workflows.is_empty(),
            JourneyStep::TaskDeconstruction => !self.tasks.is_empty(),
            JourneyStep::ProcessMapping => {
                return if self.strategy == Some(Strategy::Evolutionary) {
                    1.0
                } else {
                    0.5
                };
            }
            JourneyStep::ImplementationPlan => !self.implementation_phases.is_empty(),
            JourneyStep::AiToolsSelection => !self.selected_tools.is_empty(),
        };
        if complete {
            1.0
        } else {
            0.0
        }
    }

    /// Overall journey completion as a 0-100 percentage.
    pub fn progress_percentage(&self) -> Result<u32, CoreError> {
        let step = self.step()?;
        let steps = TOTAL_STEPS as f64;
        let completed_steps = (self.current_step - 1) as f64;
        let fraction = completed_steps / steps + self.step_completion(step) / steps;
        Ok((fraction * 100.0).round() as u32)
    }
}
