//! Per-workflow aggregation of task scores into an actionable insight.

use serde::Serialize;

use crate::model::{Task, Workflow};
use crate::scoring::{self, HIGH_POTENTIAL_THRESHOLD};
use crate::types::EntityId;

// ---------------------------------------------------------------------------
// Labels
// ---------------------------------------------------------------------------

/// Overall priority recommendation for a workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    HighPriority,
    MediumPriority,
    LowPriority,
}

impl Recommendation {
    /// Average potential at or above which a workflow is high priority.
    pub const HIGH_THRESHOLD: f64 = 7.0;
    /// Average potential at or above which a workflow is medium priority.
    pub const MEDIUM_THRESHOLD: f64 = 5.0;

    fn from_average(average_potential: f64) -> Self {
        if average_potential >= Self::HIGH_THRESHOLD {
            Self::HighPriority
        } else if average_potential >= Self::MEDIUM_THRESHOLD {
            Self::MediumPriority
        } else {
            Self::LowPriority
        }
    }

    /// Human-readable label for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::HighPriority => "High Priority for AI Implementation",
            Self::MediumPriority => "Medium Priority for AI Implementation",
            Self::LowPriority => "Low Priority for AI Implementation",
        }
    }
}

/// Suggested implementation approach for a workflow.
///
/// The checks are evaluated strictly in declaration order: quick wins
/// first, then bottlenecks, then any high-potential task, with process
/// redesign as the fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Approach {
    StartWithQuickWins,
    FocusOnBottlenecks,
    ImplementHighPotentialTasks,
    ConsiderProcessRedesign,
}

impl Approach {
    /// Minimum quick wins (or bottlenecks) for the dedicated approaches.
    pub const CLUSTER_THRESHOLD: usize = 2;

    fn select(quick_wins: usize, bottlenecks: usize, high_potential: usize) -> Self {
        if quick_wins >= Self::CLUSTER_THRESHOLD {
            Self::StartWithQuickWins
        } else if bottlenecks >= Self::CLUSTER_THRESHOLD {
            Self::FocusOnBottlenecks
        } else if high_potential > 0 {
            Self::ImplementHighPotentialTasks
        } else {
            Self::ConsiderProcessRedesign
        }
    }

    /// Human-readable label for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::StartWithQuickWins => "Start with Quick Wins",
            Self::FocusOnBottlenecks => "Focus on Bottlenecks",
            Self::ImplementHighPotentialTasks => "Implement High-Potential Tasks",
            Self::ConsiderProcessRedesign => "Consider Process Redesign Before AI",
        }
    }
}

// ---------------------------------------------------------------------------
// Insight
// ---------------------------------------------------------------------------

/// Derived (never persisted) analysis of one workflow's AI potential.
#[derive(Debug, Clone, Serialize)]
pub struct WorkflowInsight {
    pub workflow_id: EntityId,
    pub workflow_name: String,
    /// Mean task score, rounded to one decimal. 0 for an empty workflow.
    pub average_potential: f64,
    pub high_potential_task_count: usize,
    pub total_task_count: usize,
    pub bottleneck_count: usize,
    pub quick_win_count: usize,
    /// Share of high-potential tasks, as a 0-100 integer percentage.
    pub automation_potential: u32,
    pub recommendation: Recommendation,
    pub approach: Approach,
    /// Ids of the quick-win tasks, in input order.
    pub quick_wins: Vec<EntityId>,
    /// Ids of the bottleneck tasks, in input order.
    pub bottlenecks: Vec<EntityId>,
}

/// Analyze one workflow against the full task set.
///
/// Tasks are filtered by `workflow_id`; the rest of the task set is
/// ignored. A workflow with no tasks yields zeroed counts, a low-priority
/// recommendation, and the process-redesign approach.
pub fn analyze_workflow(workflow: &Workflow, all_tasks: &[Task]) -> WorkflowInsight {
    let tasks: Vec<&Task> = all_tasks
        .iter()
        .filter(|task| task.workflow_id == workflow.id)
        .collect();

    let total = tasks.len();
    let average_potential = if total > 0 {
        let sum: f64 = tasks.iter().map(|task| scoring::ai_potential(task)).sum();
        round_to_one_decimal(sum / total as f64)
    } else {
        0.0
    };

    let high_potential_task_count = tasks
        .iter()
        .filter(|task| scoring::ai_potential(task) >= HIGH_POTENTIAL_THRESHOLD)
        .count();

    let quick_wins: Vec<EntityId> = tasks
        .iter()
        .filter(|task| scoring::is_quick_win(task))
        .map(|task| task.id.clone())
        .collect();

    let bottlenecks: Vec<EntityId> = tasks
        .iter()
        .filter(|task| scoring::is_bottleneck(task))
        .map(|task| task.id.clone())
        .collect();

    let automation_potential = if total > 0 {
        ((high_potential_task_count as f64 / total as f64) * 100.0).round() as u32
    } else {
        0
    };

    WorkflowInsight {
        workflow_id: workflow.id.clone(),
        workflow_name: workflow.name.clone(),
        average_potential,
        high_potential_task_count,
        total_task_count: total,
        bottleneck_count: bottlenecks.len(),
        quick_win_count: quick_wins.len(),
        automation_potential,
        recommendation: Recommendation::from_average(average_potential),
        approach: Approach::select(quick_wins.len(), bottlenecks.len(), high_potential_task_count),
        quick_wins,
        bottlenecks,
    }
}

fn round_to_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
