//! Implementation-plan generation: ordered phases plus overall
//! timeline/resource/budget tier estimates.
//!
//! Phase construction threads one `assigned` id set through all four
//! builders, so a task placed in an earlier phase can never reappear in a
//! later one regardless of which phases end up non-empty.

use std::collections::HashSet;

use serde::Serialize;

use crate::model::{PlanPhase, Task, Workflow};
use crate::scoring::{self, HIGH_POTENTIAL_THRESHOLD};
use crate::types::{EntityId, Tier, Timeline};
use crate::workflow_analysis::{self, WorkflowInsight};

// ---------------------------------------------------------------------------
// Thresholds
// ---------------------------------------------------------------------------

/// Minimum workflow average for the high-priority phase.
pub const HIGH_PRIORITY_WORKFLOW_THRESHOLD: f64 = 7.0;
/// Minimum workflow average for the medium-priority phase.
pub const MEDIUM_PRIORITY_WORKFLOW_THRESHOLD: f64 = 5.0;
/// Minimum task score for inclusion in the medium-priority phase.
pub const MEDIUM_PHASE_TASK_THRESHOLD: f64 = 6.0;
/// Minimum task complexity for the advanced-foundation phase.
pub const FOUNDATION_MIN_COMPLEXITY: u8 = 4;
/// Complexity rating at or above which a task counts as complex for the
/// resource and budget estimates.
pub const HIGH_COMPLEXITY_THRESHOLD: u8 = 4;

// ---------------------------------------------------------------------------
// Phases
// ---------------------------------------------------------------------------

/// The four generated phase buckets, in plan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseKind {
    QuickWins,
    HighPriorityWorkflows,
    MediumPriorityWorkflows,
    AdvancedFoundation,
}

impl PhaseKind {
    /// Display name, as shown in the plan editor.
    pub fn label(self) -> &'static str {
        match self {
            Self::QuickWins => "Phase 1: Quick Wins",
            Self::HighPriorityWorkflows => "Phase 2: High-Priority Workflows",
            Self::MediumPriorityWorkflows => "Phase 3: Medium-Priority Workflows",
            Self::AdvancedFoundation => "Phase 4: Foundation for Advanced AI",
        }
    }

    /// One-line description of what the phase covers.
    pub fn description(self) -> &'static str {
        match self {
            Self::QuickWins => {
                "Implement high-potential, low-complexity tasks for immediate value"
            }
            Self::HighPriorityWorkflows => {
                "Implement remaining high-potential tasks from high-priority workflows"
            }
            Self::MediumPriorityWorkflows => {
                "Implement high-potential tasks from medium-priority workflows"
            }
            Self::AdvancedFoundation => {
                "Implement complex, high-potential tasks that require more resources"
            }
        }
    }

    /// Estimated duration in weeks for a phase holding `task_count` tasks.
    fn duration_weeks(self, task_count: usize) -> u32 {
        let n = task_count as u32;
        match self {
            // Two weeks per pair of tasks, at least four weeks.
            Self::QuickWins => (n.div_ceil(2) * 2).max(4),
            // Three weeks per pair, at least six.
            Self::HighPriorityWorkflows => (n.div_ceil(2) * 3).max(6),
            // Four weeks per pair, at least eight.
            Self::MediumPriorityWorkflows => (n.div_ceil(2) * 4).max(8),
            // Three weeks per task, at least twelve.
            Self::AdvancedFoundation => (n * 3).max(12),
        }
    }
}

/// One recommended phase: a kind, an estimated duration, and the ids of
/// the tasks assigned to it.
#[derive(Debug, Clone, Serialize)]
pub struct PhaseRecommendation {
    pub kind: PhaseKind,
    /// Estimated duration in weeks.
    pub duration: u32,
    pub tasks: Vec<EntityId>,
}

impl PhaseRecommendation {
    /// Convert into the editable plan-phase representation.
    pub fn to_plan_phase(&self) -> PlanPhase {
        PlanPhase {
            name: self.kind.label().to_string(),
            description: self.kind.description().to_string(),
            duration: self.duration,
            tasks: self.tasks.clone(),
        }
    }
}

/// The full generated recommendation set.
#[derive(Debug, Clone, Serialize)]
pub struct PlanRecommendations {
    /// Insights for every workflow, sorted descending by average
    /// potential (stable for ties).
    pub workflow_analyses: Vec<WorkflowInsight>,
    /// Non-empty phases, in order 1 through 4.
    pub phases: Vec<PhaseRecommendation>,
    pub timeline: Timeline,
    pub resources: Tier,
    pub budget: Tier,
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Generate plan recommendations from the project's workflows and tasks.
///
/// Returns `None` when either collection is empty -- there is nothing to
/// phase. Each task id appears in at most one of the returned phases.
pub fn generate_plan(workflows: &[Workflow], tasks: &[Task]) -> Option<PlanRecommendations> {
    if workflows.is_empty() || tasks.is_empty() {
        return None;
    }

    let mut analyses: Vec<WorkflowInsight> = workflows
        .iter()
        .map(|workflow| workflow_analysis::analyze_workflow(workflow, tasks))
        .collect();
    analyses.sort_by(|a, b| {
        b.average_potential
            .partial_cmp(&a.average_potential)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut assigned: HashSet<&str> = HashSet::new();
    let mut phases = Vec::new();

    // Phase 1: all quick wins, across every workflow.
    let quick_wins: Vec<&Task> = tasks.iter().filter(|t| scoring::is_quick_win(t)).collect();
    push_phase(&mut phases, PhaseKind::QuickWins, quick_wins, &mut assigned);

    // Phase 2: remaining high-potential tasks in high-priority workflows.
    let high_priority_ids: HashSet<&str> = analyses
        .iter()
        .filter(|insight| insight.average_potential >= HIGH_PRIORITY_WORKFLOW_THRESHOLD)
        .map(|insight| insight.workflow_id.as_str())
        .collect();
    let phase2: Vec<&Task> = tasks
        .iter()
        .filter(|t| scoring::is_high_potential(t))
        .filter(|t| high_priority_ids.contains(t.workflow_id.as_str()))
        .filter(|t| !assigned.contains(t.id.as_str()))
        .collect();
    push_phase(&mut phases, PhaseKind::HighPriorityWorkflows, phase2, &mut assigned);

    // Phase 3: strong tasks in medium-priority workflows.
    let medium_priority_ids: HashSet<&str> = analyses
        .iter()
        .filter(|insight| {
            insight.average_potential >= MEDIUM_PRIORITY_WORKFLOW_THRESHOLD
                && insight.average_potential < HIGH_PRIORITY_WORKFLOW_THRESHOLD
        })
        .map(|insight| insight.workflow_id.as_str())
        .collect();
    let phase3: Vec<&Task> = tasks
        .iter()
        .filter(|t| scoring::ai_potential(t) >= MEDIUM_PHASE_TASK_THRESHOLD)
        .filter(|t| medium_priority_ids.contains(t.workflow_id.as_str()))
        .filter(|t| !assigned.contains(t.id.as_str()))
        .collect();
    push_phase(&mut phases, PhaseKind::MediumPriorityWorkflows, phase3, &mut assigned);

    // Phase 4: complex high-potential tasks not yet placed anywhere.
    let phase4: Vec<&Task> = tasks
        .iter()
        .filter(|t| scoring::ai_potential(t) >= HIGH_POTENTIAL_THRESHOLD)
        .filter(|t| t.complexity >= FOUNDATION_MIN_COMPLEXITY)
        .filter(|t| !assigned.contains(t.id.as_str()))
        .collect();
    push_phase(&mut phases, PhaseKind::AdvancedFoundation, phase4, &mut assigned);

    let timeline = estimate_timeline(&phases);
    let resources = estimate_resources(tasks, &phases);
    let budget = estimate_budget(tasks, &phases);

    Some(PlanRecommendations {
        workflow_analyses: analyses,
        phases,
        timeline,
        resources,
        budget,
    })
}

/// Append a phase when its candidate set is non-empty, marking every
/// included task id as assigned.
fn push_phase<'a>(
    phases: &mut Vec<PhaseRecommendation>,
    kind: PhaseKind,
    candidates: Vec<&'a Task>,
    assigned: &mut HashSet<&'a str>,
) {
    if candidates.is_empty() {
        return;
    }
    for task in &candidates {
        assigned.insert(task.id.as_str());
    }
    phases.push(PhaseRecommendation {
        kind,
        duration: kind.duration_weeks(candidates.len()),
        tasks: candidates.iter().map(|t| t.id.clone()).collect(),
    });
}

// ---------------------------------------------------------------------------
// Tier estimates
// ---------------------------------------------------------------------------

/// Timeline tier from the total phase duration.
fn estimate_timeline(phases: &[PhaseRecommendation]) -> Timeline {
    if phases.is_empty() {
        return Timeline::Medium;
    }
    let total: u32 = phases.iter().map(|p| p.duration).sum();
    if total <= 16 {
        Timeline::Short
    } else if total <= 36 {
        Timeline::Medium
    } else {
        Timeline::Long
    }
}

/// Resource tier from the share of complex tasks.
fn estimate_resources(tasks: &[Task], phases: &[PhaseRecommendation]) -> Tier {
    if tasks.is_empty() || phases.is_empty() {
        return Tier::Medium;
    }
    let complex = tasks
        .iter()
        .filter(|t| t.complexity >= HIGH_COMPLEXITY_THRESHOLD)
        .count();
    let ratio = complex as f64 / tasks.len() as f64;
    if ratio >= 0.5 {
        Tier::High
    } else if ratio >= 0.3 {
        Tier::Medium
    } else {
        Tier::Low
    }
}

/// Budget tier from total duration and complex-task count.
fn estimate_budget(tasks: &[Task], phases: &[PhaseRecommendation]) -> Tier {
    if tasks.is_empty() || phases.is_empty() {
        return Tier::Medium;
    }
    let total: u32 = phases.iter().map(|p| p.duration).sum();
    let complex = tasks
        .iter()
        .filter(|t| t.complexity >= HIGH_COMPLEXITY_THRESHOLD)
        .count();

    if total >= 36 || complex >= 5 {
        Tier::High
    } else if total >= 20 || complex >= 3 {
        Tier::Medium
    } else {
        Tier::Low
    }
}
