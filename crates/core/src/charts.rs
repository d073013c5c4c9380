//! Chart-ready data shapes for the visualization layer.
//!
//! Output matches the charting library's `{labels, datasets}` contract,
//! serialized camelCase. The engine fills in fixed styling constants; the
//! UI renders the payload as-is.

use serde::Serialize;

use crate::model::{ImplementationPlan, Task, Workflow};
use crate::scoring;
use crate::workflow_analysis;

// ---------------------------------------------------------------------------
// Payload shapes
// ---------------------------------------------------------------------------

/// A single dataset within a chart.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub data: Vec<f64>,
    pub background_color: ColorSpec,
    pub border_color: ColorSpec,
    pub border_width: u32,
}

/// Dataset color: one color for the whole series (bar/radar) or one per
/// slice (pie).
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ColorSpec {
    Single(&'static str),
    PerSlice(Vec<&'static str>),
}

/// A complete chart payload.
#[derive(Debug, Clone, Serialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
}

// Styling constants shared by the builders.
const BLUE_FILL: &str = "rgba(54, 162, 235, 0.5)";
const BLUE_BORDER: &str = "rgba(54, 162, 235, 1)";
const BLUE_FILL_FAINT: &str = "rgba(54, 162, 235, 0.2)";
const RED_FILL: &str = "rgba(255, 99, 132, 0.5)";
const RED_BORDER: &str = "rgba(255, 99, 132, 1)";
const TEAL_FILL: &str = "rgba(75, 192, 192, 0.5)";
const TEAL_BORDER: &str = "rgba(75, 192, 192, 1)";
const YELLOW_FILL: &str = "rgba(255, 206, 86, 0.5)";
const YELLOW_BORDER: &str = "rgba(255, 206, 86, 1)";
const PURPLE_FILL: &str = "rgba(153, 102, 255, 0.5)";
const PURPLE_BORDER: &str = "rgba(153, 102, 255, 1)";

// ---------------------------------------------------------------------------
// Potential bands (task-distribution pie)
// ---------------------------------------------------------------------------

/// Score bands used by the distribution chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PotentialBand {
    High,
    Medium,
    Low,
}

impl PotentialBand {
    /// Classify a score. High is the shared high-potential threshold;
    /// scores rounded to 0.5 make 6.5 the top of the medium band and 3.5
    /// the top of the low band.
    pub fn of(score: f64) -> Self {
        if score >= scoring::HIGH_POTENTIAL_THRESHOLD {
            Self::High
        } else if score >= 4.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Display label including the band's score range.
    pub fn label(self) -> &'static str {
        match self {
            Self::High => "High (7-10)",
            Self::Medium => "Medium (4-6.5)",
            Self::Low => "Low (0-3.5)",
        }
    }
}

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

/// Bar chart: average AI potential and automation percentage per workflow.
pub fn workflow_potential_chart(workflows: &[Workflow], tasks: &[Task]) -> ChartData {
    let insights: Vec<_> = workflows
        .iter()
        .map(|workflow| workflow_analysis::analyze_workflow(workflow, tasks))
        .collect();

    ChartData {
        labels: insights.iter().map(|i| i.workflow_name.clone()).collect(),
        datasets: vec![
            ChartDataset {
                label: Some("Average AI Potential".to_string()),
                data: insights.iter().map(|i| i.average_potential).collect(),
                background_color: ColorSpec::Single(BLUE_FILL),
                border_color: ColorSpec::Single(BLUE_BORDER),
                border_width: 1,
            },
            ChartDataset {
                label: Some("Automation Potential (%)".to_string()),
                data: insights
                    .iter()
                    .map(|i| i.automation_potential as f64)
                    .collect(),
                background_color: ColorSpec::Single(RED_FILL),
                border_color: ColorSpec::Single(RED_BORDER),
                border_width: 1,
            },
        ],
    }
}

/// Pie chart: task counts per potential band.
pub fn task_distribution_chart(tasks: &[Task]) -> ChartData {
    let bands = [PotentialBand::High, PotentialBand::Medium, PotentialBand::Low];
    let counts: Vec<f64> = bands
        .iter()
        .map(|band| {
            tasks
                .iter()
                .filter(|task| PotentialBand::of(scoring::ai_potential(task)) == *band)
                .count() as f64
        })
        .collect();

    ChartData {
        labels: bands.iter().map(|band| band.label().to_string()).collect(),
        datasets: vec![ChartDataset {
            label: None,
            data: counts,
            background_color: ColorSpec::PerSlice(vec![TEAL_FILL, YELLOW_FILL, RED_FILL]),
            border_color: ColorSpec::PerSlice(vec![TEAL_BORDER, YELLOW_BORDER, RED_BORDER]),
            border_width: 1,
        }],
    }
}

/// Bar chart: phase durations for an implementation plan.
pub fn implementation_timeline_chart(plan: &ImplementationPlan) -> ChartData {
    ChartData {
        labels: plan.phases.iter().map(|phase| phase.name.clone()).collect(),
        datasets: vec![ChartDataset {
            label: Some("Duration (weeks)".to_string()),
            data: plan.phases.iter().map(|phase| phase.duration as f64).collect(),
            background_color: ColorSpec::Single(PURPLE_FILL),
            border_color: ColorSpec::Single(PURPLE_BORDER),
            border_width: 1,
        }],
    }
}

/// Radar chart: one task's ratings plus its AI potential. Complexity is
/// inverted (6 - c) so all axes point the same way.
pub fn task_characteristics_chart(task: &Task) -> ChartData {
    ChartData {
        labels: vec![
            "Predictability".to_string(),
            "Data Availability".to_string(),
            "Low Complexity".to_string(),
            "Frequency".to_string(),
            "AI Potential".to_string(),
        ],
        datasets: vec![ChartDataset {
            label: Some(task.name.clone()),
            data: vec![
                task.predictability as f64,
                task.data_availability as f64,
                6.0 - task.complexity as f64,
                task.frequency as f64,
                scoring::ai_potential(task),
            ],
            background_color: ColorSpec::Single(BLUE_FILL_FAINT),
            border_color: ColorSpec::Single(BLUE_BORDER),
            border_width: 2,
        }],
    }
}
