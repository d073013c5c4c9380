//! Task characteristic analysis: which AI capability categories a set of
//! tasks calls for.
//!
//! Two kinds of heuristics run over every task:
//! - keyword tables matched case-insensitively against the description
//!   (a strategy table -- extend the table, not the call sites);
//! - rating thresholds over the four task ratings.
//!
//! The analysis never errors; an empty task set yields the all-default
//! record (every flag false, data volume low).

use serde::Serialize;

use crate::model::Task;
use crate::types::Tier;

// ---------------------------------------------------------------------------
// Keyword tables
// ---------------------------------------------------------------------------

/// Description keywords indicating natural-language work.
pub const NLP_KEYWORDS: &[&str] = &["text", "document", "language", "chat", "email"];

/// Description keywords indicating vision work.
pub const VISION_KEYWORDS: &[&str] = &["image", "photo", "video", "visual", "scan"];

/// Description keywords indicating real-time requirements.
pub const REALTIME_KEYWORDS: &[&str] = &["real-time", "realtime", "immediate", "instant"];

/// Case-insensitive substring match of any keyword in the description.
fn description_matches(description: &str, keywords: &[&str]) -> bool {
    let lowered = description.to_lowercase();
    keywords.iter().any(|keyword| lowered.contains(keyword))
}

// ---------------------------------------------------------------------------
// Characteristics record
// ---------------------------------------------------------------------------

/// Aggregated AI needs derived from a set of tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskCharacteristics {
    pub needs_nlp: bool,
    pub needs_computer_vision: bool,
    pub needs_predictive_analytics: bool,
    pub needs_decision_support: bool,
    pub needs_process_automation: bool,
    pub needs_data_processing: bool,
    /// Estimated data volume; only escalates, never downgrades, regardless
    /// of the order tasks are processed in.
    pub data_volume: Tier,
    pub real_time_requirements: bool,
}

impl Default for TaskCharacteristics {
    fn default() -> Self {
        Self {
            needs_nlp: false,
            needs_computer_vision: false,
            needs_predictive_analytics: false,
            needs_decision_support: false,
            needs_process_automation: false,
            needs_data_processing: false,
            data_volume: Tier::Low,
            real_time_requirements: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Analysis
// ---------------------------------------------------------------------------

/// Derive the aggregated [`TaskCharacteristics`] for a set of tasks.
pub fn analyze_tasks(tasks: &[Task]) -> TaskCharacteristics {
    let mut characteristics = TaskCharacteristics::default();

    for task in tasks {
        if description_matches(&task.description, NLP_KEYWORDS) {
            characteristics.needs_nlp = true;
        }
        if description_matches(&task.description, VISION_KEYWORDS) {
            characteristics.needs_computer_vision = true;
        }
        if description_matches(&task.description, REALTIME_KEYWORDS) {
            characteristics.real_time_requirements = true;
        }

        if task.predictability >= 4 && task.data_availability >= 3 {
            characteristics.needs_predictive_analytics = true;
        }
        if task.complexity >= 4 {
            characteristics.needs_decision_support = true;
        }
        if task.frequency >= 4 && task.predictability >= 3 {
            characteristics.needs_process_automation = true;
        }

        if task.data_availability >= 4 {
            characteristics.needs_data_processing = true;

            // Estimate data volume from frequency and complexity.
            let volume = if task.frequency >= 4 && task.complexity >= 4 {
                Tier::High
            } else if task.frequency >= 3 || task.complexity >= 3 {
                Tier::Medium
            } else {
                Tier::Low
            };
            characteristics.data_volume = characteristics.data_volume.max(volume);
        }
    }

    characteristics
}
