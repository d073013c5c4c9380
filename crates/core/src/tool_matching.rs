//! Tool matching: rank catalog tools against the project's derived
//! characteristics and plan constraints.

use serde::Serialize;

use crate::catalog::{
    AiTool, CATEGORY_AI_SERVICES, CATEGORY_COMPUTER_VISION, CATEGORY_DATA_PLATFORMS,
    CATEGORY_DEVELOPMENT_FRAMEWORKS, CATEGORY_ENTERPRISE_AI, CATEGORY_LANGUAGE_MODELS,
    CATEGORY_ML_PLATFORMS, CATEGORY_MLOPS, CATEGORY_OPEN_SOURCE,
};
use crate::characteristics::{self, TaskCharacteristics};
use crate::model::{ImplementationPlan, Task};
use crate::scoring;
use crate::types::{EntityId, Tier, Timeline};

// ---------------------------------------------------------------------------
// Matching parameters
// ---------------------------------------------------------------------------

/// Minimum task score for a task to influence tool matching.
pub const MATCH_POTENTIAL_THRESHOLD: f64 = 6.0;

/// Number of tool recommendations returned.
pub const MAX_RECOMMENDATIONS: usize = 10;

/// Capability-tag keywords counted as language work.
const NLP_CAPABILITY_KEYWORDS: &[&str] = &["text", "language", "nlp"];

/// Capability-tag keywords counted as vision work.
const VISION_CAPABILITY_KEYWORDS: &[&str] = &["vision", "image", "video"];

// Score contributions, additive and independent.
const CATEGORY_MATCH_SCORE: u32 = 3;
const CAPABILITY_MATCH_SCORE: u32 = 2;
const COMPLEXITY_EXACT_SCORE: u32 = 2;
const COMPLEXITY_ADJACENT_SCORE: u32 = 1;
const PRICING_MATCH_SCORE: u32 = 2;

// ---------------------------------------------------------------------------
// Constraints
// ---------------------------------------------------------------------------

/// Implementation constraints derived from the project's plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImplementationConstraints {
    pub timeframe: Timeline,
    pub resources: Tier,
    pub budget: Tier,
    /// Derived acceptable implementation complexity: low for a short
    /// timeline on low resources, high for a long timeline with high
    /// resources or budget, medium otherwise.
    pub complexity: Tier,
}

impl Default for ImplementationConstraints {
    fn default() -> Self {
        Self {
            timeframe: Timeline::Medium,
            resources: Tier::Medium,
            budget: Tier::Medium,
            complexity: Tier::Medium,
        }
    }
}

/// Derive constraints from an implementation plan; all-medium when the
/// project has no plan yet.
pub fn constraints_from_plan(plan: Option<&ImplementationPlan>) -> ImplementationConstraints {
    let Some(plan) = plan else {
        return ImplementationConstraints::default();
    };

    let complexity = if plan.timeline == Timeline::Short && plan.resources == Tier::Low {
        Tier::Low
    } else if plan.timeline == Timeline::Long
        && (plan.resources == Tier::High || plan.budget == Tier::High)
    {
        Tier::High
    } else {
        Tier::Medium
    };

    ImplementationConstraints {
        timeframe: plan.timeline,
        resources: plan.resources,
        budget: plan.budget,
        complexity,
    }
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

/// Score one catalog tool against characteristics and constraints.
///
/// Criteria are additive and independent; a tool can collect both the
/// category and the capability contribution for the same need.
pub fn score_tool(
    tool: &AiTool,
    characteristics: &TaskCharacteristics,
    constraints: &ImplementationConstraints,
) -> u32 {
    let mut score = 0;

    // Category matches.
    if characteristics.needs_nlp && tool.category == CATEGORY_LANGUAGE_MODELS {
        score += CATEGORY_MATCH_SCORE;
    }
    if characteristics.needs_computer_vision && tool.category == CATEGORY_COMPUTER_VISION {
        score += CATEGORY_MATCH_SCORE;
    }
    if characteristics.needs_predictive_analytics
        && (tool.category == CATEGORY_ML_PLATFORMS || tool.category == CATEGORY_DATA_PLATFORMS)
    {
        score += CATEGORY_MATCH_SCORE;
    }
    if characteristics.needs_process_automation
        && tool.category == CATEGORY_DEVELOPMENT_FRAMEWORKS
    {
        score += CATEGORY_MATCH_SCORE;
    }

    // Capability-tag matches.
    if characteristics.needs_nlp && any_capability_matches(tool, NLP_CAPABILITY_KEYWORDS) {
        score += CAPABILITY_MATCH_SCORE;
    }
    if characteristics.needs_computer_vision
        && any_capability_matches(tool, VISION_CAPABILITY_KEYWORDS)
    {
        score += CAPABILITY_MATCH_SCORE;
    }

    // Implementation-complexity fit.
    if tool.implementation_complexity == constraints.complexity {
        score += COMPLEXITY_EXACT_SCORE;
    } else if tool.implementation_complexity.is_adjacent_to(constraints.complexity) {
        score += COMPLEXITY_ADJACENT_SCORE;
    }

    // Budget / pricing-model alignment. Substring matching is deliberate:
    // "Freemium" also satisfies a low-budget "Free" check.
    let pricing_matches = match constraints.budget {
        Tier::Low => tool.pricing_model.contains("Free"),
        Tier::Medium => {
            tool.pricing_model.contains("Freemium") || tool.pricing_model.contains("Usage")
        }
        Tier::High => {
            tool.pricing_model.contains("Subscription")
                || tool.pricing_model.contains("Enterprise")
        }
    };
    if pricing_matches {
        score += PRICING_MATCH_SCORE;
    }

    score
}

fn any_capability_matches(tool: &AiTool, keywords: &[&str]) -> bool {
    tool.capabilities.iter().any(|capability| {
        let lowered = capability.to_lowercase();
        keywords.iter().any(|keyword| lowered.contains(keyword))
    })
}

/// Rank catalog tools for a project and return the top ids.
///
/// Characteristics come from the tasks scoring at or above
/// [`MATCH_POTENTIAL_THRESHOLD`]; constraints come from the plan. The sort
/// is stable, so equally scored tools keep their catalog order.
pub fn match_tools(
    tasks: &[Task],
    plan: Option<&ImplementationPlan>,
    catalog: &[AiTool],
) -> Vec<EntityId> {
    let relevant: Vec<Task> = tasks
        .iter()
        .filter(|task| scoring::ai_potential(task) >= MATCH_POTENTIAL_THRESHOLD)
        .cloned()
        .collect();
    let characteristics = characteristics::analyze_tasks(&relevant);
    let constraints = constraints_from_plan(plan);

    let mut scored: Vec<(&AiTool, u32)> = catalog
        .iter()
        .map(|tool| (tool, score_tool(tool, &characteristics, &constraints)))
        .collect();
    scored.sort_by(|a, b| b.1.cmp(&a.1));

    scored
        .into_iter()
        .take(MAX_RECOMMENDATIONS)
        .map(|(tool, _)| tool.id.clone())
        .collect()
}

// ---------------------------------------------------------------------------
// Recommended categories
// ---------------------------------------------------------------------------

/// Derive the tool-category labels worth exploring for a project, from its
/// characteristics plus constraint-driven additions (managed services for
/// thin teams, open source for thin budgets, enterprise suites and MLOps
/// for heavyweight programs).
pub fn recommended_categories(
    characteristics: &TaskCharacteristics,
    constraints: &ImplementationConstraints,
) -> Vec<&'static str> {
    let mut categories = Vec::new();

    if characteristics.needs_nlp {
        categories.push(CATEGORY_LANGUAGE_MODELS);
    }
    if characteristics.needs_computer_vision {
        categories.push(CATEGORY_COMPUTER_VISION);
    }
    if characteristics.needs_predictive_analytics {
        categories.push(CATEGORY_ML_PLATFORMS);
    }
    if characteristics.data_volume == Tier::High || characteristics.needs_data_processing {
        categories.push(CATEGORY_DATA_PLATFORMS);
    }
    if characteristics.needs_process_automation {
        categories.push(CATEGORY_DEVELOPMENT_FRAMEWORKS);
    }

    if constraints.complexity == Tier::Low || constraints.resources == Tier::Low {
        categories.push(CATEGORY_AI_SERVICES);
    }
    if constraints.budget == Tier::Low {
        categories.push(CATEGORY_OPEN_SOURCE);
    }
    if constraints.complexity == Tier::High && constraints.resources == Tier::High {
        categories.push(CATEGORY_ENTERPRISE_AI);
        categories.push(CATEGORY_MLOPS);
    }

    categories
}

/// Project-level convenience over [`recommended_categories`]: derive
/// characteristics from the high-potential tasks (score >= 7 -- a stricter
/// cut than the matcher's >= 6) and constraints from the plan.
pub fn recommended_categories_for_project(
    tasks: &[Task],
    plan: Option<&ImplementationPlan>,
) -> Vec<&'static str> {
    let relevant: Vec<Task> = tasks
        .iter()
        .filter(|task| scoring::is_high_potential(task))
        .cloned()
        .collect();
    let characteristics = characteristics::analyze_tasks(&relevant);
    let constraints = constraints_from_plan(plan);
    recommended_categories(&characteristics, &constraints)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin_catalog;

    fn task(id: &str, description: &str, ratings: [u8; 4]) -> Task {
        Task {
            id: id.into(),
            workflow_id: "w1".into(),
            name: id.into(),
            description: description.into(),
            predictability: ratings[0],
            data_availability: ratings[1],
            complexity: ratings[2],
            frequency: ratings[3],
        }
    }

    fn plan(timeline: Timeline, resources: Tier, budget: Tier) -> ImplementationPlan {
        ImplementationPlan {
            phases: vec![],
            timeline,
            resources,
            budget,
        }
    }

    // -- constraints_from_plan --

    #[test]
    fn missing_plan_defaults_all_medium() {
        let constraints = constraints_from_plan(None);
        assert_eq!(constraints, ImplementationConstraints::default());
    }

    #[test]
    fn short_lean_plan_derives_low_complexity() {
        let constraints =
            constraints_from_plan(Some(&plan(Timeline::Short, Tier::Low, Tier::Medium)));
        assert_eq!(constraints.complexity, Tier::Low);
    }

    #[test]
    fn long_heavy_plan_derives_high_complexity() {
        let constraints =
            constraints_from_plan(Some(&plan(Timeline::Long, Tier::Medium, Tier::High)));
        assert_eq!(constraints.complexity, Tier::High);
    }

    #[test]
    fn mixed_plan_derives_medium_complexity() {
        let constraints =
            constraints_from_plan(Some(&plan(Timeline::Long, Tier::Low, Tier::Low)));
        assert_eq!(constraints.complexity, Tier::Medium);
    }

    // -- score_tool --

    #[test]
    fn nlp_tool_collects_category_and_capability_points() {
        let catalog = builtin_catalog();
        let gpt = catalog.iter().find(|t| t.id == "tool-1").unwrap();

        let characteristics = TaskCharacteristics {
            needs_nlp: true,
            ..Default::default()
        };
        let constraints = ImplementationConstraints::default();

        // +3 category, +2 capability ("Text Generation"), +2 exact medium
        // complexity, +2 usage-based pricing on a medium budget.
        assert_eq!(score_tool(gpt, &characteristics, &constraints), 9);
    }

    #[test]
    fn adjacent_complexity_scores_one() {
        let catalog = builtin_catalog();
        let vertex = catalog.iter().find(|t| t.id == "tool-2").unwrap();
        assert_eq!(vertex.implementation_complexity, Tier::High);

        let constraints = ImplementationConstraints::default(); // medium
        let none = TaskCharacteristics::default();

        // +1 adjacent complexity, +2 usage pricing.
        assert_eq!(score_tool(vertex, &none, &constraints), 3);
    }

    #[test]
    fn freemium_satisfies_low_budget_free_check() {
        let catalog = builtin_catalog();
        let wandb = catalog.iter().find(|t| t.id == "tool-13").unwrap();
        assert_eq!(wandb.pricing_model, "Freemium");

        let constraints = ImplementationConstraints {
            budget: Tier::Low,
            ..Default::default()
        };
        let score = score_tool(wandb, &TaskCharacteristics::default(), &constraints);
        // +1 adjacent complexity (low vs medium), +2 pricing.
        assert_eq!(score, 3);
    }

    // -- match_tools --

    #[test]
    fn returns_at_most_ten_ids() {
        let tasks = vec![task("t1", "summarize email text", [5, 5, 2, 5])];
        let ids = match_tools(&tasks, None, &builtin_catalog());
        assert_eq!(ids.len(), MAX_RECOMMENDATIONS);
    }

    #[test]
    fn nlp_heavy_project_ranks_language_models_first() {
        let tasks = vec![task("t1", "triage chat and email text", [5, 5, 2, 5])];
        let ids = match_tools(&tasks, None, &builtin_catalog());
        // tool-1 (GPT-4) is the first language model in catalog order.
        assert_eq!(ids[0], "tool-1");
    }

    #[test]
    fn low_potential_tasks_do_not_shape_characteristics() {
        // Heavy vision wording, but the weak task scores below the
        // matching threshold, so no vision boost applies and the vision
        // platform stays out of the top slot.
        let weak = vec![task("t1", "scan photos of receipts", [1, 1, 5, 1])];
        let strong = vec![task("t1", "scan photos of receipts", [5, 5, 2, 5])];

        assert_eq!(match_tools(&strong, None, &builtin_catalog())[0], "tool-14");
        assert_ne!(match_tools(&weak, None, &builtin_catalog())[0], "tool-14");
    }

    #[test]
    fn tied_tools_keep_catalog_order() {
        let catalog = builtin_catalog();
        // No characteristics, default constraints: scores depend only on
        // complexity adjacency and pricing, so many tools tie.
        let ids = match_tools(&[], None, &catalog);

        let constraints = ImplementationConstraints::default();
        let none = TaskCharacteristics::default();
        let position = |id: &str| catalog.iter().position(|t| t.id == id).unwrap();

        for pair in ids.windows(2) {
            let a = score_tool(&catalog[position(&pair[0])], &none, &constraints);
            let b = score_tool(&catalog[position(&pair[1])], &none, &constraints);
            assert!(a >= b);
            if a == b {
                assert!(position(&pair[0]) < position(&pair[1]));
            }
        }
    }

    // -- recommended_categories --

    #[test]
    fn characteristics_map_to_categories() {
        let characteristics = TaskCharacteristics {
            needs_nlp: true,
            needs_predictive_analytics: true,
            needs_data_processing: true,
            ..Default::default()
        };
        let categories =
            recommended_categories(&characteristics, &ImplementationConstraints::default());
        assert_eq!(
            categories,
            vec![CATEGORY_LANGUAGE_MODELS, CATEGORY_ML_PLATFORMS, CATEGORY_DATA_PLATFORMS]
        );
    }

    #[test]
    fn project_categories_only_consider_high_potential_tasks() {
        // 6.5 clears the matcher threshold but not the category cut of 7,
        // so its NLP wording contributes nothing here.
        let tasks = vec![
            task("t1", "summarize email text", [4, 3, 3, 3]), // 6.5
            task("t2", "scan photos", [5, 5, 2, 5]),          // 9.5
        ];
        let categories = recommended_categories_for_project(&tasks, None);
        assert!(categories.contains(&CATEGORY_COMPUTER_VISION));
        assert!(!categories.contains(&CATEGORY_LANGUAGE_MODELS));
    }

    #[test]
    fn constraint_additions() {
        let lean = ImplementationConstraints {
            complexity: Tier::Low,
            budget: Tier::Low,
            ..Default::default()
        };
        let categories = recommended_categories(&TaskCharacteristics::default(), &lean);
        assert_eq!(categories, vec![CATEGORY_AI_SERVICES, CATEGORY_OPEN_SOURCE]);

        let heavy = ImplementationConstraints {
            complexity: Tier::High,
            resources: Tier::High,
            ..Default::default()
        };
        let categories = recommended_categories(&TaskCharacteristics::default(), &heavy);
        assert_eq!(categories, vec![CATEGORY_ENTERPRISE_AI, CATEGORY_MLOPS]);
    }
}
