//! AI-potential scoring for individual tasks.
//!
//! One canonical formula, used by every consumer (workflow analysis, plan
//! generation, tool matching): a weighted sum of the four ratings with
//! complexity inverted, scaled to 0-10 and rounded to the nearest 0.5.
//! Ratings outside `1..=5` are a caller precondition -- the scorer does not
//! validate (see [`crate::model::Task::validate_ratings`]).

use crate::model::Task;

// ---------------------------------------------------------------------------
// Formula weights
// ---------------------------------------------------------------------------

/// Weight of the predictability rating.
pub const WEIGHT_PREDICTABILITY: f64 = 0.3;
/// Weight of the data-availability rating.
pub const WEIGHT_DATA_AVAILABILITY: f64 = 0.3;
/// Weight of the (inverted) complexity rating.
pub const WEIGHT_COMPLEXITY: f64 = 0.2;
/// Weight of the frequency rating.
pub const WEIGHT_FREQUENCY: f64 = 0.2;

/// Complexity is inverted as `6 - complexity` so 5 becomes 1 and 1 becomes 5.
pub const COMPLEXITY_INVERSION_BASE: f64 = 6.0;

/// The weighted sum lands on a 0-5 scale; doubling maps it to 0-10.
pub const SCORE_SCALE: f64 = 2.0;

// ---------------------------------------------------------------------------
// Shared thresholds
// ---------------------------------------------------------------------------

/// Score at or above which a task counts as high-potential.
pub const HIGH_POTENTIAL_THRESHOLD: f64 = 7.0;
/// Maximum complexity rating for a task to qualify as a quick win.
pub const QUICK_WIN_MAX_COMPLEXITY: u8 = 3;
/// Minimum frequency rating for a task to qualify as a bottleneck.
pub const BOTTLENECK_MIN_FREQUENCY: u8 = 4;
/// Score below which a frequent task counts as a bottleneck.
pub const BOTTLENECK_SCORE_CEILING: f64 = 5.0;

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

/// Compute the AI-potential score for a task, in `[0, 10]`.
///
/// Predictability and data availability are the strongest positive signals
/// for automatability; complexity penalizes; frequency is a moderate
/// amplifier (recurring tasks justify the automation investment). The
/// result is rounded to the nearest 0.5 to keep displayed scores stable.
pub fn ai_potential(task: &Task) -> f64 {
    let weighted = task.predictability as f64 * WEIGHT_PREDICTABILITY
        + task.data_availability as f64 * WEIGHT_DATA_AVAILABILITY
        + (COMPLEXITY_INVERSION_BASE - task.complexity as f64) * WEIGHT_COMPLEXITY
        + task.frequency as f64 * WEIGHT_FREQUENCY;

    round_to_half(weighted * SCORE_SCALE)
}

/// Round to the nearest 0.5.
pub fn round_to_half(value: f64) -> f64 {
    (value * 2.0).round() / 2.0
}

/// Whether a task scores at or above the high-potential threshold.
pub fn is_high_potential(task: &Task) -> bool {
    ai_potential(task) >= HIGH_POTENTIAL_THRESHOLD
}

/// Quick win: high potential and cheap to implement.
pub fn is_quick_win(task: &Task) -> bool {
    is_high_potential(task) && task.complexity <= QUICK_WIN_MAX_COMPLEXITY
}

/// Bottleneck: performed frequently but poorly suited to automation -- a
/// process-redesign signal rather than an automation candidate.
pub fn is_bottleneck(task: &Task) -> bool {
    task.frequency >= BOTTLENECK_MIN_FREQUENCY && ai_potential(task) < BOTTLENECK_SCORE_CEILING
}
