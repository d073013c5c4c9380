//! Shared primitive vocabulary used across the engine.

use serde::{Deserialize, Serialize};

/// Entity identifiers are opaque strings assigned by the caller
/// (the persistence layer stores them; the engine never mints ids).
pub type EntityId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

// ---------------------------------------------------------------------------
// Ordinal tiers
// ---------------------------------------------------------------------------

/// Three-level qualitative tier used for workflow complexity, data
/// readiness, resource and budget estimates, and tool implementation
/// complexity.
///
/// Ordered `Low < Medium < High` so tier escalation can use `max`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Low,
    #[default]
    Medium,
    High,
}

impl Tier {
    /// Wire/database string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Whether two tiers are exactly one level apart (low-medium or
    /// medium-high, never low-high).
    pub fn is_adjacent_to(self, other: Tier) -> bool {
        (self as i8 - other as i8).abs() == 1
    }
}

/// Three-level timeline horizon for an implementation plan.
///
/// Ordered `Short < Medium < Long`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Timeline {
    Short,
    #[default]
    Medium,
    Long,
}

impl Timeline {
    /// Wire/database string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Short => "short",
            Self::Medium => "medium",
            Self::Long => "long",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Tier --

    #[test]
    fn tier_ordering_supports_escalation() {
        assert!(Tier::Low < Tier::Medium);
        assert!(Tier::Medium < Tier::High);
        assert_eq!(Tier::High.max(Tier::Medium), Tier::High);
    }

    #[test]
    fn tier_adjacency() {
        assert!(Tier::Low.is_adjacent_to(Tier::Medium));
        assert!(Tier::Medium.is_adjacent_to(Tier::High));
        assert!(!Tier::Low.is_adjacent_to(Tier::High));
        assert!(!Tier::Medium.is_adjacent_to(Tier::Medium));
    }

    #[test]
    fn tier_default_is_medium() {
        assert_eq!(Tier::default(), Tier::Medium);
    }

    // -- Timeline --

    #[test]
    fn timeline_wire_values() {
        assert_eq!(Timeline::Short.as_str(), "short");
        assert_eq!(Timeline::Medium.as_str(), "medium");
        assert_eq!(Timeline::Long.as_str(), "long");
    }
}
