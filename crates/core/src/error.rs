//! Domain error type shared by all engine modules.

/// Error type for domain-level failures.
///
/// The engine itself favors defensive defaults over errors (empty input
/// yields neutral output); `Validation` is produced only by the explicit
/// validation entry points callers opt into at their boundary.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Input violated a documented precondition (e.g. a rating outside
    /// 1..=5, or a wizard step number outside 1..=9).
    #[error("Validation error: {0}")]
    Validation(String),

    /// A referenced entity does not exist.
    #[error("{entity} with id {id} not found")]
    NotFound {
        entity: &'static str,
        id: String,
    },

    /// An unexpected internal failure.
    #[error("Internal error: {0}")]
    Internal(String),
}
