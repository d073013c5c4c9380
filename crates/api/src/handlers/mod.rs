pub mod assessment;
pub mod charts;
pub mod journey;
pub mod tools;

use journey_core::error::CoreError;
use journey_core::model::Task;

/// Validate the ratings of every task in a request body.
///
/// The engine treats rating ranges as a caller precondition; the API is
/// that caller, so it checks once at the boundary.
pub(crate) fn validate_tasks(tasks: &[Task]) -> Result<(), CoreError> {
    tasks.iter().try_for_each(Task::validate_ratings)
}
