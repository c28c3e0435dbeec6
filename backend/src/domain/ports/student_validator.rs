//! Port for field-level validation of decoded student input.

use crate::domain::{StudentDraft, StudentInput, ValidationReport};

/// Checks decoded input against the student field constraints.
///
/// Implementations report every failing field rather than stopping at the
/// first one.
#[cfg_attr(test, mockall::automock)]
pub trait StudentValidator: Send + Sync {
    /// Validate `input`, producing a draft that storage adapters may persist.
    fn validate(&self, input: StudentInput) -> Result<StudentDraft, ValidationReport>;
}
