//! Classification of Diesel and pool failures into storage domain errors.

use tracing::debug;

use crate::domain::Error;

use super::pool::PoolError;

/// Map a pool checkout failure into a storage error.
pub(super) fn map_pool_error(error: PoolError) -> Error {
    debug!(%error, "database pool checkout failed");
    Error::storage("database connection unavailable").with_cause(error)
}

/// Map a Diesel failure into a storage error described by `operation`.
///
/// Absent rows are handled by callers through `.optional()` or affected-row
/// counts, so every Diesel error reaching this function is a storage failure.
pub(super) fn map_diesel_error(error: diesel::result::Error, operation: &'static str) -> Error {
    use diesel::result::Error as DieselError;

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), operation, "diesel operation failed");
        }
        _ => debug!(%error, operation, "diesel operation failed"),
    }

    Error::storage(operation).with_cause(error)
}
