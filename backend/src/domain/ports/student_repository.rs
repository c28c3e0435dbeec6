//! Port abstraction for student persistence adapters.

use async_trait::async_trait;

use crate::domain::{Error, Student, StudentDraft, StudentId};

/// Persistence contract for student records.
///
/// Implementations must classify every failure before returning it:
/// an absent row becomes [`ErrorKind::NotFound`](crate::domain::ErrorKind)
/// and anything else becomes [`ErrorKind::Storage`](crate::domain::ErrorKind).
/// Raw driver errors never cross this boundary except as an attached cause.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Insert a student and return its storage-assigned identifier.
    async fn create(&self, draft: &StudentDraft) -> Result<StudentId, Error>;

    /// Fetch a student by identifier.
    async fn find_by_id(&self, id: StudentId) -> Result<Student, Error>;

    /// Fetch every stored student. Order is defined by the adapter.
    async fn list(&self) -> Result<Vec<Student>, Error>;

    /// Replace the fields of an existing student.
    async fn update(&self, id: StudentId, draft: &StudentDraft) -> Result<(), Error>;

    /// Remove a student.
    async fn delete(&self, id: StudentId) -> Result<(), Error>;
}
