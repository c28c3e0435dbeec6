//! Process-local `StudentRepository` used by tests and by servers started
//! without a database URL.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::StudentRepository;
use crate::domain::{Error, Student, StudentDraft, StudentId};

#[derive(Debug)]
struct Store {
    next_id: i64,
    rows: BTreeMap<StudentId, StudentDraft>,
}

impl Default for Store {
    fn default() -> Self {
        Self {
            next_id: 1,
            rows: BTreeMap::new(),
        }
    }
}

/// In-memory student table with auto-incrementing identifiers starting at 1.
///
/// Identifiers are never reused after deletion. Listing returns students in
/// ascending id order.
///
/// # Examples
/// ```
/// use students_api::domain::ports::StudentRepository;
/// use students_api::domain::StudentDraft;
/// use students_api::outbound::memory::InMemoryStudentRepository;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let repo = InMemoryStudentRepository::default();
/// let id = repo.create(&StudentDraft::new("Al", "a@b.com", 30)).await.unwrap();
/// assert_eq!(id.get(), 1);
/// # });
/// ```
#[derive(Debug, Default)]
pub struct InMemoryStudentRepository {
    store: Mutex<Store>,
}

impl InMemoryStudentRepository {
    fn lock(&self) -> Result<MutexGuard<'_, Store>, Error> {
        self.store
            .lock()
            .map_err(|_| Error::storage("in-memory student store is poisoned"))
    }
}

#[async_trait]
impl StudentRepository for InMemoryStudentRepository {
    async fn create(&self, draft: &StudentDraft) -> Result<StudentId, Error> {
        let mut store = self.lock()?;
        let id = StudentId::new(store.next_id);
        store.next_id += 1;
        store.rows.insert(id, draft.clone());
        Ok(id)
    }

    async fn find_by_id(&self, id: StudentId) -> Result<Student, Error> {
        let store = self.lock()?;
        store
            .rows
            .get(&id)
            .map(|draft| Student::new(id, draft.clone()))
            .ok_or_else(|| Error::student_not_found(id))
    }

    async fn list(&self) -> Result<Vec<Student>, Error> {
        let store = self.lock()?;
        Ok(store
            .rows
            .iter()
            .map(|(id, draft)| Student::new(*id, draft.clone()))
            .collect())
    }

    async fn update(&self, id: StudentId, draft: &StudentDraft) -> Result<(), Error> {
        let mut store = self.lock()?;
        let row = store
            .rows
            .get_mut(&id)
            .ok_or_else(|| Error::student_not_found(id))?;
        *row = draft.clone();
        Ok(())
    }

    async fn delete(&self, id: StudentId) -> Result<(), Error> {
        let mut store = self.lock()?;
        store
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| Error::student_not_found(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorKind;
    use rstest::{fixture, rstest};

    #[fixture]
    fn repo() -> InMemoryStudentRepository {
        InMemoryStudentRepository::default()
    }

    fn draft(name: &str) -> StudentDraft {
        StudentDraft::new(name, format!("{}@example.com", name.to_lowercase()), 21)
    }

    #[rstest]
    #[tokio::test]
    async fn create_then_find_round_trips(repo: InMemoryStudentRepository) {
        let id = repo.create(&draft("Ada")).await.expect("create");
        let student = repo.find_by_id(id).await.expect("find");
        assert_eq!(student, Student::new(id, draft("Ada")));
    }

    #[rstest]
    #[tokio::test]
    async fn ids_increase_and_are_not_reused(repo: InMemoryStudentRepository) {
        let first = repo.create(&draft("Ada")).await.expect("create first");
        repo.delete(first).await.expect("delete first");
        let second = repo.create(&draft("Bob")).await.expect("create second");
        assert_eq!((first.get(), second.get()), (1, 2));
    }

    #[rstest]
    #[tokio::test]
    async fn list_is_empty_initially_then_ordered(repo: InMemoryStudentRepository) {
        assert!(repo.list().await.expect("list").is_empty());

        repo.create(&draft("Ada")).await.expect("create");
        repo.create(&draft("Bob")).await.expect("create");
        let names: Vec<String> = repo
            .list()
            .await
            .expect("list")
            .iter()
            .map(|student| student.name().to_owned())
            .collect();
        assert_eq!(names, ["Ada", "Bob"]);
    }

    #[rstest]
    #[tokio::test]
    async fn update_replaces_fields(repo: InMemoryStudentRepository) {
        let id = repo.create(&draft("Ada")).await.expect("create");
        repo.update(id, &draft("Grace")).await.expect("update");
        assert_eq!(repo.find_by_id(id).await.expect("find").name(), "Grace");
    }

    #[rstest]
    #[tokio::test]
    async fn missing_ids_are_not_found(repo: InMemoryStudentRepository) {
        let id = StudentId::new(404);
        let errors = [
            repo.find_by_id(id).await.expect_err("find"),
            repo.update(id, &draft("Ada")).await.expect_err("update"),
            repo.delete(id).await.expect_err("delete"),
        ];
        for err in errors {
            assert_eq!(err.kind(), ErrorKind::NotFound);
            assert!(err.message().contains("404"));
        }
    }
}
