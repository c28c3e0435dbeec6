//! PostgreSQL-backed `StudentRepository` implementation using Diesel ORM.
//!
//! Each port operation is a single statement; PostgreSQL's per-statement
//! atomicity is the only consistency guarantee.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::info;

use crate::domain::ports::StudentRepository;
use crate::domain::{Error, Student, StudentDraft, StudentId};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{StudentRow, StudentValues};
use super::pool::DbPool;
use super::schema::students;

/// Diesel-backed implementation of the `StudentRepository` port.
#[derive(Clone)]
pub struct DieselStudentRepository {
    pool: DbPool,
}

impl DieselStudentRepository {
    /// Repository issuing one statement per operation on `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Zero affected rows means the id did not match; anything else succeeded.
fn require_affected(affected: usize, id: StudentId) -> Result<(), Error> {
    if affected == 0 {
        return Err(Error::student_not_found(id));
    }
    Ok(())
}

#[async_trait]
impl StudentRepository for DieselStudentRepository {
    async fn create(&self, draft: &StudentDraft) -> Result<StudentId, Error> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let id: i64 = diesel::insert_into(students::table)
            .values(&StudentValues::from(draft))
            .returning(students::id)
            .get_result(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "failed to insert student"))?;

        Ok(StudentId::new(id))
    }

    async fn find_by_id(&self, id: StudentId) -> Result<Student, Error> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<StudentRow> = students::table
            .find(id.get())
            .select(StudentRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(err, "failed to query student"))?;

        row.map(Student::from)
            .ok_or_else(|| Error::student_not_found(id))
    }

    async fn list(&self) -> Result<Vec<Student>, Error> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<StudentRow> = students::table
            .order(students::id.asc())
            .select(StudentRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "failed to query students"))?;

        Ok(rows.into_iter().map(Student::from).collect())
    }

    async fn update(&self, id: StudentId, draft: &StudentDraft) -> Result<(), Error> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let affected = diesel::update(students::table.find(id.get()))
            .set(&StudentValues::from(draft))
            .execute(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "failed to update student"))?;

        require_affected(affected, id)?;
        info!(id = %id, rows_affected = affected, "student updated");
        Ok(())
    }

    async fn delete(&self, id: StudentId) -> Result<(), Error> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let affected = diesel::delete(students::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "failed to delete student"))?;

        require_affected(affected, id)
    }
}
