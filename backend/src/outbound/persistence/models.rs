//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use diesel::prelude::*;

use crate::domain::{Student, StudentDraft, StudentId};

use super::schema::students;

/// Row struct for reading from the students table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = students)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct StudentRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub age: i32,
}

impl From<StudentRow> for Student {
    fn from(row: StudentRow) -> Self {
        let StudentRow {
            id,
            name,
            email,
            age,
        } = row;
        Self::new(StudentId::new(id), StudentDraft::new(name, email, age))
    }
}

/// Column values written on insert and update.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = students)]
pub(crate) struct StudentValues<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub age: i32,
}

impl<'a> From<&'a StudentDraft> for StudentValues<'a> {
    fn from(draft: &'a StudentDraft) -> Self {
        Self {
            name: draft.name(),
            email: draft.email(),
            age: draft.age(),
        }
    }
}
