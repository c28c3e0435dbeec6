//! Student data model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Storage-assigned student identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(i64);

impl StudentId {
    /// Wrap a raw identifier produced by a storage adapter.
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Access the raw identifier.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<StudentId> for i64 {
    fn from(value: StudentId) -> Self {
        value.0
    }
}

/// Unvalidated student fields as decoded from a request body.
///
/// Every field is optional so that validators can distinguish a missing
/// field from one that is present but out of range.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StudentInput {
    /// Requested name.
    pub name: Option<String>,
    /// Requested email address.
    pub email: Option<String>,
    /// Requested age; wide enough to report out-of-range values as invalid.
    pub age: Option<i64>,
}

/// Validated student fields ready to be written by a storage adapter.
///
/// Obtain drafts from a `StudentValidator`; the constructor is public so
/// alternative validators and test doubles can build them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentDraft {
    name: String,
    email: String,
    age: i32,
}

impl StudentDraft {
    /// Build a draft from already-validated parts.
    pub fn new(name: impl Into<String>, email: impl Into<String>, age: i32) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            age,
        }
    }

    /// Student name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Contact email address.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Age in whole years.
    pub fn age(&self) -> i32 {
        self.age
    }

    /// Apply `clean` to every free-text field.
    pub fn map_text(self, mut clean: impl FnMut(&str) -> String) -> Self {
        Self {
            name: clean(&self.name),
            email: clean(&self.email),
            age: self.age,
        }
    }
}

/// Turn a draft back into input so it can be validated again, e.g. after
/// sanitizing.
impl From<StudentDraft> for StudentInput {
    fn from(draft: StudentDraft) -> Self {
        let StudentDraft { name, email, age } = draft;
        Self {
            name: Some(name),
            email: Some(email),
            age: Some(i64::from(age)),
        }
    }
}

/// Persisted student record.
///
/// ## Invariants
/// - `id` is assigned by storage and never changes.
/// - `name`, `email`, and `age` passed validation before being stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    id: StudentId,
    name: String,
    email: String,
    age: i32,
}

impl Student {
    /// Combine a storage-assigned id with the stored fields.
    pub fn new(id: StudentId, draft: StudentDraft) -> Self {
        let StudentDraft { name, email, age } = draft;
        Self {
            id,
            name,
            email,
            age,
        }
    }

    /// Storage-assigned identifier.
    pub fn id(&self) -> StudentId {
        self.id
    }

    /// Student name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Contact email address.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Age in whole years.
    pub fn age(&self) -> i32 {
        self.age
    }
}
