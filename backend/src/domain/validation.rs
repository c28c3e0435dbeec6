//! Field-level validation of student input.
//!
//! Validation failures are aggregated into a [`ValidationReport`] instead of
//! a single domain error so callers see every failing field at once.
//!
//! Clauses name fields by their capitalised labels (`Name`, `Email`, `Age`),
//! which is the wording existing clients of this API already match on.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

use super::ports::StudentValidator;
use super::{StudentDraft, StudentInput};

/// Minimum number of characters in a student name.
pub const NAME_MIN_CHARS: usize = 2;
/// Maximum number of characters in a student name.
pub const NAME_MAX_CHARS: usize = 50;
/// Youngest accepted age, inclusive.
pub const AGE_MIN: i64 = 1;
/// Oldest accepted age, inclusive.
pub const AGE_MAX: i64 = 120;

const NAME_FIELD: &str = "Name";
const EMAIL_FIELD: &str = "Email";
const AGE_FIELD: &str = "Age";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldRule {
    /// The field is absent or empty.
    Required,
    /// The field is present but violates a constraint.
    Invalid,
}

/// A single failing field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    field: &'static str,
    rule: FieldRule,
}

impl FieldViolation {
    /// `field` is absent or empty.
    pub const fn required(field: &'static str) -> Self {
        Self {
            field,
            rule: FieldRule::Required,
        }
    }

    /// `field` is present but breaks a constraint.
    pub const fn invalid(field: &'static str) -> Self {
        Self {
            field,
            rule: FieldRule::Invalid,
        }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rule {
            FieldRule::Required => write!(f, "field {} is required field", self.field),
            FieldRule::Invalid => write!(f, "field {} is invalid", self.field),
        }
    }
}

/// Every field that failed validation, in declaration order.
///
/// # Examples
/// ```
/// use students_api::domain::{FieldViolation, ValidationReport};
///
/// let report = ValidationReport::new(vec![
///     FieldViolation::required("Name"),
///     FieldViolation::invalid("Age"),
/// ]);
/// assert_eq!(
///     report.to_string(),
///     "field Name is required field, field Age is invalid"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    violations: Vec<FieldViolation>,
}

impl ValidationReport {
    /// Collect violations in the order they should be reported.
    pub fn new(violations: Vec<FieldViolation>) -> Self {
        Self { violations }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, violation) in self.violations.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationReport {}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        let pattern = r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*$";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Default validator enforcing the student field constraints.
#[derive(Debug, Default, Clone, Copy)]
pub struct StudentFieldValidator;

impl StudentFieldValidator {
    fn check_name(name: Option<String>) -> Result<String, FieldViolation> {
        let name = match name {
            Some(name) if !name.is_empty() => name,
            _ => return Err(FieldViolation::required(NAME_FIELD)),
        };
        let length = name.chars().count();
        if (NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&length) {
            Ok(name)
        } else {
            Err(FieldViolation::invalid(NAME_FIELD))
        }
    }

    fn check_email(email: Option<String>) -> Result<String, FieldViolation> {
        match email {
            Some(email) if email.is_empty() => Err(FieldViolation::required(EMAIL_FIELD)),
            Some(email) if email_regex().is_match(&email) => Ok(email),
            Some(_) => Err(FieldViolation::invalid(EMAIL_FIELD)),
            None => Err(FieldViolation::required(EMAIL_FIELD)),
        }
    }

    fn check_age(age: Option<i64>) -> Result<i32, FieldViolation> {
        let age = age.ok_or(FieldViolation::required(AGE_FIELD))?;
        if !(AGE_MIN..=AGE_MAX).contains(&age) {
            return Err(FieldViolation::invalid(AGE_FIELD));
        }
        i32::try_from(age).map_err(|_| FieldViolation::invalid(AGE_FIELD))
    }
}

impl StudentValidator for StudentFieldValidator {
    fn validate(&self, input: StudentInput) -> Result<StudentDraft, ValidationReport> {
        let StudentInput { name, email, age } = input;
        match (
            Self::check_name(name),
            Self::check_email(email),
            Self::check_age(age),
        ) {
            (Ok(name), Ok(email), Ok(age)) => Ok(StudentDraft::new(name, email, age)),
            (name, email, age) => Err(ValidationReport::new(
                [name.err(), email.err(), age.err()]
                    .into_iter()
                    .flatten()
                    .collect(),
            )),
        }
    }
}
