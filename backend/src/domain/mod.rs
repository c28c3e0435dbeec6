//! Domain primitives, errors, and ports.
//!
//! Purpose: define the student entity, the transport-agnostic error model,
//! and the ports that inbound adapters call and outbound adapters implement.
//!
//! Public surface:
//! - Error / ErrorKind: classified failure raised by every layer.
//! - Student, StudentDraft, StudentInput, StudentId: the resource model.
//! - ValidationReport, FieldViolation: aggregated field validation failures.
//! - StudentFieldValidator: default `StudentValidator` implementation.

pub mod error;
pub mod ports;
pub mod student;
pub mod validation;

pub use self::error::{Error, ErrorCause, ErrorKind};
pub use self::student::{Student, StudentDraft, StudentId, StudentInput};
pub use self::validation::{
    AGE_MAX, AGE_MIN, FieldViolation, NAME_MAX_CHARS, NAME_MIN_CHARS,
    StudentFieldValidator, ValidationReport,
};

/// HTTP header carrying the per-request trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";
