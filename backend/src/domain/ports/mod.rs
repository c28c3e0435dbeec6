//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Handlers depend on these traits only; adapters under `outbound` provide
//! the implementations and are injected at startup.

mod student_repository;
mod student_validator;
mod text_sanitizer;

#[cfg(test)]
pub use student_repository::MockStudentRepository;
pub use student_repository::StudentRepository;
#[cfg(test)]
pub use student_validator::MockStudentValidator;
pub use student_validator::StudentValidator;
#[cfg(test)]
pub use text_sanitizer::MockTextSanitizer;
pub use text_sanitizer::{PassthroughSanitizer, TextSanitizer};
