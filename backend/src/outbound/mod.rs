//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL-backed student repository using Diesel ORM
//! - **memory**: process-local student repository for tests and database-less
//!   runs
//! - **sanitizer**: HTML sanitisation of free-text fields via `ammonia`
//!
//! Adapters are thin translators that convert between domain types and
//! infrastructure-specific representations. They contain no business logic
//! beyond classifying failures into domain errors.

pub mod memory;
pub mod persistence;
pub mod sanitizer;
