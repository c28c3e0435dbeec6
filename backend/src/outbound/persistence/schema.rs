//! Diesel table definitions for the PostgreSQL schema.
//!
//! Must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Student records keyed by an auto-assigned identifier.
    students (id) {
        /// Primary key assigned by a `BIGSERIAL` sequence.
        id -> Int8,
        name -> Text,
        email -> Text,
        age -> Int4,
    }
}
