//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their wire shape and live in the inbound adapter
//! where framework concerns belong.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::Student`].
#[derive(ToSchema)]
#[schema(as = Student)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct StudentSchema {
    /// Storage-assigned identifier.
    #[schema(example = 1)]
    id: i64,
    /// Display name, 2 to 50 characters.
    #[schema(example = "Ada Lovelace")]
    name: String,
    /// Contact email address.
    #[schema(example = "ada@example.com")]
    email: String,
    /// Age in years, 1 to 120.
    #[schema(example = 36)]
    age: i32,
}

/// OpenAPI schema for [`crate::domain::StudentInput`], the body accepted by
/// create and update.
#[derive(ToSchema)]
#[schema(as = StudentInput)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct StudentInputSchema {
    #[schema(example = "Ada Lovelace", min_length = 2, max_length = 50)]
    name: String,
    #[schema(example = "ada@example.com")]
    email: String,
    #[schema(example = 36, minimum = 1, maximum = 120)]
    age: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::PartialSchema;

    #[test]
    fn student_schema_lists_every_field() {
        let json = serde_json::to_value(StudentSchema::schema()).expect("schema serialises");
        let properties = json
            .get("properties")
            .and_then(|v| v.as_object())
            .expect("object schema");
        for field in ["id", "name", "email", "age"] {
            assert!(properties.contains_key(field), "missing {field}");
        }
    }
}
