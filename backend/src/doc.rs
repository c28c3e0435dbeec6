//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the five students endpoints, the health probes and
//! the wire schemas they use. The document backs Swagger UI in debug builds
//! and is exported by `cargo run --bin openapi-dump`.

use crate::inbound::http::ErrorBody;
use crate::inbound::http::health::ProbeBody;
use crate::inbound::http::schemas::{StudentInputSchema, StudentSchema};
use crate::inbound::http::students::{CreatedResponse, MessageResponse};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Students API",
        description = "CRUD over student records with uniform JSON error envelopes."
    ),
    servers(
        (url = "/", description = "Routes are also served under /api")
    ),
    paths(
        crate::inbound::http::students::create_student,
        crate::inbound::http::students::list_students,
        crate::inbound::http::students::get_student,
        crate::inbound::http::students::update_student,
        crate::inbound::http::students::delete_student,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        StudentSchema,
        StudentInputSchema,
        CreatedResponse,
        MessageResponse,
        ErrorBody,
        ProbeBody
    )),
    tags(
        (name = "students", description = "Student records"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
