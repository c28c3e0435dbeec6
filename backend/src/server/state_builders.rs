//! Builders selecting port implementations for the HTTP state.

use std::sync::Arc;

use actix_web::web;
use tracing::warn;

use crate::domain::StudentFieldValidator;
use crate::domain::ports::StudentRepository;
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::InMemoryStudentRepository;
use crate::outbound::persistence::DieselStudentRepository;
use crate::outbound::sanitizer::AmmoniaSanitizer;

use super::ServerConfig;

/// Pick the students repository: PostgreSQL when a pool is configured,
/// otherwise a process-local store.
fn build_student_repository(config: &ServerConfig) -> Arc<dyn StudentRepository> {
    match &config.db_pool {
        Some(pool) => Arc::new(DieselStudentRepository::new(pool.clone())),
        None => {
            warn!("no database configured; students are kept in memory and lost on restart");
            Arc::new(InMemoryStudentRepository::default())
        }
    }
}

/// Assemble the handler state with the production validator and sanitizer.
pub(crate) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    web::Data::new(HttpState::new(
        build_student_repository(config),
        Arc::new(StudentFieldValidator),
        Arc::new(AmmoniaSanitizer),
    ))
}
