//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{StudentRepository, StudentValidator, TextSanitizer};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub students: Arc<dyn StudentRepository>,
    pub validator: Arc<dyn StudentValidator>,
    pub sanitizer: Arc<dyn TextSanitizer>,
}

impl HttpState {
    /// Bundle the ports used by the students handlers.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use students_api::domain::StudentFieldValidator;
    /// use students_api::domain::ports::PassthroughSanitizer;
    /// use students_api::inbound::http::state::HttpState;
    /// use students_api::outbound::memory::InMemoryStudentRepository;
    ///
    /// let state = HttpState::new(
    ///     Arc::new(InMemoryStudentRepository::default()),
    ///     Arc::new(StudentFieldValidator),
    ///     Arc::new(PassthroughSanitizer),
    /// );
    /// let _students = state.students.clone();
    /// ```
    pub fn new(
        students: Arc<dyn StudentRepository>,
        validator: Arc<dyn StudentValidator>,
        sanitizer: Arc<dyn TextSanitizer>,
    ) -> Self {
        Self {
            students,
            validator,
            sanitizer,
        }
    }
}
