//! Domain-level error types.
//!
//! These errors are transport agnostic. Outbound adapters classify
//! infrastructure failures into one of the [`ErrorKind`] variants at the point
//! of detection; inbound adapters translate them into protocol-specific
//! envelopes.

use std::fmt;
use std::sync::Arc;

use super::StudentId;

/// Shared, type-erased lower-level failure attached to a domain error.
pub type ErrorCause = Arc<dyn std::error::Error + Send + Sync + 'static>;

/// Closed set of failure categories understood by every adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The requested resource does not exist.
    NotFound,
    /// The caller supplied input that could not be decoded or accepted.
    InvalidInput,
    /// The storage engine failed to complete an operation.
    Storage,
    /// Any other unexpected failure.
    Internal,
}

impl ErrorKind {
    /// Stable identifier used in operational logs.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotFound => "NOT_FOUND",
            Self::InvalidInput => "INVALID_INPUT",
            Self::Storage => "DATABASE_ERROR",
            Self::Internal => "INTERNAL_ERROR",
        }
    }

    /// Whether the error message may be shown to API callers verbatim.
    pub const fn is_client_safe(self) -> bool {
        matches!(self, Self::NotFound | Self::InvalidInput)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classified failure raised once per request and consumed by the inbound
/// adapter that owns the response.
///
/// ## Invariants
/// - `kind` never changes after construction.
/// - `cause` is diagnostic only and is never serialised to clients.
///
/// # Examples
/// ```
/// use students_api::domain::{Error, ErrorKind};
///
/// let err = Error::storage("failed to insert student")
///     .with_cause(std::io::Error::other("connection reset"));
/// assert_eq!(err.kind(), ErrorKind::Storage);
/// assert!(err.to_string().contains("connection reset"));
/// ```
#[derive(Debug, Clone)]
pub struct Error {
    kind: ErrorKind,
    message: String,
    cause: Option<ErrorCause>,
}

impl Error {
    fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            cause: None,
        }
    }

    /// Convenience constructor for [`ErrorKind::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Convenience constructor for [`ErrorKind::InvalidInput`].
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidInput, message)
    }

    /// Convenience constructor for [`ErrorKind::Storage`].
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Storage, message)
    }

    /// Convenience constructor for [`ErrorKind::Internal`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    /// Wrap a failure that was never classified as an internal error.
    pub fn unexpected<E>(cause: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
    {
        Self::internal("an unexpected error occurred").with_cause(cause)
    }

    /// Standard not-found error for a missing student record.
    pub fn student_not_found(id: StudentId) -> Self {
        Self::not_found(format!("student with id {id} not found"))
    }

    /// Attach the lower-level failure that triggered this error.
    ///
    /// Not-found errors describe an absence rather than a failure, so the
    /// cause is dropped for [`ErrorKind::NotFound`].
    pub fn with_cause<E>(mut self, cause: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
    {
        if self.kind != ErrorKind::NotFound {
            self.cause = Some(Arc::from(cause.into()));
        }
        self
    }

    /// Failure category.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Human-readable message. Only safe to surface for client-safe kinds.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Underlying failure, if any.
    pub fn cause(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }
}

/// Renders kind, message, and cause for operational logs.
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.cause {
            Some(cause) => write!(f, "{}: {} ({cause})", self.kind, self.message),
            None => write!(f, "{}: {}", self.kind, self.message),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn std::error::Error + 'static))
    }
}
