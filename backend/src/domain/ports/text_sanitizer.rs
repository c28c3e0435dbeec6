//! Port for cleaning free-text fields before they reach storage.

/// Strips or escapes unsafe markup from user-supplied text.
#[cfg_attr(test, mockall::automock)]
pub trait TextSanitizer: Send + Sync {
    /// Return a cleaned copy of `input`.
    fn sanitize(&self, input: &str) -> String;
}

/// Sanitizer that returns its input unchanged, for tests that do not care
/// about markup handling.
#[derive(Debug, Default, Clone, Copy)]
pub struct PassthroughSanitizer;

impl TextSanitizer for PassthroughSanitizer {
    fn sanitize(&self, input: &str) -> String {
        input.to_owned()
    }
}
