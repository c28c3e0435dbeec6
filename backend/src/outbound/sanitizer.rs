//! `TextSanitizer` adapter backed by `ammonia`.
//!
//! Uses ammonia's default allow-list, which keeps common formatting tags,
//! removes scripts, styles and event-handler attributes, and escapes stray
//! markup characters.

use crate::domain::ports::TextSanitizer;

/// Allow-list HTML sanitizer for user-generated text.
#[derive(Debug, Default, Clone, Copy)]
pub struct AmmoniaSanitizer;

impl TextSanitizer for AmmoniaSanitizer {
    fn sanitize(&self, input: &str) -> String {
        ammonia::clean(input)
    }
}
