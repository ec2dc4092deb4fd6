//! GoWhere AI - AI service for the GoWhere hangout planner
//!
//! This library maps user "vibes" to place categories and generates short
//! explanations for recommended places, by prompting an OpenAI-style
//! chat-completion API. Both operations degrade to benign defaults when the
//! upstream call fails.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{is_allowed, retain_allowed, ALLOWED_CATEGORIES};
pub use models::{CategoryOutcome, MapperStatus, PlaceDetails};
pub use services::{AiService, CategoryMapper, ExplanationGenerator, OpenAiClient};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        assert_eq!(ALLOWED_CATEGORIES.len(), 19);
        assert!(is_allowed("museum"));
    }
}
