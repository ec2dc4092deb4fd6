// Core domain logic exports
pub mod categories;
pub mod prompts;

pub use categories::{display_category, is_allowed, retain_allowed, ALLOWED_CATEGORIES};
pub use prompts::PlaceSummary;
