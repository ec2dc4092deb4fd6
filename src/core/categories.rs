//! The fixed place-category vocabulary.
//!
//! A curated subset of Google Places API types, chosen for hangout planning.
//! Everything the mapper returns to callers must come from this list; the
//! model is instructed to stay inside it, but the filter here is what actually
//! enforces the invariant.

/// Place categories the mapper is allowed to return.
pub const ALLOWED_CATEGORIES: [&str; 19] = [
    "amusement_park",
    "art_gallery",
    "bakery",
    "bar",
    "book_store",
    "bowling_alley",
    "cafe",
    "clothing_store",
    "department_store",
    "movie_theater",
    "museum",
    "night_club",
    "park",
    "restaurant",
    "shopping_mall",
    "spa",
    "stadium",
    "tourist_attraction",
    "zoo",
];

/// Check whether a category is part of the allowed vocabulary.
pub fn is_allowed(category: &str) -> bool {
    ALLOWED_CATEGORIES.contains(&category)
}

/// Drop any category the model invented outside the allowed vocabulary.
///
/// Returns the surviving categories in their original order, plus the
/// discarded values so the caller can log them.
pub fn retain_allowed(categories: Vec<String>) -> (Vec<String>, Vec<String>) {
    let (kept, discarded): (Vec<String>, Vec<String>) =
        categories.into_iter().partition(|c| is_allowed(c));
    (kept, discarded)
}

/// Format a raw category value for display in prose ("book_store" -> "book store").
pub fn display_category(category: &str) -> String {
    category.replace('_', " ")
}
