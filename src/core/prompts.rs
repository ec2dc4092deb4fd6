//! Prompt construction for the two AI operations.
//!
//! Centralizing the prompt text here makes it easy to tune how vibes are
//! interpreted without digging through the service layer. Each builder
//! returns the (system, user) message pair sent to the model.

use super::categories::ALLOWED_CATEGORIES;
use crate::models::PlaceDetails;

/// System prompt for mapping a vibe to place categories.
///
/// Embeds the allowed vocabulary and pins the reply to a JSON object with a
/// single "categories" key so the response can be parsed strictly.
pub fn category_system_prompt() -> String {
    format!(
        "You are an expert hangout planner. Your task is to map a user's \"vibe\" to a list \
         of relevant Google Places API categories from the provided list.\n\
         You must return a valid JSON object with a single key \"categories\" that contains \
         a list of strings.\n\
         Example: {{\"categories\": [\"art_gallery\", \"book_store\", \"museum\"]}}\n\
         Do not include any categories that are not in this list: [{}]\n\
         If no categories fit, return an empty list: {{\"categories\": []}}",
        ALLOWED_CATEGORIES
            .iter()
            .map(|c| format!("\"{}\"", c))
            .collect::<Vec<_>>()
            .join(", ")
    )
}

/// User prompt carrying the raw vibe. No normalization is applied.
pub fn category_user_prompt(vibe: &str) -> String {
    format!("The user's vibe is: \"{}\".", vibe)
}

/// System prompt for the explanation generator: a fixed persona and style.
pub const EXPLANATION_SYSTEM_PROMPT: &str = "You are a witty and friendly Singaporean guide \
    for the 'GoWhere' app. Your goal is to write a short, snappy, and enticing explanation \
    (2-3 sentences) for why a place is a great stop on a user's hangout route. Use a \
    conversational and slightly informal tone.";

/// User prompt interpolating the place facts the model should weave together.
///
/// All values are pre-defaulted by the caller; this function does no
/// placeholder substitution of its own.
pub fn explanation_user_prompt(
    vibe: &str,
    name: &str,
    category: &str,
    rating: &str,
    review_count: &str,
    top_review: &str,
) -> String {
    format!(
        "Generate an explanation based on these details:\n\
         - User's Vibe: \"{vibe}\"\n\
         - Place Name: \"{name}\"\n\
         - Place Category: \"{category}\"\n\
         - Rating: {rating} out of 5 stars\n\
         - Review Count: {review_count} reviews\n\
         - A top review says: \"{top_review}\"\n\n\
         Your task: Explain why this is a fantastic recommendation for someone looking for \
         a \"{vibe}\" experience. Weave in its popularity (based on rating/reviews) naturally."
    )
}

/// Derived display fields for one place, with every gap filled by a placeholder.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceSummary {
    pub name: String,
    pub category: String,
    pub rating: String,
    pub review_count: String,
    pub top_review: String,
}

impl PlaceSummary {
    /// Flatten a `PlaceDetails` into display strings.
    ///
    /// Only the first entry of `types` and of `reviews` is consulted. A
    /// missing key and an explicitly empty list are treated the same way:
    /// both take the placeholder.
    pub fn from_details(place: &PlaceDetails) -> Self {
        let name = if place.name.is_empty() {
            "This place".to_string()
        } else {
            place.name.clone()
        };

        let category = place
            .types
            .first()
            .map(|t| super::categories::display_category(t))
            .unwrap_or_else(|| "interesting spot".to_string());

        let rating = place
            .rating
            .map(|r| r.to_string())
            .unwrap_or_else(|| "N/A".to_string());

        let review_count = place
            .user_ratings_total
            .map(|n| n.to_string())
            .unwrap_or_else(|| "many".to_string());

        let top_review = place
            .reviews
            .first()
            .cloned()
            .unwrap_or_else(|| "It's a popular spot.".to_string());

        Self {
            name,
            category,
            rating,
            review_count,
            top_review,
        }
    }
}
