use std::sync::Arc;

use crate::core::prompts::{self, PlaceSummary};
use crate::models::PlaceDetails;
use crate::services::openai::{GenerationParams, OpenAiClient};

const GENERATOR_PARAMS: GenerationParams = GenerationParams {
    // Slightly more creative than the mapper.
    temperature: 0.8,
    max_tokens: 150,
    json_object: false,
};

/// Generates a short, engaging explanation for why a place fits a vibe.
///
/// Never returns an error: any upstream failure degrades to a generic
/// fallback string that still names the place.
pub struct ExplanationGenerator {
    client: Arc<OpenAiClient>,
}

impl ExplanationGenerator {
    pub fn new(client: Arc<OpenAiClient>) -> Self {
        Self { client }
    }

    /// Produce a 2-3 sentence explanation for the place, in the app's voice.
    ///
    /// Missing place fields are filled with placeholders before prompting,
    /// so a bare `{name}` record still yields a coherent prompt.
    pub async fn generate(&self, place: &PlaceDetails, vibe: &str) -> String {
        let summary = PlaceSummary::from_details(place);

        let user = prompts::explanation_user_prompt(
            vibe,
            &summary.name,
            &summary.category,
            &summary.rating,
            &summary.review_count,
            &summary.top_review,
        );

        match self
            .client
            .chat(prompts::EXPLANATION_SYSTEM_PROMPT, &user, GENERATOR_PARAMS)
            .await
        {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(
                    "Explanation call failed for '{}' (vibe '{}'): {}",
                    summary.name,
                    vibe,
                    e
                );
                fallback_explanation(&summary.name)
            }
        }
    }
}

/// Generic explanation used when the model call fails.
pub fn fallback_explanation(name: &str) -> String {
    format!(
        "Couldn't generate an explanation for {}, but it seems like a great spot!",
        name
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_contains_place_name() {
        let text = fallback_explanation("Haji Lane");
        assert!(text.contains("Haji Lane"));
        assert!(text.ends_with("a great spot!"));
    }

    #[test]
    fn test_fallback_uses_placeholder_name() {
        // The caller defaults an empty name to "This place" before prompting.
        let summary = PlaceSummary::from_details(&PlaceDetails {
            name: String::new(),
            types: vec![],
            rating: None,
            user_ratings_total: None,
            reviews: vec![],
        });
        let text = fallback_explanation(&summary.name);
        assert!(text.contains("This place"));
    }
}
