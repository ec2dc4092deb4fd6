use std::sync::Arc;

use crate::models::{CategoryOutcome, PlaceDetails};
use crate::services::generator::ExplanationGenerator;
use crate::services::mapper::CategoryMapper;
use crate::services::openai::OpenAiClient;

/// Single entry point for the HTTP layer into the AI components.
///
/// Holds no state beyond the two components and performs no validation or
/// transformation; it exists so the route handlers stay decoupled from the
/// mapper and generator internals.
pub struct AiService {
    mapper: CategoryMapper,
    generator: ExplanationGenerator,
}

impl AiService {
    /// Build the facade around one shared upstream client.
    pub fn new(client: Arc<OpenAiClient>) -> Self {
        Self {
            mapper: CategoryMapper::new(Arc::clone(&client)),
            generator: ExplanationGenerator::new(client),
        }
    }

    /// Get place category suggestions for a vibe.
    pub async fn get_place_categories(&self, vibe: &str) -> CategoryOutcome {
        tracing::info!("Getting categories for vibe '{}'", vibe);
        self.mapper.map_vibe(vibe).await
    }

    /// Generate an explanation for a recommended place.
    pub async fn get_place_explanation(&self, place: &PlaceDetails, vibe: &str) -> String {
        tracing::info!(
            "Generating explanation for '{}' (vibe: '{}')",
            place.name,
            vibe
        );
        self.generator.generate(place, vibe).await
    }
}
