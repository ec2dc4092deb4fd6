use serde::Deserialize;
use std::sync::Arc;

use crate::core::{categories, prompts};
use crate::models::CategoryOutcome;
use crate::services::openai::{GenerationParams, OpenAiClient};

const MAPPER_PARAMS: GenerationParams = GenerationParams {
    temperature: 0.7,
    // Generous cap so the category list is never truncated mid-JSON.
    max_tokens: 250,
    json_object: true,
};

/// Shape the model is instructed to reply with.
#[derive(Debug, Deserialize)]
struct CategoriesReply {
    #[serde(default)]
    categories: Vec<String>,
}

/// Maps a free-text vibe to place categories from the fixed allow-list.
///
/// Never returns an error: any upstream or parse failure degrades to an empty
/// outcome flagged `Degraded`, and callers must treat an empty list as
/// ambiguous between "no match" and "call failed".
pub struct CategoryMapper {
    client: Arc<OpenAiClient>,
}

impl CategoryMapper {
    pub fn new(client: Arc<OpenAiClient>) -> Self {
        Self { client }
    }

    /// Ask the model which categories fit the vibe.
    ///
    /// Empty vibes are forwarded as-is. The model's reply is parsed strictly
    /// as JSON and then filtered against the allow-list, so every returned
    /// category is a member of [`categories::ALLOWED_CATEGORIES`].
    pub async fn map_vibe(&self, vibe: &str) -> CategoryOutcome {
        let system = prompts::category_system_prompt();
        let user = prompts::category_user_prompt(vibe);

        let reply = match self.client.chat(&system, &user, MAPPER_PARAMS).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Category mapping call failed for vibe '{}': {}", vibe, e);
                return CategoryOutcome::degraded();
            }
        };

        let parsed: CategoriesReply = match serde_json::from_str(&reply) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!(
                    "Failed to decode category reply for vibe '{}': {} (raw: {})",
                    vibe,
                    e,
                    reply
                );
                return CategoryOutcome::degraded();
            }
        };

        let (kept, discarded) = categories::retain_allowed(parsed.categories);
        if !discarded.is_empty() {
            tracing::warn!(
                "Discarded {} out-of-list categories for vibe '{}': {:?}",
                discarded.len(),
                vibe,
                discarded
            );
        }

        tracing::debug!("Mapped vibe '{}' to {} categories", vibe, kept.len());

        CategoryOutcome::ok(kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_reply_missing_key_defaults_empty() {
        let parsed: CategoriesReply = serde_json::from_str("{}").unwrap();
        assert!(parsed.categories.is_empty());
    }

    #[test]
    fn test_categories_reply_parses_list() {
        let parsed: CategoriesReply =
            serde_json::from_str(r#"{"categories": ["cafe", "park"]}"#).unwrap();
        assert_eq!(parsed.categories, vec!["cafe", "park"]);
    }

    #[test]
    fn test_categories_reply_rejects_non_json() {
        assert!(serde_json::from_str::<CategoriesReply>("sure! here are some categories").is_err());
    }
}
