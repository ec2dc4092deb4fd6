use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

use crate::models::{
    CategoryRequest, CategoryResponse, ExplanationRequest, ExplanationResponse, HealthResponse,
    MapperStatus,
};
use crate::services::AiService;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub ai: Arc<AiService>,
}

/// Configure all AI routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(health_check))
        .route("/categories", web::post().to(get_categories))
        .route("/explanation", web::post().to(get_explanation));
}

/// Liveness probe
///
/// GET /
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "GoWhere AI Service is running!".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Map a vibe to place categories
///
/// POST /categories
///
/// Request body:
/// ```json
/// {
///   "vibe": "trendy"
/// }
/// ```
///
/// Always replies 200; a failed upstream call collapses to an empty category
/// list on the wire.
async fn get_categories(
    state: web::Data<AppState>,
    req: web::Json<CategoryRequest>,
) -> impl Responder {
    let outcome = state.ai.get_place_categories(&req.vibe).await;

    if outcome.status == MapperStatus::Degraded {
        tracing::warn!("Returning degraded (empty) categories for vibe '{}'", req.vibe);
    }

    tracing::info!(
        "Returning {} categories for vibe '{}'",
        outcome.categories.len(),
        req.vibe
    );

    HttpResponse::Ok().json(CategoryResponse {
        vibe: req.vibe.clone(),
        categories: outcome.categories,
    })
}

/// Generate an explanation for a recommended place
///
/// POST /explanation
///
/// Request body:
/// ```json
/// {
///   "vibe": "trendy",
///   "place_details": {
///     "name": "Haji Lane",
///     "types": ["shopping_mall"],
///     "rating": 4.7,
///     "user_ratings_total": 8200,
///     "reviews": ["Such a vibrant area!"]
///   }
/// }
/// ```
///
/// Only `place_details.name` is required; missing optional fields fall back
/// to placeholders. Always replies 200 once the body deserializes.
async fn get_explanation(
    state: web::Data<AppState>,
    req: web::Json<ExplanationRequest>,
) -> impl Responder {
    let explanation = state
        .ai
        .get_place_explanation(&req.place_details, &req.vibe)
        .await;

    HttpResponse::Ok().json(ExplanationResponse { explanation })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_check_response_shape() {
        let response = HealthResponse {
            status: "GoWhere AI Service is running!".to_string(),
            version: "0.1.0".to_string(),
            timestamp: chrono::Utc::now(),
        };

        assert!(response.status.contains("running"));
    }
}
