use serde::{Deserialize, Serialize};

/// Response for the categories endpoint. Echoes the vibe back alongside the
/// mapped categories; a failed upstream call and a genuine "no match" both
/// serialize as an empty list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryResponse {
    pub vibe: String,
    pub categories: Vec<String>,
}

/// Response for the explanation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplanationResponse {
    pub explanation: String,
}

/// Liveness probe response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
