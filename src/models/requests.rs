use serde::{Deserialize, Serialize};

use crate::models::domain::PlaceDetails;

/// Request to map a vibe to place categories.
///
/// The vibe is opaque and user-controlled; an empty string is accepted and
/// forwarded to the mapper as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryRequest {
    pub vibe: String,
}

/// Request to generate an explanation for a recommended place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplanationRequest {
    pub vibe: String,
    pub place_details: PlaceDetails,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_request_requires_vibe() {
        assert!(serde_json::from_str::<CategoryRequest>("{}").is_err());

        let req: CategoryRequest = serde_json::from_str(r#"{"vibe": ""}"#).unwrap();
        assert_eq!(req.vibe, "");
    }

    #[test]
    fn test_explanation_request_shape() {
        let json = r#"{
            "vibe": "trendy",
            "place_details": {"name": "Haji Lane", "rating": 4.7}
        }"#;

        let req: ExplanationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.vibe, "trendy");
        assert_eq!(req.place_details.name, "Haji Lane");
        assert_eq!(req.place_details.rating, Some(4.7));
    }

    #[test]
    fn test_explanation_request_rejects_missing_place_name() {
        let json = r#"{"vibe": "trendy", "place_details": {"rating": 4.7}}"#;
        assert!(serde_json::from_str::<ExplanationRequest>(json).is_err());
    }
}
