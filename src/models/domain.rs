use serde::{Deserialize, Serialize};

/// Details about a place, as supplied by the caller (typically sourced from a
/// Places API lookup upstream of this service).
///
/// Only `name` is required. For `types` and `reviews`, an omitted key and an
/// explicitly empty list are equivalent: both deserialize to an empty `Vec`
/// and take the placeholder path when the explanation is generated. Only the
/// first entry of each list is ever consulted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceDetails {
    pub name: String,
    #[serde(default)]
    pub types: Vec<String>,
    pub rating: Option<f64>,
    pub user_ratings_total: Option<u64>,
    #[serde(default)]
    pub reviews: Vec<String>,
}

/// Whether a mapper result reflects a real model answer or a degraded default.
///
/// The HTTP contract collapses both to a plain category list; this flag exists
/// so in-process callers and logs can tell "model said no categories" apart
/// from "upstream call failed".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MapperStatus {
    Ok,
    Degraded,
}

/// Result of one vibe-to-categories mapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryOutcome {
    pub categories: Vec<String>,
    pub status: MapperStatus,
}

impl CategoryOutcome {
    pub fn ok(categories: Vec<String>) -> Self {
        Self {
            categories,
            status: MapperStatus::Ok,
        }
    }

    /// Empty result standing in for a failed upstream call.
    pub fn degraded() -> Self {
        Self {
            categories: vec![],
            status: MapperStatus::Degraded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_details_optional_fields_default() {
        let json = r#"{"name": "Haji Lane"}"#;
        let place: PlaceDetails = serde_json::from_str(json).unwrap();

        assert_eq!(place.name, "Haji Lane");
        assert!(place.types.is_empty());
        assert!(place.rating.is_none());
        assert!(place.user_ratings_total.is_none());
        assert!(place.reviews.is_empty());
    }

    #[test]
    fn test_place_details_requires_name() {
        let json = r#"{"types": ["cafe"]}"#;
        assert!(serde_json::from_str::<PlaceDetails>(json).is_err());
    }

    #[test]
    fn test_place_details_empty_lists_equal_missing() {
        let omitted: PlaceDetails = serde_json::from_str(r#"{"name": "x"}"#).unwrap();
        let explicit: PlaceDetails =
            serde_json::from_str(r#"{"name": "x", "types": [], "reviews": []}"#).unwrap();

        assert_eq!(omitted.types, explicit.types);
        assert_eq!(omitted.reviews, explicit.reviews);
    }

    #[test]
    fn test_category_outcome_constructors() {
        let ok = CategoryOutcome::ok(vec!["cafe".to_string()]);
        assert_eq!(ok.status, MapperStatus::Ok);
        assert_eq!(ok.categories, vec!["cafe".to_string()]);

        let degraded = CategoryOutcome::degraded();
        assert_eq!(degraded.status, MapperStatus::Degraded);
        assert!(degraded.categories.is_empty());
    }
}
