// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{CategoryOutcome, MapperStatus, PlaceDetails};
pub use requests::{CategoryRequest, ExplanationRequest};
pub use responses::{CategoryResponse, ErrorResponse, ExplanationResponse, HealthResponse};
