// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{OfficeListing, ListingImage, Amenities, AmenityValue, Budget, Requirements, ScoreBreakdown, ScoredListing};
pub use requests::{MatchRequest, ScoreListingRequest, ListingsQuery};
pub use responses::{MatchResponse, ListingsResponse, ListingResponse, HealthResponse, ErrorResponse};
