use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::Requirements;

/// Request to rank the catalog against a set of requirements
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MatchRequest {
    pub requirements: Requirements,
    #[validate(length(min = 1))]
    #[serde(default, alias = "session_id", rename = "sessionId")]
    pub session_id: Option<String>,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub limit: Option<u16>,
}

/// Request to score a single catalog listing
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScoreListingRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "listing_id", rename = "listingId")]
    pub listing_id: String,
    pub requirements: Requirements,
}

/// Query parameters for browsing listings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingsQuery {
    pub city: Option<String>,
    pub neighborhood: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_capacity: Option<u32>,
}
