// Core algorithm exports
pub mod clock;
pub mod filters;
pub mod matcher;
pub mod reasoning;
pub mod scoring;
pub mod weights;

pub use clock::{Clock, FixedClock, SystemClock};
pub use filters::{normalize_amenity_key, neighborhood_matches, passes_prefilter, matches_listing_query};
pub use matcher::{Matcher, MatchResult, DEFAULT_LIMIT, score_listing, calculate_breakdown};
pub use reasoning::generate_reasoning;
pub use weights::{ScoringWeights, WEIGHTS};
