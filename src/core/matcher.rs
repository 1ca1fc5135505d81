use std::sync::Arc;
use chrono::NaiveDate;
use crate::models::{OfficeListing, Requirements, ScoreBreakdown, ScoredListing};
use crate::core::{
    clock::{Clock, SystemClock},
    filters::passes_prefilter,
    reasoning::generate_reasoning,
    scoring::{
        calculate_amenity_score, calculate_availability_score, calculate_location_score,
        calculate_price_score, calculate_size_score,
    },
    weights::WEIGHTS,
};

/// Number of listings returned when the caller does not ask for a limit
pub const DEFAULT_LIMIT: usize = 5;

/// Result of ranking a listing pool
#[derive(Debug)]
pub struct MatchResult {
    pub matches: Vec<ScoredListing>,
    /// Listings left after the city/availability pre-filter
    pub total_candidates: usize,
}

/// Ranks office listings against a tenant's requirements
///
/// # Pipeline
/// 1. Pre-filter by requested city and availability flag
/// 2. Score each remaining listing on price, size, location, amenities
///    and availability
/// 3. Sort by overall score, keeping input order on ties
/// 4. Truncate to the requested limit
#[derive(Debug, Clone)]
pub struct Matcher {
    clock: Arc<dyn Clock>,
}

impl Matcher {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Score a single listing against the requirements
    pub fn score(&self, listing: &OfficeListing, requirements: &Requirements) -> ScoredListing {
        score_listing(listing, requirements, self.today())
    }

    /// Rank `listings` and return at most `limit` of them
    pub fn rank(
        &self,
        listings: &[OfficeListing],
        requirements: &Requirements,
        limit: usize,
    ) -> Vec<ScoredListing> {
        self.find_matches(listings, requirements, limit).matches
    }

    /// Rank `listings`, also reporting how many survived the pre-filter
    pub fn find_matches(
        &self,
        listings: &[OfficeListing],
        requirements: &Requirements,
        limit: usize,
    ) -> MatchResult {
        // One date for the whole pool
        let today = self.today();

        let mut scored: Vec<ScoredListing> = listings
            .iter()
            .filter(|listing| passes_prefilter(listing, requirements))
            .map(|listing| score_listing(listing, requirements, today))
            .collect();

        let total_candidates = scored.len();

        tracing::debug!(
            "Scored {} of {} listings (city: {:?})",
            total_candidates,
            listings.len(),
            requirements.city
        );

        // Stable: equal scores keep their input order
        scored.sort_by(|a, b| b.match_score.cmp(&a.match_score));
        scored.truncate(limit);

        MatchResult {
            matches: scored,
            total_candidates,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Compute every sub-score for a listing, substituting neutral defaults
/// for requirements that were never stated
pub fn calculate_breakdown(
    listing: &OfficeListing,
    requirements: &Requirements,
    today: NaiveDate,
) -> ScoreBreakdown {
    ScoreBreakdown {
        price_score: calculate_price_score(listing.price_per_month, requirements.budget.as_ref()),
        size_score: calculate_size_score(
            listing.square_feet,
            requirements.team_size,
            requirements.has_growth_plans(),
        ),
        location_score: calculate_location_score(&listing.neighborhood, &requirements.neighborhoods),
        amenity_score: calculate_amenity_score(&listing.amenities, &requirements.amenities),
        availability_score: calculate_availability_score(
            listing.available_date,
            requirements.move_in_date,
            today,
        ),
    }
}

/// Score one listing as of `today`
pub fn score_listing(
    listing: &OfficeListing,
    requirements: &Requirements,
    today: NaiveDate,
) -> ScoredListing {
    let breakdown = calculate_breakdown(listing, requirements, today);
    let match_score = WEIGHTS.overall(&breakdown);
    let reasoning = generate_reasoning(listing, requirements, &breakdown);

    tracing::trace!("Listing {} scored {} ({:?})", listing.id, match_score, breakdown);

    ScoredListing {
        listing: listing.clone(),
        match_score,
        breakdown,
        reasoning,
    }
}
