use chrono::NaiveDate;
use crate::models::{Amenities, Budget};
use crate::core::filters::{has_amenity, neighborhood_matches};

/// Scores used when the requirement for a dimension was never stated
pub const NEUTRAL_PRICE_SCORE: f64 = 70.0;
pub const NEUTRAL_SIZE_SCORE: f64 = 70.0;
pub const NEUTRAL_LOCATION_SCORE: f64 = 70.0;
pub const NEUTRAL_AMENITY_SCORE: f64 = 80.0;
pub const NEUTRAL_AVAILABILITY_SCORE: f64 = 80.0;

/// Floor space per person used as the density benchmark
pub const SQFT_PER_PERSON: f64 = 150.0;

/// Target inflation applied when the tenant mentions growth plans
pub const GROWTH_BUFFER: f64 = 1.2;

pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 100.0;

/// Clamp a sub-score onto [0, 100]
#[inline]
pub fn clamp_score(score: f64) -> f64 {
    score.clamp(MIN_SCORE, MAX_SCORE)
}

/// Ideal floor space for a team, before any growth buffer
#[inline]
pub fn ideal_square_feet(team_size: u32) -> f64 {
    team_size as f64 * SQFT_PER_PERSON
}

/// Price score (0-100)
///
/// - over budget: linear decay from 50 by the overage relative to `max`
/// - under `min`: 100
/// - inside the range: 70 at `max` rising to 100 at `min`
#[inline]
pub fn calculate_price_score(price: f64, budget: Option<&Budget>) -> f64 {
    let Some(budget) = budget else {
        return NEUTRAL_PRICE_SCORE;
    };

    if price > budget.max {
        if budget.max <= 0.0 {
            return MIN_SCORE;
        }
        let overage = (price - budget.max) / budget.max;
        return clamp_score(50.0 - overage * 100.0);
    }

    if price < budget.min {
        return MAX_SCORE;
    }

    let range = budget.max - budget.min;
    if range <= 0.0 {
        // min == max == price
        return MAX_SCORE;
    }

    let position = (budget.max - price) / range;
    clamp_score(70.0 + position * 30.0)
}

/// Size score (0-100)
///
/// Growth plans move the target up by 20%; the cramped and oversized bands
/// are always judged against the unbuffered ideal.
#[inline]
pub fn calculate_size_score(square_feet: u32, team_size: Option<u32>, growth_plans: bool) -> f64 {
    let team_size = match team_size {
        Some(size) if size > 0 => size,
        _ => return NEUTRAL_SIZE_SCORE,
    };

    let ideal = ideal_square_feet(team_size);
    let target = if growth_plans { ideal * GROWTH_BUFFER } else { ideal };

    let sqft = square_feet as f64;
    let deviation = (sqft - target).abs() / target;

    if sqft < ideal * 0.8 {
        // Cramped
        return clamp_score(40.0 - deviation * 50.0);
    }

    if sqft > ideal * 2.0 {
        // Paying for unused space
        return clamp_score((70.0 - deviation * 30.0).max(30.0));
    }

    clamp_score(100.0 - deviation * 50.0)
}

/// Location score (0-100): 100 on any neighborhood match, otherwise 50
#[inline]
pub fn calculate_location_score(neighborhood: &str, preferred: &[String]) -> f64 {
    if preferred.is_empty() {
        return NEUTRAL_LOCATION_SCORE;
    }

    if neighborhood_matches(neighborhood, preferred) {
        MAX_SCORE
    } else {
        50.0
    }
}

/// Amenity score (0-100): share of requested amenities the listing offers
#[inline]
pub fn calculate_amenity_score(amenities: &Amenities, requested: &[String]) -> f64 {
    if requested.is_empty() {
        return NEUTRAL_AMENITY_SCORE;
    }

    let matched = requested
        .iter()
        .filter(|name| has_amenity(amenities, name))
        .count();

    clamp_score(matched as f64 / requested.len() as f64 * 100.0)
}

/// Availability score (0-100)
///
/// Listings already open score 100 for an immediate move-in and 90 for a
/// later one. Listings opening by the desired date score 100. Late listings
/// lose two points per day of delay.
#[inline]
pub fn calculate_availability_score(
    available_date: NaiveDate,
    desired: Option<NaiveDate>,
    today: NaiveDate,
) -> f64 {
    let Some(desired) = desired else {
        return NEUTRAL_AVAILABILITY_SCORE;
    };

    if available_date <= today {
        return if desired <= today { MAX_SCORE } else { 90.0 };
    }

    if available_date <= desired {
        return MAX_SCORE;
    }

    let delay_days = (available_date - desired).num_days() as f64;
    clamp_score(100.0 - delay_days * 2.0)
}
