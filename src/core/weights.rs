use crate::models::ScoreBreakdown;

/// Relative importance of each scoring dimension
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub price: f64,
    pub size: f64,
    pub location: f64,
    pub amenity: f64,
    pub availability: f64,
}

/// Fixed weight table. Not configurable; must sum to 1.0.
pub const WEIGHTS: ScoringWeights = ScoringWeights {
    price: 0.30,
    size: 0.25,
    location: 0.20,
    amenity: 0.15,
    availability: 0.10,
};

impl ScoringWeights {
    pub fn sum(&self) -> f64 {
        self.price + self.size + self.location + self.amenity + self.availability
    }

    /// Unrounded weighted total of a breakdown
    #[inline]
    pub fn weighted_sum(&self, breakdown: &ScoreBreakdown) -> f64 {
        breakdown.price_score * self.price
            + breakdown.size_score * self.size
            + breakdown.location_score * self.location
            + breakdown.amenity_score * self.amenity
            + breakdown.availability_score * self.availability
    }

    /// Overall score: the weighted sum rounded to the nearest integer
    #[inline]
    pub fn overall(&self, breakdown: &ScoreBreakdown) -> u8 {
        self.weighted_sum(breakdown).round().clamp(0.0, 100.0) as u8
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        WEIGHTS
    }
}
