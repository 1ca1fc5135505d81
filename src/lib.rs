//! Lease Match - office listing matching for the leasing assistant
//!
//! This library scores a pool of office listings against a prospective
//! tenant's requirements and returns the best fits with a short justification.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Matcher, FixedClock, SystemClock, Clock, WEIGHTS};
pub use models::{OfficeListing, Requirements, ScoredListing, ScoreBreakdown, MatchRequest, MatchResponse};
pub use services::ListingCatalog;
