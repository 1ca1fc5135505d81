use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{MatchRequest, ScoreListingRequest, MatchResponse, HealthResponse, ErrorResponse};
use crate::services::ListingCatalog;
use crate::core::Matcher;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<ListingCatalog>,
    pub matcher: Matcher,
    pub default_limit: usize,
    pub max_limit: usize,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matches", web::post().to(find_matches))
        .route("/matches/score", web::post().to(score_listing));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let status = if state.catalog.is_empty() { "degraded" } else { "healthy" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        listings: state.catalog.len(),
        timestamp: chrono::Utc::now(),
    })
}

pub(crate) fn validation_error(errors: validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

/// Find matches endpoint
///
/// POST /api/v1/matches
///
/// Request body:
/// ```json
/// {
///   "requirements": { "teamSize": 10, "budget": { "min": 4000, "max": 6000 } },
///   "sessionId": "string",
///   "limit": 5
/// }
/// ```
async fn find_matches(
    state: web::Data<AppState>,
    req: web::Json<MatchRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for match request: {:?}", errors);
        return validation_error(errors);
    }

    // Cap limit to keep responses small
    let limit = req
        .limit
        .map(|limit| limit as usize)
        .unwrap_or(state.default_limit)
        .min(state.max_limit);

    tracing::info!(
        "Matching listings for session {:?}, city: {:?}, limit: {}",
        req.session_id,
        req.requirements.city,
        limit
    );

    let result = state
        .matcher
        .find_matches(state.catalog.listings(), &req.requirements, limit);

    let message = if result.total_candidates == 0 {
        Some("No listings found matching your criteria".to_string())
    } else {
        None
    };

    let matched_ids: Vec<&str> = result.matches.iter().map(|m| m.listing.id.as_str()).collect();
    tracing::info!(
        "Returning {} matches {:?} (from {} candidates)",
        matched_ids.len(),
        matched_ids,
        result.total_candidates
    );

    HttpResponse::Ok().json(MatchResponse {
        matches: result.matches,
        total_candidates: result.total_candidates,
        message,
    })
}

/// Score a single listing
///
/// POST /api/v1/matches/score
///
/// Request body:
/// ```json
/// {
///   "listingId": "string",
///   "requirements": { "teamSize": 10 }
/// }
/// ```
async fn score_listing(
    state: web::Data<AppState>,
    req: web::Json<ScoreListingRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error(errors);
    }

    let Some(listing) = state.catalog.get(&req.listing_id) else {
        tracing::info!("Score requested for unknown listing {}", req.listing_id);
        return HttpResponse::NotFound().json(ErrorResponse {
            error: "Listing not found".to_string(),
            message: format!("No listing with id {}", req.listing_id),
            status_code: 404,
        });
    };

    let scored = state.matcher.score(listing, &req.requirements);
    tracing::debug!("Listing {} scored {}", scored.listing.id, scored.match_score);

    HttpResponse::Ok().json(scored)
}
