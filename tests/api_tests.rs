// HTTP handler tests for Lease Match

use actix_web::{test, web, App};
use chrono::NaiveDate;
use lease_match::core::{FixedClock, Matcher};
use lease_match::models::{ErrorResponse, HealthResponse, ListingResponse, ListingsResponse, MatchResponse, ScoredListing};
use lease_match::routes::{self, handle_json_payload_error, handle_query_payload_error, AppState};
use lease_match::services::ListingCatalog;
use serde_json::json;
use std::sync::Arc;

fn create_state() -> AppState {
    let catalog = ListingCatalog::from_json(include_str!("../data/listings.json")).unwrap();
    let today = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();

    AppState {
        catalog: Arc::new(catalog),
        matcher: Matcher::with_clock(Arc::new(FixedClock(today))),
        default_limit: 5,
        max_limit: 10,
    }
}

macro_rules! init_app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(create_state()))
                .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
                .app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
                .configure(routes::configure_routes),
        )
        .await
    };
}

#[actix_web::test]
async fn test_health() {
    let app = init_app!();
    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let resp: HealthResponse = test::call_and_read_body_json(&app, req).await;

    assert_eq!(resp.status, "healthy");
    assert_eq!(resp.listings, 8);
}

#[actix_web::test]
async fn test_match_soma_first() {
    let app = init_app!();
    let req = test::TestRequest::post()
        .uri("/api/v1/matches")
        .set_json(json!({
            "requirements": {
                "teamSize": 10,
                "budget": {"min": 4000, "max": 6000},
                "city": "San Francisco",
                "neighborhoods": ["SOMA"]
            },
            "sessionId": "session-123"
        }))
        .to_request();
    let resp: MatchResponse = test::call_and_read_body_json(&app, req).await;

    // sf-soma-005 is unavailable, New York is filtered by city
    assert_eq!(resp.total_candidates, 4);
    assert_eq!(resp.matches.len(), 4);
    assert_eq!(resp.matches[0].listing.id, "sf-soma-001");
    assert!(resp.message.is_none());
    assert!(resp.matches.iter().all(|m| m.listing.city == "San Francisco"));
}

#[actix_web::test]
async fn test_match_limit_and_cap() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/matches")
        .set_json(json!({"requirements": {}, "limit": 2}))
        .to_request();
    let resp: MatchResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(resp.matches.len(), 2);

    let req = test::TestRequest::post()
        .uri("/api/v1/matches")
        .set_json(json!({"requirements": {}, "limit": 500}))
        .to_request();
    let resp: MatchResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(resp.total_candidates, 7);
    assert_eq!(resp.matches.len(), 7);

    let req = test::TestRequest::post()
        .uri("/api/v1/matches")
        .set_json(json!({"requirements": {}}))
        .to_request();
    let resp: MatchResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(resp.matches.len(), 5);
}

#[actix_web::test]
async fn test_match_empty_pool() {
    let app = init_app!();
    let req = test::TestRequest::post()
        .uri("/api/v1/matches")
        .set_json(json!({"requirements": {"city": "Chicago"}}))
        .to_request();
    let resp: MatchResponse = test::call_and_read_body_json(&app, req).await;

    assert!(resp.matches.is_empty());
    assert_eq!(resp.message.as_deref(), Some("No listings found matching your criteria"));
}

#[actix_web::test]
async fn test_match_rejects_zero_limit() {
    let app = init_app!();
    let req = test::TestRequest::post()
        .uri("/api/v1/matches")
        .set_json(json!({"requirements": {}, "limit": 0}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.error, "Validation failed");
}

#[actix_web::test]
async fn test_match_rejects_malformed_json() {
    let app = init_app!();
    let req = test::TestRequest::post()
        .uri("/api/v1/matches")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.error, "invalid_json");
}

#[actix_web::test]
async fn test_score_single_listing() {
    let app = init_app!();
    let req = test::TestRequest::post()
        .uri("/api/v1/matches/score")
        .set_json(json!({
            "listingId": "sf-fidi-002",
            "requirements": {"amenities": ["conference rooms", "parking spots"]}
        }))
        .to_request();
    let scored: ScoredListing = test::call_and_read_body_json(&app, req).await;

    assert_eq!(scored.listing.id, "sf-fidi-002");
    // parking_spots is 0, so only one of two requested amenities counts
    assert_eq!(scored.breakdown.amenity_score, 50.0);
}

#[actix_web::test]
async fn test_score_with_null_lists() {
    let app = init_app!();
    let req = test::TestRequest::post()
        .uri("/api/v1/matches/score")
        .set_json(json!({
            "listingId": "sf-soma-001",
            "requirements": {"teamSize": 10, "neighborhoods": null, "amenities": null}
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let scored: ScoredListing = test::read_body_json(resp).await;
    assert_eq!(scored.breakdown.location_score, 70.0);
    assert_eq!(scored.breakdown.amenity_score, 80.0);
}

#[actix_web::test]
async fn test_score_unknown_listing() {
    let app = init_app!();
    let req = test::TestRequest::post()
        .uri("/api/v1/matches/score")
        .set_json(json!({"listingId": "missing", "requirements": {}}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn test_browse_listings() {
    let app = init_app!();
    let req = test::TestRequest::get()
        .uri("/api/v1/listings?city=San%20Francisco&maxPrice=7000")
        .to_request();
    let resp: ListingsResponse = test::call_and_read_body_json(&app, req).await;

    let ids: Vec<&str> = resp.listings.iter().map(|l| l.id.as_str()).collect();
    assert_eq!(ids, vec!["sf-mission-004", "sf-soma-001", "sf-fidi-002"]);
}

#[actix_web::test]
async fn test_browse_rejects_bad_query() {
    let app = init_app!();
    let req = test::TestRequest::get()
        .uri("/api/v1/listings?minPrice=cheap")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_get_listing() {
    let app = init_app!();

    let req = test::TestRequest::get().uri("/api/v1/listings/ny-flatiron-002").to_request();
    let resp: ListingResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(resp.listing.neighborhood, "Flatiron");

    let req = test::TestRequest::get().uri("/api/v1/listings/nope").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}
