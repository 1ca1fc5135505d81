use actix_web::{web, HttpResponse, Responder};
use crate::models::{ListingsQuery, ListingsResponse, ListingResponse, ErrorResponse};
use crate::routes::matches::AppState;

/// Configure listing browse routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/listings", web::get().to(list_listings))
        .route("/listings/{id}", web::get().to(get_listing));
}

/// Browse available listings
///
/// GET /api/v1/listings?city=&neighborhood=&minPrice=&maxPrice=&minCapacity=
async fn list_listings(
    state: web::Data<AppState>,
    query: web::Query<ListingsQuery>,
) -> impl Responder {
    let listings = state.catalog.search(&query);
    tracing::debug!("Listing search {:?} returned {}", query, listings.len());

    HttpResponse::Ok().json(ListingsResponse { listings })
}

/// Fetch one listing by id
///
/// GET /api/v1/listings/{id}
async fn get_listing(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let id = path.into_inner();

    match state.catalog.get(&id) {
        Some(listing) => HttpResponse::Ok().json(ListingResponse {
            listing: listing.clone(),
        }),
        None => HttpResponse::NotFound().json(ErrorResponse {
            error: "Listing not found".to_string(),
            message: format!("No listing with id {}", id),
            status_code: 404,
        }),
    }
}
