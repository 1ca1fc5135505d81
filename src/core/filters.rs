use crate::models::{Amenities, ListingsQuery, OfficeListing, Requirements};

/// Normalize a free-text amenity name to the listing key format
///
/// Lowercases and collapses each whitespace run to a single underscore,
/// so "Conference  Rooms" becomes `conference_rooms`.
pub fn normalize_amenity_key(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("_")
}

/// Whether the listing offers the named amenity with a truthy value
#[inline]
pub fn has_amenity(amenities: &Amenities, name: &str) -> bool {
    amenities.has(&normalize_amenity_key(name))
}

/// Case-insensitive substring match in either direction
///
/// Deliberately binary: a listing is either in a preferred neighborhood or
/// not. "SoMa" matches "SOMA", "Mission" matches "Mission Bay", and an
/// entry of "Financial District" matches a listing tagged "financial".
/// Blank text on either side never matches.
pub fn neighborhood_matches(listing_neighborhood: &str, preferred: &[String]) -> bool {
    let listing = listing_neighborhood.trim().to_lowercase();
    preferred.iter().any(|entry| {
        let entry = entry.trim().to_lowercase();
        if entry.is_empty() || listing.is_empty() {
            return false;
        }
        listing.contains(&entry) || entry.contains(&listing)
    })
}

/// Whether two city names refer to the same city
#[inline]
pub fn same_city(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}

/// Pre-filter applied before scoring: requested city and availability flag
#[inline]
pub fn passes_prefilter(listing: &OfficeListing, requirements: &Requirements) -> bool {
    if !listing.is_available {
        return false;
    }

    match requirements.city.as_deref() {
        Some(city) if !city.trim().is_empty() => same_city(&listing.city, city),
        _ => true,
    }
}

/// Check a listing against the browse filters
#[inline]
pub fn matches_listing_query(listing: &OfficeListing, query: &ListingsQuery) -> bool {
    if !listing.is_available {
        return false;
    }

    if let Some(city) = query.city.as_deref() {
        if !same_city(&listing.city, city) {
            return false;
        }
    }

    if let Some(neighborhood) = query.neighborhood.as_deref() {
        if !listing.neighborhood.trim().eq_ignore_ascii_case(neighborhood.trim()) {
            return false;
        }
    }

    if query.min_price.is_some_and(|min| listing.price_per_month < min) {
        return false;
    }

    if query.max_price.is_some_and(|max| listing.price_per_month > max) {
        return false;
    }

    if query.min_capacity.is_some_and(|min| listing.max_capacity < min) {
        return false;
    }

    true
}
