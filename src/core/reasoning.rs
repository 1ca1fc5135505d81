use crate::models::{AmenityValue, OfficeListing, Requirements, ScoreBreakdown};
use crate::core::filters::neighborhood_matches;

/// Savings above this many dollars are called out explicitly
const SAVINGS_CALLOUT_THRESHOLD: f64 = 500.0;

/// Square feet per person considered comfortable
const COMFORTABLE_SQFT_PER_PERSON: u64 = 150;

/// Square feet per person still considered workable
const WORKABLE_SQFT_PER_PERSON: u64 = 100;

/// Square feet per person used for the growth headroom estimate
const GROWTH_SQFT_PER_PERSON: u32 = 100;

/// Build the prose justification for a scored listing
///
/// Clauses are emitted in a fixed order (price, size, location, amenities)
/// and joined into one period-delimited paragraph. The breakdown is only
/// consulted to gate the price clause; it never feeds back into ranking.
pub fn generate_reasoning(
    listing: &OfficeListing,
    requirements: &Requirements,
    breakdown: &ScoreBreakdown,
) -> String {
    let mut reasons: Vec<String> = Vec::with_capacity(5);

    if let Some(clause) = price_clause(listing, requirements, breakdown) {
        reasons.push(clause);
    }
    reasons.extend(size_clauses(listing, requirements));
    reasons.push(location_clause(listing, requirements));
    if let Some(clause) = amenity_clause(listing) {
        reasons.push(clause);
    }

    format!("{}.", reasons.join(". "))
}

fn price_clause(
    listing: &OfficeListing,
    requirements: &Requirements,
    breakdown: &ScoreBreakdown,
) -> Option<String> {
    let budget = requirements.budget.as_ref()?;
    if breakdown.price_score <= 0.0 {
        return None;
    }

    let price = listing.price_per_month;
    if price <= budget.max {
        let savings = budget.max - price;
        if savings > SAVINGS_CALLOUT_THRESHOLD {
            Some(format!(
                "At ${}/month, this is ${} under your max budget",
                format_dollars(price),
                format_dollars(savings)
            ))
        } else {
            Some(format!(
                "Fits comfortably within your budget at ${}/month",
                format_dollars(price)
            ))
        }
    } else {
        Some(format!(
            "Slightly over budget at ${}/month (+${})",
            format_dollars(price),
            format_dollars(price - budget.max)
        ))
    }
}

fn size_clauses(listing: &OfficeListing, requirements: &Requirements) -> Vec<String> {
    let mut clauses = Vec::new();
    let team_size = match requirements.team_size {
        Some(size) if size > 0 => size,
        _ => return clauses,
    };

    let per_person = (listing.square_feet as f64 / team_size as f64).round() as u64;
    if per_person >= COMFORTABLE_SQFT_PER_PERSON {
        clauses.push(format!(
            "{} sqft gives your team of {} a comfortable {} sqft per person",
            format_thousands(listing.square_feet as u64),
            team_size,
            per_person
        ));
    } else if per_person >= WORKABLE_SQFT_PER_PERSON {
        clauses.push(format!(
            "At {} sqft per person, it's workable for {} people but cozy",
            per_person, team_size
        ));
    }

    if requirements.has_growth_plans() {
        clauses.push(format!(
            "Room to grow to ~{} people before needing to move",
            listing.square_feet / GROWTH_SQFT_PER_PERSON
        ));
    }

    clauses
}

fn location_clause(listing: &OfficeListing, requirements: &Requirements) -> String {
    let preferred = &requirements.neighborhoods;
    if preferred.is_empty() {
        return format!("Prime {} location", listing.neighborhood);
    }

    if neighborhood_matches(&listing.neighborhood, preferred) {
        format!("Located in {} as requested", listing.neighborhood)
    } else {
        format!(
            "In {} (you mentioned preferring {})",
            listing.neighborhood,
            preferred.join(" or ")
        )
    }
}

fn amenity_clause(listing: &OfficeListing) -> Option<String> {
    let amenities = &listing.amenities;
    let mut highlights: Vec<String> = Vec::with_capacity(4);

    if let Some(value) = amenities.get("conference_rooms") {
        if let Some(text) = counted_highlight(value, "conference room", "conference rooms") {
            highlights.push(text);
        }
    }
    if let Some(value) = amenities.get("parking_spots") {
        if let Some(text) = counted_highlight(value, "parking spot", "parking") {
            highlights.push(text);
        }
    }
    if amenities.has("kitchen") {
        highlights.push("full kitchen".to_string());
    }
    if amenities.has("24_7_access") {
        highlights.push("24/7 access".to_string());
    }

    if highlights.is_empty() {
        return None;
    }
    Some(format!("Includes {}", highlights.join(", ")))
}

/// "2 conference rooms" for counts, the bare label for `true` flags
fn counted_highlight(value: AmenityValue, singular: &str, flag_label: &str) -> Option<String> {
    if !value.is_present() {
        return None;
    }
    match value.count() {
        Some(1) => Some(format!("1 {}", singular)),
        Some(count) => Some(format!("{} {}s", count, singular)),
        None => Some(flag_label.to_string()),
    }
}

/// Whole-dollar amount with thousands separators, e.g. `5,500`
pub fn format_dollars(amount: f64) -> String {
    let rounded = amount.round();
    if rounded < 0.0 {
        format!("-{}", format_thousands((-rounded) as u64))
    } else {
        format_thousands(rounded as u64)
    }
}

fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
