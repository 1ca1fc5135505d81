use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Office listing as supplied by the storage layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfficeListing {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub address: String,
    pub city: String,
    pub neighborhood: String,
    pub square_feet: u32,
    pub price_per_month: f64,
    #[serde(default)]
    pub price_per_sqft: f64,
    #[serde(default)]
    pub max_capacity: u32,
    #[serde(deserialize_with = "deserialize_date")]
    pub available_date: NaiveDate,
    #[serde(default)]
    pub min_lease_months: u32,
    #[serde(default)]
    pub max_lease_months: Option<u32>,
    #[serde(default)]
    pub amenities: Amenities,
    #[serde(default)]
    pub images: Vec<ListingImage>,
    #[serde(default)]
    pub primary_image_url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default = "default_true")]
    pub is_available: bool,
    #[serde(default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(default)]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

fn default_true() -> bool { true }

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingImage {
    pub url: String,
    #[serde(default)]
    pub caption: String,
    #[serde(default)]
    pub order: u32,
}

/// Value of a single amenity entry: a yes/no flag or a count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AmenityValue {
    Flag(bool),
    Count(u32),
}

impl AmenityValue {
    /// `true` flags and positive counts satisfy a request; `false` and `0` do not
    pub fn is_present(&self) -> bool {
        match *self {
            AmenityValue::Flag(flag) => flag,
            AmenityValue::Count(count) => count > 0,
        }
    }

    pub fn count(&self) -> Option<u32> {
        match *self {
            AmenityValue::Count(count) => Some(count),
            AmenityValue::Flag(_) => None,
        }
    }
}

/// Amenity set keyed by snake_case name (`conference_rooms`, `24_7_access`, ...)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Amenities(BTreeMap<String, AmenityValue>);

impl Amenities {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: &str, value: AmenityValue) -> Self {
        self.0.insert(key.to_string(), value);
        self
    }

    pub fn get(&self, key: &str) -> Option<AmenityValue> {
        self.0.get(key).copied()
    }

    /// Whether `key` exists with a truthy value
    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some_and(|value| value.is_present())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for Amenities {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Storage rows carry explicit nulls for amenities a listing never declared
        let raw: BTreeMap<String, Option<AmenityValue>> = BTreeMap::deserialize(deserializer)?;
        Ok(Self(
            raw.into_iter()
                .filter_map(|(key, value)| value.map(|v| (key, v)))
                .collect(),
        ))
    }
}

/// Budget range in dollars per month
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub min: f64,
    pub max: f64,
}

/// Requirements extracted from the conversation. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Requirements {
    #[serde(default)]
    pub team_size: Option<u32>,
    #[serde(default)]
    pub budget: Option<Budget>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub neighborhoods: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub amenities: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_date")]
    pub move_in_date: Option<NaiveDate>,
    #[serde(default)]
    pub growth_plans: Option<String>,
}

impl Requirements {
    /// Only the presence of a growth note matters, never its content
    pub fn has_growth_plans(&self) -> bool {
        self.growth_plans
            .as_deref()
            .is_some_and(|plans| !plans.trim().is_empty())
    }
}

/// Per-dimension fitness scores, each in [0, 100]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub price_score: f64,
    pub size_score: f64,
    pub location_score: f64,
    pub amenity_score: f64,
    pub availability_score: f64,
}

/// Listing annotated with its overall score, breakdown and reasoning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredListing {
    #[serde(flatten)]
    pub listing: OfficeListing,
    #[serde(rename = "matchScore")]
    pub match_score: u8,
    pub breakdown: ScoreBreakdown,
    pub reasoning: String,
}

/// Parse `YYYY-MM-DD` or an RFC 3339 timestamp, keeping only the date
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            chrono::DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.date_naive())
        })
}

fn deserialize_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid date: {}", raw)))
}

/// Move-in dates come from a language model; anything unparseable counts as unset
fn deserialize_lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_date))
}

/// `null` lists mean "not stated", same as a missing key
fn deserialize_null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<String>>::deserialize(deserializer).map(Option::unwrap_or_default)
}
