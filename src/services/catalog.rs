use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use crate::core::filters::matches_listing_query;
use crate::models::{ListingsQuery, OfficeListing};

/// Errors that can occur while loading the listing catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate listing id: {0}")]
    DuplicateId(String),
}

/// In-memory pool of office listings
///
/// Loaded once at startup from a JSON array (or `{"listings": [...]}`
/// document) and shared read-only across workers.
#[derive(Debug, Clone, Default)]
pub struct ListingCatalog {
    listings: Vec<OfficeListing>,
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    Bare(Vec<OfficeListing>),
    Wrapped { listings: Vec<OfficeListing> },
}

impl ListingCatalog {
    /// Build a catalog from already-loaded listings
    pub fn from_listings(listings: Vec<OfficeListing>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(listings.len());
        if let Some(duplicate) = listings.iter().find(|listing| !seen.insert(listing.id.as_str())) {
            return Err(CatalogError::DuplicateId(duplicate.id.clone()));
        }
        Ok(Self { listings })
    }

    /// Parse a catalog from JSON text
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let listings = match serde_json::from_str::<CatalogDocument>(json)? {
            CatalogDocument::Bare(listings) => listings,
            CatalogDocument::Wrapped { listings } => listings,
        };
        Self::from_listings(listings)
    }

    /// Load a catalog file
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| CatalogError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        let catalog = Self::from_json(&json)?;
        tracing::info!("Loaded {} listings from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    pub fn listings(&self) -> &[OfficeListing] {
        &self.listings
    }

    pub fn get(&self, id: &str) -> Option<&OfficeListing> {
        self.listings.iter().find(|listing| listing.id == id)
    }

    /// Available listings matching every supplied filter, cheapest first
    pub fn search(&self, query: &ListingsQuery) -> Vec<OfficeListing> {
        let mut found: Vec<OfficeListing> = self
            .listings
            .iter()
            .filter(|listing| matches_listing_query(listing, query))
            .cloned()
            .collect();

        found.sort_by(|a, b| a.price_per_month.total_cmp(&b.price_per_month));
        found
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const CATALOG: &str = r#"[
        {
            "id": "sf-1",
            "city": "San Francisco",
            "neighborhood": "SOMA",
            "square_feet": 1600,
            "price_per_month": 5500,
            "max_capacity": 16,
            "available_date": "2025-01-01",
            "amenities": {"conference_rooms": 1, "kitchen": true, "gym": null}
        },
        {
            "id": "sf-2",
            "city": "San Francisco",
            "neighborhood": "FiDi",
            "square_feet": 1400,
            "price_per_month": 4200,
            "max_capacity": 14,
            "available_date": "2025-02-01T00:00:00Z",
            "is_available": false
        },
        {
            "id": "ny-1",
            "city": "New York",
            "neighborhood": "Chelsea",
            "square_feet": 2000,
            "price_per_month": 4800,
            "max_capacity": 20,
            "available_date": "2025-03-01"
        }
    ]"#;

    #[test]
    fn test_parse_bare_array() {
        let catalog = ListingCatalog::from_json(CATALOG).unwrap();
        assert_eq!(catalog.len(), 3);

        let listing = catalog.get("sf-1").unwrap();
        assert_eq!(listing.amenities.len(), 2);
        assert!(listing.is_available);
        assert!(!catalog.get("sf-2").unwrap().is_available);
    }

    #[test]
    fn test_parse_wrapped_document() {
        let wrapped = format!(r#"{{"listings": {}}}"#, CATALOG);
        let catalog = ListingCatalog::from_json(&wrapped).unwrap();
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let catalog = ListingCatalog::from_json(CATALOG).unwrap();
        let mut listings = catalog.listings().to_vec();
        listings.push(listings[0].clone());

        let err = ListingCatalog::from_listings(listings).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateId(id) if id == "sf-1"));
    }

    #[test]
    fn test_invalid_json() {
        let err = ListingCatalog::from_json("not json").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn test_search_sorted_by_price() {
        let catalog = ListingCatalog::from_json(CATALOG).unwrap();

        let all = catalog.search(&ListingsQuery::default());
        let ids: Vec<&str> = all.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["ny-1", "sf-1"]);

        let sf = catalog.search(&ListingsQuery {
            city: Some("San Francisco".to_string()),
            ..Default::default()
        });
        assert_eq!(sf.len(), 1);
        assert_eq!(sf[0].id, "sf-1");
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CATALOG.as_bytes()).unwrap();

        let catalog = ListingCatalog::load(file.path()).await.unwrap();
        assert_eq!(catalog.len(), 3);
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let err = ListingCatalog::load("does/not/exist.json").await.unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }
}
