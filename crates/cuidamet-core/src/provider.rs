//! Caregiver provider listings.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::geo::Coordinates;

/// Identifier for a provider listing.
pub type ProviderId = u32;

/// The three care verticals offered on the marketplace.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CareCategory {
    #[display("Cuidado de Mayores")]
    Elderly,
    #[display("Cuidado de Niños")]
    Children,
    #[display("Cuidado de Mascotas")]
    Pets,
}

impl CareCategory {
    pub const ALL: [CareCategory; 3] = [
        CareCategory::Elderly,
        CareCategory::Children,
        CareCategory::Pets,
    ];
}

/// Listing filter: every vertical, or a single one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(CareCategory),
}

impl CategoryFilter {
    pub fn matches(self, provider: &Provider) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => provider.categories.contains(&category),
        }
    }
}

/// Long-form description of what a provider offers in one vertical.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceDescription {
    pub category: CareCategory,
    pub text: String,
}

/// A review left by a past client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: u32,
    pub author_name: String,
    pub author_photo_url: String,
    /// 1 to 5.
    pub rating: u8,
    pub comment: String,
    /// Relative display label, e.g. "Hace 2 semanas".
    pub date: String,
}

/// A caregiver listing with profile data, pricing, and location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    pub id: ProviderId,
    pub name: String,
    pub photo_url: String,
    pub categories: Vec<CareCategory>,
    /// Average rating out of 5.
    pub rating: f32,
    pub reviews_count: u32,
    pub descriptions: Vec<ServiceDescription>,
    pub services: Vec<String>,
    /// In EUR.
    pub hourly_rate: f64,
    pub location: String,
    pub verifications: Vec<String>,
    pub coordinates: Coordinates,
    pub reviews: Vec<Review>,
    pub badges: Vec<String>,
    pub is_premium: bool,
    /// Distance from the user, in kilometers. Derived per render when a
    /// user location is known; never part of the stored listing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
}

impl Provider {
    /// Case-insensitive free-text match against name, location, any
    /// service, or any description text. Any single field matching is
    /// enough.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&query)
            || self.location.to_lowercase().contains(&query)
            || self
                .services
                .iter()
                .any(|service| service.to_lowercase().contains(&query))
            || self
                .descriptions
                .iter()
                .any(|description| description.text.to_lowercase().contains(&query))
    }

    /// Description text for one vertical, if the provider covers it.
    pub fn description_for(&self, category: CareCategory) -> Option<&str> {
        self.descriptions
            .iter()
            .find(|description| description.category == category)
            .map(|description| description.text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> Provider {
        Provider {
            id: 1,
            name: "Sofia Lopez".to_string(),
            photo_url: String::new(),
            categories: vec![CareCategory::Children],
            rating: 4.8,
            reviews_count: 12,
            descriptions: vec![ServiceDescription {
                category: CareCategory::Children,
                text: "Estudiante de pedagogía, certificada en RCP.".to_string(),
            }],
            services: vec!["Canguro".to_string(), "Juego Creativo".to_string()],
            hourly_rate: 11.0,
            location: "Arganzuela, Madrid".to_string(),
            verifications: vec![],
            coordinates: Coordinates::new(40.398, -3.6995),
            reviews: vec![],
            badges: vec![],
            is_premium: false,
            distance_km: None,
        }
    }

    #[test]
    fn test_query_matches_service_case_insensitive() {
        assert!(provider().matches_query("canguro"));
        assert!(provider().matches_query("CANGURO"));
    }

    #[test]
    fn test_query_matches_name_location_and_description() {
        let p = provider();
        assert!(p.matches_query("sofia"));
        assert!(p.matches_query("arganzuela"));
        assert!(p.matches_query("pedagogía"));
    }

    #[test]
    fn test_query_without_match_is_excluded() {
        assert!(!provider().matches_query("fontanería"));
    }

    #[test]
    fn test_empty_query_matches_everything() {
        assert!(provider().matches_query(""));
        assert!(provider().matches_query("   "));
    }

    #[test]
    fn test_category_filter() {
        let p = provider();
        assert!(CategoryFilter::All.matches(&p));
        assert!(CategoryFilter::Only(CareCategory::Children).matches(&p));
        assert!(!CategoryFilter::Only(CareCategory::Pets).matches(&p));
    }
}
