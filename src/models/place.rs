use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PlaceCategory {
    Attraction,
    Dining,
    Activity,
    Lodging,
}

impl PlaceCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlaceCategory::Attraction => "attraction",
            PlaceCategory::Dining => "dining",
            PlaceCategory::Activity => "activity",
            PlaceCategory::Lodging => "lodging",
        }
    }
}

/// A candidate attraction/restaurant supplied by one of the provider tiers.
/// Immutable once fetched; lives for a single generation request.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Place {
    pub id: String,
    pub name: String,
    pub category: PlaceCategory,
    pub rating: f64,
    pub price_level: u8, // 0 (free) - 4 (premium)
    pub address: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<(f64, f64)>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}
