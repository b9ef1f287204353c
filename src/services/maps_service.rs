//! Maps provider client for the live place-data tier.
//!
//! Wraps the geocoding and nearby-search endpoints. Requires the
//! `GOOGLE_MAPS_API_KEY` environment variable; when it is absent the live
//! tier is simply skipped and generation falls through to the curated data.

use std::{env, time::Duration};

use reqwest;
use serde::Deserialize;

const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api";
const REQUEST_TIMEOUT_SECS: u64 = 10;

pub const ATTRACTION_SEARCH_RADIUS_M: u32 = 10_000;
pub const RESTAURANT_SEARCH_RADIUS_M: u32 = 5_000;
const MIN_PLACE_RATING: f64 = 4.0;

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    geometry: Geometry,
    #[serde(default)]
    address_components: Vec<AddressComponent>,
}

#[derive(Debug, Deserialize)]
struct AddressComponent {
    long_name: String,
    #[serde(default)]
    types: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: LatLng,
}

#[derive(Debug, Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

#[derive(Debug, Deserialize)]
struct NearbySearchResponse {
    status: String,
    #[serde(default)]
    results: Vec<NearbyPlace>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct NearbyPlace {
    pub place_id: String,
    pub name: String,
    pub rating: Option<f64>,
    pub price_level: Option<u8>,
    #[serde(default)]
    pub formatted_address: Option<String>,
    #[serde(default)]
    pub vicinity: Option<String>,
    pub geometry: Option<PlaceGeometry>,
    #[serde(default)]
    pub types: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PlaceGeometry {
    pub location: PlaceLatLng,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PlaceLatLng {
    pub lat: f64,
    pub lng: f64,
}

impl NearbyPlace {
    pub fn address(&self) -> String {
        self.formatted_address
            .clone()
            .or_else(|| self.vicinity.clone())
            .unwrap_or_default()
    }

    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.geometry
            .as_ref()
            .map(|g| (g.location.lat, g.location.lng))
    }
}

#[derive(Debug, Clone)]
pub struct GeocodedCity {
    pub lat: f64,
    pub lng: f64,
    pub country: Option<String>,
}

pub struct MapsService {
    http_client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl MapsService {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        let api_key = env::var("GOOGLE_MAPS_API_KEY")
            .map_err(|_| "GOOGLE_MAPS_API_KEY environment variable not set")?;
        let base_url =
            env::var("GOOGLE_MAPS_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::with_base_url(api_key, base_url)
    }

    pub fn with_base_url(
        api_key: String,
        base_url: String,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            http_client,
            api_key,
            base_url,
        })
    }

    /// Resolves a destination name to coordinates plus the country extracted
    /// from the address components. `Ok(None)` means the provider answered
    /// but had nothing usable (denied, over quota, zero results).
    pub async fn geocode_city(
        &self,
        city: &str,
    ) -> Result<Option<GeocodedCity>, Box<dyn std::error::Error>> {
        let url = format!("{}/geocode/json", self.base_url);
        let response = self
            .http_client
            .get(&url)
            .query(&[("address", city), ("key", self.api_key.as_str())])
            .send()
            .await?;
        if !response.status().is_success() {
            eprintln!("Geocode HTTP error: {}", response.status());
            return Ok(None);
        }

        let body: GeocodeResponse = response.json().await?;
        match body.status.as_str() {
            "OK" => {}
            "REQUEST_DENIED" => {
                eprintln!("Maps API access denied; check key permissions and enabled APIs");
                return Ok(None);
            }
            "OVER_QUERY_LIMIT" => {
                eprintln!("Maps API quota exceeded");
                return Ok(None);
            }
            other => {
                println!("Geocode returned status {} for {}", other, city);
                return Ok(None);
            }
        }

        let Some(result) = body.results.into_iter().next() else {
            return Ok(None);
        };

        let country = result
            .address_components
            .iter()
            .find(|c| c.types.iter().any(|t| t == "country"))
            .map(|c| c.long_name.clone());

        Ok(Some(GeocodedCity {
            lat: result.geometry.location.lat,
            lng: result.geometry.location.lng,
            country,
        }))
    }

    /// Nearby tourist attractions with rating >= 4.0, best first, capped.
    pub async fn search_attractions(
        &self,
        lat: f64,
        lng: f64,
    ) -> Result<Vec<NearbyPlace>, Box<dyn std::error::Error>> {
        self.nearby_search(lat, lng, ATTRACTION_SEARCH_RADIUS_M, "tourist_attraction", 10)
            .await
    }

    /// Nearby restaurants with rating >= 4.0, capped.
    pub async fn search_restaurants(
        &self,
        lat: f64,
        lng: f64,
    ) -> Result<Vec<NearbyPlace>, Box<dyn std::error::Error>> {
        self.nearby_search(lat, lng, RESTAURANT_SEARCH_RADIUS_M, "restaurant", 8)
            .await
    }

    async fn nearby_search(
        &self,
        lat: f64,
        lng: f64,
        radius: u32,
        place_type: &str,
        limit: usize,
    ) -> Result<Vec<NearbyPlace>, Box<dyn std::error::Error>> {
        let url = format!("{}/place/nearbysearch/json", self.base_url);
        let response = self
            .http_client
            .get(&url)
            .query(&[
                ("location", format!("{},{}", lat, lng)),
                ("radius", radius.to_string()),
                ("type", place_type.to_string()),
                ("key", self.api_key.clone()),
            ])
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(format!("Nearby search HTTP error: {}", response.status()).into());
        }

        let body: NearbySearchResponse = response.json().await?;
        if body.status != "OK" {
            println!(
                "Nearby search for type {} returned status {}",
                place_type, body.status
            );
            return Ok(Vec::new());
        }

        Ok(body
            .results
            .into_iter()
            .filter(|p| p.rating.unwrap_or(0.0) >= MIN_PLACE_RATING)
            .take(limit)
            .collect())
    }
}
