//! Tiered place-data provider.
//!
//! Resolution order, first non-empty wins: live maps lookup, curated
//! landmark catalog, generic placeholders. The generic tier always succeeds,
//! so every generation request has at least one attraction and one dining
//! option to work with.

use futures::join;

use crate::models::place::{Place, PlaceCategory};
use crate::services::curated::CuratedCatalog;
use crate::services::maps_service::{MapsService, NearbyPlace};

const MAX_LIVE_ATTRACTIONS: usize = 8;
const MAX_LIVE_RESTAURANTS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceSource {
    Live,
    Curated,
    Generic,
}

#[derive(Debug, Clone)]
pub struct ResolvedPlaces {
    pub places: Vec<Place>,
    pub country: Option<String>,
    pub source: PlaceSource,
}

pub struct PlaceService {
    maps: Option<MapsService>,
    catalog: CuratedCatalog,
}

impl PlaceService {
    pub fn new(maps: Option<MapsService>, catalog: CuratedCatalog) -> Self {
        Self { maps, catalog }
    }

    pub fn from_env() -> Self {
        let maps = match MapsService::from_env() {
            Ok(service) => {
                println!("Maps provider initialized for live place lookups");
                Some(service)
            }
            Err(err) => {
                println!("Maps provider not available: {}. Using fallback place data.", err);
                None
            }
        };
        Self::new(maps, CuratedCatalog::default())
    }

    pub fn live_tier_available(&self) -> bool {
        self.maps.is_some()
    }

    /// Resolves candidate places for a destination. Never fails: every
    /// provider error degrades to the next tier.
    pub async fn fetch_places(&self, city: &str) -> ResolvedPlaces {
        if let Some(maps) = &self.maps {
            match self.try_live_places(maps, city).await {
                Ok(Some(resolved)) => {
                    println!(
                        "Live tier supplied {} places for {}",
                        resolved.places.len(),
                        city
                    );
                    return ensure_minimum_supply(resolved, city);
                }
                Ok(None) => {
                    println!("Live tier returned no usable places for {}", city);
                }
                Err(err) => {
                    eprintln!("Live place lookup failed for {}: {}", city, err);
                }
            }
        }

        if let Some(curated) = self.catalog.lookup(city) {
            println!(
                "Curated catalog supplied {} places for {}",
                curated.places.len(),
                city
            );
            return ensure_minimum_supply(
                ResolvedPlaces {
                    places: curated.places.clone(),
                    country: Some(curated.country.to_string()),
                    source: PlaceSource::Curated,
                },
                city,
            );
        }

        println!("Using generic placeholder places for {}", city);
        generic_places(city)
    }

    async fn try_live_places(
        &self,
        maps: &MapsService,
        city: &str,
    ) -> Result<Option<ResolvedPlaces>, Box<dyn std::error::Error>> {
        let Some(geocoded) = maps.geocode_city(city).await? else {
            return Ok(None);
        };

        let (attractions, restaurants) = join!(
            maps.search_attractions(geocoded.lat, geocoded.lng),
            maps.search_restaurants(geocoded.lat, geocoded.lng)
        );
        let attractions = attractions?;
        let restaurants = restaurants?;

        let mut places = Vec::new();
        for nearby in attractions.into_iter().take(MAX_LIVE_ATTRACTIONS) {
            places.push(to_place(nearby, city, 1));
        }
        for nearby in restaurants.into_iter().take(MAX_LIVE_RESTAURANTS) {
            let mut place = to_place(nearby, city, 2);
            place.category = PlaceCategory::Dining;
            place.description = format!(
                "{} - Authentic dining experience in {} serving delicious local cuisine.",
                place.name, city
            );
            places.push(place);
        }

        if places.is_empty() {
            return Ok(None);
        }

        Ok(Some(ResolvedPlaces {
            places,
            country: geocoded.country,
            source: PlaceSource::Live,
        }))
    }
}

fn to_place(nearby: NearbyPlace, city: &str, default_price_level: u8) -> Place {
    let category = place_category(&nearby.types);
    let rating = nearby.rating.unwrap_or(4.0);
    let description = format!(
        "{} - A popular {} in {} with excellent reviews and cultural significance.",
        nearby.name,
        category.as_str(),
        city
    );

    Place {
        id: nearby.place_id.clone(),
        name: nearby.name.clone(),
        category,
        rating,
        price_level: nearby.price_level.unwrap_or(default_price_level).min(4),
        address: nearby.address(),
        description,
        coordinates: nearby.coordinates(),
        photo_url: None,
    }
}

/// Maps provider place types onto the pipeline's categories.
fn place_category(types: &[String]) -> PlaceCategory {
    let has = |t: &str| types.iter().any(|candidate| candidate == t);

    if has("restaurant") || has("food") || has("meal_takeaway") {
        PlaceCategory::Dining
    } else if has("lodging") {
        PlaceCategory::Lodging
    } else if has("amusement_park") || has("zoo") || has("bowling_alley") {
        PlaceCategory::Activity
    } else {
        PlaceCategory::Attraction
    }
}

/// Generic tier: plausible but non-specific placeholders. Must never be
/// empty so the assembler always has material to schedule.
fn generic_places(city: &str) -> ResolvedPlaces {
    let country = crate::services::destination::country_for_city(city).map(str::to_string);

    ResolvedPlaces {
        places: vec![
            Place {
                id: "generic_1".to_string(),
                name: format!("{} Heritage Museum", city),
                category: PlaceCategory::Attraction,
                rating: 4.3,
                price_level: 2,
                address: format!("Old City, {}", city),
                description: format!(
                    "Discover the rich cultural heritage and history of {}",
                    city
                ),
                coordinates: None,
                photo_url: None,
            },
            Place {
                id: "generic_2".to_string(),
                name: format!("{} Central Market", city),
                category: PlaceCategory::Attraction,
                rating: 4.1,
                price_level: 1,
                address: format!("Market District, {}", city),
                description: format!(
                    "Traditional market offering local handicrafts and authentic {} products",
                    city
                ),
                coordinates: None,
                photo_url: None,
            },
            Place {
                id: "generic_3".to_string(),
                name: format!("Local Restaurant {}", city),
                category: PlaceCategory::Dining,
                rating: 4.2,
                price_level: 2,
                address: format!("Food Street, {}", city),
                description: format!(
                    "Authentic local cuisine and traditional dishes of {}",
                    city
                ),
                coordinates: None,
                photo_url: None,
            },
        ],
        country,
        source: PlaceSource::Generic,
    }
}

/// A tier can come back lopsided (e.g. curated cities with no restaurant
/// entry, or a live result with only restaurants). Top up the missing
/// category with generic placeholders so scheduling never runs dry.
fn ensure_minimum_supply(mut resolved: ResolvedPlaces, city: &str) -> ResolvedPlaces {
    let generic = generic_places(city);

    let has_attraction = resolved
        .places
        .iter()
        .any(|p| p.category == PlaceCategory::Attraction);
    let has_dining = resolved
        .places
        .iter()
        .any(|p| p.category == PlaceCategory::Dining);

    if !has_attraction {
        resolved.places.extend(
            generic
                .places
                .iter()
                .filter(|p| p.category == PlaceCategory::Attraction)
                .cloned(),
        );
    }
    if !has_dining {
        resolved.places.extend(
            generic
                .places
                .iter()
                .filter(|p| p.category == PlaceCategory::Dining)
                .cloned(),
        );
    }

    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::maps_service::MapsService;

    #[test]
    fn test_generic_tier_always_has_both_categories() {
        let resolved = generic_places("Nowhereville");
        assert_eq!(resolved.source, PlaceSource::Generic);
        assert!(resolved
            .places
            .iter()
            .any(|p| p.category == PlaceCategory::Attraction));
        assert!(resolved
            .places
            .iter()
            .any(|p| p.category == PlaceCategory::Dining));
        assert!(resolved.places.iter().any(|p| p.name.contains("Nowhereville")));
    }

    #[test]
    fn test_place_category_mapping() {
        let types = |list: &[&str]| list.iter().map(|s| s.to_string()).collect::<Vec<_>>();

        assert_eq!(
            place_category(&types(&["restaurant", "point_of_interest"])),
            PlaceCategory::Dining
        );
        assert_eq!(place_category(&types(&["lodging"])), PlaceCategory::Lodging);
        assert_eq!(place_category(&types(&["zoo"])), PlaceCategory::Activity);
        assert_eq!(
            place_category(&types(&["tourist_attraction", "museum"])),
            PlaceCategory::Attraction
        );
        assert_eq!(place_category(&[]), PlaceCategory::Attraction);
    }

    #[test]
    fn test_curated_fallback_without_live_tier() {
        let service = PlaceService::new(None, CuratedCatalog::default());
        let resolved = tokio_test::block_on(service.fetch_places("Mathura"));

        assert_eq!(resolved.source, PlaceSource::Curated);
        assert_eq!(resolved.country.as_deref(), Some("India"));
        assert!(resolved
            .places
            .iter()
            .any(|p| p.name == "Krishna Janmabhoomi Temple"));
    }

    #[test]
    fn test_curated_city_without_dining_gets_topped_up() {
        // Delhi's curated entries are all attractions.
        let service = PlaceService::new(None, CuratedCatalog::default());
        let resolved = tokio_test::block_on(service.fetch_places("Delhi"));

        assert_eq!(resolved.source, PlaceSource::Curated);
        assert!(resolved
            .places
            .iter()
            .any(|p| p.category == PlaceCategory::Dining));
    }

    #[test]
    fn test_unknown_city_falls_through_to_generic() {
        let service = PlaceService::new(None, CuratedCatalog::default());
        let resolved = tokio_test::block_on(service.fetch_places("Nowhereville"));
        assert_eq!(resolved.source, PlaceSource::Generic);
        assert_eq!(resolved.places.len(), 3);
    }

    #[actix_rt::test]
    async fn test_live_tier_denied_falls_back_to_curated() {
        let mut server = mockito::Server::new_async().await;
        let _geocode = server
            .mock("GET", mockito::Matcher::Regex(r"^/geocode/json.*".into()))
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(r#"{"status": "REQUEST_DENIED", "results": []}"#)
            .create_async()
            .await;

        let maps = MapsService::with_base_url("bad-key".to_string(), server.url()).unwrap();
        let service = PlaceService::new(Some(maps), CuratedCatalog::default());

        let resolved = service.fetch_places("Agra").await;
        assert_eq!(resolved.source, PlaceSource::Curated);
        assert!(resolved.places.iter().any(|p| p.name == "Taj Mahal"));
    }

    #[actix_rt::test]
    async fn test_live_tier_supplies_places() {
        let mut server = mockito::Server::new_async().await;
        let _geocode = server
            .mock("GET", mockito::Matcher::Regex(r"^/geocode/json.*".into()))
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(
                serde_json::json!({
                    "status": "OK",
                    "results": [{
                        "geometry": { "location": { "lat": 48.8566, "lng": 2.3522 } },
                        "address_components": [
                            { "long_name": "France", "types": ["country"] }
                        ]
                    }]
                })
                .to_string(),
            )
            .create_async()
            .await;
        let _nearby = server
            .mock(
                "GET",
                mockito::Matcher::Regex(r"^/place/nearbysearch/json.*".into()),
            )
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_body(
                serde_json::json!({
                    "status": "OK",
                    "results": [{
                        "place_id": "louvre",
                        "name": "Louvre Museum",
                        "rating": 4.7,
                        "price_level": 2,
                        "formatted_address": "Rue de Rivoli, Paris",
                        "geometry": { "location": { "lat": 48.8606, "lng": 2.3376 } },
                        "types": ["tourist_attraction", "museum"]
                    }]
                })
                .to_string(),
            )
            .expect_at_least(2)
            .create_async()
            .await;

        let maps = MapsService::with_base_url("key".to_string(), server.url()).unwrap();
        let service = PlaceService::new(Some(maps), CuratedCatalog::default());

        let resolved = service.fetch_places("Paris").await;
        assert_eq!(resolved.source, PlaceSource::Live);
        assert_eq!(resolved.country.as_deref(), Some("France"));
        assert!(resolved.places.iter().any(|p| p.name == "Louvre Museum"));
        // The restaurant search reuses the same mock; that entry is forced
        // into the dining category so the supply stays balanced.
        assert!(resolved
            .places
            .iter()
            .any(|p| p.category == PlaceCategory::Dining));
    }
}
