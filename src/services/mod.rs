pub mod budget_service;
pub mod curated;
pub mod currency_service;
pub mod destination;
pub mod export_service;
pub mod itinerary_generation_service;
pub mod maps_service;
pub mod narrative_service;
pub mod place_service;
