use std::collections::HashMap;
use std::env;

use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use serde_json::json;

use crate::services::itinerary_generation_service::ItineraryGenerator;

/*
    GET /api/health

    Reports availability of each external integration. Only booleans leave
    the process; credentials never do.
*/
pub async fn health_check(generator: web::Data<ItineraryGenerator>) -> impl Responder {
    let mut apis = HashMap::new();
    apis.insert("googlemaps", generator.maps_available());
    apis.insert("deepseek", generator.narrative_healthy().await);

    let overall_healthy = apis.values().any(|status| *status);

    HttpResponse::Ok().json(json!({
        "success": true,
        "status": if overall_healthy { "healthy" } else { "degraded" },
        "apis": apis,
        "message": if overall_healthy {
            "API integrations are configured"
        } else {
            "No external APIs configured - using fallback data"
        },
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

/*
    GET /api/config (admin only)

    Which integrations have keys configured, plus setup guidance. Booleans
    only; no secret material is returned.
*/
pub async fn api_config() -> impl Responder {
    let googlemaps = env::var("GOOGLE_MAPS_API_KEY").is_ok();
    let deepseek = env::var("DEEPSEEK_API_KEY").is_ok();
    let exchangerate = env::var("USD_TO_INR_RATE").is_ok();

    let config = [
        ("googlemaps", googlemaps),
        ("deepseek", deepseek),
        ("exchangerate", exchangerate),
    ];
    let configured = config.iter().filter(|(_, set)| *set).count();

    HttpResponse::Ok().json(json!({
        "success": true,
        "configured": configured,
        "total": config.len(),
        "apis": config.iter().copied().collect::<HashMap<_, _>>(),
        "googleMaps": {
            "configured": googlemaps,
            "note": if googlemaps {
                "API key configured - check required APIs are enabled"
            } else {
                "API key not configured"
            },
        },
        "deepseek": {
            "configured": deepseek,
            "note": if deepseek {
                "API key configured - AI insights enabled"
            } else {
                "API key not configured - using fallback insights"
            },
        },
        "recommendations": {
            "setup": [
                "Set environment variables in your .env file or deployment dashboard",
                "For Google Maps: enable Geocoding API and Places API",
                "For DeepSeek: use an OpenRouter API key for AI insights",
                "Restart the server after adding new API keys",
                "Check API quotas and rate limits",
            ],
        },
    }))
}
