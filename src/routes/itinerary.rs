use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use serde_json::json;

use crate::models::itinerary::Itinerary;
use crate::models::trip::{CityCosts, CityInfo, CostBand, ItineraryRequest};
use crate::services::export_service;
use crate::services::itinerary_generation_service::ItineraryGenerator;

/*
    POST /api/itinerary/generate
*/
pub async fn generate(
    generator: web::Data<ItineraryGenerator>,
    input: web::Json<ItineraryRequest>,
) -> impl Responder {
    let request = input.into_inner();
    println!(
        "Itinerary generation requested: {} / ${} / {} days / {}",
        request.city,
        request.budget,
        request.days,
        request.difficulty.as_str()
    );

    // Invalid requests never reach the providers.
    if let Err(details) = request.validate() {
        return HttpResponse::BadRequest().json(json!({
            "success": false,
            "error": "Invalid input data",
            "details": details,
        }));
    }

    match generator.generate(&request).await {
        Ok(itinerary) => HttpResponse::Ok().json(json!({
            "success": true,
            "data": itinerary,
        })),
        Err(err) => {
            eprintln!("Itinerary assembly failed for {}: {}", request.city, err);
            let message = if cfg!(debug_assertions) {
                format!("Failed to generate itinerary: {}", err)
            } else {
                "Failed to generate itinerary".to_string()
            };
            HttpResponse::InternalServerError().json(json!({
                "success": false,
                "error": message,
            }))
        }
    }
}

/*
    GET /api/city/{city}
*/
pub async fn city_info(path: web::Path<String>) -> impl Responder {
    let city = path.into_inner();
    if city.trim().is_empty() {
        return HttpResponse::BadRequest().json(json!({
            "success": false,
            "error": "City parameter is required",
        }));
    }

    let info = CityInfo {
        name: city.clone(),
        country: crate::services::destination::country_for_city(&city)
            .unwrap_or("Unknown")
            .to_string(),
        currency: "USD".to_string(),
        time_zone: "UTC".to_string(),
        popular_attractions: vec![
            "Historic City Center".to_string(),
            "Main Cathedral".to_string(),
            "Art Museum".to_string(),
            "Local Market".to_string(),
        ],
        average_costs: CityCosts {
            budget: CostBand { min: 50, max: 100 },
            mid_range: CostBand { min: 100, max: 200 },
            luxury: CostBand { min: 200, max: 500 },
        },
        best_time_to_visit: "Year-round".to_string(),
        safety_rating: 4.2,
    };

    HttpResponse::Ok().json(json!({
        "success": true,
        "data": info,
    }))
}

#[derive(Debug, Deserialize)]
pub struct ExportQuery {
    format: Option<String>,
}

/*
    POST /api/itinerary/export?format=text|csv
*/
pub async fn export(
    query: web::Query<ExportQuery>,
    input: web::Json<Itinerary>,
) -> impl Responder {
    let itinerary = input.into_inner();
    let format = query.format.as_deref().unwrap_or("text");

    match format {
        "text" => HttpResponse::Ok()
            .content_type("text/plain; charset=utf-8")
            .body(export_service::render_text(&itinerary)),
        "csv" => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .body(export_service::render_csv(&itinerary)),
        other => HttpResponse::BadRequest().json(json!({
            "success": false,
            "error": format!("Unsupported export format: {}", other),
        })),
    }
}
