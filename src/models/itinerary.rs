use serde::{Deserialize, Serialize};

use crate::models::place::PlaceCategory;
use crate::models::trip::Pace;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HotelTier {
    Budget,
    Midrange,
    Luxury,
}

impl HotelTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            HotelTier::Budget => "budget",
            HotelTier::Midrange => "midrange",
            HotelTier::Luxury => "luxury",
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct HotelContact {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// The single hotel selected for a trip. Attached to every day except the
/// last one (checkout morning).
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub tier: HotelTier,
    pub price_per_night: i64, // INR
    pub price_per_night_usd: f64,
    pub rating: f64,
    pub amenities: Vec<String>,
    pub description: String,
    pub address: String,
    pub check_in: String,
    pub check_out: String,
    pub total_nights: u32,
    pub total_cost: i64, // INR
    pub contact: HotelContact,
}

/// A scheduled slot entry, derived from a Place plus slot-specific cost
/// estimation. Recomputed on every generation request.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub category: PlaceCategory,
    pub time: String,
    pub duration: String,
    pub cost: i64, // INR
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_usd: Option<f64>,
    pub rating: f64,
    pub description: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tips: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct DaySchedule {
    pub morning: Vec<Activity>,
    pub afternoon: Vec<Activity>,
    pub evening: Vec<Activity>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DayPlan {
    pub day: u32,
    pub date: String,
    pub total_cost: i64, // INR
    pub summary: String,
    pub highlights: Vec<String>,
    pub activities: DaySchedule,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hotel: Option<Hotel>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct EmergencyContacts {
    pub police: String,
    pub medical: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embassy: Option<String>,
}

/// Root aggregate returned to the caller. Owned exclusively by the request
/// that produced it; nothing is shared across generation requests.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Itinerary {
    pub destination: String,
    pub destination_country: String,
    pub total_days: u32,
    pub total_budget: i64, // INR
    pub total_budget_usd: f64,
    pub difficulty: Pace,
    pub currency: String,
    pub exchange_rate: f64,
    pub days: Vec<DayPlan>,
    pub hotels: Vec<Hotel>,
    pub total_hotel_cost: i64,    // INR
    pub total_activity_cost: i64, // INR
    pub tips: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_insights: Option<String>,
    pub best_time_to_visit: String,
    pub weather_info: String,
    pub local_currency: String,
    pub emergency_contacts: EmergencyContacts,
}
