//! Itinerary assembly pipeline.
//!
//! Orchestrates place resolution, narrative enrichment, budget allocation and
//! hotel assignment into the day-by-day plan returned to the client. External
//! failures degrade to lower data tiers; only an internal assembly failure
//! aborts a request.

use chrono::{Duration, Utc};
use rand::seq::SliceRandom;

use crate::models::itinerary::{
    Activity, DayPlan, DaySchedule, Hotel, HotelContact, HotelTier, Itinerary,
};
use crate::models::place::{Place, PlaceCategory};
use crate::models::trip::{ItineraryRequest, Pace};
use crate::services::budget_service::{BudgetAllocation, BudgetPlanner};
use crate::services::currency_service::{ExchangeRates, CANONICAL_CURRENCY};
use crate::services::destination;
use crate::services::narrative_service::NarrativeService;
use crate::services::place_service::PlaceService;

// Daily budget thresholds (in the traveler's USD figures) that pick the
// hotel tier.
const BUDGET_TIER_MAX_DAILY_USD: f64 = 100.0;
const MIDRANGE_TIER_MAX_DAILY_USD: f64 = 250.0;

struct HotelTierSpec {
    tier: HotelTier,
    names: [&'static str; 3],
    price_per_night: i64, // INR
    price_per_night_usd: f64,
    rating: f64,
    amenities: &'static [&'static str],
}

const HOTEL_TIERS: [HotelTierSpec; 3] = [
    HotelTierSpec {
        tier: HotelTier::Budget,
        names: ["Budget Inn", "Traveler's Lodge", "City Stay"],
        price_per_night: 2500,
        price_per_night_usd: 30.0,
        rating: 3.8,
        amenities: &["Free WiFi", "24/7 Reception", "Basic Breakfast"],
    },
    HotelTierSpec {
        tier: HotelTier::Midrange,
        names: ["Grand Hotel", "Central Plaza", "Heritage Inn"],
        price_per_night: 6500,
        price_per_night_usd: 80.0,
        rating: 4.3,
        amenities: &["Free WiFi", "Restaurant", "Room Service", "Gym", "Pool"],
    },
    HotelTierSpec {
        tier: HotelTier::Luxury,
        names: ["Royal Palace", "Luxury Suites", "Five Star Resort"],
        price_per_night: 15000,
        price_per_night_usd: 200.0,
        rating: 4.8,
        amenities: &[
            "Free WiFi",
            "Multiple Restaurants",
            "Spa",
            "Concierge",
            "Valet",
            "Pool",
            "Gym",
        ],
    },
];

pub struct ItineraryGenerator {
    places: PlaceService,
    narrative: Option<NarrativeService>,
    rates: ExchangeRates,
    planner: BudgetPlanner,
}

impl ItineraryGenerator {
    pub fn new(
        places: PlaceService,
        narrative: Option<NarrativeService>,
        rates: ExchangeRates,
    ) -> Self {
        Self {
            places,
            narrative,
            rates,
            planner: BudgetPlanner::new(),
        }
    }

    pub fn from_env() -> Self {
        let narrative = NarrativeService::from_env();
        if narrative.is_none() {
            println!("Narrative provider not configured; itineraries ship without AI insights");
        }
        Self::new(PlaceService::from_env(), narrative, ExchangeRates::from_env())
    }

    pub fn maps_available(&self) -> bool {
        self.places.live_tier_available()
    }

    pub fn narrative_configured(&self) -> bool {
        self.narrative.is_some()
    }

    pub async fn narrative_healthy(&self) -> bool {
        match &self.narrative {
            Some(service) => service.check_health().await,
            None => false,
        }
    }

    /// Builds the full itinerary for an already-validated request.
    pub async fn generate(
        &self,
        request: &ItineraryRequest,
    ) -> Result<Itinerary, Box<dyn std::error::Error>> {
        let city = request.city.trim().to_string();
        let budget_inr = self
            .rates
            .to_inr(request.budget, "USD")
            .ok_or("exchange-rate table is missing the USD rate")?;

        let hotel = self.build_hotel(&city, request.budget, request.days);

        // Independent lookups; neither can delay the other beyond its own
        // client timeout.
        let (resolved, insights) = tokio::join!(self.places.fetch_places(&city), async {
            match &self.narrative {
                Some(service) => {
                    service
                        .fetch_narrative(&city, budget_inr, request.days, request.difficulty)
                        .await
                }
                None => String::new(),
            }
        });

        let allocation = BudgetPlanner::allocate(budget_inr, request.days, request.difficulty);

        let attractions: Vec<&Place> = resolved
            .places
            .iter()
            .filter(|p| p.category == PlaceCategory::Attraction)
            .collect();
        let dining: Vec<&Place> = resolved
            .places
            .iter()
            .filter(|p| p.category == PlaceCategory::Dining)
            .collect();

        let mut days = Vec::with_capacity(request.days as usize);
        let mut total_activity_cost: i64 = 0;

        for day_number in 1..=request.days {
            let day = self.build_day(
                &city,
                day_number,
                request.days,
                request.difficulty,
                &allocation,
                &hotel,
                &attractions,
                &dining,
            );
            total_activity_cost += day.total_cost;
            days.push(day);
        }

        let country = resolved
            .country
            .clone()
            .or_else(|| destination::country_for_city(&city).map(str::to_string))
            .unwrap_or_else(|| "Unknown".to_string());
        let metadata = destination::metadata_for_country(&country);

        let tips = trip_tips(&city, request.difficulty);
        let total_hotel_cost = hotel.total_cost;

        Ok(Itinerary {
            destination: city,
            destination_country: country,
            total_days: request.days,
            total_budget: budget_inr,
            total_budget_usd: request.budget,
            difficulty: request.difficulty,
            currency: CANONICAL_CURRENCY.to_string(),
            exchange_rate: self.rates.usd_rate(),
            days,
            hotels: vec![hotel],
            total_hotel_cost,
            total_activity_cost,
            tips,
            ai_insights: if insights.is_empty() {
                None
            } else {
                Some(insights)
            },
            best_time_to_visit: metadata.best_time_to_visit,
            weather_info: metadata.weather_info,
            local_currency: metadata.local_currency,
            emergency_contacts: metadata.emergency_contacts,
        })
    }

    fn build_hotel(&self, city: &str, budget_usd: f64, days: u32) -> Hotel {
        let daily_budget_usd = budget_usd / days.max(1) as f64;
        let spec = if daily_budget_usd < BUDGET_TIER_MAX_DAILY_USD {
            &HOTEL_TIERS[0]
        } else if daily_budget_usd < MIDRANGE_TIER_MAX_DAILY_USD {
            &HOTEL_TIERS[1]
        } else {
            &HOTEL_TIERS[2]
        };

        let base_name = spec
            .names
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or(spec.names[0]);
        let name = format!("{} {}", city, base_name);
        let slug = base_name.to_lowercase().replace([' ', '\''], "");

        // Checkout happens on the final morning, so one less night than days.
        let total_nights = days.saturating_sub(1);
        let check_in = Utc::now();
        let check_out = check_in + Duration::days(total_nights as i64);

        Hotel {
            id: "hotel_1".to_string(),
            name,
            tier: spec.tier,
            price_per_night: spec.price_per_night,
            price_per_night_usd: spec.price_per_night_usd,
            rating: spec.rating,
            amenities: spec.amenities.iter().map(|a| a.to_string()).collect(),
            description: format!(
                "A comfortable {} hotel in the heart of {}, perfect for your stay.",
                spec.tier.as_str(),
                city
            ),
            address: format!("{} City Center", city),
            check_in: check_in.format("%B %-d, %Y").to_string(),
            check_out: check_out.format("%B %-d, %Y").to_string(),
            total_nights,
            total_cost: spec.price_per_night * total_nights as i64,
            contact: HotelContact {
                phone: Some("+91-XXX-XXX-XXXX".to_string()),
                email: Some(format!("reservations@{}.com", slug)),
                website: Some(format!("www.{}.com", slug)),
            },
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn build_day(
        &self,
        city: &str,
        day_number: u32,
        total_days: u32,
        pace: Pace,
        allocation: &BudgetAllocation,
        hotel: &Hotel,
        attractions: &[&Place],
        dining: &[&Place],
    ) -> DayPlan {
        let envelope = BudgetPlanner::day_envelope(allocation, hotel.price_per_night);
        let mut remaining = envelope;

        // Round-robin with wraparound: once the supply is exhausted the
        // places are reused instead of shortening the schedule.
        let morning_place = attractions[((day_number - 1) as usize * 2) % attractions.len()];
        let afternoon_place = attractions[((day_number - 1) as usize * 2 + 1) % attractions.len()];
        let dining_place = dining[(day_number - 1) as usize % dining.len()];

        let morning_cost = self
            .planner
            .estimate_cost(PlaceCategory::Attraction, morning_place.price_level)
            .min(remaining);
        remaining -= morning_cost;

        let afternoon_cost = self
            .planner
            .estimate_cost(PlaceCategory::Attraction, afternoon_place.price_level)
            .min(remaining);
        remaining -= afternoon_cost;

        let dining_cost = self
            .planner
            .estimate_cost(PlaceCategory::Dining, dining_place.price_level)
            .min(remaining);
        remaining -= dining_cost;

        let morning = Activity {
            id: format!("landmark_m{}", day_number),
            name: morning_place.name.clone(),
            category: PlaceCategory::Attraction,
            time: "9:00 AM".to_string(),
            duration: slot_duration(pace, "2 hours", "2.5 hours"),
            cost: morning_cost,
            cost_usd: self.rates.from_inr(morning_cost, "USD"),
            rating: morning_place.rating,
            description: morning_place.description.clone(),
            address: morning_place.address.clone(),
            tips: match pace {
                Pace::Hard => Some(
                    "Visit early morning to avoid crowds and get the best photos".to_string(),
                ),
                _ => None,
            },
        };

        let afternoon_attraction = Activity {
            id: format!("landmark_a1{}", day_number),
            name: afternoon_place.name.clone(),
            category: PlaceCategory::Attraction,
            time: "2:00 PM".to_string(),
            duration: slot_duration(pace, "1.5 hours", "2 hours"),
            cost: afternoon_cost,
            cost_usd: self.rates.from_inr(afternoon_cost, "USD"),
            rating: afternoon_place.rating,
            description: afternoon_place.description.clone(),
            address: afternoon_place.address.clone(),
            tips: None,
        };

        let evening_dining = Activity {
            id: format!("dining_a2{}", day_number),
            name: dining_place.name.clone(),
            category: PlaceCategory::Dining,
            time: "6:00 PM".to_string(),
            duration: "1 hour".to_string(),
            cost: dining_cost,
            cost_usd: self.rates.from_inr(dining_cost, "USD"),
            rating: dining_place.rating,
            description: dining_place.description.clone(),
            address: dining_place.address.clone(),
            tips: None,
        };

        let evening_walk = Activity {
            id: format!("evening_{}", day_number),
            name: format!("{} Evening Walk", city),
            category: PlaceCategory::Activity,
            time: "8:00 PM".to_string(),
            duration: "1 hour".to_string(),
            cost: 0,
            cost_usd: None,
            rating: 4.0,
            description: format!(
                "Peaceful evening walk through {}'s historic streets",
                city
            ),
            address: format!("{} Old City", city),
            tips: Some(
                "Perfect time to witness local evening traditions and capture beautiful sunset photos"
                    .to_string(),
            ),
        };

        let total_cost = morning.cost + afternoon_attraction.cost + evening_dining.cost;
        let date = (Utc::now() + Duration::days((day_number - 1) as i64))
            .format("%B %-d, %Y")
            .to_string();

        DayPlan {
            day: day_number,
            date,
            total_cost,
            summary: format!(
                "Day {}: Explore {}'s authentic landmarks and culture",
                day_number, city
            ),
            highlights: day_highlights(day_number),
            activities: DaySchedule {
                morning: vec![morning],
                afternoon: vec![afternoon_attraction, evening_dining],
                evening: vec![evening_walk],
            },
            hotel: if day_number < total_days {
                Some(hotel.clone())
            } else {
                None
            },
        }
    }
}

fn slot_duration(pace: Pace, easy: &str, other: &str) -> String {
    match pace {
        Pace::Easy => easy.to_string(),
        _ => other.to_string(),
    }
}

fn day_highlights(day_number: u32) -> Vec<String> {
    let pair: [&str; 2] = match day_number {
        1 => ["Historic landmarks", "Local culture"],
        2 => ["Heritage sites", "Traditional cuisine"],
        _ => ["Hidden gems", "Memorable moments"],
    };
    pair.iter().map(|s| s.to_string()).collect()
}

fn trip_tips(city: &str, pace: Pace) -> Vec<String> {
    let tips = vec![
        format!("Learn basic local phrases - {} locals appreciate the effort", city),
        "Keep copies of important documents separate from originals".to_string(),
        "Download offline maps in case of poor internet connection".to_string(),
        format!("Research {}'s tipping customs and local etiquette", city),
        "Book popular attractions in advance to avoid disappointment".to_string(),
        format!(
            "Try to use public transportation - it's often the most authentic way to experience {}",
            city
        ),
        "All prices are shown in Indian Rupees (INR)".to_string(),
        "Currency exchange rates are updated daily".to_string(),
    ];

    match pace {
        Pace::Hard => tips,
        _ => tips.into_iter().take(6).collect(),
    }
}
