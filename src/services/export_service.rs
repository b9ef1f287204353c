//! Plain-text and CSV renderings of an assembled itinerary, used by the
//! export endpoint so travelers can carry the plan offline.

use crate::models::itinerary::{Activity, DayPlan, Itinerary};

pub fn render_text(itinerary: &Itinerary) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{} Travel Itinerary ({} days, {})\n",
        itinerary.destination,
        itinerary.total_days,
        itinerary.difficulty.as_str()
    ));
    out.push_str(&format!(
        "Country: {} | Budget: Rs {} (${:.2})\n",
        itinerary.destination_country, itinerary.total_budget, itinerary.total_budget_usd
    ));
    out.push_str(&format!(
        "Hotel cost: Rs {} | Activity cost: Rs {}\n\n",
        itinerary.total_hotel_cost, itinerary.total_activity_cost
    ));

    for day in &itinerary.days {
        out.push_str(&format!("Day {} - {}\n", day.day, day.date));
        out.push_str(&format!("  {}\n", day.summary));

        for (slot, activities) in day_slots(day) {
            for activity in activities {
                out.push_str(&format!(
                    "  [{}] {} - {} ({}, Rs {})\n",
                    slot, activity.time, activity.name, activity.duration, activity.cost
                ));
            }
        }

        match &day.hotel {
            Some(hotel) => out.push_str(&format!(
                "  Overnight: {} (Rs {}/night)\n\n",
                hotel.name, hotel.price_per_night
            )),
            None => out.push_str("  Checkout day - no overnight stay\n\n"),
        }
    }

    if !itinerary.tips.is_empty() {
        out.push_str("Travel tips:\n");
        for tip in &itinerary.tips {
            out.push_str(&format!("  - {}\n", tip));
        }
    }

    if let Some(insights) = &itinerary.ai_insights {
        out.push_str("\nLocal insights:\n");
        out.push_str(insights);
        out.push('\n');
    }

    out
}

pub fn render_csv(itinerary: &Itinerary) -> String {
    let mut out = String::from("day,date,slot,name,type,time,duration,cost_inr,rating,address\n");

    for day in &itinerary.days {
        for (slot, activities) in day_slots(day) {
            for activity in activities {
                let row = [
                    day.day.to_string(),
                    day.date.clone(),
                    slot.to_string(),
                    activity.name.clone(),
                    activity.category.as_str().to_string(),
                    activity.time.clone(),
                    activity.duration.clone(),
                    activity.cost.to_string(),
                    activity.rating.to_string(),
                    activity.address.clone(),
                ];
                let escaped: Vec<String> = row.iter().map(|field| csv_field(field)).collect();
                out.push_str(&escaped.join(","));
                out.push('\n');
            }
        }
    }

    out
}

fn day_slots(day: &DayPlan) -> [(&'static str, &Vec<Activity>); 3] {
    [
        ("morning", &day.activities.morning),
        ("afternoon", &day.activities.afternoon),
        ("evening", &day.activities.evening),
    ]
}

fn csv_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
