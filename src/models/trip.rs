use serde::{Deserialize, Serialize};

pub const MIN_BUDGET_USD: f64 = 100.0;
pub const MIN_TRIP_DAYS: u32 = 1;
pub const MAX_TRIP_DAYS: u32 = 14;

/// Travel pace; the wire field is named `difficulty` to match the client form.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Pace {
    Easy,
    Medium,
    Hard,
}

impl Pace {
    pub fn as_str(&self) -> &'static str {
        match self {
            Pace::Easy => "easy",
            Pace::Medium => "medium",
            Pace::Hard => "hard",
        }
    }

    /// Fraction of the non-lodging daily budget spent on activities.
    pub fn activity_fraction(&self) -> f64 {
        match self {
            Pace::Easy => 0.70,
            Pace::Medium => 0.85,
            Pace::Hard => 1.00,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ItineraryRequest {
    pub city: String,
    pub budget: f64, // USD
    pub days: u32,
    pub difficulty: Pace,
}

#[derive(Debug, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl ItineraryRequest {
    /// Validates the request before any provider is consulted.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        if self.city.trim().is_empty() {
            errors.push(FieldError {
                field: "city",
                message: "City is required".to_string(),
            });
        }
        if self.budget < MIN_BUDGET_USD {
            errors.push(FieldError {
                field: "budget",
                message: format!("Budget must be at least ${}", MIN_BUDGET_USD as i64),
            });
        }
        if self.days < MIN_TRIP_DAYS || self.days > MAX_TRIP_DAYS {
            errors.push(FieldError {
                field: "days",
                message: format!(
                    "Trip must be between {}-{} days",
                    MIN_TRIP_DAYS, MAX_TRIP_DAYS
                ),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBand {
    pub min: u32,
    pub max: u32,
}

/// Static city overview returned by the `/city/{city}` endpoint; not part of
/// the generation pipeline.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CityInfo {
    pub name: String,
    pub country: String,
    pub currency: String,
    pub time_zone: String,
    pub popular_attractions: Vec<String>,
    pub average_costs: CityCosts,
    pub best_time_to_visit: String,
    pub safety_rating: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CityCosts {
    pub budget: CostBand,
    pub mid_range: CostBand,
    pub luxury: CostBand,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(city: &str, budget: f64, days: u32) -> ItineraryRequest {
        ItineraryRequest {
            city: city.to_string(),
            budget,
            days,
            difficulty: Pace::Medium,
        }
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(request("Mathura", 1000.0, 3).validate().is_ok());
        assert!(request("Paris", 100.0, 1).validate().is_ok());
        assert!(request("Tokyo", 5000.0, 14).validate().is_ok());
    }

    #[test]
    fn test_days_out_of_range_rejected() {
        let err = request("Paris", 1000.0, 15).validate().unwrap_err();
        assert_eq!(err.len(), 1);
        assert_eq!(err[0].field, "days");

        assert!(request("Paris", 1000.0, 0).validate().is_err());
    }

    #[test]
    fn test_budget_below_minimum_rejected() {
        let err = request("Paris", 50.0, 3).validate().unwrap_err();
        assert_eq!(err[0].field, "budget");
    }

    #[test]
    fn test_blank_city_rejected() {
        let err = request("   ", 500.0, 3).validate().unwrap_err();
        assert_eq!(err[0].field, "city");
    }

    #[test]
    fn test_multiple_errors_reported_together() {
        let err = request("", 10.0, 20).validate().unwrap_err();
        assert_eq!(err.len(), 3);
    }

    #[test]
    fn test_pace_activity_fraction() {
        assert_eq!(Pace::Easy.activity_fraction(), 0.70);
        assert_eq!(Pace::Medium.activity_fraction(), 0.85);
        assert_eq!(Pace::Hard.activity_fraction(), 1.00);
    }
}
