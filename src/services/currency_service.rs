use std::env;

/// Ledger currency every money field is normalized to.
pub const CANONICAL_CURRENCY: &str = "INR";

const DEFAULT_USD_TO_INR: f64 = 83.25;

/// Fixed exchange-rate table, one unit of foreign currency = rate INR.
/// The USD rate can be pinned through `USD_TO_INR_RATE` for deployments that
/// refresh it out of band.
#[derive(Debug, Clone)]
pub struct ExchangeRates {
    usd: f64,
    eur: f64,
    gbp: f64,
    jpy: f64,
    aud: f64,
    cad: f64,
}

impl Default for ExchangeRates {
    fn default() -> Self {
        Self {
            usd: DEFAULT_USD_TO_INR,
            eur: 90.50,
            gbp: 105.75,
            jpy: 0.56,
            aud: 54.20,
            cad: 61.35,
        }
    }
}

impl ExchangeRates {
    pub fn from_env() -> Self {
        let mut rates = Self::default();
        if let Ok(raw) = env::var("USD_TO_INR_RATE") {
            match raw.parse::<f64>() {
                Ok(rate) if rate > 0.0 => rates.usd = rate,
                _ => eprintln!("Ignoring invalid USD_TO_INR_RATE value: {}", raw),
            }
        }
        rates
    }

    pub fn rate(&self, currency: &str) -> Option<f64> {
        match currency.to_ascii_uppercase().as_str() {
            "INR" => Some(1.0),
            "USD" => Some(self.usd),
            "EUR" => Some(self.eur),
            "GBP" => Some(self.gbp),
            "JPY" => Some(self.jpy),
            "AUD" => Some(self.aud),
            "CAD" => Some(self.cad),
            _ => None,
        }
    }

    pub fn usd_rate(&self) -> f64 {
        self.usd
    }

    /// Converts to canonical INR, rounded to the nearest whole rupee.
    pub fn to_inr(&self, amount: f64, from_currency: &str) -> Option<i64> {
        let rate = self.rate(from_currency)?;
        Some((amount * rate).round() as i64)
    }

    /// Converts an INR amount to a display currency, rounded to 2 decimals.
    pub fn from_inr(&self, amount_inr: i64, to_currency: &str) -> Option<f64> {
        let rate = self.rate(to_currency)?;
        Some(((amount_inr as f64 / rate) * 100.0).round() / 100.0)
    }
}
