//! Narrative enrichment client.
//!
//! Asks a chat-completion endpoint for destination-specific cultural
//! insights. Strictly advisory: every failure path collapses to an empty
//! string and the itinerary ships without insights.

use std::{env, time::Duration};

use reqwest;
use serde::{Deserialize, Serialize};

use crate::models::trip::Pace;

const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
const DEFAULT_MODEL: &str = "deepseek/deepseek-r1";
const REQUEST_TIMEOUT_SECS: u64 = 10;
const MAX_COMPLETION_TOKENS: u32 = 4000;

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f64,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: String,
}

pub struct NarrativeService {
    http_client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl NarrativeService {
    /// `None` when no API key is configured; the pipeline then skips
    /// enrichment entirely.
    pub fn from_env() -> Option<Self> {
        let api_key = env::var("DEEPSEEK_API_KEY").ok()?;
        let base_url =
            env::var("DEEPSEEK_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::with_base_url(api_key, base_url).ok()
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
            model: DEFAULT_MODEL.to_string(),
        })
    }

    /// Fetches cultural insights for the trip. Returns an empty string on
    /// any failure; the caller treats empty as "no enrichment".
    pub async fn fetch_narrative(
        &self,
        city: &str,
        budget_inr: i64,
        days: u32,
        pace: Pace,
    ) -> String {
        match self.try_fetch(city, budget_inr, days, pace).await {
            Ok(content) => content,
            Err(err) => {
                eprintln!("Narrative enrichment failed for {}: {}", city, err);
                String::new()
            }
        }
    }

    async fn try_fetch(
        &self,
        city: &str,
        budget_inr: i64,
        days: u32,
        pace: Pace,
    ) -> Result<String, Box<dyn std::error::Error>> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user",
                content: build_prompt(city, budget_inr, days, pace),
            }],
            temperature: 0.7,
            max_tokens: MAX_COMPLETION_TOKENS,
        };

        let response = self
            .http_client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(format!("chat completion returned {}", response.status()).into());
        }

        let body: ChatResponse = response.json().await?;
        Ok(body
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .unwrap_or_default())
    }

    /// One bounded probe call so the health endpoint can report availability.
    pub async fn check_health(&self) -> bool {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user",
                content: "Hello, respond with just 'OK'.".to_string(),
            }],
            temperature: 0.0,
            max_tokens: 10,
        };

        match self
            .http_client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(err) => {
                eprintln!("Narrative provider health check failed: {}", err);
                false
            }
        }
    }
}

fn build_prompt(city: &str, budget_inr: i64, days: u32, pace: Pace) -> String {
    let style = match pace {
        Pace::Easy => "relaxed with fewer activities",
        Pace::Medium => "moderate pace",
        Pace::Hard => "packed with maximum experiences",
    };

    format!(
        "Please provide a detailed {days}-day travel itinerary for {city} with these specific requirements:\n\n\
         TRIP DETAILS:\n\
         - Destination: {city}\n\
         - Duration: {days} days\n\
         - Total Budget: Rs {budget_inr} (Indian Rupees)\n\
         - Travel Style: {pace} ({style})\n\n\
         IMPORTANT: Please include REAL, SPECIFIC landmark names for {city}. Do not use generic names.\n\n\
         REQUIRED FORMAT:\n\n\
         **FAMOUS LANDMARKS & ATTRACTIONS:**\n\
         List 8-10 real, specific attractions in {city} with:\n\
         - Exact name of landmark/temple/fort/palace/museum\n\
         - Type (temple, palace, fort, museum, garden, market, etc.)\n\
         - Brief description\n\
         - Estimated entry cost in INR\n\n\
         **DINING RECOMMENDATIONS:**\n\
         List 5-6 real restaurants or food places in {city}:\n\
         - Restaurant name or area famous for food\n\
         - Cuisine type\n\
         - Price range\n\n\
         **DAILY SCHEDULE:**\n\
         Day 1: Morning: [specific landmark], Afternoon: [specific place], Evening: [specific activity]\n\
         [Include {days} days total]\n\n\
         **PRACTICAL INFO:**\n\
         - Best time to visit {city}\n\
         - Local transportation\n\
         - Cultural tips\n\
         - Budget breakdown\n\n\
         Please use actual landmark names that exist in {city}. Be specific and authentic.",
        days = days,
        city = city,
        budget_inr = budget_inr,
        pace = pace.as_str(),
        style = style,
    )
}
