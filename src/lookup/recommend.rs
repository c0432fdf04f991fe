use crate::domain::plant::WateringInfo;
use crate::i18n::{Language, text};
use regex::Regex;
use serde_json::json;
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

pub const FALLBACK_FREQUENCY_DAYS: u32 = 7;

const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
const MODEL: &str = "gemini-2.0-flash";

/// Development fixtures answering common names when no API key is configured,
/// mirroring the hosted recommendation source's tone.
const MOCK_RESPONSES: &[(&str, &str)] = &[
    (
        "Monstera Deliciosa",
        "Water every 1-2 weeks, allowing the top inch of soil to dry between waterings.",
    ),
    (
        "Snake Plant",
        "Water every 2-3 weeks, as they are drought-tolerant and prefer dry conditions.",
    ),
    (
        "Peace Lily",
        "Water once a week, keeping the soil consistently moist but not soggy.",
    ),
    (
        "Monstera Adansonii",
        "Water every 1-2 weeks, allowing the top inch of soil to dry between waterings.",
    ),
];

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("transport: {0}")]
    Transport(#[from] Box<ureq::Error>),
    #[error("read body: {0}")]
    Io(#[from] std::io::Error),
    #[error("response had no candidate text")]
    MalformedResponse,
}

/// Outcome of a recommendation lookup. The fallback variant marks that the
/// external source did not answer and the fixed default was substituted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recommendation {
    Fetched(WateringInfo),
    Fallback(WateringInfo),
}

impl Recommendation {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }

    pub fn info(&self) -> &WateringInfo {
        match self {
            Self::Fetched(info) | Self::Fallback(info) => info,
        }
    }

    pub fn into_info(self) -> WateringInfo {
        match self {
            Self::Fetched(info) | Self::Fallback(info) => info,
        }
    }
}

pub struct RecommendationClient {
    api_key: Option<String>,
    endpoint: String,
    agent: ureq::Agent,
}

impl RecommendationClient {
    pub fn new(api_key: Option<String>, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(timeout)
            .timeout(timeout)
            .build();
        Self {
            api_key,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            agent,
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Looks up watering advice for a plant. Every failure mode collapses
    /// into the fallback; the caller never sees an error.
    pub fn lookup(&self, plant_name: &str, language: Language) -> Recommendation {
        let Some(api_key) = self.api_key.as_deref() else {
            return fallback(plant_name, language);
        };

        match self.fetch(api_key, plant_name, language) {
            Ok(info) => Recommendation::Fetched(info),
            Err(err) => {
                warn!(plant = plant_name, error = %err, "recommendation lookup failed, using fallback");
                fallback(plant_name, language)
            }
        }
    }

    fn fetch(
        &self,
        api_key: &str,
        plant_name: &str,
        language: Language,
    ) -> Result<WateringInfo, LookupError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.endpoint, MODEL, api_key
        );
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt(plant_name, language) }] }]
        });

        let response: serde_json::Value = self
            .agent
            .post(&url)
            .send_json(body)
            .map_err(Box::new)?
            .into_json()?;

        let description = response["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or(LookupError::MalformedResponse)?;

        let frequency_days =
            parse_frequency_days(&description).unwrap_or(FALLBACK_FREQUENCY_DAYS);

        Ok(WateringInfo {
            frequency_days,
            description,
        })
    }
}

fn prompt(plant_name: &str, language: Language) -> String {
    match language {
        Language::En => format!(
            "How often should you water a {plant_name}? Please provide a brief, \
             concise answer focusing on the watering frequency."
        ),
        Language::Zh => {
            format!("{plant_name}应该多久浇一次水？请简要回答，重点说明浇水频率。")
        }
    }
}

fn fallback(plant_name: &str, language: Language) -> Recommendation {
    let description = MOCK_RESPONSES
        .iter()
        .find(|(name, _)| *name == plant_name)
        .map(|(_, description)| (*description).to_string())
        .unwrap_or_else(|| text(language).fallback_description.to_string());

    let frequency_days = parse_frequency_days(&description).unwrap_or(FALLBACK_FREQUENCY_DAYS);

    Recommendation::Fallback(WateringInfo {
        frequency_days,
        description,
    })
}

/// Extracts a frequency in days out of free-text advice. Ranges take the
/// lower bound ("every 1-2 weeks" reads as weekly).
pub fn parse_frequency_days(description: &str) -> Option<u32> {
    let every = Regex::new(r"(?i)every\s+(\d+)(?:\s*-\s*\d+)?\s*(day|week)s?").ok()?;
    if let Some(caps) = every.captures(description) {
        let n: u32 = caps[1].parse().ok()?;
        let unit = if caps[2].eq_ignore_ascii_case("week") {
            7
        } else {
            1
        };
        return Some((n * unit).max(1));
    }

    let once = Regex::new(r"(?i)once\s+(?:a|every)\s+(day|week)").ok()?;
    if let Some(caps) = once.captures(description) {
        return Some(if caps[1].eq_ignore_ascii_case("week") {
            7
        } else {
            1
        });
    }

    let zh_count = Regex::new(r"每\s*(\d+)\s*(天|周)").ok()?;
    if let Some(caps) = zh_count.captures(description) {
        let n: u32 = caps[1].parse().ok()?;
        let unit = if &caps[2] == "周" { 7 } else { 1 };
        return Some((n * unit).max(1));
    }

    let zh_unit = Regex::new(r"每(天|周)").ok()?;
    if let Some(caps) = zh_unit.captures(description) {
        return Some(if &caps[1] == "周" { 7 } else { 1 });
    }

    None
}
