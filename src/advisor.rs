// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::{AnalysisResult, BudgetStatus, Expense};
use crate::utils::http_client;

pub const GEMINI_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Debug, Error)]
pub enum AdvisorError {
    #[error("GEMINI_API_KEY is not set")]
    MissingApiKey,

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid analysis from AI: {0}")]
    InvalidData(String),
}

/// Client for the Gemini text-generation endpoint. One blocking request per
/// analysis; every failure maps to [`fallback_result`] instead of propagating.
pub struct AdvisorClient {
    http: reqwest::blocking::Client,
    api_base: String,
    api_key: Option<String>,
    model: String,
}

impl AdvisorClient {
    pub fn new(api_base: &str, api_key: Option<String>) -> Result<Self> {
        Ok(Self {
            http: http_client()?,
            api_base: api_base.trim_end_matches('/').to_string(),
            api_key,
            model: GEMINI_MODEL.to_string(),
        })
    }

    /// Credential from `GEMINI_API_KEY`; endpoint override via `GEMINI_API_BASE`.
    /// An absent key is not an error here — it surfaces as the fallback result
    /// on the first analysis.
    pub fn from_env() -> Result<Self> {
        let api_base =
            std::env::var("GEMINI_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        Self::new(&api_base, std::env::var("GEMINI_API_KEY").ok())
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Analyze a snapshot of the expense list. Empty input returns the fixed
    /// onboarding result without contacting the service; any request or parse
    /// failure returns the fixed fallback result and is logged only.
    pub fn analyze(&self, expenses: &[Expense], base_currency: &str) -> AnalysisResult {
        if expenses.is_empty() {
            return onboarding_result();
        }
        let prompt = build_prompt(expenses, base_currency);
        match self.request_analysis(&prompt) {
            Ok(result) => result,
            Err(e) => {
                warn!("spending analysis failed: {}", e);
                fallback_result()
            }
        }
    }

    fn request_analysis(&self, prompt: &str) -> Result<AnalysisResult, AdvisorError> {
        let key = self
            .api_key
            .as_deref()
            .filter(|k| !k.is_empty())
            .ok_or(AdvisorError::MissingApiKey)?;

        let request = GenerateRequest {
            contents: vec![Content { parts: vec![Part { text: prompt.to_string() }] }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: analysis_schema(),
            },
        };

        let url = format!("{}/models/{}:generateContent", self.api_base, self.model);
        let response = self
            .http
            .post(url)
            .query(&[("key", key)])
            .json(&request)
            .send()?
            .error_for_status()?;

        let body: GenerateResponse = response.json()?;
        let text = body
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .and_then(|c| c.parts.into_iter().next())
            .map(|p| p.text)
            .unwrap_or_default();
        debug!("Gemini response: {}", text);

        if text.trim().is_empty() {
            return Err(AdvisorError::InvalidData("empty response text".into()));
        }
        parse_analysis(&text)
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: &'static str,
    #[serde(rename = "responseSchema")]
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<TextPart>,
}

#[derive(Debug, Deserialize)]
struct TextPart {
    #[serde(default)]
    text: String,
}

fn analysis_schema() -> serde_json::Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "summary": { "type": "STRING" },
            "advice": { "type": "ARRAY", "items": { "type": "STRING" } },
            "budgetStatus": { "type": "STRING", "enum": ["good", "warning", "critical"] }
        },
        "required": ["summary", "advice", "budgetStatus"]
    })
}

pub fn build_prompt(expenses: &[Expense], base_currency: &str) -> String {
    let records: Vec<String> = expenses
        .iter()
        .map(|e| {
            format!(
                "- {}: {} ({}) - {} {}",
                e.date, e.category, e.description, e.amount, e.currency
            )
        })
        .collect();
    format!(
        "You are a travel expense assistant. Analyze the following spending records.\n\
         The traveller's base currency is {}; treat the amounts as relative travel spending.\n\
         \n\
         Spending records:\n\
         {}\n\
         \n\
         Provide:\n\
         1. A short summary of spending habits (two sentences at most, friendly tone).\n\
         2. Exactly 3 concrete saving tips or spending observations (for example: \"You spend the most on transport\").\n\
         3. A budget status: \"good\", \"warning\" or \"critical\".\n\
         \n\
         Respond with JSON matching this schema: {{\"summary\": string, \"advice\": [string], \"budgetStatus\": \"good\"|\"warning\"|\"critical\"}}.",
        base_currency,
        records.join("\n"),
    )
}

/// Parse an analysis from raw model text. Models sometimes wrap the JSON in
/// prose, so locate the outermost object before deserializing strictly.
pub fn parse_analysis(text: &str) -> Result<AnalysisResult, AdvisorError> {
    let text = text.trim();
    let start = text.find('{');
    let end = text.rfind('}');
    match (start, end) {
        (Some(s), Some(e)) if s < e => {
            let json_str = &text[s..=e];
            serde_json::from_str(json_str).map_err(|err| {
                let truncated = if json_str.len() > 200 {
                    format!("{}...", &json_str[..200])
                } else {
                    json_str.to_string()
                };
                AdvisorError::InvalidData(format!("{} | Raw: {}", err, truncated))
            })
        }
        _ => Err(AdvisorError::InvalidData("no JSON object in response".into())),
    }
}

/// Fixed result for an empty expense list; no service call is made.
pub fn onboarding_result() -> AnalysisResult {
    AnalysisResult {
        summary: "No expenses recorded yet. Add your first travel expense!".to_string(),
        advice: vec!["Record a purchase with `travelclip expense add` to get started.".to_string()],
        budget_status: BudgetStatus::Good,
    }
}

/// Fixed result returned when the analysis request fails for any reason.
pub fn fallback_result() -> AnalysisResult {
    AnalysisResult {
        summary: "Temporarily unable to analyze your spending.".to_string(),
        advice: vec![
            "Check that GEMINI_API_KEY is configured.".to_string(),
            "Try again in a few minutes.".to_string(),
        ],
        budget_status: BudgetStatus::Warning,
    }
}
