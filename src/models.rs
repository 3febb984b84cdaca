use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::normalize::normalize_money_input;

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

/// Body accepted by the words endpoints. Exactly one of `amount` or
/// `raw_amount` must be present.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct WordsRequest {
    #[serde(default)]
    pub amount: Option<f64>,
    /// Amount as typed in a form field, e.g. "1.234.567".
    #[serde(default)]
    pub raw_amount: Option<String>,
    #[serde(default)]
    pub currency_suffix: Option<String>,
}

impl WordsRequest {
    /// The numeric amount to format. Call after `validate`.
    pub fn resolved_amount(&self) -> Result<f64, String> {
        match (self.amount, self.raw_amount.as_deref()) {
            (Some(amount), None) => Ok(amount),
            (None, Some(raw)) => normalize_money_input(raw)
                .map(|value| value as f64)
                .ok_or_else(|| format!("Could not read an amount from {:?}", raw)),
            (Some(_), Some(_)) => Err("Provide either amount or raw_amount, not both".to_string()),
            (None, None) => Err("Amount is required".to_string()),
        }
    }
}

impl Validate for WordsRequest {
    fn validate(&self) -> Result<(), String> {
        let amount = self.resolved_amount()?;
        if amount < 0.0 {
            return Err("Amount cannot be negative".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SimpleWordsResponse {
    pub amount: f64,
    pub words: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DetailedWordsResponse {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
    pub data: WordsData,
    pub meta: ResponseMetadata,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct WordsData {
    pub amount: f64,
    pub integer_part: f64,
    pub cents: u8,
    pub words: String,
    pub title: String,
    pub legal_text: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ResponseMetadata {
    pub response_time_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_limit_remaining: Option<usize>,
}
