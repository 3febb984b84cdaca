use thiserror::Error;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use actix_web::{HttpResponse, ResponseError};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Amount cannot be written in words: {0}")]
    AmountNotRepresentable(String),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
            request_id: uuid::Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl ServiceError {
    pub fn code(&self) -> &'static str {
        match self {
            ServiceError::InvalidAmount(_) => "INVALID_AMOUNT",
            ServiceError::AmountNotRepresentable(_) => "AMOUNT_NOT_REPRESENTABLE",
            ServiceError::RateLimitExceeded => "RATE_LIMIT_EXCEEDED",
            ServiceError::ConfigError(_) => "CONFIG_ERROR",
        }
    }
}

impl ResponseError for ServiceError {
    fn error_response(&self) -> HttpResponse {
        match self {
            ServiceError::RateLimitExceeded => {
                HttpResponse::TooManyRequests().json(ErrorResponse::new(self.to_string(), self.code()))
            }
            ServiceError::InvalidAmount(_) => {
                HttpResponse::BadRequest().json(ErrorResponse::new(self.to_string(), self.code()))
            }
            ServiceError::AmountNotRepresentable(_) => {
                HttpResponse::UnprocessableEntity().json(ErrorResponse::new(self.to_string(), self.code()))
            }
            ServiceError::ConfigError(_) => {
                let error_response = ErrorResponse::new(
                    "Service configuration error",
                    self.code(),
                ).with_details(self.to_string());
                HttpResponse::InternalServerError().json(error_response)
            }
        }
    }
}
