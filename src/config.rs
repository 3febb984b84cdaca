use std::env;
use std::str::FromStr;

use crate::presenter::DEFAULT_CURRENCY_SUFFIX;

#[derive(Debug, Clone)]
pub struct Config {
    pub server_settings: ServerSettings,
    pub document_settings: DocumentSettings,
    pub rate_limit_settings: RateLimitSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: usize,
}

#[derive(Debug, Clone)]
pub struct DocumentSettings {
    pub currency_suffix: String,    // printed after the amount in words
}

#[derive(Debug, Clone)]
pub struct RateLimitSettings {
    pub requests_per_day: usize,    // per client address
}

impl Config {
    pub fn new() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup; `new` uses the process
    /// environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            server_settings: ServerSettings {
                host: lookup("AMOUNT_WORDS_HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
                port: parse_or(&lookup, "AMOUNT_WORDS_PORT", 8080)?,
                workers: parse_or(&lookup, "AMOUNT_WORDS_WORKERS", 4)?,
            },
            document_settings: DocumentSettings {
                currency_suffix: lookup("AMOUNT_WORDS_CURRENCY_SUFFIX")
                    .unwrap_or_else(|| DEFAULT_CURRENCY_SUFFIX.to_string()),
            },
            rate_limit_settings: RateLimitSettings {
                requests_per_day: parse_or(&lookup, "AMOUNT_WORDS_REQUESTS_PER_DAY", 10_000)?,
            },
        })
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.server_settings.host.clone(), self.server_settings.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_settings: ServerSettings {
                host: "127.0.0.1".to_string(),
                port: 8080,
                workers: 4,
            },
            document_settings: DocumentSettings {
                currency_suffix: DEFAULT_CURRENCY_SUFFIX.to_string(),
            },
            rate_limit_settings: RateLimitSettings {
                requests_per_day: 10_000,
            },
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, String>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| format!("{} has an invalid value: {}", key, raw)),
        None => Ok(default),
    }
}
