use crate::{
    config::Config,
    monitor::UsageMonitor,
    rate_limit::RateLimiter,
};
use log::info;
use std::sync::Arc;

/// Shared state handed to every handler through `web::Data`.
pub struct ServiceRegistry {
    pub config: Config,
    pub rate_limiter: Arc<RateLimiter>,
    pub monitor: Arc<UsageMonitor>,
}

impl ServiceRegistry {
    pub fn new(config: &Config) -> Self {
        info!(
            "Initializing services: {} requests/day per client, suffix {:?}",
            config.rate_limit_settings.requests_per_day,
            config.document_settings.currency_suffix
        );

        Self {
            config: config.clone(),
            rate_limiter: Arc::new(RateLimiter::new(config.rate_limit_settings.requests_per_day)),
            monitor: Arc::new(UsageMonitor::new()),
        }
    }

    pub fn currency_suffix(&self) -> &str {
        &self.config.document_settings.currency_suffix
    }
}
