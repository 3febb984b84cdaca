use std::sync::Arc;
use tokio::sync::RwLock;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize, Clone)]
pub struct UsageStats {
    pub total_requests: usize,
    pub successful_requests: usize,
    pub rate_limited: usize,
    pub errors: usize,
    pub last_reset: DateTime<Utc>,
}

pub struct UsageMonitor {
    stats: Arc<RwLock<UsageStats>>,
}

impl Default for UsageMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl UsageMonitor {
    pub fn new() -> Self {
        Self {
            stats: Arc::new(RwLock::new(UsageStats {
                last_reset: Utc::now(),
                ..Default::default()
            })),
        }
    }

    pub async fn record_request(&self) {
        self.stats.write().await.total_requests += 1;
    }

    pub async fn record_success(&self) {
        self.stats.write().await.successful_requests += 1;
    }

    pub async fn record_rate_limited(&self) {
        self.stats.write().await.rate_limited += 1;
    }

    pub async fn record_error(&self) {
        self.stats.write().await.errors += 1;
    }

    pub async fn get_stats(&self) -> UsageStats {
        let stats = self.stats.read().await;
        (*stats).clone()
    }

    pub async fn reset_stats(&self) {
        let mut stats = self.stats.write().await;
        *stats = UsageStats {
            last_reset: Utc::now(),
            ..Default::default()
        };
    }
}
