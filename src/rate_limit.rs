use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use log::{debug, warn};

#[derive(Debug, Clone)]
struct ClientUsage {
    daily_count: usize,
    day: NaiveDate,
}

/// Daily request budget per client address.
pub struct RateLimiter {
    clients: Arc<RwLock<HashMap<String, ClientUsage>>>,
    daily_limit: usize,
    cleanup_interval: Duration,
    last_cleanup: Arc<RwLock<DateTime<Utc>>>,
}

impl RateLimiter {
    pub fn new(daily_limit: usize) -> Self {
        Self {
            clients: Arc::new(RwLock::new(HashMap::new())),
            daily_limit,
            cleanup_interval: Duration::minutes(5),
            last_cleanup: Arc::new(RwLock::new(Utc::now())),
        }
    }

    pub fn daily_limit(&self) -> usize {
        self.daily_limit
    }

    /// Counts one request for `key` and returns whether it fits in today's
    /// budget. Rejected requests are not counted.
    pub async fn check_rate_limit(&self, key: &str) -> bool {
        self.check_at(key, Utc::now()).await
    }

    async fn check_at(&self, key: &str, now: DateTime<Utc>) -> bool {
        self.cleanup_if_needed(now).await;

        let today = now.date_naive();
        let mut clients = self.clients.write().await;
        let usage = clients.entry(key.to_string()).or_insert_with(|| ClientUsage {
            daily_count: 0,
            day: today,
        });

        if usage.day < today {
            usage.daily_count = 0;
            usage.day = today;
        }

        if usage.daily_count >= self.daily_limit {
            warn!("Rate limit exceeded for client {}. Daily count: {}", key, usage.daily_count);
            return false;
        }

        usage.daily_count += 1;
        debug!("Rate limit check passed for client {}: {}/{}",
            key, usage.daily_count, self.daily_limit);
        true
    }

    pub async fn get_remaining_requests(&self, key: &str) -> usize {
        let today = Utc::now().date_naive();
        let clients = self.clients.read().await;
        match clients.get(key) {
            Some(usage) if usage.day == today => self.daily_limit.saturating_sub(usage.daily_count),
            _ => self.daily_limit,
        }
    }

    async fn cleanup_if_needed(&self, now: DateTime<Utc>) {
        let mut last_cleanup = self.last_cleanup.write().await;
        if now - *last_cleanup <= self.cleanup_interval {
            return;
        }

        let today = now.date_naive();
        let mut clients = self.clients.write().await;
        let before = clients.len();
        clients.retain(|_, usage| usage.day >= today);
        debug!("Pruned {} stale rate limit entries", before - clients.len());
        *last_cleanup = now;
    }

    #[cfg(test)]
    async fn tracked_clients(&self) -> usize {
        self.clients.read().await.len()
    }
}
