//! In-memory sliding-window rate limiter

use std::collections::{HashMap, VecDeque};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tokio::time::Instant;

use oa_core::services::auth::{RateLimitDecision, RateLimitPolicy, RateLimiterTrait};

/// Sliding-window limiter keeping one timestamp queue per key
///
/// A single lock serializes every check, which makes the decision and the
/// recording of the new event atomic. Queues are pruned only when their own
/// key is checked again, so the key set grows with the number of distinct
/// keys ever seen.
#[derive(Default)]
pub struct InMemoryRateLimiter {
    windows: Mutex<HashMap<String, VecDeque<Instant>>>,
}

impl InMemoryRateLimiter {
    /// Create an empty limiter
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently tracked, including drained ones
    pub async fn tracked_keys(&self) -> usize {
        self.windows.lock().await.len()
    }

    /// Events currently counted against `key`, without pruning
    pub async fn recorded_events(&self, key: &str) -> usize {
        self.windows
            .lock()
            .await
            .get(key)
            .map_or(0, VecDeque::len)
    }
}

#[async_trait]
impl RateLimiterTrait for InMemoryRateLimiter {
    async fn check(&self, key: &str, policy: RateLimitPolicy) -> RateLimitDecision {
        let window = policy.window();
        let now = Instant::now();

        let mut windows = self.windows.lock().await;
        let events = windows.entry(key.to_string()).or_default();

        while events
            .front()
            .is_some_and(|&oldest| now.duration_since(oldest) >= window)
        {
            events.pop_front();
        }

        if events.len() >= policy.max_requests() as usize {
            let remaining = events
                .front()
                .map_or(window, |&oldest| window.saturating_sub(now.duration_since(oldest)));
            let retry_after_seconds = ceil_seconds(remaining).max(1);

            tracing::debug!(
                key,
                counted = events.len(),
                retry_after_seconds,
                "Rate limit reached"
            );
            return RateLimitDecision::Limited {
                retry_after_seconds,
            };
        }

        events.push_back(now);
        RateLimitDecision::Allowed
    }
}

fn ceil_seconds(duration: Duration) -> u64 {
    duration.as_secs() + u64::from(duration.subsec_nanos() > 0)
}
