//! Tests for the in-memory sliding-window limiter, run on a paused clock

use std::sync::Arc;
use std::time::Duration;

use oa_core::services::auth::{RateLimitDecision, RateLimitPolicy, RateLimiterTrait};
use tokio::time::sleep;

use crate::services::auth::InMemoryRateLimiter;

const KEY: &str = "otp:09123456789";

fn otp_policy() -> RateLimitPolicy {
    RateLimitPolicy::new(3, 600).unwrap()
}

#[tokio::test(start_paused = true)]
async fn test_fourth_request_in_window_is_limited() {
    let limiter = InMemoryRateLimiter::new();

    for _ in 0..3 {
        assert_eq!(
            limiter.check(KEY, otp_policy()).await,
            RateLimitDecision::Allowed
        );
    }

    match limiter.check(KEY, otp_policy()).await {
        RateLimitDecision::Limited {
            retry_after_seconds,
        } => assert!((1..=600).contains(&retry_after_seconds)),
        RateLimitDecision::Allowed => panic!("fourth request must be limited"),
    }
    // Rejected requests are not recorded
    assert_eq!(limiter.recorded_events(KEY).await, 3);
}

#[tokio::test(start_paused = true)]
async fn test_retry_after_counts_down_from_oldest_event() {
    let limiter = InMemoryRateLimiter::new();
    limiter.check(KEY, otp_policy()).await;
    sleep(Duration::from_secs(100)).await;
    limiter.check(KEY, otp_policy()).await;
    limiter.check(KEY, otp_policy()).await;

    sleep(Duration::from_millis(200_500)).await;

    assert_eq!(
        limiter.check(KEY, otp_policy()).await,
        RateLimitDecision::Limited {
            retry_after_seconds: 300
        }
    );
}

#[tokio::test(start_paused = true)]
async fn test_admitted_again_after_window_elapses() {
    let limiter = InMemoryRateLimiter::new();
    for _ in 0..3 {
        limiter.check(KEY, otp_policy()).await;
    }
    assert!(limiter.check(KEY, otp_policy()).await.is_limited());

    sleep(Duration::from_secs(600)).await;

    assert_eq!(
        limiter.check(KEY, otp_policy()).await,
        RateLimitDecision::Allowed
    );
    assert_eq!(limiter.recorded_events(KEY).await, 1);
}

#[tokio::test(start_paused = true)]
async fn test_event_leaves_window_exactly_at_window_length() {
    let limiter = InMemoryRateLimiter::new();
    for _ in 0..3 {
        limiter.check(KEY, otp_policy()).await;
    }

    sleep(Duration::from_millis(599_999)).await;
    assert_eq!(
        limiter.check(KEY, otp_policy()).await,
        RateLimitDecision::Limited {
            retry_after_seconds: 1
        }
    );

    // An event exactly one window old no longer counts
    sleep(Duration::from_millis(1)).await;
    assert_eq!(
        limiter.check(KEY, otp_policy()).await,
        RateLimitDecision::Allowed
    );
}

#[tokio::test(start_paused = true)]
async fn test_sliding_window_frees_one_slot_at_a_time() {
    let limiter = InMemoryRateLimiter::new();
    limiter.check(KEY, otp_policy()).await;
    sleep(Duration::from_secs(300)).await;
    limiter.check(KEY, otp_policy()).await;
    limiter.check(KEY, otp_policy()).await;

    sleep(Duration::from_secs(300)).await;

    // Only the first event has left the window
    assert!(!limiter.check(KEY, otp_policy()).await.is_limited());
    assert!(limiter.check(KEY, otp_policy()).await.is_limited());
}

#[tokio::test(start_paused = true)]
async fn test_zero_max_always_limits() {
    let limiter = InMemoryRateLimiter::new();
    let policy = RateLimitPolicy::new(0, 600).unwrap();

    assert_eq!(
        limiter.check(KEY, policy).await,
        RateLimitDecision::Limited {
            retry_after_seconds: 600
        }
    );
}

#[tokio::test(start_paused = true)]
async fn test_keys_are_independent() {
    let limiter = InMemoryRateLimiter::new();
    for _ in 0..3 {
        limiter.check("otp:09111111111", otp_policy()).await;
    }

    assert!(limiter.check("otp:09111111111", otp_policy()).await.is_limited());
    assert!(!limiter.check("otp:09222222222", otp_policy()).await.is_limited());
}

/// Keys are only pruned when checked again, so idle keys stay tracked.
#[tokio::test(start_paused = true)]
async fn test_idle_keys_are_never_evicted() {
    let limiter = InMemoryRateLimiter::new();
    for i in 0..100 {
        limiter.check(&format!("otp:{i}"), otp_policy()).await;
    }

    sleep(Duration::from_secs(3600)).await;

    assert_eq!(limiter.tracked_keys().await, 100);
    assert_eq!(limiter.recorded_events("otp:0").await, 1);
}

#[tokio::test(start_paused = true)]
async fn test_concurrent_checks_admit_exactly_max() {
    let limiter = Arc::new(InMemoryRateLimiter::new());

    let handles: Vec<_> = (0..20)
        .map(|_| {
            let limiter = Arc::clone(&limiter);
            tokio::spawn(async move { limiter.check(KEY, otp_policy()).await })
        })
        .collect();

    let mut allowed = 0;
    for handle in handles {
        if handle.await.unwrap() == RateLimitDecision::Allowed {
            allowed += 1;
        }
    }
    assert_eq!(allowed, 3);
}
