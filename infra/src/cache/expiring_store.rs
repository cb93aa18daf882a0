//! Generic in-memory key/value store with per-entry expiry
//!
//! Expired entries are invisible to readers as soon as their deadline passes.
//! They are reclaimed lazily by the reader that finds them, and eagerly by a
//! background sweep running on a fixed interval until the store is shut down.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

struct Entry<V> {
    value: V,
    expires_at: Option<Instant>,
}

impl<V> Entry<V> {
    fn is_expired(&self, now: Instant) -> bool {
        matches!(self.expires_at, Some(deadline) if now >= deadline)
    }
}

type Entries<V> = Arc<RwLock<HashMap<String, Entry<V>>>>;

/// Expiring key/value store
///
/// All access goes through [`set`](Self::set), [`get`](Self::get) and
/// [`delete`](Self::delete); the map itself is never exposed.
pub struct ExpiringStore<V> {
    entries: Entries<V>,
    cancel: CancellationToken,
    sweeper: Mutex<Option<JoinHandle<()>>>,
}

impl<V> ExpiringStore<V>
where
    V: Clone + Send + Sync + 'static,
{
    /// Create a store and spawn its sweep task on the current tokio runtime
    pub fn new(sweep_interval: Duration) -> Self {
        let store = Self::without_sweeper();
        let handle = tokio::spawn(sweep_loop(
            Arc::clone(&store.entries),
            sweep_interval.max(Duration::from_millis(1)),
            store.cancel.clone(),
        ));
        if let Ok(mut sweeper) = store.sweeper.lock() {
            *sweeper = Some(handle);
        }
        store
    }

    /// Create a store that only reclaims lazily
    pub fn without_sweeper() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            cancel: CancellationToken::new(),
            sweeper: Mutex::new(None),
        }
    }

    /// Insert or overwrite `key`; a zero `ttl` means the entry never expires
    pub async fn set(&self, key: impl Into<String>, value: V, ttl: Duration) {
        let expires_at = (!ttl.is_zero()).then(|| Instant::now() + ttl);
        self.entries
            .write()
            .await
            .insert(key.into(), Entry { value, expires_at });
    }

    /// Fetch the live value for `key`
    ///
    /// An expired entry is reported as absent and removed. Removal re-checks
    /// the deadline under the write lock, since a concurrent sweep, reader or
    /// writer may have removed or replaced the entry in the meantime.
    pub async fn get(&self, key: &str) -> Option<V> {
        {
            let entries = self.entries.read().await;
            match entries.get(key) {
                None => return None,
                Some(entry) if !entry.is_expired(Instant::now()) => {
                    return Some(entry.value.clone())
                }
                Some(_) => {}
            }
        }

        self.reclaim_expired(key).await
    }

    /// Write-lock half of [`get`](Self::get)
    ///
    /// Removes `key` if it is still expired, or returns the live value a
    /// concurrent `set` put there after the read lock was released.
    pub(super) async fn reclaim_expired(&self, key: &str) -> Option<V> {
        let mut entries = self.entries.write().await;
        match entries.get(key).map(|entry| entry.is_expired(Instant::now())) {
            Some(true) => {
                entries.remove(key);
                None
            }
            // Replaced by a fresh `set` between the two locks
            Some(false) => entries.get(key).map(|entry| entry.value.clone()),
            None => None,
        }
    }

    /// Remove `key`; removing an absent key is a no-op
    pub async fn delete(&self, key: &str) {
        self.entries.write().await.remove(key);
    }

    /// Remove every expired entry, returning how many were dropped
    pub async fn purge_expired(&self) -> usize {
        purge(&self.entries).await
    }

    /// Number of physically stored entries, expired or not
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Whether nothing is physically stored
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Whether the sweep task is still running
    pub fn is_sweeping(&self) -> bool {
        self.sweeper
            .lock()
            .map(|sweeper| sweeper.as_ref().is_some_and(|handle| !handle.is_finished()))
            .unwrap_or(false)
    }

    /// Stop the sweep task and wait for it to finish
    ///
    /// Idempotent. Lazy reclamation keeps working afterwards.
    pub async fn shutdown(&self) {
        self.cancel.cancel();
        let handle = self.sweeper.lock().ok().and_then(|mut sweeper| sweeper.take());
        if let Some(handle) = handle {
            if let Err(e) = handle.await {
                tracing::warn!(error = %e, "Expiring store sweep task ended abnormally");
            }
        }
    }
}

impl<V> Drop for ExpiringStore<V> {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

async fn purge<V>(entries: &RwLock<HashMap<String, Entry<V>>>) -> usize {
    let now = Instant::now();
    let mut entries = entries.write().await;
    let before = entries.len();
    entries.retain(|_, entry| !entry.is_expired(now));
    before - entries.len()
}

async fn sweep_loop<V>(entries: Entries<V>, period: Duration, cancel: CancellationToken)
where
    V: Send + Sync + 'static,
{
    let mut interval = time::interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    tracing::debug!(period_ms = period.as_millis() as u64, "Expiring store sweep started");
    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            _ = interval.tick() => {
                let removed = purge(&entries).await;
                if removed > 0 {
                    tracing::debug!(removed, "Swept expired entries");
                }
            }
        }
    }
    tracing::debug!("Expiring store sweep stopped");
}
