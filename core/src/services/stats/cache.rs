//! Single-value cache with a time-to-live and an injected clock

use chrono::{DateTime, Utc};
use std::future::Future;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

/// Source of the current time
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock that only moves when told to
#[derive(Debug)]
pub struct ManualClock {
    millis: AtomicI64,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            millis: AtomicI64::new(start.timestamp_millis()),
        }
    }

    /// Move the clock forward
    pub fn advance(&self, by: Duration) {
        let by = i64::try_from(by.as_millis()).unwrap_or(i64::MAX);
        self.millis.fetch_add(by, Ordering::SeqCst);
    }

    pub fn set(&self, to: DateTime<Utc>) {
        self.millis.store(to.timestamp_millis(), Ordering::SeqCst);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new(Utc::now())
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(self.millis.load(Ordering::SeqCst)).unwrap_or_default()
    }
}

struct CachedValue<T> {
    value: T,
    stored_at: DateTime<Utc>,
}

/// Holds one value until it is older than the TTL.
///
/// A zero TTL disables caching. If the clock moves backwards the stored
/// value is treated as fresh.
pub struct TtlCache<T> {
    ttl: Duration,
    clock: Arc<dyn Clock>,
    slot: RwLock<Option<CachedValue<T>>>,
}

impl<T> TtlCache<T>
where
    T: Clone + Send + Sync,
{
    pub fn new(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            ttl,
            clock,
            slot: RwLock::new(None),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// The cached value, if present and not expired
    pub async fn get(&self) -> Option<T> {
        let slot = self.slot.read().await;
        slot.as_ref()
            .filter(|cached| self.is_fresh(cached))
            .map(|cached| cached.value.clone())
    }

    /// Store `value`, stamped with the current time
    pub async fn insert(&self, value: T) {
        let mut slot = self.slot.write().await;
        *slot = Some(CachedValue {
            value,
            stored_at: self.clock.now(),
        });
    }

    /// Drop the cached value
    pub async fn invalidate(&self) {
        self.slot.write().await.take();
    }

    /// The cached value, or the result of `load` when missing or expired.
    ///
    /// Concurrent callers wait for a single load. A failed load leaves the
    /// cache empty.
    pub async fn get_or_try_insert_with<F, Fut, E>(&self, load: F) -> Result<T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if let Some(value) = self.get().await {
            return Ok(value);
        }

        let mut slot = self.slot.write().await;
        if let Some(cached) = slot.as_ref().filter(|cached| self.is_fresh(cached)) {
            return Ok(cached.value.clone());
        }

        let value = load().await?;
        *slot = Some(CachedValue {
            value: value.clone(),
            stored_at: self.clock.now(),
        });
        Ok(value)
    }

    fn is_fresh(&self, cached: &CachedValue<T>) -> bool {
        match (self.clock.now() - cached.stored_at).to_std() {
            Ok(elapsed) => elapsed < self.ttl,
            Err(_) => !self.ttl.is_zero(),
        }
    }
}
