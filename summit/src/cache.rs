//! Time-bounded memo of the last successfully loaded dataset.

use crate::dataset::Dataset;
use crate::geometry::limits::DEFAULT_CACHE_TTL_MS;
use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::rc::Rc;

/// Milliseconds since an arbitrary fixed epoch.
pub trait Clock {
    fn now_ms(&self) -> f64;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs_f64() * 1000.0)
            .unwrap_or(0.0)
    }
}

/// Settable clock for tests and replay.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<f64>,
}

impl ManualClock {
    pub fn new(now_ms: f64) -> Self { ManualClock { now: Cell::new(now_ms) } }
    pub fn set(&self, now_ms: f64) { self.now.set(now_ms); }
    pub fn advance(&self, ms: f64) { self.now.set(self.now.get() + ms); }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 { self.now.get() }
}

impl<C: Clock + ?Sized> Clock for Rc<C> {
    fn now_ms(&self) -> f64 { (**self).now_ms() }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CachePolicy {
    /// `None` keeps entries until invalidated.
    pub ttl_ms: Option<f64>,
}

impl Default for CachePolicy {
    fn default() -> Self { CachePolicy { ttl_ms: Some(DEFAULT_CACHE_TTL_MS) } }
}

impl CachePolicy {
    pub fn never_expire() -> Self { CachePolicy { ttl_ms: None } }
    pub fn ttl(ms: f64) -> Self { CachePolicy { ttl_ms: Some(ms) } }

    pub fn is_fresh(&self, fetched_at_ms: f64, now_ms: f64) -> bool {
        match self.ttl_ms {
            None => true,
            // Clock going backwards counts as stale.
            Some(ttl) => now_ms >= fetched_at_ms && now_ms - fetched_at_ms < ttl,
        }
    }
}

#[derive(Clone, Debug)]
pub struct CacheEntry {
    pub data: Rc<Dataset>,
    pub fetched_at_ms: f64,
}

#[derive(Clone, Debug, Default)]
pub struct DatasetCache {
    entry: Option<CacheEntry>,
    policy: CachePolicy,
}

impl DatasetCache {
    pub fn new(policy: CachePolicy) -> Self { DatasetCache { entry: None, policy } }

    pub fn policy(&self) -> CachePolicy { self.policy }

    pub fn set_policy(&mut self, policy: CachePolicy) { self.policy = policy; }

    pub fn entry(&self) -> Option<&CacheEntry> { self.entry.as_ref() }

    pub fn is_fresh(&self, now_ms: f64) -> bool {
        self.entry.as_ref().is_some_and(|e| self.policy.is_fresh(e.fetched_at_ms, now_ms))
    }

    /// Fresh data only; expired entries stay in place until replaced.
    pub fn get(&self, now_ms: f64) -> Option<Rc<Dataset>> {
        if self.is_fresh(now_ms) { self.entry.as_ref().map(|e| e.data.clone()) } else { None }
    }

    pub fn store(&mut self, data: Rc<Dataset>, now_ms: f64) {
        self.entry = Some(CacheEntry { data, fetched_at_ms: now_ms });
    }

    pub fn invalidate(&mut self) { self.entry = None; }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::validate_records;
    use crate::model::Mountain;

    fn sample() -> Rc<Dataset> {
        Rc::new(validate_records(vec![Mountain::new("a", "A", 1.0, 1.0)]).unwrap())
    }

    #[test]
    fn expires_after_ttl() {
        let mut c = DatasetCache::new(CachePolicy::ttl(1000.0));
        c.store(sample(), 5000.0);
        assert!(c.get(5999.0).is_some());
        assert!(c.get(6000.0).is_none());
        assert!(c.entry().is_some(), "expired entry is kept until replaced");
    }

    #[test]
    fn never_expire_policy_and_invalidate() {
        let mut c = DatasetCache::new(CachePolicy::never_expire());
        c.store(sample(), 0.0);
        assert!(c.is_fresh(1e12));
        c.invalidate();
        assert!(c.get(0.0).is_none());
    }

    #[test]
    fn backwards_clock_is_stale() {
        let mut c = DatasetCache::default();
        c.store(sample(), 10_000.0);
        assert!(!c.is_fresh(9_000.0));
    }

    #[test]
    fn manual_clock_advances_and_rewinds() {
        let clock = ManualClock::new(10.0);
        clock.advance(5.0);
        assert_eq!(clock.now_ms(), 15.0);
        let mut c = DatasetCache::default();
        c.store(sample(), clock.now_ms());
        clock.set(14.0);
        assert!(c.get(clock.now_ms()).is_none());
    }
}
