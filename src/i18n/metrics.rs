//! Translation lookup metrics.
//!
//! Counts how often the registry found a translation and how often it fell
//! back to the key itself. Counters are relaxed atomics, so recording from
//! concurrent `resolve` calls needs no lock.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Lookup counters owned by a `TranslationRegistry`.
#[derive(Debug, Default)]
pub struct TranslationMetrics {
    /// Number of resolve calls answered by a provider
    hits: AtomicUsize,

    /// Number of resolve calls that returned the key unchanged
    fallbacks: AtomicUsize,
}

impl TranslationMetrics {
    /// Create a zeroed set of counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a lookup answered by a provider.
    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a lookup that degraded to the identity fallback.
    pub fn record_fallback(&self) {
        self.fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    /// Number of resolve calls, always `hits + fallbacks`.
    pub fn lookups(&self) -> usize {
        self.hits() + self.fallbacks()
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::Relaxed)
    }

    pub fn fallbacks(&self) -> usize {
        self.fallbacks.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let hits = self.hits();
        let fallbacks = self.fallbacks();
        let lookups = hits + fallbacks;
        let hit_rate = if lookups > 0 {
            (hits as f64 / lookups as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            lookups,
            hits,
            fallbacks,
            hit_rate,
        }
    }

    /// Reset all counters to zero.
    #[cfg(test)]
    pub fn reset(&self) {
        self.hits.store(0, Ordering::Relaxed);
        self.fallbacks.store(0, Ordering::Relaxed);
    }
}

/// Snapshot of the lookup counters.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    /// Number of resolve calls
    pub lookups: usize,

    /// Number of translated results
    pub hits: usize,

    /// Number of identity fallbacks
    pub fallbacks: usize,

    /// Hit rate as a percentage (0-100)
    pub hit_rate: f64,
}
