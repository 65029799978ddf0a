//! Lookup metrics.
//!
//! Each translator counts how its dictionary lookups were resolved, which
//! shows how much of the output actually came from translations.

use crate::i18n::dictionary::Lookup;
use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Lookup counters of one translator.
#[derive(Debug, Default)]
pub struct LookupMetrics {
    /// Lookups answered in the requested language
    translated: AtomicUsize,

    /// Lookups that fell back to the canonical language
    fallbacks: AtomicUsize,

    /// Lookups of strings that are not dictionary keys
    pass_throughs: AtomicUsize,

    /// Arguments rendered as a positional diagnostic
    unknown_args: AtomicUsize,
}

impl LookupMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of one lookup.
    pub fn record(&self, lookup: Lookup<'_>) {
        let counter = match lookup {
            Lookup::Translated(_) => &self.translated,
            Lookup::Fallback(_) => &self.fallbacks,
            Lookup::PassThrough(_) => &self.pass_throughs,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Record an argument that had no rendering rule.
    pub fn record_unknown_arg(&self) {
        self.unknown_args.fetch_add(1, Ordering::Relaxed);
    }

    pub fn translated(&self) -> usize {
        self.translated.load(Ordering::Relaxed)
    }

    pub fn fallbacks(&self) -> usize {
        self.fallbacks.load(Ordering::Relaxed)
    }

    pub fn pass_throughs(&self) -> usize {
        self.pass_throughs.load(Ordering::Relaxed)
    }

    pub fn unknown_args(&self) -> usize {
        self.unknown_args.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let translated = self.translated();
        let fallbacks = self.fallbacks();
        let pass_throughs = self.pass_throughs();

        let known = translated + fallbacks;
        let coverage = if known > 0 {
            (translated as f64 / known as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            translated,
            fallbacks,
            pass_throughs,
            unknown_args: self.unknown_args(),
            coverage,
        }
    }

    /// Reset all counters to zero (useful for testing).
    #[cfg(test)]
    pub fn reset(&self) {
        self.translated.store(0, Ordering::Relaxed);
        self.fallbacks.store(0, Ordering::Relaxed);
        self.pass_throughs.store(0, Ordering::Relaxed);
        self.unknown_args.store(0, Ordering::Relaxed);
    }
}

/// Snapshot of a translator's lookup counters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsReport {
    pub translated: usize,
    pub fallbacks: usize,
    pub pass_throughs: usize,
    pub unknown_args: usize,

    /// Share of dictionary-key lookups answered in the requested language,
    /// as a percentage (0-100)
    pub coverage: f64,
}
