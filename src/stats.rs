// Per-algorithm performance counters.
//
// A caller-owned collector shared with the Ensemble via Arc, instead of
// process-wide statics. Counters are atomic, so the record path takes no
// write lock once an algorithm is registered.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Default)]
struct Counters {
    calls: AtomicU64,
    failures: AtomicU64,
    total_micros: AtomicU64,
}

/// Execution counters for every registered algorithm.
pub struct PerfStats {
    started_at: DateTime<Utc>,
    counters: RwLock<Vec<(String, Counters)>>,
}

impl PerfStats {
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            counters: RwLock::new(Vec::new()),
        }
    }

    /// Ensure a counter row exists for `name`. Registration order is the
    /// order rows appear in reports.
    pub fn register(&self, name: &str) {
        let mut counters = self
            .counters
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if !counters.iter().any(|(n, _)| n == name) {
            counters.push((name.to_string(), Counters::default()));
        }
    }

    /// Record one algorithm invocation. Names that were never registered
    /// get a row on first use.
    pub fn record(&self, name: &str, elapsed: Duration, success: bool) {
        if !self.try_record(name, elapsed, success) {
            self.register(name);
            self.try_record(name, elapsed, success);
        }
    }

    fn try_record(&self, name: &str, elapsed: Duration, success: bool) -> bool {
        let counters = self
            .counters
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        match counters.iter().find(|(n, _)| n == name) {
            Some((_, row)) => {
                row.calls.fetch_add(1, Ordering::Relaxed);
                if !success {
                    row.failures.fetch_add(1, Ordering::Relaxed);
                }
                row.total_micros
                    .fetch_add(elapsed.as_micros() as u64, Ordering::Relaxed);
                true
            }
            None => false,
        }
    }

    /// Zero every counter. Registered names stay registered.
    pub fn reset(&self) {
        let counters = self
            .counters
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        for (_, row) in counters.iter() {
            row.calls.store(0, Ordering::Relaxed);
            row.failures.store(0, Ordering::Relaxed);
            row.total_micros.store(0, Ordering::Relaxed);
        }
    }

    /// Snapshot the counters into a serializable report.
    pub fn report(&self) -> StatsReport {
        let counters = self
            .counters
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        let algorithms = counters
            .iter()
            .map(|(name, row)| {
                let calls = row.calls.load(Ordering::Relaxed);
                let total_micros = row.total_micros.load(Ordering::Relaxed);
                AlgorithmStats {
                    name: name.clone(),
                    calls,
                    failures: row.failures.load(Ordering::Relaxed),
                    total_micros,
                    avg_micros: if calls == 0 {
                        0.0
                    } else {
                        total_micros as f64 / calls as f64
                    },
                }
            })
            .collect();
        StatsReport {
            collecting_since: self.started_at,
            algorithms,
        }
    }
}

impl Default for PerfStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Counters for one algorithm at snapshot time.
#[derive(Debug, Clone, Serialize)]
pub struct AlgorithmStats {
    pub name: String,
    pub calls: u64,
    pub failures: u64,
    pub total_micros: u64,
    pub avg_micros: f64,
}

/// Full counters snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct StatsReport {
    pub collecting_since: DateTime<Utc>,
    pub algorithms: Vec<AlgorithmStats>,
}
