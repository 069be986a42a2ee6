// Algorithm registry and ensemble scoring.
//
// Holds the registered algorithms in a fixed order, dispatches by name,
// and averages their scores. An algorithm that errors during ensemble
// scoring is logged and dropped from the average; the comparison itself
// never aborts as long as one algorithm succeeds.

use std::sync::Arc;
use std::time::Instant;

use tracing::warn;

use crate::errors::SimilarityError;
use crate::stats::PerfStats;

use super::cosine::CosineSimilarity;
use super::jaccard::JaccardSimilarity;
use super::levenshtein::LevenshteinSimilarity;
use super::{is_blank, SimilarityAlgorithm};

/// Registry of similarity algorithms plus the ensemble policy.
///
/// One instance can serve concurrent callers: scoring touches only
/// call-local state and the stats collector is atomic.
pub struct Ensemble {
    algorithms: Vec<Box<dyn SimilarityAlgorithm>>,
    stats: Arc<PerfStats>,
}

impl Ensemble {
    /// Build the standard registry: Cosine, Levenshtein, Jaccard.
    ///
    /// The stats collector is caller-owned; keep a clone of the Arc to
    /// read the counters afterwards.
    pub fn new(stats: Arc<PerfStats>) -> Self {
        Self::with_algorithms(
            vec![
                Box::new(CosineSimilarity),
                Box::new(LevenshteinSimilarity),
                Box::new(JaccardSimilarity),
            ],
            stats,
        )
    }

    /// Build a registry from an explicit algorithm list.
    pub fn with_algorithms(
        algorithms: Vec<Box<dyn SimilarityAlgorithm>>,
        stats: Arc<PerfStats>,
    ) -> Self {
        for algorithm in &algorithms {
            stats.register(algorithm.name());
        }
        Self { algorithms, stats }
    }

    /// Score a text pair with every registered algorithm and average.
    ///
    /// Two blank texts score 0.0 and an identical pair 1.0 before any
    /// algorithm runs. Otherwise each algorithm contributes its score; one
    /// that errors is skipped and the mean is taken over the rest. If every
    /// algorithm fails the result is 0.0.
    pub fn score_all(&self, text1: &str, text2: &str) -> f64 {
        if is_blank(text1) && is_blank(text2) {
            return 0.0;
        }
        if text1 == text2 {
            return 1.0;
        }

        let mut total = 0.0;
        let mut succeeded = 0u32;
        for algorithm in &self.algorithms {
            match self.run_one(algorithm.as_ref(), text1, text2) {
                Ok(score) => {
                    total += score;
                    succeeded += 1;
                }
                Err(error) => {
                    warn!(
                        algorithm = algorithm.name(),
                        %error,
                        "algorithm failed, dropped from the ensemble average"
                    );
                }
            }
        }

        if succeeded == 0 {
            return 0.0;
        }
        total / f64::from(succeeded)
    }

    /// Score with a single named algorithm.
    ///
    /// The algorithm's own edge-case policy applies, not the ensemble's.
    /// An unregistered name is a caller error and fails loudly.
    pub fn score_with(
        &self,
        text1: &str,
        text2: &str,
        name: &str,
    ) -> Result<f64, SimilarityError> {
        let algorithm = self
            .algorithms
            .iter()
            .find(|a| a.name() == name)
            .ok_or_else(|| SimilarityError::AlgorithmNotFound(name.to_string()))?;
        self.run_one(algorithm.as_ref(), text1, text2)
            .map_err(SimilarityError::Execution)
    }

    /// Registered algorithm names, in registration order.
    pub fn algorithm_names(&self) -> Vec<&'static str> {
        self.algorithms.iter().map(|a| a.name()).collect()
    }

    /// The stats collector this ensemble records into.
    pub fn stats(&self) -> &Arc<PerfStats> {
        &self.stats
    }

    fn run_one(
        &self,
        algorithm: &dyn SimilarityAlgorithm,
        text1: &str,
        text2: &str,
    ) -> anyhow::Result<f64> {
        let start = Instant::now();
        let result = algorithm.score(text1, text2);
        self.stats
            .record(algorithm.name(), start.elapsed(), result.is_ok());
        result
    }
}
