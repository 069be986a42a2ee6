// Similarity scoring core.
//
// Three independent metrics over a shared normalization layer, combined
// by an averaging ensemble:
//
//   Jaccard      character-set overlap
//   Cosine       term-frequency vectors over a shared vocabulary
//   Levenshtein  normalized edit distance on the raw strings
//
// Every metric maps a pair of texts into [0.0, 1.0]. Blank input is valid
// and has a per-algorithm score policy (see each module), never an error.

pub mod cosine;
pub mod ensemble;
pub mod jaccard;
pub mod levenshtein;
pub mod text;

pub use cosine::CosineSimilarity;
pub use ensemble::Ensemble;
pub use jaccard::JaccardSimilarity;
pub use levenshtein::{edit_distance, LevenshteinSimilarity};

use anyhow::Result;

/// A pairwise text similarity metric.
///
/// Implementations hold no per-call state, so a single instance is safe to
/// invoke from concurrent callers.
pub trait SimilarityAlgorithm: Send + Sync {
    /// Stable display name, also the key for name-based dispatch. Unique
    /// within a registry.
    fn name(&self) -> &'static str;

    /// Score two texts into [0.0, 1.0]. An error here is treated by the
    /// ensemble as "skip this algorithm", so implementations fail only on
    /// genuine internal problems, not on odd input.
    fn score(&self, text1: &str, text2: &str) -> Result<f64>;
}

/// Empty or whitespace-only counts as blank. Adapters map absent input
/// fields to the empty string before the core sees them.
pub(crate) fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}
