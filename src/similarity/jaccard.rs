// Character-set overlap metric.
//
// Reduces each normalized text to the set of code points it contains and
// scores |A ∩ B| / |A ∪ B|. No tokenization and no case folding, so "AB"
// vs "ab" is a complete miss while "aabb" vs "ab" is a perfect match.

use std::collections::HashSet;

use anyhow::Result;

use super::text::normalize;
use super::{is_blank, SimilarityAlgorithm};

/// Jaccard similarity over character sets.
pub struct JaccardSimilarity;

impl SimilarityAlgorithm for JaccardSimilarity {
    fn name(&self) -> &'static str {
        "Jaccard Similarity"
    }

    fn score(&self, text1: &str, text2: &str) -> Result<f64> {
        // Two blank texts count as identical here (unlike cosine).
        if is_blank(text1) && is_blank(text2) {
            return Ok(1.0);
        }
        if is_blank(text1) || is_blank(text2) {
            return Ok(0.0);
        }
        if text1 == text2 {
            return Ok(1.0);
        }

        let set1: HashSet<char> = normalize(text1).chars().collect();
        let set2: HashSet<char> = normalize(text2).chars().collect();

        let union = set1.union(&set2).count();
        if union == 0 {
            // Normalization emptied both sides (e.g. two all-punctuation
            // texts). Score them as identical rather than dividing by zero.
            return Ok(1.0);
        }
        let intersection = set1.intersection(&set2).count();

        Ok(intersection as f64 / union as f64)
    }
}
