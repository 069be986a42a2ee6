// Term-frequency cosine similarity.
//
// Builds term-frequency vectors over the union vocabulary of both texts
// and scores the normalized dot product. Frequencies are counted from the
// token occurrence stream, not the deduplicated token set, so a word
// repeated ten times weighs more than a word used once.

use std::collections::{HashMap, HashSet};

use anyhow::Result;

use super::text::{normalize, token_stream, tokenize};
use super::{is_blank, SimilarityAlgorithm};

/// Cosine similarity over term-frequency vectors.
pub struct CosineSimilarity;

impl SimilarityAlgorithm for CosineSimilarity {
    fn name(&self) -> &'static str {
        "Cosine Similarity"
    }

    fn score(&self, text1: &str, text2: &str) -> Result<f64> {
        // A blank pair scores 0.0 here, not 1.0 as in Jaccard: an empty
        // document has no direction in term space to compare against.
        if is_blank(text1) || is_blank(text2) {
            return Ok(0.0);
        }
        if text1 == text2 {
            return Ok(1.0);
        }

        let normalized1 = normalize(text1);
        let normalized2 = normalize(text2);

        let stream1 = token_stream(&normalized1);
        let stream2 = token_stream(&normalized2);

        // Shared vocabulary: every token either text produces. Both
        // frequency vectors are defined over this same key set.
        let mut vocabulary = tokenize(&normalized1);
        vocabulary.extend(tokenize(&normalized2));

        let vector1 = term_frequencies(&stream1, &vocabulary);
        let vector2 = term_frequencies(&stream2, &vocabulary);

        let mut dot = 0.0_f64;
        let mut norm1 = 0.0_f64;
        let mut norm2 = 0.0_f64;
        for term in &vocabulary {
            let f1 = vector1[term.as_str()] as f64;
            let f2 = vector2[term.as_str()] as f64;
            dot += f1 * f2;
            norm1 += f1 * f1;
            norm2 += f2 * f2;
        }

        if norm1 == 0.0 || norm2 == 0.0 {
            return Ok(0.0);
        }

        // sqrt of the product, not the product of sqrts: identical vectors
        // then score exactly 1.0 instead of one rounding step below it.
        Ok((dot / (norm1 * norm2).sqrt()).min(1.0))
    }
}

/// Count how often each vocabulary term occurs in one text's token stream.
///
/// Every vocabulary term gets an entry, zero-filled when absent.
fn term_frequencies<'a>(
    stream: &[String],
    vocabulary: &'a HashSet<String>,
) -> HashMap<&'a str, u64> {
    let mut frequencies: HashMap<&str, u64> =
        vocabulary.iter().map(|term| (term.as_str(), 0)).collect();
    for token in stream {
        if let Some(count) = frequencies.get_mut(token.as_str()) {
            *count += 1;
        }
    }
    frequencies
}
