// Normalized Levenshtein edit distance.
//
// The only algorithm that scores the raw strings: case, punctuation, and
// word order all count. Distance comes from the classic full-table DP
// recurrence with unit costs. The quadratic table is the dominant cost of
// a comparison, which is why the adapters cap input length upstream.

use anyhow::Result;

use super::{is_blank, SimilarityAlgorithm};

/// Score floor for near-identical strings: length difference at most one
/// and edit distance at most two score at least 0.6.
const NEAR_MATCH_FLOOR: f64 = 0.6;
const NEAR_MATCH_MAX_DISTANCE: usize = 2;
const NEAR_MATCH_MAX_LENGTH_DIFF: usize = 1;

/// Levenshtein similarity over raw code points.
pub struct LevenshteinSimilarity;

impl SimilarityAlgorithm for LevenshteinSimilarity {
    fn name(&self) -> &'static str {
        "Levenshtein Distance"
    }

    fn score(&self, text1: &str, text2: &str) -> Result<f64> {
        if is_blank(text1) && is_blank(text2) {
            return Ok(1.0);
        }
        if is_blank(text1) || is_blank(text2) {
            return Ok(0.0);
        }
        if text1 == text2 {
            return Ok(1.0);
        }

        let chars1: Vec<char> = text1.chars().collect();
        let chars2: Vec<char> = text2.chars().collect();

        let distance = edit_distance(&chars1, &chars2);
        let max_len = chars1.len().max(chars2.len());

        let mut similarity = 1.0 - distance as f64 / max_len as f64;

        // A single typo in a short string would otherwise crater the score.
        if chars1.len().abs_diff(chars2.len()) <= NEAR_MATCH_MAX_LENGTH_DIFF
            && distance <= NEAR_MATCH_MAX_DISTANCE
        {
            similarity = similarity.max(NEAR_MATCH_FLOOR);
        }

        Ok(similarity)
    }
}

/// Classic full-table edit distance with unit insert, delete, and
/// substitute costs.
///
/// `table[i][j]` is the distance between the first `i` code points of `a`
/// and the first `j` of `b`; the table is stored flat, row-major. Runs in
/// O(len1 * len2) time and space.
pub fn edit_distance(a: &[char], b: &[char]) -> usize {
    let (m, n) = (a.len(), b.len());
    let width = n + 1;
    let mut table = vec![0usize; (m + 1) * width];

    for i in 0..=m {
        table[i * width] = i;
    }
    for j in 0..=n {
        table[j] = j;
    }

    for i in 1..=m {
        for j in 1..=n {
            table[i * width + j] = if a[i - 1] == b[j - 1] {
                table[(i - 1) * width + (j - 1)]
            } else {
                1 + table[(i - 1) * width + j]
                    .min(table[i * width + (j - 1)])
                    .min(table[(i - 1) * width + (j - 1)])
            };
        }
    }

    table[m * width + n]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(a: &str, b: &str) -> f64 {
        LevenshteinSimilarity.score(a, b).unwrap()
    }

    fn distance(a: &str, b: &str) -> usize {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        edit_distance(&a, &b)
    }

    #[test]
    fn classic_distances() {
        assert_eq!(distance("kitten", "sitting"), 3);
        assert_eq!(distance("saturday", "sunday"), 3);
        assert_eq!(distance("cat", "hat"), 1);
        assert_eq!(distance("cat", "cats"), 1);
        assert_eq!(distance("cats", "cat"), 1);
    }

    #[test]
    fn distance_to_self_is_zero() {
        assert_eq!(distance("", ""), 0);
        assert_eq!(distance("abc", "abc"), 0);
        assert_eq!(distance("你好世界", "你好世界"), 0);
    }

    #[test]
    fn distance_to_empty_is_length() {
        assert_eq!(distance("abc", ""), 3);
        assert_eq!(distance("", "xyz"), 3);
    }

    #[test]
    fn trailing_punctuation_barely_matters() {
        // Distance 1 over max length 12.
        let s = score("Hello World", "Hello World!");
        assert!((s - 11.0 / 12.0).abs() < 1e-9, "got {s}");
    }

    #[test]
    fn near_match_floor_applies() {
        // Equal length, distance 2: base score 0.5 lifts to the floor.
        assert_eq!(score("abcd", "abef"), 0.6);
    }

    #[test]
    fn near_match_floor_needs_close_lengths() {
        // Distance 2 but lengths differ by 2: no floor, base score stands.
        let s = score("abcd", "abcdef");
        assert!((s - 4.0 / 6.0).abs() < 1e-9, "got {s}");
    }

    #[test]
    fn cjk_substitutions() {
        // Two ideographs swapped out of four, lifted to the floor.
        assert_eq!(score("你好世界", "你好地球"), 0.6);
    }

    #[test]
    fn blank_pair_is_identical() {
        assert_eq!(score("", ""), 1.0);
        assert_eq!(score(" \t ", "\n"), 1.0);
    }

    #[test]
    fn one_blank_side_scores_zero() {
        assert_eq!(score("", "text"), 0.0);
        assert_eq!(score("text", ""), 0.0);
    }

    #[test]
    fn symmetric() {
        assert_eq!(score("first text", "second text"), score("second text", "first text"));
    }

    #[test]
    fn case_counts() {
        // 5 substitutions over length 5, equal lengths but distance > 2.
        assert_eq!(score("HELLO", "hello"), 0.0);
    }
}
