use std::env;

use anyhow::{Context, Result};

const DEFAULT_THRESHOLD: f64 = 0.5;
const DEFAULT_MAX_INPUT_CHARS: usize = 10_000;

/// Central configuration loaded from environment variables.
///
/// A .env file is picked up automatically at startup via dotenvy before
/// this runs. Invalid values fail at load time, not mid-comparison.
pub struct Config {
    /// Ensemble score at or above which a pair is reported as likely
    /// plagiarism (MIMEO_THRESHOLD, default 0.5).
    pub threshold: f64,
    /// Per-text ceiling in code points, enforced by the CLI and the HTTP
    /// API before the core runs (MIMEO_MAX_INPUT_CHARS, default 10000).
    /// The Levenshtein table is quadratic in input length; the core itself
    /// never bounds its input.
    pub max_input_chars: usize,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let threshold = match env::var("MIMEO_THRESHOLD") {
            Ok(raw) => raw
                .parse::<f64>()
                .with_context(|| format!("MIMEO_THRESHOLD is not a number: {raw:?}"))?,
            Err(_) => DEFAULT_THRESHOLD,
        };
        anyhow::ensure!(
            (0.0..=1.0).contains(&threshold),
            "MIMEO_THRESHOLD must lie in [0.0, 1.0], got {threshold}"
        );

        let max_input_chars = match env::var("MIMEO_MAX_INPUT_CHARS") {
            Ok(raw) => raw
                .parse::<usize>()
                .with_context(|| format!("MIMEO_MAX_INPUT_CHARS is not an integer: {raw:?}"))?,
            Err(_) => DEFAULT_MAX_INPUT_CHARS,
        };

        Ok(Self {
            threshold,
            max_input_chars,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            max_input_chars: DEFAULT_MAX_INPUT_CHARS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = Config::default();
        assert!((config.threshold - 0.5).abs() < 1e-9);
        assert_eq!(config.max_input_chars, 10_000);
    }
}
