// Error types for the scoring core.

use thiserror::Error;

/// Errors surfaced by name-based algorithm dispatch.
#[derive(Debug, Error)]
pub enum SimilarityError {
    /// The requested name has no registered match. A caller programming
    /// error, propagated rather than recovered.
    #[error("no algorithm registered under the name {0:?}")]
    AlgorithmNotFound(String),

    /// The selected algorithm itself failed.
    #[error(transparent)]
    Execution(#[from] anyhow::Error),
}
