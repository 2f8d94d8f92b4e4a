//! Failure modes of the alignment engine.

use thiserror::Error;

/// Errors surfaced by the alignment engine.
///
/// All failures are synchronous, local-call failures. Nothing is retried and
/// no partial results are produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlignError {
    /// Cost model construction finished without one of the four weights.
    #[error("cost model is missing the `{0}` weight")]
    MissingCost(&'static str),
    /// Grid dimensions disagree with the matrix or sequences they are used with.
    #[error("grid shape {found:?} does not match expected shape {expected:?}")]
    ShapeMismatch {
        /// Shape required by the other input.
        expected: (usize, usize),
        /// Shape actually supplied.
        found: (usize, usize),
    },
    /// Alignment path is not a unit-step walk inside the grid.
    #[error("invalid alignment path: {0}")]
    InvalidPath(String),
}
