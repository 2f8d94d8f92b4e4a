//! Top-level alignment entry points and result type.

use crate::{
    cigar::{self, CigarFormat},
    config::AlignConfig,
    equal::{StructuralEq, SymbolEq},
    error::AlignError,
    fill,
    render::{self, Aligned},
    task::AlignTask,
    trace,
};

/// Result of one alignment computation.
///
/// `score` is always populated; `path` and `aligned` only for
/// [`AlignTask::Path`]. Every field is an owned value; nothing is shared
/// with or retained by the engine after the call returns.
#[derive(Debug, Clone)]
pub struct Alignment<T> {
    /// Optimal score under the configured costs: the bottom-right corner
    /// of the score matrix for [`AlignMode::Global`](crate::mode::AlignMode::Global),
    /// the matrix maximum for [`AlignMode::Local`](crate::mode::AlignMode::Local).
    pub score: i64,
    /// Traceback path from the end cell to the start cell.
    pub path: Option<Vec<(usize, usize)>>,
    /// Rendered alignment: gapped rows plus per-column actions.
    pub aligned: Option<Aligned<T>>,
}

impl<T: Clone + PartialEq> Alignment<T> {
    /// Align two sequences under structural symbol equality.
    ///
    /// ### Example
    /// ```
    /// use rs_seqalign::{align::Alignment, config::AlignConfig, task::AlignTask};
    ///
    /// let seq1: Vec<char> = "vine".chars().collect();
    /// let seq2: Vec<char> = "vin".chars().collect();
    /// let config = AlignConfig {
    ///     task: AlignTask::Path,
    ///     ..AlignConfig::default()
    /// };
    /// let result = Alignment::run(config, &seq1, &seq2).unwrap();
    /// assert_eq!(result.score, -1);
    /// ```
    pub fn run(config: AlignConfig, seq1: &[T], seq2: &[T]) -> Result<Self, AlignError> {
        Self::run_with(config, seq1, seq2, &StructuralEq)
    }
}

impl<T: Clone> Alignment<T> {
    /// Align two sequences under an injected equality capability.
    ///
    /// The capability decides exact-match vs substitution both while
    /// scoring and when labelling rendered columns.
    pub fn run_with<E: SymbolEq<T>>(
        config: AlignConfig,
        seq1: &[T],
        seq2: &[T],
        eq: &E,
    ) -> Result<Self, AlignError> {
        match config.task {
            AlignTask::Score => Ok(Self {
                score: fill::score_only(seq1, seq2, &config.costs, config.mode, eq),
                path: None,
                aligned: None,
            }),
            AlignTask::Path => {
                let dp = fill::fill(seq1, seq2, &config.costs, config.mode, eq);
                let path = trace::traceback(&dp)?;
                let aligned = render::align_path(&path, seq1, seq2, eq)?;
                Ok(Self {
                    score: dp.score(),
                    path: Some(path),
                    aligned: Some(aligned),
                })
            }
        }
    }

    /// CIGAR string of the rendered alignment, if one was computed.
    pub fn as_cigar(&self, format: CigarFormat) -> Option<String> {
        self.aligned
            .as_ref()
            .map(|aligned| cigar::cigar_string(&aligned.actions, format))
    }
}
