//! Views over a computed traceback: the rendered alignment and the
//! per-cell direction table.

use itertools::Itertools;

use crate::{
    cigar::EditOp,
    equal::SymbolEq,
    error::AlignError,
    matrix::{TieFlags, TieGrid},
};

/// A rendered pairwise alignment.
///
/// The three parallel vectors have equal length, one entry per output
/// column, ordered left-to-right in the original sequences' orientation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aligned<T> {
    /// First sequence with a gap (`None`) wherever a symbol of the second
    /// sequence was inserted.
    pub seq1: Vec<Option<T>>,
    /// Second sequence with a gap wherever a symbol of the first sequence
    /// was deleted.
    pub seq2: Vec<Option<T>>,
    /// Edit action for every output column.
    pub actions: Vec<EditOp>,
    /// Path start cell: the aligned region covers `seq1[start.0..end.0]`
    /// and `seq2[start.1..end.1]`.
    pub start: (usize, usize),
    /// Path end cell.
    pub end: (usize, usize),
}

impl<T: Clone> Aligned<T> {
    /// Symbols of the first sequence consumed by the alignment, gaps
    /// removed.
    pub fn consumed_seq1(&self) -> Vec<T> {
        self.seq1.iter().flatten().cloned().collect()
    }

    /// Symbols of the second sequence consumed by the alignment, gaps
    /// removed.
    pub fn consumed_seq2(&self) -> Vec<T> {
        self.seq2.iter().flatten().cloned().collect()
    }
}

impl<T> Aligned<T> {
    /// Number of output columns.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// True for the degenerate single-cell path.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

/// Render a traceback path into a gapped alignment.
///
/// The path is consumed oldest-to-newest (start cell to end cell); each
/// consecutive pair of cells emits one output column:
/// * diagonal step: both symbols, action [`EditOp::Match`] when the
///   equality capability holds, else [`EditOp::Mismatch`];
/// * column advances, row unchanged: gap in `seq1`, action
///   [`EditOp::Insert`];
/// * row advances, column unchanged: gap in `seq2`, action
///   [`EditOp::Delete`].
///
/// # Errors
/// [`AlignError::InvalidPath`] when the path is empty, takes a non-unit
/// step, or indexes outside the sequences.
pub fn align_path<T: Clone, E: SymbolEq<T>>(
    path: &[(usize, usize)],
    seq1: &[T],
    seq2: &[T],
    eq: &E,
) -> Result<Aligned<T>, AlignError> {
    let (&end, &start) = match (path.first(), path.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(AlignError::InvalidPath("empty path".into())),
    };

    let mut aligned1 = Vec::with_capacity(path.len() - 1);
    let mut aligned2 = Vec::with_capacity(path.len() - 1);
    let mut actions = Vec::with_capacity(path.len() - 1);

    // The path is recorded end cell first; walk it in reverse so columns
    // come out in sequence order.
    for (&(i0, j0), &(i1, j1)) in path.iter().rev().tuple_windows() {
        let step_err = || {
            AlignError::InvalidPath(format!(
                "non-unit step ({i0}, {j0}) -> ({i1}, {j1})"
            ))
        };
        let range_err = || {
            AlignError::InvalidPath(format!(
                "cell ({i1}, {j1}) does not address both sequences"
            ))
        };
        if i1 == i0 + 1 && j1 == j0 + 1 {
            let a = seq1.get(i1 - 1).ok_or_else(range_err)?;
            let b = seq2.get(j1 - 1).ok_or_else(range_err)?;
            actions.push(if eq.are_equal(a, b) {
                EditOp::Match
            } else {
                EditOp::Mismatch
            });
            aligned1.push(Some(a.clone()));
            aligned2.push(Some(b.clone()));
        } else if i1 == i0 && j1 == j0 + 1 {
            let b = seq2.get(j1 - 1).ok_or_else(range_err)?;
            actions.push(EditOp::Insert);
            aligned1.push(None);
            aligned2.push(Some(b.clone()));
        } else if i1 == i0 + 1 && j1 == j0 {
            let a = seq1.get(i1 - 1).ok_or_else(range_err)?;
            actions.push(EditOp::Delete);
            aligned1.push(Some(a.clone()));
            aligned2.push(None);
        } else {
            return Err(step_err());
        }
    }

    Ok(Aligned {
        seq1: aligned1,
        seq2: aligned2,
        actions,
        start,
        end,
    })
}

/// Render the tie grid as a table of per-cell direction strings.
///
/// Each cell concatenates one glyph per active flag in a fixed order:
/// insert `⇐`, delete `⇑`, substitute/exact `⇖`, then the restart marker
/// `∅` (local grids only). Cells with no flags render as the empty string.
/// Purely a diagnostic view; nothing else consumes it.
pub fn backtrace_table(ties: &TieGrid) -> Vec<Vec<String>> {
    let (rows, cols) = ties.shape();
    (0..rows)
        .map(|i| {
            (0..cols)
                .map(|j| {
                    let flags = ties.flags((i, j));
                    let mut directions = String::new();
                    if flags.contains(TieFlags::INSERT) {
                        directions.push('⇐');
                    }
                    if flags.contains(TieFlags::DELETE) {
                        directions.push('⇑');
                    }
                    if flags.contains(TieFlags::SUBST) {
                        directions.push('⇖');
                    }
                    if flags.contains(TieFlags::RESTART) {
                        directions.push('∅');
                    }
                    directions
                })
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{config::OpCosts, equal::StructuralEq, fill, mode::AlignMode, trace};

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_align_path_single_cell_is_empty() {
        let aligned =
            align_path(&[(0, 0)], &chars("ab"), &chars("ab"), &StructuralEq).unwrap();
        assert!(aligned.is_empty());
        assert_eq!(aligned.start, (0, 0));
        assert_eq!(aligned.end, (0, 0));
    }

    #[test]
    fn test_align_path_rejects_empty_path() {
        let err = align_path::<char, _>(&[], &[], &[], &StructuralEq).unwrap_err();
        assert!(matches!(err, AlignError::InvalidPath(_)));
    }

    #[test]
    fn test_align_path_rejects_jumps() {
        let err = align_path(
            &[(2, 2), (0, 0)],
            &chars("ab"),
            &chars("ab"),
            &StructuralEq,
        )
        .unwrap_err();
        assert!(matches!(err, AlignError::InvalidPath(_)));
    }

    #[test]
    fn test_columns_follow_sequence_orientation() {
        let s1 = chars("vine");
        let s2 = chars("vin");
        let dp = fill::fill(&s1, &s2, &OpCosts::default(), AlignMode::Global, &StructuralEq);
        let path = trace::traceback(&dp).unwrap();
        let aligned = align_path(&path, &s1, &s2, &StructuralEq).unwrap();
        assert_eq!(aligned.len(), 4);
        assert_eq!(aligned.consumed_seq1(), s1);
        assert_eq!(aligned.consumed_seq2(), s2);
        assert_eq!(aligned.seq2[3], None);
    }

    #[test]
    fn test_multi_flag_cell_renders_every_glyph() {
        let dp = fill::fill(
            &chars("ab"),
            &chars("ba"),
            &OpCosts::default(),
            AlignMode::Global,
            &StructuralEq,
        );
        let table = backtrace_table(&dp.ties);
        // (2, 2) ties all three candidates under unit costs.
        assert_eq!(table[2][2], "⇐⇑⇖");
        assert_eq!(table[0][0], "");
    }
}
