//! DP matrix builder.
//!
//! Fills the score matrix row-major, one row fully computed before the
//! next begins: row `i` depends only on row `i - 1` and the current row's
//! earlier columns. [`fill`] keeps the whole matrix plus a tie grid for
//! traceback; [`score_only`] keeps two rolling rows and no tie grid.

use std::mem;

use itertools::iproduct;

use crate::{
    config::OpCosts,
    equal::SymbolEq,
    matrix::{Matrix, TieFlags, TieGrid},
    mode::AlignMode,
};

/// Everything the full fill produces.
#[derive(Debug, Clone)]
pub struct DpFill {
    /// Score matrix of shape `(n1 + 1) x (n2 + 1)`; row 0 and column 0
    /// align against the empty prefix of each sequence.
    pub matrix: Matrix<i64>,
    /// Tie flags for every cell.
    pub ties: TieGrid,
    /// Designated traceback end cell: the bottom-right corner for
    /// [`AlignMode::Global`], the first row-major occurrence of the matrix
    /// maximum for [`AlignMode::Local`].
    pub end: (usize, usize),
}

impl DpFill {
    /// Optimal score: the value of the end cell.
    pub fn score(&self) -> i64 {
        self.matrix[self.end]
    }
}

/// Fill the score matrix and tie grid for `seq1` against `seq2`.
pub fn fill<T, E: SymbolEq<T>>(
    seq1: &[T],
    seq2: &[T],
    costs: &OpCosts,
    mode: AlignMode,
    eq: &E,
) -> DpFill {
    match mode {
        AlignMode::Global => fill_global(seq1, seq2, costs, eq),
        AlignMode::Local => fill_local(seq1, seq2, costs, eq),
    }
}

fn fill_global<T, E: SymbolEq<T>>(seq1: &[T], seq2: &[T], costs: &OpCosts, eq: &E) -> DpFill {
    let (n1, n2) = (seq1.len(), seq2.len());
    let mut matrix = Matrix::new(n1 + 1, n2 + 1);
    let mut ties = TieGrid::new(AlignMode::Global, n1 + 1, n2 + 1);

    // Boundary: aligning against the empty prefix is a run of deletions
    // down column 0 and insertions along row 0. The origin has no
    // predecessor and keeps no flags.
    for i in 1..=n1 {
        matrix[(i, 0)] = i as i64 * costs.delete;
        ties.set((i, 0), TieFlags::DELETE);
    }
    for j in 1..=n2 {
        matrix[(0, j)] = j as i64 * costs.insert;
        ties.set((0, j), TieFlags::INSERT);
    }

    for (i, j) in iproduct!(1..=n1, 1..=n2) {
        let t_ij = costs.pair_score(eq, &seq1[i - 1], &seq2[j - 1]);

        let insert = matrix[(i, j - 1)] + costs.insert;
        let delete = matrix[(i - 1, j)] + costs.delete;
        let subst = matrix[(i - 1, j - 1)] + t_ij;
        let best = insert.max(delete).max(subst);

        matrix[(i, j)] = best;

        let mut flags = TieFlags::empty();
        if insert == best {
            flags.set(TieFlags::INSERT);
        }
        if delete == best {
            flags.set(TieFlags::DELETE);
        }
        if subst == best {
            flags.set(TieFlags::SUBST);
        }
        ties.set((i, j), flags);
    }

    DpFill {
        matrix,
        ties,
        end: (n1, n2),
    }
}

fn fill_local<T, E: SymbolEq<T>>(seq1: &[T], seq2: &[T], costs: &OpCosts, eq: &E) -> DpFill {
    let (n1, n2) = (seq1.len(), seq2.len());
    let mut matrix: Matrix<i64> = Matrix::new(n1 + 1, n2 + 1);
    let mut ties = TieGrid::new(AlignMode::Local, n1 + 1, n2 + 1);

    // Boundary cells stay at score 0 and are valid traceback stops.
    for i in 0..=n1 {
        ties.set((i, 0), TieFlags::RESTART);
    }
    for j in 1..=n2 {
        ties.set((0, j), TieFlags::RESTART);
    }

    // Running maximum, tracked while filling; strict `>` keeps the first
    // row-major occurrence on ties.
    let mut best_cell = (0, 0);
    let mut best_val = 0i64;

    for (i, j) in iproduct!(1..=n1, 1..=n2) {
        let t_ij = costs.pair_score(eq, &seq1[i - 1], &seq2[j - 1]);

        let insert = matrix[(i, j - 1)] + costs.insert;
        let delete = matrix[(i - 1, j)] + costs.delete;
        let subst = matrix[(i - 1, j - 1)] + t_ij;
        let best = insert.max(delete).max(subst).max(0);

        matrix[(i, j)] = best;

        let mut flags = TieFlags::empty();
        if best == 0 {
            flags.set(TieFlags::RESTART);
        }
        if insert == best {
            flags.set(TieFlags::INSERT);
        }
        if delete == best {
            flags.set(TieFlags::DELETE);
        }
        if subst == best {
            flags.set(TieFlags::SUBST);
        }
        ties.set((i, j), flags);

        if best > best_val {
            best_val = best;
            best_cell = (i, j);
        }
    }

    DpFill {
        matrix,
        ties,
        end: best_cell,
    }
}

/// Optimal score without alignment reconstruction.
///
/// Keeps only the previous and current row of the score matrix, so memory
/// is `O(n2)` instead of `O(n1 * n2)`. Produces the same score as
/// [`fill`] on every input.
pub fn score_only<T, E: SymbolEq<T>>(
    seq1: &[T],
    seq2: &[T],
    costs: &OpCosts,
    mode: AlignMode,
    eq: &E,
) -> i64 {
    let n2 = seq2.len();
    let mut past_row = vec![0i64; n2 + 1];
    let mut curr_row = vec![0i64; n2 + 1];

    match mode {
        AlignMode::Global => {
            for (j, value) in past_row.iter_mut().enumerate() {
                *value = j as i64 * costs.insert;
            }
            for (i, a) in seq1.iter().enumerate() {
                curr_row[0] = (i as i64 + 1) * costs.delete;
                for j in 1..=n2 {
                    let t_ij = costs.pair_score(eq, a, &seq2[j - 1]);
                    curr_row[j] = (curr_row[j - 1] + costs.insert)
                        .max(past_row[j] + costs.delete)
                        .max(past_row[j - 1] + t_ij);
                }
                mem::swap(&mut past_row, &mut curr_row);
            }
            past_row[n2]
        }
        AlignMode::Local => {
            let mut best_val = 0i64;
            for a in seq1 {
                for j in 1..=n2 {
                    let t_ij = costs.pair_score(eq, a, &seq2[j - 1]);
                    let best = (curr_row[j - 1] + costs.insert)
                        .max(past_row[j] + costs.delete)
                        .max(past_row[j - 1] + t_ij)
                        .max(0);
                    curr_row[j] = best;
                    if best > best_val {
                        best_val = best;
                    }
                }
                mem::swap(&mut past_row, &mut curr_row);
            }
            best_val
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::equal::StructuralEq;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_global_boundary_rows() {
        let dp = fill(
            &chars("vine"),
            &chars("vin"),
            &OpCosts::default(),
            AlignMode::Global,
            &StructuralEq,
        );
        for i in 0..=4 {
            assert_eq!(dp.matrix[(i, 0)], -(i as i64));
        }
        for j in 0..=3 {
            assert_eq!(dp.matrix[(0, j)], -(j as i64));
        }
        assert_eq!(dp.end, (4, 3));
        assert_eq!(dp.score(), -1);
    }

    #[test]
    fn test_global_origin_has_no_flags() {
        let dp = fill(
            &chars("ab"),
            &chars("ab"),
            &OpCosts::default(),
            AlignMode::Global,
            &StructuralEq,
        );
        assert!(dp.ties.flags((0, 0)).is_empty());
        assert_eq!(dp.ties.flags((0, 1)), TieFlags::INSERT);
        assert_eq!(dp.ties.flags((1, 0)), TieFlags::DELETE);
    }

    #[test]
    fn test_global_records_every_tie() {
        // "ab" vs "ba" under unit costs: at (2, 2) all three candidates
        // reach -2, so all three flags must be recorded.
        let dp = fill(
            &chars("ab"),
            &chars("ba"),
            &OpCosts::default(),
            AlignMode::Global,
            &StructuralEq,
        );
        assert_eq!(dp.matrix[(2, 2)], -2);
        let flags = dp.ties.flags((2, 2));
        assert!(flags.contains(TieFlags::INSERT | TieFlags::DELETE | TieFlags::SUBST));
    }

    #[test]
    fn test_local_boundary_is_restart() {
        let costs = OpCosts::new(-1, -1, -1, 2);
        let dp = fill(
            &chars("ab"),
            &chars("ba"),
            &costs,
            AlignMode::Local,
            &StructuralEq,
        );
        for i in 0..=2 {
            assert!(dp.ties.flags((i, 0)).contains(TieFlags::RESTART));
        }
        for j in 0..=2 {
            assert!(dp.ties.flags((0, j)).contains(TieFlags::RESTART));
        }
    }

    #[test]
    fn test_local_maximum_first_occurrence_wins() {
        // "a" vs "aa" ties the maximum 2 at (1, 1) and (1, 2); the
        // row-major scan keeps (1, 1).
        let costs = OpCosts::new(-1, -1, -1, 2);
        let dp = fill(
            &chars("a"),
            &chars("aa"),
            &costs,
            AlignMode::Local,
            &StructuralEq,
        );
        assert_eq!(dp.score(), 2);
        assert_eq!(dp.end, (1, 1));
    }

    #[test]
    fn test_local_all_mismatch_scores_zero() {
        let dp = fill(
            &chars("abc"),
            &chars("xyz"),
            &OpCosts::default(),
            AlignMode::Local,
            &StructuralEq,
        );
        assert_eq!(dp.score(), 0);
        assert_eq!(dp.end, (0, 0));
    }

    #[test]
    fn test_score_only_handles_empty_sides() {
        let costs = OpCosts::default();
        assert_eq!(
            score_only(&chars("vine"), &[], &costs, AlignMode::Global, &StructuralEq),
            -4
        );
        assert_eq!(
            score_only(&[], &chars("vin"), &costs, AlignMode::Global, &StructuralEq),
            -3
        );
        assert_eq!(
            score_only::<char, _>(&[], &[], &costs, AlignMode::Local, &StructuralEq),
            0
        );
    }
}
