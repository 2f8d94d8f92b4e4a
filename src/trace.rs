//! Traceback: walk the tie grid from the end cell back to a stop cell.

use crate::{error::AlignError, fill::DpFill, matrix::TieFlags, mode::AlignMode};

/// Reconstruct one optimal alignment path from a filled matrix.
///
/// The path starts at the fill's designated end cell and ends at the stop
/// cell; consecutive cells differ by exactly one diagonal, up, or left
/// step. Several paths may be optimal; ties are broken with a fixed
/// priority so the output is deterministic:
///
/// * [`AlignMode::Global`]: diagonal, then up, then left; the walk ends at
///   the origin `(0, 0)`.
/// * [`AlignMode::Local`]: left, then up, then diagonal; the walk ends at
///   the first cell carrying the restart flag, checked before stepping.
///
/// The two orders differ deliberately: they reproduce the historically
/// observed alignments, and rendered output is sensitive to the order.
///
/// # Errors
/// [`AlignError::ShapeMismatch`] when the tie grid and score matrix
/// disagree in shape, [`AlignError::InvalidPath`] when the end cell lies
/// outside the grid or the walk gets stuck on a cell with no usable flag.
pub fn traceback(dp: &DpFill) -> Result<Vec<(usize, usize)>, AlignError> {
    if dp.ties.shape() != dp.matrix.shape() {
        return Err(AlignError::ShapeMismatch {
            expected: dp.matrix.shape(),
            found: dp.ties.shape(),
        });
    }
    let (rows, cols) = dp.matrix.shape();
    let (mut i, mut j) = dp.end;
    if i >= rows || j >= cols {
        return Err(AlignError::InvalidPath(format!(
            "end cell ({i}, {j}) outside {rows}x{cols} grid"
        )));
    }

    let mut path = vec![(i, j)];
    match dp.ties.mode() {
        AlignMode::Global => {
            while (i, j) != (0, 0) {
                let flags = dp.ties.flags((i, j));
                if flags.contains(TieFlags::SUBST) && i > 0 && j > 0 {
                    i -= 1;
                    j -= 1;
                } else if flags.contains(TieFlags::DELETE) && i > 0 {
                    i -= 1;
                } else if flags.contains(TieFlags::INSERT) && j > 0 {
                    j -= 1;
                } else {
                    return Err(AlignError::InvalidPath(format!(
                        "walk stuck at cell ({i}, {j})"
                    )));
                }
                path.push((i, j));
            }
        }
        AlignMode::Local => {
            loop {
                let flags = dp.ties.flags((i, j));
                if flags.contains(TieFlags::RESTART) {
                    break;
                }
                if flags.contains(TieFlags::INSERT) && j > 0 {
                    j -= 1;
                } else if flags.contains(TieFlags::DELETE) && i > 0 {
                    i -= 1;
                } else if flags.contains(TieFlags::SUBST) && i > 0 && j > 0 {
                    i -= 1;
                    j -= 1;
                } else {
                    return Err(AlignError::InvalidPath(format!(
                        "walk stuck at cell ({i}, {j})"
                    )));
                }
                path.push((i, j));
            }
        }
    }

    Ok(path)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{config::OpCosts, equal::StructuralEq, fill};

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn unit_steps(path: &[(usize, usize)]) -> bool {
        path.windows(2).all(|w| {
            let (di, dj) = (
                w[0].0 as isize - w[1].0 as isize,
                w[0].1 as isize - w[1].1 as isize,
            );
            matches!((di, dj), (1, 0) | (0, 1) | (1, 1))
        })
    }

    #[test]
    fn test_global_path_spans_both_sequences() {
        let s1 = chars("vine");
        let s2 = chars("vin");
        let dp = fill::fill(&s1, &s2, &OpCosts::default(), AlignMode::Global, &StructuralEq);
        let path = traceback(&dp).unwrap();
        assert_eq!(path.first(), Some(&(4, 3)));
        assert_eq!(path.last(), Some(&(0, 0)));
        assert!(unit_steps(&path));
    }

    #[test]
    fn test_global_prefers_diagonal_on_ties() {
        // "ab" vs "ba": all three candidates tie at (2, 2), so the walk
        // must take the diagonal rather than detour through the gaps.
        let dp = fill::fill(
            &chars("ab"),
            &chars("ba"),
            &OpCosts::default(),
            AlignMode::Global,
            &StructuralEq,
        );
        assert_eq!(traceback(&dp).unwrap(), vec![(2, 2), (1, 1), (0, 0)]);
    }

    #[test]
    fn test_local_stops_on_restart() {
        let costs = OpCosts::new(-1, -1, -1, 2);
        let s1 = chars("xab");
        let s2 = chars("ab");
        let dp = fill::fill(&s1, &s2, &costs, AlignMode::Local, &StructuralEq);
        let path = traceback(&dp).unwrap();
        // Walk covers the "ab" core only; the unmatched 'x' flank stays out.
        assert_eq!(path.first(), Some(&(3, 2)));
        assert_eq!(path.last(), Some(&(1, 0)));
        assert!(unit_steps(&path));
    }

    #[test]
    fn test_local_both_empty_is_single_cell() {
        let dp = fill::fill::<char, _>(&[], &[], &OpCosts::default(), AlignMode::Local, &StructuralEq);
        assert_eq!(traceback(&dp).unwrap(), vec![(0, 0)]);
    }

    #[test]
    fn test_mismatched_shapes_are_rejected() {
        let s1 = chars("ab");
        let s2 = chars("ab");
        let mut dp = fill::fill(&s1, &s2, &OpCosts::default(), AlignMode::Global, &StructuralEq);
        let other = fill::fill(&s1, &chars("a"), &OpCosts::default(), AlignMode::Global, &StructuralEq);
        dp.ties = other.ties;
        assert!(matches!(
            traceback(&dp),
            Err(AlignError::ShapeMismatch { .. })
        ));
    }
}
