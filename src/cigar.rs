//! Edit actions and CIGAR string rendering.

use itertools::Itertools;

/// Describes CIGAR format.
/// * See http://samtools.github.io/hts-specs/SAMv1.pdf
/// * See http://drive5.com/usearch/manual/cigar.html
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CigarFormat {
    /// Match: 'M', Insertion: 'I', Deletion: 'D', Mismatch: 'M'.
    Standard,
    /// Match: '=', Insertion: 'I', Deletion: 'D', Mismatch: 'X'.
    Extended,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Single edit action in a rendered alignment.
pub enum EditOp {
    /// Exact match under the equality capability.
    Match,
    /// Mismatched pair kept in the alignment (substitution).
    Mismatch,
    /// Insertion of a symbol from the second sequence = gap in the first.
    ///
    /// ### Example:
    /// * Seq 1: `A-CG`
    /// * Seq 2: `ATCG`
    Insert,
    /// Deletion of a symbol from the first sequence = gap in the second.
    ///
    /// ### Example:
    /// * Seq 1: `ATCG`
    /// * Seq 2: `A-CG`
    Delete,
}

impl EditOp {
    /// Single-letter action code used in alignment tables.
    /// * Match: 'S', Mismatch: 'R', Insert: 'I', Delete: 'D'.
    pub fn code(self) -> char {
        match self {
            EditOp::Match => 'S',
            EditOp::Mismatch => 'R',
            EditOp::Insert => 'I',
            EditOp::Delete => 'D',
        }
    }

    fn cigar_char(self, format: CigarFormat) -> char {
        match (format, self) {
            (CigarFormat::Standard, EditOp::Match | EditOp::Mismatch) => 'M',
            (CigarFormat::Extended, EditOp::Match) => '=',
            (CigarFormat::Extended, EditOp::Mismatch) => 'X',
            (_, EditOp::Insert) => 'I',
            (_, EditOp::Delete) => 'D',
        }
    }
}

/// Run-length encode a sequence of edit actions into a CIGAR string.
///
/// ```
/// use rs_seqalign::cigar::{cigar_string, CigarFormat, EditOp};
///
/// let ops = [EditOp::Match, EditOp::Match, EditOp::Mismatch, EditOp::Delete];
/// assert_eq!(cigar_string(&ops, CigarFormat::Standard), "3M1D");
/// assert_eq!(cigar_string(&ops, CigarFormat::Extended), "2=1X1D");
/// ```
pub fn cigar_string(ops: &[EditOp], format: CigarFormat) -> String {
    ops.iter()
        .map(|op| op.cigar_char(format))
        .dedup_with_count()
        .map(|(count, op)| format!("{count}{op}"))
        .collect()
}
