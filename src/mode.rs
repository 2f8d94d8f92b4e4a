//! Alignment variants.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Which ends of the sequences must be aligned?
pub enum AlignMode {
    #[default]
    /// Global method (Needleman–Wunsch).
    /// * Both sequences are aligned end-to-end; every symbol is consumed.
    /// * Useful when you want to find out how similar one whole sequence is
    ///   to another whole sequence.
    Global,
    /// Local method (Smith–Waterman).
    /// * **Unmatched prefixes and suffixes are free.** Only the
    ///   highest-scoring pair of substrings is aligned.
    ///
    /// ### Example
    /// `pqraxabcstvq` and `xyaxbacsll`
    /// * Only the `axabcs` and `axbacs` cores are aligned.
    /// * The `pqr`/`xy` prefixes and `tvq`/`ll` suffixes do not count toward
    ///   the score.
    Local,
}
