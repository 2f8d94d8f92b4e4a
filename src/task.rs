//! Computation tasks.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// What should rs_seqalign compute?
pub enum AlignTask {
    #[default]
    /// Find the optimal score only.
    /// * Runs the reduced-memory fill: two rolling rows, no tie grid.
    Score,
    /// Find the optimal score, traceback path, and rendered alignment.
    /// * Keeps the full score matrix and tie grid in memory.
    Path,
}
