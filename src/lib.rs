#![warn(missing_docs)]

//! Pairwise sequence alignment under a configurable edit-cost model.
//!
//! Computes optimal global (Needleman–Wunsch) or local (Smith–Waterman)
//! alignments between two sequences of arbitrary comparable symbols, with
//! all-tie backtrace recording, deterministic path reconstruction, gapped
//! alignment rendering, and a per-cell direction table for diagnostics.
//!
//! ```
//! use rs_seqalign::{AlignConfig, AlignTask, Alignment};
//!
//! let seq1: Vec<char> = "vine".chars().collect();
//! let seq2: Vec<char> = "vin".chars().collect();
//! let config = AlignConfig {
//!     task: AlignTask::Path,
//!     ..AlignConfig::default()
//! };
//!
//! let result = Alignment::run(config, &seq1, &seq2).unwrap();
//! assert_eq!(result.score, -1);
//!
//! let aligned = result.aligned.unwrap();
//! let codes: String = aligned.actions.iter().map(|op| op.code()).collect();
//! assert_eq!(codes, "SSSD");
//! ```
//!
//! Scoring-only callers can keep memory linear in the second sequence by
//! leaving the default [`AlignTask::Score`] task, which never allocates
//! the full matrix.

pub mod align;
pub mod cigar;
pub mod config;
pub mod equal;
pub mod error;
pub mod fill;
pub mod matrix;
pub mod mode;
pub mod render;
pub mod task;
pub mod trace;

pub use align::Alignment;
pub use config::{AlignConfig, OpCosts};
pub use error::AlignError;
pub use mode::AlignMode;
pub use task::AlignTask;
