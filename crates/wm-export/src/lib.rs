//! `wm-export` — projection of a behavior variant into the dense matrix
//! form consumed by load-generation tooling.
//!
//! # Crate layout
//!
//! | Module     | Contents                                              |
//! |------------|-------------------------------------------------------|
//! | [`matrix`] | `TransitionMatrix`, `MatrixCell`, `ThinkTime`, `project` |
//! | [`csv`]    | `write_matrix_csv` — textual matrix form              |
//! | [`error`]  | `ExportError`, `ExportResult<T>`                      |
//!
//! The sparse per-state transition lists of `wm-model` are convenient to
//! transform but load generators want the full N×N picture: one row per
//! state, one cell per ordered state pair, zero-probability cells filled in,
//! and the entry state pinned to row/column 0.

pub mod csv;
pub mod error;
pub mod matrix;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use csv::write_matrix_csv;
pub use error::{ExportError, ExportResult};
pub use matrix::{project, MatrixCell, ThinkTime, TransitionMatrix};
