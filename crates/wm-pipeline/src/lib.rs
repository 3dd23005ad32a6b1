//! `wm-pipeline` — derive an executable workload specification from N
//! behavior models and one endpoint catalog.
//!
//! # Crate layout
//!
//! | Module      | Contents                                    |
//! |-------------|---------------------------------------------|
//! | [`builder`] | `WorkloadBuilder`, `WorkloadSpec`           |
//! | [`error`]   | `PipelineError`, `PipelineResult<T>`        |
//!
//! # Control flow
//!
//! ```text
//! models ──restrict(catalog)──► valid models ──fold merge──► one model
//!                                                               │
//!                                  per-variant matrix ◄──project┘
//! ```
//!
//! Each step is the corresponding `wm-transform` / `wm-export` operation;
//! this crate only sequences them and picks the fold weights.

pub mod builder;
pub mod error;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use builder::{WorkloadBuilder, WorkloadSpec};
pub use error::{PipelineError, PipelineResult};
