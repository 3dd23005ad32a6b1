//! `wm-model` — behavior graph data model for the `rust_wm` workload-modeling
//! framework.
//!
//! This crate is a dependency of every other `wm-*` crate.  It intentionally
//! has no `wm-*` dependencies and minimal external ones (`serde`,
//! `serde_json`, `rustc-hash`, and `thiserror`).
//!
//! # What lives here
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`behavior`] | `BehaviorModel`, `Behavior`, `MarkovState`, `Transition` |
//! | [`catalog`]  | `Catalog` — the set of valid state identifiers           |
//! | [`weight`]   | `MergeWeight` — clamped merge weight factor              |
//! | [`loader`]   | JSON artifact load/store                                 |
//! | [`error`]    | `ModelError`, `ModelResult<T>`                           |
//!
//! # Ownership model
//!
//! Model values are plain owned data: `String` ids and `Vec` collections,
//! no interior sharing.  A derived [`Clone`] is therefore always a deep copy,
//! which is what the merge contract in `wm-transform` relies on.

pub mod behavior;
pub mod catalog;
pub mod error;
pub mod loader;
pub mod weight;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use behavior::{Behavior, BehaviorModel, MarkovState, Transition, INITIAL_STATE};
pub use catalog::Catalog;
pub use error::{ModelError, ModelResult};
pub use loader::{load_model_json, load_model_reader, write_model_json, write_model_writer};
pub use weight::MergeWeight;
