//! `wm-transform` — graph transformations over probabilistic behavior models.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`contraction`] | `contract_state`, `bridge_transitions`, edge rerouting    |
//! | [`matcher`]     | `restrict_model`/`restrict_behavior` — catalog matching   |
//! | [`merge`]       | `merge_models` — weighted two-model combination           |
//! | [`merge_name`]  | `MergeName` — `_<N>_<base>` prefix bookkeeping            |
//! | [`error`]       | `TransformError`, `TransformResult<T>`                    |
//!
//! # Stochastic invariants
//!
//! All transformations preserve the outgoing probability sum of every state
//! they touch, with one intentional exception: removing a *terminal* state
//! drops the mass of edges leading into it, because a terminal state has no
//! onward transitions to bridge the mass through.  Nothing here renormalizes;
//! degenerate inputs produce degenerate outputs except where a transformation
//! would divide by zero, which is reported as
//! [`TransformError::DegenerateSelfLoop`].
//!
//! # Mutation model
//!
//! Contraction and matching edit a behavior in place; the public
//! model-level entry points ([`matcher::restrict_model`]) take the model by
//! value and hand it back, so callers never observe a half-transformed
//! value.  Merging is pure: both inputs are borrowed immutably and the
//! result is built from deep copies.

pub mod contraction;
pub mod error;
pub mod matcher;
pub mod merge;
pub mod merge_name;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use contraction::{bridge_transitions, contract_state};
pub use error::{TransformError, TransformResult};
pub use matcher::{restrict_behavior, restrict_model};
pub use merge::merge_models;
pub use merge_name::MergeName;
