//! Weighted combination of two behavior models.
//!
//! Merging `A` and `B` with weight `w` concatenates deep copies of their
//! variants, scaling `A`'s variant probabilities by `1 - w` and `B`'s by
//! `w`.  Names are disambiguated with the `_<N>_` prefix scheme
//! ([`crate::merge_name`]):
//!
//! - `prefix = 1 + highest index already present in A` (1 when none is);
//! - unprefixed variants of `A` get `_<prefix>_`, already-prefixed ones
//!   keep their index;
//! - variants of `B` are shifted above that: unprefixed ones get
//!   `_<prefix + 1>_`, prefixed ones have `prefix + 1` added to their index.
//!
//! Folding N models through this scheme yields strictly increasing,
//! collision-free indices regardless of how the inputs were partially
//! merged before.
//!
//! The inputs are never modified; the result shares no storage with them.
//! Nothing renormalizes variant probabilities — with weights summing to 1
//! across the fold, well-formed inputs produce a well-formed result by
//! construction.

use wm_model::{BehaviorModel, MergeWeight};

use crate::merge_name::MergeName;

/// Merge two behavior models, giving `b`'s variants `weight` of the total
/// probability mass.
///
/// Passing the same model instance for both sides returns a plain deep copy
/// of `a` — no renaming, no reweighting.  (Merging a model with itself would
/// otherwise double every variant.)
pub fn merge_models(a: &BehaviorModel, b: &BehaviorModel, weight: MergeWeight) -> BehaviorModel {
    if std::ptr::eq(a, b) {
        return a.clone();
    }

    let prefix = next_prefix_index(a);
    let mut behaviors = Vec::with_capacity(a.len() + b.len());

    for behavior in &a.behaviors {
        let mut merged = behavior.clone();
        merged.name = MergeName::parse(&merged.name).ensure_index(prefix).to_string();
        merged.probability *= weight.complement();
        behaviors.push(merged);
    }
    for behavior in &b.behaviors {
        let mut merged = behavior.clone();
        merged.name = MergeName::parse(&merged.name).shift(prefix + 1).to_string();
        merged.probability *= weight.value();
        behaviors.push(merged);
    }

    BehaviorModel::new(behaviors)
}

/// The next free prefix index for `model`: one above the highest index any
/// of its variants carries, and at least 1.
fn next_prefix_index(model: &BehaviorModel) -> u32 {
    let mut next = 1;
    for behavior in &model.behaviors {
        if let Some(index) = MergeName::parse(&behavior.name).index {
            if index >= next {
                next = index + 1;
            }
        }
    }
    next
}
