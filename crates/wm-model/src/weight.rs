//! `MergeWeight` — the probability mass fraction given to the second model
//! of a merge.
//!
//! Merging `A` and `B` with weight `w` scales `B`'s variant probabilities by
//! `w` and `A`'s by `1 - w`.  Values outside `[0, 1]` silently fall back to
//! the default of `0.5` (equal mass), matching the external interface
//! contract: a bad weight degrades to the default rather than failing the
//! whole derivation.

/// Weight factor for the second of two models being merged, guaranteed to be
/// within `[0, 1]`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MergeWeight(f64);

impl MergeWeight {
    /// The fallback weight: both models contribute equal mass.
    pub const DEFAULT: MergeWeight = MergeWeight(0.5);

    /// Construct a weight, falling back to [`MergeWeight::DEFAULT`] when `w`
    /// is outside `[0, 1]` (including NaN).
    pub fn new(w: f64) -> Self {
        if (0.0..=1.0).contains(&w) {
            Self(w)
        } else {
            Self::DEFAULT
        }
    }

    /// The fraction applied to the second model's variants.
    pub fn value(self) -> f64 {
        self.0
    }

    /// The fraction applied to the first model's variants (`1 - w`).
    pub fn complement(self) -> f64 {
        1.0 - self.0
    }
}

impl Default for MergeWeight {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<f64> for MergeWeight {
    fn from(w: f64) -> Self {
        Self::new(w)
    }
}
