//! `MergeName` — structured view of the `_<N>_<base>` variant-name scheme.
//!
//! Merged models disambiguate variant names by a numeric prefix: `browse`
//! from the second input of a merge becomes `_2_browse`.  The prefix doubles
//! as merge bookkeeping — later merges must pick indices above everything
//! already present — so instead of re-parsing strings at every decision
//! point, names are parsed once into a `MergeName` and re-serialized when
//! stored back.  The wire form is unchanged from what earlier tooling
//! produced, so re-merging previously merged artifacts keeps working.

use std::fmt;

/// A variant name split into its optional numeric merge index and base name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MergeName {
    pub index: Option<u32>,
    pub base: String,
}

impl MergeName {
    /// Parse a variant name.  `_12_browse` → index 12, base `browse`;
    /// anything not of that exact shape is all base.
    pub fn parse(name: &str) -> Self {
        if let Some(rest) = name.strip_prefix('_') {
            if let Some(sep) = rest.find('_') {
                let digits = &rest[..sep];
                if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
                    if let Ok(index) = digits.parse::<u32>() {
                        return Self {
                            index: Some(index),
                            base: rest[sep + 1..].to_string(),
                        };
                    }
                }
            }
        }
        Self { index: None, base: name.to_string() }
    }

    /// Give an unprefixed name the index `index`; leave an existing index
    /// alone.
    pub fn ensure_index(mut self, index: u32) -> Self {
        self.index.get_or_insert(index);
        self
    }

    /// Shift the index up by `added` (an unprefixed name starts from 0).
    ///
    /// This is how the second merge input stays collision-free: its indices
    /// all move above the first input's highest prefix.
    pub fn shift(mut self, added: u32) -> Self {
        self.index = Some(self.index.unwrap_or(0) + added);
        self
    }
}

impl fmt::Display for MergeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.index {
            Some(i) => write!(f, "_{}_{}", i, self.base),
            None => f.write_str(&self.base),
        }
    }
}
