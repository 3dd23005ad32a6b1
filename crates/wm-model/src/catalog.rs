//! `Catalog` — the set of valid state identifiers.
//!
//! Behavior states are named after callable endpoints of the system under
//! test.  A catalog is the flat id set derived from one version's endpoint
//! model; validity matching (`wm-transform::matcher`) contracts away every
//! state whose id is not in the catalog.  How the id set is obtained from an
//! application model is the caller's business.

use rustc_hash::FxHashSet;

/// Set of state ids considered valid for one software version.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    ids: FxHashSet<String>,
}

impl Catalog {
    /// Build a catalog from any collection of id-like values.
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { ids: ids.into_iter().map(Into::into).collect() }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterate over the ids (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for Catalog {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_ids(iter)
    }
}
