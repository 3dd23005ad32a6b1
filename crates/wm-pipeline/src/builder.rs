//! Fluent builder for the full derivation pipeline.

use serde::{Deserialize, Serialize};
use tracing::debug;

use wm_export::{project, TransitionMatrix};
use wm_model::{BehaviorModel, Catalog, MergeWeight};
use wm_transform::{merge_models, restrict_model};

use crate::error::{PipelineError, PipelineResult};

// ── WorkloadSpec ──────────────────────────────────────────────────────────────

/// The derived workload: one dense transition matrix per surviving behavior
/// variant, ready for serialization toward a load-generation DSL.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorkloadSpec {
    pub behaviors: Vec<TransitionMatrix>,
}

// ── WorkloadBuilder ───────────────────────────────────────────────────────────

/// Fluent builder deriving a [`WorkloadSpec`] from N behavior models and one
/// catalog.
///
/// # Required inputs
///
/// - a [`Catalog`] of valid state ids (constructor argument);
/// - at least one [`BehaviorModel`] via [`model`][Self::model] /
///   [`models`][Self::models].
///
/// # Optional inputs
///
/// | Method            | Default                                            |
/// |-------------------|----------------------------------------------------|
/// | `.merge_weight(w)`| Equal mass per input: model `i` folds in at `1/(i+1)` |
///
/// # Example
///
/// ```rust,ignore
/// let spec = WorkloadBuilder::new(catalog)
///     .model(v1_model)
///     .model(v2_model)
///     .build()?;
/// ```
pub struct WorkloadBuilder {
    catalog: Catalog,
    models: Vec<BehaviorModel>,
    merge_weight: Option<MergeWeight>,
}

impl WorkloadBuilder {
    /// Create a builder for the given catalog.
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog, models: Vec::new(), merge_weight: None }
    }

    /// Add one source behavior model (typically one per software version).
    pub fn model(mut self, model: BehaviorModel) -> Self {
        self.models.push(model);
        self
    }

    /// Add several source behavior models at once.
    pub fn models<I: IntoIterator<Item = BehaviorModel>>(mut self, models: I) -> Self {
        self.models.extend(models);
        self
    }

    /// Use a fixed weight for every fold step instead of the equal-mass
    /// default.  Out-of-range values fall back to 0.5 per [`MergeWeight`].
    pub fn merge_weight(mut self, weight: impl Into<MergeWeight>) -> Self {
        self.merge_weight = Some(weight.into());
        self
    }

    /// Run the pipeline: restrict every model to the catalog, fold-merge,
    /// and project every surviving variant.
    ///
    /// Any failure aborts the whole derivation; no partial spec is returned.
    pub fn build(self) -> PipelineResult<WorkloadSpec> {
        if self.models.is_empty() {
            return Err(PipelineError::NoModels);
        }

        // ── Restrict each model to the catalog ────────────────────────────
        let mut restricted = Vec::with_capacity(self.models.len());
        for model in self.models {
            restricted.push(restrict_model(model, &self.catalog)?);
        }

        // ── Fold-merge into one model ─────────────────────────────────────
        let mut iter = restricted.into_iter();
        let mut merged = iter.next().ok_or(PipelineError::NoModels)?;
        for (i, model) in iter.enumerate() {
            // Model i+1 (0-based) joins at 1/(i+2) of the mass so that after
            // the whole fold every input carries an equal share.
            let weight = self
                .merge_weight
                .unwrap_or_else(|| MergeWeight::new(1.0 / (i as f64 + 2.0)));
            debug!(step = i + 1, weight = weight.value(), "folding model into merge");
            merged = merge_models(&merged, &model, weight);
        }

        // ── Project every surviving variant ───────────────────────────────
        let mut behaviors = Vec::with_capacity(merged.len());
        for behavior in &merged.behaviors {
            debug!(behavior = %behavior.name, "projecting transition matrix");
            behaviors.push(project(behavior)?);
        }

        Ok(WorkloadSpec { behaviors })
    }
}
