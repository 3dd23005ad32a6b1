//! End-to-end tests for wm-pipeline.

use wm_model::{Behavior, BehaviorModel, Catalog, MarkovState, Transition};

use crate::{PipelineError, WorkloadBuilder};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn state(id: &str, transitions: &[(&str, f64)]) -> MarkovState {
    MarkovState {
        id: id.to_string(),
        transitions: transitions
            .iter()
            .map(|&(target, p)| Transition::new(target, p))
            .collect(),
    }
}

fn version_model(variant: &str) -> BehaviorModel {
    BehaviorModel::new(vec![Behavior::new(
        variant,
        "home",
        1.0,
        vec![
            state("home", &[("cart", 0.5), ("home", 0.5)]),
            state("cart", &[("home", 1.0)]),
        ],
    )])
}

fn catalog() -> Catalog {
    Catalog::from_ids(["home", "cart"])
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// ── Builder ───────────────────────────────────────────────────────────────────

#[test]
fn no_models_is_an_error() {
    let result = WorkloadBuilder::new(catalog()).build();
    assert!(matches!(result, Err(PipelineError::NoModels)));
}

#[test]
fn single_model_passes_through_unrenamed() {
    let spec = WorkloadBuilder::new(catalog())
        .model(version_model("browse"))
        .build()
        .unwrap();

    assert_eq!(spec.behaviors.len(), 1);
    assert_eq!(spec.behaviors[0].behavior, "browse");
    assert!(approx(spec.behaviors[0].probability, 1.0));
}

#[test]
fn two_models_split_mass_evenly() {
    let spec = WorkloadBuilder::new(catalog())
        .model(version_model("v1"))
        .model(version_model("v2"))
        .build()
        .unwrap();

    assert_eq!(spec.behaviors.len(), 2);
    assert_eq!(spec.behaviors[0].behavior, "_1_v1");
    assert_eq!(spec.behaviors[1].behavior, "_2_v2");
    assert!(approx(spec.behaviors[0].probability, 0.5));
    assert!(approx(spec.behaviors[1].probability, 0.5));
}

#[test]
fn three_models_get_equal_mass() {
    let spec = WorkloadBuilder::new(catalog())
        .models([version_model("v1"), version_model("v2"), version_model("v3")])
        .build()
        .unwrap();

    assert_eq!(spec.behaviors.len(), 3);
    for b in &spec.behaviors {
        assert!(approx(b.probability, 1.0 / 3.0), "{}: {}", b.behavior, b.probability);
    }
}

#[test]
fn explicit_weight_applies_to_every_fold() {
    let spec = WorkloadBuilder::new(catalog())
        .model(version_model("v1"))
        .model(version_model("v2"))
        .merge_weight(0.25)
        .build()
        .unwrap();

    assert!(approx(spec.behaviors[0].probability, 0.75));
    assert!(approx(spec.behaviors[1].probability, 0.25));
}

#[test]
fn invalid_states_removed_before_merge() {
    // "search" is not in the catalog; its mass must be bridged through.
    let model = BehaviorModel::new(vec![Behavior::new(
        "browse",
        "home",
        1.0,
        vec![
            state("home", &[("search", 1.0)]),
            state("search", &[("cart", 1.0)]),
            state("cart", &[]),
        ],
    )]);

    let spec = WorkloadBuilder::new(catalog()).model(model).build().unwrap();

    let m = &spec.behaviors[0];
    assert_eq!(m.states, vec!["home", "cart"]);
    assert!(approx(m.cell("home", "cart").unwrap().probability, 1.0));
}

#[test]
fn matrix_rows_are_entry_first() {
    let model = BehaviorModel::new(vec![Behavior::new(
        "b",
        "cart",
        1.0,
        vec![state("home", &[("cart", 1.0)]), state("cart", &[("home", 1.0)])],
    )]);

    let spec = WorkloadBuilder::new(catalog()).model(model).build().unwrap();
    assert_eq!(spec.behaviors[0].states[0], "cart");
}

#[test]
fn broken_entry_reference_aborts_derivation() {
    let model = BehaviorModel::new(vec![Behavior::new(
        "broken",
        "nowhere",
        1.0,
        vec![state("home", &[])],
    )]);

    let result = WorkloadBuilder::new(catalog()).model(model).build();
    assert!(matches!(result, Err(PipelineError::Transform(_))));
}

#[test]
fn entry_state_cleared_by_matching_fails_projection() {
    // Invalid terminal entry state → initial cleared → projection must fail.
    let model = BehaviorModel::new(vec![Behavior::new(
        "b",
        "legacy",
        1.0,
        vec![state("legacy", &[]), state("home", &[])],
    )]);

    let result = WorkloadBuilder::new(catalog()).model(model).build();
    assert!(matches!(result, Err(PipelineError::Export(_))));
}

#[test]
fn spec_serializes_to_json() {
    let spec = WorkloadBuilder::new(catalog())
        .model(version_model("browse"))
        .build()
        .unwrap();

    let json = serde_json::to_string(&spec).unwrap();
    assert!(json.contains("\"behaviors\""));
    assert!(json.contains("\"rows\""));
}
