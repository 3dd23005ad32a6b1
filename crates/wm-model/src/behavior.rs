//! Core model types: `BehaviorModel`, `Behavior`, `MarkovState`, `Transition`.
//!
//! # Model shape
//!
//! A [`BehaviorModel`] is an ordered list of named, weighted [`Behavior`]s
//! (behavior *variants*).  Each behavior is a discrete-time Markov chain over
//! string state ids: every [`MarkovState`] carries the ordered list of its
//! outgoing [`Transition`]s, each with a probability and optional think-time
//! parameters.
//!
//! # Well-formedness
//!
//! For a well-formed chain the outgoing probabilities of every state sum
//! to 1, and `initial_state` names a state present in `states`.  Neither is
//! validated here — the transformation engine preserves the sum across
//! contraction and reports dangling initial-state references as fatal errors
//! at the point they matter, but silently-degenerate inputs pass through
//! (downstream consumers may reject them).
//!
//! # Serde
//!
//! Field names follow the on-disk JSON artifact: `initialState`,
//! `markov-states`, `targetState`, `think-time-mean`, `think-time-deviation`.
//! An absent transition list and an empty one are the same thing (a terminal
//! state), so `transitions` is a plain `Vec` with `#[serde(default)]`.

use serde::{Deserialize, Serialize};

/// Canonical id of the synthetic entry state introduced when a behavior's
/// original entry state is removed during validity matching.
///
/// `INITIAL` is entry-only: after matching, no transition targets it.
pub const INITIAL_STATE: &str = "INITIAL";

// ── BehaviorModel ─────────────────────────────────────────────────────────────

/// An ordered collection of behavior variants for one software system.
///
/// Variant names are unique within a model once they have been through the
/// merge disambiguation scheme (`wm-transform::merge`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BehaviorModel {
    #[serde(default)]
    pub behaviors: Vec<Behavior>,
}

impl BehaviorModel {
    /// A model containing the given behaviors.
    pub fn new(behaviors: Vec<Behavior>) -> Self {
        Self { behaviors }
    }

    pub fn is_empty(&self) -> bool {
        self.behaviors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.behaviors.len()
    }

    /// Find a behavior by name.
    pub fn behavior(&self, name: &str) -> Option<&Behavior> {
        self.behaviors.iter().find(|b| b.name == name)
    }
}

// ── Behavior ──────────────────────────────────────────────────────────────────

/// One named, weighted Markov chain describing one style of user behavior.
///
/// `probability` is the fraction of simulated users following this variant;
/// callers supply models whose variant probabilities sum to 1.  The engine
/// scales these weights during merging but never renormalizes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Behavior {
    pub name: String,

    /// Entry state id.  `None` only in the transient form produced when
    /// validity matching removes a transition-less entry state; projection
    /// rejects such behaviors.
    #[serde(rename = "initialState", skip_serializing_if = "Option::is_none")]
    pub initial_state: Option<String>,

    pub probability: f64,

    #[serde(rename = "markov-states", default, skip_serializing_if = "Vec::is_empty")]
    pub states: Vec<MarkovState>,
}

impl Behavior {
    pub fn new(
        name: impl Into<String>,
        initial_state: impl Into<String>,
        probability: f64,
        states: Vec<MarkovState>,
    ) -> Self {
        Self {
            name: name.into(),
            initial_state: Some(initial_state.into()),
            probability,
            states,
        }
    }

    /// Find a state by id.
    pub fn state(&self, id: &str) -> Option<&MarkovState> {
        self.states.iter().find(|s| s.id == id)
    }

    /// Position of a state in the ordered state list.
    pub fn state_index(&self, id: &str) -> Option<usize> {
        self.states.iter().position(|s| s.id == id)
    }

    /// All state ids in list order.
    pub fn state_ids(&self) -> impl Iterator<Item = &str> {
        self.states.iter().map(|s| s.id.as_str())
    }
}

// ── MarkovState ───────────────────────────────────────────────────────────────

/// One node of the behavior chain: a state id plus its outgoing transitions.
///
/// An empty `transitions` list marks a terminal state (the session ends
/// there); walks into a terminal state have no onward probability mass.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarkovState {
    pub id: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub transitions: Vec<Transition>,
}

impl MarkovState {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into(), transitions: Vec::new() }
    }

    pub fn is_terminal(&self) -> bool {
        self.transitions.is_empty()
    }

    /// The outgoing transition targeting `id`, if any.
    pub fn transition_to(&self, id: &str) -> Option<&Transition> {
        self.transitions.iter().find(|t| t.target_state == id)
    }

    /// Sum of outgoing probabilities (1.0 for a well-formed non-terminal state).
    pub fn outgoing_sum(&self) -> f64 {
        self.transitions.iter().map(|t| t.probability).sum()
    }

    /// Append an outgoing transition.
    pub fn add_transition(
        &mut self,
        target: impl Into<String>,
        probability: f64,
        think_time: Option<(f64, f64)>,
    ) {
        self.transitions.push(Transition {
            target_state: target.into(),
            probability,
            think_time_mean: think_time.map(|(m, _)| m),
            think_time_deviation: think_time.map(|(_, d)| d),
        });
    }
}

// ── Transition ────────────────────────────────────────────────────────────────

/// One directed edge of the behavior chain.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    #[serde(rename = "targetState")]
    pub target_state: String,

    pub probability: f64,

    /// Mean think time (ms) spent before following this edge.
    #[serde(rename = "think-time-mean", skip_serializing_if = "Option::is_none")]
    pub think_time_mean: Option<f64>,

    /// Think-time standard deviation (ms).
    #[serde(rename = "think-time-deviation", skip_serializing_if = "Option::is_none")]
    pub think_time_deviation: Option<f64>,
}

impl Transition {
    /// A transition with no think-time parameters.
    pub fn new(target: impl Into<String>, probability: f64) -> Self {
        Self {
            target_state: target.into(),
            probability,
            think_time_mean: None,
            think_time_deviation: None,
        }
    }
}
