//! Dense N×N transition-matrix projection.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use wm_model::{Behavior, MarkovState, Transition};

use crate::error::{ExportError, ExportResult};

// ── Cell types ────────────────────────────────────────────────────────────────

/// Think-time parameters attached to a matrix cell.
///
/// Whenever the source transition carries a mean, the deviation defaults
/// to 0 rather than staying absent — downstream tooling treats "mean without
/// deviation" as a fixed think time.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThinkTime {
    pub mean: f64,
    pub deviation: f64,
}

/// One cell of the dense matrix: the probability of moving from the row
/// state to the column state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatrixCell {
    pub probability: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub think_time: Option<ThinkTime>,
}

impl MatrixCell {
    /// Zero-probability filler for unconnected state pairs.
    pub const EMPTY: MatrixCell = MatrixCell { probability: 0.0, think_time: None };

    fn from_transition(t: &Transition) -> Self {
        Self {
            probability: t.probability,
            think_time: t.think_time_mean.map(|mean| ThinkTime {
                mean,
                deviation: t.think_time_deviation.unwrap_or(0.0),
            }),
        }
    }
}

// ── TransitionMatrix ──────────────────────────────────────────────────────────

/// The dense matrix form of one behavior variant.
///
/// `states[i]` names both row `i` and column `i`; `rows[i][j]` is the
/// transition cell from `states[i]` to `states[j]`.  The entry state is
/// always `states[0]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionMatrix {
    pub behavior: String,
    pub probability: f64,
    pub states: Vec<String>,
    pub rows: Vec<Vec<MatrixCell>>,
}

impl TransitionMatrix {
    /// Number of states (and therefore rows and columns).
    pub fn size(&self) -> usize {
        self.states.len()
    }

    /// Cell for the ordered pair (`from`, `to`), if both states exist.
    pub fn cell(&self, from: &str, to: &str) -> Option<&MatrixCell> {
        let row = self.states.iter().position(|s| s == from)?;
        let col = self.states.iter().position(|s| s == to)?;
        Some(&self.rows[row][col])
    }
}

// ── Projection ────────────────────────────────────────────────────────────────

/// Project one behavior variant into its dense matrix form.
///
/// The state order is the behavior's own, except that the entry state is
/// moved to index 0 (removed from its position and prepended).  Terminal
/// states produce a full row of [`MatrixCell::EMPTY`].
pub fn project(behavior: &Behavior) -> ExportResult<TransitionMatrix> {
    let entry = behavior
        .initial_state
        .as_deref()
        .ok_or_else(|| ExportError::MissingInitialState { behavior: behavior.name.clone() })?;

    // Entry state pinned to index 0: remove-then-prepend on the state order.
    let mut ordered: Vec<&MarkovState> = behavior.states.iter().collect();
    let entry_idx = ordered
        .iter()
        .position(|s| s.id == entry)
        .ok_or_else(|| ExportError::UnknownInitialState {
            behavior: behavior.name.clone(),
            state: entry.to_string(),
        })?;
    let entry_state = ordered.remove(entry_idx);
    ordered.insert(0, entry_state);

    let states: Vec<String> = ordered.iter().map(|s| s.id.clone()).collect();
    let columns: FxHashMap<&str, usize> = states
        .iter()
        .enumerate()
        .map(|(i, id)| (id.as_str(), i))
        .collect();

    let mut rows = Vec::with_capacity(ordered.len());
    for state in &ordered {
        let mut row = vec![MatrixCell::EMPTY; ordered.len()];
        // Transitions whose target is not a state of this behavior get no
        // cell — the matrix only covers ordered pairs of known states.
        for t in &state.transitions {
            if let Some(&col) = columns.get(t.target_state.as_str()) {
                row[col] = MatrixCell::from_transition(t);
            }
        }
        rows.push(row);
    }

    Ok(TransitionMatrix {
        behavior: behavior.name.clone(),
        probability: behavior.probability,
        states,
        rows,
    })
}
