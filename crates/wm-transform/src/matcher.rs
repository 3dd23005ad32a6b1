//! Validity matching: restrict a behavior model to the states of a catalog.
//!
//! Endpoints come and go between software versions; a behavior model mined
//! against one version may reference states that a newer catalog no longer
//! defines.  Matching contracts every such state away
//! ([`crate::contraction`]) so that the surviving chain walks only valid
//! states with the same reachability probabilities.
//!
//! # Entry-state handling
//!
//! When the behavior's entry state itself is invalid it is not dropped but
//! *renamed* to the canonical [`INITIAL_STATE`] marker: sessions still have
//! to start somewhere, and the marker tells downstream consumers "synthetic
//! entry point, not a real request".  Its outgoing edges become its bridge
//! transitions (self-loop rescaled away) and every other state's edges into
//! it are rerouted, so after matching nothing targets `INITIAL` — it is
//! entry-only.
//!
//! An invalid entry state with no outgoing transitions cannot be bridged;
//! the behavior loses its entry point (`initial_state = None`) and is left
//! otherwise untouched: no states are contracted, not even other invalid
//! ones.  That is a legal terminal case, not an error.

use tracing::{debug, warn};

use wm_model::{Behavior, BehaviorModel, Catalog, INITIAL_STATE};

use crate::contraction::{bridge_transitions, contract_state, reroute_through};
use crate::error::{TransformError, TransformResult};

/// Restrict every behavior of `model` to the states of `catalog`.
///
/// Takes the model by value and returns it transformed; any error aborts the
/// whole operation with no partial result.
pub fn restrict_model(mut model: BehaviorModel, catalog: &Catalog) -> TransformResult<BehaviorModel> {
    for behavior in &mut model.behaviors {
        restrict_behavior(behavior, catalog)?;
    }
    Ok(model)
}

/// Restrict one behavior to the states of `catalog`, in place.
///
/// After a successful call every remaining state id is either in the catalog
/// or the `INITIAL` marker, except when the entry point was cleared: that
/// behavior is passed through as-is.
pub fn restrict_behavior(behavior: &mut Behavior, catalog: &Catalog) -> TransformResult<()> {
    if match_entry_state(behavior, catalog)? == EntryMatch::Cleared {
        return Ok(());
    }

    // Sweep the invalid states one contraction at a time.  Contraction only
    // rewires transitions, it never changes which ids remain invalid, so the
    // list is collected once up front.
    let invalid: Vec<String> = behavior
        .states
        .iter()
        .filter(|s| s.id != INITIAL_STATE && !catalog.contains(&s.id))
        .map(|s| s.id.clone())
        .collect();

    for id in invalid {
        debug!(behavior = %behavior.name, state = %id, "removing state not in catalog");
        contract_state(behavior, &id)?;
    }
    Ok(())
}

/// Outcome of [`match_entry_state`].
#[derive(PartialEq)]
enum EntryMatch {
    /// The behavior has a usable entry point; sweep the invalid states.
    Matched,
    /// The entry point was cleared; leave the behavior as it stands.
    Cleared,
}

/// Handle an entry state that the catalog no longer defines.
fn match_entry_state(behavior: &mut Behavior, catalog: &Catalog) -> TransformResult<EntryMatch> {
    let Some(entry_id) = behavior.initial_state.clone() else {
        return Ok(EntryMatch::Cleared);
    };
    if entry_id == INITIAL_STATE || catalog.contains(&entry_id) {
        return Ok(EntryMatch::Matched);
    }

    debug!(behavior = %behavior.name, state = %entry_id, "entry state not in catalog");

    let idx = behavior
        .state_index(&entry_id)
        .ok_or_else(|| TransformError::UnknownInitialState {
            behavior: behavior.name.clone(),
            state: entry_id.clone(),
        })?;

    if behavior.states[idx].is_terminal() {
        warn!(
            behavior = %behavior.name,
            state = %entry_id,
            "invalid entry state has no transitions; behavior is left without an entry point"
        );
        behavior.initial_state = None;
        return Ok(EntryMatch::Cleared);
    }

    // Rename before rerouting: the renamed state keeps its (rescaled) exits
    // as the synthetic entry point, and because bridges never target the old
    // id, rerouting the whole collection leaves the new INITIAL untouched.
    let bridges = bridge_transitions(&behavior.name, &behavior.states[idx])?;
    behavior.states[idx].id = INITIAL_STATE.to_string();
    behavior.states[idx].transitions = bridges.clone();
    reroute_through(&mut behavior.states, &entry_id, &bridges);

    debug!(behavior = %behavior.name, old = %entry_id, "entry state renamed to INITIAL");
    behavior.initial_state = Some(INITIAL_STATE.to_string());
    Ok(EntryMatch::Matched)
}
