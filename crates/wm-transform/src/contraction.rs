//! State contraction: remove one state from a chain and redistribute its
//! probability mass over the neighboring states.
//!
//! # Algorithm
//!
//! To contract state `R`:
//!
//! 1. If `R` has a self-loop with probability `p`, drop it and rescale `R`'s
//!    remaining outgoing transitions by `1 / (1 - p)` — the loop mass is
//!    spread proportionally over the real exits.  `p >= 1` would make the
//!    denominator non-positive and is rejected as a degenerate chain.
//! 2. The rescaled exits are `R`'s *bridge transitions*: each one stands for
//!    "pass through `R` and leave toward that target".
//! 3. For every other state `S`, each edge `S -> R` with probability `q` is
//!    replaced by the bridges scaled by `q`: mass merging into an existing
//!    `S -> T` edge where one exists, otherwise a new edge copying the
//!    bridge's think times.
//! 4. `R` leaves the state collection.
//!
//! A walk that previously visited `R` now jumps straight to wherever it
//! would have left `R` toward, with the same probability.  One-step
//! lookahead only: sojourn-time contributions of `R` itself are not folded
//! into the surviving think times.
//!
//! If `R` is terminal there are no bridges; edges into `R` are removed with
//! no replacement and their mass is lost.  That is deliberate (the session
//! simply ended at `R`), not something to renormalize away.

use wm_model::{Behavior, MarkovState, Transition};

use crate::error::{TransformError, TransformResult};

/// Remove `state_id` from `behavior`, rerouting all probability mass that
/// flowed through it.
///
/// Contracting an id that is not in the state collection still removes edges
/// pointing at it (the phantom state is treated as terminal).
pub fn contract_state(behavior: &mut Behavior, state_id: &str) -> TransformResult<()> {
    let removed = match behavior.state_index(state_id) {
        Some(idx) => behavior.states.remove(idx),
        None => MarkovState::new(state_id),
    };
    let bridges = bridge_transitions(&behavior.name, &removed)?;
    reroute_through(&mut behavior.states, state_id, &bridges);
    Ok(())
}

/// Compute the bridge transitions of `removed`: its outgoing edges minus any
/// self-loop, rescaled so they sum to the original total again.
///
/// `behavior` is only used for error context.  A terminal state yields an
/// empty bridge list.
pub fn bridge_transitions(
    behavior: &str,
    removed: &MarkovState,
) -> TransformResult<Vec<Transition>> {
    let loop_probability = removed.transition_to(&removed.id).map(|t| t.probability);

    let mut bridges: Vec<Transition> = removed
        .transitions
        .iter()
        .filter(|t| t.target_state != removed.id)
        .cloned()
        .collect();

    if let Some(p) = loop_probability {
        // p >= 1 leaves no mass on the real exits; 1/(1-p) is undefined.
        if p >= 1.0 {
            return Err(TransformError::DegenerateSelfLoop {
                behavior: behavior.to_string(),
                state: removed.id.clone(),
            });
        }
        let rescale = 1.0 / (1.0 - p);
        for t in &mut bridges {
            t.probability *= rescale;
        }
    }

    Ok(bridges)
}

/// Replace every edge targeting `removed_id` by the scaled `bridges`.
///
/// Mass conservation: an edge `S -> removed` with probability `q` turns into
/// `q * bridge.probability` per bridge; since the bridges sum to 1 for a
/// non-terminal removed state, `S`'s outgoing sum is unchanged.
pub(crate) fn reroute_through(
    states: &mut [MarkovState],
    removed_id: &str,
    bridges: &[Transition],
) {
    for state in states.iter_mut() {
        let mut i = 0;
        while i < state.transitions.len() {
            if state.transitions[i].target_state != removed_id {
                i += 1;
                continue;
            }
            // Remove and expand; the element shifted into slot i has not
            // been examined yet, so i is *not* advanced.
            let via = state.transitions.remove(i);

            for bridge in bridges {
                let mass = via.probability * bridge.probability;
                match state
                    .transitions
                    .iter_mut()
                    .find(|t| t.target_state == bridge.target_state)
                {
                    // A parallel edge already exists — merge the mass in.
                    Some(existing) => existing.probability += mass,
                    None => state.transitions.push(Transition {
                        target_state: bridge.target_state.clone(),
                        probability: mass,
                        think_time_mean: bridge.think_time_mean,
                        think_time_deviation: bridge.think_time_deviation,
                    }),
                }
            }
        }
    }
}
