//! Unit tests for wm-model.

use crate::{Behavior, BehaviorModel, Catalog, MarkovState, MergeWeight, Transition};

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

fn two_state_behavior() -> Behavior {
    Behavior::new(
        "browse",
        "home",
        1.0,
        vec![state("home", &[("cart", 0.4), ("home", 0.6)]), state("cart", &[])],
    )
}

// ── Behavior / MarkovState ────────────────────────────────────────────────────

#[cfg(test)]
mod behavior {
    use super::*;

    #[test]
    fn state_lookup() {
        let b = two_state_behavior();
        assert_eq!(b.state("cart").unwrap().id, "cart");
        assert!(b.state("missing").is_none());
        assert_eq!(b.state_index("cart"), Some(1));
    }

    #[test]
    fn outgoing_sum() {
        let b = two_state_behavior();
        assert!((b.state("home").unwrap().outgoing_sum() - 1.0).abs() < 1e-12);
        assert_eq!(b.state("cart").unwrap().outgoing_sum(), 0.0);
    }

    #[test]
    fn terminal_state() {
        let b = two_state_behavior();
        assert!(b.state("cart").unwrap().is_terminal());
        assert!(!b.state("home").unwrap().is_terminal());
    }

    #[test]
    fn transition_to() {
        let b = two_state_behavior();
        let home = b.state("home").unwrap();
        assert_eq!(home.transition_to("cart").unwrap().probability, 0.4);
        assert!(home.transition_to("missing").is_none());
    }

    #[test]
    fn add_transition_with_think_time() {
        let mut s = MarkovState::new("home");
        s.add_transition("cart", 1.0, Some((900.0, 150.0)));
        let t = &s.transitions[0];
        assert_eq!(t.think_time_mean, Some(900.0));
        assert_eq!(t.think_time_deviation, Some(150.0));
    }

    #[test]
    fn model_behavior_lookup() {
        let model = BehaviorModel::new(vec![two_state_behavior()]);
        assert!(model.behavior("browse").is_some());
        assert!(model.behavior("buy").is_none());
        assert_eq!(model.len(), 1);
    }

    #[test]
    fn clone_is_deep() {
        let original = BehaviorModel::new(vec![two_state_behavior()]);
        let mut copy = original.clone();
        copy.behaviors[0].states[0].transitions[0].probability = 0.99;
        copy.behaviors[0].name.push_str("_x");
        assert_eq!(original.behaviors[0].states[0].transitions[0].probability, 0.4);
        assert_eq!(original.behaviors[0].name, "browse");
    }
}

// ── Catalog ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod catalog {
    use super::*;

    #[test]
    fn membership() {
        let catalog = Catalog::from_ids(["home", "cart"]);
        assert!(catalog.contains("home"));
        assert!(!catalog.contains("checkout"));
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn from_iterator() {
        let catalog: Catalog = vec!["a".to_string(), "b".to_string()].into_iter().collect();
        assert!(catalog.contains("a"));
        assert!(catalog.contains("b"));
    }

    #[test]
    fn empty() {
        let catalog = Catalog::default();
        assert!(catalog.is_empty());
        assert!(!catalog.contains("anything"));
    }
}

// ── MergeWeight ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod weight {
    use super::*;

    #[test]
    fn in_range_kept() {
        assert_eq!(MergeWeight::new(0.3).value(), 0.3);
        assert_eq!(MergeWeight::new(0.0).value(), 0.0);
        assert_eq!(MergeWeight::new(1.0).value(), 1.0);
    }

    #[test]
    fn out_of_range_falls_back() {
        assert_eq!(MergeWeight::new(-0.1).value(), 0.5);
        assert_eq!(MergeWeight::new(1.5).value(), 0.5);
        assert_eq!(MergeWeight::new(f64::NAN).value(), 0.5);
    }

    #[test]
    fn complement() {
        let w = MergeWeight::new(0.3);
        assert!((w.complement() - 0.7).abs() < 1e-12);
    }

    #[test]
    fn default_is_half() {
        assert_eq!(MergeWeight::default().value(), 0.5);
    }
}

// ── JSON loader ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use crate::{load_model_json, load_model_reader, write_model_json, write_model_writer};

    use super::*;

    const JSON: &str = r#"{
      "behaviors": [
        {
          "name": "browse",
          "initialState": "home",
          "probability": 1.0,
          "markov-states": [
            {
              "id": "home",
              "transitions": [
                { "targetState": "cart", "probability": 1.0,
                  "think-time-mean": 800.0, "think-time-deviation": 120.0 }
              ]
            },
            { "id": "cart" }
          ]
        }
      ]
    }"#;

    #[test]
    fn loads_artifact_field_names() {
        let model = load_model_reader(Cursor::new(JSON)).unwrap();
        let b = &model.behaviors[0];
        assert_eq!(b.initial_state.as_deref(), Some("home"));
        let t = &b.states[0].transitions[0];
        assert_eq!(t.target_state, "cart");
        assert_eq!(t.think_time_mean, Some(800.0));
        assert_eq!(t.think_time_deviation, Some(120.0));
    }

    #[test]
    fn absent_transitions_is_terminal() {
        let model = load_model_reader(Cursor::new(JSON)).unwrap();
        assert!(model.behaviors[0].states[1].is_terminal());
    }

    #[test]
    fn roundtrip_via_writer() {
        let model = BehaviorModel::new(vec![two_state_behavior()]);
        let mut buf = Vec::new();
        write_model_writer(&mut buf, &model).unwrap();

        let reloaded = load_model_reader(Cursor::new(buf)).unwrap();
        assert_eq!(reloaded, model);
    }

    #[test]
    fn terminal_state_serializes_without_transitions_key() {
        let model = BehaviorModel::new(vec![two_state_behavior()]);
        let mut buf = Vec::new();
        write_model_writer(&mut buf, &model).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        let states = &value["behaviors"][0]["markov-states"];
        // "cart" is terminal — its object must not carry a transitions key.
        assert_eq!(states[1]["id"], "cart");
        assert!(states[1].get("transitions").is_none());
    }

    #[test]
    fn file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");

        let model = BehaviorModel::new(vec![two_state_behavior()]);
        write_model_json(&path, &model).unwrap();
        let reloaded = load_model_json(&path).unwrap();
        assert_eq!(reloaded, model);
    }

    #[test]
    fn malformed_json_errors() {
        let result = load_model_reader(Cursor::new("{ not json"));
        assert!(result.is_err());
    }
}
