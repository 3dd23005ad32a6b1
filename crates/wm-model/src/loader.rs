//! JSON artifact load/store.
//!
//! # Artifact format
//!
//! The behavior-model artifact is the serde form of [`BehaviorModel`]:
//!
//! ```json
//! {
//!   "behaviors": [
//!     {
//!       "name": "gen_behavior_0",
//!       "initialState": "INITIAL",
//!       "probability": 1.0,
//!       "markov-states": [
//!         {
//!           "id": "INITIAL",
//!           "transitions": [
//!             { "targetState": "home", "probability": 1.0,
//!               "think-time-mean": 800.0, "think-time-deviation": 120.0 }
//!           ]
//!         },
//!         { "id": "home" }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! A state without a `transitions` key is terminal.

use std::io::{Read, Write};
use std::path::Path;

use crate::behavior::BehaviorModel;
use crate::error::{ModelError, ModelResult};

/// Load a behavior model from a JSON file.
pub fn load_model_json(path: &Path) -> ModelResult<BehaviorModel> {
    let file = std::fs::File::open(path).map_err(ModelError::Io)?;
    load_model_reader(std::io::BufReader::new(file))
}

/// Like [`load_model_json`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or loading from network
/// streams.
pub fn load_model_reader<R: Read>(reader: R) -> ModelResult<BehaviorModel> {
    serde_json::from_reader(reader).map_err(|e| ModelError::Parse(e.to_string()))
}

/// Write a behavior model to a JSON file (pretty-printed).
pub fn write_model_json(path: &Path, model: &BehaviorModel) -> ModelResult<()> {
    let file = std::fs::File::create(path).map_err(ModelError::Io)?;
    write_model_writer(std::io::BufWriter::new(file), model)
}

/// Like [`write_model_json`] but accepts any `Write` sink.
pub fn write_model_writer<W: Write>(writer: W, model: &BehaviorModel) -> ModelResult<()> {
    serde_json::to_writer_pretty(writer, model).map_err(|e| ModelError::Parse(e.to_string()))
}
