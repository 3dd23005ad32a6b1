//! Textual matrix form.
//!
//! # Format
//!
//! One header row naming the columns, then one row per state:
//!
//! ```csv
//! state,INITIAL,home,cart
//! INITIAL,0,1,0
//! home,0,0.3; n(800 120),0.7; n(1200 0)
//! cart,0,0,0
//! ```
//!
//! Cells carrying a think time append `; n(<mean> <deviation>)` to the
//! probability, the normal-distribution notation used by behavior-mining
//! tooling; plain cells are just the probability.

use std::io::Write;

use csv::Writer;

use crate::error::ExportResult;
use crate::matrix::{MatrixCell, TransitionMatrix};

/// Write `matrix` in the textual matrix form to any `Write` sink.
pub fn write_matrix_csv<W: Write>(matrix: &TransitionMatrix, sink: W) -> ExportResult<()> {
    let mut writer = Writer::from_writer(sink);

    let mut header = Vec::with_capacity(matrix.size() + 1);
    header.push("state".to_string());
    header.extend(matrix.states.iter().cloned());
    writer.write_record(&header)?;

    for (state, row) in matrix.states.iter().zip(&matrix.rows) {
        let mut record = Vec::with_capacity(row.len() + 1);
        record.push(state.clone());
        record.extend(row.iter().map(format_cell));
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}

fn format_cell(cell: &MatrixCell) -> String {
    match cell.think_time {
        Some(tt) => format!("{}; n({} {})", cell.probability, tt.mean, tt.deviation),
        None => cell.probability.to_string(),
    }
}
