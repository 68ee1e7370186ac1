//! Writes a graph as an interaction table.

use std::io::Write;
use std::path::Path;

use crate::graph::InteractionGraph;
use crate::types::{GraphResult, CSV_HEADER, DEFAULT_WEIGHT_PRECISION};

/// Writer for interaction tables.
#[derive(Debug, Clone, Copy)]
pub struct CsvWriter {
    precision: usize,
}

impl CsvWriter {
    /// Create a new writer emitting `precision` decimals per weight.
    pub fn new(precision: usize) -> Self {
        Self { precision }
    }

    /// Write the graph to a file. Returns the number of rows written.
    pub fn write_to_file(&self, graph: &InteractionGraph, path: &Path) -> GraphResult<usize> {
        let file = std::fs::File::create(path)?;
        let rows = self.write_to(graph, std::io::BufWriter::new(file))?;
        log::info!("exported {rows} interaction(s) to {}", path.display());
        Ok(rows)
    }

    /// Write the graph to any writer: the header, then one row per
    /// interaction (inactive ones included) with the endpoints in
    /// lexicographic order.
    pub fn write_to(&self, graph: &InteractionGraph, writer: impl Write) -> GraphResult<usize> {
        let mut out = csv::Writer::from_writer(writer);
        out.write_record(CSV_HEADER)?;

        let mut rows = 0;
        for interaction in graph.interactions() {
            let (a, b) = interaction.ordered_pair();
            let weight = format!("{:.*}", self.precision, interaction.weight);
            out.write_record([a, b, weight.as_str()])?;
            rows += 1;
        }
        out.flush()?;
        Ok(rows)
    }
}

impl Default for CsvWriter {
    fn default() -> Self {
        Self::new(DEFAULT_WEIGHT_PRECISION)
    }
}
