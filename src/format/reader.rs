//! Reads interaction tables (`ProteinA,ProteinB,CostoInteraccion`) into a graph.

use std::io::Read;
use std::path::Path;

use serde::Serialize;

use crate::config::EndpointPolicy;
use crate::graph::InteractionGraph;
use crate::types::{validate_weight, GraphError, GraphResult, CSV_HEADER};

/// A row that was not imported.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedRow {
    /// 1-based line number in the source file.
    pub line: u64,
    /// Why the row was skipped.
    pub reason: String,
}

/// Outcome of an import.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ImportReport {
    /// Data rows seen (header excluded).
    pub rows_read: usize,
    /// Interactions added to the graph.
    pub interactions_added: usize,
    /// Proteins created because a row named them.
    pub proteins_created: usize,
    /// Rows that were skipped, in file order.
    pub skipped: Vec<SkippedRow>,
}

impl ImportReport {
    /// Whether every row was imported.
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }

    fn skip(&mut self, line: u64, reason: impl Into<String>) {
        let reason = reason.into();
        log::warn!("skipping line {line}: {reason}");
        self.skipped.push(SkippedRow { line, reason });
    }
}

/// A well-formed data row, not yet applied to a graph.
struct Row {
    line: u64,
    origin: String,
    destination: String,
    weight: f64,
}

/// Reader for interaction tables.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvReader {
    policy: EndpointPolicy,
}

impl CsvReader {
    /// Create a new reader with the given endpoint policy.
    pub fn new(policy: EndpointPolicy) -> Self {
        Self { policy }
    }

    /// Read a file into a new graph.
    ///
    /// A file's own rows define its proteins, so they are always created here
    /// whatever the endpoint policy; the policy governs imports into a graph
    /// that already holds proteins.
    pub fn read_from_file(&self, path: &Path) -> GraphResult<(InteractionGraph, ImportReport)> {
        let mut graph = InteractionGraph::new();
        let report = Self::new(EndpointPolicy::AutoCreate).load_file(path, &mut graph)?;
        Ok((graph, report))
    }

    /// Import a file into an existing graph. On an I/O error the graph is
    /// left untouched.
    pub fn load_file(
        &self,
        path: &Path,
        graph: &mut InteractionGraph,
    ) -> GraphResult<ImportReport> {
        let data = std::fs::read(path)?;
        let report = self.load_bytes(&data, graph);
        log::info!(
            "imported {} interaction(s) from {} ({} row(s) skipped)",
            report.interactions_added,
            path.display(),
            report.skipped.len()
        );
        Ok(report)
    }

    /// Import from any reader into an existing graph.
    pub fn load_from(
        &self,
        reader: &mut impl Read,
        graph: &mut InteractionGraph,
    ) -> GraphResult<ImportReport> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Ok(self.load_bytes(&data, graph))
    }

    /// Import already buffered table text. Malformed rows are skipped and
    /// reported; nothing here aborts the load.
    pub fn load_bytes(&self, data: &[u8], graph: &mut InteractionGraph) -> ImportReport {
        let mut report = ImportReport::default();
        let rows = parse_rows(data, &mut report);

        for row in rows {
            if let Err(e) = self.apply(graph, &row, &mut report) {
                report.skip(row.line, e.to_string());
            }
        }
        report
    }

    fn apply(
        &self,
        graph: &mut InteractionGraph,
        row: &Row,
        report: &mut ImportReport,
    ) -> GraphResult<()> {
        for endpoint in [&row.origin, &row.destination] {
            if graph.contains_protein(endpoint) {
                continue;
            }
            match self.policy {
                EndpointPolicy::Strict => {
                    return Err(GraphError::MissingEndpoint(endpoint.clone()));
                }
                EndpointPolicy::AutoCreate => {
                    // A self-interaction row must not create its protein.
                    if row.origin == row.destination {
                        return Err(GraphError::SelfInteraction(endpoint.clone()));
                    }
                    graph.add_protein(endpoint)?;
                    report.proteins_created += 1;
                }
            }
        }
        graph.add_interaction(&row.origin, &row.destination, row.weight)?;
        report.interactions_added += 1;
        Ok(())
    }
}

/// Decode every data row, recording malformed ones in `report`.
fn parse_rows(data: &[u8], report: &mut ImportReport) -> Vec<Row> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(data);

    let mut rows = Vec::new();
    for (i, record) in reader.records().enumerate() {
        // A first line other than the header is taken as data.
        if i == 0 {
            match &record {
                Ok(first) if first.iter().eq(CSV_HEADER) => continue,
                Ok(first) => log::warn!("no header line, reading {:?} as data", first),
                Err(_) => {}
            }
        }
        report.rows_read += 1;
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                let line = e.position().map(|p| p.line()).unwrap_or(0);
                report.skip(line, e.to_string());
                continue;
            }
        };
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        match parse_row(&record, line) {
            Ok(row) => rows.push(row),
            Err(e) => report.skip(line, malformed_reason(e)),
        }
    }
    rows
}

fn parse_row(record: &csv::StringRecord, line: u64) -> GraphResult<Row> {
    if record.len() != 3 {
        return Err(GraphError::MalformedRow {
            line,
            reason: format!("expected 3 fields, found {}", record.len()),
        });
    }
    let origin = &record[0];
    let destination = &record[1];
    if origin.is_empty() || destination.is_empty() {
        return Err(GraphError::MalformedRow {
            line,
            reason: "empty protein name".to_string(),
        });
    }
    let weight: f64 = record[2].parse().map_err(|_| GraphError::MalformedRow {
        line,
        reason: format!("weight {:?} is not a number", &record[2]),
    })?;
    let weight = validate_weight(weight)?;

    Ok(Row {
        line,
        origin: origin.to_string(),
        destination: destination.to_string(),
        weight,
    })
}

fn malformed_reason(error: GraphError) -> String {
    match error {
        GraphError::MalformedRow { reason, .. } => reason,
        other => other.to_string(),
    }
}
