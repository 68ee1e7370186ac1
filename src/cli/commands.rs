//! CLI command implementations.

use std::path::Path;

use crate::config::BioConfig;
use crate::engine::{HubRanker, QueryEngine};
use crate::format::{ensure_csv_path, CsvReader, CsvWriter, ImportReport};
use crate::graph::InteractionGraph;
use crate::types::{GraphError, GraphResult};

/// Load an interaction file, reporting skipped rows on stderr.
pub fn load_graph(
    path: &Path,
    config: &BioConfig,
) -> GraphResult<(InteractionGraph, ImportReport)> {
    ensure_csv_path(path)?;
    let reader = CsvReader::new(config.endpoint_policy);
    let (graph, report) = reader.read_from_file(path)?;
    for row in &report.skipped {
        eprintln!("Skipped line {}: {}", row.line, row.reason);
    }
    Ok((graph, report))
}

/// Load a file that is about to be rewritten in place. Fails if any row was
/// skipped, since saving would drop those rows from the file.
pub fn load_for_rewrite(path: &Path, config: &BioConfig) -> GraphResult<InteractionGraph> {
    let (graph, report) = load_graph(path, config)?;
    if !report.is_clean() {
        return Err(GraphError::UnreadableRows {
            path: path.to_path_buf(),
            skipped: report.skipped.len(),
        });
    }
    Ok(graph)
}

/// Write the graph back to an interaction file.
pub fn save_graph(
    graph: &InteractionGraph,
    path: &Path,
    config: &BioConfig,
) -> GraphResult<usize> {
    ensure_csv_path(path)?;
    CsvWriter::new(config.weight_precision).write_to_file(graph, path)
}

/// Soft-delete the given interactions for the duration of a query.
pub fn apply_deactivations(
    graph: &mut InteractionGraph,
    deactivate: &[(String, String)],
) -> GraphResult<()> {
    for (a, b) in deactivate {
        graph.deactivate_interaction(a, b)?;
    }
    Ok(())
}

fn print_json(value: &serde_json::Value) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

/// Display summary statistics.
pub fn cmd_stats(path: &Path, config: &BioConfig, json: bool) -> GraphResult<()> {
    let (graph, report) = load_graph(path, config)?;
    let stats = QueryEngine::from_config(config).stats(&graph);

    if json {
        print_json(&serde_json::json!({
            "file": path.display().to_string(),
            "stats": stats,
            "import": report,
        }));
    } else {
        println!("File: {}", path.display());
        println!("{stats}");
        println!("Active interactions: {}", stats.active_interactions);
        println!("Complexes: {}", stats.complexes);
        println!("Density: {:.4}", stats.density);
        if !report.is_clean() {
            println!("Skipped rows: {}", report.skipped.len());
        }
    }
    Ok(())
}

/// List every protein with its degree.
pub fn cmd_proteins(path: &Path, config: &BioConfig, json: bool) -> GraphResult<()> {
    let (graph, _) = load_graph(path, config)?;
    let degrees = HubRanker::new().degrees(&graph);

    if json {
        print_json(&serde_json::json!(degrees));
    } else {
        for hub in &degrees {
            println!("{hub}");
        }
        println!("{} protein(s)", degrees.len());
    }
    Ok(())
}

/// Show the active neighbours of one protein.
pub fn cmd_neighbors(
    path: &Path,
    protein: &str,
    config: &BioConfig,
    json: bool,
) -> GraphResult<()> {
    let (graph, _) = load_graph(path, config)?;
    if !graph.contains_protein(protein) {
        return Err(GraphError::ProteinNotFound(protein.to_string()));
    }
    let neighbors: Vec<(&str, f64)> = graph.active_neighbors(protein).collect();

    if json {
        let items: Vec<serde_json::Value> = neighbors
            .iter()
            .map(|(name, weight)| serde_json::json!({"protein": name, "weight": weight}))
            .collect();
        print_json(&serde_json::json!({"protein": protein, "neighbors": items}));
    } else {
        println!("{protein} ({} neighbours)", neighbors.len());
        for (name, weight) in neighbors {
            println!("  {name} ({weight:.2})");
        }
    }
    Ok(())
}

/// List protein complexes.
pub fn cmd_complexes(
    path: &Path,
    deactivate: &[(String, String)],
    config: &BioConfig,
    json: bool,
) -> GraphResult<()> {
    let (mut graph, _) = load_graph(path, config)?;
    apply_deactivations(&mut graph, deactivate)?;
    let complexes = QueryEngine::from_config(config).complexes(&graph);

    if json {
        print_json(&serde_json::json!(complexes));
    } else if complexes.is_empty() {
        println!("No complexes found");
    } else {
        for (i, complex) in complexes.iter().enumerate() {
            println!(
                "Complex {} ({} proteins): {}",
                i + 1,
                complex.len(),
                complex.proteins.join(", ")
            );
        }
    }
    Ok(())
}

/// Find the cheapest route between two proteins.
pub fn cmd_path(
    path: &Path,
    origin: &str,
    destination: &str,
    deactivate: &[(String, String)],
    config: &BioConfig,
    json: bool,
) -> GraphResult<()> {
    let (mut graph, _) = load_graph(path, config)?;
    apply_deactivations(&mut graph, deactivate)?;
    let result = QueryEngine::from_config(config).shortest_path(&graph, origin, destination);

    if json {
        print_json(&serde_json::json!({
            "origin": origin,
            "destination": destination,
            "result": result,
        }));
    } else if result.has_path() {
        println!("Route: {}", result.path().join(" -> "));
        println!("Distance: {:.2}", result.distance());
        println!("Hops: {}", result.hops());
    } else {
        println!("No route from {origin} to {destination}");
    }
    Ok(())
}

/// Rank the most connected proteins.
pub fn cmd_hubs(
    path: &Path,
    top: Option<usize>,
    deactivate: &[(String, String)],
    config: &BioConfig,
    json: bool,
) -> GraphResult<()> {
    let (mut graph, _) = load_graph(path, config)?;
    apply_deactivations(&mut graph, deactivate)?;
    let top_n = top.unwrap_or(config.default_top_n);
    let hubs = QueryEngine::from_config(config).hubs(&graph, top_n);

    if json {
        print_json(&serde_json::json!(hubs));
    } else {
        for (i, hub) in hubs.iter().enumerate() {
            println!("{}. {hub}", i + 1);
        }
    }
    Ok(())
}

/// Add an interaction and save the file.
pub fn cmd_link(
    path: &Path,
    origin: &str,
    destination: &str,
    weight: f64,
    config: &BioConfig,
    json: bool,
) -> GraphResult<()> {
    let mut graph = load_for_rewrite(path, config)?;
    for endpoint in [origin, destination] {
        if !graph.contains_protein(endpoint) {
            graph.add_protein(endpoint)?;
        }
    }
    graph.add_interaction(origin, destination, weight)?;
    save_graph(&graph, path, config)?;

    if json {
        print_json(&serde_json::json!({"linked": [origin, destination], "weight": weight}));
    } else {
        println!("Linked {origin} -- {destination} ({weight:.2}) in {}", path.display());
    }
    Ok(())
}

/// Delete an interaction and save the file.
pub fn cmd_unlink(
    path: &Path,
    origin: &str,
    destination: &str,
    config: &BioConfig,
    json: bool,
) -> GraphResult<()> {
    let mut graph = load_for_rewrite(path, config)?;
    let removed = graph.remove_interaction(origin, destination)?;
    save_graph(&graph, path, config)?;

    if json {
        print_json(&serde_json::json!({"unlinked": removed}));
    } else {
        println!("Unlinked {origin} -- {destination} in {}", path.display());
    }
    Ok(())
}

/// Delete a protein with its interactions and save the file.
pub fn cmd_remove(path: &Path, protein: &str, config: &BioConfig, json: bool) -> GraphResult<()> {
    let mut graph = load_for_rewrite(path, config)?;
    let removed = graph.remove_protein(protein)?;
    save_graph(&graph, path, config)?;

    if json {
        print_json(&serde_json::json!({"removed": protein, "interactions_removed": removed}));
    } else {
        println!(
            "Removed {protein} and {removed} interaction(s) from {}",
            path.display()
        );
    }
    Ok(())
}

/// Re-export a file in normalised form (sorted endpoints, fixed decimals).
pub fn cmd_export(path: &Path, output: &Path, config: &BioConfig) -> GraphResult<()> {
    let (graph, _) = load_graph(path, config)?;
    let rows = save_graph(&graph, output, config)?;
    println!("Exported {rows} interaction(s) to {}", output.display());
    Ok(())
}
