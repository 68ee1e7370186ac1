//! Phase 3 tests: Interaction files, configuration and CLI helpers.

use std::io::Cursor;
use std::io::Write;

use biograph::cli::commands;
use biograph::config::{self, BioConfig, EndpointPolicy};
use biograph::engine::{ComponentFinder, ShortestPathSolver};
use biograph::format::{ensure_csv_path, CsvReader, CsvWriter};
use biograph::graph::{GraphBuilder, InteractionGraph};
use biograph::types::GraphError;

use tempfile::TempDir;

const SAMPLE: &str = "\
ProteinA,ProteinB,CostoInteraccion
TP53,MDM2,0.5
MDM2,CDKN1A,1.25
BRCA1,BARD1,2
";

fn write_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(content.as_bytes()).unwrap();
    path
}

fn export_to_string(graph: &InteractionGraph) -> String {
    let mut buf = Vec::new();
    CsvWriter::default().write_to(graph, &mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

// ==================== Import Tests ====================

#[test]
fn test_import_creates_proteins_in_first_seen_order() {
    let mut graph = InteractionGraph::new();
    let report = CsvReader::default().load_bytes(SAMPLE.as_bytes(), &mut graph);

    assert!(report.is_clean());
    assert_eq!(report.rows_read, 3);
    assert_eq!(report.interactions_added, 3);
    assert_eq!(report.proteins_created, 5);
    let names: Vec<&str> = graph.proteins().map(String::as_str).collect();
    assert_eq!(names, vec!["TP53", "MDM2", "CDKN1A", "BRCA1", "BARD1"]);
    assert_eq!(graph.neighbors_of("MDM2").get("CDKN1A"), Some(&1.25));
}

#[test]
fn test_import_skips_malformed_rows() {
    let data = "\
ProteinA,ProteinB,CostoInteraccion
A,B,1.0
A,C
A,D,heavy
,E,1.0
F,G,-2
H,H,1.0
B,A,3.0
C,D,4.0
";
    let mut graph = InteractionGraph::new();
    let report = CsvReader::default().load_bytes(data.as_bytes(), &mut graph);

    assert_eq!(report.rows_read, 8);
    assert_eq!(report.interactions_added, 2);
    let lines: Vec<u64> = report.skipped.iter().map(|s| s.line).collect();
    assert_eq!(lines, vec![3, 4, 5, 6, 7, 8]);

    assert_eq!(graph.interaction_count(), 2);
    assert!(graph.interaction("A", "B").is_some());
    assert!(graph.interaction("C", "D").is_some());
    assert!(!graph.contains_protein("H"));
    assert!(!graph.contains_protein("F"));
    assert_eq!(graph.interaction("A", "B").unwrap().weight, 1.0);
}

#[test]
fn test_import_trims_whitespace() {
    let data = "ProteinA,ProteinB,CostoInteraccion\n  A , B ,  0.75 \n";
    let mut graph = InteractionGraph::new();
    let report = CsvReader::default().load_bytes(data.as_bytes(), &mut graph);
    assert!(report.is_clean());
    assert_eq!(graph.neighbors_of("A").get("B"), Some(&0.75));
}

#[test]
fn test_strict_policy_requires_known_proteins() {
    let mut graph = GraphBuilder::new().protein("A").protein("B").build().unwrap();
    let data = "ProteinA,ProteinB,CostoInteraccion\nA,B,1.0\nA,Z,1.0\n";
    let report = CsvReader::new(EndpointPolicy::Strict).load_bytes(data.as_bytes(), &mut graph);

    assert_eq!(report.interactions_added, 1);
    assert_eq!(report.proteins_created, 0);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].line, 3);
    assert!(!graph.contains_protein("Z"));
}

#[test]
fn test_import_merges_into_existing_graph() {
    let mut graph = GraphBuilder::new()
        .interaction("TP53", "MDM2", 9.0)
        .build()
        .unwrap();
    let report = CsvReader::default().load_bytes(SAMPLE.as_bytes(), &mut graph);

    // The existing TP53-MDM2 interaction wins; the row is reported as a duplicate.
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].line, 2);
    assert_eq!(graph.interaction("TP53", "MDM2").unwrap().weight, 9.0);
    assert_eq!(graph.interaction_count(), 3);
}

#[test]
fn test_file_without_header_reads_first_line_as_data() {
    let mut graph = InteractionGraph::new();
    let report = CsvReader::default().load_bytes(b"A,B,1.0\nC,D,2.0\n", &mut graph);

    assert!(report.is_clean());
    assert_eq!(report.rows_read, 2);
    assert_eq!(report.interactions_added, 2);
    assert!(graph.interaction("A", "B").is_some());
    assert!(graph.interaction("C", "D").is_some());
}

#[test]
fn test_strict_policy_reading_a_fresh_file_keeps_its_rows() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "net.csv", SAMPLE);
    let (graph, report) = CsvReader::new(EndpointPolicy::Strict)
        .read_from_file(&path)
        .unwrap();
    assert!(report.is_clean());
    assert_eq!(graph.interaction_count(), 3);
}

#[test]
fn test_header_only_file() {
    let mut graph = InteractionGraph::new();
    let report = CsvReader::default()
        .load_from(&mut Cursor::new("ProteinA,ProteinB,CostoInteraccion\n"), &mut graph)
        .unwrap();
    assert_eq!(report.rows_read, 0);
    assert!(graph.is_empty());
}

#[test]
fn test_missing_file_leaves_graph_unchanged() {
    let dir = TempDir::new().unwrap();
    let mut graph = GraphBuilder::new().interaction("A", "B", 1.0).build().unwrap();

    let result = CsvReader::default().load_file(&dir.path().join("missing.csv"), &mut graph);
    assert!(matches!(result, Err(GraphError::Io(_))));
    assert_eq!(graph.protein_count(), 2);
    assert_eq!(graph.interaction_count(), 1);
}

// ==================== Export Tests ====================

#[test]
fn test_export_header_and_normalised_rows() {
    let graph = GraphBuilder::new()
        .interaction("TP53", "MDM2", 0.5)
        .interaction("BRCA1", "BARD1", 2.0)
        .interaction("A", "B", 1.0 / 3.0)
        .build()
        .unwrap();
    let text = export_to_string(&graph);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            "ProteinA,ProteinB,CostoInteraccion",
            "MDM2,TP53,0.50",
            "BARD1,BRCA1,2.00",
            "A,B,0.33",
        ]
    );
}

#[test]
fn test_export_empty_graph_writes_header_only() {
    let text = export_to_string(&InteractionGraph::new());
    assert_eq!(text, "ProteinA,ProteinB,CostoInteraccion\n");
}

#[test]
fn test_export_includes_inactive_interactions() {
    let graph = GraphBuilder::new()
        .interaction("A", "B", 1.0)
        .interaction("B", "C", 1.0)
        .inactive("B", "C")
        .build()
        .unwrap();
    let text = export_to_string(&graph);
    assert!(text.contains("B,C,1.00"));

    let mut reloaded = InteractionGraph::new();
    CsvReader::default().load_bytes(text.as_bytes(), &mut reloaded);
    assert_eq!(reloaded.active_interaction_count(), 2);
}

#[test]
fn test_custom_precision() {
    let graph = GraphBuilder::new().interaction("A", "B", 1.23456).build().unwrap();
    let mut buf = Vec::new();
    CsvWriter::new(4).write_to(&graph, &mut buf).unwrap();
    assert!(String::from_utf8(buf).unwrap().contains("A,B,1.2346"));
}

#[test]
fn test_file_roundtrip_preserves_structure() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("network.csv");
    let graph = GraphBuilder::new()
        .interaction("A", "B", 1.0)
        .interaction("B", "C", 2.0)
        .interaction("A", "C", 5.0)
        .interaction("X", "Y", 0.25)
        .build()
        .unwrap();

    assert_eq!(CsvWriter::default().write_to_file(&graph, &path).unwrap(), 4);
    let (reloaded, report) = CsvReader::default().read_from_file(&path).unwrap();

    assert!(report.is_clean());
    assert_eq!(reloaded.protein_count(), graph.protein_count());
    assert_eq!(reloaded.interaction_count(), graph.interaction_count());
    for interaction in graph.interactions() {
        let copy = reloaded
            .interaction(&interaction.origin, &interaction.destination)
            .unwrap();
        assert_eq!(copy.weight, interaction.weight);
    }
    assert_eq!(
        ComponentFinder::new().find(&reloaded).len(),
        ComponentFinder::new().find(&graph).len()
    );
    assert_eq!(
        ShortestPathSolver::default().solve(&reloaded, "A", "C"),
        ShortestPathSolver::default().solve(&graph, "A", "C")
    );
}

#[test]
fn test_ensure_csv_path() {
    assert!(ensure_csv_path(std::path::Path::new("net.csv")).is_ok());
    assert!(ensure_csv_path(std::path::Path::new("NET.CSV")).is_ok());
    assert!(matches!(
        ensure_csv_path(std::path::Path::new("net.txt")),
        Err(GraphError::NotCsv(_))
    ));
    assert!(ensure_csv_path(std::path::Path::new("net")).is_err());
}

// ==================== Config Tests ====================

#[test]
fn test_load_config_file() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "biograph.toml",
        "endpoint_policy = \"strict\"\ndefault_top_n = 3\n",
    );
    let config = config::load_config(&path).unwrap();
    assert_eq!(config.endpoint_policy, EndpointPolicy::Strict);
    assert_eq!(config.default_top_n, 3);
    assert_eq!(config.weight_precision, 2);
}

#[test]
fn test_load_missing_config_file() {
    let dir = TempDir::new().unwrap();
    assert!(matches!(
        config::load_config(&dir.path().join("nope.toml")),
        Err(GraphError::Config(_))
    ));
}

#[test]
fn test_explicit_config_path_wins() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.toml");
    assert_eq!(config::resolve_config_path(Some(path.as_path())), Some(path.clone()));
}

// ==================== CLI Command Tests ====================

#[test]
fn test_cli_link_and_remove_rewrite_file() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "net.csv", SAMPLE);
    let config = BioConfig::default();

    commands::cmd_link(&path, "CDKN1A", "NEW1", 0.1, &config, true).unwrap();
    let (graph, _) = commands::load_graph(&path, &config).unwrap();
    assert_eq!(graph.interaction_count(), 4);
    assert_eq!(graph.neighbors_of("NEW1").get("CDKN1A"), Some(&0.1));

    commands::cmd_remove(&path, "MDM2", &config, true).unwrap();
    let (graph, _) = commands::load_graph(&path, &config).unwrap();
    assert!(!graph.contains_protein("MDM2"));
    assert_eq!(graph.interaction_count(), 2);
}

#[test]
fn test_cli_link_under_strict_policy_keeps_existing_rows() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "net.csv", "ProteinA,ProteinB,CostoInteraccion\nA,B,1.0\n");
    let config = BioConfig {
        endpoint_policy: EndpointPolicy::Strict,
        ..BioConfig::default()
    };

    commands::cmd_link(&path, "A", "C", 1.0, &config, true).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("A,B,1.00"));
    assert!(text.contains("A,C,1.00"));
}

#[test]
fn test_cli_refuses_to_rewrite_file_with_skipped_rows() {
    let dir = TempDir::new().unwrap();
    let original = "ProteinA,ProteinB,CostoInteraccion\nA,B,1.0\nA,C,1,5\nX,Y,notanumber\n";
    let path = write_file(&dir, "net.csv", original);
    let config = BioConfig::default();

    let results = [
        commands::cmd_link(&path, "B", "D", 2.0, &config, true),
        commands::cmd_unlink(&path, "A", "B", &config, true),
        commands::cmd_remove(&path, "A", &config, true),
    ];
    for result in results {
        match result {
            Err(e @ GraphError::UnreadableRows { skipped: 2, .. }) => {
                assert_eq!(biograph::cli::exit_code(&e), 2);
            }
            other => panic!("Expected UnreadableRows, got {:?}", other),
        }
    }
    assert_eq!(std::fs::read_to_string(&path).unwrap(), original);
}

#[test]
fn test_cli_rejects_non_csv_and_unknown_protein() {
    let dir = TempDir::new().unwrap();
    let txt = write_file(&dir, "net.txt", SAMPLE);
    let csv = write_file(&dir, "net.csv", SAMPLE);
    let config = BioConfig::default();

    assert!(matches!(
        commands::cmd_stats(&txt, &config, false),
        Err(GraphError::NotCsv(_))
    ));
    assert!(matches!(
        commands::cmd_neighbors(&csv, "NOPE", &config, false),
        Err(GraphError::ProteinNotFound(_))
    ));
    assert!(matches!(
        commands::cmd_complexes(&csv, &[("A".to_string(), "B".to_string())], &config, false),
        Err(GraphError::InteractionNotFound { .. })
    ));
}

#[test]
fn test_cli_export_normalises_file() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "in.csv", SAMPLE);
    let output = dir.path().join("out.csv");

    commands::cmd_export(&input, &output, &BioConfig::default()).unwrap();
    let text = std::fs::read_to_string(&output).unwrap();
    assert!(text.starts_with("ProteinA,ProteinB,CostoInteraccion\n"));
    assert!(text.contains("MDM2,TP53,0.50"));
    assert!(text.contains("BARD1,BRCA1,2.00"));
}
