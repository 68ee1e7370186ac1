//! Criterion benchmarks for biograph.

use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;
use tempfile::NamedTempFile;

use biograph::engine::{ComponentFinder, HubRanker, ShortestPathSolver, SolverStrategy};
use biograph::format::{CsvReader, CsvWriter};
use biograph::graph::InteractionGraph;

/// Random network with `protein_count` proteins and about
/// `protein_count * links_per_protein` interactions.
fn make_graph(protein_count: usize, links_per_protein: usize) -> InteractionGraph {
    let mut rng = rand::thread_rng();
    let mut graph = InteractionGraph::new();
    for i in 0..protein_count {
        let _ = graph.add_protein(&format!("P{i}"));
    }
    for i in 0..protein_count {
        for _ in 0..links_per_protein {
            let target = rng.gen_range(0..protein_count);
            if target != i {
                let weight = rng.gen_range(0.1..10.0);
                let _ = graph.add_interaction(&format!("P{i}"), &format!("P{target}"), weight);
            }
        }
    }
    graph
}

fn bench_add_interaction(c: &mut Criterion) {
    let mut graph = make_graph(10_000, 2);

    c.bench_function("add_interaction_to_10k", |b| {
        let mut rng = rand::thread_rng();
        b.iter(|| {
            let origin = format!("P{}", rng.gen_range(0..10_000));
            let destination = format!("P{}", rng.gen_range(0..10_000));
            let _ = graph.add_interaction(&origin, &destination, 1.0);
        })
    });
}

fn bench_complexes(c: &mut Criterion) {
    let graph = make_graph(10_000, 1);
    let finder = ComponentFinder::new();

    c.bench_function("complexes_10k", |b| {
        b.iter(|| {
            let _ = finder.find(&graph);
        })
    });
}

fn bench_shortest_path(c: &mut Criterion) {
    let graph = make_graph(2_000, 3);

    for strategy in [SolverStrategy::LinearScan, SolverStrategy::BinaryHeap] {
        let solver = ShortestPathSolver::new(strategy);
        c.bench_function(&format!("shortest_path_2k_{strategy:?}"), |b| {
            let mut rng = rand::thread_rng();
            b.iter(|| {
                let origin = format!("P{}", rng.gen_range(0..2_000));
                let destination = format!("P{}", rng.gen_range(0..2_000));
                let _ = solver.solve(&graph, &origin, &destination);
            })
        });
    }
}

fn bench_hubs(c: &mut Criterion) {
    let graph = make_graph(10_000, 3);
    let ranker = HubRanker::new();

    c.bench_function("hubs_top10_10k", |b| {
        b.iter(|| {
            let _ = ranker.rank(&graph, 10);
        })
    });
}

fn bench_write_csv_10k(c: &mut Criterion) {
    let graph = make_graph(10_000, 3);
    let writer = CsvWriter::default();

    c.bench_function("write_csv_10k", |b| {
        b.iter(|| {
            let tmp = NamedTempFile::new().unwrap();
            writer.write_to_file(&graph, tmp.path()).unwrap();
        })
    });
}

fn bench_read_csv_10k(c: &mut Criterion) {
    let graph = make_graph(10_000, 3);
    let tmp = NamedTempFile::new().unwrap();
    CsvWriter::default().write_to_file(&graph, tmp.path()).unwrap();
    let reader = CsvReader::default();

    c.bench_function("read_csv_10k", |b| {
        b.iter(|| {
            let _ = reader.read_from_file(tmp.path()).unwrap();
        })
    });
}

criterion_group!(
    benches,
    bench_add_interaction,
    bench_complexes,
    bench_shortest_path,
    bench_hubs,
    bench_write_csv_10k,
    bench_read_csv_10k,
);
criterion_main!(benches);
