//! Minimum-cost routes between proteins over active interactions.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use serde::{Deserialize, Serialize};

use crate::graph::InteractionGraph;
use crate::types::ShortestPath;

/// How the next protein to finalise is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolverStrategy {
    /// Scan every protein for the minimum tentative distance: O(V² + E).
    #[default]
    LinearScan,
    /// Pop the minimum from a binary heap: O((V + E) log V).
    BinaryHeap,
}

impl SolverStrategy {
    /// Parse a strategy name ("linear_scan" / "binary_heap").
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().replace('-', "_").as_str() {
            "linear_scan" | "linear" => Some(Self::LinearScan),
            "binary_heap" | "heap" => Some(Self::BinaryHeap),
            _ => None,
        }
    }
}

/// Single-source shortest path with full route reconstruction.
///
/// Both strategies finalise proteins in the same order (smallest distance,
/// then earliest inserted), so they return identical distances and paths.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestPathSolver {
    strategy: SolverStrategy,
}

/// Heap entry ordered so that `BinaryHeap` pops the smallest
/// (distance, protein index) first.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    distance: f64,
    index: usize,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.index.cmp(&self.index))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Per-query working state, indexed by protein position.
struct Search<'a> {
    names: Vec<&'a str>,
    index: HashMap<&'a str, usize>,
    dist: Vec<f64>,
    prev: Vec<Option<usize>>,
    done: Vec<bool>,
}

impl<'a> Search<'a> {
    fn new(graph: &'a InteractionGraph) -> Self {
        let names: Vec<&str> = graph.proteins().map(String::as_str).collect();
        let index = names.iter().enumerate().map(|(i, &n)| (n, i)).collect();
        let n = names.len();
        Self {
            names,
            index,
            dist: vec![f64::INFINITY; n],
            prev: vec![None; n],
            done: vec![false; n],
        }
    }

    /// Relax every active interaction leaving `u`; returns the improved proteins.
    fn relax(&mut self, graph: &'a InteractionGraph, u: usize) -> Vec<usize> {
        let mut improved = Vec::new();
        for (neighbor, weight) in graph.active_neighbors(self.names[u]) {
            let Some(&v) = self.index.get(neighbor) else {
                continue;
            };
            if self.done[v] {
                continue;
            }
            let candidate = self.dist[u] + weight;
            if candidate < self.dist[v] {
                self.dist[v] = candidate;
                self.prev[v] = Some(u);
                improved.push(v);
            }
        }
        improved
    }

    /// Walk predecessors back from `target` and reverse.
    fn route(&self, source: usize, target: usize) -> ShortestPath {
        if !self.dist[target].is_finite() {
            return ShortestPath::Unreachable;
        }
        let mut path = vec![self.names[target].to_string()];
        let mut cursor = target;
        while cursor != source {
            match self.prev[cursor] {
                Some(p) => {
                    path.push(self.names[p].to_string());
                    cursor = p;
                }
                None => return ShortestPath::Unreachable,
            }
        }
        path.reverse();
        ShortestPath::Found {
            distance: self.dist[target],
            path,
        }
    }
}

impl ShortestPathSolver {
    /// Create a solver using `strategy`.
    pub fn new(strategy: SolverStrategy) -> Self {
        Self { strategy }
    }

    /// The selection strategy in use.
    pub fn strategy(&self) -> SolverStrategy {
        self.strategy
    }

    /// Cheapest route from `origin` to `destination`.
    ///
    /// Unknown proteins and disconnected pairs give [`ShortestPath::Unreachable`];
    /// `origin == destination` gives a one-protein path of distance 0.
    pub fn solve(
        &self,
        graph: &InteractionGraph,
        origin: &str,
        destination: &str,
    ) -> ShortestPath {
        let mut search = Search::new(graph);
        let (Some(&source), Some(&target)) =
            (search.index.get(origin), search.index.get(destination))
        else {
            log::debug!("shortest path {origin:?} -> {destination:?}: unknown protein");
            return ShortestPath::Unreachable;
        };
        if source == target {
            return ShortestPath::Found {
                distance: 0.0,
                path: vec![origin.to_string()],
            };
        }

        search.dist[source] = 0.0;
        match self.strategy {
            SolverStrategy::LinearScan => Self::run_linear(graph, &mut search, target),
            SolverStrategy::BinaryHeap => Self::run_heap(graph, &mut search, source, target),
        }

        let result = search.route(source, target);
        log::debug!("shortest path {origin:?} -> {destination:?}: {result}");
        result
    }

    fn run_linear<'a>(graph: &'a InteractionGraph, search: &mut Search<'a>, target: usize) {
        loop {
            let mut next: Option<usize> = None;
            let mut best = f64::INFINITY;
            for (i, &d) in search.dist.iter().enumerate() {
                if !search.done[i] && d < best {
                    best = d;
                    next = Some(i);
                }
            }
            let Some(u) = next else {
                break;
            };
            search.done[u] = true;
            if u == target {
                break;
            }
            search.relax(graph, u);
        }
    }

    fn run_heap<'a>(
        graph: &'a InteractionGraph,
        search: &mut Search<'a>,
        source: usize,
        target: usize,
    ) {
        let mut heap = BinaryHeap::new();
        heap.push(Candidate {
            distance: 0.0,
            index: source,
        });

        while let Some(Candidate { distance, index: u }) = heap.pop() {
            if search.done[u] || distance > search.dist[u] {
                continue;
            }
            search.done[u] = true;
            if u == target {
                break;
            }
            for v in search.relax(graph, u) {
                heap.push(Candidate {
                    distance: search.dist[v],
                    index: v,
                });
            }
        }
    }
}
