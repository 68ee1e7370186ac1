//! Query executor running read-only analyses over a graph.

use crate::config::BioConfig;
use crate::graph::InteractionGraph;
use crate::types::ShortestPath;

use super::components::{Complex, ComponentFinder};
use super::hubs::{Hub, HubRanker};
use super::shortest_path::{ShortestPathSolver, SolverStrategy};
use super::stats::GraphStats;

/// The query engine bundles every analysis. It only borrows the graph for
/// the duration of each call and never mutates it.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryEngine {
    components: ComponentFinder,
    solver: ShortestPathSolver,
    hubs: HubRanker,
}

impl QueryEngine {
    /// Create a new query engine with the given shortest-path strategy.
    pub fn new(strategy: SolverStrategy) -> Self {
        Self {
            components: ComponentFinder::new(),
            solver: ShortestPathSolver::new(strategy),
            hubs: HubRanker::new(),
        }
    }

    /// Create a query engine from configuration.
    pub fn from_config(config: &BioConfig) -> Self {
        Self::new(config.solver)
    }

    /// Protein complexes (components with at least one interaction).
    pub fn complexes(&self, graph: &InteractionGraph) -> Vec<Complex> {
        self.components.find(graph)
    }

    /// Cheapest route between two proteins.
    pub fn shortest_path(
        &self,
        graph: &InteractionGraph,
        origin: &str,
        destination: &str,
    ) -> ShortestPath {
        self.solver.solve(graph, origin, destination)
    }

    /// The `top_n` most connected proteins.
    pub fn hubs(&self, graph: &InteractionGraph, top_n: usize) -> Vec<Hub> {
        self.hubs.rank(graph, top_n)
    }

    /// Summary numbers for the graph.
    pub fn stats(&self, graph: &InteractionGraph) -> GraphStats {
        GraphStats::collect(graph)
    }
}
