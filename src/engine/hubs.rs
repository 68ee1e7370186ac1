//! Degree-based ranking of the most connected proteins.

use serde::Serialize;

use crate::graph::InteractionGraph;

/// A protein and its number of active interactions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hub {
    /// Protein name.
    pub protein: String,
    /// Active-interaction degree.
    pub degree: usize,
}

impl std::fmt::Display for Hub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} connections)", self.protein, self.degree)
    }
}

/// Ranks proteins by active degree.
#[derive(Debug, Clone, Copy, Default)]
pub struct HubRanker;

impl HubRanker {
    /// Create a new hub ranker.
    pub fn new() -> Self {
        Self
    }

    /// Degree of every protein, in insertion order.
    pub fn degrees(&self, graph: &InteractionGraph) -> Vec<Hub> {
        graph
            .proteins()
            .map(|p| Hub {
                protein: p.clone(),
                degree: graph.degree_of(p),
            })
            .collect()
    }

    /// The `top_n` proteins by descending degree. Ties keep insertion order.
    /// `top_n == 0` or a count above the protein total returns every protein.
    pub fn rank(&self, graph: &InteractionGraph, top_n: usize) -> Vec<Hub> {
        let mut hubs = self.degrees(graph);
        // Stable: equal degrees stay in insertion order.
        hubs.sort_by(|a, b| b.degree.cmp(&a.degree));

        let limit = if top_n == 0 { hubs.len() } else { top_n.min(hubs.len()) };
        hubs.truncate(limit);
        hubs
    }

    /// Highest-degree protein, earliest inserted on ties.
    pub fn main_hub(&self, graph: &InteractionGraph) -> Option<Hub> {
        self.rank(graph, 1).into_iter().next()
    }
}
