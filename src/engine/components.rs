//! Protein complexes as connected components of the active network.

use std::collections::HashSet;

use serde::Serialize;

use crate::graph::{bfs_traverse, InteractionGraph};

/// Smallest component reported as a complex. A complex needs at least one
/// interaction, so isolated proteins are never reported.
pub const MIN_COMPLEX_SIZE: usize = 2;

/// A group of proteins joined by active interactions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Complex {
    /// Members in breadth-first discovery order, seed first.
    pub proteins: Vec<String>,
}

impl Complex {
    /// Number of member proteins.
    pub fn len(&self) -> usize {
        self.proteins.len()
    }

    /// Whether the complex has no members (never true for reported complexes).
    pub fn is_empty(&self) -> bool {
        self.proteins.is_empty()
    }

    /// Whether `protein` belongs to this complex.
    pub fn contains(&self, protein: &str) -> bool {
        self.proteins.iter().any(|p| p == protein)
    }
}

/// Partitions a graph into complexes by breadth-first search.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComponentFinder;

impl ComponentFinder {
    /// Create a new component finder.
    pub fn new() -> Self {
        Self
    }

    /// Connected components with at least [`MIN_COMPLEX_SIZE`] proteins.
    ///
    /// Seeds are taken in protein insertion order, so the output order is
    /// deterministic for a given graph.
    pub fn find(&self, graph: &InteractionGraph) -> Vec<Complex> {
        let mut visited: HashSet<&str> = HashSet::with_capacity(graph.protein_count());
        let mut complexes = Vec::new();

        for seed in graph.proteins() {
            let members = bfs_traverse(graph, seed, &mut visited);
            if members.len() >= MIN_COMPLEX_SIZE {
                complexes.push(Complex {
                    proteins: members.into_iter().map(str::to_string).collect(),
                });
            }
        }

        log::debug!(
            "found {} complex(es) among {} protein(s)",
            complexes.len(),
            graph.protein_count()
        );
        complexes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;

    #[test]
    fn test_bfs_discovery_order() {
        let graph = GraphBuilder::new()
            .interaction("A", "C", 1.0)
            .interaction("A", "B", 1.0)
            .interaction("B", "D", 1.0)
            .build()
            .unwrap();
        let complexes = ComponentFinder::new().find(&graph);
        assert_eq!(complexes.len(), 1);
        assert_eq!(complexes[0].proteins, vec!["A", "B", "C", "D"]);
    }
}
