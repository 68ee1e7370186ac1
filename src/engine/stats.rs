//! One-shot summary of a graph.

use serde::Serialize;

use crate::graph::InteractionGraph;

use super::components::ComponentFinder;
use super::hubs::{Hub, HubRanker};

/// Headline numbers for an interaction network.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphStats {
    /// Number of proteins.
    pub proteins: usize,
    /// Number of interactions, active or not.
    pub interactions: usize,
    /// Number of active interactions.
    pub active_interactions: usize,
    /// Number of complexes (components of two or more proteins).
    pub complexes: usize,
    /// Active interactions over possible pairs.
    pub density: f64,
    /// Most connected protein, if any.
    pub main_hub: Option<Hub>,
}

impl GraphStats {
    /// Compute the summary for `graph`.
    pub fn collect(graph: &InteractionGraph) -> Self {
        Self {
            proteins: graph.protein_count(),
            interactions: graph.interaction_count(),
            active_interactions: graph.active_interaction_count(),
            complexes: ComponentFinder::new().find(graph).len(),
            density: graph.density(),
            main_hub: HubRanker::new().main_hub(graph),
        }
    }
}

impl std::fmt::Display for GraphStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Proteins: {} | Interactions: {} | Main hub: ",
            self.proteins, self.interactions
        )?;
        match &self.main_hub {
            Some(hub) => write!(f, "{} (degree {})", hub.protein, hub.degree),
            None => write!(f, "none (degree 0)"),
        }
    }
}
