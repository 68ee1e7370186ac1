//! Fluent API for building InteractionGraph instances.

use crate::types::GraphResult;

use super::InteractionGraph;

/// Fluent builder for constructing an InteractionGraph.
///
/// Proteins named by an interaction are created on demand. Errors (self
/// interactions, duplicate pairs, bad weights) surface from [`build`](Self::build).
#[derive(Default)]
pub struct GraphBuilder {
    proteins: Vec<String>,
    interactions: Vec<(String, String, f64)>,
    inactive: Vec<(String, String)>,
}

impl GraphBuilder {
    /// Create a new, empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a protein (possibly isolated).
    pub fn protein(&mut self, name: &str) -> &mut Self {
        if !self.proteins.iter().any(|p| p == name) {
            self.proteins.push(name.to_string());
        }
        self
    }

    /// Add an interaction, creating missing endpoints.
    pub fn interaction(&mut self, origin: &str, destination: &str, weight: f64) -> &mut Self {
        self.protein(origin);
        self.protein(destination);
        self.interactions
            .push((origin.to_string(), destination.to_string(), weight));
        self
    }

    /// Mark a previously added interaction as inactive.
    pub fn inactive(&mut self, a: &str, b: &str) -> &mut Self {
        self.inactive.push((a.to_string(), b.to_string()));
        self
    }

    /// Build the final InteractionGraph.
    pub fn build(&self) -> GraphResult<InteractionGraph> {
        let mut graph = InteractionGraph::new();
        for name in &self.proteins {
            graph.add_protein(name)?;
        }
        for (origin, destination, weight) in &self.interactions {
            graph.add_interaction(origin, destination, *weight)?;
        }
        for (a, b) in &self.inactive {
            graph.deactivate_interaction(a, b)?;
        }
        Ok(graph)
    }
}
