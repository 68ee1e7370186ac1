//! Core graph structure: proteins and interactions with an adjacency index.

use std::collections::{BTreeMap, HashMap};

use crate::collections::{Iter, SequentialList};
use crate::types::{validate_weight, GraphError, GraphResult, Interaction, Link};

/// Undirected, weighted protein-protein interaction network.
///
/// At most one interaction exists per unordered protein pair. Interactions
/// can be deactivated without being removed; traversals only follow active
/// ones.
#[derive(Debug, Clone, Default)]
pub struct InteractionGraph {
    /// Protein names in insertion order (the enumeration order of every query).
    proteins: SequentialList<String>,
    /// Every interaction, active or not, in insertion order.
    interactions: SequentialList<Interaction>,
    /// Adjacency index: protein -> neighbour -> link. Each interaction is
    /// mirrored under both endpoints; every protein has an entry.
    adjacency: HashMap<String, BTreeMap<String, Link>>,
}

impl InteractionGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of proteins.
    pub fn protein_count(&self) -> usize {
        self.proteins.len()
    }

    /// Number of interactions, active or not.
    pub fn interaction_count(&self) -> usize {
        self.interactions.len()
    }

    /// Number of active interactions.
    pub fn active_interaction_count(&self) -> usize {
        self.interactions.iter().filter(|i| i.active).count()
    }

    /// Whether the graph has no proteins.
    pub fn is_empty(&self) -> bool {
        self.proteins.is_empty()
    }

    /// Whether `name` is a protein in the graph.
    pub fn contains_protein(&self, name: &str) -> bool {
        self.adjacency.contains_key(name)
    }

    /// All proteins, in insertion order.
    pub fn proteins(&self) -> Iter<'_, String> {
        self.proteins.iter()
    }

    /// All interactions including inactive ones, in insertion order.
    pub fn interactions(&self) -> Iter<'_, Interaction> {
        self.interactions.iter()
    }

    /// Look up the interaction joining `a` and `b`, in either order.
    pub fn interaction(&self, a: &str, b: &str) -> Option<&Interaction> {
        if !self.has_link(a, b) {
            return None;
        }
        self.interactions.iter().find(|i| i.connects(a, b))
    }

    /// Every interaction touching `protein`, active or not.
    pub fn interactions_of(&self, protein: &str) -> Vec<&Interaction> {
        self.interactions
            .iter()
            .filter(|i| i.touches(protein))
            .collect()
    }

    /// Add a protein. Fails if the name is already present.
    pub fn add_protein(&mut self, name: &str) -> GraphResult<()> {
        if self.contains_protein(name) {
            return Err(GraphError::DuplicateProtein(name.to_string()));
        }
        self.proteins.push_back(name.to_string());
        self.adjacency.insert(name.to_string(), BTreeMap::new());
        log::debug!("added protein {name:?}");
        Ok(())
    }

    /// Remove a protein and every interaction touching it.
    /// Returns the number of interactions removed with it.
    pub fn remove_protein(&mut self, name: &str) -> GraphResult<usize> {
        let links = self
            .adjacency
            .remove(name)
            .ok_or_else(|| GraphError::ProteinNotFound(name.to_string()))?;

        for neighbor in links.keys() {
            if let Some(back) = self.adjacency.get_mut(neighbor) {
                back.remove(name);
            }
        }
        let removed = self.interactions.retain(|i| !i.touches(name));
        self.proteins.remove(&name.to_string());

        log::debug!("removed protein {name:?} and {removed} interaction(s)");
        Ok(removed)
    }

    /// Add an active interaction between two existing, distinct proteins.
    pub fn add_interaction(
        &mut self,
        origin: &str,
        destination: &str,
        weight: f64,
    ) -> GraphResult<()> {
        for endpoint in [origin, destination] {
            if !self.contains_protein(endpoint) {
                return Err(GraphError::MissingEndpoint(endpoint.to_string()));
            }
        }
        if origin == destination {
            return Err(GraphError::SelfInteraction(origin.to_string()));
        }
        if self.has_link(origin, destination) {
            return Err(GraphError::DuplicateInteraction {
                origin: origin.to_string(),
                destination: destination.to_string(),
            });
        }
        let weight = validate_weight(weight)?;

        let interaction = Interaction::new(origin, destination, weight);
        self.mirror_link(origin, destination, interaction.link());
        self.interactions.push_back(interaction);

        log::debug!("added interaction {origin:?} -- {destination:?} ({weight})");
        Ok(())
    }

    /// Delete the interaction joining `a` and `b` outright.
    pub fn remove_interaction(&mut self, a: &str, b: &str) -> GraphResult<Interaction> {
        if !self.has_link(a, b) {
            return Err(Self::interaction_not_found(a, b));
        }
        let probe = Interaction::new(a, b, 0.0);
        let removed = self
            .interactions
            .find(&probe)
            .cloned()
            .ok_or_else(|| Self::interaction_not_found(a, b))?;
        self.interactions.remove(&probe);
        for (from, to) in [(a, b), (b, a)] {
            if let Some(links) = self.adjacency.get_mut(from) {
                links.remove(to);
            }
        }

        log::debug!("removed interaction {a:?} -- {b:?}");
        Ok(removed)
    }

    /// Switch an interaction on or off without deleting it.
    pub fn set_interaction_active(&mut self, a: &str, b: &str, active: bool) -> GraphResult<()> {
        let interaction = self
            .interactions
            .find_mut_by(|i| i.connects(a, b))
            .ok_or_else(|| Self::interaction_not_found(a, b))?;
        interaction.active = active;
        let link = interaction.link();
        self.mirror_link(a, b, link);

        log::debug!(
            "{} interaction {a:?} -- {b:?}",
            if active { "activated" } else { "deactivated" }
        );
        Ok(())
    }

    /// Exclude an interaction from traversals, keeping it in the graph.
    pub fn deactivate_interaction(&mut self, a: &str, b: &str) -> GraphResult<()> {
        self.set_interaction_active(a, b, false)
    }

    /// Make a deactivated interaction traversable again.
    pub fn activate_interaction(&mut self, a: &str, b: &str) -> GraphResult<()> {
        self.set_interaction_active(a, b, true)
    }

    /// Active neighbours of `protein` with the weight of each interaction,
    /// in name order. Empty for unknown proteins.
    pub fn active_neighbors<'a>(
        &'a self,
        protein: &str,
    ) -> impl Iterator<Item = (&'a str, f64)> + 'a {
        self.adjacency
            .get(protein)
            .into_iter()
            .flat_map(|links| links.iter())
            .filter(|(_, link)| link.active)
            .map(|(name, link)| (name.as_str(), link.weight))
    }

    /// Active neighbours of `protein` mapped to interaction weight.
    pub fn neighbors_of(&self, protein: &str) -> HashMap<String, f64> {
        self.active_neighbors(protein)
            .map(|(name, weight)| (name.to_string(), weight))
            .collect()
    }

    /// Number of active interactions touching `protein`; 0 for unknown proteins.
    pub fn degree_of(&self, protein: &str) -> usize {
        self.active_neighbors(protein).count()
    }

    /// Active interactions over possible pairs: 2m / (n * (n - 1)).
    pub fn density(&self) -> f64 {
        let n = self.protein_count() as f64;
        if n <= 1.0 {
            return 0.0;
        }
        2.0 * self.active_interaction_count() as f64 / (n * (n - 1.0))
    }

    /// Remove every protein and interaction.
    pub fn clear(&mut self) {
        self.proteins.clear();
        self.interactions.clear();
        self.adjacency.clear();
    }

    fn has_link(&self, a: &str, b: &str) -> bool {
        self.adjacency
            .get(a)
            .is_some_and(|links| links.contains_key(b))
    }

    fn mirror_link(&mut self, a: &str, b: &str, link: Link) {
        for (from, to) in [(a, b), (b, a)] {
            if let Some(links) = self.adjacency.get_mut(from) {
                links.insert(to.to_string(), link);
            }
        }
    }

    fn interaction_not_found(a: &str, b: &str) -> GraphError {
        GraphError::InteractionNotFound {
            origin: a.to_string(),
            destination: b.to_string(),
        }
    }
}
