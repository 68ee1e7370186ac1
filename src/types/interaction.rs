//! The interaction record and its adjacency view.

use std::hash::{Hash, Hasher};

use serde::Serialize;

/// An undirected, weighted interaction between two distinct proteins.
///
/// Equality and hashing only look at the unordered endpoint pair, so
/// `A -- B` equals `B -- A` whatever their weights or activity.
#[derive(Debug, Clone, Serialize)]
pub struct Interaction {
    /// Protein named first when the interaction was created.
    pub origin: String,
    /// Protein named second when the interaction was created.
    pub destination: String,
    /// Cost of the interaction (non-negative).
    pub weight: f64,
    /// Inactive interactions stay in the graph but are skipped by traversals.
    pub active: bool,
}

impl Interaction {
    /// Create a new active interaction.
    pub fn new(origin: impl Into<String>, destination: impl Into<String>, weight: f64) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            weight,
            active: true,
        }
    }

    /// Whether this interaction joins `a` and `b`, in either order.
    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.origin == a && self.destination == b) || (self.origin == b && self.destination == a)
    }

    /// Whether `protein` is one of the endpoints.
    pub fn touches(&self, protein: &str) -> bool {
        self.origin == protein || self.destination == protein
    }

    /// The endpoint opposite `protein`, or `None` if `protein` is not an endpoint.
    pub fn other_end(&self, protein: &str) -> Option<&str> {
        if self.origin == protein {
            Some(&self.destination)
        } else if self.destination == protein {
            Some(&self.origin)
        } else {
            None
        }
    }

    /// Endpoints in lexicographic order.
    pub fn ordered_pair(&self) -> (&str, &str) {
        if self.origin <= self.destination {
            (&self.origin, &self.destination)
        } else {
            (&self.destination, &self.origin)
        }
    }

    /// The adjacency entry mirrored on both endpoints.
    pub fn link(&self) -> Link {
        Link {
            weight: self.weight,
            active: self.active,
        }
    }
}

impl PartialEq for Interaction {
    fn eq(&self, other: &Self) -> bool {
        self.connects(&other.origin, &other.destination)
    }
}

impl Eq for Interaction {}

impl Hash for Interaction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ordered_pair().hash(state);
    }
}

impl std::fmt::Display for Interaction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -- {} ({})", self.origin, self.destination, self.weight)?;
        if !self.active {
            write!(f, " [inactive]")?;
        }
        Ok(())
    }
}

/// Weight and activity of an interaction as seen from one endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Link {
    /// Cost of the interaction.
    pub weight: f64,
    /// Whether traversals may use it.
    pub active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_equality_is_symmetric() {
        let ab = Interaction::new("A", "B", 1.0);
        let ba = Interaction::new("B", "A", 7.5);
        assert_eq!(ab, ba);
        assert_ne!(ab, Interaction::new("A", "C", 1.0));
    }

    #[test]
    fn test_hash_matches_equality() {
        let mut set = HashSet::new();
        set.insert(Interaction::new("A", "B", 1.0));
        assert!(!set.insert(Interaction::new("B", "A", 2.0)));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_other_end() {
        let edge = Interaction::new("P53", "MDM2", 0.4);
        assert_eq!(edge.other_end("P53"), Some("MDM2"));
        assert_eq!(edge.other_end("MDM2"), Some("P53"));
        assert_eq!(edge.other_end("BRCA1"), None);
        assert_eq!(edge.ordered_pair(), ("MDM2", "P53"));
    }
}
