//! Result type of a shortest-path query.

use serde::Serialize;

/// Outcome of a shortest-path query between two proteins.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ShortestPath {
    /// A path exists.
    Found {
        /// Sum of the interaction weights along `path`.
        distance: f64,
        /// Proteins from origin to destination, both inclusive.
        path: Vec<String>,
    },
    /// No active route joins the two proteins, or one of them is not in the graph.
    Unreachable,
}

impl ShortestPath {
    /// Total distance; `f64::INFINITY` when unreachable.
    pub fn distance(&self) -> f64 {
        match self {
            Self::Found { distance, .. } => *distance,
            Self::Unreachable => f64::INFINITY,
        }
    }

    /// Proteins along the path; empty when unreachable.
    pub fn path(&self) -> &[String] {
        match self {
            Self::Found { path, .. } => path,
            Self::Unreachable => &[],
        }
    }

    /// Whether a route was found.
    pub fn has_path(&self) -> bool {
        self.distance().is_finite() && !self.path().is_empty()
    }

    /// Number of interactions crossed.
    pub fn hops(&self) -> usize {
        self.path().len().saturating_sub(1)
    }
}

impl std::fmt::Display for ShortestPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Found { distance, path } => {
                write!(f, "{} (distance {distance:.2})", path.join(" -> "))
            }
            Self::Unreachable => write!(f, "unreachable"),
        }
    }
}
