//! High-level analyses: complexes, shortest paths and hubs.

pub mod components;
pub mod hubs;
pub mod query;
pub mod shortest_path;
pub mod stats;

pub use components::{Complex, ComponentFinder, MIN_COMPLEX_SIZE};
pub use hubs::{Hub, HubRanker};
pub use query::QueryEngine;
pub use shortest_path::{ShortestPathSolver, SolverStrategy};
pub use stats::GraphStats;
