//! biograph: protein-protein interaction networks.
//!
//! Models an interaction network as an undirected, weighted graph and answers
//! three structural questions over it: which proteins form complexes
//! (connected components), what is the cheapest route between two proteins,
//! and which proteins are the most connected hubs.
//!
//! The graph is single-threaded and owns all of its data. Analyses borrow it
//! read-only; hosts that share a graph across threads must serialise access.

pub mod cli;
pub mod collections;
pub mod config;
pub mod engine;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use collections::SequentialList;
pub use config::{BioConfig, EndpointPolicy};
pub use engine::{
    Complex, ComponentFinder, GraphStats, Hub, HubRanker, QueryEngine, ShortestPathSolver,
    SolverStrategy,
};
pub use format::{CsvReader, CsvWriter, ImportReport, SkippedRow};
pub use graph::{GraphBuilder, InteractionGraph};
pub use types::{GraphError, GraphResult, Interaction, Link, ShortestPath, CSV_HEADER};
