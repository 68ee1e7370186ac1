//! In-memory interaction network and its traversals.

pub mod builder;
pub mod interaction_graph;
pub mod traversal;

pub use builder::GraphBuilder;
pub use interaction_graph::InteractionGraph;
pub use traversal::{bfs_traverse, reachable_from};
