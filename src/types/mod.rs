//! All data types for the biograph library.

pub mod error;
pub mod interaction;
pub mod path;

pub use error::{GraphError, GraphResult};
pub use interaction::{Interaction, Link};
pub use path::ShortestPath;

/// Header line of an interaction file.
pub const CSV_HEADER: [&str; 3] = ["ProteinA", "ProteinB", "CostoInteraccion"];

/// Decimals written for weights on export.
pub const DEFAULT_WEIGHT_PRECISION: usize = 2;

/// Number of hubs listed when no explicit count is given.
pub const DEFAULT_TOP_N: usize = 5;

/// Largest accepted interaction weight. Path sums over any graph that fits in
/// memory stay finite below this bound.
pub const MAX_WEIGHT: f64 = 1.0e100;

/// Reject weights that cannot serve as non-negative path costs.
pub fn validate_weight(weight: f64) -> GraphResult<f64> {
    if (0.0..=MAX_WEIGHT).contains(&weight) {
        Ok(weight)
    } else {
        Err(GraphError::InvalidWeight(weight))
    }
}
