//! Error types for the biograph library.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can occur in the biograph library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A protein with this name already exists.
    #[error("Protein {0:?} already exists")]
    DuplicateProtein(String),

    /// An interaction already exists for this unordered pair.
    #[error("Interaction {origin:?} -- {destination:?} already exists")]
    DuplicateInteraction { origin: String, destination: String },

    /// Origin and destination are the same protein.
    #[error("Self-interaction not allowed on protein {0:?}")]
    SelfInteraction(String),

    /// An interaction names a protein that is not in the graph.
    #[error("Interaction endpoint {0:?} is not a protein in the graph")]
    MissingEndpoint(String),

    /// Protein not found by name.
    #[error("Protein {0:?} not found")]
    ProteinNotFound(String),

    /// No interaction between the two proteins.
    #[error("Interaction {origin:?} -- {destination:?} not found")]
    InteractionNotFound { origin: String, destination: String },

    /// Positional access past the end of a list.
    #[error("Index {index} out of range for list of length {len}")]
    InvalidIndex { index: usize, len: usize },

    /// Interaction weight is negative, not a number or above `MAX_WEIGHT`.
    #[error("Interaction weight must be a non-negative number up to 1e100: {0}")]
    InvalidWeight(f64),

    /// A row of an interaction file could not be used.
    #[error("Malformed row at line {line}: {reason}")]
    MalformedRow { line: u64, reason: String },

    /// A file with skipped rows would lose them if rewritten.
    #[error("Refusing to rewrite {}: {skipped} row(s) could not be read", .path.display())]
    UnreadableRows { path: PathBuf, skipped: usize },

    /// The selected file is not a .csv file.
    #[error("Not a .csv file: {}", .0.display())]
    NotCsv(PathBuf),

    /// Configuration could not be read or parsed.
    #[error("Config error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV encoding or decoding error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Convenience result type for biograph operations.
pub type GraphResult<T> = Result<T, GraphError>;
