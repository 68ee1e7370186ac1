//! Command-line front end: file selection, commands and outcome reporting.

pub mod commands;

use crate::types::GraphError;

/// Process exit code for a failed command.
pub fn exit_code(error: &GraphError) -> i32 {
    match error {
        GraphError::Io(_) => 1,
        GraphError::MalformedRow { .. }
        | GraphError::UnreadableRows { .. }
        | GraphError::Csv(_)
        | GraphError::InvalidWeight(_) => 2,
        GraphError::NotCsv(_)
        | GraphError::Config(_)
        | GraphError::DuplicateProtein(_)
        | GraphError::DuplicateInteraction { .. }
        | GraphError::SelfInteraction(_)
        | GraphError::InvalidIndex { .. } => 3,
        GraphError::ProteinNotFound(_)
        | GraphError::InteractionNotFound { .. }
        | GraphError::MissingEndpoint(_) => 4,
    }
}

/// Parse an interaction given as `A:B`.
pub fn parse_pair(text: &str) -> Option<(String, String)> {
    let (a, b) = text.split_once(':')?;
    let (a, b) = (a.trim(), b.trim());
    if a.is_empty() || b.is_empty() {
        return None;
    }
    Some((a.to_string(), b.to_string()))
}
