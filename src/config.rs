//! Configuration loading from file and environment.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::engine::SolverStrategy;
use crate::types::{GraphError, GraphResult, DEFAULT_TOP_N, DEFAULT_WEIGHT_PRECISION};

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "BIOGRAPH_CONFIG";

/// Config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "biograph.toml";

/// What importing does with a row that names an unknown protein.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndpointPolicy {
    /// Create the missing proteins.
    #[default]
    AutoCreate,
    /// Skip the row and report it.
    Strict,
}

/// Library and CLI configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BioConfig {
    /// Handling of unknown proteins during import.
    #[serde(default)]
    pub endpoint_policy: EndpointPolicy,
    /// Shortest-path selection strategy.
    #[serde(default)]
    pub solver: SolverStrategy,
    /// Hubs listed when no count is given.
    #[serde(default = "default_top_n")]
    pub default_top_n: usize,
    /// Decimals written for weights on export.
    #[serde(default = "default_weight_precision")]
    pub weight_precision: usize,
}

fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

fn default_weight_precision() -> usize {
    DEFAULT_WEIGHT_PRECISION
}

impl Default for BioConfig {
    fn default() -> Self {
        Self {
            endpoint_policy: EndpointPolicy::default(),
            solver: SolverStrategy::default(),
            default_top_n: default_top_n(),
            weight_precision: default_weight_precision(),
        }
    }
}

/// Load configuration from a TOML file.
pub fn load_config(path: &Path) -> GraphResult<BioConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        GraphError::Config(format!("Failed to read config file {}: {e}", path.display()))
    })?;
    parse_config(&content)
}

/// Parse configuration from TOML text.
pub fn parse_config(content: &str) -> GraphResult<BioConfig> {
    toml::from_str(content).map_err(|e| GraphError::Config(format!("Failed to parse config: {e}")))
}

/// Resolve the config file path using priority order:
/// 1. Explicit path (CLI arg)
/// 2. BIOGRAPH_CONFIG environment variable
/// 3. biograph.toml in the current directory
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        return Some(PathBuf::from(env_path));
    }

    let local = PathBuf::from(DEFAULT_CONFIG_FILE);
    local.exists().then_some(local)
}

/// Load the resolved config file, or defaults when there is none.
pub fn load_or_default(explicit: Option<&Path>) -> GraphResult<BioConfig> {
    match resolve_config_path(explicit) {
        Some(path) => {
            log::debug!("loading config from {}", path.display());
            load_config(&path)
        }
        None => Ok(BioConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, BioConfig::default());
        assert_eq!(config.default_top_n, 5);
        assert_eq!(config.weight_precision, 2);
    }

    #[test]
    fn test_parse_all_fields() {
        let config = parse_config(
            r#"
endpoint_policy = "strict"
solver = "binary_heap"
default_top_n = 10
weight_precision = 3
"#,
        )
        .unwrap();
        assert_eq!(config.endpoint_policy, EndpointPolicy::Strict);
        assert_eq!(config.solver, SolverStrategy::BinaryHeap);
        assert_eq!(config.default_top_n, 10);
        assert_eq!(config.weight_precision, 3);
    }

    #[test]
    fn test_unknown_solver_rejected() {
        match parse_config("solver = \"astar\"") {
            Err(GraphError::Config(_)) => {}
            other => panic!("Expected Config error, got {:?}", other),
        }
    }
}
