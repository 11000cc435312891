//! Server configuration from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::planner::PlannerConfig;

/// Environment variable for the listen address.
pub const ADDR_VAR: &str = "ROUTE_SERVER_ADDR";

/// Environment variable for a CSV edge list to load at startup.
pub const EDGES_VAR: &str = "ROUTE_SERVER_EDGES";

/// Environment variable for the balanced-mode distance share.
pub const BLEND_VAR: &str = "ROUTE_SERVER_BALANCED_BLEND";

/// Errors reading configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Variable is set but cannot be parsed
    #[error("invalid {var}: {value:?} ({reason})")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Configuration for the route server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on
    pub addr: SocketAddr,

    /// Edge list to load at startup. The bundled demo network is used
    /// when unset.
    pub edges_path: Option<PathBuf>,

    /// Route search configuration
    pub planner: PlannerConfig,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    ///
    /// Unset variables fall back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through a variable lookup function.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ADDR_VAR) {
            config.addr = value.parse().map_err(|e: std::net::AddrParseError| {
                ConfigError::Invalid {
                    var: ADDR_VAR,
                    value: value.clone(),
                    reason: e.to_string(),
                }
            })?;
        }

        if let Some(value) = lookup(EDGES_VAR).filter(|v| !v.trim().is_empty()) {
            config.edges_path = Some(PathBuf::from(value));
        }

        if let Some(value) = lookup(BLEND_VAR) {
            let invalid = |reason: String| ConfigError::Invalid {
                var: BLEND_VAR,
                value: value.clone(),
                reason,
            };
            let blend: f64 = value
                .trim()
                .parse()
                .map_err(|e: std::num::ParseFloatError| invalid(e.to_string()))?;
            config.planner = config
                .planner
                .with_blend(blend)
                .map_err(|e| invalid(e.to_string()))?;
        }

        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            edges_path: None,
            planner: PlannerConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::DEFAULT_BALANCED_BLEND;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn default_config() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.addr, SocketAddr::from(([127, 0, 0, 1], 3000)));
        assert!(config.edges_path.is_none());
        assert_eq!(config.planner.balanced_blend, DEFAULT_BALANCED_BLEND);
    }

    #[test]
    fn custom_config() {
        let config = ServerConfig::from_lookup(lookup(&[
            (ADDR_VAR, "0.0.0.0:8080"),
            (EDGES_VAR, "data/mrt.csv"),
            (BLEND_VAR, "0.3"),
        ]))
        .unwrap();

        assert_eq!(config.addr, SocketAddr::from(([0, 0, 0, 0], 8080)));
        assert_eq!(config.edges_path, Some(PathBuf::from("data/mrt.csv")));
        assert_eq!(config.planner.balanced_blend, 0.3);
    }

    #[test]
    fn blank_edges_path_is_unset() {
        let config = ServerConfig::from_lookup(lookup(&[(EDGES_VAR, "  ")])).unwrap();
        assert!(config.edges_path.is_none());
    }

    #[test]
    fn invalid_addr() {
        let err = ServerConfig::from_lookup(lookup(&[(ADDR_VAR, "localhost")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: ADDR_VAR, .. }));
    }

    #[test]
    fn invalid_blend() {
        let err = ServerConfig::from_lookup(lookup(&[(BLEND_VAR, "heavy")])).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: BLEND_VAR, .. }));

        let err = ServerConfig::from_lookup(lookup(&[(BLEND_VAR, "2")])).unwrap_err();
        assert!(err.to_string().contains("blend weight must be between 0 and 1"));
    }
}
