// src/configs.rs
//! Config file for the `main_wrr` tally tool.
//!
//! ```toml
//! rounds = 100
//!
//! [[nodes]]
//! value = "apple"
//! weight = 2
//! ```
use std::{fs, path::Path};

use serde::Deserialize;

use crate::error::ConfigError;
use crate::weighted::{Node, WeightedRoundRobin};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Number of `next()` calls to tally.
    #[serde(default = "Config::default_rounds")]
    pub rounds: usize,
    /// Nodes in selector order; index = position.
    #[serde(default)]
    pub nodes: Vec<Node<String>>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            rounds: Self::default_rounds(),
            nodes: Vec::new(),
        }
    }
}

impl Config {
    fn default_rounds() -> usize { 100 }

    /// Reads, parses and validates a TOML config.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let p = path.as_ref();
        let s = fs::read_to_string(p).map_err(|e| ConfigError::Io(p.display().to_string(), e))?;
        let cfg = Self::from_toml(&s).map_err(|e| match e {
            ConfigError::Parse(_, msg) => ConfigError::Parse(p.display().to_string(), msg),
            other => other,
        })?;
        tracing::debug!(path = %p.display(), nodes = cfg.nodes.len(), rounds = cfg.rounds, "config loaded");
        Ok(cfg)
    }

    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        let cfg: Config =
            toml::from_str(s).map_err(|e| ConfigError::Parse("<inline>".into(), e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Weight 0 is allowed; it disables a node.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rounds == 0 {
            return Err(ConfigError::Invalid("rounds must be >= 1".into()));
        }
        if self.nodes.is_empty() {
            return Err(ConfigError::Invalid("at least one [[nodes]] entry is required".into()));
        }
        Ok(())
    }

    pub fn build_selector(&self) -> WeightedRoundRobin<String> {
        WeightedRoundRobin::new(self.nodes.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rounds() {
        let cfg = Config::from_toml(
            r#"
            [[nodes]]
            value = "a"
            weight = 1
            "#,
        )
        .unwrap();
        assert_eq!(cfg.rounds, 100);
        assert_eq!(cfg.nodes, vec![Node::new("a".to_string(), 1)]);
        assert_eq!(Config::default().rounds, 100);
    }

    #[test]
    fn zero_rounds_rejected() {
        let err = Config::from_toml(
            r#"
            rounds = 0
            [[nodes]]
            value = "a"
            weight = 1
            "#,
        )
        .unwrap_err();
        match err {
            ConfigError::Invalid(msg) => assert!(msg.contains("rounds")),
            other => panic!("expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn no_nodes_rejected() {
        assert!(matches!(
            Config::from_toml("rounds = 5").unwrap_err(),
            ConfigError::Invalid(_)
        ));
    }

    #[test]
    fn bad_toml_rejected() {
        assert!(matches!(
            Config::from_toml("rounds = \"many\"").unwrap_err(),
            ConfigError::Parse(..)
        ));
    }

    #[test]
    fn zero_weight_allowed() {
        let cfg = Config::from_toml(
            r#"
            [[nodes]]
            value = "off"
            weight = 0
            "#,
        )
        .unwrap();
        assert_eq!(cfg.build_selector().next(), None);
    }
}
