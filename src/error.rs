// src/error.rs
use std::io;
use thiserror::Error;

/// Errors raised while parsing a `value:weight` node list.
///
/// Selection itself never fails: an unavailable node is `None`.
#[derive(Debug, Error)]
pub enum WrrError {
    /// An item of a node list is not `value:weight`.
    #[error("invalid node spec `{0}` (expected value:weight)")]
    InvalidNodeSpec(String),
    /// The weight part is not a non-negative integer.
    #[error("invalid weight `{1}` for node `{0}`")]
    InvalidWeight(String, String),
}

/// Config loading / validation failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config `{0}`: {1}")]
    Io(String, #[source] io::Error),
    #[error("cannot parse config `{0}`: {1}")]
    Parse(String, String),
    #[error("invalid config: {0}")]
    Invalid(String),
}

pub type Result<T, E = WrrError> = std::result::Result<T, E>;
