// src/lib.rs
//! wrr_core_rust – **smooth weighted round-robin**
//!
//! * `weighted.rs` : selector state machine + node list parsing
//! * `utils.rs`    : GCD / max-weight helpers
//! * `tally.rs`    : count picks over N rounds
//! * `configs.rs`  : TOML config for the CLI
//!
//! ```rust
//! use wrr_core_rust::{tally, Node, WeightedRoundRobin};
//!
//! let rr = WeightedRoundRobin::new(vec![
//!     Node::new("apple", 2),
//!     Node::new("banana", 4),
//!     Node::new("grape", 4),
//!     Node::new("orange", 18),
//! ]);
//! let counts = tally(&rr, 28);
//! assert_eq!(counts["orange"], 18);
//! ```
#![forbid(unsafe_code)]

pub mod configs;
pub mod error;
pub mod tally;
pub mod utils;
pub mod weighted;

pub use configs::Config;
pub use error::{ConfigError, WrrError};
pub use tally::tally;
pub use weighted::{parse_nodes, Node, WeightedRoundRobin};
