// src/main_wrr.rs
//! Tally CLI
//!
//! ```bash
//! cargo run --bin main_wrr -- --nodes apple:2,banana:4,grape:4,orange:18 --rounds 100
//! cargo run --bin main_wrr -- --config wrr.toml
//! ```
use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgGroup, Parser};
use tracing_subscriber::EnvFilter;
use wrr_core_rust::{parse_nodes, tally, Config, WeightedRoundRobin};

#[derive(Parser, Debug)]
#[command(name = "main_wrr", version, about = "Smooth weighted round-robin tally")]
#[command(group(ArgGroup::new("source").required(true).args(["nodes", "config"])))]
struct Cli {
    /// `value:weight` list, comma separated
    #[arg(long)]
    nodes: Option<String>,
    /// TOML config with `rounds` and `[[nodes]]`
    #[arg(long)]
    config: Option<PathBuf>,
    /// Number of selections (overrides the config)
    #[arg(long)]
    rounds: Option<usize>,
    /// Log filter when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cli.log_level))
        .context("invalid --log-level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let (rr, rounds) = match (&cli.nodes, &cli.config) {
        (Some(spec), _) => {
            let rr = WeightedRoundRobin::new(parse_nodes(spec)?);
            (rr, cli.rounds.unwrap_or(100))
        }
        (None, Some(path)) => {
            let cfg = Config::load_from(path)?;
            (cfg.build_selector(), cli.rounds.unwrap_or(cfg.rounds))
        }
        (None, None) => unreachable!("clap enforces the source group"),
    };

    tracing::info!(size = rr.size(), step = rr.step(), rounds, "tally start");
    let counts = tally(&rr, rounds);
    println!("{}", serde_json::to_string(&counts)?);
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
