//! Command-line argument definitions, parsed with clap's derive API.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "holdem", about = "One-hand Texas Hold'em at the terminal")]
pub struct HoldemCli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Play one hand interactively against the other seats
    Play {
        /// RNG seed for the shuffle (random when absent)
        #[arg(long)]
        seed: Option<u64>,
        /// Number of seats at the table
        #[arg(long)]
        players: Option<usize>,
        /// Append a JSONL hand record to this file
        #[arg(long)]
        log: Option<PathBuf>,
    },
    /// Deal a seeded hand and check it down to the showdown
    Deal {
        /// RNG seed for the shuffle (random when absent)
        #[arg(long)]
        seed: Option<u64>,
        /// Number of seats at the table
        #[arg(long)]
        players: Option<usize>,
    },
    /// Evaluate a pool of five to seven cards
    Eval {
        /// Cards like "As Ks Qs Js Ts 2h 3d"
        cards: Vec<String>,
    },
    /// Show the effective configuration and where each value came from
    Cfg,
}
