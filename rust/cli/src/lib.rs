//! # holdem CLI
//!
//! Thin command-line harness around the [`holdem_engine`] crate. It exposes
//! subcommands for playing, dealing, and evaluating single hands of Texas
//! Hold'em.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line
//! arguments and executes the appropriate subcommand with injected output
//! streams, returning the process exit code.
//!
//! ```no_run
//! use std::io;
//! let args = vec!["holdem", "deal", "--seed", "42"];
//! let code = holdem_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play one hand interactively (check/bet/call/raise/fold/allin)
//! - `deal`: Deal a seeded hand, check it down, and show the showdown
//! - `eval`: Evaluate a 5-7 card pool given as text
//! - `cfg`: Display the effective configuration and value sources

use std::io::Write;

use clap::Parser;
use clap::error::ErrorKind;

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;

use cli::{Commands, HoldemCli};
pub use commands::{
    handle_cfg_command, handle_deal_command, handle_eval_command, handle_play_command,
};
pub use error::CliError;

/// Parses command-line arguments and dispatches to the matching subcommand
/// handler.
///
/// `args` is the full argument list including the program name, `out` and
/// `err` receive normal and error output. The interactive `play` subcommand
/// reads from the process's stdin.
///
/// Returns the exit code: `0` for success, `2` for errors, `130` when the
/// input stream closes mid-hand.
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let args: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
    let parsed = match HoldemCli::try_parse_from(&args) {
        Ok(parsed) => parsed,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = write!(out, "{e}");
            return exit_code::SUCCESS;
        }
        Err(e) => {
            let _ = write!(err, "{e}");
            return exit_code::ERROR;
        }
    };

    let result = match parsed.command {
        Commands::Play {
            seed,
            players,
            log,
        } => {
            let stdin = std::io::stdin();
            let mut input = stdin.lock();
            commands::handle_play_command(seed, players, log.as_deref(), &mut input, out)
        }
        Commands::Deal { seed, players } => commands::handle_deal_command(seed, players, out),
        Commands::Eval { cards } => commands::handle_eval_command(&cards, out),
        Commands::Cfg => commands::handle_cfg_command(out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(CliError::Interrupted(msg)) => {
            let _ = writeln!(err, "interrupted: {msg}");
            exit_code::INTERRUPTED
        }
        Err(e) => {
            let _ = writeln!(err, "error: {e}");
            exit_code::ERROR
        }
    }
}
