//! Cfg command handler: print the effective configuration and where each
//! value was resolved from (default, file, or environment).

use std::io::Write;

use crate::config;
use crate::error::CliError;

pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let resolved = config::load_with_sources().map_err(|e| CliError::Config(e.to_string()))?;
    let cfg = &resolved.config;
    let sources = &resolved.sources;

    writeln!(out, "players = {} ({})", cfg.players, sources.players.as_str())?;
    writeln!(
        out,
        "starting_stack = {} ({})",
        cfg.starting_stack,
        sources.starting_stack.as_str()
    )?;
    writeln!(
        out,
        "small_blind = {} ({})",
        cfg.small_blind,
        sources.small_blind.as_str()
    )?;
    match cfg.seed {
        Some(seed) => writeln!(out, "seed = {} ({})", seed, sources.seed.as_str())?,
        None => writeln!(out, "seed = (unset)")?,
    }
    Ok(())
}
