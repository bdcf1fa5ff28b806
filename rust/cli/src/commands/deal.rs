//! Deal command handler: deal a seeded hand, check it through all four
//! streets, and show the board plus every seat's combination.

use std::io::Write;

use holdem_engine::play::Action;

use crate::config;
use crate::error::CliError;
use crate::formatters::{format_board, format_cards};

use super::deal_table;

pub fn handle_deal_command(
    seed: Option<u64>,
    players: Option<usize>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = config::load().map_err(|e| CliError::Config(e.to_string()))?;
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    let (seats, mut hand) = deal_table(&cfg, seed, players)?;

    writeln!(out, "Seed: {seed}")?;
    for &player in &seats {
        let hole = hand
            .hole_cards(player)
            .ok_or_else(|| CliError::Internal(format!("{player} has no hole cards")))?;
        writeln!(out, "Hole {player}: {}", format_cards(&hole))?;
    }

    // no betting: every seat checks until the river round closes
    while let Some(street) = hand.current_street() {
        let round = hand
            .round(street)
            .ok_or_else(|| CliError::Internal(format!("no round on {street:?}")))?;
        let Some(actor) = round.turn() else {
            break;
        };
        hand = hand.on_current_round(actor, Action::Check)?;
    }

    writeln!(out, "Board: {}", format_board(&hand.community().cards_dealt()))?;

    let showdown = hand
        .showdown()
        .ok_or_else(|| CliError::Internal("hand did not reach the showdown".to_string()))?;
    for (player, combination) in showdown.combinations() {
        writeln!(
            out,
            "{player}: {} {}",
            combination.label(),
            format_board(&combination.cards())
        )?;
    }
    let winners = showdown.winners();
    let names: Vec<String> = winners.iter().map(|p| p.to_string()).collect();
    if winners.len() == 1 {
        writeln!(out, "Winner: {}", names.join(" "))?;
    } else {
        writeln!(out, "Split between: {}", names.join(" "))?;
    }
    Ok(())
}
