//! Eval command handler: classify a hand pool given as card text.

use std::io::Write;

use holdem_engine::cards::parse_cards;
use holdem_engine::eval::Combination;

use crate::error::CliError;
use crate::formatters::{format_board, format_cards};

pub fn handle_eval_command(cards: &[String], out: &mut dyn Write) -> Result<(), CliError> {
    let text = cards.join(" ");
    let pool = parse_cards(&text).map_err(CliError::InvalidInput)?;
    if !(5..=7).contains(&pool.len()) {
        return Err(CliError::InvalidInput(format!(
            "need 5 to 7 cards, got {}",
            pool.len()
        )));
    }
    let combination = Combination::of(&pool);
    writeln!(out, "Label: {}", combination.label())?;
    writeln!(out, "Core: {}", format_board(combination.core()))?;
    writeln!(out, "Kickers: {}", format_board(combination.kickers()))?;
    writeln!(out, "Best five: {}", format_cards(&combination.cards()))?;
    Ok(())
}
