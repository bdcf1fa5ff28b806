//! Play command handler: drive one full hand interactively from a line-based
//! input stream, printing the table state per street and the showdown result.

use std::io::{BufRead, Write};
use std::path::Path;

use chrono::Utc;
use holdem_engine::chips::Chips;
use holdem_engine::logger::{ActionRecord, HandLogger, HandRecord, ShowdownInfo, format_hand_id};
use holdem_engine::play::Action;
use holdem_engine::player::Player;
use holdem_engine::street::Street;

use crate::config;
use crate::error::CliError;
use crate::formatters::{format_board, format_cards};

pub fn handle_play_command(
    seed: Option<u64>,
    players: Option<usize>,
    log: Option<&Path>,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let cfg = config::load().map_err(|e| CliError::Config(e.to_string()))?;
    let seed = seed.or(cfg.seed).unwrap_or_else(rand::random);
    let mut hand = deal_and_introduce(&cfg, seed, players, out)?;

    let mut actions: Vec<ActionRecord> = Vec::new();
    let mut shown = Street::Preflop;
    while let Some(street) = hand.current_street() {
        if street > shown {
            writeln!(
                out,
                "{street:?}: {}",
                format_board(&hand.community().cards_dealt())
            )?;
            shown = street;
        }
        let round = hand
            .round(street)
            .ok_or_else(|| CliError::Internal(format!("no round on {street:?}")))?;
        let Some(actor) = round.turn() else {
            break;
        };
        write!(
            out,
            "[{street:?}] pot {} | {actor} to act (check/bet N/call/raise N/fold/allin): ",
            round.pot()
        )?;
        out.flush()?;

        let Some(line) = read_line(input)? else {
            return Err(CliError::Interrupted(
                "input closed before the hand finished".to_string(),
            ));
        };
        let action = match parse_action(&line) {
            Ok(action) => action,
            Err(reason) => {
                writeln!(out, "rejected: {reason}")?;
                continue;
            }
        };
        match hand.on_current_round(actor, action) {
            Ok(next) => {
                actions.push(ActionRecord {
                    player: actor,
                    street,
                    action,
                });
                hand = next;
            }
            Err(e) => writeln!(out, "rejected: {e}")?,
        }
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
    let result = if winners.len() == 1 {
        format!("{} wins", names.join(" "))
    } else {
        format!("split between {}", names.join(" "))
    };
    writeln!(out, "Result: {result}")?;

    if let Some(path) = log {
        write_record(path, seed, actions, &hand, winners, result)?;
    }
    Ok(())
}

fn deal_and_introduce(
    cfg: &config::Config,
    seed: u64,
    players: Option<usize>,
    out: &mut dyn Write,
) -> Result<holdem_engine::hand::Hand<holdem_engine::deck::ShuffledDeck>, CliError> {
    let (seats, hand) = super::deal_table(cfg, seed, players)?;
    writeln!(out, "Seed: {seed}")?;
    writeln!(
        out,
        "Blinds: {}/{}",
        hand.blinds().small_blind(),
        hand.blinds().big_blind()
    )?;
    for &player in &seats {
        let hole = hand
            .hole_cards(player)
            .ok_or_else(|| CliError::Internal(format!("{player} has no hole cards")))?;
        writeln!(
            out,
            "Hole {player}: {} (stack {})",
            format_cards(&hole),
            hand.stacks().of_player(player)
        )?;
    }
    Ok(hand)
}

fn read_line(input: &mut dyn BufRead) -> Result<Option<String>, CliError> {
    let mut buf = String::new();
    let n = input.read_line(&mut buf)?;
    if n == 0 {
        Ok(None)
    } else {
        Ok(Some(buf.trim().to_string()))
    }
}

fn parse_action(line: &str) -> Result<Action, String> {
    let mut parts = line.split_whitespace();
    let Some(word) = parts.next() else {
        return Err("empty input".to_string());
    };
    let action = match word.to_ascii_lowercase().as_str() {
        "check" | "x" => Action::Check,
        "call" | "c" => Action::Call,
        "fold" | "f" => Action::Fold,
        "allin" | "all-in" | "a" => Action::AllIn,
        "bet" | "b" => Action::Bet(amount(parts.next())?),
        "raise" | "r" => Action::RaiseTo(amount(parts.next())?),
        other => return Err(format!("unknown action: {other}")),
    };
    Ok(action)
}

fn amount(token: Option<&str>) -> Result<Chips, String> {
    let token = token.ok_or_else(|| "missing chip amount".to_string())?;
    token
        .parse::<u64>()
        .map(Chips::new)
        .map_err(|_| format!("not a chip amount: {token}"))
}

fn write_record(
    path: &Path,
    seed: u64,
    actions: Vec<ActionRecord>,
    hand: &holdem_engine::hand::Hand<holdem_engine::deck::ShuffledDeck>,
    winners: Vec<Player>,
    result: String,
) -> Result<(), CliError> {
    let mut logger = HandLogger::create(path)?;
    let date = Utc::now().format("%Y%m%d").to_string();
    let record = HandRecord {
        hand_id: format_hand_id(&date, 1),
        seed: Some(seed),
        actions,
        board: hand.community().cards_dealt(),
        result: Some(result),
        ts: None,
        meta: None,
        showdown: Some(ShowdownInfo {
            winners,
            notes: None,
        }),
    };
    logger.write(&record)?;
    Ok(())
}
