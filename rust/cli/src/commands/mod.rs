//! Command handler modules for the holdem CLI.
//!
//! Each subcommand is implemented in its own module file with a consistent
//! pattern: a public `handle_COMMAND_command(...) -> Result<(), CliError>`
//! function taking its inputs and output streams as parameters, plus
//! module-private helpers. Streams are injected so tests can capture them.

pub mod cfg;
pub mod deal;
pub mod eval;
pub mod play;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use eval::handle_eval_command;
pub use play::handle_play_command;

use holdem_engine::blinds::BlindConfig;
use holdem_engine::chips::Chips;
use holdem_engine::deck::ShuffledDeck;
use holdem_engine::hand::Hand;
use holdem_engine::player::Player;
use holdem_engine::stacks::Stacks;

use crate::config::Config;
use crate::error::CliError;

/// Builds the table every game command starts from: seats, stacks, blinds,
/// and a freshly dealt hand from a seeded shuffle.
pub(crate) fn deal_table(
    cfg: &Config,
    seed: u64,
    players: Option<usize>,
) -> Result<(Vec<Player>, Hand<ShuffledDeck>), CliError> {
    let seats = players.unwrap_or(cfg.players);
    if seats < 2 {
        return Err(CliError::InvalidInput(format!(
            "a hand needs at least two players, got {seats}"
        )));
    }
    let players: Vec<Player> = (0..seats).map(Player).collect();
    let stacks = Stacks::new(
        players
            .iter()
            .map(|&p| (p, Chips::new(cfg.starting_stack))),
    );
    let deck = ShuffledDeck::new_with_seed(seed);
    let hand = Hand::new(
        deck,
        players.clone(),
        stacks,
        BlindConfig::new(Chips::new(cfg.small_blind)),
    )?;
    Ok((players, hand))
}
