//! Card and board formatters for terminal display.
//!
//! Pure functions for formatting cards and boards for terminal output, with
//! Unicode suit symbols and an ASCII fallback for terminals that cannot
//! render them.

use holdem_engine::cards::{Card, Rank, Suit};

/// Check if the terminal supports Unicode card symbols by detecting modern
/// terminal environments. On Windows, checks for Windows Terminal
/// (WT_SESSION), modern terminals (TERM_PROGRAM), or VS Code
/// (VSCODE_INJECTION). On Unix-like systems, assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: Suit) -> &'static str {
    if supports_unicode() {
        match suit {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
    } else {
        match suit {
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
            Suit::Spades => "s",
        }
    }
}

pub fn format_rank(rank: Rank) -> String {
    rank.to_string()
}

pub fn format_card(card: &Card) -> String {
    format!("{}{}", format_rank(card.rank), format_suit(card.suit))
}

/// Space-separated card list: `A♠ K♦ 7♣`.
pub fn format_cards(cards: &[Card]) -> String {
    cards
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Bracketed board: `[A♠ K♦ 7♣]`, or `[]` before the flop.
pub fn format_board(cards: &[Card]) -> String {
    format!("[{}]", format_cards(cards))
}
