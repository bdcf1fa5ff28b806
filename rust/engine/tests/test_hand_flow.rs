use holdem_engine::blinds::BlindConfig;
use holdem_engine::cards::parse_cards;
use holdem_engine::chips::Chips;
use holdem_engine::deck::{ShuffledDeck, StackedDeck};
use holdem_engine::errors::HandError;
use holdem_engine::hand::Hand;
use holdem_engine::play::Action;
use holdem_engine::player::Player;
use holdem_engine::stacks::Stacks;
use holdem_engine::street::Street;

// Deal order for two players: one card each, then a second each. After the
// hole cards every street transition burns one card before revealing.
const RIGGED: &str = "Ah Kd As Kc 3c 2c 7d 9s 3d 4h 3h Jc";

fn rigged_hand() -> (Player, Player, Hand<StackedDeck>) {
    let (p1, p2) = (Player(1), Player(2));
    let deck = StackedDeck::parse(RIGGED).unwrap();
    let stacks = Stacks::new([(p1, Chips::new(100)), (p2, Chips::new(200))]);
    let hand = Hand::new(deck, vec![p1, p2], stacks, BlindConfig::new(Chips::new(1))).unwrap();
    (p1, p2, hand)
}

fn check_both(hand: Hand<StackedDeck>, p1: Player, p2: Player) -> Hand<StackedDeck> {
    let hand = hand.on_current_round(p1, Action::Check).unwrap();
    hand.on_current_round(p2, Action::Check).unwrap()
}

#[test]
fn hole_cards_are_dealt_round_robin() {
    let (p1, p2, hand) = rigged_hand();
    assert_eq!(hand.hole_cards(p1).unwrap(), parse_cards("Ah As").unwrap()[..]);
    assert_eq!(hand.hole_cards(p2).unwrap(), parse_cards("Kd Kc").unwrap()[..]);
}

#[test]
fn fresh_hand_sits_on_the_preflop() {
    let (_, _, hand) = rigged_hand();
    assert_eq!(hand.current_street(), Some(Street::Preflop));
    assert!(!hand.is_finished());
    assert!(hand.community().cards_dealt().is_empty());
    assert!(hand.showdown().is_none());
}

#[test]
fn blind_positions_follow_the_seating() {
    let (p1, p2, hand) = rigged_hand();
    assert_eq!(hand.small_blind(), p1);
    assert_eq!(hand.under_the_gun(), p1);
    assert_eq!(hand.big_blind(), p2);
    assert_eq!(hand.button(), p2);
    assert_eq!(hand.pot_size(), Chips::new(3));
}

#[test]
fn checking_through_the_preflop_reveals_exactly_the_flop() {
    let (p1, p2, hand) = rigged_hand();
    let hand = check_both(hand, p1, p2);

    assert_eq!(hand.current_street(), Some(Street::Flop));
    assert!(hand.street_played(Street::Preflop));
    assert!(!hand.street_played(Street::Flop));

    let community = hand.community();
    assert_eq!(
        community.flop_cards().unwrap(),
        parse_cards("2c 7d 9s").unwrap()[..]
    );
    assert!(community.turn_card().is_none());
    assert!(community.river_card().is_none());

    // the flop round is fresh and unfinished
    let flop_round = hand.round(Street::Flop).unwrap();
    assert!(!flop_round.is_finished());
    assert_eq!(flop_round.turn(), Some(p1));
}

#[test]
fn checking_through_all_streets_finishes_the_hand() {
    let (p1, p2, hand) = rigged_hand();
    let hand = check_both(hand, p1, p2); // preflop
    let hand = check_both(hand, p1, p2); // flop
    assert_eq!(hand.community().turn_card(), parse_cards("4h").unwrap().first().copied());
    let hand = check_both(hand, p1, p2); // turn
    assert_eq!(hand.community().river_card(), parse_cards("Jc").unwrap().first().copied());
    let hand = check_both(hand, p1, p2); // river

    assert!(hand.is_finished());
    assert_eq!(hand.current_street(), None);
    // 12 rigged cards: 4 hole, 3 burns, 5 board
    assert_eq!(hand.deck_remaining(), 0);

    let err = hand.on_current_round(p1, Action::Check).unwrap_err();
    assert_eq!(err, HandError::PlayOnFinishedHand);
}

#[test]
fn one_burn_per_street_transition() {
    let (p1, p2) = (Player(1), Player(2));
    let deck = ShuffledDeck::new_with_seed(123);
    let stacks = Stacks::new([(p1, Chips::new(100)), (p2, Chips::new(100))]);
    let mut hand =
        Hand::new(deck, vec![p1, p2], stacks, BlindConfig::new(Chips::new(1))).unwrap();
    while !hand.is_finished() {
        hand = hand.on_current_round(p1, Action::Check).unwrap();
        hand = hand.on_current_round(p2, Action::Check).unwrap();
    }
    // 52 - 4 hole cards - 3 burns - 5 board cards
    assert_eq!(hand.deck_remaining(), 40);
}

#[test]
fn branching_from_one_snapshot_burns_identically() {
    let (p1, p2, hand) = rigged_hand();
    let hand = hand.on_current_round(p1, Action::Check).unwrap();
    // two successors derived from the same snapshot see the same flop
    let a = hand.on_current_round(p2, Action::Check).unwrap();
    let b = hand.on_current_round(p2, Action::Check).unwrap();
    assert_eq!(a.community(), b.community());
    assert_eq!(a.deck_remaining(), b.deck_remaining());
}

#[test]
fn rejected_actions_leave_the_hand_untouched() {
    let (p1, p2, hand) = rigged_hand();
    // p2 is not up
    let err = hand.on_current_round(p2, Action::Check).unwrap_err();
    assert!(matches!(err, HandError::InvalidPlay { .. }));
    assert_eq!(hand.current_street(), Some(Street::Preflop));
    assert_eq!(hand.round(Street::Preflop).unwrap().turn(), Some(p1));
}

#[test]
fn stacks_carry_over_into_the_next_street() {
    let (p1, p2, hand) = rigged_hand();
    let hand = hand
        .on_current_round(p1, Action::Bet(Chips::new(17)))
        .unwrap();
    let hand = hand.on_current_round(p2, Action::Call).unwrap();

    // the pre-flop betting finished, the flop round starts from 83/183
    assert_eq!(hand.current_street(), Some(Street::Flop));
    assert_eq!(hand.stacks().of_player(p1), Chips::new(83));
    assert_eq!(hand.stacks().of_player(p2), Chips::new(183));
}

#[test]
fn betting_actions_flow_through_the_orchestrator() {
    let (p1, p2, hand) = rigged_hand();
    let hand = hand
        .on_current_round(p1, Action::Bet(Chips::new(10)))
        .unwrap();
    let hand = hand
        .on_current_round(p2, Action::RaiseTo(Chips::new(30)))
        .unwrap();
    let hand = hand.on_current_round(p1, Action::Call).unwrap();
    assert_eq!(hand.current_street(), Some(Street::Flop));
    assert_eq!(hand.round(Street::Preflop).unwrap().pot(), Chips::new(60));
}
