use holdem_engine::betting::BettingRound;
use holdem_engine::chips::Chips;
use holdem_engine::errors::HandError;
use holdem_engine::player::Player;
use holdem_engine::stacks::Stacks;

fn heads_up(first: u64, second: u64) -> (Player, Player, BettingRound) {
    let (p1, p2) = (Player(1), Player(2));
    let stacks = Stacks::new([(p1, Chips::new(first)), (p2, Chips::new(second))]);
    let round = BettingRound::new(stacks, &[p1, p2]);
    (p1, p2, round)
}

#[test]
fn opening_all_in_is_a_full_stack_bet() {
    let (p1, _, round) = heads_up(100, 100);
    let round = round.all_in(p1).unwrap();
    assert_eq!(round.remaining_chips(p1), Chips::ZERO);
    assert_eq!(round.pot(), Chips::new(100));
}

#[test]
fn all_in_over_a_bet_is_a_raise() {
    let (p1, p2, round) = heads_up(100, 100);
    let round = round.bet(p1, Chips::new(20)).unwrap();
    let round = round.all_in(p2).unwrap();
    assert_eq!(round.remaining_chips(p2), Chips::ZERO);
    assert_eq!(round.remaining_chips(p1), Chips::new(80));
    assert_eq!(round.pot(), Chips::new(120));
    assert!(!round.is_finished());
}

#[test]
fn stack_accounting_through_bet_raise_call() {
    let (p1, p2, round) = heads_up(100, 100);
    let round = round.bet(p1, Chips::new(10)).unwrap();
    let round = round.raise_to(p2, Chips::new(30)).unwrap();
    let round = round.call(p1).unwrap();
    assert_eq!(round.remaining_chips(p1), Chips::new(70));
    assert_eq!(round.remaining_chips(p2), Chips::new(70));
    assert!(round.is_finished());
}

#[test]
fn short_all_in_skips_the_minimum_raise_check() {
    // p2's whole stack is below 2x the outstanding bet; an explicit raise to
    // that amount is rejected, going all in is not
    let (p1, p2, round) = heads_up(100, 70);
    let round = round.bet(p1, Chips::new(60)).unwrap();
    assert!(matches!(
        round.raise_to(p2, Chips::new(70)).unwrap_err(),
        HandError::InvalidPlay { .. }
    ));
    let round = round.all_in(p2).unwrap();
    assert_eq!(round.remaining_chips(p2), Chips::ZERO);
    // p1 matches the 70 total for 10 more
    let round = round.call(p1).unwrap();
    assert_eq!(round.remaining_chips(p1), Chips::new(30));
    assert!(round.is_finished());
    assert_eq!(round.pot(), Chips::new(140));
}

#[test]
fn all_in_with_nothing_left_is_a_zero_bet() {
    let (p1, _, round) = heads_up(0, 100);
    let round = round.all_in(p1).unwrap();
    assert_eq!(round.pot(), Chips::ZERO);
    assert_eq!(round.remaining_chips(p1), Chips::ZERO);
}
