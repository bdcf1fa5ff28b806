use holdem_engine::chips::Chips;
use holdem_engine::errors::HandError;
use holdem_engine::play::Play;
use holdem_engine::player::Player;
use holdem_engine::stacks::Stacks;

#[test]
fn chip_arithmetic_stays_non_negative() {
    let a = Chips::new(100);
    let b = Chips::new(40);
    assert_eq!(a + b, Chips::new(140));
    assert_eq!(a.minus(b).unwrap(), Chips::new(60));
    assert_eq!(a.minus(a).unwrap(), Chips::ZERO);
}

#[test]
fn subtracting_below_zero_fails() {
    let err = Chips::new(10).minus(Chips::new(11)).unwrap_err();
    assert!(matches!(err, HandError::NegativeChipValue { .. }));
}

#[test]
fn min_raise_is_twice_the_bet() {
    assert_eq!(Chips::new(42).min_raise(), Chips::new(84));
    assert_eq!(Chips::new(50).min_raise(), Chips::new(100));
}

#[test]
fn summing_chips() {
    let total: Chips = [Chips::new(10), Chips::new(20), Chips::new(30)]
        .into_iter()
        .sum();
    assert_eq!(total, Chips::new(60));
}

#[test]
fn applying_a_bet_deducts_only_from_the_actor() {
    let (p1, p2) = (Player(1), Player(2));
    let stacks = Stacks::new([(p1, Chips::new(100)), (p2, Chips::new(100))]);
    let updated = stacks.apply(&Play::bet(p1, Chips::new(10))).unwrap();
    assert_eq!(updated.of_player(p1), Chips::new(90));
    assert_eq!(updated.of_player(p2), Chips::new(100));
    // the original snapshot is untouched
    assert_eq!(stacks.of_player(p1), Chips::new(100));
}

#[test]
fn checks_and_folds_leave_stacks_unchanged() {
    let (p1, p2) = (Player(1), Player(2));
    let stacks = Stacks::new([(p1, Chips::new(100)), (p2, Chips::new(100))]);
    let after_check = stacks.apply(&Play::check(p1)).unwrap();
    let after_fold = after_check.apply(&Play::fold(p2)).unwrap();
    assert_eq!(after_fold.of_player(p1), Chips::new(100));
    assert_eq!(after_fold.of_player(p2), Chips::new(100));
}

#[test]
fn overdrawing_a_stack_fails() {
    let (p1, p2) = (Player(1), Player(2));
    let stacks = Stacks::new([(p1, Chips::new(100)), (p2, Chips::new(100))]);
    let err = stacks.apply(&Play::bet(p1, Chips::new(101))).unwrap_err();
    assert_eq!(
        err,
        HandError::InsufficientStack {
            player: p1,
            available: Chips::new(100),
            tried: Chips::new(101),
        }
    );
}

#[test]
fn unknown_player_has_no_chips() {
    let stacks = Stacks::new([(Player(1), Chips::new(100))]);
    assert_eq!(stacks.of_player(Player(9)), Chips::ZERO);
}
