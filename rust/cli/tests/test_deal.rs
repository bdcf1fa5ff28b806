use holdem_cli::run;

#[test]
fn deal_prints_holes_board_and_winner() {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(["holdem", "deal", "--seed", "1"], &mut out, &mut err);
    assert_eq!(code, 0);
    let s = String::from_utf8_lossy(&out);
    assert!(s.contains("Seed: 1"));
    assert!(s.contains("Hole P0:"));
    assert!(s.contains("Hole P1:"));
    assert!(s.contains("Board:"));
    assert!(
        s.contains("Winner:") || s.contains("Split between:"),
        "missing outcome in: {s}"
    );
}

#[test]
fn deal_is_deterministic_for_a_seed() {
    let mut first: Vec<u8> = Vec::new();
    let mut second: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    assert_eq!(run(["holdem", "deal", "--seed", "7"], &mut first, &mut err), 0);
    assert_eq!(run(["holdem", "deal", "--seed", "7"], &mut second, &mut err), 0);
    assert_eq!(first, second, "same seed must deal the same hand");
}

#[test]
fn deal_supports_more_than_two_seats() {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(
        ["holdem", "deal", "--seed", "3", "--players", "4"],
        &mut out,
        &mut err,
    );
    assert_eq!(code, 0);
    let s = String::from_utf8_lossy(&out);
    assert!(s.contains("Hole P3:"));
}

#[test]
fn deal_rejects_single_seat_tables() {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(
        ["holdem", "deal", "--seed", "1", "--players", "1"],
        &mut out,
        &mut err,
    );
    assert_eq!(code, 2);
    let e = String::from_utf8_lossy(&err);
    assert!(e.contains("two players"), "unexpected stderr: {e}");
}
