use holdem_cli::run;

#[test]
fn eval_classifies_a_royal_flush() {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(
        ["holdem", "eval", "As", "Ks", "Qs", "Js", "Ts", "2h", "3d"],
        &mut out,
        &mut err,
    );
    assert_eq!(code, 0);
    let s = String::from_utf8_lossy(&out);
    assert!(s.contains("Label: straight flush"), "got: {s}");
}

#[test]
fn eval_reports_kickers_for_a_pair() {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(
        ["holdem", "eval", "Ah", "Ad", "Kc", "Qd", "Js", "2c", "3d"],
        &mut out,
        &mut err,
    );
    assert_eq!(code, 0);
    let s = String::from_utf8_lossy(&out);
    assert!(s.contains("Label: pair"), "got: {s}");
    assert!(s.contains("Kickers: ["), "got: {s}");
}

#[test]
fn eval_rejects_bad_card_text() {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(["holdem", "eval", "Zz", "Kc", "Qd", "Js", "2c"], &mut out, &mut err);
    assert_eq!(code, 2);
    let e = String::from_utf8_lossy(&err);
    assert!(e.contains("Invalid input"), "unexpected stderr: {e}");
}

#[test]
fn eval_rejects_wrong_pool_sizes() {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(["holdem", "eval", "Ah", "Kc", "Qd", "Js"], &mut out, &mut err);
    assert_eq!(code, 2);
    let e = String::from_utf8_lossy(&err);
    assert!(e.contains("5 to 7"), "unexpected stderr: {e}");
}

#[test]
fn cfg_reports_values_and_sources() {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(["holdem", "cfg"], &mut out, &mut err);
    assert_eq!(code, 0);
    let s = String::from_utf8_lossy(&out);
    assert!(s.contains("players = "), "got: {s}");
    assert!(s.contains("starting_stack = "), "got: {s}");
}
