//! Exit codes and stream discipline: results on stdout, errors on stderr.

fn run(args: &[&str]) -> (i32, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = boardrank_cli::run_with_env(args, &|_| None, &mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn test_analyze_success_returns_zero() {
    let (code, out, err) = run(&["boardrank", "analyze", "--seed", "42"]);
    assert_eq!(code, 0, "stderr: {err}");
    assert!(out.starts_with("Seed: 42"));
    assert!(err.is_empty());
}

#[test]
fn test_help_goes_to_stdout() {
    let (code, out, err) = run(&["boardrank", "--help"]);
    assert_eq!(code, 0);
    assert!(out.contains("analyze"));
    assert!(err.is_empty());
}

#[test]
fn test_unknown_command_lists_commands() {
    let (code, out, err) = run(&["boardrank", "play"]);
    assert_eq!(code, 2);
    assert!(out.is_empty());
    for command in ["analyze", "showdown", "cfg"] {
        assert!(err.contains(command), "missing {command} in {err}");
    }
}

#[test]
fn test_bad_card_returns_two() {
    let (code, out, err) = run(&["boardrank", "analyze", "--hole", "Zz Ks", "--board", "2c 3c 4c"]);
    assert_eq!(code, 2);
    assert!(out.is_empty());
    assert!(err.starts_with("Error: Analysis error: Unrecognized card"));
}

#[test]
fn test_hole_card_on_board_returns_two() {
    let (code, _, err) = run(&["boardrank", "analyze", "--hole", "As Ks", "--board", "As 3c 4c"]);
    assert_eq!(code, 2);
    assert!(err.starts_with("Error:"));
}

#[test]
fn test_invalid_strategy_value_returns_two() {
    let (code, _, err) = run(&["boardrank", "analyze", "--strength", "fastest"]);
    assert_eq!(code, 2);
    assert!(err.contains("fastest"));
}

#[test]
fn test_showdown_without_players_returns_two() {
    let (code, _, _) = run(&["boardrank", "showdown", "--board", "2c 3c 4c"]);
    assert_eq!(code, 2);
}
