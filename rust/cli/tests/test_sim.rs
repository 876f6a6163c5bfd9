use holdem_cli::run;
use serde_json::Value;
use serial_test::serial;
use std::fs;

fn clear_env() {
    for key in [
        "HOLDEM_CONFIG",
        "HOLDEM_SEED",
        "HOLDEM_STACK",
        "HOLDEM_SMALL_BLIND",
        "HOLDEM_BIG_BLIND",
        "HOLDEM_OPPONENTS",
        "HOLDEM_EQUITY_ITERATIONS",
    ] {
        unsafe {
            std::env::remove_var(key);
        }
    }
}

fn sim(args: &[&str]) -> (i32, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut argv = vec!["holdem", "sim"];
    argv.extend_from_slice(args);
    let code = run(argv, &mut out, &mut err);
    (
        code,
        String::from_utf8_lossy(&out).into_owned(),
        String::from_utf8_lossy(&err).into_owned(),
    )
}

fn hands_played(stdout: &str) -> usize {
    stdout
        .lines()
        .find_map(|l| l.strip_prefix("Simulated: "))
        .and_then(|rest| rest.split_whitespace().next())
        .and_then(|n| n.parse().ok())
        .expect("summary line")
}

#[test]
#[serial]
fn writes_one_history_line_per_hand() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out/sim.jsonl");
    let (code, stdout, stderr) = sim(&[
        "--hands",
        "8",
        "--seed",
        "42",
        "--output",
        path.to_str().unwrap(),
    ]);
    assert_eq!(code, 0, "stderr: {}", stderr);

    let played = hands_played(&stdout);
    assert!(played >= 1 && played <= 8);
    let contents = fs::read_to_string(&path).unwrap();
    assert!(!contents.contains('\r'));
    let records: Vec<Value> = contents
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(records.len(), played);

    for (i, rec) in records.iter().enumerate() {
        let id = rec["hand_id"].as_str().unwrap();
        assert!(id.ends_with(&format!("-{:06}", i + 1)), "{}", id);
        assert!(rec["ts"].as_str().is_some());
        assert!(rec["hero_cards"].as_array().unwrap().len() <= 2);
        assert!(rec["community_cards"].as_array().unwrap().len() <= 5);
        assert!(!rec["winners"].as_array().unwrap().is_empty());
        let total: f64 = rec["player_stacks"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["stack"].as_f64().unwrap())
            .sum();
        assert!((total - 400.0).abs() < 1e-6, "chips not conserved: {}", total);
    }
}

#[test]
#[serial]
fn same_seed_same_session() {
    clear_env();
    let (_, a, _) = sim(&["--hands", "5", "--seed", "7"]);
    let (_, b, _) = sim(&["--hands", "5", "--seed", "7"]);
    assert_eq!(a, b);
    assert!(a.contains("hero (Tight-Aggressive): "));
    assert!(a.contains("opponent3 (Calling Station): "));
}

#[test]
#[serial]
fn table_follows_configuration() {
    clear_env();
    unsafe {
        std::env::set_var("HOLDEM_OPPONENTS", "maniac");
        std::env::set_var("HOLDEM_STACK", "20");
    }
    let (code, stdout, _) = sim(&["--hands", "3", "--seed", "11", "--hero-style", "rock"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("hero (Rock): "));
    assert!(stdout.contains("opponent1 (Maniac): "));
    assert!(!stdout.contains("opponent2"));
    clear_env();
}

#[test]
#[serial]
fn rejects_zero_hands_and_unknown_style() {
    clear_env();
    let (code, _, stderr) = sim(&["--hands", "0"]);
    assert_eq!(code, 2);
    assert!(stderr.contains("hands must be >= 1"));

    let (code, _, stderr) = sim(&["--hands", "1", "--hero-style", "shark"]);
    assert_eq!(code, 2);
    assert!(stderr.contains("Unknown style: shark"));
}
