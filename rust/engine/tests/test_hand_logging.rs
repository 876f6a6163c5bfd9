use std::fs;

use holdem_engine::engine::{BettingEngine, TableConfig};
use holdem_engine::logger::{HandHistory, HandLogger};
use holdem_engine::player::{BetAction as A, SeatId};

fn played_hand() -> (BettingEngine, holdem_engine::engine::ShowdownResult) {
    let config = TableConfig {
        seed: Some(21),
        ..TableConfig::default()
    };
    let mut eng = BettingEngine::with_stacks(&[100.0, 100.0, 100.0], config).unwrap();
    eng.start_hand().unwrap();
    eng.apply_action(A::Raise(3.0)).unwrap();
    eng.apply_action(A::Fold).unwrap();
    eng.apply_action(A::Fold).unwrap();
    let result = eng.settle_showdown().unwrap();
    (eng, result)
}

#[test]
fn history_is_assembled_from_state() {
    let (eng, result) = played_hand();
    let h = HandHistory::from_state("20260101-000001".to_string(), eng.state(), Some(&result));

    assert_eq!(h.hand_number, 1);
    assert_eq!(h.hero_cards.len(), 2);
    assert_eq!(h.actions.len(), 3);
    assert_eq!(h.pot, 4.5);
    assert_eq!(h.winners, vec![SeatId::Hero]);
    assert!(h.winning_hand.is_none());
    assert!(h.winning_cards.is_empty());
    assert_eq!(h.player_stacks.len(), 3);
    assert_eq!(h.player_stacks[0].stack, 101.5);
}

#[test]
fn writes_jsonl_with_lf_only() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hands/out.jsonl");
    let (eng, result) = played_hand();

    let mut logger = HandLogger::create(&path).expect("create logger");
    for _ in 0..2 {
        let id = logger.next_id();
        let h = HandHistory::from_state(id, eng.state(), Some(&result));
        logger.write(&h).expect("write");
    }

    let bytes = fs::read(&path).expect("read file");
    assert!(bytes.ends_with(b"\n"));
    assert!(!bytes.contains(&b'\r'));
    let text = String::from_utf8(bytes).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);

    let back: HandHistory = serde_json::from_str(lines[1]).unwrap();
    assert!(back.hand_id.ends_with("-000002"));
    assert!(back.ts.is_some(), "ts should be injected");
}

#[test]
fn preset_timestamp_is_preserved() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ts.jsonl");
    let (eng, result) = played_hand();

    let mut logger = HandLogger::create(&path).unwrap();
    let mut h = HandHistory::from_state("20300101-000001".to_string(), eng.state(), Some(&result));
    h.ts = Some("2030-01-01T00:00:00Z".to_string());
    logger.write(&h).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("2030-01-01T00:00:00Z"));
}
