use holdem_engine::cards::{parse_cards, Card};
use holdem_engine::odds::{equity, expected_value, hit_probability, outs, pot_odds};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn cards(s: &str) -> Vec<Card> {
    parse_cards(s).expect("valid card text")
}

#[test]
fn pot_odds_reference_values() {
    assert_eq!(pot_odds(100.0, 0.0), 100.0);
    assert_eq!(pot_odds(100.0, 50.0), 33.3);
}

#[test]
fn hit_probability_reference_values() {
    assert_eq!(hit_probability(8, 1), 16.0);
    assert!((hit_probability(9, 2) - 35.0).abs() <= 0.2);
    assert!((hit_probability(4, 2) - 16.5).abs() <= 0.2);
}

#[test]
fn aces_dominate_a_random_hand() {
    let mut rng = ChaCha20Rng::seed_from_u64(11);
    let eq = equity(&cards("Ac Ad"), &[], 1, 3000, &mut rng).unwrap();
    assert!((eq - 85.0).abs() < 5.0, "AA vs one: {}", eq);
}

#[test]
fn equity_falls_with_more_opponents() {
    let mut rng = ChaCha20Rng::seed_from_u64(12);
    let hero = cards("Kh Qh");
    let heads_up = equity(&hero, &[], 1, 2000, &mut rng).unwrap();
    let three_way = equity(&hero, &[], 3, 2000, &mut rng).unwrap();
    assert!(heads_up > three_way + 10.0, "{} vs {}", heads_up, three_way);
}

#[test]
fn seeded_equity_is_repeatable() {
    let hero = cards("7s 7d");
    let board = cards("2c 9h Kd");
    let a = equity(&hero, &board, 2, 500, &mut ChaCha20Rng::seed_from_u64(3)).unwrap();
    let b = equity(&hero, &board, 2, 500, &mut ChaCha20Rng::seed_from_u64(3)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn open_ended_straight_draw_outs() {
    // eight cards complete the straight, fifteen pair a hole or board card
    let n = outs(&cards("9c 8d"), &cards("7h 6s 2c")).unwrap();
    assert_eq!(n, 8 + 15);
}

#[test]
fn calling_with_the_right_price_is_positive() {
    let ev = expected_value(100.0, 20.0, 40.0);
    assert!((ev - 28.0).abs() < 1e-9);
}
