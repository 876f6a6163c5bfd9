use holdem_ai::decision::decide;
use holdem_ai::style::PlayerStyleConfig;
use holdem_ai::{create_ai, AIOpponent};
use holdem_engine::cards::parse_cards;
use holdem_engine::engine::{BettingEngine, TableConfig};
use holdem_engine::game::{GameState, Phase, Street};
use holdem_engine::player::{BetAction, Chips, Player, SeatId};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn player(seat: SeatId, hole: &str, stack: Chips, bet: Chips) -> Player {
    let mut p = Player::new(seat, stack);
    p.hole_cards = parse_cards(hole).unwrap();
    p.current_bet = bet;
    p
}

fn table(players: Vec<Player>, board: &str, street: Street, current_bet: Chips, pot: Chips) -> GameState {
    GameState {
        hand_number: 1,
        street,
        phase: Phase::Betting,
        pot,
        community_cards: parse_cards(board).unwrap(),
        players,
        acting_index: 0,
        dealer_index: 0,
        small_blind_index: 1,
        big_blind_index: 2,
        small_blind: 0.5,
        big_blind: 1.0,
        current_bet,
        min_raise: if current_bet > 0.0 { current_bet * 2.0 } else { 1.0 },
        action_history: Vec::new(),
    }
}

fn style(id: &str) -> PlayerStyleConfig {
    PlayerStyleConfig::preset(id).unwrap()
}

#[test]
fn rock_folds_trash_facing_the_blind() {
    let hero = player(SeatId::Hero, "7c 2d", 100.0, 0.0);
    let st = table(
        vec![
            hero.clone(),
            player(SeatId::Opponent1, "Kc Kd", 99.5, 0.5),
            player(SeatId::Opponent2, "Qc Qd", 99.0, 1.0),
        ],
        "",
        Street::Preflop,
        1.0,
        0.0,
    );
    let mut rng = ChaCha20Rng::seed_from_u64(1);
    assert_eq!(decide(&hero, &style("rock"), &st, &mut rng), BetAction::Fold);
}

#[test]
fn seat_before_the_button_is_late_when_a_seat_sits_out() {
    let mut empty = Player::new(SeatId::Opponent1, 0.0);
    empty.is_folded = true;
    let cutoff = player(SeatId::Opponent3, "Kh Qd", 100.0, 0.0);
    let st = table(
        vec![
            player(SeatId::Hero, "Ac Ad", 100.0, 0.0),
            empty,
            player(SeatId::Opponent2, "Jc Jd", 97.0, 3.0),
            cutoff.clone(),
        ],
        "",
        Street::Preflop,
        3.0,
        0.0,
    );
    // KQo only clears a tight range with the late-position bonus
    let mut rng = ChaCha20Rng::seed_from_u64(4);
    assert_ne!(decide(&cutoff, &style("tag"), &st, &mut rng), BetAction::Fold);
}

#[test]
fn weak_hand_with_a_free_option_checks() {
    let bb = player(SeatId::Opponent2, "7c 2d", 99.0, 1.0);
    let st = table(
        vec![
            player(SeatId::Hero, "Kc Kd", 99.0, 1.0),
            player(SeatId::Opponent1, "Qc Qd", 99.0, 1.0),
            bb.clone(),
        ],
        "",
        Street::Preflop,
        1.0,
        0.0,
    );
    for seed in 0..20 {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        assert_eq!(decide(&bb, &style("rock"), &st, &mut rng), BetAction::Check);
    }
}

#[test]
fn premium_pair_on_the_button_raises() {
    let hero = player(SeatId::Hero, "Ah As", 100.0, 0.0);
    let st = table(
        vec![
            hero.clone(),
            player(SeatId::Opponent1, "Kc Kd", 99.5, 0.5),
            player(SeatId::Opponent2, "Qc Qd", 99.0, 1.0),
        ],
        "",
        Street::Preflop,
        1.0,
        0.0,
    );
    for id in ["tag", "lag", "rock", "station", "maniac"] {
        let mut rng = ChaCha20Rng::seed_from_u64(2);
        match decide(&hero, &style(id), &st, &mut rng) {
            BetAction::Raise(total) => {
                assert!(total >= st.min_raise, "{}: {}", id, total);
                assert!(total < hero.max_commitment());
            }
            other => panic!("{} should raise aces, got {:?}", id, other),
        }
    }
}

#[test]
fn short_stack_raise_becomes_all_in() {
    let hero = player(SeatId::Hero, "Ah As", 3.0, 0.0);
    let st = table(
        vec![
            hero.clone(),
            player(SeatId::Opponent1, "Kc Kd", 99.5, 0.5),
            player(SeatId::Opponent2, "Qc Qd", 99.0, 1.0),
        ],
        "",
        Street::Preflop,
        1.0,
        0.0,
    );
    let mut rng = ChaCha20Rng::seed_from_u64(3);
    assert_eq!(decide(&hero, &style("maniac"), &st, &mut rng), BetAction::AllIn);
}

#[test]
fn passive_style_checks_air_on_a_dry_board() {
    let hero = player(SeatId::Opponent1, "4c 3d", 90.0, 0.0);
    let st = table(
        vec![player(SeatId::Hero, "Ah As", 90.0, 0.0), hero.clone()],
        "Kh 8s Jd",
        Street::Flop,
        0.0,
        20.0,
    );
    for seed in 0..20 {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        assert_eq!(decide(&hero, &style("rock"), &st, &mut rng), BetAction::Check);
    }
}

#[test]
fn made_nuts_facing_a_bet_never_folds() {
    let hero = player(SeatId::Opponent1, "Ah Kh", 80.0, 0.0);
    let st = table(
        vec![player(SeatId::Hero, "2c 2d", 70.0, 10.0), hero.clone()],
        "Qh Jh Th 3c",
        Street::Turn,
        10.0,
        20.0,
    );
    for id in ["tag", "rock", "station"] {
        for seed in 0..10 {
            let mut rng = ChaCha20Rng::seed_from_u64(seed);
            let action = decide(&hero, &style(id), &st, &mut rng);
            assert!(
                matches!(action, BetAction::Call | BetAction::Raise(_) | BetAction::AllIn),
                "{} folded the nuts: {:?}",
                id,
                action
            );
        }
    }
}

#[test]
fn seeded_decisions_are_repeatable() {
    let hero = player(SeatId::Hero, "9h 8h", 100.0, 0.0);
    let st = table(
        vec![hero.clone(), player(SeatId::Opponent1, "2c 2d", 90.0, 10.0)],
        "7h 6c 2s",
        Street::Flop,
        10.0,
        10.0,
    );
    let a = decide(&hero, &style("lag"), &st, &mut ChaCha20Rng::seed_from_u64(8));
    let b = decide(&hero, &style("lag"), &st, &mut ChaCha20Rng::seed_from_u64(8));
    assert_eq!(a, b);
}

#[test]
fn ai_actions_are_always_accepted_by_the_engine() {
    let ais: Vec<Box<dyn AIOpponent>> = ["tag", "lag", "station", "maniac"]
        .iter()
        .map(|id| create_ai(id).unwrap())
        .collect();
    let config = TableConfig {
        seed: Some(2024),
        ..TableConfig::default()
    };
    let mut engine = BettingEngine::with_stacks(&[50.0; 4], config).unwrap();
    let mut rng = ChaCha20Rng::seed_from_u64(7);

    for _ in 0..30 {
        if engine.start_hand().is_err() {
            break;
        }
        while engine.state().phase == Phase::Betting {
            let st = engine.state();
            let seat = st.acting_index;
            let p = &st.players[seat];
            let action = ais[seat].get_action(st, seat, &mut rng);
            if let BetAction::Raise(total) = action {
                assert!(total <= p.max_commitment(), "raise above stack");
                assert!(total >= st.min_raise, "raise below minimum");
            }
            engine.apply_action(action).expect("AI produced an illegal action");
        }
        engine.settle_showdown().unwrap();
        let total: Chips = engine.state().players.iter().map(|p| p.stack).sum();
        assert!((total - 200.0).abs() < 1e-6);
    }
}

#[test]
fn unusable_equity_estimate_counts_as_no_equity() {
    // 7c shows up in both hand and board, so the estimate cannot be sampled
    let hero = player(SeatId::Hero, "7c 2d", 90.0, 0.0);
    let st = table(
        vec![hero.clone(), player(SeatId::Opponent1, "Ac Ad", 85.0, 5.0)],
        "7c Ks 4d",
        Street::Flop,
        5.0,
        20.0,
    );
    let never_bluffs = PlayerStyleConfig::new("Honest", "honest", 30.0, 10.0, 5.0, 0.0).unwrap();
    for seed in 0..10 {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        assert_eq!(decide(&hero, &never_bluffs, &st, &mut rng), BetAction::Fold);
    }
}
