//! Full-hand walkthroughs of every payoff line, plus the legality and
//! information-hiding contracts, driven through the public API only.

use kuhn_poker::{
    Action, ActionClass, EngineConfig, EngineError, KuhnEngine, PlayerId, Rank, Seat,
    CHANCE_INDEX,
};

fn engine(start: u8) -> KuhnEngine {
    KuhnEngine::new(EngineConfig::new().start_turn(PlayerId::new(start)).seed(0))
}

fn deal(p0: u8, p1: u8) -> Action {
    Action::Deal {
        ranks: [Rank(p0), Rank(p1)],
    }
}

/// Play a dealt hand through a fixed move sequence.
fn play(start: u8, ranks: (u8, u8), moves: &[Action]) -> KuhnEngine {
    let mut engine = engine(start);
    engine.init();
    engine.forward(deal(ranks.0, ranks.1)).unwrap();
    for &action in moves {
        engine.forward(action).unwrap();
    }
    engine
}

#[test]
fn test_after_init_only_chance_can_act() {
    let mut engine = engine(0);
    let t = engine.init();

    assert_eq!(t.public.turn(), Seat::Chance);
    assert!(!t.persons[CHANCE_INDEX].available().is_empty());
    for player in PlayerId::both() {
        assert!(t.persons[player.index()].available().is_empty());
        assert_eq!(t.persons[player.index()].rank(), None);
    }
}

#[test]
fn test_non_chance_action_cannot_open_the_hand() {
    for opener in [Action::Check, Action::Bet] {
        let mut engine = engine(0);
        engine.init();
        assert_eq!(engine.forward(opener), Err(EngineError::DealRequired));
    }
}

#[test]
fn test_check_check_higher_rank_wins_one() {
    let engine = play(0, (2, 0), &[Action::Check, Action::Check]);
    assert_eq!(engine.public().scores(), Some([1, -1]));

    let engine = play(0, (0, 2), &[Action::Check, Action::Check]);
    assert_eq!(engine.public().scores(), Some([-1, 1]));
}

#[test]
fn test_bet_check_first_wins_one_regardless_of_ranks() {
    for ranks in [(0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1)] {
        let engine = play(0, ranks, &[Action::Bet, Action::Check]);
        assert_eq!(engine.public().scores(), Some([1, -1]));

        let engine = play(1, ranks, &[Action::Bet, Action::Check]);
        assert_eq!(engine.public().scores(), Some([-1, 1]));
    }
}

#[test]
fn test_bet_bet_higher_rank_wins_two() {
    let engine = play(0, (0, 2), &[Action::Bet, Action::Bet]);
    assert_eq!(engine.public().scores(), Some([-2, 2]));
}

#[test]
fn test_check_bet_check_folds_to_firsts_opponent() {
    // first = 0 checks, faces a bet, checks again: player 1 wins even
    // holding the worse card.
    let engine = play(0, (2, 0), &[Action::Check, Action::Bet, Action::Check]);
    assert_eq!(engine.public().scores(), Some([-1, 1]));
}

#[test]
fn test_check_bet_bet_showdown_for_two() {
    let engine = play(0, (2, 0), &[Action::Check, Action::Bet, Action::Bet]);
    assert_eq!(engine.public().scores(), Some([2, -2]));
}

#[test]
fn test_all_completed_hands_are_zero_sum() {
    let lines: &[&[Action]] = &[
        &[Action::Check, Action::Check],
        &[Action::Bet, Action::Check],
        &[Action::Bet, Action::Bet],
        &[Action::Check, Action::Bet, Action::Check],
        &[Action::Check, Action::Bet, Action::Bet],
    ];

    for start in [0, 1] {
        for ranks in [(0, 1), (1, 2), (2, 0)] {
            for line in lines {
                let engine = play(start, ranks, line);
                let [a, b] = engine.public().scores().unwrap();
                assert_eq!(a + b, 0);
            }
        }
    }
}

#[test]
fn test_player_history_length_equals_round() {
    let mut engine = engine(0);
    engine.init();
    engine.forward(deal(2, 0)).unwrap();

    for (expected_round, action) in [Action::Check, Action::Bet, Action::Bet]
        .into_iter()
        .enumerate()
    {
        let t = engine.forward(action).unwrap();
        assert_eq!(t.public.round() as usize, expected_round + 1);
        assert_eq!(t.public.player_history().count(), t.public.round() as usize);
    }
}

#[test]
fn test_turn_never_returns_to_chance() {
    let mut engine = engine(0);
    engine.init();
    engine.forward(deal(2, 0)).unwrap();

    let mut expected = PlayerId::new(0);
    for action in [Action::Check, Action::Bet, Action::Bet] {
        assert_eq!(engine.public().turn(), Seat::Player(expected));
        engine.forward(action).unwrap();
        expected = expected.other();
    }
}

#[test]
fn test_first_responds_to_the_late_bet() {
    // The player asked to act in round 3 is always `first`, the player
    // who checked in round 1.
    for start in [0u8, 1] {
        let mut engine = engine(start);
        engine.init();
        engine.forward(deal(1, 2)).unwrap();
        engine.forward(Action::Check).unwrap();
        let t = engine.forward(Action::Bet).unwrap();

        assert!(!t.public.is_terminal());
        assert_eq!(t.public.turn(), Seat::Player(PlayerId::new(start)));
    }
}

#[test]
fn test_views_never_leak_the_opponents_rank() {
    let mut engine = engine(0);
    engine.init();
    let t = engine.forward(deal(2, 0)).unwrap();

    let p0 = t.view(Seat::Player(PlayerId::new(0)));
    let p1 = t.view(Seat::Player(PlayerId::new(1)));
    assert_eq!(p0.person.rank(), Some(Rank(2)));
    assert_eq!(p1.person.rank(), Some(Rank(0)));

    // The deal's payload never reaches serialized views: history records
    // the deal's identity only.
    for view in &t.views {
        let json = serde_json::to_string(view).unwrap();
        assert!(!json.contains("ranks"));
    }
    let chance = t.view(Seat::Chance);
    assert_eq!(chance.person.rank(), None);
}

#[test]
fn test_history_records_chance_actor_first() {
    let mut engine = engine(1);
    engine.init();
    let t = engine.forward(deal(0, 1)).unwrap();

    let first_record = t.public.history().front().unwrap();
    assert_eq!(first_record.actor, Seat::Chance);
    assert_eq!(first_record.action, ActionClass::Deal);
}

#[test]
fn test_illegal_deal_payloads() {
    let mut engine = engine(0);
    engine.init();

    assert_eq!(engine.forward(deal(0, 0)), Err(EngineError::InvalidDeal));
    assert_eq!(engine.forward(deal(3, 1)), Err(EngineError::InvalidDeal));
    assert_eq!(engine.forward(deal(1, 7)), Err(EngineError::InvalidDeal));
}

#[test]
fn test_hand_over_is_fatal_until_reinit() {
    let mut engine = engine(0);
    engine.init();
    engine.forward(deal(0, 1)).unwrap();
    engine.forward(Action::Check).unwrap();
    engine.forward(Action::Check).unwrap();

    assert_eq!(engine.forward(Action::Bet), Err(EngineError::HandOver));
    assert_eq!(engine.forward(deal(0, 1)), Err(EngineError::HandOver));

    let t = engine.init();
    assert!(!t.public.is_terminal());
}

#[test]
fn test_transition_round_trips_through_serde() {
    let mut engine = engine(0);
    engine.init();
    let t = engine.forward(deal(2, 0)).unwrap();

    let json = serde_json::to_string(&t).unwrap();
    let restored: kuhn_poker::Transition = serde_json::from_str(&json).unwrap();
    assert_eq!(t, restored);
}
