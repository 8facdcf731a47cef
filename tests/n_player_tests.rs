//! N-Player capability verification tests.
//!
//! These tests verify that the engine has no hidden 2-player assumptions
//! and plays full games for 1-8 players under every rule combination.

use chopsticks::{GameModel, HandId, PlayerId, TapRule, WinRule};

const WIN_RULES: [WinRule; 3] = [WinRule::Standard, WinRule::MisereA, WinRule::MisereB];

/// Play the first legal move until the game ends or `max_turns` pass.
fn play_first_moves(game: &mut GameModel, max_turns: usize) -> usize {
    let mut turns = 0;
    while turns < max_turns {
        let Some(mv) = game.legal_moves().first().copied() else {
            break;
        };
        assert!(game.apply(&mv), "legal move {} was rejected", mv);
        turns += 1;
    }
    turns
}

/// Test that initial state is correct for varying player counts.
#[test]
fn test_initial_state_player_counts() {
    for player_count in 1..=8 {
        let game = GameModel::make(player_count, TapRule::Cutoff, WinRule::Standard).unwrap();

        assert_eq!(game.player_count(), player_count);
        assert_eq!(game.all_player_hands().len(), player_count);
        assert_eq!(game.active_players().len(), player_count);
        assert_eq!(game.tap_targets().len(), 2 * (player_count - 1));

        // Player after the last is not in the game
        assert!(game.player_hands(PlayerId::new(player_count as u8 + 1)).is_empty());
    }
}

/// Test turn order visits every player in ascending order with wraparound.
#[test]
fn test_turn_rotation_n_players() {
    let player_count = 5;
    let mut game = GameModel::make(player_count, TapRule::Rollover, WinRule::Standard).unwrap();

    for expected in (1..=player_count as u8).chain(1..=2) {
        let current = game.current_player_id();
        assert_eq!(current, PlayerId::new(expected));

        // Self-tap keeps every other hand untouched
        assert!(game.apply_tap(HandId::FIRST, (current, HandId::SECOND)));
    }
}

/// Cutoff games with taps offered first always finish.
#[test]
fn test_cutoff_games_finish() {
    for player_count in 2..=8 {
        for win_rule in WIN_RULES {
            let mut game = GameModel::make(player_count, TapRule::Cutoff, win_rule).unwrap();
            play_first_moves(&mut game, 1000);

            assert!(game.is_over(), "{} players did not finish", player_count);
            assert_eq!(game.active_players().len(), 1);
            assert_eq!(game.elimination_order().len(), player_count - 1);

            let survivor = game.active_players()[0];
            let expected = match win_rule {
                WinRule::Standard => Some(survivor),
                WinRule::MisereA => game.elimination_order().first().copied(),
                WinRule::MisereB => game.elimination_order().last().copied(),
            };
            assert_eq!(game.winner(), expected);
            assert!(game.legal_moves().is_empty());
        }
    }
}

/// Rollover games stay consistent however long they run.
#[test]
fn test_rollover_games_stay_consistent() {
    for player_count in 2..=6 {
        let mut game = GameModel::make(player_count, TapRule::Rollover, WinRule::Standard).unwrap();
        let turns = play_first_moves(&mut game, 300);

        assert_eq!(game.turn_number(), turns);
        for (_, hands) in game.all_player_hands() {
            for hand in hands {
                assert!((1..=hand.total_fingers()).contains(&hand.fingers_up()));
            }
        }
    }
}

/// A single-player game is decided from the start under the standard rule.
#[test]
fn test_single_player_game() {
    let mut game = GameModel::make(1, TapRule::Cutoff, WinRule::Standard).unwrap();

    assert_eq!(game.winner(), Some(PlayerId::new(1)));
    assert!(game.is_over());
    assert!(game.tap_targets().is_empty());
    assert!(game.legal_moves().is_empty());

    // Self-taps are still accepted and the turn stays with player 1
    assert!(game.apply_tap(HandId::FIRST, (PlayerId::new(1), HandId::FIRST)));
    assert_eq!(game.current_player_id(), PlayerId::new(1));
}

/// Deterministic replay: the same moves give the same state.
#[test]
fn test_deterministic_replay() {
    let mut game1 = GameModel::make(4, TapRule::Rollover, WinRule::MisereB).unwrap();
    play_first_moves(&mut game1, 100);

    let mut game2 = GameModel::make(4, TapRule::Rollover, WinRule::MisereB).unwrap();
    for record in game1.history().iter() {
        assert_eq!(game2.current_player_id(), record.player);
        assert!(game2.apply(&record.mv));
    }

    assert_eq!(game1, game2);
}
