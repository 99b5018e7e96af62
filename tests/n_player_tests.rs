//! N-player tests.
//!
//! Verify that nothing in round resolution assumes two players.

use duel_engine::core::{
    Action, GameNum, GameSettings, PlayerAction, PlayerActionSet, PlayerId, PlayerSet, RoundError,
};
use duel_engine::rules::{Game, GameResult};

fn pid(id: u32) -> PlayerId {
    PlayerId::new(id)
}

fn game(player_count: u32) -> Game {
    let players = (1..=player_count).fold(PlayerSet::new(), |set, id| {
        set.with_player(pid(id), format!("player-{}", id))
    });
    let template = (1..=3)
        .flat_map(|level| [Action::attack(level), Action::defence(level)])
        .collect();
    let settings = GameSettings::new(players)
        .with_total_games(2)
        .with_actions(template)
        .with_just_guard_point(4);
    Game::new(settings).unwrap()
}

fn points(game: &Game, id: u32) -> i32 {
    game.state().player(pid(id)).unwrap().points
}

/// Test a three-way chain: 1 -> 2 -> 3, with 3 defending.
#[test]
fn test_three_player_chain() {
    let mut game = game(3);

    game.apply_round(
        PlayerActionSet::new()
            .with(PlayerAction::attack(pid(1), pid(2), 3))
            .with(PlayerAction::attack(pid(2), pid(3), 2))
            .with(PlayerAction::defend(pid(3), 2)),
    )
    .unwrap();

    // 2 was attacking, so 1 lands unopposed
    assert_eq!(points(&game, 1), 3);
    // 3 guarded 2's attack exactly
    assert_eq!(points(&game, 2), 0);
    assert_eq!(points(&game, 3), 4);
}

/// Test two attackers on one defender.
#[test]
fn test_two_attackers_one_defender() {
    let mut game = game(3);

    game.apply_round(
        PlayerActionSet::new()
            .with(PlayerAction::attack(pid(1), pid(3), 3))
            .with(PlayerAction::attack(pid(2), pid(3), 1))
            .with(PlayerAction::defend(pid(3), 1)),
    )
    .unwrap();

    assert_eq!(points(&game, 1), 2);
    assert_eq!(points(&game, 2), 0);
    assert_eq!(points(&game, 3), 4);
}

/// Test that an attack on oneself is scored against one's own attack.
#[test]
fn test_self_target_is_unopposed() {
    let mut game = game(2);

    game.apply_round(
        PlayerActionSet::new()
            .with(PlayerAction::attack(pid(1), pid(1), 2))
            .with(PlayerAction::defend(pid(2), 3)),
    )
    .unwrap();

    assert_eq!(points(&game, 1), 2);
    assert_eq!(points(&game, 2), 0);
}

/// Test a round larger than the inline capacity of the action set.
#[test]
fn test_six_player_round() {
    let mut game = game(6);

    let round: PlayerActionSet = (1..=6)
        .map(|id| {
            if id % 2 == 1 {
                PlayerAction::attack(pid(id), pid(id + 1), 3)
            } else {
                PlayerAction::defend(pid(id), 1)
            }
        })
        .collect();
    assert_eq!(round.len(), 6);

    game.apply_round(round).unwrap();

    for id in [1, 3, 5] {
        assert_eq!(points(&game, id), 2);
    }
    for id in [2, 4, 6] {
        assert_eq!(points(&game, id), 0);
    }
    assert_eq!(game.state().game_num, GameNum::Active(1));
}

/// Test that a round missing one player is rejected.
#[test]
fn test_missing_player_rejected() {
    let mut game = game(4);

    let err = game
        .apply_round(
            (1..=3)
                .map(|id| PlayerAction::defend(pid(id), 1))
                .collect(),
        )
        .unwrap_err();

    assert_eq!(err, RoundError::InvalidRoundSize { expected: 4, actual: 3 });
}

/// Test that submission order does not change the resulting state.
#[test]
fn test_submission_order_irrelevant_for_valid_rounds() {
    let submissions = vec![
        PlayerAction::attack(pid(1), pid(2), 2),
        PlayerAction::attack(pid(2), pid(3), 3),
        PlayerAction::defend(pid(3), 1),
        PlayerAction::attack(pid(4), pid(1), 1),
    ];

    let forward = game(4);
    let backward = game(4);

    let in_order: PlayerActionSet = submissions.iter().cloned().collect();
    let reversed: PlayerActionSet = submissions.iter().rev().cloned().collect();

    let a = forward.resolve_round(&in_order).unwrap();
    let b = backward.resolve_round(&reversed).unwrap();

    assert_eq!(a, b);
    assert_eq!(a.player(pid(1)).unwrap().points, 2);
    assert_eq!(a.player(pid(2)).unwrap().points, 2);
    assert_eq!(a.player(pid(3)).unwrap().points, 0);
    assert_eq!(a.player(pid(4)).unwrap().points, 1);
}

/// Test that equal points for everyone is a draw.
#[test]
fn test_all_tied_is_draw() {
    let players = (1..=3).fold(PlayerSet::new(), |set, id| {
        set.with_player(pid(id), format!("player-{}", id))
    });
    let settings = GameSettings::new(players)
        .with_total_games(1)
        .with_actions([Action::attack(2)].into_iter().collect());
    let mut game = Game::new(settings).unwrap();

    game.apply_round(
        PlayerActionSet::new()
            .with(PlayerAction::attack(pid(1), pid(3), 2))
            .with(PlayerAction::attack(pid(2), pid(3), 2))
            .with(PlayerAction::attack(pid(3), pid(3), 2)),
    )
    .unwrap();

    assert!(game.is_over());
    assert_eq!(game.result(), Some(GameResult::Draw));
}

/// Test a shared win where one player trails.
#[test]
fn test_shared_winners_with_trailer() {
    let players = (1..=3).fold(PlayerSet::new(), |set, id| {
        set.with_player(pid(id), format!("player-{}", id))
    });
    let settings = GameSettings::new(players)
        .with_total_games(1)
        .with_actions([Action::attack(2), Action::defence(3)].into_iter().collect());
    let mut game = Game::new(settings).unwrap();

    game.apply_round(
        PlayerActionSet::new()
            .with(PlayerAction::attack(pid(1), pid(2), 2))
            .with(PlayerAction::attack(pid(2), pid(1), 2))
            .with(PlayerAction::defend(pid(3), 3)),
    )
    .unwrap();
    game.apply_round(
        PlayerActionSet::new()
            .with(PlayerAction::defend(pid(1), 3))
            .with(PlayerAction::defend(pid(2), 3))
            .with(PlayerAction::attack(pid(3), pid(1), 2)),
    )
    .unwrap();

    assert!(game.is_over());
    assert_eq!(game.result(), Some(GameResult::Winners(vec![pid(1), pid(2)])));
}
