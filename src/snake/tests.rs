// src/snake/tests.rs

use super::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn cells(coords: &[(i32, i32)]) -> Vec<Cell> {
    coords.iter().copied().map(Cell::from).collect()
}

fn game_at(body: &[(i32, i32)], dir: Direction, food: (i32, i32)) -> SnakeGame {
    SnakeGame::with_state(&SnakeConfig::default(), cells(body), dir, food.into())
}

#[test]
fn plain_tick_keeps_length_and_drops_tail() {
    let mut rng = StdRng::seed_from_u64(0);
    let mut game = game_at(&[(7, 10), (6, 10), (5, 10)], Direction::RIGHT, (0, 0));

    assert_eq!(game.tick(&mut rng), TickOutcome::Moved);
    assert_eq!(game.body(), cells(&[(8, 10), (7, 10), (6, 10)]));
    assert_eq!(game.score(), 0);
}

#[test]
fn leaving_the_right_edge_is_a_wall_collision() {
    let mut rng = StdRng::seed_from_u64(0);
    let mut game = game_at(&[(29, 5), (28, 5), (27, 5)], Direction::RIGHT, (0, 0));

    assert_eq!(
        game.tick(&mut rng),
        TickOutcome::GameOver(GameOverReason::Wall)
    );
    let frozen = game.body();
    assert_eq!(game.tick(&mut rng), TickOutcome::Frozen);
    assert_eq!(game.body(), frozen, "no tick mutates a finished game");
    assert_eq!(game.status(), GameStatus::GameOver(GameOverReason::Wall));
}

#[test]
fn every_edge_is_a_wall() {
    let mut rng = StdRng::seed_from_u64(0);
    for (head, dir) in [
        ((0, 5), Direction::LEFT),
        ((5, 0), Direction::UP),
        ((5, 19), Direction::DOWN),
    ] {
        let mut game = game_at(&[head], dir, (10, 10));
        assert_eq!(
            game.tick(&mut rng),
            TickOutcome::GameOver(GameOverReason::Wall),
            "head {:?} moving {:?}",
            head,
            dir
        );
    }
}

#[test]
fn reverse_request_is_ignored() {
    let mut rng = StdRng::seed_from_u64(0);
    let mut game = game_at(&[(7, 10), (6, 10), (5, 10)], Direction::RIGHT, (0, 0));

    assert!(!game.request_direction(Direction::LEFT));
    game.tick(&mut rng);
    assert_eq!(game.direction(), Direction::RIGHT);
    assert_eq!(game.body()[0], Cell::new(8, 10));
}

#[test]
fn direction_change_is_applied_on_the_next_tick() {
    let mut rng = StdRng::seed_from_u64(0);
    let mut game = game_at(&[(7, 10), (6, 10), (5, 10)], Direction::RIGHT, (0, 0));

    assert!(game.request_direction(Direction::UP));
    assert_eq!(game.direction(), Direction::RIGHT, "buffered, not applied");
    game.tick(&mut rng);
    assert_eq!(game.body()[0], Cell::new(7, 9));
}

#[test]
fn two_quick_turns_cannot_reverse_into_the_body() {
    let mut rng = StdRng::seed_from_u64(0);
    let mut game = game_at(&[(7, 10), (6, 10), (5, 10)], Direction::RIGHT, (0, 0));

    assert!(game.request_direction(Direction::UP));
    assert!(!game.request_direction(Direction::LEFT));
    assert_eq!(game.tick(&mut rng), TickOutcome::Moved);
}

#[test]
fn running_into_the_body_is_a_self_collision() {
    let mut rng = StdRng::seed_from_u64(0);
    // A hook shape: moving up from (5,5) runs into (5,4).
    let mut game = game_at(
        &[(5, 5), (6, 5), (6, 4), (5, 4), (4, 4)],
        Direction::LEFT,
        (0, 0),
    );
    game.request_direction(Direction::UP);
    assert_eq!(
        game.tick(&mut rng),
        TickOutcome::GameOver(GameOverReason::SelfCollision)
    );
}

#[test]
fn the_tail_cell_counts_as_body() {
    let mut rng = StdRng::seed_from_u64(0);
    let mut game = game_at(&[(5, 5), (5, 6), (6, 6), (6, 5)], Direction::RIGHT, (0, 0));
    assert_eq!(
        game.tick(&mut rng),
        TickOutcome::GameOver(GameOverReason::SelfCollision)
    );
}

#[test]
fn eating_grows_scores_and_respawns_food_off_the_body() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut game = game_at(&[(7, 10), (6, 10), (5, 10)], Direction::RIGHT, (8, 10));

    assert_eq!(game.tick(&mut rng), TickOutcome::Ate);
    assert_eq!(game.body(), cells(&[(8, 10), (7, 10), (6, 10), (5, 10)]));
    assert_eq!(game.score(), 10);
    assert!(!game.body().contains(&game.food()));
}

#[test]
fn food_never_spawns_on_the_snake() {
    let config = SnakeConfig::default();
    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        let game = SnakeGame::new(&config, &mut rng);
        assert!(!game.body().contains(&game.food()), "seed {}", seed);
        assert_eq!(game.body(), cells(&[(7, 10), (6, 10), (5, 10)]));
        assert_eq!(game.direction(), Direction::RIGHT);
    }
}

#[test]
fn filling_the_board_ends_the_game() {
    let config = SnakeConfig {
        board_width: 2,
        board_height: 1,
        ..SnakeConfig::default()
    };
    let mut rng = StdRng::seed_from_u64(0);
    let mut game = SnakeGame::with_state(&config, cells(&[(0, 0)]), Direction::RIGHT, (1, 0).into());
    assert_eq!(
        game.tick(&mut rng),
        TickOutcome::GameOver(GameOverReason::BoardCleared)
    );
    assert_eq!(game.score(), 10);
}

#[test]
fn quit_aborts_once() {
    let mut game = game_at(&[(7, 10)], Direction::RIGHT, (0, 0));
    assert!(game.quit());
    assert_eq!(game.status(), GameStatus::GameOver(GameOverReason::Aborted));
    assert!(!game.quit());
    assert!(!game.request_direction(Direction::UP));
}

#[test]
fn body_cells_stay_unique_during_play() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut game = SnakeGame::new(&SnakeConfig::default(), &mut rng);
    let turns = [Direction::DOWN, Direction::RIGHT, Direction::UP, Direction::RIGHT];
    for step in 0..60 {
        if step % 5 == 0 {
            game.request_direction(turns[(step / 5) % turns.len()]);
        }
        if let TickOutcome::GameOver(_) = game.tick(&mut rng) {
            break;
        }
        let body = game.body();
        let mut sorted = body.iter().map(|c| (c.x, c.y)).collect::<Vec<_>>();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), body.len());
        assert!(!body.contains(&game.food()));
    }
}

#[test]
fn board_projection_marks_head_body_and_food() {
    let game = game_at(&[(2, 1), (1, 1)], Direction::RIGHT, (4, 0));
    let rows = game.board_rows();
    assert_eq!(rows.len(), 20);
    assert!(rows.iter().all(|r| r.chars().count() == 30));
    assert_eq!(rows[0].chars().nth(4), Some(FOOD));
    assert_eq!(rows[1].chars().nth(2), Some(HEAD));
    assert_eq!(rows[1].chars().nth(1), Some(BODY));
}
