// src/snake/mod.rs

//! Fixed-tick Snake simulation.
//!
//! The game is plain data: the body is a list of cells, head first, and the
//! board shown to the user is a projection rebuilt from that data on demand.
//! The engine never touches timers; the terminal owns the tick and teardown
//! timers and calls [`SnakeGame::tick`] when the tick fires.

use std::collections::VecDeque;

use log::{debug, trace};
use rand::Rng;

use crate::config::SnakeConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Cell { x, y }
    }

    fn offset(self, dir: Direction) -> Cell {
        Cell::new(self.x + dir.dx, self.y + dir.dy)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((x, y): (i32, i32)) -> Self {
        Cell::new(x, y)
    }
}

/// Unit step on the board. Only the four axis directions are valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Direction {
    pub dx: i32,
    pub dy: i32,
}

impl Direction {
    pub const UP: Direction = Direction { dx: 0, dy: -1 };
    pub const DOWN: Direction = Direction { dx: 0, dy: 1 };
    pub const LEFT: Direction = Direction { dx: -1, dy: 0 };
    pub const RIGHT: Direction = Direction { dx: 1, dy: 0 };

    pub fn is_reverse_of(self, other: Direction) -> bool {
        self.dx == -other.dx && self.dy == -other.dy
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverReason {
    Wall,
    SelfCollision,
    Aborted,
    /// Nowhere left to put food.
    BoardCleared,
}

impl GameOverReason {
    pub fn message(self) -> &'static str {
        match self {
            GameOverReason::Wall => "Game Over - Wall Collision!",
            GameOverReason::SelfCollision => "Game Over - Self Collision!",
            GameOverReason::Aborted => "Game Aborted!",
            GameOverReason::BoardCleared => "You Win - Board Cleared!",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    GameOver(GameOverReason),
}

/// Result of one simulation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Moved,
    Ate,
    GameOver(GameOverReason),
    /// The game was already over; nothing changed.
    Frozen,
}

pub const HEAD: char = '@';
pub const BODY: char = 'o';
pub const FOOD: char = '*';
pub const EMPTY: char = ' ';

#[derive(Debug, Clone)]
pub struct SnakeGame {
    body: VecDeque<Cell>,
    direction: Direction,
    pending_direction: Option<Direction>,
    food: Cell,
    score: u32,
    width: i32,
    height: i32,
    score_per_food: u32,
    status: GameStatus,
}

impl SnakeGame {
    /// Fresh game: three cells heading right, food somewhere free.
    pub fn new(config: &SnakeConfig, rng: &mut impl Rng) -> Self {
        let y = (config.board_height / 2).max(0);
        let body = vec![Cell::new(7, y), Cell::new(6, y), Cell::new(5, y)];
        let mut game = SnakeGame::with_state(config, body, Direction::RIGHT, Cell::new(0, 0));
        if let Some(food) = game.random_free_cell(rng) {
            game.food = food;
        }
        debug!(
            "SnakeGame: new {}x{} board, food at {:?}",
            game.width, game.height, game.food
        );
        game
    }

    /// Builds a game from explicit state.
    pub fn with_state(
        config: &SnakeConfig,
        body: Vec<Cell>,
        direction: Direction,
        food: Cell,
    ) -> Self {
        SnakeGame {
            body: body.into(),
            direction,
            pending_direction: None,
            food,
            score: 0,
            width: config.board_width,
            height: config.board_height,
            score_per_food: config.score_per_food,
            status: GameStatus::Running,
        }
    }

    /// Buffers a direction change for the next tick. The exact reverse of
    /// the current direction is rejected.
    pub fn request_direction(&mut self, dir: Direction) -> bool {
        if self.is_over() || dir.is_reverse_of(self.direction) {
            trace!("SnakeGame: rejected direction {:?}", dir);
            return false;
        }
        self.pending_direction = Some(dir);
        true
    }

    /// Runs one simulation step.
    pub fn tick(&mut self, rng: &mut impl Rng) -> TickOutcome {
        if self.is_over() {
            return TickOutcome::Frozen;
        }
        if let Some(dir) = self.pending_direction.take() {
            self.direction = dir;
        }

        let Some(&head) = self.body.front() else {
            return self.finish(GameOverReason::SelfCollision);
        };
        let next = head.offset(self.direction);

        if !self.in_bounds(next) {
            return self.finish(GameOverReason::Wall);
        }
        if self.body.contains(&next) {
            return self.finish(GameOverReason::SelfCollision);
        }

        self.body.push_front(next);
        if next == self.food {
            self.score += self.score_per_food;
            match self.random_free_cell(rng) {
                Some(food) => self.food = food,
                None => return self.finish(GameOverReason::BoardCleared),
            }
            TickOutcome::Ate
        } else {
            self.body.pop_back();
            TickOutcome::Moved
        }
    }

    /// Forces the game over without any collision check.
    pub fn quit(&mut self) -> bool {
        if self.is_over() {
            return false;
        }
        self.finish(GameOverReason::Aborted);
        true
    }

    fn finish(&mut self, reason: GameOverReason) -> TickOutcome {
        debug!("SnakeGame: {} (score {})", reason.message(), self.score);
        self.status = GameStatus::GameOver(reason);
        TickOutcome::GameOver(reason)
    }

    fn in_bounds(&self, cell: Cell) -> bool {
        (0..self.width).contains(&cell.x) && (0..self.height).contains(&cell.y)
    }

    /// Uniform pick among cells not covered by the body.
    fn random_free_cell(&self, rng: &mut impl Rng) -> Option<Cell> {
        let free: Vec<Cell> = (0..self.height)
            .flat_map(|y| (0..self.width).map(move |x| Cell::new(x, y)))
            .filter(|cell| !self.body.contains(cell))
            .collect();
        if free.is_empty() {
            return None;
        }
        Some(free[rng.gen_range(0..free.len())])
    }

    pub fn body(&self) -> Vec<Cell> {
        self.body.iter().copied().collect()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn food(&self) -> Cell {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        matches!(self.status, GameStatus::GameOver(_))
    }

    pub fn dimensions(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    /// The board as text rows, one char per cell.
    pub fn board_rows(&self) -> Vec<String> {
        let mut grid = vec![vec![EMPTY; self.width.max(0) as usize]; self.height.max(0) as usize];
        let mut put = |cell: Cell, c: char| {
            if self.in_bounds(cell) {
                grid[cell.y as usize][cell.x as usize] = c;
            }
        };
        put(self.food, FOOD);
        for (i, &cell) in self.body.iter().enumerate() {
            put(cell, if i == 0 { HEAD } else { BODY });
        }
        grid.into_iter().map(|row| row.into_iter().collect()).collect()
    }
}

#[cfg(test)]
mod tests;
