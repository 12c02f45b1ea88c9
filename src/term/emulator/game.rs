// src/term/emulator/game.rs

//! The snake game while it owns the keyboard.

use super::Terminal;
use crate::command::content;
use crate::keys::{KeyInput, KeySymbol};
use crate::snake::{Direction, GameStatus, SnakeGame, TickOutcome};
use crate::term::{
    output::Line,
    session::{Mode, ModeError, ModeKind, SnakeRun},
};
use crate::timer::{TimerEvent, TimerId};
use log::{debug, info, trace, warn};

/// Starts a game. Returns true if it was refused and the prompt should
/// come back.
pub(super) fn start(term: &mut Terminal) -> bool {
    let game = SnakeGame::new(&term.config.snake, &mut term.rng);
    match term.session.enter(Mode::GameActive(SnakeRun::new(game))) {
        Ok(()) => {
            term.idle.suspend(&mut term.sched);
            let tick = term
                .sched
                .schedule_repeating(term.config.snake.tick_ms, TimerEvent::SnakeTick);
            if let Mode::GameActive(run) = term.session.mode_mut() {
                run.tick = Some(tick);
            }
            info!("Terminal: snake started");
            false
        }
        Err(ModeError::AlreadyActive(ModeKind::GameActive)) => {
            term.output.push_text(content::SNAKE_ALREADY_RUNNING);
            true
        }
        Err(err) => {
            warn!("Terminal: cannot start snake: {}", err);
            term.output.push_text(err.to_string());
            true
        }
    }
}

pub(super) fn on_key(term: &mut Terminal, key: &KeyInput) {
    let Mode::GameActive(run) = term.session.mode_mut() else {
        return;
    };
    if run.game.is_over() {
        return;
    }
    let direction = match key.symbol {
        KeySymbol::Up => Some(Direction::UP),
        KeySymbol::Down => Some(Direction::DOWN),
        KeySymbol::Left => Some(Direction::LEFT),
        KeySymbol::Right => Some(Direction::RIGHT),
        _ => None,
    };
    if let Some(direction) = direction {
        if !run.game.request_direction(direction) {
            trace!("Terminal: snake ignored reversal to {:?}", direction);
        }
        return;
    }
    let quit = key.symbol == KeySymbol::Escape || matches!(key.printable(), Some('q' | 'Q'));
    if quit && run.game.quit() {
        game_over(term);
    }
}

pub(super) fn on_tick(term: &mut Terminal, id: TimerId) {
    let Mode::GameActive(run) = term.session.mode_mut() else {
        trace!("Terminal: snake tick {:?} after the game closed", id);
        return;
    };
    if run.tick != Some(id) {
        return;
    }
    if let TickOutcome::GameOver(reason) = run.game.tick(&mut term.rng) {
        debug!("Terminal: snake over: {:?}", reason);
        game_over(term);
    }
}

/// Stops the game loop and holds the result on screen until teardown.
fn game_over(term: &mut Terminal) {
    let hold = term.config.snake.game_over_hold_ms;
    let Mode::GameActive(run) = term.session.mode_mut() else {
        return;
    };
    let GameStatus::GameOver(reason) = run.game.status() else {
        return;
    };
    if let Some(tick) = run.tick.take() {
        term.sched.cancel(tick);
    }
    run.teardown = Some(term.sched.schedule_once(hold, TimerEvent::SnakeTeardown));
    let score = run.game.score();
    term.output.extend([
        Line::highlight(reason.message()),
        Line::text(format!("Final Score: {}", score)),
        Line::dim("Returning to terminal..."),
    ]);
}

pub(super) fn on_teardown(term: &mut Terminal, id: TimerId) {
    match term.session.mode() {
        Mode::GameActive(run) if run.teardown == Some(id) => {}
        _ => return,
    }
    if let Mode::GameActive(mut run) = term.session.leave() {
        run.cancel_timers(&mut term.sched);
        info!("Terminal: snake closed with score {}", run.game.score());
    }
    term.output.print_prompt();
    term.idle.restart(&mut term.sched);
}
