// src/term/emulator/timers.rs

use super::{game, Terminal};
use crate::command::scripts;
use crate::timer::{Millis, TimerEvent};
use log::{trace, warn};

/// Fires every timer due at or before `now`, in deadline order, routing each
/// to the component that owns it.
pub(super) fn advance(term: &mut Terminal, now: Millis) {
    if now < term.sched.now() {
        warn!(
            "Terminal: time went backwards ({} < {}), ignoring",
            now,
            term.sched.now()
        );
        return;
    }
    while let Some((id, event)) = term.sched.pop_due(now) {
        trace!("Terminal: {:?} fired at {}", event, term.sched.now());
        match event {
            TimerEvent::SequenceStep => {
                let progress = term
                    .sequence
                    .on_timer(id, &mut term.sched, &mut term.output);
                term.on_progress(progress);
            }
            TimerEvent::SnakeTick => {
                game::on_tick(term, id);
                term.dirty = true;
            }
            TimerEvent::SnakeTeardown => game::on_teardown(term, id),
            TimerEvent::IdleTimeout => {
                term.idle.on_timeout();
                term.dirty = true;
            }
            TimerEvent::IndicatorMorph => {
                if term.indicator.on_timer(id, &mut term.sched, &mut term.rng) {
                    term.dirty = true;
                }
            }
            TimerEvent::StartupDelay => {
                if term.startup_timer != Some(id) {
                    continue;
                }
                term.startup_timer = None;
                let startup = scripts::startup(&term.config.behavior);
                term.run_sequence(startup);
            }
        }
    }
    term.sched.advance(now);
}
