// src/timer.rs

//! Virtual-time scheduler for every delayed or repeating operation.
//!
//! Nothing in the terminal ever blocks. A component that wants to "wait"
//! schedules a [`TimerEvent`] and returns; the owner of the [`Scheduler`]
//! later feeds the current time into [`Scheduler::pop_due`] and routes each
//! fired event back to the component that owns it. Because time is just a
//! number of milliseconds, tests drive the whole system without sleeping.

use log::trace;

/// Milliseconds since the scheduler was created.
pub type Millis = u64;

/// Handle to a scheduled timer. Owners keep it so they can cancel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// Identifies which component a fired timer belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerEvent {
    /// The exclusive scripted sequence wants its next step.
    SequenceStep,
    /// One simulation step of the snake game.
    SnakeTick,
    /// The game-over overlay has been shown long enough.
    SnakeTeardown,
    /// No activity for the idle period.
    IdleTimeout,
    /// One frame of the scroll-indicator morph.
    IndicatorMorph,
    /// The startup sequence should begin.
    StartupDelay,
}

#[derive(Debug, Clone)]
struct Timer {
    id: TimerId,
    due: Millis,
    period: Option<Millis>,
    event: TimerEvent,
}

/// Single-threaded timer queue driven by externally supplied time.
#[derive(Debug, Default)]
pub struct Scheduler {
    now: Millis,
    next_id: u64,
    timers: Vec<Timer>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// The time of the most recently fired timer, or the last `advance`.
    pub fn now(&self) -> Millis {
        self.now
    }

    pub fn schedule_once(&mut self, delay: Millis, event: TimerEvent) -> TimerId {
        self.insert(delay, None, event)
    }

    /// Fires every `period` ms until cancelled. A zero period is treated as 1.
    pub fn schedule_repeating(&mut self, period: Millis, event: TimerEvent) -> TimerId {
        let period = period.max(1);
        self.insert(period, Some(period), event)
    }

    fn insert(&mut self, delay: Millis, period: Option<Millis>, event: TimerEvent) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let due = self.now.saturating_add(delay);
        trace!("Scheduler: {:?} scheduled as {:?} due at {}", event, id, due);
        self.timers.push(Timer {
            id,
            due,
            period,
            event,
        });
        id
    }

    /// Removes a timer. Returns false if it already fired or never existed.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.timers.len();
        self.timers.retain(|t| t.id != id);
        let removed = self.timers.len() != before;
        if removed {
            trace!("Scheduler: cancelled {:?}", id);
        }
        removed
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.timers.iter().any(|t| t.id == id)
    }

    pub fn pending_count(&self) -> usize {
        self.timers.len()
    }

    /// Number of pending timers carrying `event`.
    pub fn pending_of(&self, event: TimerEvent) -> usize {
        self.timers.iter().filter(|t| t.event == event).count()
    }

    /// Earliest deadline among pending timers.
    pub fn next_deadline(&self) -> Option<Millis> {
        self.timers.iter().map(|t| t.due).min()
    }

    /// Pops the earliest timer due at or before `now`, advancing the clock
    /// to its deadline. Ties fire in creation order. Repeating timers are
    /// re-armed one period after their deadline.
    pub fn pop_due(&mut self, now: Millis) -> Option<(TimerId, TimerEvent)> {
        let index = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= now)
            .min_by_key(|(_, t)| (t.due, t.id))
            .map(|(i, _)| i)?;

        let due = self.timers[index].due;
        self.now = self.now.max(due);
        let timer = &mut self.timers[index];
        let fired = (timer.id, timer.event);
        match timer.period {
            Some(period) => timer.due = due + period,
            None => {
                self.timers.swap_remove(index);
            }
        }
        Some(fired)
    }

    /// Moves the clock forward once all due timers have been popped.
    pub fn advance(&mut self, now: Millis) {
        self.now = self.now.max(now);
    }

    /// Drops every pending timer.
    pub fn clear(&mut self) {
        self.timers.clear();
    }
}
