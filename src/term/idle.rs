// src/term/idle.rs

//! Tracks the last interaction and raises the idle affordance after a quiet
//! period. Suspended entirely while a non-`Normal` mode owns the input.

use log::trace;

use crate::timer::{Millis, Scheduler, TimerEvent, TimerId};

#[derive(Debug)]
pub struct IdleTracker {
    timeout_ms: Millis,
    last_activity_at: Millis,
    timer: Option<TimerId>,
    visible: bool,
}

impl IdleTracker {
    pub fn new(timeout_ms: Millis) -> Self {
        IdleTracker {
            timeout_ms,
            last_activity_at: 0,
            timer: None,
            visible: false,
        }
    }

    /// Any input or focus event: hide the affordance and restart the countdown.
    pub fn touch(&mut self, sched: &mut Scheduler) {
        self.visible = false;
        self.restart(sched);
    }

    /// (Re)starts the countdown without touching visibility.
    pub fn restart(&mut self, sched: &mut Scheduler) {
        self.cancel_timer(sched);
        self.last_activity_at = sched.now();
        self.timer = Some(sched.schedule_once(self.timeout_ms, TimerEvent::IdleTimeout));
    }

    /// Cancels the countdown and hides the affordance.
    pub fn suspend(&mut self, sched: &mut Scheduler) {
        self.cancel_timer(sched);
        self.visible = false;
    }

    fn cancel_timer(&mut self, sched: &mut Scheduler) {
        if let Some(id) = self.timer.take() {
            sched.cancel(id);
        }
    }

    /// Called when the idle timer fires.
    pub fn on_timeout(&mut self) {
        trace!("IdleTracker: quiet since {}, showing affordance", self.last_activity_at);
        self.timer = None;
        self.visible = true;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_armed(&self) -> bool {
        self.timer.is_some()
    }

    pub fn last_activity_at(&self) -> Millis {
        self.last_activity_at
    }
}
