// src/term/indicator.rs

//! The scroll indicator shown under the terminal. Its label flips between
//! "explore" and "go to top" through a [`TextMorph`].

use log::trace;
use rand::Rng;

use crate::sequence::TextMorph;
use crate::timer::{Millis, Scheduler, TimerEvent, TimerId};

pub const EXPLORE_LABEL: &str = ">_ SCROLL TO EXPLORE";
pub const TOP_LABEL: &str = ">_ GO TO TOP";

#[derive(Debug)]
pub struct ScrollIndicator {
    at_top: bool,
    text: String,
    morph: Option<TextMorph>,
    timer: Option<TimerId>,
    ticks: u32,
    tick_ms: Millis,
}

impl ScrollIndicator {
    pub fn new(ticks: u32, tick_ms: Millis) -> Self {
        ScrollIndicator {
            at_top: true,
            text: EXPLORE_LABEL.to_string(),
            morph: None,
            timer: None,
            ticks,
            tick_ms,
        }
    }

    /// The page left the top. Returns false if it already had.
    pub fn page_left_top(&mut self, sched: &mut Scheduler) -> bool {
        if !self.at_top {
            return false;
        }
        self.at_top = false;
        self.morph_to(TOP_LABEL, sched);
        true
    }

    /// The page is back at the top. Returns false if it already was.
    pub fn page_at_top(&mut self, sched: &mut Scheduler) -> bool {
        if self.at_top {
            return false;
        }
        self.at_top = true;
        self.morph_to(EXPLORE_LABEL, sched);
        true
    }

    fn morph_to(&mut self, target: &str, sched: &mut Scheduler) {
        self.cancel(sched);
        trace!("ScrollIndicator: morphing '{}' -> '{}'", self.text, target);
        self.morph = Some(TextMorph::new(&self.text, target, self.ticks));
        self.timer = Some(sched.schedule_repeating(self.tick_ms, TimerEvent::IndicatorMorph));
    }

    /// Handles a fired `IndicatorMorph` timer. Returns true if the label
    /// changed.
    pub fn on_timer(&mut self, id: TimerId, sched: &mut Scheduler, rng: &mut impl Rng) -> bool {
        if self.timer != Some(id) {
            return false;
        }
        let Some(morph) = self.morph.as_mut() else {
            self.cancel(sched);
            return false;
        };
        let done = morph.step(rng);
        self.text = morph.text();
        if done {
            self.text = morph.target();
            self.cancel(sched);
        }
        true
    }

    /// Stops a running morph, leaving whatever text is shown.
    pub fn cancel(&mut self, sched: &mut Scheduler) {
        if let Some(id) = self.timer.take() {
            sched.cancel(id);
        }
        self.morph = None;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_at_top(&self) -> bool {
        self.at_top
    }

    pub fn is_morphing(&self) -> bool {
        self.morph.is_some()
    }
}
