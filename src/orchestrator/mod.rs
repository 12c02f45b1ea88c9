// src/orchestrator/mod.rs

//! Orchestrates the main application flow, coordinating between the terminal,
//! renderer and backend driver.
//!
//! The terminal never sleeps or reads a clock. This module owns both: it
//! waits on the driver no longer than the terminal's next timer deadline,
//! then tells the terminal how far time has moved and executes whatever
//! `TerminalAction`s come back.

use crate::{
    config::PerformanceConfig,
    keys::KeyInput,
    platform::{BackendEvent, Driver},
    renderer::{Renderer, WINDOW_TITLE},
    term::{ControlEvent, TerminalAction, TerminalInput, TerminalInterface, UserInputAction},
    timer::Millis,
};
use anyhow::Result;
use std::time::Instant;

/// Represents the status of the orchestrator after one iteration of its loop.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum OrchestratorStatus {
    /// Events were processed and the loop should continue.
    Running,
    /// The driver asked to close. The application should terminate
    /// gracefully.
    Shutdown,
}

/// Source of the virtual time fed to the terminal.
pub trait Clock {
    /// Milliseconds since the clock's origin. Never decreases.
    fn now_ms(&self) -> Millis;
}

/// Wall-clock time since construction.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        MonotonicClock {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_ms(&self) -> Millis {
        self.origin.elapsed().as_millis() as Millis
    }
}

/// Encapsulates the main application state and logic for orchestrating the
/// terminal.
///
/// Dependencies are trait objects so tests can drive the loop with a mock
/// driver and a hand-wound clock.
pub struct AppOrchestrator<'a> {
    term: &'a mut dyn TerminalInterface,
    pub renderer: Renderer,
    pub driver: &'a mut dyn Driver,
    clock: &'a dyn Clock,
    perf: PerformanceConfig,
    redraw_pending: bool,
    last_frame_at: Option<Millis>,
}

impl<'a> AppOrchestrator<'a> {
    pub fn new(
        term: &'a mut dyn TerminalInterface,
        renderer: Renderer,
        driver: &'a mut dyn Driver,
        clock: &'a dyn Clock,
        perf: PerformanceConfig,
    ) -> Self {
        AppOrchestrator {
            term,
            renderer,
            driver,
            clock,
            perf,
            redraw_pending: true,
            last_frame_at: None,
        }
    }

    /// Starts the terminal session and draws the first frame.
    pub fn start(&mut self) -> Result<()> {
        log::info!("Orchestrator: starting session");
        self.driver.set_title(WINDOW_TITLE);
        self.dispatch(ControlEvent::Start.into());
        self.render_if_needed(self.clock.now_ms(), true)
    }

    /// Runs one iteration: wait for input or the next deadline, fire due
    /// timers, feed the input to the terminal and present a frame if
    /// anything changed.
    pub fn process_event_cycle(&mut self) -> Result<OrchestratorStatus> {
        let timeout = self.poll_timeout(self.clock.now_ms());
        log::trace!("Orchestrator: waiting up to {} ms", timeout);
        let events = self.driver.wait_for_events(timeout)?;

        let now = self.clock.now_ms();
        self.dispatch(ControlEvent::Advance { now }.into());

        for event in events {
            log::debug!("Orchestrator: Handling BackendEvent: {:?}", event);
            if event == BackendEvent::CloseRequested {
                log::info!("Orchestrator: CloseRequested event received. Signaling shutdown.");
                return Ok(OrchestratorStatus::Shutdown);
            }
            self.handle_backend_event(event);
        }

        self.render_if_needed(self.clock.now_ms(), false)?;
        Ok(OrchestratorStatus::Running)
    }

    /// How long the driver may block: until the next timer, a throttled
    /// frame, or `max_poll_ms`, whichever comes first.
    fn poll_timeout(&self, now: Millis) -> u64 {
        let mut timeout = self.perf.max_poll_ms;
        if let Some(deadline) = self.term.next_deadline() {
            timeout = timeout.min(deadline.saturating_sub(now));
        }
        if self.redraw_pending {
            let frame_due = self
                .last_frame_at
                .map_or(now, |at| at + self.perf.min_frame_interval_ms);
            timeout = timeout.min(frame_due.saturating_sub(now));
        }
        timeout
    }

    fn handle_backend_event(&mut self, event: BackendEvent) {
        match event {
            BackendEvent::Key {
                symbol,
                modifiers,
                text,
            } => {
                let key = KeyInput {
                    symbol,
                    modifiers,
                    text: if text.is_empty() { None } else { Some(text) },
                };
                self.dispatch(UserInputAction::KeyInput(key).into());
            }
            BackendEvent::Resize { cols, rows } => {
                log::info!("Orchestrator: Resized to {}x{} cells", cols, rows);
                self.redraw_pending = true;
            }
            BackendEvent::FocusGained => self.dispatch(UserInputAction::FocusGained.into()),
            BackendEvent::FocusLost => self.dispatch(UserInputAction::FocusLost.into()),
            BackendEvent::CloseRequested => {}
        }
    }

    fn dispatch(&mut self, input: TerminalInput) {
        for action in self.term.interpret_input(input) {
            self.handle_terminal_action(action);
        }
    }

    /// Executes one action against the driver. Failures are logged and the
    /// action is dropped; the terminal has already moved on.
    fn handle_terminal_action(&mut self, action: TerminalAction) {
        log::trace!("Orchestrator: {:?}", action);
        let result = match action {
            TerminalAction::ScrollToSection(section) => {
                self.driver.scroll_to_section(section.id())
            }
            TerminalAction::OpenLink(url) => self.driver.open_link(&url),
            TerminalAction::CopyToClipboard(text) => self.driver.copy_to_clipboard(&text),
            TerminalAction::ApplyTheme(theme) => {
                log::info!("Orchestrator: theme is now {:?}", theme);
                self.redraw_pending = true;
                Ok(())
            }
            TerminalAction::SessionEnded => {
                log::info!("Orchestrator: session ended");
                Ok(())
            }
            TerminalAction::RequestRedraw => {
                self.redraw_pending = true;
                Ok(())
            }
        };
        if let Err(e) = result {
            log::warn!("Orchestrator: driver could not carry out action: {:#}", e);
        }
    }

    fn render_if_needed(&mut self, now: Millis, force: bool) -> Result<()> {
        if !self.redraw_pending {
            return Ok(());
        }
        let throttled = self
            .last_frame_at
            .is_some_and(|at| now < at + self.perf.min_frame_interval_ms);
        if throttled && !force {
            log::trace!("Orchestrator: frame throttled");
            return Ok(());
        }
        let (cols, rows) = self.driver.dimensions();
        let commands = self.renderer.draw(&self.term.snapshot(), cols, rows);
        self.driver.execute_render_commands(commands)?;
        self.redraw_pending = false;
        self.last_frame_at = Some(now);
        Ok(())
    }
}

#[cfg(test)]
mod tests;
