// src/orchestrator/tests.rs

use super::*;
use crate::command::content;
use crate::config::Config;
use crate::digest::Sha256Digest;
use crate::keys::{KeySymbol, Modifiers};
use crate::platform::mock::MockDriver;
use crate::platform::RenderCommand;
use crate::term::Terminal;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::Cell;
use test_log::test;

/// A clock the test winds by hand.
struct ManualClock(Cell<Millis>);

impl ManualClock {
    fn at(ms: Millis) -> Self {
        ManualClock(Cell::new(ms))
    }

    fn set(&self, ms: Millis) {
        self.0.set(ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> Millis {
        self.0.get()
    }
}

fn new_term() -> Terminal {
    Terminal::new(
        Config::default(),
        Box::new(Sha256Digest),
        StdRng::seed_from_u64(3),
    )
}

fn typed(text: &str) -> Vec<BackendEvent> {
    let mut events: Vec<BackendEvent> = text
        .chars()
        .map(|c| BackendEvent::Key {
            symbol: KeySymbol::Char(c),
            modifiers: Modifiers::empty(),
            text: c.to_string(),
        })
        .collect();
    events.push(BackendEvent::Key {
        symbol: KeySymbol::Enter,
        modifiers: Modifiers::empty(),
        text: String::new(),
    });
    events
}

fn perf() -> PerformanceConfig {
    Config::default().performance
}

#[test]
fn it_should_shutdown_on_backend_close_event() {
    let mut driver = MockDriver::with_size(80, 24);
    let mut term = new_term();
    let clock = ManualClock::at(0);

    driver.push_event(BackendEvent::CloseRequested);

    let mut orchestrator =
        AppOrchestrator::new(&mut term, Renderer::new(), &mut driver, &clock, perf());
    let status = orchestrator.process_event_cycle().unwrap();
    assert_eq!(status, OrchestratorStatus::Shutdown);
}

#[test]
fn start_sets_the_title_and_draws_a_frame() {
    let mut driver = MockDriver::with_size(80, 24);
    let mut term = new_term();
    let clock = ManualClock::at(0);
    {
        let mut orchestrator =
            AppOrchestrator::new(&mut term, Renderer::new(), &mut driver, &clock, perf());
        orchestrator.start().unwrap();
    }
    assert_eq!(driver.title.as_deref(), Some(WINDOW_TITLE));
    assert_eq!(driver.frames, 1);
}

#[test]
fn wait_never_outlasts_the_next_timer() {
    let mut driver = MockDriver::with_size(80, 24);
    let mut term = new_term();
    let clock = ManualClock::at(0);
    {
        let mut orchestrator =
            AppOrchestrator::new(&mut term, Renderer::new(), &mut driver, &clock, perf());
        orchestrator.start().unwrap();
        // Startup is due at 800; the poll cap is 250.
        orchestrator.process_event_cycle().unwrap();
        clock.set(700);
        orchestrator.process_event_cycle().unwrap();
    }
    assert_eq!(driver.waits, vec![250, 100]);
}

#[test]
fn startup_greets_before_whoami_runs() {
    let mut driver = MockDriver::with_size(80, 24);
    let mut term = new_term();
    let clock = ManualClock::at(0);
    {
        let mut orchestrator =
            AppOrchestrator::new(&mut term, Renderer::new(), &mut driver, &clock, perf());
        orchestrator.start().unwrap();
        for t in (0..=1_000).step_by(50) {
            clock.set(t);
            orchestrator.process_event_cycle().unwrap();
        }
    }
    assert!(term.output().contains_text(content::WELCOME));
    assert!(!term.input_enabled());
}

#[test]
fn startup_sequence_runs_as_time_passes() {
    let mut driver = MockDriver::with_size(80, 24);
    let mut term = new_term();
    let clock = ManualClock::at(0);
    {
        let mut orchestrator =
            AppOrchestrator::new(&mut term, Renderer::new(), &mut driver, &clock, perf());
        orchestrator.start().unwrap();
        for t in (0..=8_000).step_by(50) {
            clock.set(t);
            orchestrator.process_event_cycle().unwrap();
        }
    }
    // whoami clears the greeting and leaves the banner and hint behind.
    assert!(term.output().contains_text(content::TITLE));
    assert!(term.output().contains_text(content::HELP_HINT));
    assert!(term.input_enabled());
    assert!(driver.frames > 1);
}

#[test]
fn typed_commands_reach_the_terminal() {
    let mut driver = MockDriver::with_size(80, 24);
    let mut term = new_term();
    let clock = ManualClock::at(0);
    driver.push_batch(typed("help"));
    {
        let mut orchestrator =
            AppOrchestrator::new(&mut term, Renderer::new(), &mut driver, &clock, perf());
        orchestrator.process_event_cycle().unwrap();
    }
    assert_eq!(term.history().entries().next(), Some("help"));
    assert!(term.output().contains_text("Display my profile information."));
    assert_eq!(driver.frames, 1);
}

#[test]
fn github_opens_the_profile_link() {
    let mut driver = MockDriver::with_size(80, 24);
    let mut term = new_term();
    let clock = ManualClock::at(0);
    driver.push_batch(typed("github"));
    {
        let mut orchestrator =
            AppOrchestrator::new(&mut term, Renderer::new(), &mut driver, &clock, perf());
        orchestrator.process_event_cycle().unwrap();
    }
    assert_eq!(driver.opened, vec![content::GITHUB_URL.to_string()]);
}

#[test]
fn navigation_without_a_page_is_not_fatal() {
    let mut driver = MockDriver::with_size(80, 24);
    driver.has_page = false;
    let mut term = new_term();
    let clock = ManualClock::at(0);
    driver.push_batch(typed("about"));
    let status = {
        let mut orchestrator =
            AppOrchestrator::new(&mut term, Renderer::new(), &mut driver, &clock, perf());
        orchestrator.process_event_cycle().unwrap()
    };
    assert_eq!(status, OrchestratorStatus::Running);
    assert!(driver.scrolled.is_empty());
    assert!(term
        .output()
        .contains_text(content::navigating(crate::term::Section::About)));
}

#[test]
fn navigation_scrolls_the_page() {
    let mut driver = MockDriver::with_size(80, 24);
    let mut term = new_term();
    let clock = ManualClock::at(0);
    driver.push_batch(typed("projects"));
    {
        let mut orchestrator =
            AppOrchestrator::new(&mut term, Renderer::new(), &mut driver, &clock, perf());
        orchestrator.process_event_cycle().unwrap();
    }
    assert_eq!(driver.scrolled, vec!["projects".to_string()]);
}

#[test]
fn frames_are_throttled() {
    let mut driver = MockDriver::with_size(80, 24);
    let mut term = new_term();
    let clock = ManualClock::at(0);
    driver.push_batch(typed("a"));
    driver.push_batch(typed("b"));
    {
        let mut orchestrator =
            AppOrchestrator::new(&mut term, Renderer::new(), &mut driver, &clock, perf());
        orchestrator.process_event_cycle().unwrap();
        clock.set(5);
        orchestrator.process_event_cycle().unwrap();
        orchestrator.process_event_cycle().unwrap();
        clock.set(20);
        orchestrator.process_event_cycle().unwrap();
    }
    assert_eq!(driver.frames, 2);
    // While a frame is held back the wait ends when it may be shown.
    assert_eq!(driver.waits[2], 11);
}

#[test]
fn resize_redraws_at_the_new_size() {
    let mut driver = MockDriver::with_size(80, 24);
    let mut term = new_term();
    let clock = ManualClock::at(0);
    driver.push_batch(Vec::new());
    driver.push_event(BackendEvent::Resize { cols: 80, rows: 10 });
    {
        let mut orchestrator =
            AppOrchestrator::new(&mut term, Renderer::new(), &mut driver, &clock, perf());
        orchestrator.start().unwrap();
        clock.set(100);
        orchestrator.process_event_cycle().unwrap();
        clock.set(200);
        orchestrator.process_event_cycle().unwrap();
    }
    assert_eq!(driver.frames, 2);
    // The indicator moved to the new last row.
    assert!(driver
        .commands
        .iter()
        .any(|c| matches!(c, RenderCommand::DrawTextRun { y: 9, .. })));
}
