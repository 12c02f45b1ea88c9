// src/term/emulator/mod.rs

use crate::{
    ascii::{self, FontId},
    command::content,
    config::Config,
    digest::ContentHasher,
    odxxt::ThemeId,
    sequence::{Completion, Progress, Sequence, SequenceEngine},
    snake::GameStatus,
    term::{
        action::{ControlEvent, TerminalAction},
        history::HistoryRing,
        idle::IdleTracker,
        indicator::ScrollIndicator,
        output::OutputLog,
        session::{Mode, ModeKind, Session},
        snapshot::{AsciiView, PanelView, SnakeView, TerminalSnapshot},
        TerminalInput,
    },
    timer::{Millis, Scheduler, TimerEvent, TimerId},
};

use log::{debug, info, trace, warn};
use rand::rngs::StdRng;

mod dispatch;
mod game;
mod input_handler;
mod panels;
mod timers;

/// The portfolio terminal.
///
/// All state lives here and every change goes through
/// [`Terminal::interpret_input`]. Nothing blocks: delays are timers on the
/// internal [`Scheduler`], fired when the host advances virtual time.
pub struct Terminal {
    pub(super) config: Config,
    pub(super) sched: Scheduler,
    pub(super) output: OutputLog,
    pub(super) history: HistoryRing,
    pub(super) idle: IdleTracker,
    pub(super) sequence: SequenceEngine,
    pub(super) session: Session,
    pub(super) input: String,
    pub(super) indicator: ScrollIndicator,
    pub(super) theme: ThemeId,
    pub(super) hasher: Box<dyn ContentHasher>,
    pub(super) rng: StdRng,
    pub(super) startup_timer: Option<TimerId>,
    pub(super) started: bool,
    /// Actions gathered while handling the current input.
    pub(super) actions: Vec<TerminalAction>,
    /// Set by changes the output log's revision does not capture.
    pub(super) dirty: bool,
}

impl Terminal {
    /// Creates a new `Terminal`. Nothing happens until `ControlEvent::Start`.
    pub fn new(config: Config, hasher: Box<dyn ContentHasher>, rng: StdRng) -> Self {
        let behavior = &config.behavior;
        Terminal {
            sched: Scheduler::new(),
            output: OutputLog::new(),
            history: HistoryRing::new(behavior.history_limit),
            idle: IdleTracker::new(behavior.idle_timeout_ms),
            sequence: SequenceEngine::new(),
            session: Session::new(),
            input: String::new(),
            indicator: ScrollIndicator::new(behavior.morph_ticks, behavior.morph_tick_ms),
            theme: config.appearance.default_theme,
            hasher,
            rng,
            startup_timer: None,
            started: false,
            actions: Vec::new(),
            dirty: false,
            config,
        }
    }

    /// Main entry point for all terminal inputs.
    ///
    /// Returns the actions the host must carry out, in order. A trailing
    /// `RequestRedraw` is appended whenever visible state changed.
    pub fn interpret_input(&mut self, input: TerminalInput) -> Vec<TerminalAction> {
        let revision = self.output.revision();
        match input {
            TerminalInput::User(action) => {
                input_handler::process_user_input_action(self, action);
                self.dirty = true;
            }
            TerminalInput::Control(event) => self.handle_control_event(event),
        }
        self.drain_actions(revision)
    }

    fn drain_actions(&mut self, revision: u64) -> Vec<TerminalAction> {
        let mut actions = std::mem::take(&mut self.actions);
        if self.dirty || self.output.revision() != revision {
            actions.push(TerminalAction::RequestRedraw);
        }
        self.dirty = false;
        actions
    }

    fn handle_control_event(&mut self, event: ControlEvent) {
        match event {
            ControlEvent::Start => self.start(),
            ControlEvent::Reset => self.reset(),
            ControlEvent::Advance { now } => timers::advance(self, now),
        }
    }

    /// Fires every timer due at or before `now`.
    pub fn advance_to(&mut self, now: Millis) -> Vec<TerminalAction> {
        self.interpret_input(TerminalInput::Control(ControlEvent::Advance { now }))
    }

    /// Earliest pending deadline, if any.
    pub fn next_deadline(&self) -> Option<Millis> {
        self.sched.next_deadline()
    }

    /// Executes a command line without echoing or recording it, the way
    /// startup and log replay do.
    pub fn run_command(&mut self, command: &str) -> Vec<TerminalAction> {
        let revision = self.output.revision();
        dispatch::execute(self, command);
        self.drain_actions(revision)
    }

    fn start(&mut self) {
        if self.started {
            warn!("Terminal: Start received twice, ignoring");
            return;
        }
        self.started = true;
        info!("Terminal: starting session");
        self.idle.touch(&mut self.sched);
        self.schedule_startup(self.config.behavior.startup_delay_ms);
    }

    fn schedule_startup(&mut self, delay: Millis) {
        if let Some(id) = self.startup_timer.take() {
            self.sched.cancel(id);
        }
        self.startup_timer = Some(self.sched.schedule_once(delay, TimerEvent::StartupDelay));
    }

    /// Tears the session down and builds it again.
    pub(super) fn reset(&mut self) {
        info!(
            "Terminal: resetting session, dropping {} pending timers",
            self.sched.pending_count()
        );
        self.sched.clear();
        let behavior = &self.config.behavior;
        self.sequence = SequenceEngine::new();
        self.session = Session::new();
        self.output.clear();
        self.history = HistoryRing::new(behavior.history_limit);
        self.input.clear();
        self.idle = IdleTracker::new(behavior.idle_timeout_ms);
        self.indicator = ScrollIndicator::new(behavior.morph_ticks, behavior.morph_tick_ms);
        self.startup_timer = None;
        self.started = true;

        self.theme = self.config.appearance.default_theme;
        self.actions.push(TerminalAction::ApplyTheme(self.theme));

        self.idle.restart(&mut self.sched);
        self.schedule_startup(self.config.behavior.reset_delay_ms);
        self.dirty = true;
    }

    /// Starts `sequence`, superseding any running one, and applies its
    /// completion if it finishes without waiting.
    pub(super) fn run_sequence(&mut self, sequence: Sequence) {
        let progress = self
            .sequence
            .start(sequence, &mut self.sched, &mut self.output);
        self.on_progress(progress);
    }

    pub(super) fn on_progress(&mut self, progress: Progress) {
        match progress {
            Progress::Pending | Progress::Idle => {}
            Progress::Finished(None) => trace!("Terminal: sequence finished silently"),
            Progress::Finished(Some(completion)) => self.complete(completion),
        }
    }

    fn complete(&mut self, completion: Completion) {
        debug!("Terminal: sequence completed with {:?}", completion);
        match completion {
            Completion::Prompt => {
                self.output.print_prompt();
            }
            Completion::Terminate => self.end_session(true),
            Completion::Execute(command) => dispatch::execute(self, &command),
            Completion::OdxxtReady => match self.session.mode_mut() {
                Mode::SubInterfaceActive(ui) => ui.set_ready(),
                _ => trace!("Terminal: odxxt view finished after the interface closed"),
            },
        }
    }

    /// Terminates the session. `dimmed` is set by the self-destruct.
    pub(super) fn end_session(&mut self, dimmed: bool) {
        info!("Terminal: session ended (dimmed: {})", dimmed);
        self.sequence.cancel(&mut self.sched);
        self.input.clear();
        self.session.terminate(dimmed);
        self.idle.suspend(&mut self.sched);
        self.actions.push(TerminalAction::SessionEnded);
    }

    /// Counts a key or focus event as activity while the command line is in
    /// charge.
    pub(super) fn note_activity(&mut self) {
        if self.session.kind() == ModeKind::Normal && !self.session.is_terminated() {
            self.idle.touch(&mut self.sched);
        }
    }

    pub fn input_enabled(&self) -> bool {
        self.session.input_enabled(self.sequence.holds_input())
    }

    /// Creates a `TerminalSnapshot` of everything currently visible.
    pub fn snapshot(&self) -> TerminalSnapshot {
        let terminated = self.session.terminated();
        let normal = self.session.kind() == ModeKind::Normal && terminated.is_none();
        TerminalSnapshot {
            lines: self.output.lines().cloned().collect(),
            prompt: self.config.appearance.prompt(),
            input: self.input_enabled().then(|| self.input.clone()),
            panel: self.panel_view(),
            idle_hint: (normal && self.idle.is_visible()).then_some(content::IDLE_HINT),
            indicator: self.indicator.text().to_string(),
            theme: self.theme,
            mode: self.session.kind(),
            terminated,
            restore_hint: terminated.map(|_| content::RESTORE_HINT),
            revision: self.output.revision(),
        }
    }

    fn panel_view(&self) -> Option<PanelView> {
        match self.session.mode() {
            Mode::GameActive(run) => Some(PanelView::Snake(SnakeView {
                rows: run.game.board_rows(),
                score: run.game.score(),
                game_over: match run.game.status() {
                    GameStatus::GameOver(reason) => Some(reason.message()),
                    GameStatus::Running => None,
                },
            })),
            Mode::AsciiPanelActive(panel) => Some(PanelView::Ascii(AsciiView {
                title: ascii::TITLE,
                text: panel.text().to_string(),
                fonts: FontId::ALL.iter().map(|f| f.id()).collect(),
                selected: panel.font(),
                preview: panel.preview(),
                truncation_note: panel.was_truncated().then_some(ascii::TRUNCATION_NOTE),
                copy_enabled: panel.copy_enabled(),
            })),
            Mode::Normal | Mode::SubInterfaceActive(_) => None,
        }
    }

    // --- Accessors ---

    pub fn mode(&self) -> ModeKind {
        self.session.kind()
    }

    pub fn output(&self) -> &OutputLog {
        &self.output
    }

    pub fn history(&self) -> &HistoryRing {
        &self.history
    }

    pub fn input_line(&self) -> &str {
        &self.input
    }

    pub fn theme(&self) -> ThemeId {
        self.theme
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.sched
    }

    /// True while a scripted sequence is still producing output.
    pub fn is_sequence_running(&self) -> bool {
        self.sequence.is_running()
    }

    pub fn is_idle_hint_visible(&self) -> bool {
        self.idle.is_visible()
    }

    pub fn indicator(&self) -> &ScrollIndicator {
        &self.indicator
    }
}
