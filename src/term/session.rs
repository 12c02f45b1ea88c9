// src/term/session.rs

//! The terminal's top-level mode and the ownership of the keyboard.
//!
//! Exactly one [`Mode`] is active. `GameActive` and `SubInterfaceActive`
//! additionally attach a dedicated key listener that intercepts every key;
//! only one such listener may exist at a time, and it must be detached before
//! another is attached.

use log::{debug, warn};
use thiserror::Error;

use crate::ascii::AsciiPanel;
use crate::odxxt::OdxxtInterface;
use crate::snake::SnakeGame;
use crate::timer::{Scheduler, TimerId};

/// A running snake game with the timers it owns.
#[derive(Debug)]
pub struct SnakeRun {
    pub game: SnakeGame,
    pub tick: Option<TimerId>,
    pub teardown: Option<TimerId>,
}

impl SnakeRun {
    pub fn new(game: SnakeGame) -> Self {
        SnakeRun {
            game,
            tick: None,
            teardown: None,
        }
    }

    /// Cancels both timers.
    pub fn cancel_timers(&mut self, sched: &mut Scheduler) {
        for id in [self.tick.take(), self.teardown.take()].into_iter().flatten() {
            sched.cancel(id);
        }
    }
}

#[derive(Debug, Default)]
pub enum Mode {
    #[default]
    Normal,
    GameActive(SnakeRun),
    AsciiPanelActive(AsciiPanel),
    SubInterfaceActive(OdxxtInterface),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeKind {
    Normal,
    GameActive,
    AsciiPanelActive,
    SubInterfaceActive,
}

impl Mode {
    pub fn kind(&self) -> ModeKind {
        match self {
            Mode::Normal => ModeKind::Normal,
            Mode::GameActive(_) => ModeKind::GameActive,
            Mode::AsciiPanelActive(_) => ModeKind::AsciiPanelActive,
            Mode::SubInterfaceActive(_) => ModeKind::SubInterfaceActive,
        }
    }

    /// The owner of the dedicated key listener this mode needs, if any.
    fn capture_owner(&self) -> Option<CaptureOwner> {
        match self {
            Mode::GameActive(_) => Some(CaptureOwner::Snake),
            Mode::SubInterfaceActive(_) => Some(CaptureOwner::Odxxt),
            _ => None,
        }
    }
}

/// Holder of the privileged key listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureOwner {
    Snake,
    Odxxt,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ModeError {
    #[error("a key listener owned by {0:?} is already attached")]
    ListenerAlreadyAttached(CaptureOwner),
    #[error("{0:?} is already active")]
    AlreadyActive(ModeKind),
}

/// How the session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Terminated {
    /// Set by the self-destruct sequence.
    pub dimmed: bool,
}

#[derive(Debug, Default)]
pub struct Session {
    mode: Mode,
    capture: Option<CaptureOwner>,
    focused: bool,
    terminated: Option<Terminated>,
}

impl Session {
    pub fn new() -> Self {
        Session {
            focused: true,
            ..Default::default()
        }
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn mode_mut(&mut self) -> &mut Mode {
        &mut self.mode
    }

    pub fn kind(&self) -> ModeKind {
        self.mode.kind()
    }

    /// Leaves `Normal` for `mode`, attaching its key listener.
    pub fn enter(&mut self, mode: Mode) -> Result<(), ModeError> {
        let current = self.kind();
        if current != ModeKind::Normal {
            return Err(ModeError::AlreadyActive(current));
        }
        if let Some(owner) = mode.capture_owner() {
            self.attach(owner)?;
        }
        debug!("Session: {:?} -> {:?}", current, mode.kind());
        self.mode = mode;
        Ok(())
    }

    /// Returns to `Normal`, detaching any key listener. Hands back the mode
    /// that was active so the caller can release what it owns.
    pub fn leave(&mut self) -> Mode {
        self.detach();
        let previous = std::mem::take(&mut self.mode);
        debug!("Session: {:?} -> Normal", previous.kind());
        previous
    }

    fn attach(&mut self, owner: CaptureOwner) -> Result<(), ModeError> {
        if let Some(existing) = self.capture {
            warn!(
                "Session: refusing to attach {:?}, {:?} still holds the keyboard",
                owner, existing
            );
            return Err(ModeError::ListenerAlreadyAttached(existing));
        }
        self.capture = Some(owner);
        Ok(())
    }

    fn detach(&mut self) -> Option<CaptureOwner> {
        self.capture.take()
    }

    pub fn capture(&self) -> Option<CaptureOwner> {
        self.capture
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub fn terminate(&mut self, dimmed: bool) {
        self.terminated = Some(Terminated { dimmed });
    }

    pub fn terminated(&self) -> Option<Terminated> {
        self.terminated
    }

    pub fn is_terminated(&self) -> bool {
        self.terminated.is_some()
    }

    /// Whether the raw command line accepts keys. `sequence_holds` is true
    /// while a scripted sequence keeps the line hidden.
    pub fn input_enabled(&self, sequence_holds: bool) -> bool {
        self.kind() == ModeKind::Normal && !self.is_terminated() && !sequence_holds
    }
}
