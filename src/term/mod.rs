// src/term/mod.rs

//! The portfolio terminal itself.
//! It acts as a state machine processing inputs and producing actions.

pub mod action;
mod emulator;
pub mod history;
pub mod idle;
pub mod indicator;
pub mod output;
pub mod session;
pub mod snapshot;

pub use action::{ControlEvent, Section, TerminalAction, UserInputAction};
pub use emulator::Terminal;
pub use session::ModeKind;
pub use snapshot::{AsciiView, PanelView, SnakeView, TerminalSnapshot};

use crate::timer::Millis;

/// Inputs that the terminal processes.
///
/// This enum is the terminal's whole "instruction set": every key, focus
/// change and tick of virtual time reaches the state machine through it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalInput {
    /// A user-initiated event, such as a keypress or focus change.
    User(UserInputAction),

    /// A host signal: start, reset or the passage of time.
    Control(ControlEvent),
}

impl From<UserInputAction> for TerminalInput {
    fn from(action: UserInputAction) -> Self {
        TerminalInput::User(action)
    }
}

impl From<ControlEvent> for TerminalInput {
    fn from(event: ControlEvent) -> Self {
        TerminalInput::Control(event)
    }
}

/// Defines the essential public interface of the terminal.
///
/// Components like the `AppOrchestrator` and `Renderer` talk to the terminal
/// through this trait so they are not tied to one implementation.
pub trait TerminalInterface {
    /// Interprets a `TerminalInput`, updates state and returns the actions
    /// the caller must carry out, in order.
    fn interpret_input(&mut self, input: TerminalInput) -> Vec<TerminalAction>;

    /// Creates a `TerminalSnapshot` of everything currently visible.
    fn snapshot(&self) -> TerminalSnapshot;

    /// Earliest virtual time at which the terminal wants to be advanced.
    fn next_deadline(&self) -> Option<Millis>;
}

impl TerminalInterface for Terminal {
    fn interpret_input(&mut self, input: TerminalInput) -> Vec<TerminalAction> {
        self.interpret_input(input)
    }

    fn snapshot(&self) -> TerminalSnapshot {
        self.snapshot()
    }

    fn next_deadline(&self) -> Option<Millis> {
        self.next_deadline()
    }
}
