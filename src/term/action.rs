// src/term/action.rs

//! Actions and events for the terminal module.
//!
//! The terminal processes two kinds of input and produces one kind of output:
//!
//! 1. **UserInputAction**: input from the user (keyboard, focus)
//! 2. **ControlEvent**: signals from the host (start, reset, time)
//! 3. **TerminalAction**: requests the terminal makes of its collaborators
//!
//! # Event Flow
//!
//! ```text
//! Console input / wall clock
//!       ↓
//! [UserInputAction] or [ControlEvent]
//!       ↓
//! Terminal::interpret_input()
//!       ↓
//! [TerminalAction] (output)
//!       ↓
//! Orchestrator (execute: scroll, open link, copy, apply theme, etc.)
//! ```
//!
//! # Contract Model
//!
//! Each action type establishes a contract:
//! - **Precondition**: What state must be true before sending
//! - **Terminal**: What the terminal does with the action
//! - **Postcondition**: What state changes result

use serde::{Deserialize, Serialize};

use crate::keys::KeyInput;
use crate::odxxt::ThemeId;
use crate::timer::Millis;

// --- User Input Actions ---

/// User-initiated input to the terminal.
///
/// # Contract
///
/// **Precondition**: The user pressed a key or the host window changed focus.
///
/// **Terminal**: Routes the input to whichever mode currently owns the
/// keyboard. Every user input counts as activity for the idle tracker.
///
/// **Postcondition**: Terminal state is updated; `TerminalAction`s may result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserInputAction {
    /// A key press.
    ///
    /// # Contract
    ///
    /// **Terminal**:
    /// - `Normal` mode with input enabled: edits the input line, browses
    ///   history, autocompletes or submits a command.
    /// - `GameActive` / `SubInterfaceActive`: handed to the attached key
    ///   listener only; never reaches the command line.
    /// - `AsciiPanelActive`: handed to the panel.
    /// - Terminated session: Enter or `r` restores the session.
    KeyInput(KeyInput),

    /// Host window gained focus. Counts as activity.
    FocusGained,

    /// Host window lost focus. Counts as activity.
    FocusLost,
}

// --- Control Events ---

/// Signals from the host that are not user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlEvent {
    /// First start of the session.
    ///
    /// # Contract
    ///
    /// **Precondition**: Sent once, after construction.
    ///
    /// **Terminal**: Arms the idle timer and schedules the startup sequence.
    Start,

    /// Tear the session down and build it again.
    ///
    /// # Contract
    ///
    /// **Terminal**: Cancels every pending timer, empties history and log,
    /// restores the default theme and re-runs startup after a short delay.
    ///
    /// **Postcondition**: `mode = Normal`, no timer from before the reset is
    /// pending.
    Reset,

    /// Virtual time moved forward.
    ///
    /// # Contract
    ///
    /// **Precondition**: `now` is not earlier than any previous `Advance`.
    ///
    /// **Terminal**: Fires every timer due at or before `now`, in deadline
    /// order.
    Advance { now: Millis },
}

// --- Terminal Actions ---

/// Page sections the navigation collaborator can scroll to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    Top,
    About,
    Tools,
    Projects,
}

impl Section {
    pub fn id(self) -> &'static str {
        match self {
            Section::Top => "top",
            Section::About => "about",
            Section::Tools => "tools",
            Section::Projects => "projects",
        }
    }
}

/// Requests the terminal makes of the outside world.
///
/// # Contract
///
/// **Orchestrator**: Executes each action against the driver. A collaborator
/// that is not available is logged and skipped; the terminal never waits for
/// a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TerminalAction {
    /// Scroll the page to a named section.
    ScrollToSection(Section),
    /// Open an external link.
    OpenLink(String),
    /// Write text to the system clipboard.
    CopyToClipboard(String),
    /// Recolour the terminal.
    ApplyTheme(ThemeId),
    /// The session ended (`exit` or `destruct`).
    SessionEnded,
    /// Visible state changed; draw a new frame.
    RequestRedraw,
}
