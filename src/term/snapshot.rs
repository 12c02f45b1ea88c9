// src/term/snapshot.rs

//! Read-only projection of the terminal for the renderer.

use crate::ascii::FontId;
use crate::odxxt::ThemeId;
use crate::term::output::Line;
use crate::term::session::{ModeKind, Terminated};

/// The snake board as it should be drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnakeView {
    pub rows: Vec<String>,
    pub score: u32,
    /// Game-over message, shown over the board until teardown.
    pub game_over: Option<&'static str>,
}

/// The ascii panel as it should be drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsciiView {
    pub title: &'static str,
    pub text: String,
    pub fonts: Vec<&'static str>,
    pub selected: FontId,
    pub preview: String,
    pub truncation_note: Option<&'static str>,
    pub copy_enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelView {
    Snake(SnakeView),
    Ascii(AsciiView),
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalSnapshot {
    /// The whole log; the renderer shows its tail.
    pub lines: Vec<Line>,
    pub prompt: String,
    /// The live input line. `None` while input is disabled.
    pub input: Option<String>,
    pub panel: Option<PanelView>,
    pub idle_hint: Option<&'static str>,
    pub indicator: String,
    pub theme: ThemeId,
    pub mode: ModeKind,
    pub terminated: Option<Terminated>,
    pub restore_hint: Option<&'static str>,
    /// Changes whenever the log changes.
    pub revision: u64,
}

impl TerminalSnapshot {
    pub fn caret_visible(&self) -> bool {
        self.input.is_some()
    }

    pub fn is_dimmed(&self) -> bool {
        self.terminated.is_some_and(|t| t.dimmed)
    }
}
