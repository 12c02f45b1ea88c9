// src/platform/mod.rs

//! Defines the `Driver` trait for backend implementations and the common
//! types exchanged with them: `BackendEvent` coming in, `RenderCommand`
//! going out.

use crate::color::Color;
pub use crate::keys::{KeySymbol, Modifiers};
use anyhow::Result;
use bitflags::bitflags;
use serde::{Deserialize, Serialize};

pub mod console;
#[cfg(test)]
pub mod mock;

// --- Public Constants ---
// Used when a backend cannot determine its size from the environment.
pub const DEFAULT_WINDOW_WIDTH_CHARS: usize = 80;
pub const DEFAULT_WINDOW_HEIGHT_CHARS: usize = 24;

/// Represents events originating from the backend.
/// These events are processed by the `AppOrchestrator`, which turns them into
/// terminal input or handles them itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendEvent {
    /// A keyboard key was pressed.
    Key {
        symbol: KeySymbol,
        modifiers: Modifiers,
        /// Text the key produced, empty for non-printing keys.
        text: String,
    },
    /// The display area changed size, in character cells.
    Resize { cols: usize, rows: usize },
    /// The user asked to leave (Ctrl+D, stdin closed).
    CloseRequested,
    FocusGained,
    FocusLost,
}

bitflags! {
    /// Text attributes a driver can apply to a run.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct AttrFlags: u8 {
        const BOLD = 1 << 0;
        const DIM = 1 << 1;
        const UNDERLINE = 1 << 2;
        const REVERSE = 1 << 3;
    }
}

/// Commands for the driver to execute.
///
/// Coordinates are 0-based character cells. `Color::Default` means the
/// device's own default colour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderCommand {
    /// Clears the entire display area with the specified background color.
    ClearAll { bg: Color },
    /// Draws a run of text at a cell coordinate.
    DrawTextRun {
        x: usize,
        y: usize,
        text: String,
        fg: Color,
        bg: Color,
        flags: AttrFlags,
    },
    /// Places the text caret.
    SetCursorPosition { x: usize, y: usize },
    SetCursorVisibility { visible: bool },
    SetWindowTitle { title: String },
    /// Flushes everything drawn so far.
    PresentFrame,
}

/// A display and input backend.
pub trait Driver {
    /// Creates a new driver instance, initializing the underlying device.
    fn new() -> Result<Self>
    where
        Self: Sized;

    /// Waits at most `timeout_ms` for input and returns everything that
    /// arrived. An empty vector means the timeout elapsed.
    fn wait_for_events(&mut self, timeout_ms: u64) -> Result<Vec<BackendEvent>>;

    /// Current size in character cells, `(cols, rows)`.
    fn dimensions(&self) -> (usize, usize);

    fn execute_render_commands(&mut self, commands: Vec<RenderCommand>) -> Result<()>;

    /// Flushes pending output to the device.
    fn present(&mut self) -> Result<()>;

    fn set_title(&mut self, title: &str);

    /// Puts `text` on the system clipboard. Errors if the backend has none.
    fn copy_to_clipboard(&mut self, text: &str) -> Result<()>;

    /// Opens `url` in whatever the backend uses for links.
    fn open_link(&mut self, url: &str) -> Result<()>;

    /// Scrolls the surrounding page to the section `id`. Errors if the
    /// backend has no page.
    fn scroll_to_section(&mut self, id: &str) -> Result<()>;

    /// Restores the device to its original state.
    fn cleanup(&mut self) -> Result<()>;
}
