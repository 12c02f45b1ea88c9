// src/renderer.rs

//! This module defines the `Renderer`.
//!
//! The `Renderer` translates a `TerminalSnapshot` into a list of
//! `RenderCommand`s for a `Driver`. It is backend-agnostic: no escape
//! sequences are produced here, only cell coordinates, colours and
//! attributes.
//!
//! Layout, top to bottom:
//! - the tail of the output log (or the active panel), the live input line
//!   and any hint lines;
//! - the scroll indicator on the last row.

use crate::color::Color;
use crate::platform::{AttrFlags, RenderCommand};
use crate::snake;
use crate::term::output::LineKind;
use crate::term::snapshot::{AsciiView, PanelView, SnakeView, TerminalSnapshot};

use log::trace;

/// Window title set by hosts that have one.
pub const WINDOW_TITLE: &str = "odxxt";

const SNAKE_CONTROLS: &str = "Arrow keys to move, Q or Esc to quit";
const ASCII_CONTROLS: &str = "Up/Down font, Enter generate, Esc close";
const ASCII_COPY_HINT: &str = "Ctrl+Y copy";

/// Colours resolved from the active theme.
#[derive(Debug, Clone, Copy)]
struct Palette {
    bg: Color,
    text: Color,
    accent: Color,
}

/// A styled piece of one screen row.
#[derive(Debug, Clone)]
struct Segment {
    text: String,
    fg: Color,
    flags: AttrFlags,
}

impl Segment {
    fn new(text: impl Into<String>, fg: Color, flags: AttrFlags) -> Self {
        Segment {
            text: text.into(),
            fg,
            flags,
        }
    }
}

type Row = Vec<Segment>;

/// The `Renderer` turns snapshots into drawing commands.
///
/// Every frame is a full redraw. It holds no state between frames.
#[derive(Debug, Default)]
pub struct Renderer {}

impl Renderer {
    pub fn new() -> Self {
        Self {}
    }

    /// Draws one complete frame for a `cols` x `rows` cell area.
    ///
    /// The returned commands start with hiding the caret and end with
    /// `PresentFrame`. A zero-sized area yields no commands.
    pub fn draw(&self, snap: &TerminalSnapshot, cols: usize, rows: usize) -> Vec<RenderCommand> {
        if cols == 0 || rows == 0 {
            return Vec::new();
        }
        let theme = snap.theme.theme();
        let palette = Palette {
            bg: theme.background_color(),
            text: theme.text_color(),
            accent: theme.accent_color(),
        };
        let dim = if snap.is_dimmed() {
            AttrFlags::DIM
        } else {
            AttrFlags::empty()
        };

        let mut commands = vec![
            RenderCommand::SetCursorVisibility { visible: false },
            RenderCommand::ClearAll { bg: palette.bg },
        ];

        // Last row belongs to the indicator.
        let body_height = rows.saturating_sub(1);
        let (body, caret) = match &snap.panel {
            Some(PanelView::Snake(view)) => (snake_rows(view, &palette), None),
            Some(PanelView::Ascii(view)) => (ascii_rows(view, &palette), None),
            None => log_rows(snap, &palette),
        };

        // Show the tail when the body does not fit.
        let skip = body.len().saturating_sub(body_height);
        for (y, row) in body.iter().skip(skip).enumerate() {
            push_row(&mut commands, row, y, cols, &palette, dim);
        }

        let indicator = vec![Segment::new(
            snap.indicator.clone(),
            palette.accent,
            AttrFlags::REVERSE,
        )];
        push_row(&mut commands, &indicator, rows - 1, cols, &palette, dim);

        match caret {
            Some((x, y)) if y >= skip && y - skip < body_height => {
                commands.push(RenderCommand::SetCursorPosition {
                    x: x.min(cols - 1),
                    y: y - skip,
                });
                commands.push(RenderCommand::SetCursorVisibility { visible: true });
            }
            _ => {}
        }
        commands.push(RenderCommand::PresentFrame);
        trace!(
            "Renderer: frame of {} commands for revision {}",
            commands.len(),
            snap.revision
        );
        commands
    }
}

/// Converts one row into text runs, clipped to `cols`.
fn push_row(
    commands: &mut Vec<RenderCommand>,
    row: &Row,
    y: usize,
    cols: usize,
    palette: &Palette,
    dim: AttrFlags,
) {
    let mut x = 0;
    for segment in row {
        if x >= cols {
            break;
        }
        let text: String = segment.text.chars().take(cols - x).collect();
        let width = text.chars().count();
        if width == 0 {
            continue;
        }
        commands.push(RenderCommand::DrawTextRun {
            x,
            y,
            text,
            fg: segment.fg,
            bg: palette.bg,
            flags: segment.flags | dim,
        });
        x += width;
    }
}

/// The log tail, input line and hints. Also returns the caret cell, if the
/// input line is live.
fn log_rows(snap: &TerminalSnapshot, palette: &Palette) -> (Vec<Row>, Option<(usize, usize)>) {
    let mut rows: Vec<Row> = Vec::new();
    for line in &snap.lines {
        let (fg, flags) = match line.kind {
            LineKind::Prompt => continue,
            LineKind::Echo => {
                rows.push(vec![
                    Segment::new(snap.prompt.clone(), palette.accent, AttrFlags::BOLD),
                    Segment::new(line.text.clone(), palette.text, AttrFlags::empty()),
                ]);
                continue;
            }
            LineKind::Text => (palette.text, AttrFlags::empty()),
            LineKind::Art => (palette.accent, AttrFlags::empty()),
            LineKind::Highlight | LineKind::Heading => (palette.accent, AttrFlags::BOLD),
            LineKind::Dim => (palette.text, AttrFlags::DIM),
        };
        if line.text.is_empty() {
            rows.push(Vec::new());
        }
        for part in line.text.lines() {
            rows.push(vec![Segment::new(part, fg, flags)]);
        }
    }

    let mut caret = None;
    if let Some(input) = &snap.input {
        let x = snap.prompt.chars().count() + input.chars().count();
        caret = Some((x, rows.len()));
        rows.push(vec![
            Segment::new(snap.prompt.clone(), palette.accent, AttrFlags::BOLD),
            Segment::new(input.clone(), palette.text, AttrFlags::empty()),
        ]);
    }
    if let Some(hint) = snap.idle_hint {
        rows.push(vec![Segment::new(hint, palette.text, AttrFlags::DIM)]);
    }
    if let Some(hint) = snap.restore_hint {
        rows.push(Vec::new());
        rows.push(vec![Segment::new(hint, palette.accent, AttrFlags::BOLD)]);
    }
    (rows, caret)
}

fn snake_rows(view: &SnakeView, palette: &Palette) -> Vec<Row> {
    let width = view.rows.first().map_or(0, |r| r.chars().count());
    let border = format!("+{}+", "-".repeat(width));
    let mut rows: Vec<Row> = vec![
        vec![
            Segment::new("SNAKE", palette.accent, AttrFlags::BOLD),
            Segment::new(format!("  Score: {}", view.score), palette.text, AttrFlags::empty()),
        ],
        vec![Segment::new(border.clone(), palette.accent, AttrFlags::empty())],
    ];
    for board_row in &view.rows {
        let mut row = vec![Segment::new("|", palette.accent, AttrFlags::empty())];
        // Split so the snake and food can take the accent colour.
        for c in board_row.chars() {
            let (fg, flags) = match c {
                snake::HEAD => (palette.accent, AttrFlags::BOLD),
                snake::BODY | snake::FOOD => (palette.accent, AttrFlags::empty()),
                _ => (palette.text, AttrFlags::empty()),
            };
            row.push(Segment::new(c.to_string(), fg, flags));
        }
        row.push(Segment::new("|", palette.accent, AttrFlags::empty()));
        rows.push(row);
    }
    rows.push(vec![Segment::new(border, palette.accent, AttrFlags::empty())]);
    match view.game_over {
        Some(message) => rows.push(vec![Segment::new(
            message,
            palette.accent,
            AttrFlags::BOLD | AttrFlags::REVERSE,
        )]),
        None => rows.push(vec![Segment::new(
            SNAKE_CONTROLS,
            palette.text,
            AttrFlags::DIM,
        )]),
    }
    rows
}

fn ascii_rows(view: &AsciiView, palette: &Palette) -> Vec<Row> {
    let mut rows: Vec<Row> = vec![
        vec![Segment::new(view.title, palette.accent, AttrFlags::BOLD)],
        vec![
            Segment::new("Text: ", palette.text, AttrFlags::empty()),
            Segment::new(view.text.clone(), palette.accent, AttrFlags::UNDERLINE),
        ],
    ];
    let mut fonts: Row = vec![Segment::new("Font: ", palette.text, AttrFlags::empty())];
    for font in &view.fonts {
        let flags = if *font == view.selected.id() {
            AttrFlags::REVERSE
        } else {
            AttrFlags::empty()
        };
        fonts.push(Segment::new(format!(" {} ", font), palette.accent, flags));
    }
    rows.push(fonts);
    rows.push(Vec::new());
    for part in view.preview.lines() {
        rows.push(vec![Segment::new(part, palette.accent, AttrFlags::empty())]);
    }
    rows.push(Vec::new());
    if let Some(note) = view.truncation_note {
        rows.push(vec![Segment::new(note, palette.text, AttrFlags::DIM)]);
    }
    let mut controls = vec![Segment::new(ASCII_CONTROLS, palette.text, AttrFlags::DIM)];
    if view.copy_enabled {
        controls.push(Segment::new(
            format!("  {}", ASCII_COPY_HINT),
            palette.accent,
            AttrFlags::BOLD,
        ));
    }
    rows.push(controls);
    rows
}

#[cfg(test)]
mod tests;
