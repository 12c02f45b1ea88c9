// src/ascii/mod.rs

//! Ascii art generator and the interactive panel around it.
//!
//! [`generate`] is a pure function of text and font. The panel only keeps
//! the ephemeral UI state (current text, selected font, whether something
//! was generated) and recomputes the preview on every read.

use log::{debug, warn};

use crate::keys::{KeyInput, KeySymbol};

mod fonts;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontId {
    #[default]
    Standard,
    Bold,
    Thin,
    Digital,
    Bubble,
    CalvinS,
}

impl FontId {
    pub const ALL: [FontId; 6] = [
        FontId::Standard,
        FontId::Bold,
        FontId::Thin,
        FontId::Digital,
        FontId::Bubble,
        FontId::CalvinS,
    ];

    pub fn id(self) -> &'static str {
        match self {
            FontId::Standard => "standard",
            FontId::Bold => "bold",
            FontId::Thin => "thin",
            FontId::Digital => "digital",
            FontId::Bubble => "bubble",
            FontId::CalvinS => "calvinS",
        }
    }

    /// Looks a font up by id. Unknown ids fall back to `standard`.
    pub fn from_id(id: &str) -> FontId {
        match FontId::ALL.iter().find(|f| f.id() == id) {
            Some(font) => *font,
            None => {
                warn!("Ascii: unknown font '{}', using standard", id);
                FontId::Standard
            }
        }
    }

    /// Number of lines every glyph of this font spans.
    pub fn line_count(self) -> usize {
        match self {
            FontId::Digital | FontId::CalvinS => 3,
            _ => 5,
        }
    }

    pub fn next(self) -> FontId {
        let i = FontId::ALL.iter().position(|f| *f == self).unwrap_or(0);
        FontId::ALL[(i + 1) % FontId::ALL.len()]
    }

    pub fn prev(self) -> FontId {
        let i = FontId::ALL.iter().position(|f| *f == self).unwrap_or(0);
        FontId::ALL[(i + FontId::ALL.len() - 1) % FontId::ALL.len()]
    }

    /// The lines of one glyph in this font.
    fn glyph(self, c: char) -> Vec<String> {
        let ink = match self {
            FontId::CalvinS => {
                return fonts::calvin_s(c).iter().map(|r| r.to_string()).collect();
            }
            FontId::Digital => return digital(fonts::bitmap(c)),
            FontId::Standard => "#",
            FontId::Bold => "██",
            FontId::Thin => "*",
            FontId::Bubble => "o",
        };
        let blank = " ".repeat(ink.chars().count());
        fonts::bitmap(c)
            .iter()
            .map(|row| {
                let mut line: String = row
                    .chars()
                    .map(|cell| if cell == '#' { ink } else { blank.as_str() })
                    .collect();
                line.push(' ');
                line
            })
            .collect()
    }
}

/// Folds the five bitmap rows into three lines of half-block cells.
fn digital(rows: &[&str; 5]) -> Vec<String> {
    let cells = |row: &str| row.chars().map(|c| c == '#').collect::<Vec<_>>();
    let grid: Vec<Vec<bool>> = rows.iter().map(|&r| cells(r)).collect();
    let width = grid[0].len();
    let empty = vec![false; width];
    [(0, 1), (2, 3), (4, 5)]
        .iter()
        .map(|&(top, bottom)| {
            let upper = &grid[top];
            let lower = grid.get(bottom).unwrap_or(&empty);
            let mut line: String = upper
                .iter()
                .zip(lower)
                .map(|(&u, &l)| match (u, l) {
                    (true, true) => '█',
                    (true, false) => '▀',
                    (false, true) => '▄',
                    (false, false) => ' ',
                })
                .collect();
            line.push(' ');
            line
        })
        .collect()
}

/// Renders `text` as `font.line_count()` newline-separated lines. Blank text
/// renders as an empty string.
pub fn generate(text: &str, font: FontId) -> String {
    if text.trim().is_empty() {
        return String::new();
    }
    let mut lines = vec![String::new(); font.line_count()];
    for c in text.chars() {
        // One glyph per input char, even where lowercasing expands it.
        let c = c.to_lowercase().next().unwrap_or(c);
        for (line, part) in lines.iter_mut().zip(font.glyph(c)) {
            line.push_str(&part);
        }
    }
    lines.join("\n")
}

pub const TITLE: &str = "ASCII ART GENERATOR";
pub const TRUNCATION_NOTE: &str = "Note: Text was truncated to 15 characters maximum.";
pub const GENERATED_MESSAGE: &str = "ASCII art generated! Press Ctrl+Y to copy to clipboard.";
pub const COPIED_MESSAGE: &str = "ASCII art copied to clipboard!";

/// What the terminal should do after the panel handled a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelResponse {
    /// Panel state changed; redraw.
    Updated,
    /// Art was generated; report it in the log.
    Generated,
    /// Copy this art to the clipboard.
    Copy(String),
    Exit,
    Ignored,
}

#[derive(Debug, Clone)]
pub struct AsciiPanel {
    text: String,
    font: FontId,
    truncated: bool,
    copy_enabled: bool,
    max_len: usize,
}

impl AsciiPanel {
    /// Opens the panel with `text`, cut to `max_len` characters.
    pub fn open(text: &str, max_len: usize, font: FontId) -> Self {
        let truncated = text.chars().count() > max_len;
        let text: String = text.chars().take(max_len).collect();
        if truncated {
            debug!("AsciiPanel: truncated input to '{}'", text);
        }
        AsciiPanel {
            text,
            font,
            truncated,
            copy_enabled: false,
            max_len,
        }
    }

    pub fn handle_key(&mut self, key: &KeyInput) -> PanelResponse {
        if key.is_ctrl('y') {
            return self.copy();
        }
        if let Some(c) = key.printable() {
            if self.text.chars().count() >= self.max_len {
                return PanelResponse::Ignored;
            }
            self.text.push(c);
            return PanelResponse::Updated;
        }
        match key.symbol {
            KeySymbol::Backspace => {
                if self.text.pop().is_some() {
                    PanelResponse::Updated
                } else {
                    PanelResponse::Ignored
                }
            }
            KeySymbol::Down | KeySymbol::Tab => {
                self.font = self.font.next();
                PanelResponse::Updated
            }
            KeySymbol::Up => {
                self.font = self.font.prev();
                PanelResponse::Updated
            }
            KeySymbol::Enter => self.generate(),
            KeySymbol::Escape => PanelResponse::Exit,
            _ => PanelResponse::Ignored,
        }
    }

    fn generate(&mut self) -> PanelResponse {
        if self.text.trim().is_empty() {
            return PanelResponse::Ignored;
        }
        self.copy_enabled = true;
        PanelResponse::Generated
    }

    fn copy(&self) -> PanelResponse {
        let art = self.preview();
        if !self.copy_enabled || art.trim().is_empty() {
            return PanelResponse::Ignored;
        }
        PanelResponse::Copy(art)
    }

    pub fn preview(&self) -> String {
        generate(&self.text, self.font)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn font(&self) -> FontId {
        self.font
    }

    pub fn was_truncated(&self) -> bool {
        self.truncated
    }

    pub fn copy_enabled(&self) -> bool {
        self.copy_enabled
    }
}
