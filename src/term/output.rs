// src/term/output.rs

//! The scrollable output log every component writes into.
//!
//! Lines are addressed by a stable [`LineId`] rather than by index so that a
//! typing animation can keep growing "its" line even while other lines are
//! appended after it. The viewport is always pinned to the newest line; the
//! renderer simply shows the tail of the log.

/// Stable identity of a line for in-place updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineId(u64);

/// Styling hint carried by a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Text,
    /// A submitted command, rendered after the prompt.
    Echo,
    /// Spacer appended whenever the terminal becomes ready for input again.
    Prompt,
    /// Multi-line ascii artwork.
    Art,
    /// Emphasised line (titles, warnings).
    Highlight,
    /// Help categories and other section headers.
    Heading,
    /// Dimmed hint text.
    Dim,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub kind: LineKind,
    pub text: String,
}

impl Line {
    pub fn text(text: impl Into<String>) -> Self {
        Line {
            kind: LineKind::Text,
            text: text.into(),
        }
    }

    pub fn blank() -> Self {
        Line::text("")
    }

    pub fn echo(command: impl Into<String>) -> Self {
        Line {
            kind: LineKind::Echo,
            text: command.into(),
        }
    }

    pub fn art(text: impl Into<String>) -> Self {
        Line {
            kind: LineKind::Art,
            text: text.into(),
        }
    }

    pub fn highlight(text: impl Into<String>) -> Self {
        Line {
            kind: LineKind::Highlight,
            text: text.into(),
        }
    }

    pub fn heading(text: impl Into<String>) -> Self {
        Line {
            kind: LineKind::Heading,
            text: text.into(),
        }
    }

    pub fn dim(text: impl Into<String>) -> Self {
        Line {
            kind: LineKind::Dim,
            text: text.into(),
        }
    }

    fn prompt() -> Self {
        Line {
            kind: LineKind::Prompt,
            text: String::new(),
        }
    }
}

#[derive(Debug, Clone)]
struct Entry {
    id: LineId,
    line: Line,
}

/// Append-only (apart from `clear`) log of output lines.
#[derive(Debug, Default)]
pub struct OutputLog {
    entries: Vec<Entry>,
    next_id: u64,
    prompts_printed: usize,
    /// Bumped on every mutation so renderers can skip unchanged frames.
    revision: u64,
}

impl OutputLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: Line) -> LineId {
        let id = LineId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry { id, line });
        self.revision += 1;
        id
    }

    pub fn push_text(&mut self, text: impl Into<String>) -> LineId {
        self.push(Line::text(text))
    }

    pub fn extend(&mut self, lines: impl IntoIterator<Item = Line>) {
        for line in lines {
            self.push(line);
        }
    }

    /// Marks the terminal as ready for the next command.
    pub fn print_prompt(&mut self) -> LineId {
        self.prompts_printed += 1;
        self.push(Line::prompt())
    }

    /// Replaces the text of a line in place. Returns false if the line was
    /// cleared away in the meantime.
    pub fn set_text(&mut self, id: LineId, text: impl Into<String>) -> bool {
        match self.entries.iter_mut().rev().find(|e| e.id == id) {
            Some(entry) => {
                entry.line.text = text.into();
                self.revision += 1;
                true
            }
            None => false,
        }
    }

    pub fn append_char(&mut self, id: LineId, c: char) -> bool {
        match self.entries.iter_mut().rev().find(|e| e.id == id) {
            Some(entry) => {
                entry.line.text.push(c);
                self.revision += 1;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: LineId) -> Option<&Line> {
        self.entries.iter().find(|e| e.id == id).map(|e| &e.line)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.revision += 1;
    }

    pub fn lines(&self) -> impl DoubleEndedIterator<Item = &Line> + ExactSizeIterator {
        self.entries.iter().map(|e| &e.line)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&Line> {
        self.entries.last().map(|e| &e.line)
    }

    /// Total number of prompts printed over the log's lifetime.
    pub fn prompts_printed(&self) -> usize {
        self.prompts_printed
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Plain texts of every line, mostly for tests and debugging.
    pub fn texts(&self) -> Vec<String> {
        self.lines().map(|l| l.text.clone()).collect()
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.lines().any(|l| l.text.contains(needle))
    }
}
