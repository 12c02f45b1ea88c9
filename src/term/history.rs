// src/term/history.rs

//! Bounded, most-recent-first log of submitted commands with a browsing
//! cursor. The cursor lives in `[-1, len - 1]`; `-1` means "not browsing,
//! show the live input" and is represented as `None`.

use std::collections::VecDeque;

#[derive(Debug, Clone)]
pub struct HistoryRing {
    entries: VecDeque<String>,
    cursor: Option<usize>,
    limit: usize,
}

impl HistoryRing {
    pub fn new(limit: usize) -> Self {
        HistoryRing {
            entries: VecDeque::with_capacity(limit),
            cursor: None,
            limit: limit.max(1),
        }
    }

    /// Records a submitted command. Blank commands are not recorded.
    /// Always resets the cursor to the live position.
    pub fn push(&mut self, command: &str) {
        self.cursor = None;
        if command.trim().is_empty() {
            return;
        }
        self.entries.push_front(command.to_string());
        self.entries.truncate(self.limit);
    }

    /// Moves one entry back in time. Clamps at the oldest entry.
    /// Returns the text the input line should show.
    pub fn older(&mut self) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        let next = match self.cursor {
            None => 0,
            Some(i) => (i + 1).min(self.entries.len() - 1),
        };
        self.cursor = Some(next);
        self.entries.get(next).map(String::as_str)
    }

    /// Moves one entry forward in time. Moving past the newest entry returns
    /// to the live position, where the input line shows an empty buffer.
    pub fn newer(&mut self) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        self.cursor = match self.cursor {
            None | Some(0) => None,
            Some(i) => Some(i - 1),
        };
        match self.cursor {
            Some(i) => self.entries.get(i).map(String::as_str),
            None => Some(""),
        }
    }

    /// The cursor in the `-1`-based convention.
    pub fn cursor(&self) -> isize {
        self.cursor.map_or(-1, |i| i as isize)
    }

    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Up to `n` most recent commands, newest first.
    pub fn recent(&self, n: usize) -> Vec<String> {
        self.entries.iter().take(n).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
