// src/platform/mock.rs

use crate::platform::{BackendEvent, Driver, RenderCommand};
use anyhow::{anyhow, Result};
use std::collections::VecDeque;

/// A scripted `Driver` for orchestrator tests.
///
/// Each call to `wait_for_events` returns the next queued batch (or nothing)
/// and records the timeout it was given. A queued `Resize` also changes the
/// reported dimensions.
pub struct MockDriver {
    batches: VecDeque<Vec<BackendEvent>>,
    pub waits: Vec<u64>,
    pub commands: Vec<RenderCommand>,
    pub frames: usize,
    pub copied: Vec<String>,
    pub opened: Vec<String>,
    pub scrolled: Vec<String>,
    pub title: Option<String>,
    pub cols: usize,
    pub rows: usize,
    /// When false, `scroll_to_section` fails like a console does.
    pub has_page: bool,
    pub cleaned_up: bool,
}

impl MockDriver {
    pub fn with_size(cols: usize, rows: usize) -> Self {
        MockDriver {
            batches: VecDeque::new(),
            waits: Vec::new(),
            commands: Vec::new(),
            frames: 0,
            copied: Vec::new(),
            opened: Vec::new(),
            scrolled: Vec::new(),
            title: None,
            cols,
            rows,
            has_page: true,
            cleaned_up: false,
        }
    }

    /// Queues one event as its own batch.
    pub fn push_event(&mut self, event: BackendEvent) {
        self.batches.push_back(vec![event]);
    }

    pub fn push_batch(&mut self, events: Vec<BackendEvent>) {
        self.batches.push_back(events);
    }
}

impl Driver for MockDriver {
    fn new() -> Result<Self> {
        Ok(MockDriver::with_size(80, 24))
    }

    fn wait_for_events(&mut self, timeout_ms: u64) -> Result<Vec<BackendEvent>> {
        self.waits.push(timeout_ms);
        let events = self.batches.pop_front().unwrap_or_default();
        for event in &events {
            if let BackendEvent::Resize { cols, rows } = event {
                self.cols = *cols;
                self.rows = *rows;
            }
        }
        Ok(events)
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    fn execute_render_commands(&mut self, commands: Vec<RenderCommand>) -> Result<()> {
        for command in &commands {
            if *command == RenderCommand::PresentFrame {
                self.frames += 1;
            }
        }
        self.commands.extend(commands);
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        Ok(())
    }

    fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }

    fn copy_to_clipboard(&mut self, text: &str) -> Result<()> {
        self.copied.push(text.to_string());
        Ok(())
    }

    fn open_link(&mut self, url: &str) -> Result<()> {
        self.opened.push(url.to_string());
        Ok(())
    }

    fn scroll_to_section(&mut self, id: &str) -> Result<()> {
        if !self.has_page {
            return Err(anyhow!("no page"));
        }
        self.scrolled.push(id.to_string());
        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        self.cleaned_up = true;
        Ok(())
    }
}
