// src/platform/console.rs

//! Provides a `Driver` implementation for a standard Unix console using ANSI
//! escape codes. Input is read from stdin in raw mode; every frame is a full
//! redraw.

use crate::color::Color;
use crate::keys::{KeySymbol, Modifiers};
use crate::platform::{
    AttrFlags, BackendEvent, Driver, RenderCommand, DEFAULT_WINDOW_HEIGHT_CHARS,
    DEFAULT_WINDOW_WIDTH_CHARS,
};

use anyhow::{anyhow, Context, Result};
use base64::{engine::general_purpose::STANDARD as BASE64_STANDARD, Engine};
use libc::{winsize, STDIN_FILENO, TIOCGWINSZ};
use nix::errno::Errno;
use nix::poll::{poll, PollFd, PollFlags};
use std::io::{self, stdout, Write};
use std::mem;
use std::os::fd::AsFd;
use std::os::unix::io::RawFd;
use termios::{tcsetattr, Termios, ECHO, ICANON, ISIG, TCSANOW, VMIN, VTIME};

// Logging
use log::{debug, error, info, trace, warn};

// --- ANSI Escape Code Constants ---
const CURSOR_HIDE: &str = "\x1b[?25l";
const CURSOR_SHOW: &str = "\x1b[?25h";
const SGR_PREFIX: &str = "\x1b[";
const SGR_SUFFIX: char = 'm';
const SGR_SEPARATOR: &str = ";";
const SGR_RESET_ALL: u16 = 0;
const CLEAR_SCREEN_AND_HOME: &str = "\x1b[2J\x1b[H";
const ALT_SCREEN_ENTER: &str = "\x1b[?1049h";
const ALT_SCREEN_LEAVE: &str = "\x1b[?1049l";
const FOCUS_REPORTING_ON: &str = "\x1b[?1004h";
const FOCUS_REPORTING_OFF: &str = "\x1b[?1004l";

/// Ctrl+D ends the program.
const EOT: u8 = 0x04;
const ESC: u8 = 0x1b;

/// A `Driver` implementation for rendering to a standard Unix console.
pub struct ConsoleDriver {
    /// Stores the original terminal attributes to restore them on cleanup.
    original_termios: Option<Termios>,
    last_known_width_cells: usize,
    last_known_height_cells: usize,
    input_buffer: [u8; 256],
    /// Frame being assembled until `PresentFrame`.
    output_buffer: String,
    cleaned_up: bool,
}

impl Driver for ConsoleDriver {
    /// Creates a new `ConsoleDriver`: raw mode, alternate screen, focus
    /// reporting, hidden cursor.
    ///
    /// If raw mode cannot be set it logs a warning and proceeds, which
    /// degrades line editing but keeps the program usable.
    fn new() -> Result<Self> {
        info!("Creating new ConsoleDriver.");
        let original_termios = match Termios::from_fd(STDIN_FILENO) {
            Ok(ts) => Some(ts),
            Err(e) => {
                warn!(
                    "ConsoleDriver: Failed to get initial termios: {}. Proceeding without raw mode.",
                    e
                );
                None
            }
        };

        if let Some(ref ots) = original_termios {
            let mut raw_termios = *ots;
            // Disable echo, canonical mode and signal generation (Ctrl-C).
            raw_termios.c_lflag &= !(ECHO | ICANON | ISIG);
            raw_termios.c_iflag &=
                !(libc::IXON | libc::IXOFF | libc::ICRNL | libc::INLCR | libc::IGNCR);
            raw_termios.c_oflag &= !libc::OPOST;
            // Reads return immediately; waiting is done with poll.
            raw_termios.c_cc[VMIN] = 0;
            raw_termios.c_cc[VTIME] = 0;

            if let Err(e) = tcsetattr(STDIN_FILENO, TCSANOW, &raw_termios) {
                warn!(
                    "ConsoleDriver: Failed to set raw terminal attributes: {}. Input might not work as expected.",
                    e
                );
            } else {
                debug!("ConsoleDriver: Terminal set to raw mode.");
            }
        }

        let mut out = stdout();
        write!(out, "{}{}{}", ALT_SCREEN_ENTER, FOCUS_REPORTING_ON, CURSOR_HIDE)
            .and_then(|_| out.flush())
            .context("ConsoleDriver: Failed to enter the alternate screen")?;

        let (cols, rows) = get_terminal_size_cells(STDIN_FILENO).unwrap_or_else(|e| {
            warn!("ConsoleDriver: {:#}. Assuming default size.", e);
            (DEFAULT_WINDOW_WIDTH_CHARS, DEFAULT_WINDOW_HEIGHT_CHARS)
        });
        info!("ConsoleDriver: Initial terminal size: {}x{} cells.", cols, rows);

        Ok(ConsoleDriver {
            original_termios,
            last_known_width_cells: cols,
            last_known_height_cells: rows,
            input_buffer: [0u8; 256],
            output_buffer: String::new(),
            cleaned_up: false,
        })
    }

    /// Polls stdin for up to `timeout_ms`, then reports any resize and the
    /// keys that arrived.
    fn wait_for_events(&mut self, timeout_ms: u64) -> Result<Vec<BackendEvent>> {
        let mut backend_events = Vec::new();

        let stdin = io::stdin();
        let mut fds = [PollFd::new(stdin.as_fd(), PollFlags::POLLIN)];
        let timeout = u16::try_from(timeout_ms).unwrap_or(u16::MAX);
        let readable = match poll(&mut fds, timeout) {
            Ok(0) => false,
            Ok(_) => fds[0]
                .revents()
                .is_some_and(|r| r.intersects(PollFlags::POLLIN | PollFlags::POLLHUP)),
            Err(Errno::EINTR) => {
                trace!("ConsoleDriver: poll interrupted.");
                false
            }
            Err(e) => return Err(e).context("ConsoleDriver: poll on stdin failed"),
        };

        self.check_resize(&mut backend_events);

        if readable {
            match read_stdin(&mut self.input_buffer) {
                Ok(0) => {
                    info!("ConsoleDriver: EOF on stdin. Requesting close.");
                    backend_events.push(BackendEvent::CloseRequested);
                }
                Ok(bytes_read) => {
                    trace!("ConsoleDriver: Read {} bytes from stdin.", bytes_read);
                    backend_events.extend(parse_input(&self.input_buffer[..bytes_read]));
                }
                Err(ref e)
                    if matches!(
                        e.kind(),
                        io::ErrorKind::WouldBlock | io::ErrorKind::Interrupted
                    ) =>
                {
                    trace!("ConsoleDriver: stdin read {:?}.", e.kind());
                }
                Err(e) => return Err(e).context("ConsoleDriver: Error reading from stdin"),
            }
        }
        Ok(backend_events)
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.last_known_width_cells, self.last_known_height_cells)
    }

    fn execute_render_commands(&mut self, commands: Vec<RenderCommand>) -> Result<()> {
        for command in commands {
            match command {
                RenderCommand::ClearAll { bg } => {
                    let mut sgr_codes = vec![SGR_RESET_ALL];
                    Self::sgr_append_bg_color(&mut sgr_codes, bg);
                    self.push_sgr(&sgr_codes);
                    self.output_buffer.push_str(CLEAR_SCREEN_AND_HOME);
                }
                RenderCommand::DrawTextRun {
                    x,
                    y,
                    text,
                    fg,
                    bg,
                    flags,
                } => {
                    if text.is_empty() {
                        continue;
                    }
                    self.output_buffer
                        .push_str(&Self::format_cursor_position(y + 1, x + 1));
                    let mut sgr_codes = vec![SGR_RESET_ALL];
                    Self::sgr_append_attributes(&mut sgr_codes, fg, bg, flags);
                    self.push_sgr(&sgr_codes);
                    self.output_buffer.push_str(&text);
                }
                RenderCommand::SetCursorPosition { x, y } => {
                    self.output_buffer
                        .push_str(&Self::format_cursor_position(y + 1, x + 1));
                }
                RenderCommand::SetCursorVisibility { visible } => {
                    self.output_buffer
                        .push_str(if visible { CURSOR_SHOW } else { CURSOR_HIDE });
                }
                RenderCommand::SetWindowTitle { title } => self.set_title(&title),
                RenderCommand::PresentFrame => self.present()?,
            }
        }
        Ok(())
    }

    /// Writes the assembled frame and flushes stdout.
    fn present(&mut self) -> Result<()> {
        let mut out = stdout();
        if !self.output_buffer.is_empty() {
            out.write_all(self.output_buffer.as_bytes())
                .context("ConsoleDriver: Failed to write frame")?;
            self.output_buffer.clear();
        }
        out.flush()
            .context("ConsoleDriver: Failed to flush stdout during present")
    }

    /// Sets the window title using an OSC sequence.
    fn set_title(&mut self, title: &str) {
        self.output_buffer
            .push_str(&format!("\x1b]0;{}\x07", title));
        trace!("ConsoleDriver: Set window title to '{}'", title);
    }

    /// Sends the text to the hosting terminal's clipboard with OSC 52.
    fn copy_to_clipboard(&mut self, text: &str) -> Result<()> {
        let encoded = BASE64_STANDARD.encode(text.as_bytes());
        self.output_buffer
            .push_str(&format!("\x1b]52;c;{}\x07", encoded));
        debug!("ConsoleDriver: copied {} bytes via OSC 52", text.len());
        self.present()
    }

    /// A console cannot open a browser; the link goes to the log instead.
    fn open_link(&mut self, url: &str) -> Result<()> {
        info!("ConsoleDriver: open {} in a browser", url);
        Ok(())
    }

    fn scroll_to_section(&mut self, id: &str) -> Result<()> {
        Err(anyhow!(
            "ConsoleDriver: no page to scroll to section '{}'",
            id
        ))
    }

    /// Restores original terminal attributes, leaves the alternate screen and
    /// shows the cursor.
    fn cleanup(&mut self) -> Result<()> {
        if self.cleaned_up {
            return Ok(());
        }
        self.cleaned_up = true;
        info!("ConsoleDriver: Cleaning up...");
        let mut out = stdout();
        write!(
            out,
            "\x1b[{}m{}{}{}",
            SGR_RESET_ALL, FOCUS_REPORTING_OFF, CURSOR_SHOW, ALT_SCREEN_LEAVE
        )
        .and_then(|_| out.flush())
        .context("ConsoleDriver: Failed to restore the screen")?;

        if let Some(original_termios_val) = self.original_termios.take() {
            debug!("ConsoleDriver: Restoring original terminal attributes.");
            tcsetattr(STDIN_FILENO, TCSANOW, &original_termios_val)
                .context("ConsoleDriver: Failed to restore original terminal attributes")?;
        } else {
            warn!("ConsoleDriver: No original termios to restore.");
        }
        info!("ConsoleDriver: Cleanup complete.");
        Ok(())
    }
}

// --- ConsoleDriver Private Helper Methods ---
impl ConsoleDriver {
    fn check_resize(&mut self, events: &mut Vec<BackendEvent>) {
        match get_terminal_size_cells(STDIN_FILENO) {
            Ok((cols, rows)) => {
                if cols != self.last_known_width_cells || rows != self.last_known_height_cells {
                    info!(
                        "ConsoleDriver: Terminal resized from {}x{} to {}x{} cells.",
                        self.last_known_width_cells, self.last_known_height_cells, cols, rows
                    );
                    self.last_known_width_cells = cols;
                    self.last_known_height_cells = rows;
                    events.push(BackendEvent::Resize { cols, rows });
                }
            }
            Err(e) => trace!("ConsoleDriver: {:#}. Keeping last known size.", e),
        }
    }

    fn push_sgr(&mut self, codes: &[u16]) {
        if codes.is_empty() {
            return;
        }
        self.output_buffer.push_str(SGR_PREFIX);
        self.output_buffer.push_str(
            &codes
                .iter()
                .map(u16::to_string)
                .collect::<Vec<_>>()
                .join(SGR_SEPARATOR),
        );
        self.output_buffer.push(SGR_SUFFIX);
    }

    fn sgr_append_attributes(codes: &mut Vec<u16>, fg: Color, bg: Color, flags: AttrFlags) {
        if flags.contains(AttrFlags::BOLD) {
            codes.push(1);
        }
        if flags.contains(AttrFlags::DIM) {
            codes.push(2);
        }
        if flags.contains(AttrFlags::UNDERLINE) {
            codes.push(4);
        }
        if flags.contains(AttrFlags::REVERSE) {
            codes.push(7);
        }
        Self::sgr_append_fg_color(codes, fg);
        Self::sgr_append_bg_color(codes, bg);
    }

    fn sgr_append_fg_color(codes: &mut Vec<u16>, fg: Color) {
        match fg {
            Color::Default => codes.push(39),
            Color::Rgb(r, g, b) => codes.extend_from_slice(&[38, 2, r as u16, g as u16, b as u16]),
        }
    }

    fn sgr_append_bg_color(codes: &mut Vec<u16>, bg: Color) {
        match bg {
            Color::Default => codes.push(49),
            Color::Rgb(r, g, b) => codes.extend_from_slice(&[48, 2, r as u16, g as u16, b as u16]),
        }
    }

    /// Formats an ANSI CUP (Cursor Position) sequence. 1-based.
    fn format_cursor_position(row_1_based: usize, col_1_based: usize) -> String {
        format!("\x1b[{};{}H", row_1_based, col_1_based)
    }
}

fn read_stdin(buf: &mut [u8]) -> io::Result<usize> {
    // SAFETY: `buf` is valid for writes of `buf.len()` bytes.
    let n = unsafe { libc::read(STDIN_FILENO, buf.as_mut_ptr().cast(), buf.len()) };
    if n < 0 {
        Err(io::Error::last_os_error())
    } else {
        Ok(n as usize)
    }
}

fn key(symbol: KeySymbol, modifiers: Modifiers, text: impl Into<String>) -> BackendEvent {
    BackendEvent::Key {
        symbol,
        modifiers,
        text: text.into(),
    }
}

/// Decodes raw console bytes into backend events.
///
/// Handles CSI and SS3 cursor keys, `CSI n ~` editing keys, focus reports
/// (`CSI I` / `CSI O`), Ctrl+letter, Ctrl+D and UTF-8 text. A lone ESC is the
/// Escape key.
pub fn parse_input(bytes: &[u8]) -> Vec<BackendEvent> {
    let mut events = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        let byte = bytes[i];
        let (event, used) = match byte {
            ESC => parse_escape(&bytes[i..]),
            b'\r' | b'\n' => (key(KeySymbol::Enter, Modifiers::empty(), ""), 1),
            b'\t' => (key(KeySymbol::Tab, Modifiers::empty(), ""), 1),
            0x08 | 0x7f => (key(KeySymbol::Backspace, Modifiers::empty(), ""), 1),
            EOT => (BackendEvent::CloseRequested, 1),
            0x01..=0x1a => {
                let letter = (byte - 1 + b'a') as char;
                (key(KeySymbol::Char(letter), Modifiers::CONTROL, ""), 1)
            }
            0x20..=0x7e => {
                let c = byte as char;
                (key(KeySymbol::Char(c), Modifiers::empty(), c.to_string()), 1)
            }
            _ => parse_utf8(&bytes[i..]),
        };
        trace!("ConsoleDriver: {:?} from {} bytes", event, used);
        events.push(event);
        i += used;
    }
    events
}

fn parse_utf8(bytes: &[u8]) -> (BackendEvent, usize) {
    let len = match bytes[0] {
        0xc0..=0xdf => 2,
        0xe0..=0xef => 3,
        0xf0..=0xf7 => 4,
        _ => 1,
    };
    let len = len.min(bytes.len());
    match std::str::from_utf8(&bytes[..len])
        .ok()
        .and_then(|s| s.chars().next())
    {
        Some(c) => (key(KeySymbol::Char(c), Modifiers::empty(), c.to_string()), len),
        None => (key(KeySymbol::Unknown, Modifiers::empty(), ""), len),
    }
}

fn parse_escape(bytes: &[u8]) -> (BackendEvent, usize) {
    let escape = (key(KeySymbol::Escape, Modifiers::empty(), ""), 1);
    match bytes.get(1) {
        Some(b'[') => {
            let Some(end) = bytes[2..]
                .iter()
                .position(|b| (0x40..=0x7e).contains(b))
                .map(|p| p + 2)
            else {
                return escape;
            };
            let params = &bytes[2..end];
            let symbol = match bytes[end] {
                b'A' => KeySymbol::Up,
                b'B' => KeySymbol::Down,
                b'C' => KeySymbol::Right,
                b'D' => KeySymbol::Left,
                b'H' => KeySymbol::Home,
                b'F' => KeySymbol::End,
                b'I' => return (BackendEvent::FocusGained, end + 1),
                b'O' => return (BackendEvent::FocusLost, end + 1),
                b'~' => match params {
                    b"1" | b"7" => KeySymbol::Home,
                    b"4" | b"8" => KeySymbol::End,
                    b"3" => KeySymbol::Delete,
                    b"5" => KeySymbol::PageUp,
                    b"6" => KeySymbol::PageDown,
                    _ => KeySymbol::Unknown,
                },
                _ => KeySymbol::Unknown,
            };
            (key(symbol, Modifiers::empty(), ""), end + 1)
        }
        Some(b'O') if bytes.len() >= 3 => {
            let symbol = match bytes[2] {
                b'A' => KeySymbol::Up,
                b'B' => KeySymbol::Down,
                b'C' => KeySymbol::Right,
                b'D' => KeySymbol::Left,
                b'H' => KeySymbol::Home,
                b'F' => KeySymbol::End,
                _ => KeySymbol::Unknown,
            };
            (key(symbol, Modifiers::empty(), ""), 3)
        }
        _ => escape,
    }
}

/// Retrieves the terminal size in character cells using an `ioctl` call.
/// Zero sizes, as reported by some pseudo terminals, fall back to defaults.
fn get_terminal_size_cells(fd: RawFd) -> Result<(usize, usize)> {
    // SAFETY: `ioctl` is an FFI call; `winsz` is a valid, zeroed `winsize`.
    let winsz = unsafe {
        let mut winsz: winsize = mem::zeroed();
        if libc::ioctl(fd, TIOCGWINSZ, &mut winsz) == -1 {
            return Err(anyhow::Error::from(io::Error::last_os_error())
                .context("ConsoleDriver: ioctl(TIOCGWINSZ) failed"));
        }
        winsz
    };
    let cols = match winsz.ws_col {
        0 => DEFAULT_WINDOW_WIDTH_CHARS,
        n => n as usize,
    };
    let rows = match winsz.ws_row {
        0 => DEFAULT_WINDOW_HEIGHT_CHARS,
        n => n as usize,
    };
    Ok((cols, rows))
}

/// Ensures cleanup is attempted when `ConsoleDriver` is dropped.
impl Drop for ConsoleDriver {
    fn drop(&mut self) {
        if let Err(e) = self.cleanup() {
            error!("ConsoleDriver: Error during cleanup in drop: {}", e);
        }
    }
}
