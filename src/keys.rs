// src/keys.rs

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Represents a keyboard modifier.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct Modifiers: u8 {
        const SHIFT = 1 << 0;
        const CONTROL = 1 << 1;
        const ALT = 1 << 2; // Also known as Option on macOS
        const SUPER = 1 << 3;
    }
}

/// Represents a key symbol.
///
/// Only the keys the terminal reacts to get their own variant; everything
/// else arrives as `Unknown` and is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum KeySymbol {
    Char(char),

    // Navigation keys
    Left,
    Right,
    Up,
    Down,
    PageUp,
    PageDown,
    Home,
    End,
    Delete,

    Enter,
    Backspace,
    Tab,
    Escape,

    #[default]
    Unknown,
}

/// A single key press as seen by the terminal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyInput {
    pub symbol: KeySymbol,
    pub modifiers: Modifiers,
    /// Composed text for printable keys.
    pub text: Option<String>,
}

impl KeyInput {
    pub fn new(symbol: KeySymbol) -> Self {
        let text = match symbol {
            KeySymbol::Char(c) if !c.is_control() => Some(c.to_string()),
            _ => None,
        };
        KeyInput {
            symbol,
            modifiers: Modifiers::empty(),
            text,
        }
    }

    pub fn ctrl(c: char) -> Self {
        KeyInput {
            symbol: KeySymbol::Char(c),
            modifiers: Modifiers::CONTROL,
            text: None,
        }
    }

    /// The printable character carried by this key, if it is a plain press.
    pub fn printable(&self) -> Option<char> {
        if self
            .modifiers
            .intersects(Modifiers::CONTROL | Modifiers::ALT | Modifiers::SUPER)
        {
            return None;
        }
        match self.symbol {
            KeySymbol::Char(c) if !c.is_control() => Some(c),
            _ => None,
        }
    }

    /// True for Ctrl+`c` (case-insensitive).
    pub fn is_ctrl(&self, c: char) -> bool {
        self.modifiers.contains(Modifiers::CONTROL)
            && matches!(self.symbol, KeySymbol::Char(k) if k.eq_ignore_ascii_case(&c))
    }
}

impl From<char> for KeyInput {
    fn from(c: char) -> Self {
        KeyInput::new(KeySymbol::Char(c))
    }
}

impl From<KeySymbol> for KeyInput {
    fn from(symbol: KeySymbol) -> Self {
        KeyInput::new(symbol)
    }
}
