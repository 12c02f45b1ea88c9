// src/odxxt/mod.rs

//! The odxxt terminal customization interface.
//!
//! A small nested state machine owned by the terminal while it is in
//! `SubInterfaceActive`. [`OdxxtView::on_key`] is the whole transition
//! table; the content of each view is produced as scripted sequences by the
//! builders in [`scripts`].

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::keys::{KeyInput, KeySymbol};

pub mod scripts;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeId {
    #[default]
    Default,
    Matrix,
    Sunset,
    Midnight,
    Neon,
    Retro,
}

/// Colours of one terminal theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub id: ThemeId,
    pub name: &'static str,
    pub background: &'static str,
    pub text: &'static str,
    pub accent: &'static str,
}

impl Theme {
    pub fn background_color(&self) -> Color {
        Color::from_hex(self.background)
    }

    pub fn text_color(&self) -> Color {
        Color::from_hex(self.text)
    }

    pub fn accent_color(&self) -> Color {
        Color::from_hex(self.accent)
    }
}

pub const THEMES: [Theme; 6] = [
    Theme {
        id: ThemeId::Default,
        name: "Classic Terminal",
        background: "#0c0c0c",
        text: "#ffffff",
        accent: "#cccccc",
    },
    Theme {
        id: ThemeId::Matrix,
        name: "Matrix Green",
        background: "#0f0f0f",
        text: "#00ff00",
        accent: "#00cc00",
    },
    Theme {
        id: ThemeId::Sunset,
        name: "Sunset Orange",
        background: "#1a0f0f",
        text: "#ff9900",
        accent: "#cc5500",
    },
    Theme {
        id: ThemeId::Midnight,
        name: "Midnight Blue",
        background: "#0f1a2c",
        text: "#3498db",
        accent: "#1e5b8d",
    },
    Theme {
        id: ThemeId::Neon,
        name: "Neon Dreams",
        background: "#120b1a",
        text: "#f700ff",
        accent: "#9600ff",
    },
    Theme {
        id: ThemeId::Retro,
        name: "Retro Amber",
        background: "#191a19",
        text: "#ffb000",
        accent: "#cc8800",
    },
];

impl ThemeId {
    pub fn theme(self) -> &'static Theme {
        // THEMES is indexed in declaration order.
        &THEMES[self as usize]
    }

    pub fn id(self) -> &'static str {
        match self {
            ThemeId::Default => "default",
            ThemeId::Matrix => "matrix",
            ThemeId::Sunset => "sunset",
            ThemeId::Midnight => "midnight",
            ThemeId::Neon => "neon",
            ThemeId::Retro => "retro",
        }
    }

    /// Theme behind gallery slot `1`..=`6`.
    pub fn from_slot(slot: u32) -> Option<ThemeId> {
        let index = usize::try_from(slot.checked_sub(1)?).ok()?;
        THEMES.get(index).map(|t| t.id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OdxxtView {
    #[default]
    MainMenu,
    ThemeGallery,
    CommandLogs,
    PerfDashboard,
}

/// Outcome of a key press inside the interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OdxxtTransition {
    Open(OdxxtView),
    /// Leave the interface for the normal terminal.
    Exit,
    /// Back to the main menu.
    Back,
    ApplyTheme(ThemeId),
    /// Replay the n-th (0-based) listed command.
    Replay(usize),
    Ignore,
}

/// Most commands listed in the logs view.
pub const LOG_ENTRIES: usize = 15;

/// Replay key of each listed entry, in order. `b` is taken by back.
pub const REPLAY_KEYS: [char; LOG_ENTRIES] = [
    '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'c', 'd', 'e', 'f', 'g',
];

impl OdxxtView {
    pub fn on_key(self, key: &KeyInput) -> OdxxtTransition {
        let digit = key.printable().and_then(|c| c.to_digit(10));
        let back = matches!(key.symbol, KeySymbol::Backspace | KeySymbol::Escape)
            || matches!(key.printable(), Some('b' | 'B'));

        match self {
            OdxxtView::MainMenu => match digit {
                Some(1) => OdxxtTransition::Open(OdxxtView::ThemeGallery),
                Some(2) => OdxxtTransition::Open(OdxxtView::CommandLogs),
                Some(3) => OdxxtTransition::Open(OdxxtView::PerfDashboard),
                Some(4) => OdxxtTransition::Exit,
                _ => OdxxtTransition::Ignore,
            },
            _ if back => OdxxtTransition::Back,
            OdxxtView::ThemeGallery => digit
                .and_then(ThemeId::from_slot)
                .map_or(OdxxtTransition::Ignore, OdxxtTransition::ApplyTheme),
            OdxxtView::CommandLogs => key
                .printable()
                .map(|c| c.to_ascii_lowercase())
                .and_then(|c| REPLAY_KEYS.iter().position(|k| *k == c))
                .map_or(OdxxtTransition::Ignore, OdxxtTransition::Replay),
            OdxxtView::PerfDashboard => OdxxtTransition::Ignore,
        }
    }
}

/// State of the interface while the terminal is in `SubInterfaceActive`.
#[derive(Debug, Clone, Default)]
pub struct OdxxtInterface {
    view: OdxxtView,
    /// Keys are ignored until the current view has finished drawing.
    ready: bool,
    /// Commands shown by the logs view, newest first.
    listed: Vec<String>,
}

impl OdxxtInterface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> OdxxtView {
        self.view
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn set_ready(&mut self) {
        self.ready = true;
    }

    /// Switches view; keys are held off until it has been drawn.
    pub fn enter(&mut self, view: OdxxtView) {
        self.view = view;
        self.ready = false;
    }

    pub fn set_listed(&mut self, commands: Vec<String>) {
        self.listed = commands;
    }

    pub fn listed(&self, index: usize) -> Option<&str> {
        self.listed.get(index).map(String::as_str)
    }

    pub fn on_key(&self, key: &KeyInput) -> OdxxtTransition {
        if !self.ready {
            return OdxxtTransition::Ignore;
        }
        self.view.on_key(key)
    }
}
