// src/odxxt/scripts.rs

//! Scripted content of the odxxt interface views.

use chrono::{DateTime, Duration, Local};
use rand::Rng;

use super::{Theme, ThemeId, REPLAY_KEYS, THEMES};
use crate::sequence::{Completion, ScriptedStep, Sequence};
use crate::term::output::Line;
use crate::timer::Millis;

pub const BANNER: [&str; 6] = [
    " ██████╗ ██████╗ ██╗  ██╗██╗  ██╗████████╗",
    "██╔═══██╗██╔══██╗╚██╗██╔╝╚██╗██╔╝╚══██╔══╝",
    "██║   ██║██║  ██║ ╚███╔╝  ╚███╔╝    ██║   ",
    "██║   ██║██║  ██║ ██╔██╗  ██╔██╗    ██║   ",
    "╚██████╔╝██████╔╝██╔╝ ██╗██╔╝ ██╗   ██║   ",
    " ╚═════╝ ╚═════╝ ╚═╝  ╚═╝╚═╝  ╚═╝   ╚═╝   ",
];

const OVERRIDE_LINES: [&str; 6] = [
    "INITIATING SYSTEM OVERRIDE...",
    "BYPASSING SECURITY PROTOCOLS...",
    "ACCESSING KERNEL MEMORY...",
    "DISABLING COUNTERMEASURES...",
    "██████████ 100% COMPLETE",
    "",
];

const MATRIX_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789$#@%&*()+=<>?/\\|{}[]~";
pub const MATRIX_ROWS: usize = 15;
pub const MATRIX_COLUMNS: usize = 40;

pub const MENU_TITLE: &str = "[ TERMINAL CUSTOMIZATION INTERFACE ]";
pub const BACK_BUTTON: &str = "[ RETURN TO MAIN MENU ]";

const TYPE_MS: Millis = 30;
const LINE_GAP_MS: Millis = 200;
const REVEAL_MS: Millis = 500;

fn back_button() -> ScriptedStep {
    ScriptedStep::EmitLine(Line::highlight(BACK_BUTTON))
}

fn heading(title: &str) -> Vec<ScriptedStep> {
    vec![
        ScriptedStep::Clear,
        ScriptedStep::EmitLine(Line::heading(title)),
        ScriptedStep::line("-".repeat(title.chars().count())),
        ScriptedStep::blank(),
    ]
}

/// Rain of random characters shown before the interface appears.
pub fn matrix_block(rng: &mut impl Rng) -> Vec<Line> {
    let glyphs: Vec<char> = MATRIX_CHARS.chars().collect();
    (0..MATRIX_ROWS)
        .map(|_| {
            let row: String = (0..MATRIX_COLUMNS)
                .map(|_| glyphs[rng.gen_range(0..glyphs.len())])
                .collect();
            Line::dim(row)
        })
        .collect()
}

/// The intrusion prelude followed by the main menu.
pub fn boot(theme: ThemeId, rng: &mut impl Rng) -> Sequence {
    let mut steps = vec![ScriptedStep::Clear];
    for line in OVERRIDE_LINES {
        steps.push(ScriptedStep::type_text(line, TYPE_MS));
        steps.push(ScriptedStep::Wait(LINE_GAP_MS));
    }
    steps.push(ScriptedStep::EmitLine(Line::highlight("SYSTEM ACCESS GRANTED")));
    steps.push(ScriptedStep::Wait(250));
    steps.push(ScriptedStep::EmitBlock(matrix_block(rng)));
    steps.push(ScriptedStep::Wait(2_000));
    steps.extend(main_menu(theme).steps);
    Sequence::new(steps)
        .then(Completion::OdxxtReady)
        .holding_input()
}

/// The interface itself: banner, status rows and the option menu.
pub fn main_menu(theme: ThemeId) -> Sequence {
    let status = [
        ("SYSTEM STATUS", "ONLINE".to_string()),
        ("CURRENT THEME", theme.id().to_uppercase()),
        ("AUTO-SAVE", "ENABLED".to_string()),
        ("CREATIVITY MODE", "ACTIVE".to_string()),
    ];
    let steps = vec![
        ScriptedStep::Clear,
        ScriptedStep::EmitBlock(BANNER.iter().map(|l| Line::art(*l)).collect()),
        ScriptedStep::EmitLine(Line::highlight(MENU_TITLE)),
        ScriptedStep::Wait(REVEAL_MS),
        ScriptedStep::EmitBlock(
            status
                .iter()
                .map(|(label, value)| Line::text(format!("{}: {}", label, value)))
                .collect(),
        ),
        ScriptedStep::Wait(REVEAL_MS),
        ScriptedStep::blank(),
        ScriptedStep::EmitLine(Line::heading("SELECT AN OPTION:")),
        ScriptedStep::EmitBlock(vec![
            Line::text("  1  Terminal Theme Gallery"),
            Line::text("  2  Command History Logs"),
            Line::text("  3  System Performance Dashboard"),
            Line::text("  4  Exit Interface"),
        ]),
    ];
    Sequence::new(steps)
        .then(Completion::OdxxtReady)
        .holding_input()
}

fn theme_row(slot: usize, theme: &Theme) -> Line {
    Line::text(format!(
        "  [{}] {:<18} bg {}  text {}  accent {}",
        slot, theme.name, theme.background, theme.text, theme.accent
    ))
}

pub fn theme_gallery() -> Sequence {
    let mut steps = heading("TERMINAL THEME GALLERY");
    steps.push(ScriptedStep::Wait(REVEAL_MS));
    steps.push(ScriptedStep::EmitBlock(
        THEMES
            .iter()
            .enumerate()
            .map(|(i, theme)| theme_row(i + 1, theme))
            .collect(),
    ));
    steps.push(ScriptedStep::Wait(REVEAL_MS));
    steps.extend([
        ScriptedStep::blank(),
        ScriptedStep::line("Press 1-6 to apply a theme to your terminal."),
        ScriptedStep::line("Terminal themes persist during your session."),
        ScriptedStep::blank(),
        back_button(),
    ]);
    Sequence::new(steps)
        .then(Completion::OdxxtReady)
        .holding_input()
}

pub fn apply_theme(theme: ThemeId) -> Sequence {
    let name = theme.theme().name;
    Sequence::new(vec![
        ScriptedStep::blank(),
        ScriptedStep::line(format!("Applying theme: {}...", name)),
        ScriptedStep::Wait(700),
        ScriptedStep::line(format!("Theme \"{}\" applied successfully!", name)),
    ])
    .then(Completion::OdxxtReady)
    .holding_input()
}

/// Fake wall-clock times for the listed commands, newer entries closer to
/// `now`.
pub fn log_timestamps(now: DateTime<Local>, count: usize, rng: &mut impl Rng) -> Vec<String> {
    (0..count)
        .map(|index| {
            let spread = (index as i64 * 2).max(1);
            let minutes = rng.gen_range(0..spread);
            let seconds = rng.gen_range(0..spread);
            let at = now - Duration::minutes(minutes) - Duration::seconds(seconds);
            at.format("%-I:%M:%S %p").to_string()
        })
        .collect()
}

pub fn command_logs(commands: &[String], timestamps: &[String]) -> Sequence {
    let mut steps = heading("COMMAND HISTORY LOGS");
    steps.push(ScriptedStep::Wait(REVEAL_MS));
    if commands.is_empty() {
        steps.push(ScriptedStep::line(
            "No commands have been executed in this session.",
        ));
        steps.push(ScriptedStep::line("Try running some commands first!"));
    } else {
        steps.push(ScriptedStep::EmitBlock(
            commands
                .iter()
                .zip(timestamps)
                .zip(REPLAY_KEYS)
                .map(|((cmd, at), key)| Line::text(format!("  [{}] {:>11}  {}", key, at, cmd)))
                .collect(),
        ));
        steps.push(ScriptedStep::Wait(300));
        steps.extend([
            ScriptedStep::blank(),
            ScriptedStep::line("Press the key in brackets to replay a command."),
            ScriptedStep::line(format!("Total commands this session: {}", commands.len())),
            ScriptedStep::blank(),
        ]);
    }
    steps.push(back_button());
    Sequence::new(steps)
        .then(Completion::OdxxtReady)
        .holding_input()
}

#[derive(Debug, Clone, PartialEq)]
pub struct Metric {
    pub name: &'static str,
    pub value: u32,
    pub max: u32,
    pub unit: &'static str,
}

impl Metric {
    pub fn ratio(&self) -> f64 {
        f64::from(self.value) / f64::from(self.max)
    }
}

pub fn sample_metrics(rng: &mut impl Rng) -> [Metric; 4] {
    [
        Metric {
            name: "CPU Usage",
            value: rng.gen_range(10..50),
            max: 100,
            unit: "%",
        },
        Metric {
            name: "Memory",
            value: rng.gen_range(1024..3072),
            max: 4096,
            unit: "MB",
        },
        Metric {
            name: "Network",
            value: rng.gen_range(10..100),
            max: 100,
            unit: "Mbps",
        },
        Metric {
            name: "Disk I/O",
            value: rng.gen_range(5..45),
            max: 100,
            unit: "MB/s",
        },
    ]
}

const GAUGE_WIDTH: usize = 20;
const SPARKS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

pub fn gauge(ratio: f64) -> String {
    let filled = ((ratio.clamp(0.0, 1.0) * GAUGE_WIDTH as f64).round() as usize).min(GAUGE_WIDTH);
    format!("{}{}", "█".repeat(filled), "░".repeat(GAUGE_WIDTH - filled))
}

fn load_level(percent: u32) -> &'static str {
    match percent {
        0..=29 => "low",
        30..=69 => "medium",
        _ => "high",
    }
}

/// 40 samples of CPU load in percent, drawn as a sparkline.
pub fn cpu_history(rng: &mut impl Rng) -> String {
    (0..40)
        .map(|_| {
            let value: u32 = rng.gen_range(5..75);
            SPARKS[(value as usize * SPARKS.len() / 100).min(SPARKS.len() - 1)]
        })
        .collect()
}

pub fn dashboard(rng: &mut impl Rng) -> Sequence {
    let metrics = sample_metrics(rng);
    let mut steps = heading("SYSTEM PERFORMANCE DASHBOARD");
    steps.push(ScriptedStep::Wait(REVEAL_MS));
    steps.push(ScriptedStep::EmitBlock(
        metrics
            .iter()
            .map(|m| {
                let percent = (m.ratio() * 100.0).round() as u32;
                Line::text(format!(
                    "  {:<10} [{}] {} {} ({})",
                    m.name,
                    gauge(m.ratio()),
                    m.value,
                    m.unit,
                    load_level(percent)
                ))
            })
            .collect(),
    ));
    steps.push(ScriptedStep::blank());
    steps.push(ScriptedStep::EmitLine(Line::heading("CPU Load History")));
    steps.push(ScriptedStep::line(format!("  {}", cpu_history(rng))));
    steps.push(ScriptedStep::Wait(REVEAL_MS));
    steps.extend([
        ScriptedStep::blank(),
        ScriptedStep::line("System Performance Summary:"),
        ScriptedStep::line("• System load: Normal"),
        ScriptedStep::line("• Uptime: 3 days, 7 hours"),
        ScriptedStep::line("• Active processes: 87"),
        ScriptedStep::blank(),
        back_button(),
    ]);
    Sequence::new(steps)
        .then(Completion::OdxxtReady)
        .holding_input()
}

/// Leaves the interface. With `replay`, the command is typed onto a fresh
/// prompt line and executed once the terminal is restored.
pub fn exit(replay: Option<&str>, replay_ms_per_char: Millis) -> Sequence {
    let mut steps = vec![
        ScriptedStep::Clear,
        ScriptedStep::line("EXITING ODXXT INTERFACE..."),
        ScriptedStep::Wait(1_000),
        ScriptedStep::EmitLine(Line::highlight("TERMINAL RESTORED")),
        ScriptedStep::blank(),
    ];
    match replay {
        Some(command) => {
            steps.push(ScriptedStep::type_command(command, replay_ms_per_char));
            steps.push(ScriptedStep::Wait(300));
            Sequence::new(steps)
                .then(Completion::Execute(command.to_string()))
                .holding_input()
        }
        None => Sequence::new(steps)
            .then(Completion::Prompt)
            .holding_input(),
    }
}
