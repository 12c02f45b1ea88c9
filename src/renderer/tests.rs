// src/renderer/tests.rs

use super::*;
use crate::ascii::FontId;
use crate::odxxt::ThemeId;
use crate::term::output::Line;
use crate::term::session::{ModeKind, Terminated};
use test_log::test;

const PROMPT: &str = "abdulaziz@odxxt ~ % ";

fn snapshot(lines: Vec<Line>) -> TerminalSnapshot {
    TerminalSnapshot {
        lines,
        prompt: PROMPT.to_string(),
        input: Some(String::new()),
        panel: None,
        idle_hint: None,
        indicator: ">_ SCROLL".to_string(),
        theme: ThemeId::Default,
        mode: ModeKind::Normal,
        terminated: None,
        restore_hint: None,
        revision: 1,
    }
}

/// Text drawn on each row, runs concatenated in order.
fn screen(commands: &[RenderCommand], rows: usize) -> Vec<String> {
    let mut out = vec![String::new(); rows];
    for command in commands {
        if let RenderCommand::DrawTextRun { y, text, .. } = command {
            out[*y].push_str(text);
        }
    }
    out
}

fn runs_containing<'a>(commands: &'a [RenderCommand], needle: &str) -> Vec<&'a RenderCommand> {
    commands
        .iter()
        .filter(|c| matches!(c, RenderCommand::DrawTextRun { text, .. } if text.contains(needle)))
        .collect()
}

#[test]
fn frame_is_bracketed_by_clear_and_present() {
    let commands = Renderer::new().draw(&snapshot(vec![Line::text("hello")]), 40, 10);
    assert_eq!(
        commands[1],
        RenderCommand::ClearAll {
            bg: ThemeId::Default.theme().background_color()
        }
    );
    assert_eq!(commands.last(), Some(&RenderCommand::PresentFrame));
}

#[test]
fn zero_sized_area_draws_nothing() {
    assert!(Renderer::new()
        .draw(&snapshot(vec![Line::text("hello")]), 0, 10)
        .is_empty());
}

#[test]
fn echo_lines_follow_the_prompt_and_prompt_markers_are_skipped() {
    let mut snap = snapshot(vec![Line::echo("help"), Line::text("Available commands:")]);
    snap.input = Some("ab".to_string());
    let commands = Renderer::new().draw(&snap, 60, 10);
    let rows = screen(&commands, 10);
    assert_eq!(rows[0], format!("{}help", PROMPT));
    assert_eq!(rows[1], "Available commands:");
    assert_eq!(rows[2], format!("{}ab", PROMPT));
    assert_eq!(rows[9], ">_ SCROLL");
}

#[test]
fn caret_sits_after_the_live_input() {
    let mut snap = snapshot(vec![Line::text("one")]);
    snap.input = Some("ab".to_string());
    let commands = Renderer::new().draw(&snap, 60, 10);
    assert!(commands.contains(&RenderCommand::SetCursorPosition {
        x: PROMPT.len() + 2,
        y: 1
    }));
    assert!(commands.contains(&RenderCommand::SetCursorVisibility { visible: true }));
}

#[test]
fn caret_is_hidden_while_input_is_disabled() {
    let mut snap = snapshot(vec![Line::text("pinging...")]);
    snap.input = None;
    let commands = Renderer::new().draw(&snap, 60, 10);
    assert!(!commands.contains(&RenderCommand::SetCursorVisibility { visible: true }));
    assert!(!commands
        .iter()
        .any(|c| matches!(c, RenderCommand::SetCursorPosition { .. })));
}

#[test]
fn long_logs_show_their_tail() {
    let lines = (0..30).map(|i| Line::text(format!("line {}", i))).collect();
    let commands = Renderer::new().draw(&snapshot(lines), 40, 6);
    let rows = screen(&commands, 6);
    // Five body rows: four log lines and the input line.
    assert_eq!(rows[0], "line 26");
    assert_eq!(rows[3], "line 29");
    assert_eq!(rows[4], PROMPT.to_string());
}

#[test]
fn runs_are_clipped_to_the_width() {
    let commands = Renderer::new().draw(&snapshot(vec![Line::text("x".repeat(100))]), 10, 4);
    let rows = screen(&commands, 4);
    assert_eq!(rows[0], "x".repeat(10));
}

#[test]
fn multi_line_art_is_split_into_rows() {
    let commands = Renderer::new().draw(&snapshot(vec![Line::art("ab\ncd")]), 20, 6);
    let rows = screen(&commands, 6);
    assert_eq!(rows[0], "ab");
    assert_eq!(rows[1], "cd");
}

#[test]
fn highlights_use_the_accent_colour_in_bold() {
    let commands = Renderer::new().draw(&snapshot(vec![Line::highlight("WARNING")]), 40, 6);
    let runs = runs_containing(&commands, "WARNING");
    assert_eq!(runs.len(), 1);
    match runs[0] {
        RenderCommand::DrawTextRun { fg, flags, .. } => {
            assert_eq!(*fg, ThemeId::Default.theme().accent_color());
            assert!(flags.contains(AttrFlags::BOLD));
        }
        other => panic!("unexpected command {:?}", other),
    }
}

#[test]
fn dimmed_session_dims_every_run() {
    let mut snap = snapshot(vec![Line::text("gone")]);
    snap.input = None;
    snap.terminated = Some(Terminated { dimmed: true });
    snap.restore_hint = Some("Press Enter or R to restore the session.");
    let commands = Renderer::new().draw(&snap, 60, 10);
    let rows = screen(&commands, 10);
    assert!(rows.iter().any(|r| r.contains("restore the session")));
    for command in &commands {
        if let RenderCommand::DrawTextRun { flags, .. } = command {
            assert!(flags.contains(AttrFlags::DIM));
        }
    }
}

#[test]
fn theme_colours_follow_the_snapshot() {
    let mut snap = snapshot(vec![Line::text("green")]);
    snap.theme = ThemeId::Matrix;
    let commands = Renderer::new().draw(&snap, 40, 6);
    assert_eq!(
        commands[1],
        RenderCommand::ClearAll {
            bg: ThemeId::Matrix.theme().background_color()
        }
    );
}

#[test]
fn snake_panel_replaces_the_log() {
    let mut snap = snapshot(vec![Line::text("behind the board")]);
    snap.input = None;
    snap.mode = ModeKind::GameActive;
    snap.panel = Some(PanelView::Snake(SnakeView {
        rows: vec!["@o  ".to_string(), "   *".to_string()],
        score: 20,
        game_over: None,
    }));
    let commands = Renderer::new().draw(&snap, 40, 10);
    let rows = screen(&commands, 10);
    assert_eq!(rows[0], "SNAKE  Score: 20");
    assert_eq!(rows[1], "+----+");
    assert_eq!(rows[2], "|@o  |");
    assert_eq!(rows[3], "|   *|");
    assert_eq!(rows[4], "+----+");
    assert!(!rows.iter().any(|r| r.contains("behind the board")));
}

#[test]
fn snake_game_over_message_is_shown() {
    let mut snap = snapshot(Vec::new());
    snap.panel = Some(PanelView::Snake(SnakeView {
        rows: vec!["    ".to_string()],
        score: 0,
        game_over: Some("Game Over - Wall Collision!"),
    }));
    let rows = screen(&Renderer::new().draw(&snap, 40, 10), 10);
    assert!(rows.iter().any(|r| r == "Game Over - Wall Collision!"));
}

#[test]
fn ascii_panel_marks_the_selected_font() {
    let mut snap = snapshot(Vec::new());
    snap.mode = ModeKind::AsciiPanelActive;
    snap.panel = Some(PanelView::Ascii(AsciiView {
        title: "ASCII ART GENERATOR",
        text: "hi".to_string(),
        fonts: FontId::ALL.iter().map(|f| f.id()).collect(),
        selected: FontId::Bold,
        preview: "#  #\n####".to_string(),
        truncation_note: None,
        copy_enabled: true,
    }));
    let commands = Renderer::new().draw(&snap, 120, 20);
    let rows = screen(&commands, 20);
    assert_eq!(rows[0], "ASCII ART GENERATOR");
    assert_eq!(rows[1], "Text: hi");
    assert!(rows.iter().any(|r| r == "#  #"));
    assert!(rows.iter().any(|r| r.contains(ASCII_COPY_HINT)));

    let selected = runs_containing(&commands, FontId::Bold.id());
    assert!(selected.iter().any(
        |c| matches!(c, RenderCommand::DrawTextRun { flags, .. } if flags.contains(AttrFlags::REVERSE))
    ));
}
