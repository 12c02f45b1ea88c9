// src/term/emulator/panels.rs

//! The ascii panel and the odxxt interface.

use super::Terminal;
use crate::ascii::{self, AsciiPanel, FontId, PanelResponse};
use crate::keys::KeyInput;
use crate::odxxt::{
    scripts as odxxt_scripts, OdxxtInterface, OdxxtTransition, OdxxtView, LOG_ENTRIES,
};
use crate::sequence::Sequence;
use crate::term::{
    action::TerminalAction,
    session::{Mode, ModeKind},
};
use chrono::Local;
use log::{debug, info, warn};

/// Opens the ascii panel. Returns true if it was refused.
pub(super) fn open_ascii(term: &mut Terminal, text: &str) -> bool {
    let font = FontId::from_id(&term.config.ascii.default_font);
    let panel = AsciiPanel::open(text, term.config.ascii.max_text_len, font);
    let truncated = panel.was_truncated();
    match term.session.enter(Mode::AsciiPanelActive(panel)) {
        Ok(()) => {
            term.idle.suspend(&mut term.sched);
            if truncated {
                term.output.push_text(ascii::TRUNCATION_NOTE);
            }
            false
        }
        Err(err) => {
            warn!("Terminal: cannot open the ascii panel: {}", err);
            term.output.push_text(err.to_string());
            true
        }
    }
}

pub(super) fn on_ascii_key(term: &mut Terminal, key: &KeyInput) {
    let Mode::AsciiPanelActive(panel) = term.session.mode_mut() else {
        return;
    };
    match panel.handle_key(key) {
        PanelResponse::Updated | PanelResponse::Ignored => {}
        PanelResponse::Generated => {
            term.output.push_text(ascii::GENERATED_MESSAGE);
        }
        PanelResponse::Copy(art) => {
            term.actions.push(TerminalAction::CopyToClipboard(art));
            term.output.push_text(ascii::COPIED_MESSAGE);
        }
        PanelResponse::Exit => {
            term.session.leave();
            debug!("Terminal: ascii panel closed");
            term.output.print_prompt();
            term.idle.restart(&mut term.sched);
        }
    }
}

/// Enters the odxxt interface. Returns true if it was refused.
pub(super) fn open_odxxt(term: &mut Terminal) -> bool {
    match term
        .session
        .enter(Mode::SubInterfaceActive(OdxxtInterface::new()))
    {
        Ok(()) => {
            info!("Terminal: entering the odxxt interface");
            term.idle.suspend(&mut term.sched);
            let boot = odxxt_scripts::boot(term.theme, &mut term.rng);
            term.run_sequence(boot);
            false
        }
        Err(err) => {
            warn!("Terminal: cannot enter odxxt: {}", err);
            term.output.push_text(err.to_string());
            true
        }
    }
}

pub(super) fn on_odxxt_key(term: &mut Terminal, key: &KeyInput) {
    let Mode::SubInterfaceActive(ui) = term.session.mode_mut() else {
        return;
    };
    let transition = ui.on_key(key);
    let next: Sequence = match transition {
        OdxxtTransition::Ignore => return,
        OdxxtTransition::Open(view) => {
            ui.enter(view);
            match view {
                OdxxtView::MainMenu => odxxt_scripts::main_menu(term.theme),
                OdxxtView::ThemeGallery => odxxt_scripts::theme_gallery(),
                OdxxtView::CommandLogs => {
                    let commands = term.history.recent(LOG_ENTRIES);
                    let stamps =
                        odxxt_scripts::log_timestamps(Local::now(), commands.len(), &mut term.rng);
                    let sequence = odxxt_scripts::command_logs(&commands, &stamps);
                    ui.set_listed(commands);
                    sequence
                }
                OdxxtView::PerfDashboard => odxxt_scripts::dashboard(&mut term.rng),
            }
        }
        OdxxtTransition::Back => {
            ui.enter(OdxxtView::MainMenu);
            odxxt_scripts::main_menu(term.theme)
        }
        OdxxtTransition::ApplyTheme(theme) => {
            // Hold keys until the confirmation has been shown.
            ui.enter(OdxxtView::ThemeGallery);
            info!("Terminal: theme -> {:?}", theme);
            term.theme = theme;
            term.actions.push(TerminalAction::ApplyTheme(theme));
            odxxt_scripts::apply_theme(theme)
        }
        OdxxtTransition::Replay(index) => match ui.listed(index).map(str::to_string) {
            Some(command) => {
                exit_odxxt(term, Some(command));
                return;
            }
            None => return,
        },
        OdxxtTransition::Exit => {
            exit_odxxt(term, None);
            return;
        }
    };
    term.run_sequence(next);
}

/// Leaves the interface, optionally replaying a logged command once the
/// terminal is back.
fn exit_odxxt(term: &mut Terminal, replay: Option<String>) {
    if term.session.kind() != ModeKind::SubInterfaceActive {
        return;
    }
    term.session.leave();
    info!("Terminal: leaving the odxxt interface (replay: {:?})", replay);
    let sequence = odxxt_scripts::exit(
        replay.as_deref(),
        term.config.behavior.replay_type_ms_per_char,
    );
    term.run_sequence(sequence);
    term.idle.restart(&mut term.sched);
}
