// src/term/emulator/input_handler.rs

use super::{dispatch, game, panels, Terminal};
use crate::command;
use crate::keys::{KeyInput, KeySymbol};
use crate::term::{
    action::{Section, TerminalAction, UserInputAction},
    output::Line,
    session::ModeKind,
};
use log::{debug, trace};

pub(super) fn process_user_input_action(term: &mut Terminal, action: UserInputAction) {
    term.note_activity();

    match action {
        UserInputAction::FocusGained => term.session.set_focused(true),
        UserInputAction::FocusLost => term.session.set_focused(false),
        UserInputAction::KeyInput(key) => route_key(term, key),
    }
}

fn route_key(term: &mut Terminal, key: KeyInput) {
    if term.session.is_terminated() {
        let restore = key.symbol == KeySymbol::Enter || matches!(key.printable(), Some('r' | 'R'));
        if restore {
            debug!("Terminal: restore requested");
            term.reset();
        }
        return;
    }

    match term.session.kind() {
        ModeKind::Normal => {
            if term.input_enabled() {
                edit_line(term, key);
            } else {
                trace!("Terminal: input held by a running sequence, dropping {:?}", key.symbol);
            }
        }
        ModeKind::GameActive => game::on_key(term, &key),
        ModeKind::AsciiPanelActive => panels::on_ascii_key(term, &key),
        ModeKind::SubInterfaceActive => panels::on_odxxt_key(term, &key),
    }
}

fn edit_line(term: &mut Terminal, key: KeyInput) {
    if key.is_ctrl('c') {
        let abandoned = std::mem::take(&mut term.input);
        term.output.push(Line::echo(format!("{}^C", abandoned)));
        term.output.print_prompt();
        return;
    }
    if key.is_ctrl('l') {
        term.input.clear();
        dispatch::execute(term, "clear");
        return;
    }
    if let Some(c) = key.printable() {
        term.input.push(c);
        return;
    }

    match key.symbol {
        KeySymbol::Enter => {
            let line = std::mem::take(&mut term.input);
            dispatch::submit(term, &line);
        }
        KeySymbol::Backspace => {
            term.input.pop();
        }
        KeySymbol::Up => {
            if let Some(text) = term.history.older() {
                term.input = text.to_string();
            }
        }
        KeySymbol::Down => {
            if let Some(text) = term.history.newer() {
                term.input = text.to_string();
            }
        }
        KeySymbol::Tab => autocomplete(term),
        KeySymbol::Home | KeySymbol::PageUp if term.input.is_empty() => {
            term.actions.push(TerminalAction::ScrollToSection(Section::Top));
            term.indicator.page_at_top(&mut term.sched);
        }
        _ => {}
    }
}

fn autocomplete(term: &mut Terminal) {
    let prefix = term.input.trim().to_string();
    if prefix.is_empty() {
        return;
    }
    match command::complete(&prefix).as_slice() {
        [] => trace!("Terminal: no completion for '{}'", prefix),
        [only] => term.input = only.to_string(),
        several => {
            term.output.push(Line::echo(term.input.clone()));
            term.output.push_text(several.join("  "));
            term.output.print_prompt();
        }
    }
}
