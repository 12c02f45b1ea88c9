// src/term/emulator/dispatch.rs

//! Submission and execution of command lines.

use super::{game, panels, Terminal};
use crate::command::{self, content, help, scripts, Command, CommandError};
use crate::term::{action::TerminalAction, output::Line};
use log::{debug, warn};
use rand::Rng;

/// A line the user pressed Enter on. Non-empty lines are recorded and
/// echoed before they run.
pub(super) fn submit(term: &mut Terminal, raw: &str) {
    let line = raw.trim();
    if line.is_empty() {
        term.output.print_prompt();
        return;
    }
    term.history.push(line);
    term.output.push(Line::echo(line));
    execute(term, line);
}

/// Runs `line` as a command. Whatever sequence was still running is
/// superseded.
pub(super) fn execute(term: &mut Terminal, line: &str) {
    if term.sequence.cancel(&mut term.sched) {
        debug!("Terminal: '{}' superseded the running sequence", line);
    }
    match command::parse(line) {
        Ok(cmd) => {
            if run(term, cmd) {
                term.output.print_prompt();
            }
        }
        Err(CommandError::NotFound { command }) => {
            debug!("Terminal: unknown command '{}'", command);
            term.output.extend(content::not_found(&command));
            term.output.print_prompt();
        }
        Err(err @ CommandError::MissingArgument { .. }) => {
            term.output.push_text(err.to_string());
            term.output.print_prompt();
        }
    }
}

/// Returns true if the command finished synchronously and the prompt
/// should come back right away.
fn run(term: &mut Terminal, cmd: Command) -> bool {
    let type_ms = term.config.behavior.type_ms_per_char;
    match cmd {
        Command::Help(flags) => {
            term.output.extend(help::render(flags));
            true
        }
        Command::Hi => {
            let greeting = content::GREETINGS[term.rng.gen_range(0..content::GREETINGS.len())];
            term.output.push_text(greeting);
            true
        }
        Command::Whoami => {
            term.run_sequence(scripts::whoami());
            false
        }
        Command::Navigate(section) => {
            term.output.push_text(content::navigating(section));
            term.actions.push(TerminalAction::ScrollToSection(section));
            term.indicator.page_left_top(&mut term.sched);
            true
        }
        Command::Clear => {
            term.output.clear();
            true
        }
        Command::Exit => {
            term.output.extend(content::session_terminated());
            term.end_session(false);
            false
        }
        Command::Skills => {
            term.output.extend(content::skills());
            true
        }
        Command::Contact => {
            term.output.extend(content::contact());
            true
        }
        Command::Github => {
            term.output.push_text(content::GITHUB_OPENING);
            term.actions
                .push(TerminalAction::OpenLink(content::GITHUB_URL.to_string()));
            true
        }
        Command::Sudo => {
            term.output.extend(content::sudo());
            true
        }
        Command::Ascii(text) => panels::open_ascii(term, &text),
        Command::PasswordGen => {
            let sequence = scripts::passwordgen(&mut term.rng, type_ms);
            term.run_sequence(sequence);
            false
        }
        Command::Type(text) => {
            let text = text.as_deref().unwrap_or(content::TYPE_SAMPLE);
            term.run_sequence(scripts::type_out(text, type_ms));
            false
        }
        Command::Ping(target) => {
            let sequence = scripts::ping(&target, &term.config.network, &mut term.rng);
            term.run_sequence(sequence);
            false
        }
        Command::Traceroute(target) => {
            let sequence = scripts::traceroute(&target, &term.config.network, &mut term.rng);
            term.run_sequence(sequence);
            false
        }
        Command::HashGen(input) => match term.hasher.hex_digest(&input) {
            Ok(hex) => {
                let sequence = scripts::hashgen(term.hasher.name(), &hex, type_ms);
                term.run_sequence(sequence);
                false
            }
            Err(err) => {
                warn!("Terminal: hashgen failed: {}", err);
                term.output
                    .push_text(format!("{}: {}", content::HASH_FAILED, err));
                true
            }
        },
        Command::Snake => game::start(term),
        Command::Hack => {
            term.run_sequence(scripts::hack());
            false
        }
        Command::Destruct => {
            term.run_sequence(scripts::destruct());
            false
        }
        Command::Odxxt => panels::open_odxxt(term),
    }
}
