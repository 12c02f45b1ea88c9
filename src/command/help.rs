// src/command/help.rs

use super::HelpFlags;
use crate::term::output::Line;

type Entry = (&'static str, &'static str);

const KEY_COMMANDS: [Entry; 6] = [
    ("whoami", "Display my profile information."),
    ("about", "Navigate to the About Me section."),
    ("tools", "Navigate to the My Toolkit section."),
    ("projects", "Navigate to Projects & Experiences."),
    ("clear", "Clear the terminal screen."),
    ("exit", "Terminate the current session."),
];

const NAVIGATION: [Entry; 6] = [
    ("whoami", "Display my profile information."),
    ("about", "Navigate to the About Me section."),
    ("tools", "Navigate to the My Toolkit section."),
    ("projects", "Navigate to Projects & Experiences."),
    ("contact", "Display contact information."),
    ("github", "Open my GitHub profile in a new tab."),
];

const TERMINAL_CONTROL: [Entry; 5] = [
    ("clear", "Clear the terminal screen."),
    ("exit", "Terminate the current session."),
    ("help [-a|-u|-f]", "Show help messages (flags optional)."),
    ("↑ / ↓ Keys", "Navigate command history."),
    ("Tab Key", "Attempt command auto-completion."),
];

const UTILITIES: [Entry; 6] = [
    ("ping <target>", "Simulate pinging an IP or domain."),
    ("traceroute <domain>", "Simulate tracing the route to a domain."),
    ("hashgen <string>", "Generate the SHA-256 hash of a string."),
    ("passwordgen", "Generate a random secure password."),
    ("type <text>", "Simulate typing animation for the given text."),
    ("ascii [text]", "Open ASCII Art generator (optional text)."),
];

const FUN: [Entry; 5] = [
    ("odxxt", "Access the terminal customization interface."),
    ("snake", "Play the classic Snake game."),
    ("hack", "Run a simulated hacking sequence."),
    ("destruct", "Initiate a simulated self-destruct sequence."),
    ("sudo [...]", "Attempt to run a command with elevated privileges."),
];

const COMMAND_COLUMN: usize = 22;

fn entry((command, description): Entry) -> Line {
    Line::text(format!("  {:<width$}{}", command, description, width = COMMAND_COLUMN))
}

fn category(lines: &mut Vec<Line>, title: &str, entries: &[Entry]) {
    lines.push(Line::heading(title));
    lines.extend(entries.iter().copied().map(entry));
}

/// The categorized command listing for the given flags.
pub fn render(flags: HelpFlags) -> Vec<Line> {
    let mut lines = Vec::new();

    if flags.is_summary() {
        lines.push(Line::highlight("Available Commands Summary"));
        lines.push(Line::text(
            "Basic commands are listed below. Use flags for more details:",
        ));
        lines.push(entry(("help -a", "Show All Commands")));
        lines.push(entry(("help -u", "Show Utility Commands")));
        lines.push(entry(("help -f", "Show Fun Commands")));
        lines.push(Line::blank());
        category(&mut lines, "Key Commands:", &KEY_COMMANDS);
        lines.push(Line::blank());
        lines.push(Line::dim(
            "Use ↑ / ↓ for command history, Tab for autocomplete.",
        ));
        return lines;
    }

    // -u or -f on their own narrow the listing to those categories.
    let specific = !flags.all && (flags.utilities || flags.fun);
    if !specific {
        category(&mut lines, "Navigation & Information:", &NAVIGATION);
        category(&mut lines, "Terminal Control:", &TERMINAL_CONTROL);
    }
    if flags.all || flags.utilities {
        category(&mut lines, "Utilities:", &UTILITIES);
    }
    if flags.all || flags.fun {
        category(&mut lines, "Fun & Games:", &FUN);
    }
    lines
}
