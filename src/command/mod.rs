// src/command/mod.rs

//! Parsing of submitted command lines into the closed [`Command`] set.
//!
//! The parser only looks at text. Whether a command may run right now (for
//! example `snake` while a game is already up) is decided by the terminal.

use thiserror::Error;

use crate::term::action::Section;

pub mod content;
pub mod help;
pub mod scripts;

/// Every verb the terminal understands, in autocomplete order.
pub const VERBS: [&str; 22] = [
    "help",
    "whoami",
    "about",
    "projects",
    "tools",
    "clear",
    "exit",
    "skills",
    "contact",
    "github",
    "passwordgen",
    "ping",
    "traceroute",
    "hashgen",
    "destruct",
    "hack",
    "odxxt",
    "type",
    "sudo",
    "ascii",
    "snake",
    "hi",
];

/// Category flags of `help`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HelpFlags {
    pub all: bool,
    pub utilities: bool,
    pub fun: bool,
}

impl HelpFlags {
    /// Collects `-a`, `-u` and `-f` from `args`; anything else is ignored.
    pub fn from_args<'a>(args: impl IntoIterator<Item = &'a str>) -> Self {
        let mut flags = HelpFlags::default();
        for arg in args {
            match arg {
                "-a" => flags.all = true,
                "-u" => flags.utilities = true,
                "-f" => flags.fun = true,
                _ => {}
            }
        }
        flags
    }

    /// No flag given: show the summary view.
    pub fn is_summary(&self) -> bool {
        !(self.all || self.utilities || self.fun)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help(HelpFlags),
    Hi,
    Whoami,
    Navigate(Section),
    Clear,
    Exit,
    Skills,
    Contact,
    Github,
    Sudo,
    /// Initial panel text, possibly empty.
    Ascii(String),
    PasswordGen,
    /// `None` types the default sample text.
    Type(Option<String>),
    Ping(String),
    Traceroute(String),
    HashGen(String),
    Snake,
    Hack,
    Destruct,
    Odxxt,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("zsh: command not found: {command}")]
    NotFound { command: String },
    #[error("{usage}")]
    MissingArgument { verb: &'static str, usage: &'static str },
}

pub const PING_USAGE: &str = "Usage: ping <IP or domain>";
pub const TRACEROUTE_USAGE: &str = "Usage: traceroute <domain>";
pub const HASHGEN_USAGE: &str = "Usage: hashgen \"<string>\"";

fn required_first(args: &[&str], verb: &'static str, usage: &'static str) -> Result<String, CommandError> {
    args.first()
        .map(|a| a.to_string())
        .ok_or(CommandError::MissingArgument { verb, usage })
}

/// Parses a trimmed command line. The verb is matched case-insensitively;
/// arguments keep their case. Free-text arguments are everything after the
/// first space, verbatim, quotes and repeated spaces included.
pub fn parse(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    let mut tokens = line.split_whitespace();
    let verb = tokens.next().unwrap_or_default().to_lowercase();
    let args: Vec<&str> = tokens.collect();
    let raw_rest = line.split_once(' ').map(|(_, rest)| rest);
    let rest = raw_rest.unwrap_or_default().to_string();

    let command = match verb.as_str() {
        "help" => Command::Help(HelpFlags::from_args(args.iter().copied())),
        "hi" => Command::Hi,
        "whoami" => Command::Whoami,
        "about" => Command::Navigate(Section::About),
        "tools" => Command::Navigate(Section::Tools),
        "projects" => Command::Navigate(Section::Projects),
        "clear" => Command::Clear,
        "exit" => Command::Exit,
        "skills" => Command::Skills,
        "contact" => Command::Contact,
        "github" => Command::Github,
        "sudo" => Command::Sudo,
        "ascii" => Command::Ascii(rest),
        "passwordgen" => Command::PasswordGen,
        "type" => Command::Type(Some(rest).filter(|t| !t.is_empty())),
        "ping" => Command::Ping(required_first(&args, "ping", PING_USAGE)?),
        "traceroute" => Command::Traceroute(required_first(&args, "traceroute", TRACEROUTE_USAGE)?),
        "hashgen" => match raw_rest.filter(|input| !input.is_empty()) {
            Some(input) => Command::HashGen(input.to_string()),
            None => {
                return Err(CommandError::MissingArgument {
                    verb: "hashgen",
                    usage: HASHGEN_USAGE,
                })
            }
        },
        "snake" => Command::Snake,
        "hack" => Command::Hack,
        "destruct" => Command::Destruct,
        "odxxt" => Command::Odxxt,
        _ => {
            return Err(CommandError::NotFound {
                command: line.to_string(),
            })
        }
    };
    Ok(command)
}

/// Verbs starting with the lowercased `prefix`, in [`VERBS`] order.
pub fn complete(prefix: &str) -> Vec<&'static str> {
    let prefix = prefix.to_lowercase();
    VERBS
        .iter()
        .copied()
        .filter(|verb| verb.starts_with(&prefix))
        .collect()
}
