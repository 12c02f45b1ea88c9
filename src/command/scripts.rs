// src/command/scripts.rs

//! Scripted sequences behind the animated commands.
//!
//! Every builder returns plain data. Random values (latencies, passwords)
//! are drawn while building, so a sequence replays identically once built.

use rand::Rng;

use super::content::{HELP_HINT, NAME_BANNER, TITLE, WELCOME};
use crate::config::{BehaviorConfig, NetworkConfig};
use crate::sequence::{Completion, ScriptedStep, Sequence};
use crate::term::output::Line;
use crate::timer::Millis;

const WHOAMI_LOADING: [&str; 4] = [
    "Loading profile...",
    "Retrieving information...",
    "Authenticating identity...",
    "Profile found.",
];
const WHOAMI_STEP_MS: Millis = 400;

const HACK_LINES: [&str; 9] = [
    "Bypassing firewall...",
    "Accessing mainframe...",
    "Decrypting secure connections...",
    "Bypassing RSA encryption...",
    "Accessing classified files...",
    "Downloading sensitive data...",
    "Covering tracks...",
    "Erasing logs...",
    "Establishing backdoor...",
];
const HACK_STEP_MS: Millis = 300;

pub const COUNTDOWN_FROM: u32 = 10;
const COUNTDOWN_STEP_MS: Millis = 1_000;

const PASSWORD_CHARS: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*()_+";
pub const PASSWORD_LEN: usize = 16;

/// Greets, types `whoami` onto a prompt line and hands it over for execution.
pub fn startup(behavior: &BehaviorConfig) -> Sequence {
    Sequence::new(vec![
        ScriptedStep::Clear,
        ScriptedStep::EmitLine(Line::highlight(WELCOME)),
        ScriptedStep::type_command("whoami", behavior.startup_type_ms_per_char),
        ScriptedStep::Wait(800),
    ])
    .then(Completion::Execute("whoami".to_string()))
    .holding_input()
}

/// Loading lines, name banner, title and the help hint.
pub fn whoami() -> Sequence {
    let mut steps = vec![ScriptedStep::Clear];
    for line in WHOAMI_LOADING {
        steps.push(ScriptedStep::Wait(WHOAMI_STEP_MS));
        steps.push(ScriptedStep::line(line));
    }
    steps.extend([
        // The loading interval ticks once more before it notices it is done.
        ScriptedStep::Wait(WHOAMI_STEP_MS),
        ScriptedStep::Wait(500),
        ScriptedStep::blank(),
        ScriptedStep::EmitBlock(NAME_BANNER.iter().map(|l| Line::art(*l)).collect()),
        ScriptedStep::Wait(500),
        ScriptedStep::EmitLine(Line::highlight(TITLE)),
        ScriptedStep::Wait(150),
        ScriptedStep::blank(),
        ScriptedStep::Wait(300),
        ScriptedStep::blank(),
        ScriptedStep::line(HELP_HINT),
    ]);
    Sequence::new(steps).then(Completion::Prompt)
}

pub fn type_out(text: &str, ms_per_char: Millis) -> Sequence {
    Sequence::new(vec![ScriptedStep::type_text(text, ms_per_char)]).then(Completion::Prompt)
}

pub fn generate_password(rng: &mut impl Rng) -> String {
    (0..PASSWORD_LEN)
        .map(|_| PASSWORD_CHARS[rng.gen_range(0..PASSWORD_CHARS.len())] as char)
        .collect()
}

pub fn passwordgen(rng: &mut impl Rng, ms_per_char: Millis) -> Sequence {
    type_out(
        &format!("Generated Password: {}", generate_password(rng)),
        ms_per_char,
    )
}

pub fn hashgen(algorithm: &str, hex: &str, ms_per_char: Millis) -> Sequence {
    type_out(&format!("{}: {}", algorithm, hex), ms_per_char)
}

fn latency(network: &NetworkConfig, rng: &mut impl Rng) -> u32 {
    let low = network.min_latency_ms.min(network.max_latency_ms);
    rng.gen_range(low..=network.max_latency_ms)
}

/// Simulated ping: one reply per tick, then the statistics.
pub fn ping(target: &str, network: &NetworkConfig, rng: &mut impl Rng) -> Sequence {
    let interval = network.reply_interval_ms;
    let mut steps = vec![ScriptedStep::line(format!("Pinging {}...", target))];
    for _ in 0..network.ping_count {
        steps.push(ScriptedStep::Wait(interval));
        steps.push(ScriptedStep::line(format!(
            "Reply from {}: bytes=32 time={}ms TTL=64",
            target,
            latency(network, rng)
        )));
    }
    steps.extend([
        ScriptedStep::Wait(interval),
        ScriptedStep::blank(),
        ScriptedStep::line(format!("Ping statistics for {}:", target)),
        ScriptedStep::line(format!(
            "    Packets: Sent = {count}, Received = {count}, Lost = 0",
            count = network.ping_count
        )),
    ]);
    Sequence::new(steps)
        .then(Completion::Prompt)
        .holding_input()
}

/// Simulated traceroute over the configured hops.
pub fn traceroute(target: &str, network: &NetworkConfig, rng: &mut impl Rng) -> Sequence {
    let interval = network.reply_interval_ms;
    let mut steps = vec![ScriptedStep::line(format!("Tracing route to {}...", target))];
    for (i, hop) in network.traceroute_hops.iter().enumerate() {
        steps.push(ScriptedStep::Wait(interval));
        steps.push(ScriptedStep::line(format!(
            "{} {}  {} ms",
            i + 1,
            hop,
            latency(network, rng)
        )));
    }
    steps.push(ScriptedStep::Wait(interval));
    steps.push(ScriptedStep::line("Trace complete."));
    Sequence::new(steps)
        .then(Completion::Prompt)
        .holding_input()
}

pub fn hack() -> Sequence {
    let mut steps = vec![ScriptedStep::line("Initiating hack sequence...")];
    for line in HACK_LINES {
        steps.push(ScriptedStep::Wait(HACK_STEP_MS));
        steps.push(ScriptedStep::line(line));
    }
    steps.extend([
        ScriptedStep::Wait(HACK_STEP_MS),
        ScriptedStep::blank(),
        ScriptedStep::EmitLine(Line::highlight("ACCESS DENIED: Security protocols engaged")),
        ScriptedStep::line("IP logged. Countermeasures activated."),
        ScriptedStep::blank(),
        ScriptedStep::line("Just kidding! That would be illegal. ;)"),
    ]);
    Sequence::new(steps)
        .then(Completion::Prompt)
        .holding_input()
}

/// Countdown from ten, then the session ends.
pub fn destruct() -> Sequence {
    let mut steps = vec![
        ScriptedStep::Clear,
        ScriptedStep::EmitLine(Line::highlight("WARNING: Self-destruct sequence initiated!")),
        ScriptedStep::EmitLine(Line::highlight("! This cannot be undone !")),
    ];
    for n in (0..=COUNTDOWN_FROM).rev() {
        steps.push(ScriptedStep::Wait(COUNTDOWN_STEP_MS));
        steps.push(ScriptedStep::line(format!("Detonating in {}...", n)));
    }
    steps.extend([
        ScriptedStep::Clear,
        ScriptedStep::EmitLine(Line::highlight("SYSTEM DESTROYED")),
    ]);
    Sequence::new(steps)
        .then(Completion::Terminate)
        .holding_input()
}
