// src/sequence/mod.rs

//! The exclusive scripted-sequence engine.
//!
//! A [`Sequence`] is plain data: an ordered list of [`ScriptedStep`]s and an
//! optional [`Completion`]. The [`SequenceEngine`] consumes the steps one at a
//! time, emitting instantaneous steps immediately and parking on a single
//! `SequenceStep` timer for typing and waits. Only one sequence runs at a
//! time; starting another cancels the pending timer of the previous one, so
//! output from two sequences never interleaves.

use std::collections::VecDeque;

use log::{debug, trace};

use crate::term::output::{Line, LineId, LineKind, OutputLog};
use crate::timer::{Millis, Scheduler, TimerEvent, TimerId};

pub mod morph;

pub use morph::TextMorph;

/// One unit of a scripted sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptedStep {
    /// Appends a new line of `kind` and reveals `text` one character per
    /// `ms_per_char`.
    TypeText {
        kind: LineKind,
        text: String,
        ms_per_char: Millis,
    },
    /// Pure delay.
    Wait(Millis),
    EmitLine(Line),
    EmitBlock(Vec<Line>),
    /// Empties the output log.
    Clear,
}

impl ScriptedStep {
    pub fn type_text(text: impl Into<String>, ms_per_char: Millis) -> Self {
        ScriptedStep::TypeText {
            kind: LineKind::Text,
            text: text.into(),
            ms_per_char,
        }
    }

    /// Types a command after the prompt, as if the user entered it.
    pub fn type_command(command: impl Into<String>, ms_per_char: Millis) -> Self {
        ScriptedStep::TypeText {
            kind: LineKind::Echo,
            text: command.into(),
            ms_per_char,
        }
    }

    pub fn line(text: impl Into<String>) -> Self {
        ScriptedStep::EmitLine(Line::text(text))
    }

    pub fn blank() -> Self {
        ScriptedStep::EmitLine(Line::blank())
    }
}

/// What the owner of the engine should do once a sequence has run out of
/// steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// Print the next prompt and hand the input back.
    Prompt,
    /// End the session (self-destruct).
    Terminate,
    /// Run a command without echoing it again.
    Execute(String),
    /// The odxxt interface finished drawing and may take keys.
    OdxxtReady,
}

/// An ordered list of steps plus an optional completion.
#[derive(Debug, Clone, Default)]
pub struct Sequence {
    pub steps: Vec<ScriptedStep>,
    pub on_complete: Option<Completion>,
    /// Keep the raw input line hidden while the sequence runs.
    pub holds_input: bool,
}

impl Sequence {
    pub fn new(steps: Vec<ScriptedStep>) -> Self {
        Sequence {
            steps,
            on_complete: None,
            holds_input: false,
        }
    }

    pub fn then(mut self, completion: Completion) -> Self {
        self.on_complete = Some(completion);
        self
    }

    pub fn holding_input(mut self) -> Self {
        self.holds_input = true;
        self
    }

    /// Total virtual time the sequence needs to run to completion.
    pub fn duration(&self) -> Millis {
        self.steps
            .iter()
            .map(|step| match step {
                ScriptedStep::TypeText {
                    text, ms_per_char, ..
                } => text.chars().count() as Millis * ms_per_char,
                ScriptedStep::Wait(ms) => *ms,
                _ => 0,
            })
            .sum()
    }
}

#[derive(Debug)]
struct Typing {
    line: LineId,
    chars: Vec<char>,
    revealed: usize,
    ms_per_char: Millis,
}

#[derive(Debug)]
struct Running {
    steps: VecDeque<ScriptedStep>,
    typing: Option<Typing>,
    on_complete: Option<Completion>,
    holds_input: bool,
}

/// What happened after feeding the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progress {
    /// Still parked on a timer.
    Pending,
    /// Ran out of steps; carries the sequence's completion.
    Finished(Option<Completion>),
    /// Nothing was running.
    Idle,
}

#[derive(Debug, Default)]
pub struct SequenceEngine {
    active: Option<Running>,
    timer: Option<TimerId>,
}

impl SequenceEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts `sequence`, superseding whatever was running. Instantaneous
    /// leading steps are applied before this returns.
    pub fn start(
        &mut self,
        sequence: Sequence,
        sched: &mut Scheduler,
        out: &mut OutputLog,
    ) -> Progress {
        if self.cancel(sched) {
            debug!("SequenceEngine: superseding the running sequence");
        }
        trace!(
            "SequenceEngine: starting {} steps, {} ms",
            sequence.steps.len(),
            sequence.duration()
        );
        self.active = Some(Running {
            steps: sequence.steps.into(),
            typing: None,
            on_complete: sequence.on_complete,
            holds_input: sequence.holds_input,
        });
        self.pump(sched, out)
    }

    /// Handles a fired `SequenceStep` timer.
    pub fn on_timer(&mut self, id: TimerId, sched: &mut Scheduler, out: &mut OutputLog) -> Progress {
        if self.timer != Some(id) {
            trace!("SequenceEngine: ignoring stale timer {:?}", id);
            return if self.active.is_some() {
                Progress::Pending
            } else {
                Progress::Idle
            };
        }
        self.timer = None;

        let Some(running) = self.active.as_mut() else {
            return Progress::Idle;
        };

        if let Some(typing) = running.typing.as_mut() {
            if let Some(&c) = typing.chars.get(typing.revealed) {
                // The line may have been cleared away by a Ctrl+L.
                out.append_char(typing.line, c);
                typing.revealed += 1;
            }
            if typing.revealed < typing.chars.len() {
                self.timer = Some(sched.schedule_once(typing.ms_per_char, TimerEvent::SequenceStep));
                return Progress::Pending;
            }
            running.typing = None;
        }
        self.pump(sched, out)
    }

    /// Applies steps until one needs to wait or the sequence is exhausted.
    fn pump(&mut self, sched: &mut Scheduler, out: &mut OutputLog) -> Progress {
        let Some(running) = self.active.as_mut() else {
            return Progress::Idle;
        };

        while let Some(step) = running.steps.pop_front() {
            match step {
                ScriptedStep::EmitLine(line) => {
                    out.push(line);
                }
                ScriptedStep::EmitBlock(lines) => out.extend(lines),
                ScriptedStep::Clear => out.clear(),
                ScriptedStep::Wait(ms) => {
                    self.timer = Some(sched.schedule_once(ms, TimerEvent::SequenceStep));
                    return Progress::Pending;
                }
                ScriptedStep::TypeText {
                    kind,
                    text,
                    ms_per_char,
                } => {
                    let line = out.push(Line {
                        kind,
                        text: String::new(),
                    });
                    let chars: Vec<char> = text.chars().collect();
                    if chars.is_empty() {
                        continue;
                    }
                    running.typing = Some(Typing {
                        line,
                        chars,
                        revealed: 0,
                        ms_per_char,
                    });
                    self.timer = Some(sched.schedule_once(ms_per_char, TimerEvent::SequenceStep));
                    return Progress::Pending;
                }
            }
        }

        let finished = self.active.take().and_then(|r| r.on_complete);
        trace!("SequenceEngine: finished with {:?}", finished);
        Progress::Finished(finished)
    }

    /// Tears down the running sequence, if any. Returns true if one was
    /// running.
    pub fn cancel(&mut self, sched: &mut Scheduler) -> bool {
        if let Some(id) = self.timer.take() {
            sched.cancel(id);
        }
        self.active.take().is_some()
    }

    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    /// True while the running sequence keeps the input line hidden.
    pub fn holds_input(&self) -> bool {
        self.active.as_ref().is_some_and(|r| r.holds_input)
    }

    pub fn pending_timer(&self) -> Option<TimerId> {
        self.timer
    }
}

#[cfg(test)]
mod tests;
