// src/sequence/tests.rs

use super::*;
use crate::sequence::morph::GLITCH_CHARS;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Drives the engine until `now`, returning the completion if it finished.
fn run_until(
    engine: &mut SequenceEngine,
    sched: &mut Scheduler,
    out: &mut OutputLog,
    now: Millis,
) -> Option<Progress> {
    let mut last = None;
    while let Some((id, event)) = sched.pop_due(now) {
        assert_eq!(event, TimerEvent::SequenceStep);
        last = Some(engine.on_timer(id, sched, out));
    }
    sched.advance(now);
    last
}

#[test]
fn instantaneous_steps_apply_on_start() {
    let mut sched = Scheduler::new();
    let mut out = OutputLog::new();
    let mut engine = SequenceEngine::new();

    let seq = Sequence::new(vec![
        ScriptedStep::line("one"),
        ScriptedStep::EmitBlock(vec![Line::text("two"), Line::text("three")]),
    ])
    .then(Completion::Prompt);

    let progress = engine.start(seq, &mut sched, &mut out);
    assert_eq!(progress, Progress::Finished(Some(Completion::Prompt)));
    assert_eq!(out.texts(), vec!["one", "two", "three"]);
    assert!(!engine.is_running());
    assert_eq!(sched.pending_count(), 0);
}

#[test]
fn typing_reveals_one_character_per_tick() {
    let mut sched = Scheduler::new();
    let mut out = OutputLog::new();
    let mut engine = SequenceEngine::new();

    let seq = Sequence::new(vec![ScriptedStep::type_text("hello", 30)]).then(Completion::Prompt);
    assert_eq!(engine.start(seq, &mut sched, &mut out), Progress::Pending);
    assert_eq!(out.texts(), vec![""]);

    let mut seen = vec![out.texts()[0].clone()];
    for tick in 1..=5u64 {
        let progress = run_until(&mut engine, &mut sched, &mut out, tick * 30);
        seen.push(out.texts()[0].clone());
        if tick < 5 {
            assert_eq!(progress, Some(Progress::Pending));
        } else {
            assert_eq!(progress, Some(Progress::Finished(Some(Completion::Prompt))));
        }
    }
    assert_eq!(seen, vec!["", "h", "he", "hel", "hell", "hello"]);
    assert_eq!(out.len(), 1, "typing grows a single line");
}

#[test]
fn empty_text_finishes_without_a_timer() {
    let mut sched = Scheduler::new();
    let mut out = OutputLog::new();
    let mut engine = SequenceEngine::new();

    let seq = Sequence::new(vec![ScriptedStep::type_text("", 30)]).then(Completion::Prompt);
    assert_eq!(
        engine.start(seq, &mut sched, &mut out),
        Progress::Finished(Some(Completion::Prompt))
    );
    assert_eq!(sched.pending_count(), 0);
}

#[test]
fn waits_hold_the_next_step_back() {
    let mut sched = Scheduler::new();
    let mut out = OutputLog::new();
    let mut engine = SequenceEngine::new();

    let seq = Sequence::new(vec![
        ScriptedStep::line("a"),
        ScriptedStep::Wait(1_000),
        ScriptedStep::line("b"),
    ]);
    engine.start(seq, &mut sched, &mut out);
    run_until(&mut engine, &mut sched, &mut out, 999);
    assert_eq!(out.texts(), vec!["a"]);
    let progress = run_until(&mut engine, &mut sched, &mut out, 1_000);
    assert_eq!(progress, Some(Progress::Finished(None)));
    assert_eq!(out.texts(), vec!["a", "b"]);
}

#[test]
fn starting_a_new_sequence_cancels_the_pending_timer() {
    let mut sched = Scheduler::new();
    let mut out = OutputLog::new();
    let mut engine = SequenceEngine::new();

    let first = Sequence::new(vec![
        ScriptedStep::line("first"),
        ScriptedStep::Wait(500),
        ScriptedStep::line("first-late"),
    ])
    .then(Completion::Prompt);
    engine.start(first, &mut sched, &mut out);
    let stale = engine.pending_timer().unwrap();

    let second = Sequence::new(vec![ScriptedStep::Wait(100), ScriptedStep::line("second")]);
    engine.start(second, &mut sched, &mut out);

    assert!(!sched.is_pending(stale));
    assert_eq!(sched.pending_of(TimerEvent::SequenceStep), 1);

    run_until(&mut engine, &mut sched, &mut out, 10_000);
    assert_eq!(out.texts(), vec!["first", "second"]);
}

#[test]
fn stale_timer_ids_are_ignored() {
    let mut sched = Scheduler::new();
    let mut out = OutputLog::new();
    let mut engine = SequenceEngine::new();

    engine.start(
        Sequence::new(vec![ScriptedStep::Wait(50), ScriptedStep::line("x")]),
        &mut sched,
        &mut out,
    );
    let bogus = sched.schedule_once(10, TimerEvent::SequenceStep);
    let (id, _) = sched.pop_due(10).unwrap();
    assert_eq!(id, bogus);
    assert_eq!(engine.on_timer(id, &mut sched, &mut out), Progress::Pending);
    assert!(out.is_empty());
}

#[test]
fn cancel_tears_down_everything() {
    let mut sched = Scheduler::new();
    let mut out = OutputLog::new();
    let mut engine = SequenceEngine::new();

    engine.start(
        Sequence::new(vec![ScriptedStep::type_text("abc", 30)]).holding_input(),
        &mut sched,
        &mut out,
    );
    assert!(engine.holds_input());
    assert!(engine.cancel(&mut sched));
    assert!(!engine.is_running());
    assert!(!engine.holds_input());
    assert_eq!(sched.pending_count(), 0);
    assert!(!engine.cancel(&mut sched));
}

#[test]
fn clear_step_empties_the_log() {
    let mut sched = Scheduler::new();
    let mut out = OutputLog::new();
    out.push_text("old");
    let mut engine = SequenceEngine::new();

    engine.start(
        Sequence::new(vec![ScriptedStep::Clear, ScriptedStep::line("new")]),
        &mut sched,
        &mut out,
    );
    assert_eq!(out.texts(), vec!["new"]);
}

#[test]
fn duration_sums_typing_and_waits() {
    let seq = Sequence::new(vec![
        ScriptedStep::type_text("abcd", 30),
        ScriptedStep::Wait(200),
        ScriptedStep::line("x"),
    ]);
    assert_eq!(seq.duration(), 320);
}

#[test]
fn morph_reveals_left_to_right_and_freezes() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut morph = TextMorph::new(">_ SCROLL TO EXPLORE", ">_ GO TO TOP", 6);
    assert_eq!(morph.text().chars().count(), 20);

    let mut frozen_at: Vec<Option<String>> = vec![None; 20];
    let mut done = false;
    for _ in 0..6 {
        done = morph.step(&mut rng);
        let text: Vec<char> = morph.text().chars().collect();
        for (i, slot) in frozen_at.iter_mut().enumerate() {
            if morph.is_revealed(i) {
                let c = text[i].to_string();
                if let Some(prev) = slot {
                    assert_eq!(prev, &c, "revealed position {} changed", i);
                }
                *slot = Some(c);
            }
        }
    }
    assert!(done);
    assert_eq!(morph.text().trim_end(), ">_ GO TO TOP");
    assert_eq!(morph.target(), ">_ GO TO TOP");
}

#[test]
fn morph_first_tick_reveals_only_a_prefix() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut morph = TextMorph::new("aaaaaa", "bbbbbb", 6);
    morph.step(&mut rng);
    assert!(morph.is_revealed(0));
    assert!(!morph.is_revealed(5));
    let unrevealed = morph.text().chars().nth(5).unwrap();
    assert!(GLITCH_CHARS.contains(unrevealed));
}
