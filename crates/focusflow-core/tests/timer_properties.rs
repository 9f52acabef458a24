//! Property tests for the timer state machine.

use focusflow_core::{Event, Phase, TimerEngine, TimerSettings, ValidationError};
use proptest::prelude::*;

#[derive(Debug, Clone, Copy)]
enum Step {
    Skip,
    /// Run the countdown to zero.
    Complete,
    Pause,
    Start,
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        Just(Step::Skip),
        Just(Step::Complete),
        Just(Step::Pause),
        Just(Step::Start),
    ]
}

fn short_settings(cadence: u32, auto_start: bool) -> TimerSettings {
    TimerSettings {
        work_duration: 1,
        short_break_duration: 1,
        long_break_duration: 2,
        work_sessions_before_long_break: cadence,
        auto_start_next_phase: auto_start,
        ..TimerSettings::default()
    }
}

/// Apply one step; returns the phase switch it caused, if any.
fn apply(engine: &mut TimerEngine, step: Step) -> Option<(Phase, Phase)> {
    match step {
        Step::Skip => match engine.skip() {
            Some(Event::PhaseSkipped { from, to, .. }) => Some((from, to)),
            other => panic!("unexpected skip result: {other:?}"),
        },
        Step::Complete => {
            engine.start();
            loop {
                if let Some(Event::PhaseCompleted { from, to, .. }) = engine.tick() {
                    return Some((from, to));
                }
            }
        }
        Step::Pause => {
            engine.pause();
            None
        }
        Step::Start => {
            engine.start();
            None
        }
    }
}

proptest! {
    #[test]
    fn sessions_count_work_exits_only(
        cadence in 1u32..=10,
        auto_start in any::<bool>(),
        steps in prop::collection::vec(step(), 0..40),
    ) {
        let mut engine = TimerEngine::new(short_settings(cadence, auto_start));
        let mut work_exits = 0;
        for s in steps {
            if let Some((from, to)) = apply(&mut engine, s) {
                if from == Phase::Work {
                    work_exits += 1;
                    prop_assert!(to.is_break());
                } else {
                    prop_assert_eq!(to, Phase::Work);
                }
            }
            prop_assert_eq!(engine.work_sessions_completed(), work_exits);
        }
    }

    #[test]
    fn long_break_every_nth_completion(
        cadence in 1u32..=10,
        steps in prop::collection::vec(prop_oneof![Just(Step::Skip), Just(Step::Complete)], 1..40),
    ) {
        let mut engine = TimerEngine::new(short_settings(cadence, true));
        for s in steps {
            let before = engine.phase();
            let switched = apply(&mut engine, s);
            prop_assert!(switched.is_some());
            if before == Phase::Work {
                let k = engine.work_sessions_completed();
                let expected = if k % cadence == 0 { Phase::LongBreak } else { Phase::ShortBreak };
                prop_assert_eq!(engine.phase(), expected);
            }
        }
    }

    #[test]
    fn skip_always_pauses(
        auto_start in any::<bool>(),
        steps in prop::collection::vec(step(), 0..20),
    ) {
        let mut engine = TimerEngine::new(short_settings(2, auto_start));
        for s in steps {
            apply(&mut engine, s);
        }
        engine.skip();
        prop_assert!(!engine.is_running());
        prop_assert!(engine.state().start_time.is_none());
    }

    #[test]
    fn phase_completion_autostarts_only_when_enabled(auto_start in any::<bool>()) {
        let mut engine = TimerEngine::new(short_settings(2, auto_start));
        apply(&mut engine, Step::Complete);
        prop_assert_eq!(engine.is_running(), auto_start);
        prop_assert_eq!(engine.state().start_time.is_some(), auto_start);
    }

    #[test]
    fn work_duration_bounds_are_enforced(minutes in -100i64..=200) {
        let mut engine = TimerEngine::new(TimerSettings::default());
        let raw = minutes.to_string();
        let result = engine.settings().with_field("workDuration", &raw);

        if (1..=60).contains(&minutes) {
            let accepted = result.map_err(|e| TestCaseError::fail(e.to_string()))?;
            engine.update_settings(accepted).map_err(|e| TestCaseError::fail(e.to_string()))?;
            prop_assert_eq!(i64::from(engine.time_left_secs()), minutes * 60);
        } else {
            let is_out_of_range = matches!(result, Err(ValidationError::OutOfRange { .. }));
            prop_assert!(is_out_of_range);
            prop_assert_eq!(engine.settings(), &TimerSettings::default());
            prop_assert_eq!(engine.time_left_secs(), 1500);
        }
    }

    #[test]
    fn direct_update_with_bad_bounds_changes_nothing(
        work in prop_oneof![Just(0u32), 61u32..1000],
    ) {
        let mut engine = TimerEngine::new(TimerSettings::default());
        engine.start();
        engine.tick();
        let before = engine.state().clone();

        let bad = TimerSettings { work_duration: work, ..TimerSettings::default() };
        prop_assert!(engine.update_settings(bad).is_err());
        prop_assert_eq!(engine.state(), &before);
        prop_assert_eq!(engine.settings(), &TimerSettings::default());
    }
}

#[test]
fn reset_is_idempotent() {
    let mut engine = TimerEngine::new(TimerSettings::default());
    engine.start();
    engine.tick();
    engine.skip();

    engine.reset();
    let once = engine.state().clone();
    engine.reset();
    assert_eq!(engine.state(), &once);
    assert_eq!(once.phase, Phase::Work);
    assert_eq!(once.time_left_secs, 1500);
    assert!(!once.is_running);
    assert!(!once.sessions_skipped);
}

#[test]
fn ticks_count_down_then_load_next_duration() {
    let mut engine = TimerEngine::new(short_settings(2, true));
    engine.start();
    let mut last = engine.time_left_secs();
    for _ in 0..59 {
        assert!(engine.tick().is_none());
        assert_eq!(engine.time_left_secs(), last - 1);
        last = engine.time_left_secs();
    }
    assert!(matches!(engine.tick(), Some(Event::PhaseCompleted { .. })));
    assert_eq!(engine.phase(), Phase::ShortBreak);
    assert_eq!(engine.time_left_secs(), engine.duration(Phase::ShortBreak) * 60);
}

#[test]
fn documented_cycle_with_two_sessions_per_long_break() {
    let mut engine = TimerEngine::new(TimerSettings::default());
    let mut seen = vec![(engine.phase(), engine.work_sessions_completed())];
    for _ in 0..4 {
        let to = apply(&mut engine, Step::Complete).map(|(_, to)| to);
        assert_eq!(to, Some(engine.phase()));
        seen.push((engine.phase(), engine.work_sessions_completed()));
    }
    assert_eq!(
        seen,
        vec![
            (Phase::Work, 0),
            (Phase::ShortBreak, 1),
            (Phase::Work, 1),
            (Phase::LongBreak, 2),
            (Phase::Work, 2),
        ]
    );
}
