use chrono::Utc;
use clap::Subcommand;
use focusflow_core::{Event, Phase, SilentOutput, Ticker, TimerSnapshot, TransitionNotifier};
use tokio::io::{AsyncBufReadExt, BufReader};

use super::{print_json, CliResult, PersistedTimer};
use crate::output::TerminalOutput;

#[derive(Subcommand)]
pub enum TimerAction {
    /// Start or resume the countdown
    Start,
    /// Pause the countdown
    Pause,
    /// Back to the first focus session
    Reset,
    /// Jump to the next phase
    Skip,
    /// Print current timer state as JSON
    Status,
    /// Run the timer in the foreground (commands on stdin: p, s, r, q)
    Run,
}

pub fn run(action: TimerAction) -> CliResult {
    if let TimerAction::Run = action {
        return run_foreground();
    }

    let (mut timer, caught_up) = PersistedTimer::open(SilentOutput::default())?;
    for event in &caught_up {
        print_json(event)?;
    }

    let session = timer.session_mut();
    let event = match action {
        TimerAction::Start => session.start(),
        TimerAction::Pause => session.pause(),
        TimerAction::Reset => session.reset(),
        TimerAction::Skip => session.skip(),
        TimerAction::Status | TimerAction::Run => None,
    };
    let changed = event.is_some();
    match event {
        Some(event) => print_json(&event)?,
        None => print_json(&session.engine().snapshot_event())?,
    }

    // Status and no-op commands keep the carried partial second.
    if changed {
        timer.mark(Utc::now());
    }
    timer.save()
}

fn run_foreground() -> CliResult {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(foreground_loop())
}

async fn foreground_loop() -> CliResult {
    let (mut timer, caught_up) = PersistedTimer::open(TerminalOutput)?;
    for event in &caught_up {
        print_json(event)?;
    }
    timer.session_mut().attach_notifier_with(
        TransitionNotifier::new(TerminalOutput),
        |phase: Phase| println!("-> {phase}"),
    );

    let mut ticker = Ticker::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    println!("{}", status_line(&timer.session().state()));
    loop {
        ticker.sync(timer.session().state().is_running);

        tokio::select! {
            () = ticker.tick() => {
                timer.session_mut().tick();
                timer.mark(Utc::now());
                println!("{}", status_line(&timer.session().state()));
            }
            line = lines.next_line(), if stdin_open => {
                let Some(line) = line? else {
                    stdin_open = false;
                    continue;
                };
                let session = timer.session_mut();
                let event = match line.trim() {
                    "p" => session.toggle(),
                    "s" => session.skip(),
                    "r" => session.reset(),
                    "q" => break,
                    "" => None,
                    other => {
                        eprintln!("unknown command: {other} (p, s, r, q)");
                        None
                    }
                };
                if let Some(event) = &event {
                    log_event(event);
                    timer.mark(Utc::now());
                }
                println!("{}", status_line(&timer.session().state()));
            }
            _ = &mut ctrl_c => break,
        }

        timer.save()?;
    }

    timer.save()
}

fn log_event(event: &Event) {
    if let Ok(json) = serde_json::to_string(event) {
        tracing::debug!(event = %json, "timer event");
    }
}

/// `Focus Time 24:59 running ●●○○`
fn status_line(state: &TimerSnapshot) -> String {
    let minutes = state.time_left_secs / 60;
    let seconds = state.time_left_secs % 60;
    let run_state = if state.is_running { "running" } else { "paused" };
    let dots: String = (0..focusflow_core::timer::SESSION_DOTS)
        .map(|i| if i < state.session_dots { '●' } else { '○' })
        .collect();
    format!("{} {minutes:02}:{seconds:02} {run_state} {dots}", state.phase.label())
}
