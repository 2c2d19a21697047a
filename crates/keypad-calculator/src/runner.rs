//! Scripted key runs for the `eval` command

use std::io::Write;

use tracing::debug;

use crate::core::{ArithmeticSequencer, SequencerState};
use crate::error::{CliError, CliResult};
use crate::keypad::ButtonEvent;

/// Output options for [`run_keys`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvalOptions {
    /// Print the display after every key
    pub trace: bool,
    /// Print the final state as JSON instead of the bare display
    pub json: bool,
}

/// Splits command-line key arguments into button events
///
/// An argument that is itself a label (`7`, `AC`, `↵`) is one press;
/// anything else is read one character at a time, skipping whitespace.
pub fn parse_keys<S: AsRef<str>>(args: &[S]) -> CliResult<Vec<ButtonEvent>> {
    let mut events = Vec::new();
    for arg in args {
        let arg = arg.as_ref();
        if let Some(event) = ButtonEvent::from_label(arg) {
            events.push(event);
            continue;
        }
        for ch in arg.chars().filter(|c| !c.is_whitespace()) {
            let event = ButtonEvent::from_char(ch).ok_or_else(|| {
                CliError::invalid_argument(format!("unknown key '{ch}' in {arg:?}"))
            })?;
            events.push(event);
        }
    }
    Ok(events)
}

/// Presses `events` on a fresh sequencer, writing output to `out`
pub fn run_keys<W: Write>(
    events: &[ButtonEvent],
    options: EvalOptions,
    out: &mut W,
) -> CliResult<SequencerState> {
    let mut sequencer = ArithmeticSequencer::new();

    for &event in events {
        sequencer.handle(event);
        if options.trace {
            writeln!(out, "{:>3} -> {}", event.label(), sequencer.display())?;
        }
    }

    let state = sequencer.snapshot();
    debug!(display = %state.display, presses = events.len(), "eval finished");

    if options.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&state)?)?;
    } else {
        writeln!(out, "{}", state.display)?;
    }
    Ok(state)
}
