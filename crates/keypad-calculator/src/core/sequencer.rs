//! Display/operator sequencing
//!
//! The sequencer turns button presses into display updates. It keeps a
//! running accumulator and at most one pending operator, so chained input
//! such as `4 * 2 + 1 =` is evaluated strictly left to right.
//!
//! A failed calculation clears all numeric state and leaves `"Error"` on
//! the display. Operator and equals presses are ignored until a digit (or
//! clear) is pressed.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace, warn};

use crate::core::display::{self, ERROR_TEXT, MAX_LENGTH, ZERO_TEXT};
use crate::core::{CalcError, CalcResult, Operation};
use crate::keypad::ButtonEvent;

/// Read-only copy of the sequencer state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequencerState {
    /// Text on the readout
    pub display: String,
    /// Running result
    pub accumulator: f64,
    /// Operator waiting for its right-hand operand
    pub pending: Option<Operation>,
    /// Whether the next digit starts a new number
    pub waiting_for_operand: bool,
    /// Whether the readout shows the error text
    pub is_error: bool,
}

/// The calculator state machine
#[derive(Debug, Clone, PartialEq)]
pub struct ArithmeticSequencer {
    display: String,
    accumulator: f64,
    pending: Option<Operation>,
    waiting_for_operand: bool,
}

impl Default for ArithmeticSequencer {
    fn default() -> Self {
        Self::new()
    }
}

impl ArithmeticSequencer {
    /// Creates a sequencer showing `0`
    #[must_use]
    pub fn new() -> Self {
        Self {
            display: ZERO_TEXT.to_string(),
            accumulator: 0.0,
            pending: None,
            waiting_for_operand: true,
        }
    }

    /// Returns the readout text
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Returns the running result
    #[must_use]
    pub const fn accumulator(&self) -> f64 {
        self.accumulator
    }

    /// Returns the queued operator
    #[must_use]
    pub const fn pending_operator(&self) -> Option<Operation> {
        self.pending
    }

    /// Returns true if the next digit replaces the readout
    #[must_use]
    pub const fn is_waiting_for_operand(&self) -> bool {
        self.waiting_for_operand
    }

    /// Returns true if the readout shows the error text
    #[must_use]
    pub fn is_error(&self) -> bool {
        display::is_error(&self.display)
    }

    /// Takes a snapshot of the current state
    #[must_use]
    pub fn snapshot(&self) -> SequencerState {
        SequencerState {
            display: self.display.clone(),
            accumulator: self.accumulator,
            pending: self.pending,
            waiting_for_operand: self.waiting_for_operand,
            is_error: self.is_error(),
        }
    }

    /// Dispatches one button event
    pub fn handle(&mut self, event: ButtonEvent) {
        debug!(?event, display = %self.display, "button event");
        match event {
            ButtonEvent::Digit(digit) => self.on_digit(digit),
            ButtonEvent::Operator(op) => self.on_operator(op),
            ButtonEvent::Equals => self.on_equals(),
            ButtonEvent::Clear => self.on_clear(),
        }
    }

    /// Resolves a button label and dispatches it
    pub fn press(&mut self, label: &str) -> CalcResult<()> {
        let event = ButtonEvent::from_label(label).ok_or_else(|| CalcError::unknown_button(label))?;
        self.handle(event);
        Ok(())
    }

    /// Digit or decimal point entry
    pub fn on_digit(&mut self, digit: char) {
        if !(digit.is_ascii_digit() || digit == '.') {
            warn!(%digit, "ignoring non-digit key");
            return;
        }

        if self.is_error() {
            self.display = ZERO_TEXT.to_string();
            self.waiting_for_operand = true;
        }

        if self.waiting_for_operand {
            self.display = if digit == '.' {
                "0.".to_string()
            } else {
                digit.to_string()
            };
            self.waiting_for_operand = false;
            return;
        }

        if digit == '.' {
            if self.display.contains('.') {
                trace!("second decimal point ignored");
                return;
            }
        } else if self.display == ZERO_TEXT {
            self.display = digit.to_string();
            return;
        }

        if self.display.chars().count() >= MAX_LENGTH {
            trace!(len = MAX_LENGTH, "display full");
            return;
        }
        self.display.push(digit);
    }

    /// Operator press: applies any pending operator, then queues `op`
    pub fn on_operator(&mut self, op: Operation) {
        if self.is_error() {
            debug!(%op, "operator ignored while showing error");
            return;
        }

        let operand = display::parse_operand(&self.display);

        if let Some(pending) = self.pending {
            if let Err(err) = self.calculate(operand, pending) {
                self.abort(&err);
                return;
            }
            self.display = display::format_number(self.accumulator);
        } else {
            self.accumulator = operand;
        }

        self.pending = Some(op);
        self.waiting_for_operand = true;
    }

    /// Equals press: applies the pending operator and shows the result
    pub fn on_equals(&mut self) {
        if self.is_error() {
            debug!("equals ignored while showing error");
            return;
        }

        let operand = display::parse_operand(&self.display);

        if let Some(pending) = self.pending.take() {
            if let Err(err) = self.calculate(operand, pending) {
                self.abort(&err);
                return;
            }
        } else {
            self.accumulator = operand;
        }

        self.display = display::format_number(self.accumulator);
        self.accumulator = 0.0;
        self.waiting_for_operand = true;
    }

    /// Clear press: back to the initial state
    pub fn on_clear(&mut self) {
        self.accumulator = 0.0;
        self.pending = None;
        self.display = ZERO_TEXT.to_string();
        self.waiting_for_operand = true;
    }

    /// Applies `op` to the accumulator with `operand` on the right
    ///
    /// On failure the accumulator is left unchanged.
    pub fn calculate(&mut self, operand: f64, op: Operation) -> CalcResult<()> {
        self.accumulator = op.apply(self.accumulator, operand)?;
        Ok(())
    }

    fn abort(&mut self, err: &CalcError) {
        info!(error = %err, "calculation failed");
        self.on_clear();
        self.display = ERROR_TEXT.to_string();
    }
}
