//! Core calculator module
//!
//! Holds the arithmetic sequencer and everything it needs: the typed
//! operator set, display formatting and the error type. Nothing in here
//! knows about terminals or widgets.

pub mod display;
mod operations;
pub mod sequencer;

pub use operations::Operation;
pub use sequencer::{ArithmeticSequencer, SequencerState};

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Calculator error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division by zero attempted
    #[error("Division by zero")]
    DivisionByZero,

    /// Result is not a finite number
    #[error("Overflow: result exceeds maximum value")]
    Overflow,

    /// A button label that is not on the keypad
    #[error("Unknown button: {0:?}")]
    UnknownButton(String),
}

impl CalcError {
    /// Create an unknown button error
    #[must_use]
    pub fn unknown_button(label: impl Into<String>) -> Self {
        Self::UnknownButton(label.into())
    }

    /// Returns true if this error puts the sequencer into its Error state
    #[must_use]
    pub const fn is_arithmetic(&self) -> bool {
        matches!(self, Self::DivisionByZero | Self::Overflow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== CalcError tests =====

    #[test]
    fn test_calc_error_display_division_by_zero() {
        let err = CalcError::DivisionByZero;
        assert_eq!(format!("{err}"), "Division by zero");
    }

    #[test]
    fn test_calc_error_display_overflow() {
        let err = CalcError::Overflow;
        assert_eq!(format!("{err}"), "Overflow: result exceeds maximum value");
    }

    #[test]
    fn test_calc_error_display_unknown_button() {
        let err = CalcError::unknown_button("%");
        assert_eq!(format!("{err}"), "Unknown button: \"%\"");
    }

    #[test]
    fn test_calc_error_is_error_trait() {
        let err: Box<dyn std::error::Error> = Box::new(CalcError::DivisionByZero);
        assert!(err.to_string().contains("Division"));
    }

    #[test]
    fn test_calc_error_is_arithmetic() {
        assert!(CalcError::DivisionByZero.is_arithmetic());
        assert!(CalcError::Overflow.is_arithmetic());
        assert!(!CalcError::unknown_button("?").is_arithmetic());
    }
}
