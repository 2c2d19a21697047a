//! Unified calculator driver
//!
//! Behavioral checks are written once against [`CalculatorDriver`] and run
//! against every host: the bare sequencer and the terminal app.

use crate::core::{ArithmeticSequencer, CalcResult};

/// Abstract driver trait for calculator interactions
///
/// # Example
///
/// ```rust
/// use keypad_calculator::core::ArithmeticSequencer;
/// use keypad_calculator::driver::{verify_basic_arithmetic, CalculatorDriver};
///
/// let mut driver = ArithmeticSequencer::new();
/// driver.press_sequence(&["1", "2", "+", "3", "="]).unwrap();
/// assert_eq!(driver.display(), "15");
///
/// verify_basic_arithmetic(&mut driver);
/// ```
pub trait CalculatorDriver {
    /// Presses one button by label
    fn press(&mut self, label: &str) -> CalcResult<()>;

    /// Presses buttons in order, stopping at the first unknown label
    fn press_sequence(&mut self, labels: &[&str]) -> CalcResult<()> {
        labels.iter().try_for_each(|label| self.press(label))
    }

    /// Gets the current display text
    fn display(&self) -> String;

    /// Clears the calculator state
    fn clear(&mut self);
}

impl CalculatorDriver for ArithmeticSequencer {
    fn press(&mut self, label: &str) -> CalcResult<()> {
        Self::press(self, label)
    }

    fn display(&self) -> String {
        Self::display(self).to_string()
    }

    fn clear(&mut self) {
        self.on_clear();
    }
}

/// TUI Driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::{CalcResult, CalculatorDriver};
    use crate::core::CalcError;
    use crate::keypad::ButtonEvent;
    use crate::tui::{CalculatorApp, KeyAction};

    /// Drives the terminal app through the same key actions the event loop uses
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
    }

    impl TuiDriver {
        /// Creates a new TUI driver
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a TUI driver with an existing app
        #[must_use]
        pub fn with_app(app: CalculatorApp) -> Self {
            Self { app }
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press(&mut self, label: &str) -> CalcResult<()> {
            let event =
                ButtonEvent::from_label(label).ok_or_else(|| CalcError::unknown_button(label))?;
            self.app.apply(KeyAction::Button(event));
            Ok(())
        }

        fn display(&self) -> String {
            self.app.sequencer().display().to_string()
        }

        fn clear(&mut self) {
            self.app.apply(KeyAction::Button(ButtonEvent::Clear));
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Shared behavioral checks =====
// These checks work with ANY CalculatorDriver implementation

fn press_all<D: CalculatorDriver>(driver: &mut D, labels: &[&str]) {
    let result = driver.press_sequence(labels);
    assert!(result.is_ok(), "pressing {labels:?} failed: {result:?}");
}

/// Verifies the four operators
pub fn verify_basic_arithmetic<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();

    press_all(driver, &["5", "+", "3", "="]);
    assert_eq!(driver.display(), "8");
    driver.clear();

    press_all(driver, &["1", "0", "-", "4", "="]);
    assert_eq!(driver.display(), "6");
    driver.clear();

    press_all(driver, &["6", "*", "7", "="]);
    assert_eq!(driver.display(), "42");
    driver.clear();

    press_all(driver, &["7", "/", "2", "="]);
    assert_eq!(driver.display(), "3.5");
    driver.clear();
}

/// Verifies left-to-right evaluation without precedence
pub fn verify_chaining<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();

    press_all(driver, &["4", "*", "2", "+"]);
    assert_eq!(driver.display(), "8");
    press_all(driver, &["1", "="]);
    assert_eq!(driver.display(), "9");

    // Result feeds the next operation
    press_all(driver, &["*", "3", "="]);
    assert_eq!(driver.display(), "27");
    driver.clear();
}

/// Verifies the Error state and recovery
pub fn verify_error_recovery<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();

    press_all(driver, &["6", "/", "0", "="]);
    assert_eq!(driver.display(), "Error");

    // Operators are ignored until a digit arrives
    press_all(driver, &["+", "="]);
    assert_eq!(driver.display(), "Error");

    press_all(driver, &["7"]);
    assert_eq!(driver.display(), "7");
    press_all(driver, &["+", "1", "="]);
    assert_eq!(driver.display(), "8");
    driver.clear();
}

/// Verifies digit entry rules
pub fn verify_digit_entry<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();

    press_all(driver, &["0", "0", "4"]);
    assert_eq!(driver.display(), "4");
    driver.clear();

    press_all(driver, &["3", ".", "."]);
    assert_eq!(driver.display(), "3.");
    driver.clear();

    press_all(driver, &["."]);
    assert_eq!(driver.display(), "0.");
    driver.clear();

    for _ in 0..20 {
        press_all(driver, &["9"]);
    }
    assert_eq!(driver.display(), "999999999999999");
    driver.clear();
    assert_eq!(driver.display(), "0");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CalcError;

    // ===== Sequencer driver =====

    #[test]
    fn test_sequencer_basic_arithmetic() {
        verify_basic_arithmetic(&mut ArithmeticSequencer::new());
    }

    #[test]
    fn test_sequencer_chaining() {
        verify_chaining(&mut ArithmeticSequencer::new());
    }

    #[test]
    fn test_sequencer_error_recovery() {
        verify_error_recovery(&mut ArithmeticSequencer::new());
    }

    #[test]
    fn test_sequencer_digit_entry() {
        verify_digit_entry(&mut ArithmeticSequencer::new());
    }

    #[test]
    fn test_press_sequence_stops_on_unknown() {
        let mut driver = ArithmeticSequencer::new();
        let result = driver.press_sequence(&["1", "%", "2"]);
        assert_eq!(result, Err(CalcError::UnknownButton("%".to_string())));
        assert_eq!(CalculatorDriver::display(&driver), "1");
    }

    // ===== TUI driver =====

    #[cfg(feature = "tui")]
    mod tui {
        use super::super::*;

        #[test]
        fn test_tui_basic_arithmetic() {
            verify_basic_arithmetic(&mut TuiDriver::new());
        }

        #[test]
        fn test_tui_chaining() {
            verify_chaining(&mut TuiDriver::new());
        }

        #[test]
        fn test_tui_error_recovery() {
            verify_error_recovery(&mut TuiDriver::new());
        }

        #[test]
        fn test_tui_digit_entry() {
            verify_digit_entry(&mut TuiDriver::new());
        }

        #[test]
        fn test_tui_driver_highlights_last_button() {
            let mut driver = TuiDriver::new();
            driver.press("8").unwrap();
            let keypad = driver.app().keypad();
            let idx = keypad.pressed().unwrap();
            assert_eq!(keypad.get_button(idx).unwrap().label, "8");
        }

        #[test]
        fn test_tui_driver_with_app() {
            let driver = TuiDriver::with_app(crate::tui::CalculatorApp::new());
            assert_eq!(driver.display(), "0");
        }
    }
}
