//! Keypad Calculator - a four-function pocket calculator
//!
//! Button presses drive an [`ArithmeticSequencer`](core::ArithmeticSequencer),
//! which evaluates strictly left to right with a single pending operator.
//! There is no operator precedence and no parenthesis support.
//!
//! # Example
//!
//! ```rust
//! use keypad_calculator::prelude::*;
//!
//! let mut calc = ArithmeticSequencer::new();
//! for key in ["4", "*", "2", "+", "1", "="] {
//!     calc.press(key).unwrap();
//! }
//! assert_eq!(calc.display(), "9");
//!
//! calc.press("/").unwrap();
//! calc.press("0").unwrap();
//! calc.press("=").unwrap();
//! assert!(calc.is_error());
//! ```

// Allow common test patterns
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod commands;
pub mod config;
pub mod core;
pub mod driver;
pub mod error;
pub mod keypad;
pub mod logging;
pub mod runner;

#[cfg(feature = "tui")]
pub mod tui;

pub use commands::{Cli, Commands};
pub use config::{CliConfig, ColorChoice, Verbosity};
pub use error::{CliError, CliResult};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::{
        ArithmeticSequencer, CalcError, CalcResult, Operation, SequencerState,
    };
    pub use crate::driver::CalculatorDriver;
    pub use crate::keypad::{ButtonEvent, Keypad, KeypadButton, STANDARD_LAYOUT};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;
}
