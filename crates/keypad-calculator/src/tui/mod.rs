//! Terminal frontend for the calculator
//!
//! The display sits above a clickable keypad. Keys and mouse clicks both go
//! through the same [`ButtonEvent`](crate::keypad::ButtonEvent) dispatch as
//! the `eval` command.

mod app;
mod input;
mod keypad;
mod terminal;
mod ui;

pub use app::CalculatorApp;
pub use input::{InputHandler, KeyAction};
pub use keypad::{hit_test, preferred_size, KeypadWidget, CELL_HEIGHT, CELL_WIDTH};
pub use terminal::{run, run_app};
pub use ui::{layout, render, CalculatorLayout, CalculatorUI};
