//! TUI application state

use ratatui::layout::Rect;
use tracing::debug;

use super::input::KeyAction;
use super::keypad::hit_test;
use super::ui::layout;
use crate::config::CliConfig;
use crate::core::ArithmeticSequencer;
use crate::keypad::Keypad;

/// Calculator application state
#[derive(Debug)]
pub struct CalculatorApp {
    /// The calculator itself
    sequencer: ArithmeticSequencer,
    /// Button table and highlight
    keypad: Keypad,
    /// Last frame area, used to resolve clicks
    frame_area: Rect,
    /// Draw the keypad
    show_keypad: bool,
    /// Use colors
    colored: bool,
    /// Whether the app should quit
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates a new calculator app with default settings
    #[must_use]
    pub fn new() -> Self {
        Self {
            sequencer: ArithmeticSequencer::new(),
            keypad: Keypad::standard(),
            frame_area: Rect::default(),
            show_keypad: true,
            colored: true,
            should_quit: false,
        }
    }

    /// Creates an app honoring the keypad and color settings
    #[must_use]
    pub fn from_config(config: &CliConfig) -> Self {
        Self {
            show_keypad: config.show_keypad,
            colored: config.color.should_color(),
            ..Self::new()
        }
    }

    /// Returns the sequencer
    #[must_use]
    pub fn sequencer(&self) -> &ArithmeticSequencer {
        &self.sequencer
    }

    /// Returns the keypad
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns whether the keypad is drawn
    #[must_use]
    pub fn show_keypad(&self) -> bool {
        self.show_keypad
    }

    /// Returns whether colors are used
    #[must_use]
    pub fn colored(&self) -> bool {
        self.colored
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Records the frame area of the last draw
    pub fn resize(&mut self, area: Rect) {
        self.frame_area = area;
    }

    /// Applies one input action
    pub fn apply(&mut self, action: KeyAction) {
        match action {
            KeyAction::Button(event) => {
                self.keypad.highlight(event);
                self.sequencer.handle(event);
            }
            KeyAction::Click { column, row } => self.click(column, row),
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
    }

    fn click(&mut self, column: u16, row: u16) {
        if !self.show_keypad {
            return;
        }
        let Some(area) = layout(self.frame_area, true).keypad else {
            return;
        };
        let Some(index) = hit_test(&self.keypad, area, column, row) else {
            debug!(column, row, "click outside keypad");
            return;
        };
        if let Some(button) = self.keypad.get_button(index) {
            let event = button.event;
            self.keypad.press(index);
            self.sequencer.handle(event);
        }
    }
}
