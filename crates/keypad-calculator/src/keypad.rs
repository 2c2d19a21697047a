//! Button table and typed button events
//!
//! The keypad is a static declarative list of buttons. Hosts translate
//! clicks or key presses into a [`ButtonEvent`] and hand it to the
//! sequencer; nothing is looked up by name at dispatch time.
//!
//! ```text
//! [ ← ] [ / ] [ * ] [ - ]
//! [ 7 ] [ 8 ] [ 9 ] [   ]
//! [ 4 ] [ 5 ] [ 6 ] [ + ]
//! [ 1 ] [ 2 ] [ 3 ] [   ]
//! [    0    ] [ . ] [ ↵ ]
//! ```

use serde::{Deserialize, Serialize};

use crate::core::Operation;

/// One press on the keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum ButtonEvent {
    /// A digit `0`-`9` or the decimal point `.`
    Digit(char),
    /// One of the four operators
    Operator(Operation),
    /// Evaluate the pending operation
    Equals,
    /// Reset everything
    Clear,
}

impl ButtonEvent {
    /// The decimal point key
    pub const POINT: Self = Self::Digit('.');

    /// Creates a digit event, `None` if `d > 9`
    #[must_use]
    pub fn digit(d: u8) -> Option<Self> {
        char::from_digit(u32::from(d), 10).map(Self::Digit)
    }

    /// Resolves a button label
    ///
    /// Accepts the labels printed on the keypad plus the usual typed
    /// aliases (`x` for multiply, `C`/`AC` for clear, `↵` for equals).
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        let mut chars = label.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Self::from_char(ch),
            _ => match label {
                "AC" | "CE" | "clear" => Some(Self::Clear),
                "enter" => Some(Self::Equals),
                _ => None,
            },
        }
    }

    /// Resolves a single-character label
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '0'..='9' | '.' => Some(Self::Digit(ch)),
            '=' | '↵' => Some(Self::Equals),
            'C' | 'c' | '←' => Some(Self::Clear),
            _ => Operation::from_symbol(ch).map(Self::Operator),
        }
    }

    /// The label printed on the matching keypad button
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => CLEAR_LABEL.to_string(),
        }
    }
}

const CLEAR_LABEL: &str = "←";

/// A button definition: label, event and grid placement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeypadButton {
    /// Label used to look the button up
    pub label: &'static str,
    /// Event emitted when the button is pressed
    pub event: ButtonEvent,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
    /// Rows covered
    pub row_span: usize,
    /// Columns covered
    pub col_span: usize,
}

impl KeypadButton {
    /// A single-cell button
    #[must_use]
    pub const fn new(label: &'static str, event: ButtonEvent, row: usize, col: usize) -> Self {
        Self {
            label,
            event,
            row,
            col,
            row_span: 1,
            col_span: 1,
        }
    }

    /// Widens the button to cover `rows` x `cols` cells
    #[must_use]
    pub const fn spanning(mut self, rows: usize, cols: usize) -> Self {
        self.row_span = rows;
        self.col_span = cols;
        self
    }

    /// Text drawn on the button face
    #[must_use]
    pub const fn caption(&self) -> &'static str {
        match self.event {
            ButtonEvent::Equals => "↵",
            _ => self.label,
        }
    }

    /// Returns true if the button covers the given cell
    #[must_use]
    pub const fn covers(&self, row: usize, col: usize) -> bool {
        row >= self.row
            && row < self.row + self.row_span
            && col >= self.col
            && col < self.col + self.col_span
    }
}

const fn digit(label: &'static str, ch: char, row: usize, col: usize) -> KeypadButton {
    KeypadButton::new(label, ButtonEvent::Digit(ch), row, col)
}

const fn operator(label: &'static str, op: Operation, row: usize, col: usize) -> KeypadButton {
    KeypadButton::new(label, ButtonEvent::Operator(op), row, col)
}

/// The standard layout
pub static STANDARD_LAYOUT: [KeypadButton; 17] = [
    KeypadButton::new(CLEAR_LABEL, ButtonEvent::Clear, 0, 0),
    operator("/", Operation::Divide, 0, 1),
    operator("*", Operation::Multiply, 0, 2),
    operator("-", Operation::Subtract, 0, 3),
    digit("7", '7', 1, 0),
    digit("8", '8', 1, 1),
    digit("9", '9', 1, 2),
    operator("+", Operation::Add, 1, 3).spanning(2, 1),
    digit("4", '4', 2, 0),
    digit("5", '5', 2, 1),
    digit("6", '6', 2, 2),
    digit("1", '1', 3, 0),
    digit("2", '2', 3, 1),
    digit("3", '3', 3, 2),
    KeypadButton::new("=", ButtonEvent::Equals, 3, 3).spanning(2, 1),
    digit("0", '0', 4, 0).spanning(1, 2),
    digit(".", '.', 4, 2),
];

/// Keypad state: the button table plus which button is lit
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: &'static [KeypadButton],
    rows: usize,
    cols: usize,
    pressed: Option<usize>,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::standard()
    }
}

impl Keypad {
    /// Creates the standard 5 x 4 keypad
    #[must_use]
    pub fn standard() -> Self {
        Self {
            buttons: &STANDARD_LAYOUT,
            rows: 5,
            cols: 4,
            pressed: None,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns all buttons in table order
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButton] {
        self.buttons
    }

    /// Gets a button by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Index of the button covering a cell, taking spans into account
    #[must_use]
    pub fn index_at(&self, row: usize, col: usize) -> Option<usize> {
        self.buttons.iter().position(|b| b.covers(row, col))
    }

    /// Gets the button covering a cell
    #[must_use]
    pub fn button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        self.index_at(row, col).and_then(|i| self.buttons.get(i))
    }

    /// Finds a button by its label or caption
    #[must_use]
    pub fn find_by_label(&self, label: &str) -> Option<usize> {
        self.buttons
            .iter()
            .position(|b| b.label == label || b.caption() == label)
    }

    /// Finds the button that emits an event
    #[must_use]
    pub fn find_by_event(&self, event: ButtonEvent) -> Option<usize> {
        self.buttons.iter().position(|b| b.event == event)
    }

    /// Lights a button by index, releasing any other
    pub fn press(&mut self, index: usize) {
        if index < self.buttons.len() {
            self.pressed = Some(index);
        }
    }

    /// Lights the button for an event, if the keypad has one
    pub fn highlight(&mut self, event: ButtonEvent) {
        self.pressed = self.find_by_event(event);
    }

    /// Releases all buttons
    pub fn release_all(&mut self) {
        self.pressed = None;
    }

    /// Index of the lit button
    #[must_use]
    pub const fn pressed(&self) -> Option<usize> {
        self.pressed
    }

    /// Returns true if the button at `index` is lit
    #[must_use]
    pub fn is_pressed(&self, index: usize) -> bool {
        self.pressed == Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== ButtonEvent tests =====

    #[test]
    fn test_digit_constructor() {
        assert_eq!(ButtonEvent::digit(7), Some(ButtonEvent::Digit('7')));
        assert_eq!(ButtonEvent::digit(0), Some(ButtonEvent::Digit('0')));
        assert_eq!(ButtonEvent::digit(10), None);
    }

    #[test]
    fn test_from_label_digits_and_point() {
        for c in '0'..='9' {
            assert_eq!(
                ButtonEvent::from_label(&c.to_string()),
                Some(ButtonEvent::Digit(c))
            );
        }
        assert_eq!(ButtonEvent::from_label("."), Some(ButtonEvent::POINT));
    }

    #[test]
    fn test_from_label_operators() {
        assert_eq!(
            ButtonEvent::from_label("+"),
            Some(ButtonEvent::Operator(Operation::Add))
        );
        assert_eq!(
            ButtonEvent::from_label("x"),
            Some(ButtonEvent::Operator(Operation::Multiply))
        );
        assert_eq!(
            ButtonEvent::from_label("÷"),
            Some(ButtonEvent::Operator(Operation::Divide))
        );
    }

    #[test]
    fn test_from_label_equals_and_clear() {
        assert_eq!(ButtonEvent::from_label("="), Some(ButtonEvent::Equals));
        assert_eq!(ButtonEvent::from_label("↵"), Some(ButtonEvent::Equals));
        assert_eq!(ButtonEvent::from_label("←"), Some(ButtonEvent::Clear));
        assert_eq!(ButtonEvent::from_label("C"), Some(ButtonEvent::Clear));
        assert_eq!(ButtonEvent::from_label("AC"), Some(ButtonEvent::Clear));
        assert_eq!(ButtonEvent::from_label(" = "), Some(ButtonEvent::Equals));
    }

    #[test]
    fn test_from_label_unknown() {
        assert_eq!(ButtonEvent::from_label("%"), None);
        assert_eq!(ButtonEvent::from_label("12"), None);
        assert_eq!(ButtonEvent::from_label(""), None);
    }

    #[test]
    fn test_label_roundtrip_through_keypad() {
        let keypad = Keypad::standard();
        for btn in keypad.buttons() {
            let label = btn.event.label();
            assert_eq!(ButtonEvent::from_label(&label), Some(btn.event));
            assert!(keypad.find_by_label(&label).is_some(), "no button for {label}");
        }
    }

    #[test]
    fn test_button_event_serde() {
        let json = serde_json::to_string(&ButtonEvent::Operator(Operation::Add)).unwrap();
        assert_eq!(json, r#"{"kind":"operator","value":"add"}"#);
        let back: ButtonEvent = serde_json::from_str(r#"{"kind":"equals"}"#).unwrap();
        assert_eq!(back, ButtonEvent::Equals);
    }

    // ===== KeypadButton tests =====

    #[test]
    fn test_button_caption() {
        let equals = KeypadButton::new("=", ButtonEvent::Equals, 0, 0);
        assert_eq!(equals.caption(), "↵");
        let seven = KeypadButton::new("7", ButtonEvent::Digit('7'), 0, 0);
        assert_eq!(seven.caption(), "7");
    }

    #[test]
    fn test_button_covers_span() {
        let plus = KeypadButton::new("+", ButtonEvent::Operator(Operation::Add), 1, 3)
            .spanning(2, 1);
        assert!(plus.covers(1, 3));
        assert!(plus.covers(2, 3));
        assert!(!plus.covers(3, 3));
        assert!(!plus.covers(1, 2));
    }

    // ===== Keypad tests =====

    #[test]
    fn test_keypad_standard() {
        let keypad = Keypad::standard();
        assert_eq!(keypad.button_count(), 17);
        assert_eq!(keypad.dimensions(), (5, 4));
    }

    #[test]
    fn test_keypad_layout_rows() {
        let keypad = Keypad::standard();
        let label = |r, c| keypad.button_at(r, c).map(|b| b.label);
        assert_eq!(label(0, 0), Some("←"));
        assert_eq!(label(0, 3), Some("-"));
        assert_eq!(label(1, 0), Some("7"));
        assert_eq!(label(2, 2), Some("6"));
        assert_eq!(label(3, 0), Some("1"));
        assert_eq!(label(4, 2), Some("."));
    }

    #[test]
    fn test_keypad_spanning_buttons() {
        let keypad = Keypad::standard();
        assert_eq!(keypad.button_at(1, 3).unwrap().label, "+");
        assert_eq!(keypad.button_at(2, 3).unwrap().label, "+");
        assert_eq!(keypad.button_at(3, 3).unwrap().label, "=");
        assert_eq!(keypad.button_at(4, 3).unwrap().label, "=");
        assert_eq!(keypad.button_at(4, 0).unwrap().label, "0");
        assert_eq!(keypad.button_at(4, 1).unwrap().label, "0");
    }

    #[test]
    fn test_keypad_every_cell_covered_once() {
        let keypad = Keypad::standard();
        let (rows, cols) = keypad.dimensions();
        for r in 0..rows {
            for c in 0..cols {
                let covering = keypad.buttons().iter().filter(|b| b.covers(r, c)).count();
                assert_eq!(covering, 1, "cell ({r}, {c})");
            }
        }
    }

    #[test]
    fn test_keypad_out_of_bounds() {
        let keypad = Keypad::standard();
        assert!(keypad.button_at(5, 0).is_none());
        assert!(keypad.button_at(0, 4).is_none());
        assert!(keypad.get_button(100).is_none());
    }

    #[test]
    fn test_keypad_find_by_label_and_caption() {
        let keypad = Keypad::standard();
        assert_eq!(keypad.find_by_label("←"), Some(0));
        assert_eq!(keypad.find_by_label("="), keypad.find_by_label("↵"));
        assert_eq!(keypad.find_by_label("%"), None);
    }

    #[test]
    fn test_keypad_find_by_event() {
        let keypad = Keypad::standard();
        let idx = keypad.find_by_event(ButtonEvent::Digit('5')).unwrap();
        assert_eq!(keypad.get_button(idx).unwrap().label, "5");
    }

    #[test]
    fn test_keypad_highlight_and_release() {
        let mut keypad = Keypad::standard();
        keypad.highlight(ButtonEvent::Equals);
        let idx = keypad.pressed().unwrap();
        assert_eq!(keypad.get_button(idx).unwrap().event, ButtonEvent::Equals);
        assert!(keypad.is_pressed(idx));

        keypad.highlight(ButtonEvent::Digit('9'));
        assert!(!keypad.is_pressed(idx));

        keypad.release_all();
        assert!(keypad.pressed().is_none());
    }

    #[test]
    fn test_keypad_press_out_of_range_ignored() {
        let mut keypad = Keypad::standard();
        keypad.press(3);
        keypad.press(99);
        assert_eq!(keypad.pressed(), Some(3));
    }
}
