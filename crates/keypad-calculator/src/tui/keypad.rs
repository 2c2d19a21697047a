//! Keypad widget for the terminal UI
//!
//! Buttons are laid out on an even grid inside a bordered block. Spanning
//! buttons cover several cells and the lit button is drawn inverted.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Widget},
};

use crate::keypad::{ButtonEvent, Keypad};

/// Width of one keypad cell
pub const CELL_WIDTH: u16 = 7;

/// Height of one keypad cell
pub const CELL_HEIGHT: u16 = 3;

/// Keypad widget for rendering
#[derive(Debug)]
pub struct KeypadWidget<'a> {
    keypad: &'a Keypad,
    colored: bool,
}

impl<'a> KeypadWidget<'a> {
    /// Creates a new keypad widget
    #[must_use]
    pub fn new(keypad: &'a Keypad) -> Self {
        Self {
            keypad,
            colored: true,
        }
    }

    /// Turns colors on or off
    #[must_use]
    pub fn colored(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }
}

/// Outer size needed to draw `keypad` with full-size cells
#[must_use]
pub fn preferred_size(keypad: &Keypad) -> (u16, u16) {
    let (rows, cols) = keypad.dimensions();
    (
        cols as u16 * CELL_WIDTH + 2,
        rows as u16 * CELL_HEIGHT + 2,
    )
}

fn inner_area(area: Rect) -> Rect {
    Rect {
        x: area.x + 1,
        y: area.y + 1,
        width: area.width.saturating_sub(2),
        height: area.height.saturating_sub(2),
    }
}

fn cell_size(keypad: &Keypad, inner: Rect) -> (u16, u16) {
    let (rows, cols) = keypad.dimensions();
    (inner.width / cols as u16, inner.height / rows as u16)
}

/// Converts a click position to a button index
#[must_use]
pub fn hit_test(keypad: &Keypad, area: Rect, x: u16, y: u16) -> Option<usize> {
    let inner = inner_area(area);
    let (cell_w, cell_h) = cell_size(keypad, inner);
    if cell_w == 0 || cell_h == 0 {
        return None;
    }

    if x < inner.x || y < inner.y || x >= inner.x + inner.width || y >= inner.y + inner.height {
        return None;
    }

    let col = ((x - inner.x) / cell_w) as usize;
    let row = ((y - inner.y) / cell_h) as usize;
    keypad.index_at(row, col)
}

impl KeypadWidget<'_> {
    fn button_style(&self, event: ButtonEvent, pressed: bool) -> Style {
        if !self.colored {
            return if pressed {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
        }
        if pressed {
            return Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD);
        }
        match event {
            ButtonEvent::Digit(_) => Style::default().fg(Color::White),
            ButtonEvent::Operator(_) => Style::default().fg(Color::Yellow),
            ButtonEvent::Equals => Style::default().fg(Color::Green),
            ButtonEvent::Clear => Style::default().fg(Color::Red),
        }
    }
}

impl Widget for KeypadWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = if self.colored {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        Block::default()
            .title(" Keypad ")
            .borders(Borders::ALL)
            .border_style(border)
            .render(area, buf);

        let inner = inner_area(area);
        let (cell_w, cell_h) = cell_size(self.keypad, inner);
        if cell_w < 3 || cell_h == 0 {
            return; // Too small to render
        }

        for (index, btn) in self.keypad.buttons().iter().enumerate() {
            let rect = Rect {
                x: inner.x + btn.col as u16 * cell_w,
                y: inner.y + btn.row as u16 * cell_h,
                width: btn.col_span as u16 * cell_w,
                height: btn.row_span as u16 * cell_h,
            };

            let label = format!("[{}]", btn.caption());
            let label_width = label.chars().count() as u16;
            let label_x = rect.x + rect.width.saturating_sub(label_width) / 2;
            let label_y = rect.y + rect.height / 2;
            let style = self.button_style(btn.event, self.keypad.is_pressed(index));

            if label_y < inner.y + inner.height && label_x < inner.x + inner.width {
                buf.set_span(label_x, label_y, &Span::styled(label, style), rect.width);
            }
        }
    }
}
