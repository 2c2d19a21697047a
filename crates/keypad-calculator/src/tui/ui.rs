//! TUI rendering

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
    Frame,
};

use super::app::CalculatorApp;
use super::keypad::{preferred_size, KeypadWidget};
use crate::keypad::Keypad;

const DISPLAY_HEIGHT: u16 = 3;
const STATUS_HEIGHT: u16 = 1;
const HELP_TEXT: &str = "q quit · esc clear";

/// Screen areas of the calculator panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculatorLayout {
    /// Readout box
    pub display: Rect,
    /// Pending operator and key help
    pub status: Rect,
    /// Keypad grid, if shown
    pub keypad: Option<Rect>,
}

/// Centers the calculator panel in `area` and splits it
#[must_use]
pub fn layout(area: Rect, show_keypad: bool) -> CalculatorLayout {
    let (keypad_width, keypad_height) = preferred_size(&Keypad::standard());
    let wanted_height = DISPLAY_HEIGHT + STATUS_HEIGHT + if show_keypad { keypad_height } else { 0 };

    let width = area.width.min(keypad_width);
    let height = area.height.min(wanted_height);
    let panel = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(DISPLAY_HEIGHT),
            Constraint::Length(STATUS_HEIGHT),
            Constraint::Min(0),
        ])
        .split(panel);

    CalculatorLayout {
        display: chunks[0],
        status: chunks[1],
        keypad: (show_keypad && chunks[2].height > 0).then_some(chunks[2]),
    }
}

/// Renders the calculator UI to the frame
pub fn render(app: &CalculatorApp, frame: &mut Frame) {
    let area = frame.area();
    frame.render_widget(CalculatorUI::new(app), area);
}

/// Calculator UI widget
#[derive(Debug)]
pub struct CalculatorUI<'a> {
    app: &'a CalculatorApp,
}

impl<'a> CalculatorUI<'a> {
    /// Creates a new calculator UI widget
    #[must_use]
    pub fn new(app: &'a CalculatorApp) -> Self {
        Self { app }
    }

    fn style(&self, style: Style) -> Style {
        if self.app.colored() {
            style
        } else {
            Style::default()
        }
    }

    /// Renders the readout, right-aligned like a pocket calculator
    fn render_display(&self, area: Rect, buf: &mut Buffer) {
        let sequencer = self.app.sequencer();

        let text_style = if sequencer.is_error() {
            self.style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        } else {
            self.style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        };

        let paragraph = Paragraph::new(Span::styled(sequencer.display(), text_style))
            .alignment(Alignment::Right)
            .block(
                Block::default()
                    .title(" Display ")
                    .borders(Borders::ALL)
                    .border_style(self.style(Style::default().fg(Color::Yellow))),
            );

        paragraph.render(area, buf);
    }

    /// Renders the pending operator and key help
    fn render_status(&self, area: Rect, buf: &mut Buffer) {
        let pending = self
            .app
            .sequencer()
            .pending_operator()
            .map_or_else(|| " ".to_string(), |op| op.symbol().to_string());

        let line = Line::from(vec![
            Span::styled(
                format!(" {pending} "),
                self.style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            ),
            Span::styled(HELP_TEXT, self.style(Style::default().fg(Color::DarkGray))),
        ]);

        Paragraph::new(line).render(area, buf);
    }
}

impl Widget for CalculatorUI<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = layout(area, self.app.show_keypad());

        self.render_display(layout.display, buf);
        self.render_status(layout.status, buf);

        if let Some(keypad_area) = layout.keypad {
            KeypadWidget::new(self.app.keypad())
                .colored(self.app.colored())
                .render(keypad_area, buf);
        }
    }
}
