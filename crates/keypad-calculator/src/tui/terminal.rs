//! Terminal setup and the event loop

use std::io;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use tracing::{debug, info};

use super::app::CalculatorApp;
use super::input::{InputHandler, KeyAction};
use super::ui::render;
use crate::config::CliConfig;

/// Runs the calculator in the terminal until the user quits
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up, drawn to, or restored.
pub fn run(config: &CliConfig) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    info!(keypad = config.show_keypad, "starting terminal session");
    let result = run_app(&mut terminal, CalculatorApp::from_config(config));

    // Restore even when the loop failed
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    info!("terminal session ended");
    result
}

/// Draws and dispatches events until the app asks to quit
///
/// # Errors
///
/// Returns an error if drawing or reading events fails.
pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: CalculatorApp) -> io::Result<()> {
    let input_handler = InputHandler::new();

    while !app.should_quit() {
        terminal.draw(|frame| {
            app.resize(frame.area());
            render(&app, frame);
        })?;

        let action = input_handler.handle_event(&event::read()?);
        if action != KeyAction::None {
            debug!(?action, "input");
        }
        app.apply(action);
    }

    Ok(())
}
