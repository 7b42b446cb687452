//! Calculator TUI Example
//!
//! Run with: cargo run --example calculator_tui --features tui [CONFIG.json]

use std::io;
use std::path::PathBuf;

use calcpad::config::CalculatorConfig;
use calcpad::logging::init_file_logging;
use calcpad::tui::{layout, render, CalculatorApp, InputHandler};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, MouseButton, MouseEvent,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => CalculatorConfig::load(&path)?,
        None => CalculatorConfig::default(),
    };

    if let Some(log_file) = &config.log_file {
        init_file_logging(log_file, &config.log_filter)?;
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, CalculatorApp::with_config(config));

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        tracing::error!(%err, "calculator exited with an error");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: CalculatorApp,
) -> Result<(), Box<dyn std::error::Error>> {
    let input_handler = InputHandler::new();
    let mut area = Rect::default();

    tracing::info!("calculator started");

    while !app.should_quit() {
        terminal.draw(|frame| {
            area = frame.area();
            render(&app, frame);
        })?;

        match event::read()? {
            Event::Key(key) => app.handle_action(input_handler.handle_key(key)),
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => {
                if let Some(keypad) = layout(&app, area).keypad {
                    app.click(keypad, column, row);
                }
            }
            _ => {}
        }
    }

    tracing::info!("calculator stopped");
    Ok(())
}
