//! Revboard - Live product review dashboard for the terminal
//!
//! A terminal UI application that polls a reviews endpoint on a fixed
//! interval and displays the collection as a table, keeping the last good
//! data on screen through transient outages.

mod app;
mod cli;
mod data;
mod logging;
mod sync;
mod ui;

use std::io;
use std::panic;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

use app::{App, AppState};
use cli::{Cli, StartupConfig};
use data::ReviewsClient;
use sync::{RefreshConfig, RefreshHandle};

/// Sets up a panic hook that restores the terminal before printing the panic message.
/// This ensures the terminal is usable even if the application panics.
fn setup_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Attempt to restore the terminal
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        // Call the original panic hook
        original_hook(panic_info);
    }));
}

/// Renders the UI based on the current application state
fn render_ui(frame: &mut ratatui::Frame, app: &App) {
    match app.state {
        AppState::Loading => {
            render_loading(frame);
        }
        AppState::ReviewList => {
            ui::render_review_table(frame, app);
        }
    }

    if app.show_help {
        ui::render_help_overlay(frame);
    }
}

/// Renders a loading message before the first fetch attempt settles
fn render_loading(frame: &mut ratatui::Frame) {
    use ratatui::{
        layout::{Alignment, Constraint, Direction, Layout},
        style::{Color, Style},
        widgets::Paragraph,
    };

    let area = frame.area();

    // Center the loading message vertically
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Length(3),
            Constraint::Percentage(45),
        ])
        .split(area);

    let loading_text = Paragraph::new("Loading reviews...")
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center);

    frame.render_widget(loading_text, chunks[1]);
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = StartupConfig::from_cli(&cli)?;

    // Best-effort file logging; the terminal belongs to the TUI
    if let Some(path) = logging::init_logging() {
        info!(log_file = %path.display(), endpoint = %config.endpoint, "starting revboard");
    }

    // Set up panic hook to restore terminal on crash
    setup_panic_hook();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app instance and start the background refresh lifecycle
    let mut app = App::new();
    let client = ReviewsClient::new(config.endpoint);
    let mut refresh = RefreshHandle::spawn(
        RefreshConfig {
            interval: config.interval,
        },
        client,
    );

    // Main event loop
    loop {
        // Apply any settled fetch outcomes, in completion order
        while let Some(message) = sync::try_recv(&mut refresh) {
            app.apply_refresh_message(message);
        }

        // Render UI
        terminal.draw(|f| render_ui(f, &app))?;

        // Poll for keyboard events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }

        // Forward manual refresh requests to the scheduler
        if app.refresh_requested {
            refresh.request_refresh();
            app.refresh_requested = false;
        }

        // Check if we should quit
        if app.should_quit {
            break;
        }
    }

    // Tear down the refresh lifecycle; late completions are discarded
    refresh.shutdown().await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    Ok(())
}
