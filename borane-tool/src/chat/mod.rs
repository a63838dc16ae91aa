mod app;
mod input;
mod ui;

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tracing::info;

pub use app::ChatApp;

use crate::config::Settings;
use crate::error::BhError;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub async fn run(settings: Settings) -> Result<(), BhError> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = ChatApp::new(settings);

    let result = run_loop(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    info!(messages = app.widget.log().len(), "Chat session ended");

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut ChatApp,
) -> Result<(), BhError> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        // Wake up no later than the next due reply
        if event::poll(app.poll_timeout(POLL_INTERVAL))? {
            let event = event::read()?;
            input::handle_event(app, event);
        }

        app.poll_replies();

        if app.should_quit {
            break;
        }

        // Let spawned backend requests make progress
        tokio::task::yield_now().await;
    }

    Ok(())
}
