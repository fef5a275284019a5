use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::{backend::Backend, Terminal};
use tokio::sync::mpsc::UnboundedReceiver;

use crate::handlers::map_event;
use crate::messages::Command;
use crate::services::{ApiResponse, EventSource};
use crate::{ui, App};

/// Idle wait for input between frames
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Drive the app until it asks to quit.
///
/// Each pass renders, applies finished API responses, runs timers, then
/// waits briefly for one input event.
pub fn run_app<B: Backend, E: EventSource>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    api_rx: &mut UnboundedReceiver<ApiResponse>,
    events: &mut E,
) -> Result<()> {
    app.dispatch(Command::RefreshHealth);

    loop {
        // Always render (Elm Architecture approach)
        terminal.draw(|f| ui::render(f, &mut app.model))?;

        while let Ok(response) = api_rx.try_recv() {
            app.handle_api_response(response);
        }

        app.tick(Instant::now());

        if app.should_quit() {
            tracing::info!("Quit requested");
            break;
        }

        if let Some(event) = events.poll_event(POLL_INTERVAL)? {
            for command in map_event(&app.model, event) {
                app.dispatch(command);
            }
        }
    }

    Ok(())
}
