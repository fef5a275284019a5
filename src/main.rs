use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{
        DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use docqa::api::DocQaClient;
use docqa::config::{get_config_path, Config};
use docqa::model::Theme;
use docqa::runner::run_app;
use docqa::services::api::spawn_api_service;
use docqa::services::TerminalEvents;
use docqa::storage::Preferences;
use docqa::{logging, App};

/// Terminal client for the document Q&A service
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to the data directory
    #[arg(short, long)]
    debug: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,

    /// Backend base URL (overrides the config file)
    #[arg(short, long)]
    url: Option<String>,

    /// Use the light theme for this session without saving it
    #[arg(long)]
    light: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init(args.debug)?;

    let mut config = match get_config_path(args.config)? {
        Some(path) => {
            tracing::info!("Loading config from {}", path.display());
            Config::load(&path)?
        }
        None => Config::default(),
    };
    if let Some(url) = args.url {
        config.base_url = url;
    }

    let prefs = match Preferences::open_default() {
        Ok(prefs) => prefs,
        Err(e) => {
            tracing::warn!("Preferences unavailable, theme will not persist: {:#}", e);
            Preferences::in_memory()?
        }
    };

    let client = DocQaClient::new(config.base_url.clone());
    let (api_tx, mut api_rx) = spawn_api_service(client);

    let mut app = App::new(&config, prefs, api_tx);
    if args.light {
        app.force_theme(Theme::Light);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableBracketedPaste,
        EnableMouseCapture
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app, &mut api_rx, &mut TerminalEvents);

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!("Exited with error: {:#}", e);
    }
    result
}
