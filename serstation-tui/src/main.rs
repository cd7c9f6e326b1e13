//! serstation-tui - Terminal front-end for the Serstation feed
//!
//! Browse the car-community feed, filter by group, like posts and write
//! new ones against the in-memory store.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use libserstation::logging::{LogFormat, LogTarget, LoggingConfig};
use libserstation::{Config, Store};

use serstation_tui::{
    app::{event::EventHandler, event::TuiEvent, Action, App, UiState},
    terminal::{install_panic_hook, TerminalSession},
    ui::{self, composer::ComposerWidget},
};

#[derive(Parser, Debug)]
#[command(name = "serstation-tui")]
#[command(about = "Terminal front-end for the Serstation car-community feed", long_about = None)]
struct Cli {
    /// Config file (defaults to ~/.config/serstation/config.toml)
    #[arg(short, long, env = "SERSTATION_CONFIG")]
    config: Option<PathBuf>,

    /// Log output format (text, json or pretty); overrides SERSTATION_LOG_FORMAT
    #[arg(long)]
    log_format: Option<LogFormat>,

    /// Write logs to this file; nothing is logged without it
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        let mut logging = LoggingConfig::from_env().with_target(LogTarget::File(path.clone()));
        logging.format = cli.log_format.unwrap_or(logging.format);
        logging.verbose = cli.verbose;
        logging
            .init()
            .with_context(|| format!("cannot open log file {}", path.display()))?;
    }

    let config = load_config(&cli)?;
    tracing::info!(
        tick_rate_ms = config.ui.tick_rate_ms,
        default_group = ?config.feed.default_group,
        "starting serstation-tui"
    );
    let store = Store::from_config(&config).context("cannot build initial feed")?;
    let ui_state = UiState::new(config.profile.session(), config.ui.clone());

    install_panic_hook();
    let mut session = TerminalSession::enter()?;

    let app = run_app(&mut session, App::new(ui_state, store), config.ui.tick_rate_ms)?;

    let feed = app.into_store().into_state();
    tracing::info!(authenticated = feed.is_authenticated(), "session ended");
    Ok(())
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    match &cli.config {
        Some(path) => {
            let mut config = Config::load_from_path(path)
                .with_context(|| format!("cannot load config {}", path.display()))?;
            config.apply_env_overrides();
            Ok(config)
        }
        None => Ok(Config::load()?),
    }
}

fn run_app(
    session: &mut TerminalSession,
    mut app: App,
    tick_rate_ms: u64,
) -> serstation_tui::Result<App> {
    let mut composer = ComposerWidget::new();
    let event_handler = EventHandler::new(tick_rate_ms);

    loop {
        session.terminal.draw(|frame| {
            ui::render(frame, &app.ui, app.feed(), &mut composer);
        })?;

        let action = match event_handler.next()? {
            // The panel owns the keyboard unless an overlay is up
            TuiEvent::Key(key) if app.feed().create_post_panel_open && !app.ui.help_visible => {
                composer.input(key).into_action()
            }
            other => Some(Action::from(other)),
        };

        if let Some(action) = action {
            app.handle(action);
        }

        if !app.feed().create_post_panel_open && !composer.is_empty() {
            composer.clear();
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(app)
}
