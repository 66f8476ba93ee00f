mod action;
mod app;
mod backend;
mod command;
mod domain;
mod i18n;
mod links;
mod ui;
mod update;

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;

use action::Action;
use app::App;
use backend::{Backend, BackendEvent, LocalBackend};
use command::{Command, execute_command};

#[derive(Parser)]
#[command(name = "ccsuite", version)]
#[command(about = "Terminal launcher and configurator for the Claude Code CLI")]
struct Cli {
    /// Config file path (defaults to ~/.claude_model_config.json)
    #[arg(long)]
    config: Option<PathBuf>,

    /// UI language tag (en, zh-Hans, zh-Hant, ko, ja, de, fr);
    /// defaults to the system locale
    #[arg(long)]
    lang: Option<String>,
}

/// Log to a file in the home directory; the terminal is owned by the UI.
fn init_logging() {
    let Some(home) = dirs::home_dir() else {
        return;
    };
    let Ok(file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(home.join(".ccsuite.log"))
    else {
        return;
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
}

fn locale_tag(cli_lang: Option<String>) -> String {
    cli_lang
        .or_else(|| std::env::var("LC_ALL").ok().filter(|v| !v.is_empty()))
        .or_else(|| std::env::var("LANG").ok().filter(|v| !v.is_empty()))
        .unwrap_or_else(|| "en".to_string())
}

fn spawn_command(
    command: Command,
    backend: Arc<dyn Backend>,
    tx: mpsc::UnboundedSender<Action>,
) {
    tokio::spawn(async move {
        if let Some(action) = execute_command(command, backend).await {
            let _ = tx.send(action);
        }
    });
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();
    init_logging();

    let cli = Cli::parse();
    let tag = locale_tag(cli.lang);
    let lang = i18n::detect(&tag);

    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<BackendEvent>();
    let backend: Arc<dyn Backend> = Arc::new(LocalBackend::new(cli.config, event_tx));

    let mut app = App::new(lang);
    app.home_dir = backend.user_home_dir().await;

    for command in [
        Command::SetLanguage { tag },
        Command::CheckEnvironment,
        Command::LoadConfig,
    ] {
        spawn_command(command, backend.clone(), action_tx.clone());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let terminal_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(terminal_backend)?;

    // Keyboard reader; release events are noise on Windows terminals.
    {
        let tx = action_tx.clone();
        std::thread::spawn(move || {
            loop {
                match event::read() {
                    Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                        if tx
                            .send(Action::Input {
                                code: key.code,
                                modifiers: key.modifiers,
                            })
                            .is_err()
                        {
                            break;
                        }
                    }
                    Ok(_) => {}
                    Err(_) => break,
                }
            }
        });
    }

    let mut tick = tokio::time::interval(Duration::from_millis(250));
    let result: Result<()> = loop {
        if let Err(e) = terminal.draw(|frame| ui::render(frame, &app)) {
            break Err(e.into());
        }

        let action = tokio::select! {
            Some(action) = action_rx.recv() => action,
            Some(event) = event_rx.recv() => event.into(),
            _ = tick.tick() => Action::Tick,
        };

        for command in update::update(&mut app, action) {
            spawn_command(command, backend.clone(), action_tx.clone());
        }

        if app.should_quit {
            break Ok(());
        }
    };

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
