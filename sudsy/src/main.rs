//! sudsy - shower thought generator
//!
//! Terminal UI for pulling random shower thoughts by topic, vibe, and spice,
//! copying them, and keeping a short list of favorites.

mod app;
mod clipboard;
mod decor;
mod theme;
mod ui;

use std::io;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use sudsy_core::{load_state, load_thoughts, Config, FileStore, LoadedContent, Picker};

use crate::app::App;
use crate::clipboard::SystemClipboard;
use crate::decor::Decor;

#[derive(Parser)]
#[command(name = "sudsy")]
#[command(about = "Random shower thoughts in your terminal")]
#[command(version)]
struct Args {
    /// Thought list to load instead of the configured one (path or http(s) URL)
    #[arg(long, value_name = "PATH|URL")]
    content: Option<String>,

    /// Disable floating emoji
    #[arg(long)]
    no_animation: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration, then apply command-line overrides
    let mut config = Config::load().context("failed to load configuration")?;
    if let Some(content) = args.content {
        config.content.source = Some(content);
    }
    if args.no_animation {
        config.animation.enabled = false;
    }

    // Initialize logging (to file, not stdout since we have a TUI)
    let _log_guard =
        sudsy_core::logging::init(&config.logging).context("failed to initialize logging")?;

    tracing::info!("sudsy TUI starting up");

    let content = load_content(&config)?;
    let picker = Picker::with_rng(content.thoughts, StdRng::from_os_rng())
        .context("no thoughts to show")?;

    let store = FileStore::default_location();
    tracing::info!(path = %store.dir().display(), "Using state directory");
    let state = load_state(&store);

    let mut decor = Decor::new(&config.animation, StdRng::from_os_rng());
    decor.startup_burst();

    let mut app = App::new(
        picker,
        state,
        Box::new(store),
        Box::new(SystemClipboard::new()),
        decor,
        content.origin,
    );

    // Setup terminal
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("failed to create terminal")?;

    // Run the main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().context("failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("failed to leave alternate screen")?;
    terminal.show_cursor().context("failed to show cursor")?;

    tracing::info!("sudsy TUI shutting down");

    result
}

/// Load the thought list, with a spinner while an external source is read.
fn load_content(config: &Config) -> Result<LoadedContent> {
    let Some(source) = config.content.source.as_deref() else {
        return Ok(load_thoughts(&config.content));
    };

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .context("invalid spinner template")?,
    );
    pb.set_message(format!("Loading thoughts from {source}"));
    pb.enable_steady_tick(Duration::from_millis(80));

    let content = load_thoughts(&config.content);

    pb.finish_and_clear();
    Ok(content)
}

/// Run the main application loop.
fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        // Advance animations and flash timers
        let now = Instant::now();
        app.tick(now - last_tick);
        last_tick = now;

        // Render
        terminal.draw(|frame| ui::render(frame, app))?;

        // Handle events
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        // Check if we should quit
        if app.should_quit {
            break;
        }
    }

    Ok(())
}
