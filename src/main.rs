//! uni-companion binary: composition root and terminal event loop.

use std::fs::File;
use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use uni_companion::app::App;
use uni_companion::config::Config;
use uni_companion::controller::{ResourcesController, ScheduleController};
use uni_companion::repository::{AdapterRepository, BundledRepository, Repository};
use uni_companion::source::HttpProvider;
use uni_companion::{input, ui};

const LOG_FILE: &str = "uni-companion.log";

// ---------------------------------------------------------------------------
// RAII terminal guard — idiomatic cleanup even on panic
// ---------------------------------------------------------------------------

/// Manages terminal raw-mode and alternate-screen lifetime via [`Drop`].
///
/// Constructing this struct enters raw mode + alternate screen.  When the
/// value is dropped (normally or during stack unwinding) it restores the
/// terminal.
struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalGuard {
    fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Install a panic hook that restores the terminal before printing the
/// panic message.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(info);
    }));
}

/// Log to a file; stdout belongs to the TUI.
fn init_logging() -> Result<()> {
    let file = File::create(LOG_FILE).with_context(|| format!("creating {LOG_FILE}"))?;

    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "uni_companion=info".to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Arc::new(file))
                .with_ansi(false),
        )
        .init();

    Ok(())
}

fn build_repository(config: &Config) -> Result<Arc<dyn Repository>> {
    let repository: Arc<dyn Repository> = match config {
        Config::Bundled(dir) => {
            let repo = BundledRepository::new(dir.clone());
            info!(dir = %repo.dir().display(), "using bundled assets");
            Arc::new(repo)
        }
        Config::Remote(url) => {
            let provider = HttpProvider::new(url.clone()).context("building HTTP client")?;
            info!(base = provider.base_url(), "using remote endpoint");
            Arc::new(AdapterRepository::new(provider))
        }
    };
    Ok(repository)
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() -> Result<()> {
    init_logging()?;
    install_panic_hook();

    // -- parse arguments -----------------------------------------------------
    let config = Config::from_arg(std::env::args().nth(1));

    // -- composition root ----------------------------------------------------
    // One repository, shared by both controllers.  Each controller starts its
    // first fetch as soon as it is built.
    let repository = build_repository(&config)?;
    let schedule = ScheduleController::new(Arc::clone(&repository));
    let resources = ResourcesController::new(repository);

    // -- terminal setup (RAII — Drop restores on exit or panic) --------------
    let mut guard = TerminalGuard::new()?;
    let mut app = App::new(schedule, resources, config.describe());

    // -- main event loop -----------------------------------------------------
    // Runs at ~10 fps (100 ms tick).  Each iteration:
    //   1. Pull state transitions from the controllers.
    //   2. Render the UI.
    //   3. Poll for keyboard input (up to tick_rate).
    let tick_rate = Duration::from_millis(100);

    loop {
        app.tick();

        guard.terminal.draw(|f| ui::draw(&mut app, f))?;

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                input::handle_key_event(&mut app, key);
            }
        }

        if app.quit {
            break;
        }
    }

    info!("shutting down");
    Ok(())
}
