//! Menu bar demo - full-screen terminal host for the menu bar widget.
//!
//! Loads the bar configuration, sets up the terminal and runs the main
//! event loop. The content area pages along with the selected tab.

mod app;
mod state;
mod ui;

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind,
        KeyModifiers, MouseButton, MouseEventKind,
    },
    execute,
};
use ratatui::prelude::*;
use ratatui::DefaultTerminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use app::App;
use menubar_tui::config::{default_config_path, MenuBarConfig};
use state::Action;

/// Terminal session for the demo.
///
/// `ratatui::init` enters raw mode and the alternate screen and installs a
/// panic hook that restores them; mouse capture is layered on top and
/// released first on drop.
struct TerminalSession {
    terminal: DefaultTerminal,
}

impl TerminalSession {
    fn start() -> Result<Self> {
        let terminal = ratatui::init();
        if let Err(e) = execute!(io::stdout(), EnableMouseCapture) {
            ratatui::restore();
            return Err(e.into());
        }
        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), DisableMouseCapture);
        ratatui::restore();
    }
}

/// Initialize logging into a file; stdout belongs to the alternate screen.
fn init_logging() {
    let log_file = dirs::cache_dir()
        .map(|dir| dir.join("menubar-tui.log"))
        .and_then(|path| {
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .ok()
        });

    let file_layer = log_file.map(|file| {
        tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
    });

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "menubar_tui=info,menubar_demo=info".into()),
        ))
        .with(file_layer)
        .init();
}

/// Target frame rate for UI rendering (60fps = ~16ms per frame)
const FRAME_DURATION: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    init_logging();
    tracing::info!("Starting menu bar demo v{}", env!("CARGO_PKG_VERSION"));

    // Configuration errors are fatal: fail before touching the terminal
    let config_path = default_config_path();
    let config = MenuBarConfig::load_from(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;

    let mut app = App::new(&config);
    let mut session = TerminalSession::start()?;
    let result = run_app(&mut session.terminal, &mut app, &config_path);
    drop(session);

    match result {
        Ok(()) => {
            tracing::info!("Menu bar demo exited cleanly");
            Ok(())
        }
        Err(e) => {
            tracing::error!("Application error: {}", e);
            Err(e)
        }
    }
}

/// Main application loop.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App, config_path: &Path) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        // Drive the indicator animation from wall-clock time
        let now = Instant::now();
        app.tick(now.duration_since(last_tick));
        last_tick = now;

        // Only redraw if state has changed (dirty-flag optimization)
        if app.take_needs_redraw() {
            terminal.draw(|f| ui::render(f, app))?;
        }

        if event::poll(FRAME_DURATION)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if key.code == KeyCode::Char('r') {
                        reload_tabs(app, config_path);
                    } else if let Some(action) = key_action(key) {
                        app.update(action);
                    }
                }
                Event::Mouse(mouse) => {
                    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                        app.update(Action::Click {
                            column: mouse.column,
                            row: mouse.row,
                        });
                    }
                }
                Event::Resize(_, _) => {
                    // Terminal resized - the bar picks up its new bounds on draw
                    app.mark_dirty();
                }
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Re-read the config file and replace the tabs with its list.
///
/// A broken file at this point only logs; the running bar keeps its tabs.
fn reload_tabs(app: &mut App, config_path: &Path) {
    match MenuBarConfig::load_from(config_path) {
        Ok(config) => app.update(Action::SetTabs(config.tabs)),
        Err(e) => tracing::warn!("Config reload failed: {}", e),
    }
}

/// Map a key press to an action.
fn key_action(key: event::KeyEvent) -> Option<Action> {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(Action::Quit),
        (KeyCode::Char('q'), _) | (KeyCode::Esc, _) => Some(Action::Quit),
        (KeyCode::Right, _) | (KeyCode::Char('l'), _) | (KeyCode::Tab, _) => Some(Action::TabNext),
        (KeyCode::Left, _) | (KeyCode::Char('h'), _) | (KeyCode::BackTab, _) => {
            Some(Action::TabPrev)
        }
        (KeyCode::Char(c @ '1'..='9'), _) => {
            c.to_digit(10).map(|d| Action::TabSelect(d as usize - 1))
        }
        (KeyCode::Char('+'), _) | (KeyCode::Char('='), _) => Some(Action::IndicatorGrow),
        (KeyCode::Char('-'), _) => Some(Action::IndicatorShrink),
        (KeyCode::Char('c'), _) => Some(Action::IndicatorColorCycle),
        _ => None,
    }
}
