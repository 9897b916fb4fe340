//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui.
//! Kept minimal — all intelligence lives in the pure layers.
//!
//! Architecture: a key reader thread feeds an mpsc channel; the event loop
//! consumes it with a receive timeout so that timed store writes (mode
//! transitions) fire on schedule even while the user types nothing.

use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::profile::Profile;
use crate::store::Mode;

use super::state::{Action, App, AppEvent};
use super::update::{tick, update};
use super::view::render;

/// Receive timeout for the event loop. Short enough that a 400ms mode flip
/// never lands visibly late.
const TICK_INTERVAL: Duration = Duration::from_millis(50);

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// Returns None for keys that don't map to any action. Printable characters
/// become input; the update layer decides whether the current mode accepts
/// them.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        // Mode switching
        KeyCode::Tab => Some(Action::ToggleMode),
        KeyCode::F(1) => Some(Action::SetMode(Mode::Terminal)),
        KeyCode::F(2) => Some(Action::SetMode(Mode::Scene)),

        // Scrollback
        KeyCode::PageUp => Some(Action::ScrollUp),
        KeyCode::PageDown => Some(Action::ScrollDown),

        // Input line
        KeyCode::Enter => Some(Action::Submit),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char(c) => Some(Action::InsertChar(c)),

        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// BACKGROUND THREADS
// ============================================================================

/// Spawn a thread that reads crossterm events and forwards key presses.
fn spawn_key_reader(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if tx.send(AppEvent::Key(key)).is_err() {
                        break; // receiver dropped, TUI is shutting down
                    }
                }
                Ok(_) => {} // ignore release/repeat, mouse, resize, etc.
                Err(_) => break,
            }
        }
    });
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the TUI event loop until the user quits.
///
/// `start_mode` jumps straight to a mode before the first frame (the
/// `--mode` flag); None starts in the default terminal mode.
pub fn run(profile: Profile, start_mode: Option<Mode>) -> io::Result<()> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;

    let mut app = match start_mode {
        Some(mode) => App::starting_in(profile, mode),
        None => App::new(profile),
    };

    let (tx, rx) = mpsc::channel::<AppEvent>();
    spawn_key_reader(tx);

    loop {
        terminal.draw(|frame| render(&app, frame))?;

        if app.should_quit {
            break;
        }

        let app_event = match rx.recv_timeout(TICK_INTERVAL) {
            Ok(e) => e,
            Err(mpsc::RecvTimeoutError::Timeout) => AppEvent::Tick,
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        };

        match app_event {
            AppEvent::Key(key) => {
                if let Some(action) = map_key(key) {
                    update(&mut app, &action, Instant::now());
                }
            }
            AppEvent::Tick => {}
        }

        // Timed writes fire whether the wakeup was a key or a timeout.
        tick(&mut app, Instant::now());
    }

    restore_terminal()?;
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
