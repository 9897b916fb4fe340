//! Pure state transitions: (App, Action) → mutated App.
//!
//! This is the core logic of the TUI. Fully testable without a terminal:
//! no I/O happens here, and time enters only as an explicit `Instant` that
//! is threaded through to the mode store. Actions that don't apply in the
//! current mode are no-ops.

use std::time::Instant;

use crate::command::{self, Command, Reply};
use crate::store::Mode;

use super::state::{Action, App, HistoryEntry};

/// Apply one semantic action to the app.
///
/// `now` stamps any timed store writes the action schedules. Typing only
/// lands in terminal mode; mode/theme actions and quit work everywhere.
/// Input during a transition is accepted — the store has no re-entrancy
/// guard and the UI doesn't pretend otherwise.
pub fn update(app: &mut App, action: &Action, now: Instant) {
    match action {
        Action::InsertChar(c) => {
            if app.store.mode() == Mode::Terminal {
                app.input.push(*c);
                app.scroll = 0;
            }
        }
        Action::Backspace => {
            if app.store.mode() == Mode::Terminal {
                app.input.pop();
            }
        }
        Action::Submit => {
            if app.store.mode() == Mode::Terminal {
                submit(app);
            }
        }
        Action::ScrollUp => {
            if app.store.mode() == Mode::Terminal {
                app.scroll = app.scroll.saturating_add(1);
            }
        }
        Action::ScrollDown => {
            if app.store.mode() == Mode::Terminal {
                app.scroll = app.scroll.saturating_sub(1);
            }
        }
        Action::ToggleMode => app.store.toggle_mode(now),
        Action::SetMode(mode) => app.store.set_mode(*mode),
        Action::Quit => app.should_quit = true,
    }
}

/// Fire any due timed writes. Called by the event loop on every tick.
pub fn tick(app: &mut App, now: Instant) {
    app.store.advance(now);
}

/// Execute the current input line against the profile.
///
/// Empty input is a no-op (just like pressing Enter at a shell prompt).
/// `clear` wipes the scrollback; everything else appends an entry.
fn submit(app: &mut App) {
    let line = std::mem::take(&mut app.input);
    if line.trim().is_empty() {
        return;
    }

    let parsed = Command::parse(&line);
    match command::execute(&parsed, &app.profile) {
        Reply::Clear => app.history.clear(),
        Reply::Output(output) => app.history.push(HistoryEntry {
            input: line,
            output,
        }),
    }
    app.scroll = 0;
}

// ============================================================================
// TESTS
// ============================================================================
