//! TUI state algebra: pure types, zero effects.
//!
//! The transition function (`update`) and rendering layer (`view`) both
//! program against these types. The `ModeStore` owns the mode/theme state
//! machine; `App` carries everything else the session needs — the profile
//! being rendered, the terminal scrollback, and the live input line.

use crossterm::event::KeyEvent;

use crate::command::CommandOutput;
use crate::profile::Profile;
use crate::store::{Mode, ModeStore};

// ============================================================================
// APP EVENTS
// ============================================================================

/// Everything the event loop can receive.
///
/// Key events come from the crossterm reader thread over an mpsc channel;
/// Tick is synthesized by the loop's receive timeout so timed store writes
/// fire while the user is idle.
#[derive(Debug)]
pub enum AppEvent {
    /// A terminal key event from the crossterm reader thread.
    Key(KeyEvent),
    /// Periodic wakeup; drives `ModeStore::advance`.
    Tick,
}

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// One executed command in the scrollback: the echoed prompt line and the
/// reply it produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub input: String,
    pub output: CommandOutput,
}

/// Top-level TUI model.
#[derive(Debug)]
pub struct App {
    /// Mode/theme state machine.
    pub store: ModeStore,

    /// Content everything is rendered from.
    pub profile: Profile,

    /// Live input line (terminal mode only).
    pub input: String,

    /// Executed commands, oldest first. `clear` wipes it.
    pub history: Vec<HistoryEntry>,

    /// Lines scrolled up from the bottom of the scrollback.
    pub scroll: u16,

    /// Set to true when the app should exit on the next tick.
    pub should_quit: bool,
}

impl App {
    pub fn new(profile: Profile) -> Self {
        App {
            store: ModeStore::new(),
            profile,
            input: String::new(),
            history: Vec::new(),
            scroll: 0,
            should_quit: false,
        }
    }

    /// Like `new`, but jump straight to the given starting mode.
    pub fn starting_in(profile: Profile, mode: Mode) -> Self {
        let mut app = App::new(profile);
        app.store.set_mode(mode);
        app
    }
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
///
/// The effects layer maps key presses to Actions; the transition function
/// decides what each means in the current mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Type a character into the input line.
    InsertChar(char),
    /// Delete the character before the cursor.
    Backspace,
    /// Execute the input line.
    Submit,
    /// Scroll the scrollback up (towards older output).
    ScrollUp,
    /// Scroll the scrollback down (towards the prompt).
    ScrollDown,
    /// Animated mode switch (raises the transitioning flag).
    ToggleMode,
    /// Jump straight to a mode, no animation.
    SetMode(Mode),
    /// Quit the application.
    Quit,
}

// ============================================================================
// TESTS
// ============================================================================
