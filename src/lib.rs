//! termfolio: a terminal-style developer portfolio TUI.

pub mod command;
pub mod profile;
pub mod store;
pub mod tui;
