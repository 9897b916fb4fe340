//! TUI module for the interactive portfolio.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: pure data types (App, Action, AppEvent)
//! - `update`: pure transitions
//! - `view`: pure rendering
//! - `theme`: palettes per theme
//! - `run`: the effects boundary (terminal, threads, event loop)

pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;
