//! TUI color semantics and palettes.
//!
//! Two palettes, one per `Theme`: dark for terminal mode, light for scene
//! mode. Pure data — consumed by the rendering layer for visual consistency.
//!
//! Color semantics (shared across palettes):
//! - accent: interactive elements, the prompt, keybinding hints
//! - danger: error replies
//! - dim: de-emphasized metadata (help line, echoed prompts)
//! - title: the top bar

use ratatui::style::{Color, Modifier, Style};

use crate::store::Theme;

/// Semantic styles for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Default text on the default background.
    pub base: Style,
    /// Prompt marker and interactive hints.
    pub accent: Style,
    /// Error replies.
    pub danger: Style,
    /// De-emphasized text.
    pub dim: Style,
    /// Title bar.
    pub title: Style,
    /// Project/bio headers inside output.
    pub heading: Style,
    /// The transition overlay text.
    pub overlay: Style,
}

/// Terminal mode: light text on a dark background.
pub const DARK: Palette = Palette {
    base: Style::new().fg(Color::White).bg(Color::Black),
    accent: Style::new().fg(Color::Green),
    danger: Style::new().fg(Color::Red),
    dim: Style::new().fg(Color::DarkGray),
    title: Style::new()
        .fg(Color::Green)
        .bg(Color::Black)
        .add_modifier(Modifier::BOLD),
    heading: Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    overlay: Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD),
};

/// Scene mode: dark text on a light background.
pub const LIGHT: Palette = Palette {
    base: Style::new().fg(Color::Black).bg(Color::White),
    accent: Style::new().fg(Color::Blue),
    danger: Style::new().fg(Color::Red),
    dim: Style::new().fg(Color::Gray),
    title: Style::new()
        .fg(Color::Blue)
        .bg(Color::White)
        .add_modifier(Modifier::BOLD),
    heading: Style::new().fg(Color::Magenta).add_modifier(Modifier::BOLD),
    overlay: Style::new().fg(Color::Blue).add_modifier(Modifier::BOLD),
};

/// The palette for a theme.
pub fn palette(theme: Theme) -> &'static Palette {
    match theme {
        Theme::Dark => &DARK,
        Theme::Light => &LIGHT,
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn themes_select_distinct_palettes() {
        assert_ne!(palette(Theme::Dark), palette(Theme::Light));
        assert_eq!(palette(Theme::Dark), &DARK);
        assert_eq!(palette(Theme::Light), &LIGHT);
    }

    #[test]
    fn dark_palette_is_light_on_dark() {
        assert_eq!(DARK.base.fg, Some(Color::White));
        assert_eq!(DARK.base.bg, Some(Color::Black));
    }

    #[test]
    fn light_palette_is_dark_on_light() {
        assert_eq!(LIGHT.base.fg, Some(Color::Black));
        assert_eq!(LIGHT.base.bg, Some(Color::White));
    }

    #[test]
    fn titles_are_bold_in_both_palettes() {
        assert!(DARK.title.add_modifier.contains(Modifier::BOLD));
        assert!(LIGHT.title.add_modifier.contains(Modifier::BOLD));
    }
}
