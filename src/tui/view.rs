//! Pure rendering: map App state to ratatui widget trees.
//!
//! Each mode has a dedicated render function; `render()` dispatches on the
//! store's current mode and picks the palette from its current theme. Line
//! building is pure (state in, lines out) so tests can assert on content
//! without a terminal; the only effect is `Frame::render_widget`.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use crate::command::{OutputKind, OutputStyle};
use crate::store::Mode;

use super::state::App;
use super::theme::{palette, Palette};

/// Prompt marker echoed before every command.
const PROMPT: &str = "visitor@portfolio:~$ ";

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the current frame.
pub fn render(app: &App, frame: &mut Frame) {
    let pal = palette(app.store.theme());
    let area = frame.area();

    // Paint the theme background across the whole frame first.
    frame.render_widget(Paragraph::new("").style(pal.base), area);

    let chunks = Layout::vertical([
        Constraint::Length(1), // title
        Constraint::Min(0),    // content
        Constraint::Length(1), // help
    ])
    .split(area);

    frame.render_widget(render_title(app, pal), chunks[0]);
    frame.render_widget(render_help(app, pal), chunks[2]);

    match app.store.mode() {
        Mode::Terminal => render_terminal(app, pal, frame, chunks[1]),
        Mode::Scene => render_scene(app, pal, frame, chunks[1]),
    }

    if app.store.is_transitioning() {
        render_transition_overlay(pal, frame, chunks[1]);
    }
}

// ============================================================================
// SHARED LAYOUT
// ============================================================================

fn render_title(app: &App, pal: &Palette) -> Paragraph<'static> {
    let mode_label = match app.store.mode() {
        Mode::Terminal => "terminal",
        Mode::Scene => "scene",
    };
    let mut spans = vec![Span::styled(
        format!(" {} — {} ", app.profile.name, mode_label),
        pal.title,
    )];
    if app.store.is_transitioning() {
        spans.push(Span::styled("· switching ·", pal.overlay));
    }
    Paragraph::new(Line::from(spans)).style(pal.base)
}

fn render_help(app: &App, pal: &Palette) -> Paragraph<'static> {
    let help_text = match app.store.mode() {
        Mode::Terminal => "[Tab] scene mode  [PgUp/PgDn] scroll  [^C] quit  — type `help` for commands",
        Mode::Scene => "[Tab] terminal mode  [^C] quit",
    };
    Paragraph::new(Span::styled(help_text, pal.dim)).style(pal.base)
}

// ============================================================================
// MODE: TERMINAL
// ============================================================================

fn render_terminal(app: &App, pal: &Palette, frame: &mut Frame, area: Rect) {
    let lines = terminal_lines(app, pal);

    // Bottom-anchored: show the newest lines unless the user scrolled up.
    let offset = scroll_offset(lines.len() as u16, area.height, app.scroll);

    let paragraph = Paragraph::new(lines)
        .style(pal.base)
        .wrap(Wrap { trim: false })
        .scroll((offset, 0));
    frame.render_widget(paragraph, area);
}

/// The full scrollback plus the live prompt, as styled lines.
fn terminal_lines(app: &App, pal: &Palette) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for entry in &app.history {
        lines.push(Line::from(vec![
            Span::styled(PROMPT, pal.accent),
            Span::styled(entry.input.clone(), pal.base),
        ]));

        let body_style = match entry.output.kind {
            OutputKind::Error => pal.danger,
            OutputKind::ChatInit => pal.heading,
            OutputKind::Text => match entry.output.style {
                Some(OutputStyle::Log) => pal.dim,
                Some(OutputStyle::Bio) | Some(OutputStyle::Project) => pal.base,
                Some(OutputStyle::Notes) | None => pal.base,
            },
        };
        for text_line in entry.output.content.lines() {
            lines.push(Line::from(Span::styled(text_line.to_string(), body_style)));
        }
        lines.push(Line::from(""));
    }

    // Live prompt with a block cursor.
    lines.push(Line::from(vec![
        Span::styled(PROMPT, pal.accent),
        Span::styled(app.input.clone(), pal.base),
        Span::styled("▌", pal.accent),
    ]));

    lines
}

/// How many lines to cut from the top so the bottom stays visible,
/// minus however far the user scrolled up.
fn scroll_offset(total: u16, height: u16, scrolled_up: u16) -> u16 {
    let overflow = total.saturating_sub(height);
    overflow.saturating_sub(scrolled_up)
}

// ============================================================================
// MODE: SCENE
// ============================================================================

fn render_scene(app: &App, pal: &Palette, frame: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new(scene_lines(app, pal))
        .style(pal.base)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// The scene dashboard: name plate plus one card per project.
fn scene_lines(app: &App, pal: &Palette) -> Vec<Line<'static>> {
    let profile = &app.profile;
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(format!("  {}", profile.name), pal.heading)),
        Line::from(Span::styled(format!("  {}", profile.role), pal.base)),
        Line::from(""),
    ];

    if !profile.stack.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("  stack ", pal.dim),
            Span::styled(profile.stack.join(" · "), pal.base),
        ]));
        lines.push(Line::from(""));
    }

    for project in &profile.projects {
        let width = project.title.chars().count() + 4;
        lines.push(Line::from(Span::styled(
            format!("  ╭{}╮", "─".repeat(width)),
            pal.dim,
        )));
        lines.push(Line::from(vec![
            Span::styled("  │  ", pal.dim),
            Span::styled(project.title.clone(), pal.heading),
            Span::styled("  │", pal.dim),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  ╰{}╯", "─".repeat(width)),
            pal.dim,
        )));
        lines.push(Line::from(Span::styled(
            format!("    {}", project.summary),
            pal.base,
        )));
        lines.push(Line::from(""));
    }

    if !profile.contact.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("  contact ", pal.dim),
            Span::styled(profile.contact.clone(), pal.accent),
        ]));
    }

    lines
}

// ============================================================================
// TRANSITION OVERLAY
// ============================================================================

fn render_transition_overlay(pal: &Palette, frame: &mut Frame, area: Rect) {
    let overlay_area = centered_line(area);
    let paragraph = Paragraph::new(Line::from(Span::styled(
        "· · · switching · · ·",
        pal.overlay,
    )))
    .centered()
    .style(pal.base);
    frame.render_widget(paragraph, overlay_area);
}

/// A one-line rect vertically centered in `area`.
fn centered_line(area: Rect) -> Rect {
    let y = area.y + area.height / 2;
    Rect::new(area.x, y.min(area.y + area.height.saturating_sub(1)), area.width, 1)
}

// ============================================================================
// TESTS
// ============================================================================
