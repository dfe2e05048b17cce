//! UI rendering for the TUI.
//!
//! Every render function draws into the frame it is handed and reads only the
//! [`App`], so the whole screen can be rendered against a `TestBackend`.

use chrono::Utc;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use sudsy_core::catalog::{spice_label, spice_name, TagKind, TagOption};
use sudsy_core::format::{format_saved_time, sanitize_for_terminal, tag_line};
use sudsy_core::state::MAX_SAVED;
use sudsy_core::types::MAX_SPICE;
use sudsy_core::{AppState, ContentOrigin};

use crate::app::{Action, App};
use crate::decor::Decor;
use crate::theme::{palette, Palette};

/// Widest the card column gets; floaters show in the margins.
const MAX_COLUMN_WIDTH: u16 = 76;

/// Shown on the saved panel when nothing is saved.
pub const EMPTY_SAVED_MESSAGE: &str = "None yet. Save your first brain-spark. 💡";

/// Render the application UI.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let colors = palette(app.state().theme);

    frame.render_widget(Block::default().style(Style::default().bg(colors.bg)), area);
    render_floaters(frame, &app.decor, colors, area);

    let column = centered_column(area);
    let saved_height = saved_panel_height(app.state().saved.len());

    let chunks = Layout::vertical([
        Constraint::Length(3),            // Header
        Constraint::Length(5),            // Selectors
        Constraint::Min(7),               // Thought card
        Constraint::Length(saved_height), // Saved list
        Constraint::Length(1),            // Footer
    ])
    .split(column);

    render_header(frame, app, colors, chunks[0]);
    render_selectors(frame, app.state(), &app.decor, colors, chunks[1]);
    render_thought(frame, app, colors, chunks[2]);
    render_saved(frame, app, colors, chunks[3]);
    render_footer(frame, app, colors, chunks[4]);
}

fn centered_column(area: Rect) -> Rect {
    let width = area.width.min(MAX_COLUMN_WIDTH);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y, width, area.height)
}

/// Visible lines in the saved panel; longer lists scroll.
const SAVED_LINES: usize = 8;

fn saved_panel_height(count: usize) -> u16 {
    // Two lines per item plus borders, capped so the card keeps its room.
    let lines = (count.max(1) * 2).min(SAVED_LINES) as u16;
    lines + 2
}

/// A bordered panel over a cleared background.
fn panel<'a>(title: &'a str, colors: Palette, accent: Color) -> Block<'a> {
    Block::default()
        .title(Span::styled(title, Style::default().fg(accent).bold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.surface).fg(colors.text))
}

/// Render the rising emoji in the background.
fn render_floaters(frame: &mut Frame, decor: &Decor, colors: Palette, area: Rect) {
    for floater in decor.floaters() {
        let Some((x, y)) = floater.position(area) else {
            continue;
        };
        let mut style = Style::default().fg(decor.accent(floater.accent)).bg(colors.bg);
        if floater.is_fading() {
            style = style.add_modifier(Modifier::DIM);
        }
        let paragraph = Paragraph::new(Span::styled(floater.glyph, style));
        frame.render_widget(paragraph, Rect::new(x, y, 2, 1));
    }
}

fn render_header(frame: &mut Frame, app: &App, colors: Palette, area: Rect) {
    let accents = app.decor.accents();
    let theme_badge = format!(" {} ", app.state().theme.as_str());
    let origin = match &app.origin {
        ContentOrigin::External(_) => "external",
        ContentOrigin::Embedded => "built-in",
    };

    let line = Line::from(vec![
        Span::styled("🚿 ", Style::default().fg(accents[1])),
        Span::styled("sudsy", Style::default().fg(accents[0]).bold()),
        Span::styled(" · shower thoughts ", Style::default().fg(colors.muted)),
        Span::styled(
            theme_badge,
            Style::default().fg(colors.surface).bg(accents[2]).bold(),
        ),
        Span::styled(
            format!(" · {} {}", app.content_count(), origin),
            Style::default().fg(colors.muted),
        ),
    ]);

    frame.render_widget(Clear, area);
    let header = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(colors.border))
                .style(Style::default().bg(colors.bg)),
        );
    frame.render_widget(header, area);
}

/// Single-select options with the active key highlighted.
fn option_line(
    label: &'static str,
    options: &[TagOption],
    selected: &str,
    accent: Color,
    colors: Palette,
) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!("{label:<7}"),
        Style::default().fg(colors.muted),
    )];
    for option in options {
        let text = format!(" {} ", option.display());
        let span = if option.key == selected {
            Span::styled(text, Style::default().fg(colors.surface).bg(accent).bold())
        } else {
            Span::styled(text, Style::default().fg(colors.text))
        };
        spans.push(span);
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn spice_line(level: u8, accent: Color, colors: Palette) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!("{:<7}", "Spice"),
        Style::default().fg(colors.muted),
    )];
    for step in 1..=MAX_SPICE {
        let (glyph, color) = if step <= level {
            ("● ", accent)
        } else {
            ("○ ", colors.muted)
        };
        spans.push(Span::styled(glyph, Style::default().fg(color)));
    }
    spans.push(Span::styled(
        format!(" {}", spice_label(level)),
        Style::default().fg(colors.text).bold(),
    ));
    Line::from(spans)
}

fn render_selectors(
    frame: &mut Frame,
    state: &AppState,
    decor: &Decor,
    colors: Palette,
    area: Rect,
) {
    let accents = decor.accents();
    let lines = vec![
        option_line(
            "Topic",
            TagKind::Category.options(),
            &state.category_key,
            accents[0],
            colors,
        ),
        option_line(
            "Vibe",
            TagKind::Vibe.options(),
            &state.vibe_key,
            accents[1],
            colors,
        ),
        spice_line(state.spice_level, accents[3], colors),
    ];

    frame.render_widget(Clear, area);
    let selectors = Paragraph::new(lines).block(panel(" Filters ", colors, accents[4]));
    frame.render_widget(selectors, area);
}

/// `Category • Vibe • Spice` labels for the active filter.
pub fn meta_line(state: &AppState) -> String {
    format!(
        "{} • {} • {}",
        TagKind::Category.label_for(&state.category_key),
        TagKind::Vibe.label_for(&state.vibe_key),
        spice_name(state.spice_level)
    )
}

fn render_thought(frame: &mut Frame, app: &App, colors: Palette, area: Rect) {
    let accents = app.decor.accents();
    frame.render_widget(Clear, area);
    let block = panel(" Shower Thought ", colors, accents[0]);

    let Some(thought) = app.current() else {
        let prompt = Paragraph::new(vec![
            Line::default(),
            Line::styled(
                "Press Space to generate a shower thought. 🚿",
                Style::default().fg(colors.muted),
            ),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);
        frame.render_widget(prompt, area);
        return;
    };

    let mut text_style = Style::default().fg(colors.text).bold();
    if app.selecting {
        text_style = text_style.add_modifier(Modifier::REVERSED);
    }

    let id = if thought.id.is_empty() {
        "st_unknown".to_string()
    } else {
        sanitize_for_terminal(&thought.id)
    };

    let lines = vec![
        Line::styled(meta_line(app.state()), Style::default().fg(accents[1])),
        Line::default(),
        Line::styled(sanitize_for_terminal(&thought.text), text_style),
        Line::default(),
        Line::styled(
            sanitize_for_terminal(&tag_line(thought)),
            Style::default().fg(colors.muted),
        ),
        Line::styled(id, Style::default().fg(colors.muted).italic()),
    ];

    let card = Paragraph::new(lines).wrap(Wrap { trim: true }).block(block);
    frame.render_widget(card, area);
}

fn render_saved(frame: &mut Frame, app: &App, colors: Palette, area: Rect) {
    let state = app.state();
    let title = if state.saved.len() > SAVED_LINES / 2 {
        format!(" Saved ({}/{}) · j/k scroll ", state.saved.len(), MAX_SAVED)
    } else {
        format!(" Saved ({}/{}) ", state.saved.len(), MAX_SAVED)
    };
    frame.render_widget(Clear, area);
    let block = panel(&title, colors, colors.text);

    if state.saved.is_empty() {
        let empty = Paragraph::new(Line::styled(
            EMPTY_SAVED_MESSAGE,
            Style::default().fg(colors.muted),
        ))
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let now = Utc::now();
    let mut lines = Vec::with_capacity(state.saved.len() * 2);
    for item in &state.saved {
        lines.push(Line::styled(
            sanitize_for_terminal(&item.text),
            Style::default().fg(colors.text),
        ));
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {}", sanitize_for_terminal(&item.id)),
                Style::default().fg(colors.muted).italic(),
            ),
            Span::styled(
                format!("  {}", format_saved_time(item.ts, now)),
                Style::default().fg(colors.muted),
            ),
        ]));
    }

    // Two lines per entry; the offset counts entries.
    let offset = app.saved_scroll().min(state.saved.len() - 1) * 2;
    let list = Paragraph::new(lines)
        .scroll((offset as u16, 0))
        .block(block);
    frame.render_widget(list, area);
}

/// Hint for an action key, replaced by its flash while one is active.
fn action_hint(
    app: &App,
    action: Action,
    key: &str,
    icon: &str,
    label: &str,
    colors: Palette,
) -> Span<'static> {
    if let Some(flash) = app.flash_for(action) {
        return Span::styled(
            format!(" {} {} ", flash.icon, flash.label),
            Style::default().fg(colors.surface).bg(app.decor.accent(2)).bold(),
        );
    }
    let style = if app.actions_enabled() {
        Style::default().fg(colors.text)
    } else {
        Style::default().fg(colors.muted).add_modifier(Modifier::DIM)
    };
    Span::styled(format!(" {key} {icon} {label} "), style)
}

fn render_footer(frame: &mut Frame, app: &App, colors: Palette, area: Rect) {
    let line = Line::from(vec![
        Span::styled(" space new ", Style::default().fg(colors.text)),
        action_hint(app, Action::Copy, "c", "📋", "Copy", colors),
        action_hint(app, Action::Save, "s", "💾", "Save", colors),
        Span::styled(
            " t theme  p shuffle  x clear  q quit",
            Style::default().fg(colors.muted),
        ),
    ]);

    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(line).style(Style::default().bg(colors.bg)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::{test_app, test_app_from};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};
    use sudsy_core::state::add_saved;
    use sudsy_core::{Length, Thought};

    fn draw(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_initial_screen() {
        let app = test_app();
        let screen = draw(&app, 100, 32);
        assert!(screen.contains("Press Space to generate"));
        assert!(screen.contains("None yet. Save your first brain-spark."));
        assert!(screen.contains("Saved (0/30)"));
        assert!(screen.contains("20 built-in"));
    }

    #[test]
    fn test_generated_thought_is_rendered() {
        let mut app = test_app();
        app.generate();
        let id = app.current().unwrap().id.clone();

        let screen = draw(&app, 100, 32);
        assert!(screen.contains(&id));
        assert!(screen.contains("Any"));
        assert!(screen.contains("Medium"));
        assert!(!screen.contains("Press Space to generate"));
    }

    #[test]
    fn test_meta_line_labels() {
        let state = AppState::default()
            .with_category("existential")
            .with_vibe("chaos")
            .with_spice_level(4);
        assert_eq!(meta_line(&state), "Existential • Chaos • Spicy");

        let unknown = AppState::default().with_category("bogus");
        assert_eq!(meta_line(&unknown), "Any • Any • Medium");
    }

    #[test]
    fn test_saved_text_is_sanitized() {
        let evil = Thought {
            id: "st_evil".to_string(),
            text: "\u{1b}[2Jgotcha\u{1b}]0;pwned\u{7}".to_string(),
            category: vec![],
            vibe: vec![],
            length: Length::Short,
            spice: None,
        };
        let state = add_saved(AppState::default(), &evil);
        let (app, _, _) = test_app_from(state, false);

        let screen = draw(&app, 100, 32);
        assert!(screen.contains("gotcha"));
        assert!(screen.contains("st_evil"));
        assert!(screen.contains("just now"));
        assert!(!screen.contains('\u{1b}'));
        assert!(!screen.contains("pwned"));
        assert!(!screen.contains("None yet"));
    }

    #[test]
    fn test_flash_replaces_hint() {
        let mut app = test_app();
        app.generate();
        assert!(draw(&app, 100, 32).contains("Save "));

        app.save_current();
        let screen = draw(&app, 100, 32);
        assert!(!screen.contains("Save "));
        assert!(screen.contains("Saved (1/30)"));
        assert!(screen.contains("Copy"));
    }

    #[test]
    fn test_oldest_saved_entry_is_reachable_by_scrolling() {
        let thoughts = sudsy_core::content::embedded_thoughts();
        let state = thoughts[..10].iter().fold(AppState::default(), add_saved);
        let (mut app, _, _) = test_app_from(state, false);

        let screen = draw(&app, 120, 60);
        assert!(screen.contains("st_0010"));
        assert!(!screen.contains("st_0001"));
        assert!(screen.contains("j/k scroll"));

        for _ in 0..9 {
            app.handle_key(KeyEvent::new(KeyCode::Char('j'), KeyModifiers::NONE));
        }
        let screen = draw(&app, 120, 60);
        assert!(screen.contains("st_0001"));
        assert!(!screen.contains("st_0010"));

        for _ in 0..9 {
            app.handle_key(KeyEvent::new(KeyCode::PageUp, KeyModifiers::NONE));
        }
        let screen = draw(&app, 120, 60);
        assert!(screen.contains("st_0010"));
    }

    #[test]
    fn test_small_terminal_does_not_panic() {
        let mut app = test_app();
        app.generate();
        app.save_current();
        draw(&app, 20, 8);
        draw(&app, 1, 1);
    }
}
