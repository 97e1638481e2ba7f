//! Transient overlays: autocomplete popup, prompt line, confirm and help boxes
//!
//! Overlays render last, after the panes, and sit on top via `Clear`.

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

const AUTOCOMPLETE_ROWS: u16 = 8;

/// Render the autocomplete popup anchored below the editor cursor.
pub fn render_autocomplete(
    frame: &mut Frame,
    anchor: (u16, u16),
    matches: &[&'static str],
    selected: usize,
) {
    let frame_area = frame.area();
    let width = matches
        .iter()
        .map(|m| m.len() as u16)
        .max()
        .unwrap_or(0)
        .saturating_add(4)
        .max(12);
    let height = (matches.len() as u16).min(AUTOCOMPLETE_ROWS) + 2;
    let area = anchored_rect(anchor, width, height, frame_area);

    let items: Vec<ListItem> = matches
        .iter()
        .map(|m| ListItem::new(*m).style(Style::default().fg(DEFAULT_THEME.fg)))
        .collect();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
                .style(Style::default().bg(DEFAULT_THEME.popup_bg)),
        )
        .highlight_style(
            Style::default()
                .bg(DEFAULT_THEME.popup_selected_bg)
                .add_modifier(Modifier::BOLD),
        );
    let mut state = ListState::default().with_selected(Some(selected));

    frame.render_widget(Clear, area);
    frame.render_stateful_widget(list, area, &mut state);
}

/// Render an input prompt in place of the status bar and park the cursor
/// at the end of the typed text.
pub fn render_prompt(frame: &mut Frame, area: Rect, label: &str, input: &str) {
    let spans = vec![
        Span::styled(
            format!(" {} ", label),
            Style::default()
                .bg(DEFAULT_THEME.primary)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {}", input),
            Style::default()
                .bg(DEFAULT_THEME.current_line_bg)
                .fg(DEFAULT_THEME.fg),
        ),
    ];
    let paragraph = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(DEFAULT_THEME.current_line_bg));
    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);

    let x = area.x + label.chars().count() as u16 + 3 + input.chars().count() as u16;
    frame.set_cursor_position((x.min(area.right().saturating_sub(1)), area.y));
}

/// Render the unsaved-changes confirmation box.
pub fn render_confirm(frame: &mut Frame) {
    let area = centered_rect(frame.area(), 52, 5);
    let lines = vec![
        Line::from(Span::styled(
            "Save the current file before proceeding?",
            Style::default().fg(DEFAULT_THEME.fg),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(" y ", key_chip()),
            Span::styled(" save  ", Style::default().fg(DEFAULT_THEME.fg)),
            Span::styled(" n ", key_chip()),
            Span::styled(" discard  ", Style::default().fg(DEFAULT_THEME.fg)),
            Span::styled(" esc ", key_chip()),
            Span::styled(" cancel", Style::default().fg(DEFAULT_THEME.fg)),
        ]),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Unsaved changes ")
                .borders(Borders::ALL)
                .border_style(
                    Style::default()
                        .fg(DEFAULT_THEME.secondary)
                        .add_modifier(Modifier::BOLD),
                )
                .style(Style::default().bg(DEFAULT_THEME.popup_bg)),
        );
    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}

/// Render a dismiss-on-any-key help box with `title` and `body`.
pub fn render_help(frame: &mut Frame, title: &str, body: &str) {
    let frame_area = frame.area();
    let body_rows = body.lines().count() as u16;
    let body_width = body
        .lines()
        .map(|l| l.chars().count() as u16)
        .max()
        .unwrap_or(0);
    let area = centered_rect(frame_area, body_width.max(40) + 4, body_rows + 4);

    let mut lines: Vec<Line> = body
        .lines()
        .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(DEFAULT_THEME.fg))))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "press any key to close",
        Style::default().fg(DEFAULT_THEME.muted),
    )));

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(format!(" {} ", title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(DEFAULT_THEME.primary))
            .style(Style::default().bg(DEFAULT_THEME.popup_bg)),
    );
    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}

fn key_chip() -> Style {
    Style::default().bg(DEFAULT_THEME.muted).fg(Color::Black)
}

/// Fixed-size rect centered in `area`, clamped to fit.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Rect hanging below `anchor`, flipped above when there is no room.
fn anchored_rect(anchor: (u16, u16), width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = anchor.0.min(area.right().saturating_sub(width));
    let below = anchor.1 + 1;
    let y = if below + height <= area.bottom() {
        below
    } else {
        anchor.1.saturating_sub(height)
    };
    Rect {
        x,
        y,
        width,
        height,
    }
}
