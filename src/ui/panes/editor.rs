//! Editor pane rendering
//!
//! The buffer lives in a `tui_textarea::TextArea`, but rendering is done by
//! hand so the debounced highlight spans, the selection, and the current
//! line background can all be painted per character. The widget's own
//! renderer knows nothing about our spans.

use crate::highlight::{kind_at, HighlightKind, HighlightSpan};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tui_textarea::TextArea;

const GUTTER_WIDTH: u16 = 5;

/// Scroll state for the editor pane, following the cursor on both axes.
#[derive(Debug, Default, Clone, Copy)]
pub struct EditorScrollState {
    pub row: usize,
    pub col: usize,
}

/// Render the editor pane.
///
/// Returns the cursor's screen cell when it is inside the visible window,
/// used to anchor the autocomplete popup. The terminal cursor itself is
/// only placed when `show_cursor` is set.
pub fn render_editor_pane(
    frame: &mut Frame,
    area: Rect,
    textarea: &TextArea<'_>,
    highlights: &[Vec<HighlightSpan>],
    is_focused: bool,
    show_cursor: bool,
    scroll: &mut EditorScrollState,
) -> Option<(u16, u16)> {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Editor ")
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width <= GUTTER_WIDTH || inner.height == 0 {
        return None;
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(GUTTER_WIDTH), Constraint::Min(0)])
        .split(inner);
    let content = chunks[1];

    let lines = textarea.lines();
    let (cursor_row, cursor_col) = textarea.cursor();
    let visible_height = content.height as usize;
    let visible_width = content.width as usize;

    // Keep the cursor inside the window on both axes.
    scroll.row = scroll.row.min(lines.len().saturating_sub(1));
    if cursor_row < scroll.row {
        scroll.row = cursor_row;
    } else if cursor_row >= scroll.row + visible_height {
        scroll.row = cursor_row + 1 - visible_height;
    }
    if cursor_col < scroll.col {
        scroll.col = cursor_col;
    } else if cursor_col >= scroll.col + visible_width {
        scroll.col = cursor_col + 1 - visible_width;
    }

    let selection = textarea.selection_range();

    let mut numbers: Vec<Line> = Vec::with_capacity(visible_height);
    let mut rows: Vec<Line> = Vec::with_capacity(visible_height);
    for (idx, line) in lines
        .iter()
        .enumerate()
        .skip(scroll.row)
        .take(visible_height)
    {
        let is_current = idx == cursor_row;
        let num_style = if is_current {
            Style::default()
                .fg(DEFAULT_THEME.secondary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DEFAULT_THEME.muted)
        };
        numbers.push(Line::from(Span::styled(
            format!("{:>4} ", idx + 1),
            num_style,
        )));

        let spans = highlights.get(idx).map(Vec::as_slice).unwrap_or(&[]);
        rows.push(styled_row(line, spans, selection, idx, is_current));
    }

    frame.render_widget(Paragraph::new(numbers), chunks[0]);
    frame.render_widget(
        Paragraph::new(rows).scroll((0, scroll.col as u16)),
        content,
    );

    let screen_x = content.x + (cursor_col - scroll.col) as u16;
    let screen_y = content.y + (cursor_row - scroll.row) as u16;
    if show_cursor {
        frame.set_cursor_position((screen_x, screen_y));
    }
    Some((screen_x, screen_y))
}

/// Build one buffer row with highlight, selection, and current-line styling.
fn styled_row(
    line: &str,
    spans: &[HighlightSpan],
    selection: Option<((usize, usize), (usize, usize))>,
    row: usize,
    is_current: bool,
) -> Line<'static> {
    let selected = selection.and_then(|range| selected_cols(range, row, line.chars().count()));

    let mut out: Vec<Span> = Vec::new();
    let mut run = String::new();
    let mut run_style = Style::default();
    for (col, c) in line.chars().enumerate() {
        let mut style = match kind_at(spans, col) {
            Some(HighlightKind::Keyword) => Style::default()
                .fg(DEFAULT_THEME.keyword)
                .add_modifier(Modifier::BOLD),
            Some(HighlightKind::String) => Style::default().fg(DEFAULT_THEME.string),
            Some(HighlightKind::Comment) => Style::default().fg(DEFAULT_THEME.comment),
            None => Style::default().fg(DEFAULT_THEME.fg),
        };
        if is_current {
            style = style.patch(Style::default().bg(DEFAULT_THEME.current_line_bg));
        }
        if selected.is_some_and(|(from, to)| from <= col && col < to) {
            style = style.patch(Style::default().bg(DEFAULT_THEME.selection_bg));
        }
        if style != run_style && !run.is_empty() {
            out.push(Span::styled(std::mem::take(&mut run), run_style));
        }
        run_style = style;
        run.push(if c == '\t' { ' ' } else { c });
    }
    if !run.is_empty() {
        out.push(Span::styled(run, run_style));
    }
    Line::from(out)
}

/// Selected column range on `row`, end exclusive, for a normalized selection.
fn selected_cols(
    ((start_row, start_col), (end_row, end_col)): ((usize, usize), (usize, usize)),
    row: usize,
    line_len: usize,
) -> Option<(usize, usize)> {
    if row < start_row || row > end_row {
        return None;
    }
    let from = if row == start_row { start_col } else { 0 };
    let to = if row == end_row { end_col } else { line_len };
    (from < to).then_some((from, to))
}
