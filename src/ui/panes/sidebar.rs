//! Sidebar pane rendering: helper, cheat sheet, examples, and quiz tabs

use crate::content::{CHEAT_SHEET, CODE_EXAMPLES};
use crate::quiz::QuizState;
use crate::ui::app::SidebarTab;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs, Wrap},
    Frame,
};

/// Render the sidebar with its tab strip and the active tab's content.
pub fn render_sidebar_pane(
    frame: &mut Frame,
    area: Rect,
    tab: SidebarTab,
    helper_tip: &str,
    example_selected: usize,
    quiz: &QuizState,
    is_focused: bool,
    show_cursor: bool,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Learn ")
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height < 2 {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(inner);

    let tabs = Tabs::new(SidebarTab::TITLES.to_vec())
        .select(tab.index())
        .style(Style::default().fg(DEFAULT_THEME.muted))
        .highlight_style(
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(tabs, chunks[0]);

    match tab {
        SidebarTab::Helper => render_helper(frame, chunks[1], helper_tip),
        SidebarTab::CheatSheet => render_cheat_sheet(frame, chunks[1]),
        SidebarTab::Examples => render_examples(frame, chunks[1], example_selected),
        SidebarTab::Quiz => render_quiz(frame, chunks[1], quiz, show_cursor),
    }
}

fn render_helper(frame: &mut Frame, area: Rect, tip: &str) {
    let paragraph = Paragraph::new(tip)
        .style(Style::default().fg(DEFAULT_THEME.fg))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn render_cheat_sheet(frame: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new(CHEAT_SHEET)
        .style(Style::default().fg(DEFAULT_THEME.fg))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn render_examples(frame: &mut Frame, area: Rect, selected: usize) {
    let items: Vec<ListItem> = CODE_EXAMPLES
        .iter()
        .map(|(name, _)| ListItem::new(*name).style(Style::default().fg(DEFAULT_THEME.fg)))
        .collect();
    let list = List::new(items)
        .highlight_style(
            Style::default()
                .bg(DEFAULT_THEME.popup_selected_bg)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");
    let mut state = ListState::default().with_selected(Some(selected));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_quiz(frame: &mut Frame, area: Rect, quiz: &QuizState, show_cursor: bool) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    let prompt = Paragraph::new(quiz.question().prompt)
        .style(Style::default().fg(DEFAULT_THEME.fg))
        .wrap(Wrap { trim: false });
    frame.render_widget(prompt, chunks[0]);

    let answer_line = Line::from(vec![
        Span::styled("> ", Style::default().fg(DEFAULT_THEME.muted)),
        Span::styled(quiz.answer(), Style::default().fg(DEFAULT_THEME.fg)),
    ]);
    frame.render_widget(Paragraph::new(answer_line), chunks[1]);

    // Feedback keeps a single colour for both outcomes.
    let feedback = Paragraph::new(quiz.feedback())
        .style(Style::default().fg(DEFAULT_THEME.primary))
        .wrap(Wrap { trim: false });
    frame.render_widget(feedback, chunks[2]);

    if show_cursor && chunks[1].width > 2 {
        let max_x = chunks[1].right().saturating_sub(1);
        let x = (chunks[1].x + 2).saturating_add(quiz.answer().chars().count() as u16);
        frame.set_cursor_position((x.min(max_x), chunks[1].y));
    }
}
