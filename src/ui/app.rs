//! Main TUI application state and logic

use crate::console::{Console, OutputKind};
use crate::content::{filter_suggestions, keyword_tips, ABOUT, CODE_EXAMPLES, TIPS, TIP_FALLBACK};
use crate::document::{self, Document};
use crate::highlight::{Highlighter, HighlightSpan, DEBOUNCE};
use crate::quiz::QuizState;
use crate::runner::Runner;
use crate::ui::panes::EditorScrollState;
use crate::words;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use rustc_hash::FxHashMap;
use std::io;
use std::path::Path;
use std::time::{Duration, Instant};
use tui_textarea::{CursorMove, Input, TextArea};

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Editor,
    Sidebar,
    Console,
}

impl FocusedPane {
    /// Move focus to the next pane (editor -> sidebar -> console)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Editor => FocusedPane::Sidebar,
            FocusedPane::Sidebar => FocusedPane::Console,
            FocusedPane::Console => FocusedPane::Editor,
        }
    }
}

/// Tabs of the learning sidebar, in strip order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarTab {
    Helper,
    CheatSheet,
    Examples,
    Quiz,
}

impl SidebarTab {
    pub const TITLES: [&'static str; 4] = ["Helper", "Cheat Sheet", "Examples", "Quiz"];

    pub fn index(self) -> usize {
        match self {
            SidebarTab::Helper => 0,
            SidebarTab::CheatSheet => 1,
            SidebarTab::Examples => 2,
            SidebarTab::Quiz => 3,
        }
    }

    pub fn next(self) -> Self {
        match self {
            SidebarTab::Helper => SidebarTab::CheatSheet,
            SidebarTab::CheatSheet => SidebarTab::Examples,
            SidebarTab::Examples => SidebarTab::Quiz,
            SidebarTab::Quiz => SidebarTab::Helper,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            SidebarTab::Helper => SidebarTab::Quiz,
            SidebarTab::CheatSheet => SidebarTab::Helper,
            SidebarTab::Examples => SidebarTab::CheatSheet,
            SidebarTab::Quiz => SidebarTab::Examples,
        }
    }
}

/// An action held back by the unsaved-changes gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    NewFile,
    OpenFile,
    Quit,
}

/// What the one-line prompt is collecting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Find,
    Open,
    SaveAs,
}

impl PromptKind {
    pub fn label(self) -> &'static str {
        match self {
            PromptKind::Find => "Find:",
            PromptKind::Open => "Open file:",
            PromptKind::SaveAs => "Save as:",
        }
    }
}

/// State of the one-line prompt shown in place of the status bar
#[derive(Debug)]
pub struct PromptState {
    pub kind: PromptKind,
    pub input: String,
    /// Gated action resumed after a successful save-as
    pub pending: Option<PendingAction>,
}

/// State of the autocomplete popup
#[derive(Debug)]
pub struct AutocompleteState {
    pub matches: Vec<&'static str>,
    pub selected: usize,
}

/// Which help overlay is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpScreen {
    Tips,
    About,
}

/// The main application state
pub struct App {
    /// Editing buffer with undo history and selection
    pub textarea: TextArea<'static>,

    /// Backing file path and modified flag
    pub document: Document,

    /// Captured program output
    pub console: Console,

    /// Quiz tab state
    pub quiz: QuizState,

    /// Interpreter handle used for running code
    pub runner: Runner,

    /// Keyword -> tip lookup for the helper tab
    pub tips: FxHashMap<&'static str, &'static str>,

    /// Compiled highlight patterns
    pub highlighter: Highlighter,

    /// Per-row spans from the last completed scan
    pub highlights: Vec<Vec<HighlightSpan>>,

    /// Deadline of the debounced rescan; each edit overwrites it
    pub highlight_deadline: Option<Instant>,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Active sidebar tab
    pub sidebar_tab: SidebarTab,

    /// Cursor of the examples list
    pub example_selected: usize,

    /// Per-pane scroll state
    pub editor_scroll: EditorScrollState,
    pub console_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Transient surfaces; `None` when closed
    pub autocomplete: Option<AutocompleteState>,
    pub prompt: Option<PromptState>,
    pub confirm: Option<PendingAction>,
    pub help: Option<HelpScreen>,
}

impl App {
    /// Create a new app around the given interpreter handle
    pub fn new(runner: Runner) -> Self {
        let mut textarea = TextArea::default();
        Self::configure(&mut textarea);
        let highlighter = Highlighter::new();
        let highlights = highlighter.scan("");
        App {
            textarea,
            document: Document::new(),
            console: Console::new(),
            quiz: QuizState::new(),
            runner,
            tips: keyword_tips(),
            highlighter,
            highlights,
            highlight_deadline: None,
            focused_pane: FocusedPane::Editor,
            sidebar_tab: SidebarTab::Helper,
            example_selected: 0,
            editor_scroll: EditorScrollState::default(),
            console_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready"),
            autocomplete: None,
            prompt: None,
            confirm: None,
            help: None,
        }
    }

    /// Load `path` into the buffer, replacing the current document
    pub fn open_path(&mut self, path: &Path) -> anyhow::Result<()> {
        let (doc, text) = Document::open(path)?;
        self.document = doc;
        self.textarea = Self::text_buffer(&text);
        self.editor_scroll = EditorScrollState::default();
        self.rescan_now();
        Ok(())
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.tick(Instant::now());

            // Use poll with timeout so the debounce and quiz timers fire
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Fire any timer whose deadline has passed
    pub fn tick(&mut self, now: Instant) {
        if self.highlight_deadline.is_some_and(|deadline| now >= deadline) {
            self.rescan_now();
        }
        self.quiz.tick(now);
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Layout: editor over console on the left, sidebar on the right,
        // one status row at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(pane_area);

        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(columns[0]);

        let overlay_open =
            self.prompt.is_some() || self.confirm.is_some() || self.help.is_some();
        let editor_focused = self.focused_pane == FocusedPane::Editor;

        let anchor = super::panes::render_editor_pane(
            frame,
            left_rows[0],
            &self.textarea,
            &self.highlights,
            editor_focused,
            editor_focused && !overlay_open,
            &mut self.editor_scroll,
        );

        super::panes::render_console_pane(
            frame,
            left_rows[1],
            &self.console,
            self.focused_pane == FocusedPane::Console,
            &mut self.console_scroll,
        );

        let tip = self.current_tip();
        super::panes::render_sidebar_pane(
            frame,
            columns[1],
            self.sidebar_tab,
            tip,
            self.example_selected,
            &self.quiz,
            self.focused_pane == FocusedPane::Sidebar,
            self.focused_pane == FocusedPane::Sidebar
                && self.sidebar_tab == SidebarTab::Quiz
                && !overlay_open,
        );

        if let Some(prompt) = &self.prompt {
            super::panes::render_prompt(frame, status_area, prompt.kind.label(), &prompt.input);
        } else {
            let (row, col) = self.textarea.cursor();
            super::panes::render_status_bar(
                frame,
                status_area,
                &self.document.display_name(),
                self.document.is_modified(),
                row + 1,
                col + 1,
                &self.status_message,
            );
        }

        if let (Some(state), Some(anchor)) = (&self.autocomplete, anchor) {
            super::panes::render_autocomplete(frame, anchor, &state.matches, state.selected);
        }
        if self.confirm.is_some() {
            super::panes::render_confirm(frame);
        }
        if let Some(screen) = self.help {
            let (title, body) = match screen {
                HelpScreen::Tips => ("Python Tips", TIPS),
                HelpScreen::About => ("About", ABOUT),
            };
            super::panes::render_help(frame, title, body);
        }
    }

    /// Handle one key press, routing modal surfaces before pane focus
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.help.is_some() {
            self.help = None;
            return;
        }
        if self.confirm.is_some() {
            self.handle_confirm_key(key);
            return;
        }
        if self.prompt.is_some() {
            self.handle_prompt_key(key);
            return;
        }
        if self.autocomplete.is_some() && self.handle_autocomplete_key(key) {
            return;
        }
        if self.handle_global_key(key) {
            return;
        }
        match self.focused_pane {
            FocusedPane::Editor => self.handle_editor_key(key),
            FocusedPane::Sidebar => self.handle_sidebar_key(key),
            FocusedPane::Console => self.handle_console_key(key),
        }
    }

    // ----------------------------------------------------------- Key routing

    fn handle_global_key(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);
        match key.code {
            KeyCode::Char('q') if ctrl => {
                self.request(PendingAction::Quit);
                true
            }
            KeyCode::Char('n') if ctrl => {
                self.request(PendingAction::NewFile);
                true
            }
            KeyCode::Char('o') if ctrl => {
                self.request(PendingAction::OpenFile);
                true
            }
            KeyCode::Char('s') if ctrl => {
                if self.document.path().is_some() {
                    self.save();
                } else {
                    self.open_prompt(PromptKind::SaveAs, None);
                }
                true
            }
            KeyCode::Char('s') if alt => {
                self.open_prompt(PromptKind::SaveAs, None);
                true
            }
            KeyCode::Char('f') if ctrl => {
                self.open_prompt(PromptKind::Find, None);
                true
            }
            KeyCode::Char('l') if ctrl => {
                self.console.clear();
                self.console_scroll = 0;
                true
            }
            KeyCode::Char('b') if ctrl => {
                self.focused_pane = self.focused_pane.next();
                true
            }
            KeyCode::Char('t') if ctrl => {
                self.sidebar_tab = self.sidebar_tab.next();
                true
            }
            KeyCode::Char(' ') if ctrl => {
                self.open_autocomplete();
                true
            }
            KeyCode::F(5) if key.modifiers.contains(KeyModifiers::SHIFT) => {
                self.run_selection();
                true
            }
            KeyCode::F(5) => {
                self.run_buffer();
                true
            }
            KeyCode::F(1) => {
                self.help = Some(HelpScreen::Tips);
                true
            }
            KeyCode::F(2) => {
                self.help = Some(HelpScreen::About);
                true
            }
            _ => false,
        }
    }

    fn handle_editor_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => {
                self.textarea.cancel_selection();
            }
            KeyCode::Char('z') if ctrl => {
                if self.textarea.undo() {
                    self.after_edit();
                }
            }
            KeyCode::Char('y') if ctrl => {
                if self.textarea.redo() {
                    self.after_edit();
                }
            }
            KeyCode::Char('a') if ctrl => {
                self.textarea.select_all();
            }
            _ => {
                if self.textarea.input(Input::from(key)) {
                    self.after_edit();
                }
            }
        }
    }

    fn handle_sidebar_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.focused_pane = FocusedPane::Editor;
            }
            KeyCode::Left => {
                self.sidebar_tab = self.sidebar_tab.prev();
            }
            KeyCode::Right => {
                self.sidebar_tab = self.sidebar_tab.next();
            }
            KeyCode::Up if self.sidebar_tab == SidebarTab::Examples => {
                self.example_selected = self.example_selected.saturating_sub(1);
            }
            KeyCode::Down if self.sidebar_tab == SidebarTab::Examples => {
                if self.example_selected + 1 < CODE_EXAMPLES.len() {
                    self.example_selected += 1;
                }
            }
            KeyCode::Enter if self.sidebar_tab == SidebarTab::Examples => {
                self.insert_example();
            }
            KeyCode::Enter if self.sidebar_tab == SidebarTab::Quiz => {
                self.quiz.submit(Instant::now());
            }
            KeyCode::Backspace if self.sidebar_tab == SidebarTab::Quiz => {
                self.quiz.backspace();
            }
            KeyCode::Char(c) if self.sidebar_tab == SidebarTab::Quiz => {
                if !key.modifiers.contains(KeyModifiers::CONTROL) {
                    self.quiz.push_char(c);
                }
            }
            _ => {}
        }
    }

    fn handle_console_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.focused_pane = FocusedPane::Editor;
            }
            KeyCode::Up => {
                self.console_scroll = self.console_scroll.saturating_sub(1);
            }
            KeyCode::Down => {
                self.console_scroll = self.console_scroll.saturating_add(1);
            }
            KeyCode::PageUp => {
                self.console_scroll = self.console_scroll.saturating_sub(10);
            }
            KeyCode::PageDown => {
                self.console_scroll = self.console_scroll.saturating_add(10);
            }
            KeyCode::Home => {
                self.console_scroll = 0;
            }
            KeyCode::End => {
                self.console_scroll = usize::MAX;
            }
            _ => {}
        }
    }

    /// Keys for the autocomplete popup; false means the popup closed and
    /// the key should be handled normally
    fn handle_autocomplete_key(&mut self, key: KeyEvent) -> bool {
        let Some(state) = self.autocomplete.as_mut() else {
            return false;
        };
        match key.code {
            KeyCode::Up => {
                state.selected = state.selected.saturating_sub(1);
                true
            }
            KeyCode::Down => {
                if state.selected + 1 < state.matches.len() {
                    state.selected += 1;
                }
                true
            }
            KeyCode::Enter => {
                let choice = state.matches[state.selected];
                self.autocomplete = None;
                self.replace_current_word(choice);
                true
            }
            KeyCode::Esc => {
                self.autocomplete = None;
                true
            }
            _ => {
                self.autocomplete = None;
                false
            }
        }
    }

    fn handle_confirm_key(&mut self, key: KeyEvent) {
        let Some(action) = self.confirm else {
            return;
        };
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                self.confirm = None;
                if self.document.path().is_some() {
                    if self.save() {
                        self.proceed(action);
                    }
                } else {
                    // No backing path yet; the action resumes only after
                    // the save-as prompt succeeds
                    self.open_prompt(PromptKind::SaveAs, Some(action));
                }
            }
            KeyCode::Char('n') | KeyCode::Char('N') => {
                self.confirm = None;
                self.document.set_modified(false);
                self.proceed(action);
            }
            KeyCode::Esc => {
                self.confirm = None;
                self.status_message = String::from("Cancelled");
            }
            _ => {}
        }
    }

    fn handle_prompt_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                // Dropping the prompt also drops any gated action
                self.prompt = None;
            }
            KeyCode::Enter => {
                self.submit_prompt();
            }
            KeyCode::Backspace => {
                if let Some(prompt) = self.prompt.as_mut() {
                    prompt.input.pop();
                }
            }
            KeyCode::Char(c) => {
                if !key.modifiers.contains(KeyModifiers::CONTROL) {
                    if let Some(prompt) = self.prompt.as_mut() {
                        prompt.input.push(c);
                    }
                }
            }
            _ => {}
        }
    }

    // ------------------------------------------------------------ Operations

    fn submit_prompt(&mut self) {
        let Some(prompt) = self.prompt.take() else {
            return;
        };
        match prompt.kind {
            PromptKind::Find => {
                let needle = prompt.input.clone();
                self.find_next(&needle);
                // Find stays open so Enter keeps jumping to the next hit
                self.prompt = Some(prompt);
            }
            PromptKind::Open => {
                let input = prompt.input.trim().to_string();
                if input.is_empty() {
                    self.prompt = Some(prompt);
                    return;
                }
                match self.open_path(Path::new(&input)) {
                    Ok(()) => self.status_message = format!("Opened {}", input),
                    Err(err) => self.status_message = format!("Open failed: {err:#}"),
                }
            }
            PromptKind::SaveAs => {
                let input = prompt.input.trim();
                if input.is_empty() {
                    self.prompt = Some(prompt);
                    return;
                }
                let path = document::with_default_extension(input);
                let text = self.buffer_text();
                match self.document.save_to(path, &text) {
                    Ok(path) => {
                        self.status_message = format!("Saved to {}", path.display());
                        if let Some(action) = prompt.pending {
                            self.proceed(action);
                        }
                    }
                    Err(err) => self.status_message = format!("Save failed: {err:#}"),
                }
            }
        }
    }

    /// Run `action` now, or park it behind the unsaved-changes gate
    fn request(&mut self, action: PendingAction) {
        if self.document.is_modified() {
            self.confirm = Some(action);
        } else {
            self.proceed(action);
        }
    }

    fn proceed(&mut self, action: PendingAction) {
        match action {
            PendingAction::NewFile => {
                self.textarea = Self::text_buffer("");
                self.document.reset();
                self.editor_scroll = EditorScrollState::default();
                self.rescan_now();
                self.status_message = String::from("New file");
            }
            PendingAction::OpenFile => {
                self.open_prompt(PromptKind::Open, None);
            }
            PendingAction::Quit => {
                self.should_quit = true;
            }
        }
    }

    fn save(&mut self) -> bool {
        let text = self.buffer_text();
        match self.document.save(&text) {
            Ok(path) => {
                self.status_message = format!("Saved to {}", path.display());
                true
            }
            Err(err) => {
                self.status_message = format!("Save failed: {err:#}");
                false
            }
        }
    }

    fn run_buffer(&mut self) {
        let code = self.buffer_text();
        let lines = self.textarea.lines().len();
        self.execute_code(&code);
        self.status_message = format!("Ran {} line(s)", lines);
    }

    fn run_selection(&mut self) {
        let selected = self
            .textarea
            .selection_range()
            .map(|range| self.selected_text(range))
            .unwrap_or_default();
        if selected.is_empty() {
            self.status_message = String::from("Select some code to run.");
            return;
        }
        self.execute_code(&selected);
        self.status_message = String::from("Ran selection");
    }

    fn execute_code(&mut self, code: &str) {
        let output = self.runner.execute(code);
        self.console.push_chunk(&output.stdout, OutputKind::Stdout);
        self.console.push_chunk(&output.stderr, OutputKind::Stderr);
        // Saturates to the bottom; the render pass clamps it
        self.console_scroll = usize::MAX;
    }

    fn insert_example(&mut self) {
        let Some((name, code)) = CODE_EXAMPLES.get(self.example_selected) else {
            return;
        };
        // Replace through the widget so the insertion stays undoable.
        // The backing path is kept; the buffer counts as modified.
        self.textarea.select_all();
        self.textarea.cut();
        self.textarea.insert_str(*code);
        self.document.set_modified(true);
        self.editor_scroll = EditorScrollState::default();
        self.rescan_now();
        self.status_message = format!("Inserted example {}", name);
    }

    fn open_autocomplete(&mut self) {
        let word = self.current_word();
        let matches = filter_suggestions(word.trim());
        if matches.is_empty() {
            return;
        }
        self.autocomplete = Some(AutocompleteState {
            matches,
            selected: 0,
        });
    }

    /// Replace the selection, or else the word under the cursor, with `text`
    fn replace_current_word(&mut self, text: &str) {
        let has_selection = self
            .textarea
            .selection_range()
            .is_some_and(|(start, end)| start != end);
        if has_selection {
            self.textarea.cut();
        } else {
            self.textarea.cancel_selection();
            let (row, col) = self.textarea.cursor();
            let (start, end) = words::word_span_at(&self.textarea.lines()[row], col);
            if end > start {
                self.textarea
                    .move_cursor(CursorMove::Jump(jump_coord(row), jump_coord(start)));
                self.textarea.delete_str(end - start);
            }
        }
        self.textarea.insert_str(text);
        self.after_edit();
    }

    /// Search forward from the cursor for a literal needle, wrapping at the
    /// end of the buffer. A hit becomes the selection with the cursor at
    /// its end; a match starting exactly at the cursor counts, so repeated
    /// searches also visit adjacent occurrences. A miss leaves cursor and
    /// selection untouched.
    fn find_next(&mut self, needle: &str) {
        if needle.is_empty() {
            return;
        }
        if self
            .textarea
            .set_search_pattern(regex::escape(needle))
            .is_err()
        {
            return;
        }
        if self.textarea.search_forward(true) {
            let (row, col) = self.textarea.cursor();
            let len = needle.chars().count();
            self.textarea.cancel_selection();
            self.textarea.start_selection();
            self.textarea
                .move_cursor(CursorMove::Jump(jump_coord(row), jump_coord(col + len)));
        } else {
            self.status_message = format!("Not found: {}", needle);
        }
    }

    // --------------------------------------------------------------- Helpers

    fn open_prompt(&mut self, kind: PromptKind, pending: Option<PendingAction>) {
        self.prompt = Some(PromptState {
            kind,
            input: String::new(),
            pending,
        });
    }

    fn after_edit(&mut self) {
        self.document.set_modified(true);
        self.highlight_deadline = Some(Instant::now() + DEBOUNCE);
    }

    fn rescan_now(&mut self) {
        self.highlight_deadline = None;
        self.highlights = self.highlighter.scan(&self.buffer_text());
    }

    pub fn buffer_text(&self) -> String {
        self.textarea.lines().join("\n")
    }

    /// Selected text if any, else the word under the cursor
    fn current_word(&self) -> String {
        if let Some(range) = self.textarea.selection_range() {
            let raw = self.selected_text(range);
            if !raw.is_empty() {
                return raw.trim().to_string();
            }
        }
        let (row, col) = self.textarea.cursor();
        words::word_at(&self.textarea.lines()[row], col).to_string()
    }

    fn current_tip(&self) -> &'static str {
        let word = self.current_word();
        self.tips.get(word.as_str()).copied().unwrap_or(TIP_FALLBACK)
    }

    fn selected_text(
        &self,
        ((start_row, start_col), (end_row, end_col)): ((usize, usize), (usize, usize)),
    ) -> String {
        let lines = self.textarea.lines();
        if start_row == end_row {
            return char_slice(&lines[start_row], start_col, end_col);
        }
        let mut out = char_slice(&lines[start_row], start_col, usize::MAX);
        for line in &lines[start_row + 1..end_row] {
            out.push('\n');
            out.push_str(line);
        }
        out.push('\n');
        out.push_str(&char_slice(&lines[end_row], 0, end_col));
        out
    }

    fn text_buffer(text: &str) -> TextArea<'static> {
        // split keeps the empty segment after a trailing newline, so a
        // file's final newline survives an open/save round trip.
        let mut textarea = TextArea::from(text.split('\n'));
        Self::configure(&mut textarea);
        textarea
    }

    fn configure(textarea: &mut TextArea<'_>) {
        textarea.set_tab_length(4);
        textarea.set_hard_tab_indent(false);
    }
}

/// Slice `line` by character columns, end exclusive and clamped.
fn char_slice(line: &str, from: usize, to: usize) -> String {
    line.chars()
        .skip(from)
        .take(to.saturating_sub(from))
        .collect()
}

/// Saturating cast for cursor coordinates; `CursorMove::Jump` takes `u16`.
fn jump_coord(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}
