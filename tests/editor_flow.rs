// Integration tests for the editor event flow

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pytutor::console::OutputKind;
use pytutor::content::{CODE_EXAMPLES, QUIZ_QUESTIONS};
use pytutor::runner::Runner;
use pytutor::ui::app::{App, FocusedPane, PromptKind, SidebarTab};
use std::time::{Duration, Instant};

fn app() -> App {
    // The interpreter is never launched by these tests.
    App::new(Runner::new("python3"))
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

fn type_str(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_key_event(key(KeyCode::Char(c)));
    }
}

#[test]
fn test_typing_marks_modified_and_rescans_after_debounce() {
    let mut app = app();
    assert!(!app.document.is_modified());

    type_str(&mut app, "for");
    assert!(app.document.is_modified());
    assert_eq!(app.buffer_text(), "for");
    // The rescan is debounced; nothing is highlighted yet.
    assert!(app.highlights[0].is_empty());

    app.tick(Instant::now() + Duration::from_secs(1));
    assert!(!app.highlights[0].is_empty());
}

#[test]
fn test_autocomplete_accepts_suggestion() {
    let mut app = app();
    type_str(&mut app, "pri");

    app.handle_key_event(ctrl(' '));
    let matches = app.autocomplete.as_ref().map(|s| s.matches.clone());
    assert_eq!(matches, Some(vec!["print"]));

    app.handle_key_event(key(KeyCode::Enter));
    assert!(app.autocomplete.is_none());
    assert_eq!(app.buffer_text(), "print");
}

#[test]
fn test_autocomplete_without_matches_consumes_key() {
    let mut app = app();
    type_str(&mut app, "zzz");
    app.handle_key_event(ctrl(' '));
    assert!(app.autocomplete.is_none());
    assert_eq!(app.buffer_text(), "zzz");
}

#[test]
fn test_autocomplete_other_key_closes_popup_then_types() {
    let mut app = app();
    type_str(&mut app, "pri");
    app.handle_key_event(ctrl(' '));
    assert!(app.autocomplete.is_some());

    app.handle_key_event(key(KeyCode::Char('n')));
    assert!(app.autocomplete.is_none());
    assert_eq!(app.buffer_text(), "prin");
}

#[test]
fn test_quit_gate_cancel_keeps_everything() {
    let mut app = app();
    type_str(&mut app, "x = 1");

    app.handle_key_event(ctrl('q'));
    assert!(app.confirm.is_some());
    assert!(!app.should_quit);

    app.handle_key_event(key(KeyCode::Esc));
    assert!(app.confirm.is_none());
    assert!(!app.should_quit);
    assert_eq!(app.buffer_text(), "x = 1");
    assert!(app.document.is_modified());
}

#[test]
fn test_quit_gate_discard_quits() {
    let mut app = app();
    type_str(&mut app, "x = 1");
    app.handle_key_event(ctrl('q'));
    app.handle_key_event(key(KeyCode::Char('n')));
    assert!(app.should_quit);
    assert!(!app.document.is_modified());
}

#[test]
fn test_clean_buffer_skips_gate() {
    let mut app = app();
    app.handle_key_event(ctrl('q'));
    assert!(app.confirm.is_none());
    assert!(app.should_quit);
}

#[test]
fn test_new_file_gate_cancel_keeps_buffer() {
    let mut app = app();
    type_str(&mut app, "x = 1");
    app.handle_key_event(ctrl('n'));
    app.handle_key_event(key(KeyCode::Esc));
    assert_eq!(app.buffer_text(), "x = 1");
    assert!(app.document.is_modified());
}

#[test]
fn test_new_file_gate_discard_clears_buffer() {
    let mut app = app();
    type_str(&mut app, "x = 1");
    app.handle_key_event(ctrl('n'));
    app.handle_key_event(key(KeyCode::Char('n')));
    assert_eq!(app.buffer_text(), "");
    assert_eq!(app.document.display_name(), "Untitled");
    assert!(!app.document.is_modified());
}

#[test]
fn test_save_as_writes_file_and_adopts_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lesson.py");

    let mut app = app();
    type_str(&mut app, "print('hi')");

    // No backing path yet, so Ctrl+S opens the save-as prompt.
    app.handle_key_event(ctrl('s'));
    assert_eq!(app.prompt.as_ref().map(|p| p.kind), Some(PromptKind::SaveAs));

    type_str(&mut app, path.to_str().unwrap());
    app.handle_key_event(key(KeyCode::Enter));

    assert!(app.prompt.is_none());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "print('hi')");
    assert!(!app.document.is_modified());
    assert_eq!(app.document.display_name(), "lesson.py");
    assert!(app.status_message.starts_with("Saved to"));
}

#[test]
fn test_gate_save_then_proceed_chains_into_save_as() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("quit.py");

    let mut app = app();
    type_str(&mut app, "x = 1");
    app.handle_key_event(ctrl('q'));
    app.handle_key_event(key(KeyCode::Char('y')));

    // Untitled document: save-then-quit routes through save-as first.
    assert_eq!(app.prompt.as_ref().map(|p| p.kind), Some(PromptKind::SaveAs));
    assert!(!app.should_quit);

    type_str(&mut app, path.to_str().unwrap());
    app.handle_key_event(key(KeyCode::Enter));

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "x = 1");
    assert!(app.should_quit);
}

#[test]
fn test_save_as_cancel_aborts_pending_action() {
    let mut app = app();
    type_str(&mut app, "x = 1");
    app.handle_key_event(ctrl('q'));
    app.handle_key_event(key(KeyCode::Char('y')));
    assert!(app.prompt.is_some());

    app.handle_key_event(key(KeyCode::Esc));
    assert!(app.prompt.is_none());
    assert!(!app.should_quit);
    assert_eq!(app.buffer_text(), "x = 1");
    assert!(app.document.is_modified());
}

#[test]
fn test_open_missing_file_reports_error() {
    let mut app = app();
    app.handle_key_event(ctrl('o'));
    assert_eq!(app.prompt.as_ref().map(|p| p.kind), Some(PromptKind::Open));

    type_str(&mut app, "/definitely/not/here.py");
    app.handle_key_event(key(KeyCode::Enter));

    assert!(app.prompt.is_none());
    assert!(app.status_message.starts_with("Open failed"));
    assert_eq!(app.buffer_text(), "");
}

#[test]
fn test_open_loads_file_and_clears_modified() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("existing.py");
    std::fs::write(&path, "import sys\nprint('x')\n").unwrap();

    let mut app = app();
    app.handle_key_event(ctrl('o'));
    type_str(&mut app, path.to_str().unwrap());
    app.handle_key_event(key(KeyCode::Enter));

    assert_eq!(app.buffer_text(), "import sys\nprint('x')\n");
    assert!(!app.document.is_modified());
    assert_eq!(app.document.display_name(), "existing.py");
    // Opening rescans immediately, no debounce.
    assert!(!app.highlights[0].is_empty());
}

#[test]
fn test_open_save_round_trip_preserves_trailing_newline() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("round.py");
    std::fs::write(&path, "x = 1\n").unwrap();

    let mut app = app();
    app.open_path(&path).unwrap();
    assert_eq!(app.buffer_text(), "x = 1\n");

    // Resaving an untouched buffer must not alter the file.
    app.handle_key_event(ctrl('s'));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "x = 1\n");
}

#[test]
fn test_example_insertion_replaces_buffer() {
    let mut app = app();
    type_str(&mut app, "old = True");

    app.handle_key_event(ctrl('b'));
    assert_eq!(app.focused_pane, FocusedPane::Sidebar);
    app.handle_key_event(key(KeyCode::Right));
    app.handle_key_event(key(KeyCode::Right));
    assert_eq!(app.sidebar_tab, SidebarTab::Examples);

    app.handle_key_event(key(KeyCode::Enter));
    assert_eq!(app.buffer_text(), CODE_EXAMPLES[0].1);
    assert!(app.document.is_modified());
    assert!(app.status_message.contains(CODE_EXAMPLES[0].0));
    // Insertion rescans immediately.
    assert!(!app.highlights[0].is_empty());
}

#[test]
fn test_quiz_flow_through_keys() {
    let mut app = app();
    app.handle_key_event(ctrl('b'));
    for _ in 0..3 {
        app.handle_key_event(key(KeyCode::Right));
    }
    assert_eq!(app.sidebar_tab, SidebarTab::Quiz);

    type_str(&mut app, "def");
    assert_eq!(app.quiz.answer(), "def");
    app.handle_key_event(key(KeyCode::Enter));
    assert!(app.quiz.feedback().starts_with("✅ Correct!"));
    // Display is pinned until the redisplay timer fires.
    assert_eq!(app.quiz.question().prompt, QUIZ_QUESTIONS[0].prompt);

    app.tick(Instant::now() + Duration::from_secs(3));
    assert_eq!(app.quiz.question().prompt, QUIZ_QUESTIONS[1].prompt);
    assert!(app.quiz.answer().is_empty());
    assert!(app.quiz.feedback().is_empty());
}

#[test]
fn test_run_selection_without_selection_shows_message() {
    let mut app = app();
    type_str(&mut app, "print(1)");
    app.handle_key_event(KeyEvent::new(KeyCode::F(5), KeyModifiers::SHIFT));
    assert_eq!(app.status_message, "Select some code to run.");
    assert!(app.console.is_empty());
}

#[test]
fn test_find_selects_match_and_repeats() {
    let mut app = app();
    type_str(&mut app, "alpha beta alpha");

    app.handle_key_event(ctrl('f'));
    type_str(&mut app, "alpha");
    app.handle_key_event(key(KeyCode::Enter));
    // Search continues past the cursor and wraps to the first hit.
    assert_eq!(app.textarea.selection_range(), Some(((0, 0), (0, 5))));
    assert_eq!(app.textarea.cursor(), (0, 5));

    app.handle_key_event(key(KeyCode::Enter));
    assert_eq!(app.textarea.selection_range(), Some(((0, 11), (0, 16))));
}

#[test]
fn test_find_advances_through_adjacent_matches() {
    let mut app = app();
    type_str(&mut app, "aaaa");

    app.handle_key_event(ctrl('f'));
    type_str(&mut app, "aa");
    app.handle_key_event(key(KeyCode::Enter));
    // Cursor starts at the buffer end, so the first hit wraps to the front.
    assert_eq!(app.textarea.selection_range(), Some(((0, 0), (0, 2))));

    app.handle_key_event(key(KeyCode::Enter));
    assert_eq!(app.textarea.selection_range(), Some(((0, 2), (0, 4))));
}

#[test]
fn test_find_miss_keeps_prompt_and_reports() {
    let mut app = app();
    type_str(&mut app, "hello");
    app.handle_key_event(ctrl('f'));
    type_str(&mut app, "zebra");
    app.handle_key_event(key(KeyCode::Enter));
    assert_eq!(app.status_message, "Not found: zebra");
    assert!(app.prompt.is_some());
}

#[test]
fn test_console_clear_shortcut() {
    let mut app = app();
    app.console.push_chunk("stale\n", OutputKind::Stdout);
    assert!(!app.console.is_empty());
    app.handle_key_event(ctrl('l'));
    assert!(app.console.is_empty());
}

#[test]
fn test_focus_cycle_and_escape_return() {
    let mut app = app();
    assert_eq!(app.focused_pane, FocusedPane::Editor);
    app.handle_key_event(ctrl('b'));
    assert_eq!(app.focused_pane, FocusedPane::Sidebar);
    app.handle_key_event(ctrl('b'));
    assert_eq!(app.focused_pane, FocusedPane::Console);
    app.handle_key_event(key(KeyCode::Esc));
    assert_eq!(app.focused_pane, FocusedPane::Editor);
}

#[test]
fn test_sidebar_tab_shortcut_wraps() {
    let mut app = app();
    let mut seen = Vec::new();
    for _ in 0..4 {
        app.handle_key_event(ctrl('t'));
        seen.push(app.sidebar_tab);
    }
    assert_eq!(
        seen,
        vec![
            SidebarTab::CheatSheet,
            SidebarTab::Examples,
            SidebarTab::Quiz,
            SidebarTab::Helper,
        ]
    );
}

#[test]
fn test_undo_redo_shortcuts() {
    let mut app = app();
    type_str(&mut app, "abc");
    for _ in 0..10 {
        app.handle_key_event(ctrl('z'));
    }
    assert_eq!(app.buffer_text(), "");
    for _ in 0..10 {
        app.handle_key_event(ctrl('y'));
    }
    assert_eq!(app.buffer_text(), "abc");
    assert!(app.document.is_modified());
}

#[test]
fn test_escape_cancels_selection() {
    let mut app = app();
    type_str(&mut app, "abc");
    app.handle_key_event(ctrl('a'));
    assert!(app.textarea.selection_range().is_some());
    app.handle_key_event(key(KeyCode::Esc));
    assert!(app.textarea.selection_range().is_none());
}

#[test]
fn test_help_overlay_swallows_next_key() {
    let mut app = app();
    app.handle_key_event(key(KeyCode::F(1)));
    assert!(app.help.is_some());
    app.handle_key_event(key(KeyCode::Char('x')));
    assert!(app.help.is_none());
    assert_eq!(app.buffer_text(), "");
}
