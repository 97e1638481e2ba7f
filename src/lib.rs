//! # Introduction
//!
//! pytutor is a terminal learning environment for Python: a text editor with
//! debounced syntax highlighting, a console that runs the buffer through the
//! host interpreter, keyword tips, curated examples, and a small quiz, all on
//! one [ratatui](https://docs.rs/ratatui) screen.
//!
//! ## Data flow
//!
//! ```text
//! Keys → App → (buffer | quiz | prompts) → panes → terminal
//!           └→ Runner → python3 subprocess → Console
//! ```
//!
//! 1. [`content`] — static learning material: keyword tables, tips, the cheat
//!    sheet, curated examples, and quiz questions.
//! 2. [`highlight`] — debounced regex scanner producing per-row colour spans.
//! 3. [`runner`] — pipes code to the host Python interpreter and captures
//!    stdout and stderr.
//! 4. [`document`], [`console`], [`quiz`], [`words`] — editor-adjacent state
//!    and text helpers.
//! 5. [`ui`] — ratatui-based TUI; not part of the stable library API.

pub mod console;
pub mod content;
pub mod document;
pub mod highlight;
pub mod quiz;
pub mod runner;
pub mod ui;
pub mod words;
