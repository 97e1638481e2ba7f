//! TUI pane rendering modules
//!
//! This module provides the rendering logic for all visual panes in the TUI,
//! organized by responsibility for maintainability.
//!
//! # Pane Modules
//!
//! - [`editor`]: Text buffer display with line numbers, selection, and syntax spans
//! - [`console`]: Captured program output with per-stream colouring
//! - [`sidebar`]: Tabbed learning panel (helper, cheat sheet, examples, quiz)
//! - [`status`]: Status bar with file state, cursor position, and keybindings
//! - [`overlay`]: Autocomplete popup, prompt line, and modal boxes
//!
//! # Architecture
//!
//! Each pane module exports a primary `render_*` function plus any state
//! types it scrolls with (e.g. `EditorScrollState`). Panes are stateless
//! themselves; all mutable state lives in [`crate::ui::App`] and is passed
//! in by the draw pass.

pub mod console;
pub mod editor;
pub mod overlay;
pub mod sidebar;
pub mod status;

// Re-export render functions for convenience
pub use console::render_console_pane;
pub use editor::{render_editor_pane, EditorScrollState};
pub use overlay::{render_autocomplete, render_confirm, render_help, render_prompt};
pub use sidebar::render_sidebar_pane;
pub use status::render_status_bar;
