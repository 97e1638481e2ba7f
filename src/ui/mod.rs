//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]** — application state, keyboard event loop, pane focus, prompts
//!   and overlays
//! - **[`panes`]** — stateless render functions for each visible pane (editor,
//!   console, sidebar, status bar) plus the transient overlays
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a [`Runner`] and
//! call [`App::run`] to start the event loop.
//!
//! [`Runner`]: crate::runner::Runner
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
