// pytutor: terminal Python learning editor

mod console;
mod content;
mod document;
mod highlight;
mod quiz;
mod runner;
mod ui;
mod words;

use std::io;
use std::path::Path;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use runner::Runner;
use ui::App;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    let runner = Runner::from_env();
    let runner_ok = runner.available();
    if !runner_ok {
        eprintln!(
            "Warning: could not launch '{}'; running code will fail.",
            runner.python()
        );
        eprintln!(
            "Set {} to a Python 3 binary to enable the console.",
            runner::PYTHON_ENV
        );
    }

    let mut app = App::new(runner);
    if !runner_ok {
        app.console.push_notice(&format!(
            "No Python interpreter at '{}'. Set {} and restart.",
            app.runner.python(),
            runner::PYTHON_ENV
        ));
    }
    if let Some(file) = args.get(1) {
        if let Err(err) = app.open_path(Path::new(file)) {
            eprintln!("Warning: {err:#}; starting with an empty buffer");
        }
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
