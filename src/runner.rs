//! Code execution through the host Python interpreter.
//!
//! User code is piped to a small driver run with `python -c`. The driver
//! reads the whole program from stdin before executing it, so the write
//! side never deadlocks, and executes it in a fresh namespace whose only
//! predefined name is `__name__` set to `"__main__"`. Runtime failures are
//! reported on stderr as a single `Error: <message>` line rather than a
//! traceback; beginners get the message without the noise.

use std::env;
use std::io::{self, Write};
use std::process::{Command, Stdio};

/// Interpreter used when [`PYTHON_ENV`] is unset.
pub const DEFAULT_PYTHON: &str = "python3";

/// Environment variable naming an alternative interpreter binary.
pub const PYTHON_ENV: &str = "PYTUTOR_PYTHON";

const DRIVER: &str = r#"import sys
code = sys.stdin.read()
try:
    exec(code, {"__name__": "__main__"})
except Exception as exc:
    sys.stderr.write(f"Error: {exc}\n")
"#;

/// Captured streams from one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Handle on a Python interpreter binary.
#[derive(Debug, Clone)]
pub struct Runner {
    python: String,
}

impl Runner {
    pub fn new(python: impl Into<String>) -> Self {
        Self {
            python: python.into(),
        }
    }

    /// Resolve the interpreter from the environment, falling back to
    /// [`DEFAULT_PYTHON`].
    pub fn from_env() -> Self {
        Self::new(env::var(PYTHON_ENV).unwrap_or_else(|_| DEFAULT_PYTHON.to_string()))
    }

    /// Name of the interpreter binary this runner launches.
    pub fn python(&self) -> &str {
        &self.python
    }

    /// Whether the interpreter can be launched at all.
    pub fn available(&self) -> bool {
        Command::new(&self.python)
            .arg("--version")
            .output()
            .is_ok()
    }

    /// Run `code` to completion and capture both streams.
    ///
    /// Never fails: a launch error becomes an `Error: …` line on the
    /// captured stderr, the same shape a runtime failure takes.
    pub fn execute(&self, code: &str) -> RunOutput {
        match self.try_execute(code) {
            Ok(output) => output,
            Err(err) => RunOutput {
                stdout: String::new(),
                stderr: format!("Error: {err}\n"),
            },
        }
    }

    fn try_execute(&self, code: &str) -> io::Result<RunOutput> {
        let mut child = Command::new(&self.python)
            .arg("-c")
            .arg(DRIVER)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;
        if let Some(mut stdin) = child.stdin.take() {
            if let Err(err) = stdin.write_all(code.as_bytes()) {
                // The interpreter may already have exited; reap it rather
                // than leaving a zombie until the editor closes.
                let _ = child.kill();
                let _ = child.wait();
                return Err(err);
            }
        }
        let output = child.wait_with_output()?;
        Ok(RunOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

impl Default for Runner {
    fn default() -> Self {
        Self::from_env()
    }
}
