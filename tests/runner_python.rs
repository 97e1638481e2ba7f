// Integration tests for code execution through the host interpreter.
// Tests that need a real Python skip themselves when none is installed.

use pytutor::runner::Runner;

fn python() -> Option<Runner> {
    let runner = Runner::from_env();
    runner.available().then_some(runner)
}

#[test]
fn test_captures_stdout() {
    let Some(runner) = python() else { return };
    let out = runner.execute("print('hi')");
    assert_eq!(out.stdout, "hi\n");
    assert_eq!(out.stderr, "");
}

#[test]
fn test_runtime_error_becomes_error_line() {
    let Some(runner) = python() else { return };
    let out = runner.execute("raise ValueError('boom')");
    assert_eq!(out.stdout, "");
    assert!(out.stderr.starts_with("Error: "), "stderr: {}", out.stderr);
    assert!(out.stderr.contains("boom"));
}

#[test]
fn test_syntax_error_becomes_error_line() {
    let Some(runner) = python() else { return };
    let out = runner.execute("def broken(:");
    assert!(out.stderr.starts_with("Error: "), "stderr: {}", out.stderr);
}

#[test]
fn test_code_runs_as_main() {
    let Some(runner) = python() else { return };
    let out = runner.execute("print(__name__)");
    assert_eq!(out.stdout, "__main__\n");
}

#[test]
fn test_top_level_names_visible_inside_functions() {
    let Some(runner) = python() else { return };
    let code = "x = 5\ndef get():\n    return x\nprint(get())";
    let out = runner.execute(code);
    assert_eq!(out.stdout, "5\n");
    assert_eq!(out.stderr, "");
}

#[test]
fn test_runs_do_not_share_state() {
    let Some(runner) = python() else { return };
    runner.execute("leftover = 42");
    let out = runner.execute("print('leftover' in dir())");
    assert_eq!(out.stdout, "False\n");
}

#[test]
fn test_user_stderr_precedes_error_line() {
    let Some(runner) = python() else { return };
    let code = "import sys\nsys.stderr.write('first\\n')\nraise RuntimeError('second')";
    let out = runner.execute(code);
    assert_eq!(out.stderr, "first\nError: second\n");
}

#[test]
fn test_input_hits_eof_instead_of_blocking() {
    let Some(runner) = python() else { return };
    // The driver consumes stdin, so input() cannot block the editor.
    let out = runner.execute("input()");
    assert!(out.stderr.starts_with("Error: EOF"), "stderr: {}", out.stderr);
}

#[test]
fn test_missing_interpreter_becomes_error_line() {
    let runner = Runner::new("pytutor-no-such-interpreter");
    let out = runner.execute("print('x')");
    assert_eq!(out.stdout, "");
    assert!(out.stderr.starts_with("Error: "), "stderr: {}", out.stderr);
}

#[test]
fn test_interpreter_exiting_without_reading_reports_error() {
    // `true` quits without reading stdin; the oversized program keeps the
    // pipe write from being absorbed by the kernel buffer, so the write
    // itself fails and takes the launch-error path.
    let runner = Runner::new("true");
    let code = "x = 1\n".repeat(50_000);
    let out = runner.execute(&code);
    assert!(out.stderr.starts_with("Error: "), "stderr: {}", out.stderr);
}
