//! Append-only console buffer fed by program output.
//!
//! Chunks arrive as raw captured text and are split into display lines.
//! A chunk without a trailing newline leaves its last line "open": the next
//! chunk continues it instead of starting a new line, so unterminated
//! `print(..., end='')` output composes the way a real terminal shows it.

/// Colour class of a console line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    Stdout,
    Stderr,
    Notice,
}

/// One display line together with its colour class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleLine {
    pub text: String,
    pub kind: OutputKind,
}

/// The console's line buffer.
#[derive(Debug, Default)]
pub struct Console {
    lines: Vec<ConsoleLine>,
    last_open: bool,
}

impl Console {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a captured chunk, merging into an open trailing line.
    pub fn push_chunk(&mut self, chunk: &str, kind: OutputKind) {
        if chunk.is_empty() {
            return;
        }
        let mut pieces = chunk.split('\n').peekable();
        if let Some(first) = pieces.next() {
            match self.lines.last_mut() {
                Some(last) if self.last_open && last.kind == kind => {
                    last.text.push_str(first);
                }
                _ => self.lines.push(ConsoleLine {
                    text: first.to_string(),
                    kind,
                }),
            }
        }
        // A trailing newline yields one final empty piece; dropping it
        // closes the line instead of opening an empty one.
        let mut open = true;
        while let Some(piece) = pieces.next() {
            if pieces.peek().is_none() && piece.is_empty() {
                open = false;
                break;
            }
            self.lines.push(ConsoleLine {
                text: piece.to_string(),
                kind,
            });
        }
        self.last_open = open;
    }

    /// Append a complete informational line.
    pub fn push_notice(&mut self, text: &str) {
        self.lines.push(ConsoleLine {
            text: text.to_string(),
            kind: OutputKind::Notice,
        });
        self.last_open = false;
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.last_open = false;
    }

    pub fn lines(&self) -> &[ConsoleLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
