//! Debounced whole-buffer syntax scanning for Python source.
//!
//! Three compiled patterns find keywords, string literals, and line comments.
//! Matches are painted in that order, so where spans overlap the comment
//! colour wins over string, which wins over keyword. This is not a real
//! tokenizer: a `#` inside a string literal still starts a comment span.

use std::time::Duration;

use regex::Regex;

use crate::content::PYTHON_KEYWORDS;

/// Delay between the last buffer edit and the next rescan.
pub const DEBOUNCE: Duration = Duration::from_millis(200);

/// The colour class of a highlighted span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightKind {
    Keyword,
    String,
    Comment,
}

/// A half-open `[start, end)` run of character columns on a single row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightSpan {
    pub start: usize,
    pub end: usize,
    pub kind: HighlightKind,
}

/// Resolve the colour class at `col`, honouring paint order.
///
/// Spans are stored in the order they were painted; the last span covering
/// the column wins.
pub fn kind_at(spans: &[HighlightSpan], col: usize) -> Option<HighlightKind> {
    spans
        .iter()
        .rev()
        .find(|span| span.start <= col && col < span.end)
        .map(|span| span.kind)
}

/// Whole-buffer scanner with its patterns compiled once.
pub struct Highlighter {
    keywords: Regex,
    strings: Regex,
    comments: Regex,
}

impl Highlighter {
    pub fn new() -> Self {
        let alternatives = PYTHON_KEYWORDS.join("|");
        Self {
            keywords: Regex::new(&format!(r"\b(?:{alternatives})\b")).unwrap(),
            strings: Regex::new(r#"(?s)(?:'(?:\\.|[^'\\])*'|"(?:\\.|[^"\\])*")"#).unwrap(),
            comments: Regex::new(r"#[^\n]*").unwrap(),
        }
    }

    /// Scan `text` and return one span list per row, in paint order.
    pub fn scan(&self, text: &str) -> Vec<Vec<HighlightSpan>> {
        let rows = row_ranges(text);
        let mut spans: Vec<Vec<HighlightSpan>> = vec![Vec::new(); rows.len()];
        for (pattern, kind) in [
            (&self.keywords, HighlightKind::Keyword),
            (&self.strings, HighlightKind::String),
            (&self.comments, HighlightKind::Comment),
        ] {
            for found in pattern.find_iter(text) {
                paint(text, &rows, &mut spans, found.start(), found.end(), kind);
            }
        }
        spans
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

/// Byte range of each row, terminating newline excluded.
fn row_ranges(text: &str) -> Vec<(usize, usize)> {
    let mut ranges = Vec::new();
    let mut start = 0;
    for (offset, byte) in text.bytes().enumerate() {
        if byte == b'\n' {
            ranges.push((start, offset));
            start = offset + 1;
        }
    }
    ranges.push((start, text.len()));
    ranges
}

/// Record a byte-range match as character-column spans, split per row.
fn paint(
    text: &str,
    rows: &[(usize, usize)],
    spans: &mut [Vec<HighlightSpan>],
    start: usize,
    end: usize,
    kind: HighlightKind,
) {
    let mut row = rows.partition_point(|&(_, row_end)| row_end < start);
    while row < rows.len() {
        let (row_start, row_end) = rows[row];
        if row_start >= end {
            break;
        }
        let from = start.max(row_start);
        let to = end.min(row_end);
        if from < to {
            let col_start = text[row_start..from].chars().count();
            let col_end = col_start + text[from..to].chars().count();
            spans[row].push(HighlightSpan {
                start: col_start,
                end: col_end,
                kind,
            });
        }
        row += 1;
    }
}
