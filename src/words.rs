//! Word extraction around a cursor position.
//!
//! Columns are character indices, matching the editor cursor. A "word" is a
//! maximal run of alphanumerics and underscores that touches the cursor on
//! either side.

/// Whether `c` can appear inside an identifier-like word.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Character-column span `(start, end)` of the word touching `col`,
/// end exclusive. Returns an empty span at `col` when no word touches it.
pub fn word_span_at(line: &str, col: usize) -> (usize, usize) {
    let chars: Vec<char> = line.chars().collect();
    let col = col.min(chars.len());
    let mut start = col;
    while start > 0 && is_word_char(chars[start - 1]) {
        start -= 1;
    }
    let mut end = col;
    while end < chars.len() && is_word_char(chars[end]) {
        end += 1;
    }
    (start, end)
}

/// The word touching `col`, or the empty string.
pub fn word_at(line: &str, col: usize) -> &str {
    let (start, end) = word_span_at(line, col);
    &line[byte_offset(line, start)..byte_offset(line, end)]
}

fn byte_offset(line: &str, col: usize) -> usize {
    line.char_indices()
        .nth(col)
        .map_or(line.len(), |(offset, _)| offset)
}
