use tower_lsp::lsp_types::{Position, Range};

use crate::report::SourceRange;

/// Convert a UTF-16 LSP column into a character column of `line`.
pub fn char_column_from_utf16(
    line: &str,
    utf16_column: u32,
) -> usize {
    let mut utf16_offset = 0u32;
    let mut char_offset = 0usize;
    for ch in line.chars() {
        if utf16_offset >= utf16_column {
            break;
        }
        utf16_offset += ch.len_utf16() as u32;
        char_offset += 1;
    }
    char_offset
}

/// Convert a character column of `line` into a UTF-16 LSP column.
pub fn utf16_column_from_char(
    line: &str,
    char_column: usize,
) -> u32 {
    line.chars().take(char_column).map(|ch| ch.len_utf16() as u32).sum()
}

/// Map a report range onto an LSP range, using `line_text` to translate
/// character columns into UTF-16 ones when the line is known.
pub fn lsp_range<'a>(
    range: &SourceRange,
    line_text: impl Fn(u32) -> Option<&'a str>,
) -> Range {
    let column = |line: u32, col: u32| match line_text(line) {
        Some(text) => utf16_column_from_char(text, col as usize),
        None => col,
    };
    Range::new(
        Position::new(range.start_line, column(range.start_line, range.start_col)),
        Position::new(range.end_line, column(range.end_line, range.end_col)),
    )
}

/// The line under an LSP position, without its terminator.
pub fn line_at(
    source: &str,
    line: u32,
) -> Option<&str> {
    source.split('\n').nth(line as usize).map(|l| l.strip_suffix('\r').unwrap_or(l))
}
