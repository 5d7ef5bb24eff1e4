use unicode_width::UnicodeWidthChar;

use super::*;

/// Marks a cell that is intentionally blank but must not read as a continuation.
const BLANK_CELL_ESCAPE: &str = "\\";

/// Columns occupied on screen: 2 for East Asian wide and fullwidth chars, 1 otherwise.
pub(super) fn char_columns(ch: char) -> usize {
    if ch.width() == Some(2) { 2 } else { 1 }
}

pub(super) fn display_width(text: &str) -> usize {
    text.chars().map(char_columns).sum()
}

/// Returns the chars whose first display cell lies in `[start, end)`.
pub(super) fn slice_display_columns(line: &str, start: usize, end: usize) -> &str {
    let mut begin = line.len();
    let mut finish = line.len();
    let mut column = 0;

    for (offset, ch) in line.char_indices() {
        if column >= start && begin == line.len() {
            begin = offset;
        }
        if column >= end {
            finish = offset;
            break;
        }
        column += char_columns(ch);
    }

    &line[begin..finish]
}

pub(super) fn cell_value(line: &str, columns: &[ColumnSpan], index: usize) -> String {
    let span = columns[index];
    let is_last = index + 1 == columns.len();

    // The last column has no separator to its right, so overflowing text belongs to it.
    let end = if is_last && display_width(line) > span.end {
        usize::MAX
    } else {
        span.end
    };

    let value = slice_display_columns(line, span.start, end).trim_end();
    if value == BLANK_CELL_ESCAPE {
        " ".to_string()
    } else {
        value.to_string()
    }
}

pub(super) fn record_from_line(line: &str, columns: &[ColumnSpan]) -> Record {
    (0..columns.len())
        .map(|index| cell_value(line, columns, index))
        .collect()
}
