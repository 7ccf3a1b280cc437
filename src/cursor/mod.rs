//! Cursor and column mapping
//!
//! The edit log only knows logical columns (code-point indices). This module
//! maps them to rendered columns: tabs expand to the configured tab size,
//! wide characters take two cells, control characters render as `^X`.

//! ## cursor/ Invariants
//!
//! - `col` is always a logical column; rendered columns are derived, never stored.
//! - The cursor never mutates the document.
//! - `clamp` keeps the cursor on an existing line and within `0..=line_len`.

use crate::table::PieceTable;
use unicode_width::UnicodeWidthChar;

/// Cells taken by `ch` on screen
#[must_use]
pub fn char_width(ch: char, tab_size: usize) -> usize {
    match ch {
        '\t' => tab_size,
        c if c.is_control() => 2,
        c => UnicodeWidthChar::width(c).unwrap_or(0),
    }
}

/// Rendered column of logical column `col` in `text`
#[must_use]
pub fn rendered_column(text: &str, col: usize, tab_size: usize) -> usize {
    text.chars()
        .take(col)
        .map(|c| char_width(c, tab_size))
        .sum()
}

/// Logical column whose cell span covers rendered column `rendered`.
///
/// Clicking past the end of the line lands at the end of the line.
#[must_use]
pub fn logical_column(text: &str, rendered: usize, tab_size: usize) -> usize {
    let mut cells = 0;
    for (idx, ch) in text.chars().enumerate() {
        let width = char_width(ch, tab_size);
        if rendered < cells + width.max(1) {
            return idx;
        }
        cells += width;
    }
    text.chars().count()
}

/// Logical position inside a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub line: usize,
    pub col: usize,
}

impl Cursor {
    #[must_use]
    pub fn new(line: usize, col: usize) -> Self {
        Cursor { line, col }
    }

    /// Rendered column of this cursor on its line
    #[must_use]
    pub fn rendered_col(&self, table: &PieceTable, tab_size: usize) -> usize {
        table
            .line_text(self.line)
            .map(|text| rendered_column(&text, self.col, tab_size))
            .unwrap_or(0)
    }

    /// Pull the cursor back inside the document
    pub fn clamp(&mut self, table: &PieceTable) {
        let last = table.line_count() - 1;
        if self.line > last {
            self.line = last;
        }
        let len = table.line_len(self.line).unwrap_or(0);
        if self.col > len {
            self.col = len;
        }
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
