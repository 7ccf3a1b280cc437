//! Viewport management
//! Scroll offset over a document, measured in lines and rendered columns

//! ## viewport/ Invariants
//!
//! - The viewport never mutates document contents.
//! - After `update`, the cursor is inside the visible area.
//! - Horizontal offsets are rendered columns, not logical columns.

/// Viewport tracks which portion of the document is visible
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    /// Top line of the visible area (0-indexed)
    top_line: usize,
    /// Leftmost visible rendered column
    left_col: usize,
    /// Number of visible rows
    visible_rows: usize,
    /// Number of visible cells per row
    visible_cols: usize,
}

impl Viewport {
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Viewport {
            top_line: 0,
            left_col: 0,
            visible_rows: rows,
            visible_cols: cols,
        }
    }

    /// Scroll just enough to keep the cursor visible.
    /// Returns true if the scroll offset changed.
    pub fn update(&mut self, cursor_line: usize, cursor_col: usize, total_lines: usize) -> bool {
        let before = (self.top_line, self.left_col);

        if self.visible_rows > 0 {
            if cursor_line < self.top_line {
                self.top_line = cursor_line;
            }
            let bottom = self.top_line + self.visible_rows - 1;
            if cursor_line > bottom {
                self.top_line = cursor_line + 1 - self.visible_rows;
            }

            // Don't leave blank rows below the last line when the document fits
            if total_lines <= self.visible_rows {
                self.top_line = 0;
            } else if self.top_line + self.visible_rows > total_lines {
                self.top_line = total_lines - self.visible_rows;
            }
        }

        if self.visible_cols > 0 {
            if cursor_col < self.left_col {
                self.left_col = cursor_col;
            }
            let right = self.left_col + self.visible_cols - 1;
            if cursor_col > right {
                self.left_col = cursor_col + 1 - self.visible_cols;
            }
        }

        before != (self.top_line, self.left_col)
    }

    pub fn scroll_up(&mut self, amount: usize) {
        self.top_line = self.top_line.saturating_sub(amount);
    }

    pub fn scroll_down(&mut self, amount: usize, total_lines: usize) {
        let max_top = total_lines.saturating_sub(1);
        self.top_line = (self.top_line + amount).min(max_top);
    }

    /// Is `line` inside the visible rows
    #[must_use]
    pub fn is_line_visible(&self, line: usize) -> bool {
        line >= self.top_line && line < self.top_line + self.visible_rows
    }

    /// Visible line range, clamped to the document
    #[must_use]
    pub fn visible_lines(&self, total_lines: usize) -> std::ops::Range<usize> {
        let start = self.top_line.min(total_lines);
        let end = (self.top_line + self.visible_rows).min(total_lines);
        start..end
    }

    #[must_use]
    pub fn top_line(&self) -> usize {
        self.top_line
    }

    #[must_use]
    pub fn left_col(&self) -> usize {
        self.left_col
    }

    #[must_use]
    pub fn visible_rows(&self) -> usize {
        self.visible_rows
    }

    #[must_use]
    pub fn visible_cols(&self) -> usize {
        self.visible_cols
    }

    pub fn set_size(&mut self, rows: usize, cols: usize) {
        self.visible_rows = rows;
        self.visible_cols = cols;
    }

    /// Set the scroll position (used when restoring view state)
    pub fn set_scroll(&mut self, top_line: usize, left_col: usize) {
        self.top_line = top_line;
        self.left_col = left_col;
    }

    /// Current scroll position as (top_line, left_col)
    #[must_use]
    pub fn get_scroll(&self) -> (usize, usize) {
        (self.top_line, self.left_col)
    }
}
