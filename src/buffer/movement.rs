//! Cursor movement over a [`Buffer`]
//!
//! Movement never records nodes and never sets the modified flag. Methods
//! return true when the cursor moved.

use super::Buffer;
use crate::constants::ui::PAGE_SCROLL_AMOUNT;
use crate::cursor::Cursor;
use crate::string_nav::{next_word_break, previous_word_break};

impl Buffer {
    fn line_len_at(&self, line: usize) -> usize {
        self.table.line_len(line).unwrap_or(0)
    }

    fn last_line(&self) -> usize {
        self.table.line_count() - 1
    }

    fn moved_to(&mut self, target: Cursor) -> bool {
        if target == self.cursor {
            return false;
        }
        self.cursor = target;
        self.follow_cursor();
        true
    }

    /// Move left one character, wrapping to the end of the previous line
    pub fn move_left(&mut self) -> bool {
        let Cursor { line, col } = self.cursor;
        if col > 0 {
            self.moved_to(Cursor::new(line, col - 1))
        } else if line > 0 {
            let end = self.line_len_at(line - 1);
            self.moved_to(Cursor::new(line - 1, end))
        } else {
            false
        }
    }

    /// Move right one character, wrapping to the start of the next line
    pub fn move_right(&mut self) -> bool {
        let Cursor { line, col } = self.cursor;
        if col < self.line_len_at(line) {
            self.moved_to(Cursor::new(line, col + 1))
        } else if line < self.last_line() {
            self.moved_to(Cursor::new(line + 1, 0))
        } else {
            false
        }
    }

    pub fn move_up(&mut self) -> bool {
        let Cursor { line, col } = self.cursor;
        if line == 0 {
            return false;
        }
        let col = col.min(self.line_len_at(line - 1));
        self.moved_to(Cursor::new(line - 1, col))
    }

    pub fn move_down(&mut self) -> bool {
        let Cursor { line, col } = self.cursor;
        if line >= self.last_line() {
            return false;
        }
        let col = col.min(self.line_len_at(line + 1));
        self.moved_to(Cursor::new(line + 1, col))
    }

    pub fn move_to_line_start(&mut self) -> bool {
        self.moved_to(Cursor::new(self.cursor.line, 0))
    }

    pub fn move_to_line_end(&mut self) -> bool {
        let end = self.line_len_at(self.cursor.line);
        self.moved_to(Cursor::new(self.cursor.line, end))
    }

    /// Jump to the next space or underscore on the line
    pub fn move_word_right(&mut self) -> bool {
        let Cursor { line, col } = self.cursor;
        let text = self.table.line_text(line).unwrap_or_default();
        if col >= text.chars().count() {
            return self.move_right();
        }
        self.moved_to(Cursor::new(line, next_word_break(&text, col)))
    }

    /// Jump back past the previous space or underscore; at column 0 go to
    /// the end of the previous line
    pub fn move_word_left(&mut self) -> bool {
        let Cursor { line, col } = self.cursor;
        if col == 0 {
            return self.move_left();
        }
        let text = self.table.line_text(line).unwrap_or_default();
        self.moved_to(Cursor::new(line, previous_word_break(&text, col)))
    }

    /// Go to a 1-based line number, clamped to the document
    pub fn goto_line(&mut self, number: usize) -> bool {
        let line = number.saturating_sub(1).min(self.last_line());
        let col = self.cursor.col.min(self.line_len_at(line));
        self.moved_to(Cursor::new(line, col))
    }

    pub fn page_up(&mut self) -> bool {
        self.viewport.scroll_up(PAGE_SCROLL_AMOUNT);
        let mut moved = false;
        for _ in 0..PAGE_SCROLL_AMOUNT {
            moved |= self.move_up();
        }
        moved
    }

    pub fn page_down(&mut self) -> bool {
        let total = self.table.line_count();
        self.viewport.scroll_down(PAGE_SCROLL_AMOUNT, total);
        let mut moved = false;
        for _ in 0..PAGE_SCROLL_AMOUNT {
            moved |= self.move_down();
        }
        moved
    }
}
