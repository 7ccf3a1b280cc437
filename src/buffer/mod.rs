//! Editing buffer
//!
//! Translates key-level editing (typing, Enter, Backspace, line moves) into
//! calls on a [`PieceTable`]. The buffer owns the cursor, the scroll offset
//! and the `modified` flag; the table owns text and history.
//!
//! Every multi-character removal within a line is issued as one
//! single-character delete per character so undo stays character-granular.
//! Joining lines (Backspace at column 0) is two explicit steps: an insertion
//! into the previous line and a structural removal of the current one.

use crate::constants::text::BRACE_PAIRS;
use crate::constants::ui::{DEFAULT_COLS, DEFAULT_ROWS};
use crate::cursor::Cursor;
use crate::error::{EditError, Result};
use crate::settings::EditorSettings;
use crate::table::PieceTable;
use crate::viewport::Viewport;
use std::fmt::{self, Display};

pub mod movement;

fn closing_partner(ch: char) -> Option<char> {
    BRACE_PAIRS
        .iter()
        .find(|(open, _)| *open == ch)
        .map(|(_, close)| *close)
}

fn is_closing(ch: char) -> bool {
    BRACE_PAIRS.iter().any(|(_, close)| *close == ch)
}

#[derive(Debug, Clone)]
pub struct Buffer {
    table: PieceTable,
    cursor: Cursor,
    viewport: Viewport,
    settings: EditorSettings,
    /// Set on every mutating call, cleared on load and save
    modified: bool,
}

impl Buffer {
    #[must_use]
    pub fn new(text: &str, settings: EditorSettings) -> Self {
        Self::from_table(PieceTable::new(text), settings)
    }

    #[must_use]
    pub fn from_table(table: PieceTable, settings: EditorSettings) -> Self {
        Buffer {
            table,
            cursor: Cursor::default(),
            viewport: Viewport::new(DEFAULT_ROWS, DEFAULT_COLS),
            settings,
            modified: false,
        }
    }

    #[must_use]
    pub fn table(&self) -> &PieceTable {
        &self.table
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.table.text()
    }

    #[must_use]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn set_cursor(&mut self, line: usize, col: usize) -> Result<()> {
        let len = self.table.line_len(line)?;
        if col > len {
            return Err(EditError::malformed_offset(line, col, len));
        }
        self.cursor = Cursor::new(line, col);
        self.follow_cursor();
        Ok(())
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    #[must_use]
    pub fn settings(&self) -> &EditorSettings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut EditorSettings {
        &mut self.settings
    }

    #[must_use]
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Clear the modified flag after the text was persisted
    pub fn mark_saved(&mut self) {
        self.modified = false;
    }

    /// Swap in a freshly built table (reload). History is discarded with the old table.
    pub fn replace_table(&mut self, table: PieceTable) {
        self.table = table;
        self.cursor.clamp(&self.table);
        self.modified = false;
        self.follow_cursor();
    }

    /// Rendered column of the cursor, tabs expanded
    #[must_use]
    pub fn rendered_cursor_col(&self) -> usize {
        self.cursor.rendered_col(&self.table, self.settings.tab_size)
    }

    /// Scroll so the cursor is visible; returns true if the view moved
    pub fn follow_cursor(&mut self) -> bool {
        let col = self.rendered_cursor_col();
        self.viewport
            .update(self.cursor.line, col, self.table.line_count())
    }

    #[must_use]
    pub fn char_under_cursor(&self) -> Option<char> {
        self.table.char_at(self.cursor.line, self.cursor.col).ok()
    }

    fn edited(&mut self) {
        self.modified = true;
        self.follow_cursor();
    }

    // -------------------------------------------------------------------------
    // Insertion
    // -------------------------------------------------------------------------

    /// Type a single character at the cursor
    pub fn insert_char(&mut self, ch: char) -> Result<()> {
        match ch {
            '\n' => return self.newline(),
            '\t' => return self.insert_tab(),
            _ => {}
        }

        let Cursor { line, col } = self.cursor;

        // Type over a closing bracket instead of doubling it
        if self.settings.match_braces
            && is_closing(ch)
            && self.table.char_at(line, col).ok() == Some(ch)
        {
            self.cursor.col += 1;
            self.follow_cursor();
            return Ok(());
        }

        let mut utf8 = [0u8; 4];
        self.table.insert(ch.encode_utf8(&mut utf8), line, col)?;
        self.cursor.col += 1;

        if self.settings.match_braces {
            if let Some(close) = closing_partner(ch) {
                self.table.insert(close.encode_utf8(&mut utf8), line, col + 1)?;
            }
        }

        self.edited();
        Ok(())
    }

    /// Insert a soft tab or a tab character, per settings
    pub fn insert_tab(&mut self) -> Result<()> {
        let Cursor { line, col } = self.cursor;
        if self.settings.tabs_are_spaces {
            let tab = self.settings.soft_tab();
            self.table.insert(&tab, line, col)?;
            self.cursor.col += self.settings.tab_size;
        } else {
            self.table.insert("\t", line, col)?;
            self.cursor.col += 1;
        }
        self.edited();
        Ok(())
    }

    /// Paste `text`, splitting lines at each line break
    pub fn insert_str(&mut self, text: &str) -> Result<()> {
        for (idx, segment) in text.split('\n').enumerate() {
            if idx > 0 {
                self.newline()?;
            }
            if segment.is_empty() {
                continue;
            }
            let Cursor { line, col } = self.cursor;
            self.table.insert(segment, line, col)?;
            self.cursor.col += segment.chars().count();
        }
        self.edited();
        Ok(())
    }

    /// Break the current line at the cursor
    pub fn newline(&mut self) -> Result<()> {
        let Cursor { line, col } = self.cursor;
        let len = self.table.line_len(line)?;

        if col == 0 && len > 0 {
            // Start of a non-empty line: push it down
            self.table.insert_line(line, "")?;
        } else if col >= len {
            self.table.insert_line(line + 1, "")?;
        } else {
            let text = self.table.line_text(line)?;
            let right: String = text.chars().skip(col).collect();
            let right_len = len - col;

            // Strip the right part from the end, one character at a time
            for i in 0..right_len {
                self.table.delete(line, len - i)?;
            }
            self.table.insert_line(line + 1, &right)?;
        }

        self.cursor = Cursor::new(line + 1, 0);
        self.edited();
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Deletion
    // -------------------------------------------------------------------------

    /// Delete the character left of the cursor, joining lines at column 0.
    ///
    /// A join is an insertion into the previous line plus a structural
    /// removal. Undo reverts only the insertion: the joined line's text
    /// disappears from the previous line and the removed line stays gone.
    pub fn backspace(&mut self) -> Result<()> {
        let Cursor { line, col } = self.cursor;

        if col == 0 {
            if line > 0 {
                self.join_with_previous(line)?;
                self.edited();
            }
            return Ok(());
        }

        let tab_size = self.settings.tab_size;
        if self.settings.hungry_backspace && col >= tab_size {
            let text = self.table.line_text(line)?;
            let soft_tab = self.settings.soft_tab();
            let before: String = text.chars().skip(col - tab_size).take(tab_size).collect();
            if before == soft_tab {
                for _ in 0..tab_size {
                    self.table.delete(line, self.cursor.col)?;
                    self.cursor.col -= 1;
                }
                self.edited();
                return Ok(());
            }
        }

        self.table.delete(line, col)?;
        self.cursor.col -= 1;
        self.edited();
        Ok(())
    }

    /// Delete the character under the cursor, joining the next line at end of line
    pub fn delete_forward(&mut self) -> Result<()> {
        let Cursor { line, col } = self.cursor;
        let len = self.table.line_len(line)?;

        if col < len {
            self.table.delete(line, col + 1)?;
        } else if line + 1 < self.table.line_count() {
            self.join_with_previous(line + 1)?;
            self.cursor = Cursor::new(line, col);
        } else {
            return Ok(());
        }
        self.edited();
        Ok(())
    }

    /// Backspace repeatedly until the start of the line
    pub fn delete_to_line_start(&mut self) -> Result<()> {
        if self.cursor.col == 0 {
            return self.backspace();
        }
        while self.cursor.col > 0 {
            self.backspace()?;
        }
        Ok(())
    }

    /// Remove the current line.
    ///
    /// Removing one of several lines is structural and records nothing, so
    /// undo cannot bring the line back. The sole line is cleared instead, one
    /// delete node per character, and undo restores its text.
    pub fn delete_line(&mut self) -> Result<()> {
        let line = self.cursor.line;
        if self.table.line_count() == 1 {
            let len = self.table.line_len(line)?;
            for i in 0..len {
                self.table.delete(line, len - i)?;
            }
        } else {
            self.table.remove_line(line)?;
        }

        if self.cursor.line >= self.table.line_count() {
            self.cursor.line = self.table.line_count() - 1;
        }
        self.cursor.col = self.table.line_len(self.cursor.line)?;
        self.edited();
        Ok(())
    }

    /// Append line `line` to the previous one and drop it; cursor lands at the join
    fn join_with_previous(&mut self, line: usize) -> Result<()> {
        let text = self.table.line_text(line)?;
        let prev_len = self.table.line_len(line - 1)?;
        if !text.is_empty() {
            self.table.insert(&text, line - 1, prev_len)?;
        }
        self.table.remove_line(line)?;
        self.cursor = Cursor::new(line - 1, prev_len);
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Line moves
    // -------------------------------------------------------------------------

    pub fn swap_line_up(&mut self) -> Result<bool> {
        let line = self.cursor.line;
        if line == 0 {
            return Ok(false);
        }
        self.table.swap_lines(line - 1, line)?;
        self.cursor.line -= 1;
        self.edited();
        Ok(true)
    }

    pub fn swap_line_down(&mut self) -> Result<bool> {
        let line = self.cursor.line;
        if line + 1 >= self.table.line_count() {
            return Ok(false);
        }
        self.table.swap_lines(line, line + 1)?;
        self.cursor.line += 1;
        self.edited();
        Ok(true)
    }

    // -------------------------------------------------------------------------
    // History
    // -------------------------------------------------------------------------

    pub fn undo(&mut self) -> bool {
        let changed = self.table.undo();
        if changed {
            self.cursor.clamp(&self.table);
            self.edited();
        }
        changed
    }

    pub fn redo(&mut self) -> bool {
        let changed = self.table.redo();
        if changed {
            self.cursor.clamp(&self.table);
            self.edited();
        }
        changed
    }
}

impl Display for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.table)
    }
}
