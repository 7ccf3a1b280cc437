//! Piece table document
//!
//! The document is an ordered list of [`Line`]s layered over a single
//! append-only log of [`PieceNode`]s. Lines hold indices into the log, the
//! table owns the nodes. The log gives every edit in the document one total
//! order, which is what undo walks.
//!
//! ## Undo and redo
//!
//! Undo pops the newest node off the log, whichever line it belongs to, and
//! parks it on the redo stack. Redo pushes it back onto the log at the *end*,
//! so a redone node gets a new, newest index rather than its old position.
//! Edits made after a redo therefore sort after it. Callers rely on this.
//!
//! ## Offsets
//!
//! Offsets are code-point indices. Insertion offsets are zero-based; deletion
//! offsets are one-past the removed character, so `delete(l, o)` removes the
//! character at `o - 1`. The asymmetry is load-bearing for cursor arithmetic
//! in the caller layer: the cursor column is exactly the delete offset for a
//! backspace.
//!
//! ## Structure
//!
//! Splitting, removing and swapping lines are structural operations: they do
//! not create nodes and are not undoable. Nodes refer to their line by
//! [`LineId`], so undo still finds the right line after lines move around it.

use crate::constants::text::LINE_SEPARATOR;
use crate::error::{EditError, Result};
use crate::line::{Line, LineId, LineView};
use crate::piece::{NodeIndex, PieceNode};
use crate::string_nav::char_at;
use std::fmt::{self, Display};

#[derive(Debug, Clone)]
pub struct PieceTable {
    lines: Vec<Line>,
    log: Vec<PieceNode>,
    redo_stack: Vec<PieceNode>,
    next_line_id: u64,
}

impl PieceTable {
    /// Build a table from a full document, one line per separator-delimited segment
    #[must_use]
    pub fn new(text: &str) -> Self {
        let mut table = PieceTable {
            lines: Vec::new(),
            log: Vec::new(),
            redo_stack: Vec::new(),
            next_line_id: 0,
        };
        for segment in text.split(LINE_SEPARATOR) {
            let line = table.make_line(segment);
            table.lines.push(line);
        }
        tracing::debug!(lines = table.lines.len(), "piece table created");
        table
    }

    fn make_line(&mut self, text: &str) -> Line {
        let id = LineId(self.next_line_id);
        self.next_line_id += 1;
        Line::new(id, text)
    }

    fn check_line(&self, line: usize) -> Result<()> {
        if line >= self.lines.len() {
            return Err(EditError::line_out_of_range(line, self.lines.len()));
        }
        Ok(())
    }

    fn check_text(line: usize, text: &str) -> Result<()> {
        if text.contains(LINE_SEPARATOR) {
            return Err(EditError::line_break_in_text(line));
        }
        Ok(())
    }

    fn position_of(&self, id: LineId) -> Option<usize> {
        self.lines.iter().position(|l| l.id() == id)
    }

    // -------------------------------------------------------------------------
    // Reading
    // -------------------------------------------------------------------------

    /// Number of lines; never zero
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, idx: usize) -> Result<LineView<'_>> {
        self.check_line(idx)?;
        Ok(LineView::new(&self.lines[idx], &self.log))
    }

    pub fn lines(&self) -> impl Iterator<Item = LineView<'_>> + '_ {
        self.lines.iter().map(|l| LineView::new(l, &self.log))
    }

    pub fn line_text(&self, idx: usize) -> Result<String> {
        Ok(self.line(idx)?.text())
    }

    pub fn line_len(&self, idx: usize) -> Result<usize> {
        Ok(self.line(idx)?.length())
    }

    /// Character at `offset` in the current text of `line`
    pub fn char_at(&self, line: usize, offset: usize) -> Result<char> {
        let text = self.line_text(line)?;
        char_at(&text, offset).ok_or_else(|| {
            EditError::malformed_offset(line, offset, text.chars().count())
        })
    }

    /// Every line's text joined with the line separator
    #[must_use]
    pub fn text(&self) -> String {
        let mut out = String::new();
        for (idx, line) in self.lines.iter().enumerate() {
            if idx > 0 {
                out.push(LINE_SEPARATOR);
            }
            out.push_str(&line.text(&self.log));
        }
        out
    }

    /// Total length in code points, separators included
    #[must_use]
    pub fn len(&self) -> usize {
        let chars: usize = self.lines().map(|l| l.length()).sum();
        chars + self.lines.len() - 1
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].length(&self.log) == 0
    }

    /// The global log, oldest first
    #[must_use]
    pub fn nodes(&self) -> &[PieceNode] {
        &self.log
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.log.len()
    }

    #[must_use]
    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.log.is_empty()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    // -------------------------------------------------------------------------
    // Edits
    // -------------------------------------------------------------------------

    /// Record an insertion of `text` at `offset` on `line`.
    ///
    /// An offset at or past the end of the line appends.
    pub fn insert(&mut self, text: &str, line: usize, offset: usize) -> Result<NodeIndex> {
        self.check_line(line)?;
        Self::check_text(line, text)?;

        let target = &mut self.lines[line];
        let node = PieceNode::new_insertion(target.id(), offset, text);
        let index = target.append_node(node, &mut self.log);
        tracing::trace!(index, line, offset, "insert node");
        Ok(index)
    }

    /// Record the deletion of the character at `offset - 1` on `line`.
    ///
    /// `offset` must be in `1..=line_len`. Never crosses into a neighbouring
    /// line; joining lines is the caller's job.
    pub fn delete(&mut self, line: usize, offset: usize) -> Result<NodeIndex> {
        let len = self.line_len(line)?;
        if offset == 0 || offset > len {
            return Err(EditError::malformed_offset(line, offset, len));
        }

        let target = &mut self.lines[line];
        let node = PieceNode::new_deletion(target.id(), offset);
        let index = target.append_node(node, &mut self.log);
        tracing::trace!(index, line, offset, "delete node");
        Ok(index)
    }

    /// Revert the newest edit in the document; returns false when there is none
    pub fn undo(&mut self) -> bool {
        let Some(node) = self.log.pop() else {
            return false;
        };
        let index = self.log.len();

        match self.position_of(node.line()) {
            Some(pos) => {
                self.lines[pos].deactivate(index);
                tracing::debug!(index, line = pos, "undo");
            }
            None => tracing::debug!(index, owner = %node.line(), "undo on removed line"),
        }

        self.redo_stack.push(node);
        true
    }

    /// Re-apply the most recently undone edit as the newest edit in the log
    pub fn redo(&mut self) -> bool {
        let Some(node) = self.redo_stack.pop() else {
            return false;
        };
        let index = self.log.len();
        let owner = node.line();
        self.log.push(node);

        match self.position_of(owner) {
            Some(pos) => {
                self.lines[pos].reactivate(index);
                tracing::debug!(index, line = pos, "redo");
            }
            None => tracing::debug!(index, %owner, "redo on removed line"),
        }
        true
    }

    // -------------------------------------------------------------------------
    // Structure
    // -------------------------------------------------------------------------

    /// Insert a fresh line snapshot before `idx`; `idx == line_count` appends
    pub fn insert_line(&mut self, idx: usize, text: &str) -> Result<()> {
        if idx > self.lines.len() {
            return Err(EditError::line_out_of_range(idx, self.lines.len()));
        }
        Self::check_text(idx, text)?;
        let line = self.make_line(text);
        self.lines.insert(idx, line);
        Ok(())
    }

    pub fn push_line(&mut self, text: &str) -> Result<()> {
        self.insert_line(self.lines.len(), text)
    }

    /// Remove a line. The sole remaining line is cleared instead.
    pub fn remove_line(&mut self, idx: usize) -> Result<()> {
        self.check_line(idx)?;
        if self.lines.len() == 1 {
            let empty = self.make_line("");
            self.lines[0] = empty;
        } else {
            self.lines.remove(idx);
        }
        Ok(())
    }

    /// Replace a line with a fresh snapshot of `text`
    pub fn replace_line(&mut self, idx: usize, text: &str) -> Result<()> {
        self.check_line(idx)?;
        Self::check_text(idx, text)?;
        let line = self.make_line(text);
        self.lines[idx] = line;
        Ok(())
    }

    pub fn swap_lines(&mut self, a: usize, b: usize) -> Result<()> {
        self.check_line(a)?;
        self.check_line(b)?;
        self.lines.swap(a, b);
        Ok(())
    }
}

impl Default for PieceTable {
    fn default() -> Self {
        PieceTable::new("")
    }
}

impl From<&str> for PieceTable {
    fn from(text: &str) -> Self {
        PieceTable::new(text)
    }
}

impl Display for PieceTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text())
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
