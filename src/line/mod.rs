//! Lines
//! An immutable original snapshot plus the ordered list of active node
//! indices that apply to it.

//! ## line/ Invariants
//!
//! - `original` is never edited after construction.
//! - A line never owns nodes; it holds indices into the document's global log.
//! - Current text is derived on every read by replaying active nodes in the
//!   order they were attached to this line, never sorted by offset.
//! - `LineId` is stable for the lifetime of the line, whatever its position.

use crate::piece::{NodeIndex, PieceNode};
use crate::string_nav::{char_at, char_len};
use std::fmt;

/// Stable identity of a line inside one table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineId(pub u64);

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    id: LineId,
    original: String,
    active: Vec<NodeIndex>,
}

impl Line {
    #[must_use]
    pub fn new(id: LineId, original: impl Into<String>) -> Self {
        Line {
            id,
            original: original.into(),
            active: Vec::new(),
        }
    }

    #[must_use]
    pub fn id(&self) -> LineId {
        self.id
    }

    /// Snapshot the line was created from
    #[must_use]
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Active node indices in replay order
    #[must_use]
    pub fn active_nodes(&self) -> &[NodeIndex] {
        &self.active
    }

    /// Record `node` at the end of `log` and mark it active for this line
    pub fn append_node(&mut self, node: PieceNode, log: &mut Vec<PieceNode>) -> NodeIndex {
        debug_assert_eq!(node.line(), self.id);
        let index = log.len();
        log.push(node);
        self.active.push(index);
        index
    }

    /// Drop `index` from the active set; returns false if it was not active
    pub(crate) fn deactivate(&mut self, index: NodeIndex) -> bool {
        match self.active.iter().rposition(|&i| i == index) {
            Some(pos) => {
                self.active.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Mark an already-logged node active again, as the newest edit of this line
    pub(crate) fn reactivate(&mut self, index: NodeIndex) {
        self.active.push(index);
    }

    /// Replay the original snapshot through every active node
    #[must_use]
    pub fn text(&self, log: &[PieceNode]) -> String {
        let mut current = self.original.clone();
        for node in self.active.iter().filter_map(|&i| log.get(i)) {
            node.apply(&mut current);
        }
        current
    }

    /// Current length in code points
    #[must_use]
    pub fn length(&self, log: &[PieceNode]) -> usize {
        if self.active.is_empty() {
            return char_len(&self.original);
        }
        char_len(&self.text(log))
    }
}

/// Read-only view of a line bound to the log it replays from
#[derive(Debug, Clone, Copy)]
pub struct LineView<'a> {
    line: &'a Line,
    log: &'a [PieceNode],
}

impl<'a> LineView<'a> {
    pub(crate) fn new(line: &'a Line, log: &'a [PieceNode]) -> Self {
        LineView { line, log }
    }

    #[must_use]
    pub fn id(&self) -> LineId {
        self.line.id()
    }

    #[must_use]
    pub fn original(&self) -> &'a str {
        self.line.original()
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.line.text(self.log)
    }

    #[must_use]
    pub fn length(&self) -> usize {
        self.line.length(self.log)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.length() == 0
    }

    #[must_use]
    pub fn char_at(&self, offset: usize) -> Option<char> {
        char_at(&self.text(), offset)
    }

    /// Number of active nodes replayed on every read
    #[must_use]
    pub fn edit_count(&self) -> usize {
        self.line.active_nodes().len()
    }
}

impl fmt::Display for LineView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text())
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
