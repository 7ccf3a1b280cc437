//! Piece nodes
//! A single recorded edit operation tied to one line.

//! ## piece/ Invariants
//!
//! - A node is immutable once created.
//! - Offsets are character indices into the line text as it stands after
//!   every earlier active node of the same line has been replayed.
//! - `Insert.offset` is zero-based: the text lands before the character at `offset`.
//! - `Delete.offset` is one-past: the character at `offset - 1` is removed.
//! - A multi-character delete is N `Delete` nodes, never a ranged node.

use crate::line::LineId;
use crate::string_nav::{byte_offset, split_at_char};

/// Index of a node in the global log
pub type NodeIndex = usize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PieceNode {
    /// Splice `text` in before the character at `offset`, or append when
    /// `offset` is at or past the end of the line
    Insert {
        line: LineId,
        offset: usize,
        text: String,
    },
    /// Remove the single character immediately before `offset`
    Delete { line: LineId, offset: usize },
}

impl PieceNode {
    #[must_use]
    pub fn new_insertion(line: LineId, offset: usize, text: impl Into<String>) -> Self {
        PieceNode::Insert {
            line,
            offset,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn new_deletion(line: LineId, offset: usize) -> Self {
        PieceNode::Delete { line, offset }
    }

    /// Line this node belongs to
    #[must_use]
    pub fn line(&self) -> LineId {
        match self {
            PieceNode::Insert { line, .. } | PieceNode::Delete { line, .. } => *line,
        }
    }

    #[must_use]
    pub fn offset(&self) -> usize {
        match self {
            PieceNode::Insert { offset, .. } | PieceNode::Delete { offset, .. } => *offset,
        }
    }

    #[must_use]
    pub fn is_insertion(&self) -> bool {
        matches!(self, PieceNode::Insert { .. })
    }

    /// Replay this node over `current`.
    ///
    /// A delete whose offset no longer addresses a character (possible after
    /// redoing a node over a line that changed since) leaves the text as is.
    pub fn apply(&self, current: &mut String) {
        match self {
            PieceNode::Insert { offset, text, .. } => {
                let (head, tail) = split_at_char(current, *offset);
                let mut spliced = String::with_capacity(current.len() + text.len());
                spliced.push_str(head);
                spliced.push_str(text);
                spliced.push_str(tail);
                *current = spliced;
            }
            PieceNode::Delete { offset, .. } => {
                if *offset == 0 {
                    return;
                }
                let start = byte_offset(current, offset - 1);
                let end = byte_offset(current, *offset);
                if let (Some(start), Some(end)) = (start, end) {
                    current.replace_range(start..end, "");
                }
            }
        }
    }
}
