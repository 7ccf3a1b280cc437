//! linelog - A per-line edit-log text store with global undo/redo

pub mod buffer;
pub mod constants;
pub mod cursor;
pub mod document;
pub mod error;
pub mod line;
pub mod piece;
pub mod settings;
pub mod string_nav;
pub mod table;
pub mod viewport;

pub use error::{EditError, ErrorSeverity, ErrorType};
pub use table::PieceTable;
