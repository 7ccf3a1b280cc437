//! Global constants for linelog

pub mod text {
    /// Separator used to split a document into lines and to join them back
    pub const LINE_SEPARATOR: char = '\n';

    /// Closing partners inserted when an opening bracket is typed
    pub const BRACE_PAIRS: &[(char, char)] = &[('(', ')'), ('[', ']'), ('{', '}')];

    /// Characters treated as word boundaries by word movement
    pub const WORD_BREAKS: &[char] = &[' ', '_', '\t'];
}

pub mod ui {
    /// Display text for documents with no file path
    pub const NO_NAME: &str = "[No Name]";

    /// Lines moved by page up / page down
    pub const PAGE_SCROLL_AMOUNT: usize = 8;

    /// Initial viewport size before the host reports one
    pub const DEFAULT_ROWS: usize = 24;
    pub const DEFAULT_COLS: usize = 80;
}

pub mod defaults {
    pub const TAB_SIZE: usize = 4;
    pub const MAX_TAB_SIZE: usize = 16;
    pub const TABS_ARE_SPACES: bool = true;
    pub const HUNGRY_BACKSPACE: bool = true;
    pub const MATCH_BRACES: bool = true;

    /// Number of reported errors kept by the error reporter
    pub const ERROR_HISTORY: usize = 64;
}

pub mod errors {
    pub const LINE_OUT_OF_RANGE: &str = "LINE_OUT_OF_RANGE";
    pub const MALFORMED_OFFSET: &str = "MALFORMED_OFFSET";
    pub const LINE_BREAK_IN_TEXT: &str = "LINE_BREAK_IN_TEXT";
    pub const IO_ERROR: &str = "IO_ERROR";
    pub const NO_PATH: &str = "NO_PATH";
    pub const RELOAD_CONFLICT: &str = "RELOAD_CONFLICT";
    pub const FILE_REMOVED: &str = "FILE_REMOVED";
    pub const WATCH_FAILED: &str = "WATCH_FAILED";
    pub const SETTING_PARSE_ERROR: &str = "SETTING_PARSE_ERROR";
    pub const SETTING_VALIDATION_ERROR: &str = "SETTING_VALIDATION_ERROR";
    pub const UNKNOWN_SETTING: &str = "UNKNOWN_SETTING";
    pub const GENERIC_ERROR: &str = "GENERIC_ERROR";

    pub const MSG_NO_FILE_NAME: &str = "No file name";
    pub const MSG_UNSAVED_CHANGES: &str = "Buffer has unsaved changes, not reloading";
}
