//! String navigation utilities
//! Code-point indexed helpers shared by line replay and cursor movement.
//! Every `usize` position here is a character index, never a byte index.

use crate::constants::text::WORD_BREAKS;

/// Number of code points in `s`
#[must_use]
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Byte offset of the character at `char_idx`.
///
/// `char_idx == char_len(s)` maps to `s.len()`; anything past that is `None`.
#[must_use]
pub fn byte_offset(s: &str, char_idx: usize) -> Option<usize> {
    if char_idx == 0 {
        return Some(0);
    }
    match s.char_indices().nth(char_idx) {
        Some((byte, _)) => Some(byte),
        None if char_len(s) == char_idx => Some(s.len()),
        None => None,
    }
}

/// Character at `char_idx`
#[must_use]
pub fn char_at(s: &str, char_idx: usize) -> Option<char> {
    s.chars().nth(char_idx)
}

/// Split at a character index, clamped to the end of the string
#[must_use]
pub fn split_at_char(s: &str, char_idx: usize) -> (&str, &str) {
    let byte = byte_offset(s, char_idx).unwrap_or(s.len());
    s.split_at(byte)
}

fn is_word_break(ch: char) -> bool {
    WORD_BREAKS.contains(&ch)
}

/// Position of the next word break strictly right of `cursor`, or the line end
#[must_use]
pub fn next_word_break(content: &str, cursor: usize) -> usize {
    let chars: Vec<char> = content.chars().collect();
    let len = chars.len();
    if cursor >= len {
        return len;
    }

    let mut idx = cursor + 1;
    while idx < len && !is_word_break(chars[idx]) {
        idx += 1;
    }
    idx
}

/// Position just after the previous word break left of `cursor`, or 0
#[must_use]
pub fn previous_word_break(content: &str, cursor: usize) -> usize {
    let chars: Vec<char> = content.chars().collect();
    let mut idx = cursor.min(chars.len());

    // Step over a break sitting directly left of the cursor
    while idx > 0 && is_word_break(chars[idx - 1]) {
        idx -= 1;
    }
    while idx > 0 && !is_word_break(chars[idx - 1]) {
        idx -= 1;
    }
    idx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_offset_multibyte() {
        let s = "héllo";
        assert_eq!(byte_offset(s, 0), Some(0));
        assert_eq!(byte_offset(s, 1), Some(1));
        assert_eq!(byte_offset(s, 2), Some(3));
        assert_eq!(byte_offset(s, 5), Some(6));
        assert_eq!(byte_offset(s, 6), None);
    }

    #[test]
    fn test_byte_offset_empty() {
        assert_eq!(byte_offset("", 0), Some(0));
        assert_eq!(byte_offset("", 1), None);
    }

    #[test]
    fn test_split_at_char() {
        assert_eq!(split_at_char("日本語", 1), ("日", "本語"));
        assert_eq!(split_at_char("ab", 9), ("ab", ""));
    }

    #[test]
    fn test_word_breaks() {
        let s = "foo bar_baz";
        assert_eq!(next_word_break(s, 0), 3);
        assert_eq!(next_word_break(s, 3), 7);
        assert_eq!(next_word_break(s, 7), 11);
        assert_eq!(previous_word_break(s, 11), 8);
        assert_eq!(previous_word_break(s, 8), 4);
        assert_eq!(previous_word_break(s, 4), 0);
        assert_eq!(previous_word_break(s, 0), 0);
    }
}
