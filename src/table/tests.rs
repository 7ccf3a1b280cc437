use super::*;
use crate::error::ErrorType;

const DOC: &str = "this is my testing
document i want to see how it fares
and all of that fun
stuff";

// =============================================================================
// Construction and reading
// =============================================================================

#[test]
fn test_round_trip() {
    let table = PieceTable::new(DOC);
    assert_eq!(table.line_count(), 4);
    assert_eq!(table.text(), DOC);
    assert_eq!(table.node_count(), 0);
    assert_eq!(table.redo_len(), 0);
}

#[test]
fn test_empty_document_has_one_line() {
    let table = PieceTable::new("");
    assert_eq!(table.line_count(), 1);
    assert_eq!(table.text(), "");
    assert!(table.is_empty());
    assert_eq!(table.len(), 0);
}

#[test]
fn test_trailing_newline_is_an_empty_line() {
    let table = PieceTable::new("a\n");
    assert_eq!(table.line_count(), 2);
    assert_eq!(table.line_text(1).unwrap(), "");
    assert_eq!(table.text(), "a\n");
    assert_eq!(table.len(), 2);
}

#[test]
fn test_line_out_of_range() {
    let table = PieceTable::new("one\ntwo");
    let err = table.line_text(2).unwrap_err();
    assert_eq!(err.kind, ErrorType::OutOfRange);
    assert!(table.line(1).is_ok());
}

// =============================================================================
// Insert / delete
// =============================================================================

#[test]
fn test_scenario_insert_at_end_of_line() {
    let mut table = PieceTable::new("hello\nworld");
    table.insert("XYZ", 0, 5).unwrap();
    assert_eq!(table.text(), "helloXYZ\nworld");
}

#[test]
fn test_scenario_delete_then_undo() {
    let mut table = PieceTable::new("hello\nworld");
    table.insert("XYZ", 0, 5).unwrap();
    table.delete(0, 8).unwrap();
    assert_eq!(table.text(), "helloXY\nworld");

    assert!(table.undo());
    assert_eq!(table.text(), "helloXYZ\nworld");
}

#[test]
fn test_string_insertion() {
    let mut table = PieceTable::new(DOC);
    table.insert("piece table ", 0, 11).unwrap();
    assert_eq!(
        table.line_text(0).unwrap(),
        "this is my piece table testing"
    );
}

#[test]
fn test_multi_string_insertion() {
    let mut table = PieceTable::new(DOC);
    table.insert("piece table ", 0, 11).unwrap();
    table.insert("foo ", 0, 17).unwrap();
    assert_eq!(
        table.line_text(0).unwrap(),
        "this is my piece foo table testing"
    );
}

#[test]
fn test_delete_prefix_one_char_at_a_time() {
    let mut table = PieceTable::new(DOC);
    for _ in 0.."this is ".len() {
        table.delete(0, 1).unwrap();
    }
    assert_eq!(table.line_text(0).unwrap(), "my testing");
    assert_eq!(table.node_count(), 8);

    table.undo();
    assert_eq!(table.line_text(0).unwrap(), " my testing");
}

#[test]
fn test_delete_offset_convention() {
    let mut table = PieceTable::new("abcdef");
    // Removes the character at o - 1
    table.delete(0, 3).unwrap();
    assert_eq!(table.text(), "abdef");
}

#[test]
fn test_delete_rejects_malformed_offsets() {
    let mut table = PieceTable::new("ab\ncd");

    let zero = table.delete(0, 0).unwrap_err();
    assert_eq!(zero.kind, ErrorType::MalformedOffset);

    let past = table.delete(0, 3).unwrap_err();
    assert_eq!(past.kind, ErrorType::MalformedOffset);

    let empty = PieceTable::new("").delete(0, 0).unwrap_err();
    assert_eq!(empty.kind, ErrorType::MalformedOffset);

    // Nothing was recorded and the neighbour is untouched
    assert_eq!(table.node_count(), 0);
    assert_eq!(table.text(), "ab\ncd");
}

#[test]
fn test_edit_out_of_range_line() {
    let mut table = PieceTable::new("ab");
    assert_eq!(
        table.insert("x", 1, 0).unwrap_err().kind,
        ErrorType::OutOfRange
    );
    assert_eq!(table.delete(4, 1).unwrap_err().kind, ErrorType::OutOfRange);
    assert_eq!(table.node_count(), 0);
}

#[test]
fn test_insert_rejects_line_break() {
    let mut table = PieceTable::new("ab");
    let err = table.insert("x\ny", 0, 1).unwrap_err();
    assert_eq!(err.kind, ErrorType::MalformedText);
    assert_eq!(table.text(), "ab");
}

#[test]
fn test_insert_past_end_appends() {
    let mut table = PieceTable::new("ab");
    table.insert("!", 0, 99).unwrap();
    assert_eq!(table.text(), "ab!");
}

#[test]
fn test_insert_returns_log_index() {
    let mut table = PieceTable::new("a\nb");
    assert_eq!(table.insert("x", 0, 0).unwrap(), 0);
    assert_eq!(table.insert("y", 1, 0).unwrap(), 1);
    assert_eq!(table.delete(0, 1).unwrap(), 2);
    assert_eq!(
        table.nodes()[2],
        PieceNode::new_deletion(table.line(0).unwrap().id(), 1)
    );
}

// =============================================================================
// charAt
// =============================================================================

#[test]
fn test_char_at_multibyte_after_insertion() {
    let mut table = PieceTable::new("héllo");
    assert_eq!(table.char_at(0, 3).unwrap(), 'l');
    table.insert("ü", 0, 1).unwrap();
    assert_eq!(table.text(), "hüéllo");
    assert_eq!(table.char_at(0, 2).unwrap(), 'é');
    assert_eq!(table.char_at(0, 3).unwrap(), 'l');
}

#[test]
fn test_char_at_errors() {
    let table = PieceTable::new("ab");
    assert_eq!(
        table.char_at(0, 2).unwrap_err().kind,
        ErrorType::MalformedOffset
    );
    assert_eq!(table.char_at(1, 0).unwrap_err().kind, ErrorType::OutOfRange);
}

// =============================================================================
// Undo / redo
// =============================================================================

#[test]
fn test_undo_redo() {
    let mut table = PieceTable::new(DOC);
    table.insert("piece table ", 0, 11).unwrap();
    let edited = table.text();

    assert!(table.undo());
    assert_eq!(table.text(), DOC);
    assert!(table.can_redo());

    assert!(table.redo());
    assert_eq!(table.text(), edited);

    // Redo stack exhausted
    assert!(!table.redo());
    assert_eq!(table.text(), edited);
}

#[test]
fn test_undo_on_clean_table_is_noop() {
    let mut table = PieceTable::new("abc");
    assert!(!table.undo());
    assert!(!table.redo());
    assert_eq!(table.text(), "abc");
}

#[test]
fn test_undo_follows_global_order() {
    let mut table = PieceTable::new("first\nsecond");
    table.insert("A", 0, 0).unwrap();
    table.insert("B", 1, 0).unwrap();
    assert_eq!(table.text(), "Afirst\nBsecond");

    table.undo();
    assert_eq!(table.text(), "Afirst\nsecond");
    table.undo();
    assert_eq!(table.text(), "first\nsecond");
}

#[test]
fn test_undo_order_ignores_line_index() {
    let mut table = PieceTable::new("first\nsecond");
    table.insert("B", 1, 0).unwrap();
    table.insert("A", 0, 0).unwrap();

    table.undo();
    assert_eq!(table.text(), "first\nBsecond");
    table.undo();
    assert_eq!(table.text(), "first\nsecond");
}

#[test]
fn test_redo_redates_node() {
    let mut table = PieceTable::new("aa\nbb");
    table.insert("1", 0, 0).unwrap();
    table.undo();
    table.insert("2", 1, 0).unwrap();

    // The redone node lands after "2" in the log, not in its old slot
    table.redo();
    assert_eq!(table.text(), "1aa\n2bb");
    assert_eq!(table.nodes()[1].line(), table.line(0).unwrap().id());

    table.undo();
    assert_eq!(table.text(), "aa\n2bb");
    table.undo();
    assert_eq!(table.text(), "aa\nbb");
}

#[test]
fn test_redo_replays_after_later_edits_of_same_line() {
    let mut table = PieceTable::new("abc");
    table.insert("X", 0, 1).unwrap(); // aXbc
    table.undo(); // abc
    table.insert("Y", 0, 3).unwrap(); // abcY
    table.redo(); // X replayed last at offset 1
    assert_eq!(table.text(), "aXbcY");
}

#[test]
fn test_undo_multiple_lines_with_deletes() {
    let mut table = PieceTable::new("hello\nworld");
    table.delete(1, 5).unwrap();
    table.insert("!", 0, 5).unwrap();
    table.delete(1, 1).unwrap();
    assert_eq!(table.text(), "hello!\norl");

    table.undo();
    assert_eq!(table.text(), "hello!\nworl");
    table.undo();
    assert_eq!(table.text(), "hello\nworl");
    table.undo();
    assert_eq!(table.text(), "hello\nworld");
    assert_eq!(table.redo_len(), 3);

    while table.redo() {}
    assert_eq!(table.text(), "hello!\norl");
}

// =============================================================================
// Structure
// =============================================================================

#[test]
fn test_insert_line() {
    let mut table = PieceTable::new("a\nc");
    table.insert_line(1, "b").unwrap();
    table.push_line("d").unwrap();
    assert_eq!(table.text(), "a\nb\nc\nd");
    assert_eq!(
        table.insert_line(9, "x").unwrap_err().kind,
        ErrorType::OutOfRange
    );
    assert_eq!(
        table.insert_line(0, "x\ny").unwrap_err().kind,
        ErrorType::MalformedText
    );
}

#[test]
fn test_remove_line() {
    let mut table = PieceTable::new("a\nb\nc");
    table.remove_line(1).unwrap();
    assert_eq!(table.text(), "a\nc");
    assert_eq!(table.remove_line(5).unwrap_err().kind, ErrorType::OutOfRange);
}

#[test]
fn test_remove_sole_line_clears_it() {
    let mut table = PieceTable::new("only");
    table.insert("!", 0, 4).unwrap();
    table.remove_line(0).unwrap();
    assert_eq!(table.line_count(), 1);
    assert_eq!(table.text(), "");
}

#[test]
fn test_replace_and_swap_lines() {
    let mut table = PieceTable::new("a\nb\nc");
    table.replace_line(1, "B").unwrap();
    table.swap_lines(0, 2).unwrap();
    assert_eq!(table.text(), "c\nB\na");
    assert_eq!(table.swap_lines(0, 3).unwrap_err().kind, ErrorType::OutOfRange);
}

#[test]
fn test_undo_follows_line_after_it_moves() {
    let mut table = PieceTable::new("a\nb");
    table.insert("!", 1, 1).unwrap();
    table.insert_line(0, "new").unwrap();
    assert_eq!(table.text(), "new\na\nb!");

    table.undo();
    assert_eq!(table.text(), "new\na\nb");
    table.redo();
    assert_eq!(table.text(), "new\na\nb!");
}

#[test]
fn test_undo_on_removed_line_keeps_log_consistent() {
    let mut table = PieceTable::new("a\nb");
    table.insert("!", 1, 1).unwrap();
    table.remove_line(1).unwrap();

    assert!(table.undo());
    assert_eq!(table.text(), "a");
    assert_eq!(table.node_count(), 0);
    assert!(table.redo());
    assert_eq!(table.text(), "a");
    assert_eq!(table.node_count(), 1);
}

#[test]
fn test_display_and_from() {
    let table = PieceTable::from("x\ny");
    assert_eq!(table.to_string(), "x\ny");
    assert_eq!(PieceTable::default().text(), "");
}
