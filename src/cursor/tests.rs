use super::*;

#[test]
fn test_char_width() {
    assert_eq!(char_width('a', 4), 1);
    assert_eq!(char_width('\t', 4), 4);
    assert_eq!(char_width('\t', 8), 8);
    assert_eq!(char_width('日', 4), 2);
    assert_eq!(char_width('\u{1}', 4), 2);
}

#[test]
fn test_rendered_column_expands_tabs() {
    let text = "\tab\tc";
    assert_eq!(rendered_column(text, 0, 4), 0);
    assert_eq!(rendered_column(text, 1, 4), 4);
    assert_eq!(rendered_column(text, 3, 4), 6);
    assert_eq!(rendered_column(text, 4, 4), 10);
    assert_eq!(rendered_column(text, 99, 4), 11);
}

#[test]
fn test_rendered_column_wide_chars() {
    assert_eq!(rendered_column("日本a", 2, 4), 4);
    assert_eq!(rendered_column("héllo", 3, 4), 3);
}

#[test]
fn test_logical_column() {
    let text = "\tab";
    assert_eq!(logical_column(text, 0, 4), 0);
    assert_eq!(logical_column(text, 3, 4), 0);
    assert_eq!(logical_column(text, 4, 4), 1);
    assert_eq!(logical_column(text, 5, 4), 2);
    assert_eq!(logical_column(text, 40, 4), 3);
}

#[test]
fn test_cursor_rendered_col() {
    let table = PieceTable::new("\tx\nplain");
    assert_eq!(Cursor::new(0, 2).rendered_col(&table, 4), 5);
    assert_eq!(Cursor::new(1, 2).rendered_col(&table, 4), 2);
    assert_eq!(Cursor::new(7, 2).rendered_col(&table, 4), 0);
}

#[test]
fn test_cursor_clamp() {
    let table = PieceTable::new("abc\nd");
    let mut cursor = Cursor::new(5, 9);
    cursor.clamp(&table);
    assert_eq!(cursor, Cursor::new(1, 1));

    let mut cursor = Cursor::new(0, 9);
    cursor.clamp(&table);
    assert_eq!(cursor, Cursor::new(0, 3));
}
