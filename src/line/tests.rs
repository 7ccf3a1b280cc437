use super::*;

fn line(text: &str) -> Line {
    Line::new(LineId(0), text)
}

#[test]
fn test_untouched_line_is_original() {
    let l = line("hello");
    let log = Vec::new();
    assert_eq!(l.text(&log), "hello");
    assert_eq!(l.length(&log), 5);
    assert!(l.active_nodes().is_empty());
}

#[test]
fn test_append_node_assigns_next_global_index() {
    let mut a = Line::new(LineId(0), "abc");
    let mut b = Line::new(LineId(1), "xyz");
    let mut log = Vec::new();

    let first = a.append_node(PieceNode::new_insertion(LineId(0), 0, "1"), &mut log);
    let second = b.append_node(PieceNode::new_insertion(LineId(1), 0, "2"), &mut log);
    let third = a.append_node(PieceNode::new_insertion(LineId(0), 0, "3"), &mut log);

    assert_eq!((first, second, third), (0, 1, 2));
    assert_eq!(a.active_nodes(), &[0, 2]);
    assert_eq!(b.active_nodes(), &[1]);
    assert_eq!(log.len(), 3);
}

#[test]
fn test_replay_follows_append_order() {
    let mut l = line("hello");
    let mut log = Vec::new();
    l.append_node(PieceNode::new_insertion(LineId(0), 5, " world"), &mut log);
    // Offset 11 only exists once the first insertion has been replayed
    l.append_node(PieceNode::new_insertion(LineId(0), 11, "!"), &mut log);
    l.append_node(PieceNode::new_deletion(LineId(0), 1), &mut log);

    assert_eq!(l.text(&log), "ello world!");
    assert_eq!(l.length(&log), 11);
    assert_eq!(l.original(), "hello");
}

#[test]
fn test_length_counts_code_points() {
    let mut l = line("héllo");
    let mut log = Vec::new();
    assert_eq!(l.length(&log), 5);
    l.append_node(PieceNode::new_insertion(LineId(0), 0, "日本"), &mut log);
    assert_eq!(l.length(&log), 7);
}

#[test]
fn test_deactivate_and_reactivate() {
    let mut l = line("ab");
    let mut log = Vec::new();
    let idx = l.append_node(PieceNode::new_insertion(LineId(0), 2, "c"), &mut log);
    assert_eq!(l.text(&log), "abc");

    assert!(l.deactivate(idx));
    assert!(!l.deactivate(idx));
    assert_eq!(l.text(&log), "ab");

    l.reactivate(idx);
    assert_eq!(l.text(&log), "abc");
}

#[test]
fn test_view() {
    let mut l = Line::new(LineId(3), "héllo");
    let mut log = Vec::new();
    l.append_node(PieceNode::new_insertion(LineId(3), 1, "X"), &mut log);

    let view = LineView::new(&l, &log);
    assert_eq!(view.id(), LineId(3));
    assert_eq!(view.text(), "hXéllo");
    assert_eq!(view.length(), 6);
    assert_eq!(view.char_at(2), Some('é'));
    assert_eq!(view.char_at(6), None);
    assert_eq!(view.edit_count(), 1);
    assert_eq!(view.to_string(), "hXéllo");
    assert!(!view.is_empty());
}
