// Integration tests for the editing session.
//
// These exercise the caretaker flow end to end: a document is edited,
// each edit is snapshotted, and undo/redo walk the document back and forth.

use memo_pad_config::AppConfig;
use memo_pad_core::history::{history_config, HistoryError, HistoryState};
use memo_pad_core::{Document, EditSession, Originator, Position};

fn new_session() -> EditSession<Document> {
    EditSession::new(Document::new(), history_config(&AppConfig::default()))
}

#[test]
fn test_branching_scenario_on_document() {
    let mut s = new_session();
    s.edit(|d| d.replace_all("A"));
    s.edit(|d| d.replace_all("B"));
    s.edit(|d| d.replace_all("C"));

    s.undo().unwrap();
    assert_eq!(s.originator().text(), "B");
    s.undo().unwrap();
    assert_eq!(s.originator().text(), "A");

    // The empty baseline is still below "A"
    s.undo().unwrap();
    assert_eq!(s.originator().text(), "");
    assert_eq!(s.undo(), Err(HistoryError::NothingToUndo));

    s.redo().unwrap();
    s.redo().unwrap();
    assert_eq!(s.originator().text(), "B");

    s.edit(|d| d.replace_all("D"));
    assert_eq!(s.redo(), Err(HistoryError::NothingToRedo));
    assert_eq!(s.originator().text(), "D");
    assert_eq!(s.history().state(), HistoryState::AtNewest);
}

#[test]
fn test_multiline_edit_session() {
    let mut s = new_session();
    s.edit(|d| d.insert_text("line one"));
    s.edit(|d| d.insert_newline());
    s.edit(|d| d.insert_text("line two"));
    assert_eq!(s.originator().cursor(), Position::new(1, 8));

    s.originator_mut().move_to(Position::new(0, 4));
    s.edit(|d| d.delete_forward(4));
    assert_eq!(s.originator().text(), "line\nline two");

    s.undo().unwrap();
    assert_eq!(s.originator().text(), "line one\nline two");
    // Cursor comes back with the snapshot, not from the later move
    assert_eq!(s.originator().cursor(), Position::new(1, 8));
}

#[test]
fn test_history_walks_snapshots_in_order() {
    let mut s = new_session();
    for word in ["alpha ", "beta ", "gamma"] {
        s.edit(|d| d.insert_text(word));
    }

    let texts: Vec<String> = s.history().iter().map(|snap| snap.text()).collect();
    assert_eq!(texts, vec!["", "alpha ", "alpha beta ", "alpha beta gamma"]);
}

#[test]
fn test_manual_caretaker_with_plain_history() {
    use memo_pad_core::history::HistoryManager;

    let mut doc = Document::new();
    let mut history = HistoryManager::unbounded();

    doc.insert_text("one");
    history.save(doc.create_snapshot());
    doc.insert_text(" two");
    history.save(doc.create_snapshot());

    doc.restore(history.undo().unwrap());
    assert_eq!(doc.text(), "one");
    doc.restore(history.redo().unwrap());
    assert_eq!(doc.text(), "one two");
}
