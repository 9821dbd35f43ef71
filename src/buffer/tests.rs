//! Tests for the document abstraction

use super::*;
use crate::error::codes;

#[test]
fn test_empty_document_has_one_line() {
    let doc = TextDocument::new();
    assert_eq!(doc.len(), 0);
    assert!(doc.is_empty());
    assert_eq!(doc.line_count(), 1);
    assert_eq!(doc.line_start(0), 0);
    assert_eq!(doc.line_end(0), 0);
    assert_eq!(doc.line_text(0), "");
}

#[test]
fn test_line_table() {
    let doc = TextDocument::from_str("fn main() {\n    body\n}\n");
    assert_eq!(doc.line_count(), 4);
    assert_eq!(doc.line_start(0), 0);
    assert_eq!(doc.line_start(1), 12);
    assert_eq!(doc.line_start(2), 21);
    assert_eq!(doc.line_text(0), "fn main() {");
    assert_eq!(doc.line_text(1), "    body");
    assert_eq!(doc.line_text(2), "}");
    assert_eq!(doc.line_text(3), "");
}

#[test]
fn test_line_end_excludes_newline() {
    let doc = TextDocument::from_str("ab\ncd");
    assert_eq!(doc.line_end(0), 2);
    assert_eq!(doc.char_at(doc.line_end(0)), Some('\n'));
    assert_eq!(doc.line_end(1), 5);
}

#[test]
fn test_line_of_offset() {
    let doc = TextDocument::from_str("ab\ncd\n");
    assert_eq!(doc.line_of_offset(0), 0);
    assert_eq!(doc.line_of_offset(2), 0);
    assert_eq!(doc.line_of_offset(3), 1);
    assert_eq!(doc.line_of_offset(5), 1);
    // End of document belongs to the trailing empty line
    assert_eq!(doc.line_of_offset(6), 2);
}

#[test]
fn test_line_start_out_of_range_clamps() {
    let doc = TextDocument::from_str("ab");
    assert_eq!(doc.line_start(7), 2);
}

#[test]
fn test_insert_at_caret_moves_caret_past_text() {
    let mut doc = TextDocument::from_str("abcd");
    doc.set_caret(2).unwrap();
    doc.insert_at_caret("XY").unwrap();
    assert_eq!(doc.text(), "abXYcd");
    assert_eq!(doc.caret(), 4);
}

#[test]
fn test_insert_updates_line_table() {
    let mut doc = TextDocument::from_str("ab");
    doc.set_caret(2).unwrap();
    doc.insert_at_caret("\n  cd").unwrap();
    assert_eq!(doc.line_count(), 2);
    assert_eq!(doc.line_text(1), "  cd");
}

#[test]
fn test_insert_increments_revision() {
    let mut doc = TextDocument::from_str("ab");
    assert_eq!(doc.revision(), 0);
    doc.insert_at_caret("x").unwrap();
    assert_eq!(doc.revision(), 1);
}

#[test]
fn test_read_only_rejects_insert() {
    let mut doc = TextDocument::from_str("ab");
    doc.set_read_only(true);
    assert!(!doc.is_writable());
    let err = doc.insert_at_caret("x").unwrap_err();
    assert_eq!(err.code, codes::READ_ONLY);
    assert_eq!(doc.text(), "ab");
    assert_eq!(doc.revision(), 0);
}

#[test]
fn test_set_caret_out_of_bounds() {
    let mut doc = TextDocument::from_str("ab");
    let err = doc.set_caret(3).unwrap_err();
    assert_eq!(err.code, codes::CARET_OUT_OF_BOUNDS);
}

#[test]
fn test_multibyte_offsets_are_code_points() {
    let mut doc = TextDocument::from_str("héllo\nwörld");
    assert_eq!(doc.len(), 11);
    assert_eq!(doc.line_start(1), 6);
    assert_eq!(doc.line_text(1), "wörld");
    doc.set_caret(6).unwrap();
    doc.insert_at_caret("\t").unwrap();
    assert_eq!(doc.line_text(1), "\twörld");
}
