use tower_lsp::lsp_types::Range;

use super::*;

fn doc(text: &str) -> Document {
    Document::new(Url::parse("file:///project/main.asm").unwrap(), text.to_string(), 1)
}

#[test]
fn empty_buffer_has_one_line() {
    let doc = doc("");
    assert_eq!(doc.line_count(), 1);
    assert_eq!(doc.line_text(0), Some(""));
}

#[test]
fn line_text_strips_terminators() {
    let doc = doc("start:\r\n  lda #0\n");
    assert_eq!(doc.line_count(), 3);
    assert_eq!(doc.line_text(0), Some("start:"));
    assert_eq!(doc.line_text(1), Some("  lda #0"));
    assert_eq!(doc.line_text(2), Some(""));
    assert_eq!(doc.line_text(3), None);
}

#[test]
fn offsets_and_positions_agree() {
    let doc = doc(".label a = 1\n  rts\n");
    let pos = Position::new(1, 2);
    let offset = doc.offset_of(pos).unwrap();
    assert_eq!(offset, 15);
    assert_eq!(doc.position_of(offset), pos);
}

#[test]
fn utf16_columns_are_counted_per_code_unit() {
    // One UTF-16 unit, two bytes.
    let doc = doc("// é\nnop");
    assert_eq!(doc.offset_of(Position::new(0, 4)), Some(5));
    assert_eq!(doc.position_of(5), Position::new(0, 4));
}

#[test]
fn file_uri_has_a_path() {
    assert_eq!(doc("").path(), Some(std::path::PathBuf::from("/project/main.asm")));
}

#[test]
fn ranged_change_rewrites_lines() {
    let mut doc = doc("lda #0\nrts");
    doc.apply_changes(
        vec![TextDocumentContentChangeEvent {
            range: Some(Range::new(Position::new(0, 5), Position::new(1, 0))),
            range_length: None,
            text: "1\n  sta $d020\n".to_string(),
        }],
        2,
    );
    assert_eq!(doc.text, "lda #1\n  sta $d020\nrts");
    assert_eq!(doc.line_count(), 3);
    assert_eq!(doc.version, 2);
}

#[test]
fn whole_buffer_change() {
    let mut doc = doc("old");
    doc.apply_changes(
        vec![TextDocumentContentChangeEvent {
            range: None,
            range_length: None,
            text: "new\ntext".to_string(),
        }],
        3,
    );
    assert_eq!(doc.text, "new\ntext");
    assert_eq!(doc.line_text(1), Some("text"));
}
