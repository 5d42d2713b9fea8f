use tower_lsp::lsp_types::{Position, Range};

use super::*;

fn uri(name: &str) -> Url {
    Url::parse(&format!("file:///project/{name}")).unwrap()
}

#[test]
fn open_get_content_close() {
    let store = DocumentStore::new();
    store.open(uri("main.asm"), "lda #$00".to_string(), 1);

    assert_eq!(store.get_content(&uri("main.asm")), Some("lda #$00".to_string()));
    assert_eq!(store.all_uris(), vec![uri("main.asm")]);

    store.close(&uri("main.asm"));
    assert!(store.get_content(&uri("main.asm")).is_none());
}

#[test]
fn update_replaces_and_opens_unknown_buffers() {
    let store = DocumentStore::new();
    store.open(uri("main.asm"), "v1".to_string(), 1);
    store.update(uri("main.asm"), "v2".to_string(), 2);
    let doc = store.get(&uri("main.asm")).unwrap();
    assert_eq!(doc.text, "v2");
    assert_eq!(store.version(&uri("main.asm")), Some(2));

    store.update(uri("new.asm"), "rts".to_string(), 1);
    assert!(store.get_content(&uri("new.asm")).is_some());
}

#[test]
fn apply_changes_ignores_unknown_buffers() {
    let store = DocumentStore::new();
    let change = TextDocumentContentChangeEvent {
        range: Some(Range::new(Position::new(0, 0), Position::new(0, 3))),
        range_length: None,
        text: "ldx".to_string(),
    };
    assert!(!store.apply_changes(&uri("missing.asm"), vec![change.clone()], 2));

    store.open(uri("main.asm"), "lda #1".to_string(), 1);
    assert!(store.apply_changes(&uri("main.asm"), vec![change], 2));
    assert_eq!(store.get_content(&uri("main.asm")).as_deref(), Some("ldx #1"));
}
