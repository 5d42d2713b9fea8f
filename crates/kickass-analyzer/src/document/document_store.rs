use dashmap::DashMap;
use tower_lsp::lsp_types::{TextDocumentContentChangeEvent, Url};

use super::Document;

/// Open buffers keyed by URI.
#[derive(Debug, Default)]
pub struct DocumentStore {
    documents: DashMap<Url, Document>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(
        &self,
        uri: Url,
        text: String,
        version: i32,
    ) {
        self.documents.insert(uri.clone(), Document::new(uri, text, version));
    }

    /// Replace the whole buffer, opening it when it is not tracked yet.
    pub fn update(
        &self,
        uri: Url,
        text: String,
        version: i32,
    ) {
        if let Some(mut doc) = self.documents.get_mut(&uri) {
            doc.set_content(text, version);
        } else {
            self.documents.insert(uri.clone(), Document::new(uri, text, version));
        }
    }

    /// Apply `didChange` events. Returns `false` for an unknown buffer.
    pub fn apply_changes(
        &self,
        uri: &Url,
        changes: Vec<TextDocumentContentChangeEvent>,
        version: i32,
    ) -> bool {
        match self.documents.get_mut(uri) {
            Some(mut doc) => {
                doc.apply_changes(changes, version);
                true
            },
            None => false,
        }
    }

    pub fn close(
        &self,
        uri: &Url,
    ) {
        self.documents.remove(uri);
    }

    pub fn get_content(
        &self,
        uri: &Url,
    ) -> Option<String> {
        self.documents.get(uri).map(|r| r.value().text.clone())
    }

    pub fn get(
        &self,
        uri: &Url,
    ) -> Option<Document> {
        self.documents.get(uri).map(|r| r.value().clone())
    }

    /// Current version of a buffer, used to detect edits that landed while a
    /// rebuild was running.
    pub fn version(
        &self,
        uri: &Url,
    ) -> Option<i32> {
        self.documents.get(uri).map(|r| r.value().version)
    }

    pub fn all_uris(&self) -> Vec<Url> {
        self.documents.iter().map(|r| r.key().clone()).collect()
    }
}

#[cfg(test)]
#[path = "../../tests/src/document/document_store_tests.rs"]
mod tests;
