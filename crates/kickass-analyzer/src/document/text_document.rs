use std::path::PathBuf;

use tower_lsp::lsp_types::{Position, TextDocumentContentChangeEvent, Url};

/// An open assembler buffer.
#[derive(Debug, Clone)]
pub struct Document {
    pub uri: Url,
    pub text: String,
    /// Document version as reported by the client.
    pub version: i32,
    /// Byte offset of every line start, rebuilt on each mutation.
    line_offsets: Vec<usize>,
}

impl Document {
    pub fn new(
        uri: Url,
        text: String,
        version: i32,
    ) -> Self {
        let line_offsets = line_offsets(&text);
        Self {
            uri,
            text,
            version,
            line_offsets,
        }
    }

    /// On-disk location of the buffer, when it has one. Imports and
    /// `-libdir` are resolved relative to its directory.
    pub fn path(&self) -> Option<PathBuf> {
        self.uri.to_file_path().ok()
    }

    pub fn line_count(&self) -> usize {
        self.line_offsets.len()
    }

    /// Text of a 0-based line without its terminator.
    pub fn line_text(
        &self,
        line: usize,
    ) -> Option<&str> {
        let start = *self.line_offsets.get(line)?;
        let end = self.line_offsets.get(line + 1).copied().unwrap_or(self.text.len());
        Some(self.text[start..end].trim_end_matches('\n').trim_end_matches('\r'))
    }

    /// Byte offset of an LSP position; UTF-16 columns past the line end clamp
    /// to the end of the line.
    pub fn offset_of(
        &self,
        pos: Position,
    ) -> Option<usize> {
        let line = pos.line as usize;
        let line_start = *self.line_offsets.get(line)?;
        let line_text = self.line_text(line)?;

        let mut utf16_offset = 0u32;
        let mut byte_offset = line_start;
        for ch in line_text.chars() {
            if utf16_offset >= pos.character {
                break;
            }
            utf16_offset += ch.len_utf16() as u32;
            byte_offset += ch.len_utf8();
        }
        Some(byte_offset)
    }

    pub fn position_of(
        &self,
        offset: usize,
    ) -> Position {
        let offset = offset.min(self.text.len());
        let line = match self.line_offsets.binary_search(&offset) {
            Ok(exact) => exact,
            Err(insert) => insert.saturating_sub(1),
        };
        let line_start = self.line_offsets[line];
        let character = self.text[line_start..offset].chars().map(|c| c.len_utf16() as u32).sum::<u32>();
        Position::new(line as u32, character)
    }

    pub fn set_content(
        &mut self,
        text: String,
        version: i32,
    ) {
        self.text = text;
        self.version = version;
        self.line_offsets = line_offsets(&self.text);
    }

    /// Apply ranged or whole-buffer edits in order.
    pub fn apply_changes(
        &mut self,
        changes: Vec<TextDocumentContentChangeEvent>,
        version: i32,
    ) {
        for change in changes {
            match change.range {
                Some(range) => {
                    if let (Some(start), Some(end)) = (self.offset_of(range.start), self.offset_of(range.end))
                        && start <= end
                    {
                        self.text.replace_range(start..end, &change.text);
                    }
                },
                None => self.text = change.text,
            }
            self.line_offsets = line_offsets(&self.text);
        }
        self.version = version;
    }
}

fn line_offsets(text: &str) -> Vec<usize> {
    std::iter::once(0).chain(text.match_indices('\n').map(|(i, _)| i + 1)).collect()
}

#[cfg(test)]
#[path = "../../tests/src/document/text_document_tests.rs"]
mod tests;
