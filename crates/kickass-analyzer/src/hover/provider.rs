use std::path::Path;

use tower_lsp::lsp_types::{Hover, HoverContents, MarkupContent, MarkupKind, Position};

use super::render::{directive_markdown, number_markdown, symbol_markdown};
use crate::context::{identifier_at, resolve_context};
use crate::language;
use crate::project::ProjectSnapshot;
use crate::symbols::{Symbol, to_decimal};
use crate::text_pos::{char_column_from_utf16, line_at};

/// Hover text for instructions, directives, numeric literals and symbols.
#[derive(Debug, Default)]
pub struct HoverProvider;

impl HoverProvider {
    pub fn new() -> Self {
        Self
    }

    /// Every hover section for the token at `position`; empty on a miss.
    pub fn contents(
        &self,
        text: &str,
        position: Position,
        snapshot: &ProjectSnapshot,
    ) -> Vec<String> {
        let Some(line) = line_at(text, position.line) else {
            return Vec::new();
        };
        let cursor = char_column_from_utf16(line, position.character);
        if resolve_context(line, cursor).is_none() {
            return Vec::new();
        }
        let Some(word) = identifier_at(line, cursor) else {
            return Vec::new();
        };
        let word = word.text.as_str();

        if word.starts_with('#')
            && word[1..].starts_with(|c: char| c.is_ascii_alphabetic())
            && let Some(directive) = preprocessor_hover(word, snapshot)
        {
            return vec![directive];
        }
        if word.starts_with('.') {
            return snapshot
                .report
                .directives
                .iter()
                .find(|d| d.name.eq_ignore_ascii_case(word))
                .map(|d| directive_markdown(&d.name, &d.example, &d.description))
                .into_iter()
                .collect();
        }
        if let Some(entry) = language::lookup_instruction(word) {
            return vec![entry.documentation()];
        }
        if let Some(value) = to_decimal(word) {
            return vec![number_markdown(word.trim_start_matches('#'), value)];
        }

        let name = word.trim_start_matches(['#', '@']);
        let scope = snapshot.scope_at(position.line);
        let symbols: Vec<&Symbol> = if name.contains('.') {
            snapshot.catalog.resolve_qualified(name, scope).into_iter().collect()
        } else {
            snapshot.catalog.resolve_all(name, scope)
        };
        symbols.into_iter().map(|symbol| symbol_markdown(symbol, file_name(snapshot, symbol).as_deref())).collect()
    }

    /// Return hover information for the token at `position` in `text`.
    pub fn provide(
        &self,
        text: &str,
        position: Position,
        snapshot: &ProjectSnapshot,
    ) -> Option<Hover> {
        let contents = self.contents(text, position, snapshot);
        if contents.is_empty() {
            return None;
        }
        Some(Hover {
            contents: HoverContents::Markup(MarkupContent {
                kind: MarkupKind::Markdown,
                value: contents.join("\n---\n\n"),
            }),
            range: None,
        })
    }
}

fn preprocessor_hover(
    word: &str,
    snapshot: &ProjectSnapshot,
) -> Option<String> {
    if let Some(record) = snapshot.report.preprocessor_directives.iter().find(|d| d.name.eq_ignore_ascii_case(word)) {
        return Some(directive_markdown(&record.name, &record.example, &record.description));
    }
    language::lookup_preprocessor(word).map(|entry| directive_markdown(entry.name, entry.example, entry.description))
}

fn file_name(
    snapshot: &ProjectSnapshot,
    symbol: &Symbol,
) -> Option<String> {
    let record = snapshot.report.file(symbol.file_index)?;
    if record.is_synthesized_main {
        return snapshot
            .uri
            .to_file_path()
            .ok()
            .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()));
    }
    Path::new(&record.path).file_name().map(|n| n.to_string_lossy().into_owned())
}
