use std::collections::HashSet;

use tower_lsp::lsp_types::{CompletionItem, Position};
use tracing::debug;

use super::items::{instruction_item, preprocessor_item, report_directive_item, symbol_item, token_range};
use crate::context::{ContextKind, Offer, classify, resolve_context};
use crate::language;
use crate::project::ProjectSnapshot;
use crate::scope::ScopeId;
use crate::symbols::SymbolType;
use crate::text_pos::{char_column_from_utf16, line_at, utf16_column_from_char};

/// Context-sensitive completion for Kick Assembler sources.
#[derive(Debug, Default)]
pub struct CompletionProvider;

impl CompletionProvider {
    pub fn new() -> Self {
        Self
    }

    /// Build a completion list for the buffer `text` at `position` against the
    /// latest committed snapshot of the buffer.
    pub fn provide(
        &self,
        text: &str,
        position: Position,
        snapshot: &ProjectSnapshot,
    ) -> Vec<CompletionItem> {
        let Some(line) = line_at(text, position.line) else {
            return Vec::new();
        };
        let cursor = char_column_from_utf16(line, position.character);
        let Some(ctx) = resolve_context(line, cursor) else {
            return Vec::new();
        };

        let kind = classify(&ctx, &snapshot.lookups());
        debug!("Completion context {:?} for token '{}'", kind, ctx.token);

        let replace = token_range(
            position.line,
            utf16_column_from_char(line, ctx.token_start),
            utf16_column_from_char(line, cursor),
        );
        let scope = snapshot.scope_at(position.line);

        let mut items = Vec::new();
        for offer in kind.offered() {
            match offer {
                Offer::Instructions => items.extend(language::instructions().map(instruction_item)),
                Offer::Directives => {
                    items.extend(snapshot.report.directives.iter().map(|d| report_directive_item(d, replace)));
                },
                Offer::PreprocessorDirectives => {
                    if snapshot.report.preprocessor_directives.is_empty() {
                        items.extend(language::preprocessor_directives().iter().map(|p| preprocessor_item(p, replace)));
                    } else {
                        items.extend(
                            snapshot.report.preprocessor_directives.iter().map(|d| report_directive_item(d, replace)),
                        );
                    }
                },
                symbols => {
                    let Some(wanted) = symbols.symbol_type() else {
                        continue;
                    };
                    items.extend(symbol_items(snapshot, scope, wanted));
                },
            }
        }

        if matches!(kind, ContextKind::DirectiveStart | ContextKind::PreprocessorDirectiveStart) {
            return items;
        }
        let mut seen = HashSet::new();
        items.retain(|item| seen.insert(item.label.clone()));
        items
    }
}

fn symbol_items(
    snapshot: &ProjectSnapshot,
    scope: ScopeId,
    wanted: SymbolType,
) -> impl Iterator<Item = CompletionItem> + '_ {
    snapshot
        .catalog
        .visible_from(scope)
        .into_iter()
        .filter(move |symbol| symbol.symbol_type() == wanted)
        .map(symbol_item)
}
