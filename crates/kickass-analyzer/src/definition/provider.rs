use tower_lsp::lsp_types::{Location, Position};
use tracing::debug;

use crate::context::{identifier_at, resolve_context};
use crate::language;
use crate::project::ProjectSnapshot;
use crate::symbols::Symbol;
use crate::text_pos::{char_column_from_utf16, line_at, lsp_range};

/// Go-to-definition over the symbol catalogue.
#[derive(Debug, Default)]
pub struct DefinitionProvider;

impl DefinitionProvider {
    pub fn new() -> Self {
        Self
    }

    /// Declaration location for the word at `position`, or `None` when the
    /// word is not a project symbol.
    pub fn provide(
        &self,
        text: &str,
        position: Position,
        snapshot: &ProjectSnapshot,
    ) -> Option<Location> {
        let line = line_at(text, position.line)?;
        let cursor = char_column_from_utf16(line, position.character);
        resolve_context(line, cursor)?;
        let word = identifier_at(line, cursor)?;

        let name = word.text.trim_start_matches(['#', '@']).trim_end_matches(':');
        if name.is_empty() || name.starts_with('.') || language::is_instruction(name) {
            return None;
        }

        let symbol = self.resolve(name, position.line, snapshot)?;
        let uri = snapshot.file_uri(symbol.file_index)?;
        let range = lsp_range(&symbol.range, |line| snapshot.line_text(symbol.file_index, line));
        debug!("Definition of '{}' at {}:{}", name, uri, range.start.line);
        Some(Location::new(uri, range))
    }

    fn resolve<'a>(
        &self,
        name: &str,
        line: u32,
        snapshot: &'a ProjectSnapshot,
    ) -> Option<&'a Symbol> {
        let scope = snapshot.scope_at(line);
        if name.contains('.') {
            return snapshot.catalog.resolve_qualified(name, scope).filter(|symbol| !symbol.is_builtin);
        }
        snapshot.catalog.resolve_all(name, scope).into_iter().find(|symbol| !symbol.is_builtin)
    }
}
