use std::collections::HashMap;

use tower_lsp::lsp_types::{DocumentSymbol, SymbolKind as LspSymbolKind};

use super::catalog::SymbolCatalog;
use super::types::{Symbol, SymbolType};
use crate::scope::{ScopeId, ScopeKind, TrackedFile};
use crate::text_pos::lsp_range;

/// Outline of one tracked file, nested along the scopes declarations open.
#[derive(Debug, Clone, Copy, Default)]
pub struct SymbolProvider;

impl SymbolProvider {
    pub fn new() -> Self {
        Self
    }

    pub fn document_symbols(
        &self,
        catalog: &SymbolCatalog,
        file: &TrackedFile,
    ) -> Vec<DocumentSymbol> {
        let symbols: Vec<&Symbol> = catalog
            .in_file(file.file_index)
            .into_iter()
            .filter(|s| s.symbol_type() != SymbolType::Parameter)
            .collect();

        // Scope id -> index of the symbol that opened it.
        let mut owners: HashMap<ScopeId, usize> = HashMap::new();
        for (idx, symbol) in symbols.iter().enumerate() {
            if let Some(scope) = owned_scope(catalog, file.file_index, symbol) {
                owners.entry(scope).or_insert(idx);
            }
        }

        let mut children: Vec<Vec<usize>> = vec![Vec::new(); symbols.len()];
        let mut roots = Vec::new();
        for (idx, symbol) in symbols.iter().enumerate() {
            let container = catalog
                .arena()
                .ancestors(symbol.lexical_scope)
                .into_iter()
                .find_map(|scope| owners.get(&scope).copied().filter(|&owner| owner != idx));
            match container {
                Some(owner) => children[owner].push(idx),
                None => roots.push(idx),
            }
        }

        roots.into_iter().map(|idx| to_document_symbol(idx, &symbols, &children, file)).collect()
    }
}

fn owned_scope(
    catalog: &SymbolCatalog,
    file_index: u32,
    symbol: &Symbol,
) -> Option<ScopeId> {
    let kind = match symbol.symbol_type() {
        SymbolType::NamedLabel => ScopeKind::NamedLabel,
        SymbolType::Namespace => ScopeKind::Namespace,
        SymbolType::Function => ScopeKind::Function,
        SymbolType::Macro => ScopeKind::Macro,
        SymbolType::PseudoCommand => ScopeKind::PseudoCommand,
        _ => return None,
    };
    catalog.arena().opened_by(file_index, symbol.lexical_scope, &symbol.name, kind, symbol.range.start_line)
}

fn to_document_symbol(
    idx: usize,
    symbols: &[&Symbol],
    children: &[Vec<usize>],
    file: &TrackedFile,
) -> DocumentSymbol {
    let symbol = symbols[idx];
    let range = lsp_range(&symbol.range, |line| file.line(line).map(|l| l.raw_text.as_str()));
    let nested: Vec<DocumentSymbol> =
        children[idx].iter().map(|&child| to_document_symbol(child, symbols, children, file)).collect();

    #[allow(deprecated)]
    DocumentSymbol {
        name: symbol.name.clone(),
        detail: Some(symbol.signature()),
        kind: lsp_kind(symbol.symbol_type()),
        tags: None,
        deprecated: None,
        range,
        selection_range: range,
        children: (!nested.is_empty()).then_some(nested),
    }
}

pub(crate) fn lsp_kind(symbol_type: SymbolType) -> LspSymbolKind {
    match symbol_type {
        SymbolType::NamedLabel => LspSymbolKind::KEY,
        SymbolType::Label => LspSymbolKind::CONSTANT,
        SymbolType::Constant => LspSymbolKind::CONSTANT,
        SymbolType::Variable => LspSymbolKind::VARIABLE,
        SymbolType::Function => LspSymbolKind::FUNCTION,
        SymbolType::Macro => LspSymbolKind::METHOD,
        SymbolType::PseudoCommand => LspSymbolKind::OPERATOR,
        SymbolType::Namespace => LspSymbolKind::NAMESPACE,
        SymbolType::Parameter => LspSymbolKind::TYPE_PARAMETER,
        SymbolType::Boolean => LspSymbolKind::BOOLEAN,
    }
}
