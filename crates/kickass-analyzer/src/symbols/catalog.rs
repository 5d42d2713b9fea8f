use std::collections::HashMap;

use super::types::{Symbol, SymbolType};
use crate::scope::{ScopeArena, ScopeId};

/// Queryable symbols of one assemble cycle, together with the scope arena
/// they were resolved against.
#[derive(Debug, Clone, Default)]
pub struct SymbolCatalog {
    symbols: Vec<Symbol>,
    by_name: HashMap<String, Vec<usize>>,
    arena: ScopeArena,
}

impl SymbolCatalog {
    pub fn new(
        symbols: Vec<Symbol>,
        arena: ScopeArena,
    ) -> Self {
        let mut by_name: HashMap<String, Vec<usize>> = HashMap::new();
        for (idx, symbol) in symbols.iter().enumerate() {
            by_name.entry(symbol.name.clone()).or_default().push(idx);
        }
        Self {
            symbols,
            by_name,
            arena,
        }
    }

    pub fn arena(&self) -> &ScopeArena {
        &self.arena
    }

    pub fn all(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn contains_name(
        &self,
        name: &str,
    ) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn by_name(
        &self,
        name: &str,
    ) -> Vec<&Symbol> {
        self.by_name
            .get(name)
            .map(|indices| indices.iter().map(|&i| &self.symbols[i]).collect())
            .unwrap_or_default()
    }

    pub fn is_visible(
        &self,
        symbol: &Symbol,
        from: ScopeId,
    ) -> bool {
        symbol.is_global || symbol.is_builtin || self.arena.is_visible_from(symbol.scope, from)
    }

    pub fn visible_from(
        &self,
        scope: ScopeId,
    ) -> Vec<&Symbol> {
        self.symbols.iter().filter(|s| self.is_visible(s, scope)).collect()
    }

    /// Every declaration of `name` visible from `scope`, innermost first.
    pub fn resolve_all(
        &self,
        name: &str,
        scope: ScopeId,
    ) -> Vec<&Symbol> {
        let mut hits: Vec<&Symbol> = self.by_name(name).into_iter().filter(|s| self.is_visible(s, scope)).collect();
        // Stable sort keeps declaration order among equally nested hits.
        hits.sort_by_key(|s| (std::cmp::Reverse(self.arena.depth(s.scope)), s.is_builtin));
        hits
    }

    pub fn resolve(
        &self,
        name: &str,
        scope: ScopeId,
    ) -> Option<&Symbol> {
        self.resolve_all(name, scope).into_iter().next()
    }

    /// Resolve a dotted reference such as `ns.label` or `outer.inner.label`.
    ///
    /// Every qualifier segment names a scope nested in the previous one; the
    /// first segment is looked up anywhere in the project.
    pub fn resolve_qualified(
        &self,
        path: &str,
        from: ScopeId,
    ) -> Option<&Symbol> {
        let mut segments: Vec<&str> = path.split('.').collect();
        let name = segments.pop()?;
        if segments.is_empty() {
            return self.resolve(name, from);
        }

        let mut candidates: Vec<ScopeId> =
            self.arena.iter().filter(|entry| !entry.id.is_global() && entry.name == segments[0]).map(|e| e.id).collect();
        for segment in &segments[1..] {
            candidates = self
                .arena
                .iter()
                .filter(|entry| candidates.contains(&entry.parent) && entry.name == *segment)
                .map(|entry| entry.id)
                .collect();
        }

        self.by_name(name).into_iter().find(|symbol| candidates.contains(&symbol.lexical_scope))
    }

    pub fn of_type(
        &self,
        types: &[SymbolType],
    ) -> Vec<&Symbol> {
        self.symbols.iter().filter(|s| types.contains(&s.symbol_type())).collect()
    }

    /// Declarations physically located in `file_index`; builtins are excluded.
    pub fn in_file(
        &self,
        file_index: u32,
    ) -> Vec<&Symbol> {
        self.symbols.iter().filter(|s| !s.is_builtin && s.file_index == file_index).collect()
    }

    pub fn booleans(&self) -> Vec<&Symbol> {
        self.of_type(&[SymbolType::Boolean])
    }
}
