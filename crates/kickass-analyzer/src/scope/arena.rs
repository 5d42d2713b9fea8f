/// Identifier of a lexical scope. `ScopeId::GLOBAL` is the implicit file scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ScopeId(pub u32);

impl ScopeId {
    pub const GLOBAL: ScopeId = ScopeId(0);

    pub fn is_global(self) -> bool {
        self == Self::GLOBAL
    }
}

impl std::fmt::Display for ScopeId {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScopeKind {
    NamedLabel,
    Namespace,
    Function,
    Macro,
    PseudoCommand,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopeEntry {
    pub id: ScopeId,
    pub parent: ScopeId,
    pub name: String,
    pub kind: ScopeKind,
    /// Line of the `{` (or `.filenamespace`) that opened the scope.
    pub declaring_line: Option<u32>,
    pub file_index: Option<u32>,
}

/// Flat scope registry indexed by id.
///
/// Entry 0 is the global scope and is its own parent; every other entry
/// points at an entry created before it, so parent walks always end at 0.
#[derive(Debug, Clone)]
pub struct ScopeArena {
    entries: Vec<ScopeEntry>,
}

impl Default for ScopeArena {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopeArena {
    pub fn new() -> Self {
        Self {
            entries: vec![ScopeEntry {
                id: ScopeId::GLOBAL,
                parent: ScopeId::GLOBAL,
                name: "Global".to_string(),
                kind: ScopeKind::Namespace,
                declaring_line: None,
                file_index: None,
            }],
        }
    }

    /// Id the next pushed scope will receive.
    pub fn next_id(&self) -> ScopeId {
        ScopeId(self.entries.len() as u32)
    }

    pub(crate) fn push(
        &mut self,
        parent: ScopeId,
        name: String,
        kind: ScopeKind,
        declaring_line: u32,
        file_index: u32,
    ) -> ScopeId {
        let id = self.next_id();
        let parent = if self.get(parent).is_some() { parent } else { ScopeId::GLOBAL };
        self.entries.push(ScopeEntry {
            id,
            parent,
            name,
            kind,
            declaring_line: Some(declaring_line),
            file_index: Some(file_index),
        });
        id
    }

    pub fn get(
        &self,
        id: ScopeId,
    ) -> Option<&ScopeEntry> {
        self.entries.get(id.0 as usize)
    }

    pub fn parent_of(
        &self,
        id: ScopeId,
    ) -> Option<ScopeId> {
        if id.is_global() {
            return None;
        }
        self.get(id).map(|entry| entry.parent)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.len() <= 1
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScopeEntry> {
        self.entries.iter()
    }

    /// `id`, its parent, and so on up to and including the global scope.
    pub fn ancestors(
        &self,
        id: ScopeId,
    ) -> Vec<ScopeId> {
        let mut chain = vec![id];
        let mut current = id;
        while let Some(parent) = self.parent_of(current) {
            chain.push(parent);
            current = parent;
        }
        if chain.last() != Some(&ScopeId::GLOBAL) {
            chain.push(ScopeId::GLOBAL);
        }
        chain
    }

    /// Number of hops from `id` to the global scope.
    pub fn depth(
        &self,
        id: ScopeId,
    ) -> usize {
        self.ancestors(id).len().saturating_sub(1)
    }

    /// Whether a declaration in `declared_in` can be seen from code in `from`.
    pub fn is_visible_from(
        &self,
        declared_in: ScopeId,
        from: ScopeId,
    ) -> bool {
        declared_in.is_global() || self.ancestors(from).contains(&declared_in)
    }

    /// First scope with the given name and kind, in declaration order.
    pub fn find_named(
        &self,
        name: &str,
        kind: ScopeKind,
    ) -> Option<&ScopeEntry> {
        self.entries.iter().skip(1).find(|entry| entry.kind == kind && entry.name == name)
    }

    /// Body scope a declaration of `name` at `line` opened: the first scope
    /// of that name and kind under `parent` whose brace is on or after `line`.
    pub fn opened_by(
        &self,
        file_index: u32,
        parent: ScopeId,
        name: &str,
        kind: ScopeKind,
        line: u32,
    ) -> Option<ScopeId> {
        self.entries
            .iter()
            .skip(1)
            .filter(|entry| {
                entry.file_index == Some(file_index)
                    && entry.kind == kind
                    && entry.parent == parent
                    && entry.name == name
                    && entry.declaring_line.is_some_and(|l| l >= line)
            })
            .min_by_key(|entry| entry.declaring_line)
            .map(|entry| entry.id)
    }
}
