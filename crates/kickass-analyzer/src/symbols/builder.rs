use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::debug;

use super::catalog::SymbolCatalog;
use super::docs;
use super::numeric::to_decimal;
use super::types::{Parameter, Symbol, SymbolKind, SymbolValue};
use crate::report::{LibraryEntryKind, Report, SourceRange};
use crate::scope::{ScopeArena, ScopeId, ScopeKind, TrackedFile};

static LABEL_DIRECTIVE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\.label\s+(@?\w+)\s*(?:=\s*(.*))?$").unwrap());
static CONST_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^\.const\s+(@?\w+)\s*(?:=\s*(.*))?$").unwrap());
static VAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^\.var\s+(@?\w+)\s*(?:=\s*(.*))?$").unwrap());
static EVAL_VAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\.eval\s+var\s+(@?\w+)\s*(?:=\s*(.*))?$").unwrap());
static DEFINE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^#define\s+(@?\w+)").unwrap());
static MACRO_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^\.macro\s+(@?\w+)\s*(?:\(([^)]*)\))?").unwrap());
static FUNCTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\.function\s+(@?\w+)\s*(?:\(([^)]*)\))?").unwrap());
static PSEUDOCOMMAND_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^\.pseudocommand\s+(@?\w+)([^{]*)").unwrap());
static NAMESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^\.(?:file)?namespace\s+(@?\w+)").unwrap());
static NAMED_LABEL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(@?\w+)\s*:").unwrap());

/// A declaration recognised on one line, before scope and docs are attached.
#[derive(Debug)]
struct Declared {
    name: String,
    /// Character offset of `name` (including any `@`) within the declaration.
    name_offset: usize,
    kind: SymbolKind,
}

/// Correlates report syntax tokens with tracked lines to produce symbols.
pub struct CatalogBuilder {
    arena: ScopeArena,
}

impl CatalogBuilder {
    pub fn new(arena: ScopeArena) -> Self {
        Self {
            arena,
        }
    }

    pub fn build(
        self,
        report: &Report,
        files: &[TrackedFile],
    ) -> SymbolCatalog {
        let mut symbols = Vec::new();
        let mut seen = HashSet::new();

        for token in &report.syntax {
            if !token.kind.is_declaration() {
                continue;
            }
            let Some(range) = token.range.resolved() else {
                continue;
            };
            if report.is_system_include(range.file_index) {
                continue;
            }
            let Some(tracked) = files.iter().find(|f| f.file_index == range.file_index) else {
                debug!("Syntax token references untracked file {}", range.file_index);
                continue;
            };
            if !seen.insert((range.file_index, range.start_line, range.start_col)) {
                continue;
            }

            let is_main = report.file(range.file_index).is_some_and(|f| f.is_synthesized_main);
            self.collect(tracked, range, is_main, &mut symbols);
        }

        symbols.extend(library_symbols(report));
        SymbolCatalog::new(symbols, self.arena)
    }

    fn collect(
        &self,
        tracked: &TrackedFile,
        range: &SourceRange,
        is_main: bool,
        out: &mut Vec<Symbol>,
    ) {
        let Some(line) = tracked.line(range.start_line) else {
            return;
        };
        let keyword = slice_chars(&line.raw_text, range.start_col as usize, keyword_end(range));
        let declaration = slice_chars(&line.stripped_text, range.start_col as usize, usize::MAX);
        let declaration = declaration.trim_end();

        let Some(Declared {
            name,
            name_offset,
            mut kind,
        }) = classify(declaration)
        else {
            debug!("Unclassified declaration '{keyword}' at {}:{}", range.file_index, range.start_line);
            return;
        };

        let doc = docs::extract(&tracked.lines, range.start_line, range.start_col)
            .and_then(|doc| doc.render(kind.parameters_mut()));

        let lexical_scope = tracked.scope_at(range.start_line);
        let name_col = range.start_col + name_offset as u32;
        let (name, name_col, is_global) = match name.strip_prefix('@') {
            Some(bare) => (bare.to_string(), name_col + 1, true),
            None => (name, name_col, false),
        };
        let name_range = SourceRange::new(
            range.start_line,
            name_col,
            range.start_line,
            name_col + name.chars().count() as u32,
            range.file_index,
        );

        if let Some(parameters) = kind.parameters()
            && let Some(body) = self.opened_scope(tracked.file_index, range.start_line, lexical_scope, &name, &kind)
        {
            for parameter in parameters {
                out.push(Symbol {
                    name: parameter.name.clone(),
                    kind: SymbolKind::Parameter {
                        parameter: parameter.clone(),
                    },
                    scope: body,
                    lexical_scope: body,
                    file_index: range.file_index,
                    range: name_range,
                    doc: parameter.description.clone(),
                    is_global: false,
                    is_main,
                    is_builtin: false,
                });
            }
        }

        out.push(Symbol {
            name,
            kind,
            scope: if is_global { ScopeId::GLOBAL } else { lexical_scope },
            lexical_scope,
            file_index: range.file_index,
            range: name_range,
            doc,
            is_global,
            is_main,
            is_builtin: false,
        });
    }

    /// Body scope of a macro, function or pseudocommand declared on `line`.
    fn opened_scope(
        &self,
        file_index: u32,
        line: u32,
        parent: ScopeId,
        name: &str,
        kind: &SymbolKind,
    ) -> Option<ScopeId> {
        let scope_kind = match kind {
            SymbolKind::Function {
                ..
            } => ScopeKind::Function,
            SymbolKind::Macro {
                ..
            } => ScopeKind::Macro,
            SymbolKind::PseudoCommand {
                ..
            } => ScopeKind::PseudoCommand,
            _ => return None,
        };
        self.arena.opened_by(file_index, parent, name, scope_kind, line)
    }
}

fn classify(declaration: &str) -> Option<Declared> {
    if declaration.starts_with('!') {
        return None;
    }

    if let Some(c) = LABEL_DIRECTIVE_RE.captures(declaration) {
        return Some(declared(declaration, &c, SymbolKind::Label {
            value: value_of(&c),
        }));
    }
    if let Some(c) = CONST_RE.captures(declaration) {
        return Some(declared(declaration, &c, SymbolKind::Constant {
            value: value_of(&c),
        }));
    }
    if let Some(c) = VAR_RE.captures(declaration).or_else(|| EVAL_VAR_RE.captures(declaration)) {
        return Some(declared(declaration, &c, SymbolKind::Variable {
            value: value_of(&c),
        }));
    }
    if let Some(c) = DEFINE_RE.captures(declaration) {
        return Some(declared(declaration, &c, SymbolKind::Boolean));
    }
    if let Some(c) = MACRO_RE.captures(declaration) {
        return Some(declared(declaration, &c, SymbolKind::Macro {
            parameters: split_parameters(c.get(2).map(|m| m.as_str()), ','),
        }));
    }
    if let Some(c) = FUNCTION_RE.captures(declaration) {
        return Some(declared(declaration, &c, SymbolKind::Function {
            parameters: split_parameters(c.get(2).map(|m| m.as_str()), ','),
        }));
    }
    if let Some(c) = PSEUDOCOMMAND_RE.captures(declaration) {
        return Some(declared(declaration, &c, SymbolKind::PseudoCommand {
            parameters: split_parameters(c.get(2).map(|m| m.as_str()), ':'),
        }));
    }
    if let Some(c) = NAMESPACE_RE.captures(declaration) {
        return Some(declared(declaration, &c, SymbolKind::Namespace));
    }
    if let Some(c) = NAMED_LABEL_RE.captures(declaration) {
        return Some(declared(declaration, &c, SymbolKind::NamedLabel));
    }
    None
}

fn declared(
    declaration: &str,
    captures: &Captures<'_>,
    kind: SymbolKind,
) -> Declared {
    let name = captures.get(1).map(|m| (m.as_str(), m.start())).unwrap_or(("", 0));
    Declared {
        name: name.0.to_string(),
        name_offset: declaration[..name.1].chars().count(),
        kind,
    }
}

fn value_of(captures: &Captures<'_>) -> Option<SymbolValue> {
    let text = captures.get(2)?.as_str().trim();
    if text.is_empty() {
        return None;
    }
    Some(SymbolValue {
        text: text.to_string(),
        number: to_decimal(text),
    })
}

fn split_parameters(
    list: Option<&str>,
    separator: char,
) -> Vec<Parameter> {
    list.map(|list| {
        list.split(separator)
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(Parameter::new)
            .collect()
    })
    .unwrap_or_default()
}

/// Builtin constants and functions announced in the `[Libraries]` section.
fn library_symbols(report: &Report) -> Vec<Symbol> {
    let mut seen = HashSet::new();
    report
        .libraries
        .iter()
        .filter(|entry| seen.insert((entry.name.clone(), entry.kind)))
        .filter_map(|entry| {
            let kind = match entry.kind {
                LibraryEntryKind::Constant => SymbolKind::Constant {
                    value: None,
                },
                LibraryEntryKind::Function => SymbolKind::Function {
                    parameters: (1..=entry.arity.unwrap_or(0)).map(|n| Parameter::new(format!("arg{n}"))).collect(),
                },
                LibraryEntryKind::Other => return None,
            };
            Some(Symbol {
                name: entry.name.clone(),
                doc: Some(format!("Builtin from the {} library.", entry.library)),
                kind,
                scope: ScopeId::GLOBAL,
                lexical_scope: ScopeId::GLOBAL,
                file_index: 0,
                range: SourceRange::default(),
                is_global: true,
                is_main: false,
                is_builtin: true,
            })
        })
        .collect()
}

fn keyword_end(range: &SourceRange) -> usize {
    if range.is_single_line() { range.end_col as usize } else { usize::MAX }
}

fn slice_chars(
    text: &str,
    start: usize,
    end: usize,
) -> String {
    text.chars().skip(start).take(end.saturating_sub(start)).collect()
}
