use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::arena::{ScopeArena, ScopeId, ScopeKind};
use super::strip::{split_lines, strip_comments};
use crate::report::SourceRange;

const ANONYMOUS_SCOPE: &str = "Anonymous";

static NAMESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^\s*\.namespace\s+@?(\w*)").unwrap());
static FILENAMESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^\s*\.filenamespace\s+@?(\w*)").unwrap());
static FUNCTION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^\s*\.function\s+@?(\w*)").unwrap());
static MACRO_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^\s*\.macro\s+@?(\w*)").unwrap());
static PSEUDOCOMMAND_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^\s*\.pseudocommand\s+@?(\w*)").unwrap());
static LABEL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*@?(\w+):").unwrap());

/// One physical source line with the scope it starts in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRecord {
    pub number: u32,
    pub scope: ScopeId,
    pub raw_text: String,
    /// `raw_text` with comments replaced by spaces.
    pub stripped_text: String,
}

/// Line model of one reported file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedFile {
    pub file_index: u32,
    pub lines: Vec<LineRecord>,
}

impl TrackedFile {
    pub fn line(
        &self,
        number: u32,
    ) -> Option<&LineRecord> {
        self.lines.get(number as usize)
    }

    /// Scope in effect at the start of `number`, or global past the end.
    pub fn scope_at(
        &self,
        number: u32,
    ) -> ScopeId {
        self.line(number).map(|line| line.scope).unwrap_or(ScopeId::GLOBAL)
    }
}

#[derive(Debug, Clone)]
struct PendingScope {
    name: String,
    kind: ScopeKind,
}

/// Re-derives brace scopes from raw source.
///
/// A single tracker is shared across all files of one assemble cycle so scope
/// ids stay unique project-wide. This is a heuristic: unbalanced braces leave
/// the stack wherever they leave it and tracking simply continues.
#[derive(Debug, Default)]
pub struct ScopeTracker {
    arena: ScopeArena,
}

impl ScopeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arena(&self) -> &ScopeArena {
        &self.arena
    }

    pub fn into_arena(self) -> ScopeArena {
        self.arena
    }

    pub fn track_file(
        &mut self,
        file_index: u32,
        text: &str,
        comments: &[SourceRange],
    ) -> TrackedFile {
        let raw_lines = split_lines(text);
        let stripped_lines = strip_comments(&raw_lines, comments);

        let mut stack = vec![ScopeId::GLOBAL];
        let mut pending: Option<PendingScope> = None;
        let mut lines = Vec::with_capacity(raw_lines.len());

        for (number, (raw, stripped)) in raw_lines.into_iter().zip(stripped_lines).enumerate() {
            let number = number as u32;
            let scope_at_start = current(&stack);

            let opens_file_namespace = FILENAMESPACE_RE.is_match(&stripped);
            if let Some(declared) = match_declaration(&stripped) {
                pending = Some(declared);
            }

            let open = stripped.find('{');
            let close = stripped.find('}');
            let closes_first = match (open, close) {
                (Some(open), Some(close)) => close < open,
                (None, Some(_)) => true,
                _ => false,
            };

            if closes_first {
                pop(&mut stack);
            }
            if open.is_some() || opens_file_namespace {
                let PendingScope {
                    name,
                    kind,
                } = pending.take().unwrap_or_else(|| PendingScope {
                    name: ANONYMOUS_SCOPE.to_string(),
                    kind: ScopeKind::NamedLabel,
                });
                let id = self.arena.push(current(&stack), name, kind, number, file_index);
                stack.push(id);
            }
            if let (Some(open), Some(close)) = (open, close)
                && close >= open
            {
                pop(&mut stack);
            }

            lines.push(LineRecord {
                number,
                scope: scope_at_start,
                raw_text: raw,
                stripped_text: stripped,
            });
        }

        if stack.len() > 1 {
            debug!("File {file_index}: {} scope(s) left open at end of file", stack.len() - 1);
        }

        TrackedFile {
            file_index,
            lines,
        }
    }
}

fn current(stack: &[ScopeId]) -> ScopeId {
    stack.last().copied().unwrap_or(ScopeId::GLOBAL)
}

fn pop(stack: &mut Vec<ScopeId>) {
    if stack.len() > 1 {
        stack.pop();
    }
}

fn match_declaration(line: &str) -> Option<PendingScope> {
    let patterns: [(&Lazy<Regex>, ScopeKind); 6] = [
        (&NAMESPACE_RE, ScopeKind::Namespace),
        (&FILENAMESPACE_RE, ScopeKind::Namespace),
        (&FUNCTION_RE, ScopeKind::Function),
        (&MACRO_RE, ScopeKind::Macro),
        (&PSEUDOCOMMAND_RE, ScopeKind::PseudoCommand),
        (&LABEL_RE, ScopeKind::NamedLabel),
    ];

    patterns.iter().find_map(|(re, kind)| {
        let captures = re.captures(line)?;
        Some(PendingScope {
            name: captures.get(1).map(|m| m.as_str().to_string()).unwrap_or_default(),
            kind: *kind,
        })
    })
}
