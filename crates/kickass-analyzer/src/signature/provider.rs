use tower_lsp::lsp_types::{
    Documentation, MarkupContent, MarkupKind, ParameterInformation, ParameterLabel, Position, SignatureHelp,
    SignatureInformation,
};

use crate::context::resolve_context;
use crate::project::ProjectSnapshot;
use crate::scope::ScopeId;
use crate::symbols::{Parameter, ParameterKind, Symbol, SymbolType};
use crate::text_pos::{char_column_from_utf16, line_at};

/// A call site found left of the cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CallSite {
    pub(crate) name: String,
    pub(crate) active_parameter: u32,
}

/// Signature help for macro, function and pseudocommand invocations.
#[derive(Debug, Default)]
pub struct SignatureHelpProvider;

impl SignatureHelpProvider {
    pub fn new() -> Self {
        Self
    }

    pub fn provide(
        &self,
        text: &str,
        position: Position,
        snapshot: &ProjectSnapshot,
    ) -> Option<SignatureHelp> {
        let line = line_at(text, position.line)?;
        let cursor = char_column_from_utf16(line, position.character);
        resolve_context(line, cursor)?;
        let left: Vec<char> = line.chars().take(cursor).collect();
        let scope = snapshot.scope_at(position.line);

        let (symbol, active) = call_sites(&left)
            .into_iter()
            .find_map(|call| {
                let symbol = resolve_callable(snapshot, &call.name, scope, false)?;
                Some((symbol, call.active_parameter))
            })
            .or_else(|| {
                let call = pseudocommand_site(&left)?;
                let symbol = resolve_callable(snapshot, &call.name, scope, true)?;
                Some((symbol, call.active_parameter))
            })?;

        let parameters = symbol.kind.parameters().unwrap_or_default();
        Some(SignatureHelp {
            signatures: vec![signature_information(symbol)],
            active_signature: Some(0),
            active_parameter: Some(active.min(parameters.len().saturating_sub(1) as u32)),
        })
    }
}

fn resolve_callable<'a>(
    snapshot: &'a ProjectSnapshot,
    name: &str,
    scope: ScopeId,
    pseudocommand: bool,
) -> Option<&'a Symbol> {
    let candidates: Vec<&Symbol> = if name.contains('.') {
        snapshot.catalog.resolve_qualified(name, scope).into_iter().collect()
    } else {
        snapshot.catalog.resolve_all(name, scope)
    };
    candidates.into_iter().find(|symbol| match symbol.symbol_type() {
        SymbolType::PseudoCommand => pseudocommand,
        SymbolType::Macro | SymbolType::Function => !pseudocommand,
        _ => false,
    })
}

/// Unmatched `(` left of the cursor, innermost first, with the callee name in
/// front of each and the number of depth-1 commas after it.
pub(crate) fn call_sites(left: &[char]) -> Vec<CallSite> {
    let mut open: Vec<(usize, u32)> = Vec::new();
    let mut in_string = false;
    for (i, &c) in left.iter().enumerate() {
        match c {
            '"' => in_string = !in_string,
            _ if in_string => {},
            '(' => open.push((i, 0)),
            ')' => {
                open.pop();
            },
            ',' => {
                if let Some((_, commas)) = open.last_mut() {
                    *commas += 1;
                }
            },
            _ => {},
        }
    }

    open.into_iter()
        .rev()
        .filter_map(|(paren, commas)| {
            let name = callee_before(left, paren)?;
            Some(CallSite {
                name,
                active_parameter: commas,
            })
        })
        .collect()
}

fn callee_before(
    left: &[char],
    paren: usize,
) -> Option<String> {
    let mut end = paren;
    while end > 0 && left[end - 1] == ' ' {
        end -= 1;
    }
    let mut start = end;
    while start > 0 && (left[start - 1].is_alphanumeric() || left[start - 1] == '_' || left[start - 1] == '.') {
        start -= 1;
    }
    let name: String = left[start..end].iter().collect();
    let name = name.trim_start_matches('.');
    (!name.is_empty() && !name.starts_with(|c: char| c.is_ascii_digit())).then(|| name.to_string())
}

/// `cmd arg : arg` invocation at the start of the line, optionally after a
/// `label:` prefix. The active parameter is the number of `:` separators
/// already typed.
pub(crate) fn pseudocommand_site(left: &[char]) -> Option<CallSite> {
    let text: String = left.iter().collect();
    let mut rest = text.trim_start();
    let first = rest.split_whitespace().next()?;
    if first.ends_with(':') && first.len() > 1 {
        rest = rest[first.len()..].trim_start();
    }

    let command_len = rest.find(char::is_whitespace)?;
    let (command, arguments) = rest.split_at(command_len);
    let name = command.trim_start_matches(':');
    if name.is_empty() {
        return None;
    }
    Some(CallSite {
        name: name.to_string(),
        active_parameter: arguments.matches(':').count() as u32,
    })
}

fn signature_information(symbol: &Symbol) -> SignatureInformation {
    let parameters = symbol.kind.parameters().unwrap_or_default();
    let (open, separator, close) = match symbol.symbol_type() {
        SymbolType::PseudoCommand => (" ", " : ", ""),
        _ => ("(", ", ", ")"),
    };

    let mut label = format!("{}{open}", symbol.name);
    let mut infos = Vec::with_capacity(parameters.len());
    for (i, parameter) in parameters.iter().enumerate() {
        if i > 0 {
            label.push_str(separator);
        }
        let shown = if parameter.optional { format!("[{}]", parameter.name) } else { parameter.name.clone() };
        let start = label.encode_utf16().count() as u32;
        label.push_str(&shown);
        let end = label.encode_utf16().count() as u32;
        infos.push(ParameterInformation {
            label: ParameterLabel::LabelOffsets([start, end]),
            documentation: parameter_documentation(parameter),
        });
    }
    label.push_str(close);

    SignatureInformation {
        label: label.trim_end().to_string(),
        documentation: symbol.doc.as_ref().map(|doc| {
            Documentation::MarkupContent(MarkupContent {
                kind: MarkupKind::Markdown,
                value: doc.clone(),
            })
        }),
        parameters: Some(infos),
        active_parameter: None,
    }
}

fn parameter_documentation(parameter: &Parameter) -> Option<Documentation> {
    let kind = match parameter.kind {
        ParameterKind::Value => None,
        ParameterKind::String => Some("string"),
        ParameterKind::File => Some("file"),
        ParameterKind::Enum => Some("enum"),
    };
    let text = match (kind, &parameter.description) {
        (Some(kind), Some(description)) => format!("({kind}) {description}"),
        (Some(kind), None) => format!("({kind})"),
        (None, Some(description)) => description.clone(),
        (None, None) => return None,
    };
    Some(Documentation::String(text))
}
