use tower_lsp::lsp_types::{
    CompletionItem, CompletionItemKind, CompletionTextEdit, Documentation, MarkupContent, MarkupKind, Position, Range,
    TextEdit,
};

use crate::language::{InstructionEntry, PreprocessorEntry};
use crate::report::DirectiveRecord;
use crate::symbols::{Symbol, SymbolType};

fn markdown(value: String) -> Option<Documentation> {
    if value.is_empty() {
        None
    } else {
        Some(Documentation::MarkupContent(MarkupContent {
            kind: MarkupKind::Markdown,
            value,
        }))
    }
}

pub(crate) fn instruction_item(entry: &InstructionEntry) -> CompletionItem {
    CompletionItem {
        label: entry.mnemonic.to_string(),
        kind: Some(CompletionItemKind::KEYWORD),
        detail: Some(entry.description.to_string()),
        documentation: markdown(entry.documentation()),
        // Undocumented opcodes sort after the regular ones.
        sort_text: Some(format!("{}_{}", if entry.undocumented { "1" } else { "0" }, entry.mnemonic)),
        ..Default::default()
    }
}

/// Directive item that replaces the already typed `.` or `#` prefix.
pub(crate) fn directive_item(
    name: &str,
    example: &str,
    description: &str,
    replace: Range,
) -> CompletionItem {
    CompletionItem {
        label: name.to_string(),
        kind: Some(CompletionItemKind::KEYWORD),
        detail: (!example.is_empty()).then(|| example.to_string()),
        documentation: markdown(description.to_string()),
        filter_text: Some(name.to_string()),
        text_edit: Some(CompletionTextEdit::Edit(TextEdit {
            range: replace,
            new_text: name.to_string(),
        })),
        ..Default::default()
    }
}

pub(crate) fn report_directive_item(
    record: &DirectiveRecord,
    replace: Range,
) -> CompletionItem {
    directive_item(&record.name, &record.example, &record.description, replace)
}

pub(crate) fn preprocessor_item(
    entry: &PreprocessorEntry,
    replace: Range,
) -> CompletionItem {
    directive_item(entry.name, entry.example, entry.description, replace)
}

pub(crate) fn symbol_item(symbol: &Symbol) -> CompletionItem {
    let kind = match symbol.symbol_type() {
        SymbolType::NamedLabel | SymbolType::Label => CompletionItemKind::REFERENCE,
        SymbolType::Constant | SymbolType::Boolean => CompletionItemKind::CONSTANT,
        SymbolType::Variable => CompletionItemKind::VARIABLE,
        SymbolType::Function => CompletionItemKind::FUNCTION,
        SymbolType::Macro | SymbolType::PseudoCommand => CompletionItemKind::METHOD,
        SymbolType::Namespace => CompletionItemKind::MODULE,
        SymbolType::Parameter => CompletionItemKind::TYPE_PARAMETER,
    };
    CompletionItem {
        label: symbol.name.clone(),
        kind: Some(kind),
        detail: Some(symbol.signature()),
        documentation: markdown(symbol.doc.clone().unwrap_or_default()),
        sort_text: Some(format!("{}_{}", if symbol.is_builtin { "2" } else { "0" }, symbol.name)),
        ..Default::default()
    }
}

pub(crate) fn token_range(
    line: u32,
    start: u32,
    end: u32,
) -> Range {
    Range::new(Position::new(line, start), Position::new(line, end))
}
