use crate::symbols::{ParameterKind, Symbol, describe_number};

/// Markdown for one catalogue symbol.
pub(crate) fn symbol_markdown(
    symbol: &Symbol,
    file_name: Option<&str>,
) -> String {
    let mut md = String::new();
    md.push_str("```kickass\n");
    md.push_str(&symbol.signature());
    md.push_str("\n```\n");

    let mut badge = symbol.symbol_type().describe().to_string();
    if symbol.is_builtin {
        badge.push_str(" · builtin");
    } else if symbol.is_global {
        badge.push_str(" · global");
    }
    md.push_str(&format!("\n*({badge})*\n"));

    if let Some(number) = symbol.kind.value().and_then(|v| v.number) {
        md.push_str(&format!("\nValue: `{}`\n", describe_number(number)));
    }

    if let Some(doc) = &symbol.doc {
        md.push_str("\n---\n\n");
        md.push_str(doc);
        md.push('\n');
    }

    if let Some(parameters) = symbol.kind.parameters()
        && !parameters.is_empty()
    {
        md.push_str("\nParameters:\n");
        for parameter in parameters {
            let name = if parameter.optional { format!("[{}]", parameter.name) } else { parameter.name.clone() };
            let kind = match parameter.kind {
                ParameterKind::Value => "",
                ParameterKind::String => " *(string)*",
                ParameterKind::File => " *(file)*",
                ParameterKind::Enum => " *(enum)*",
            };
            match &parameter.description {
                Some(description) => md.push_str(&format!("- `{name}`{kind}: {description}\n")),
                None => md.push_str(&format!("- `{name}`{kind}\n")),
            }
        }
    }

    if let Some(file_name) = file_name
        && !symbol.is_builtin
    {
        md.push_str(&format!("\nDefined in `{}:{}`\n", file_name, symbol.range.start_line + 1));
    }
    md
}

/// Markdown for an assembler or preprocessor directive.
pub(crate) fn directive_markdown(
    name: &str,
    example: &str,
    description: &str,
) -> String {
    let mut md = format!("```kickass\n{}\n```\n", if example.is_empty() { name } else { example });
    if !description.is_empty() {
        md.push_str("\n---\n\n");
        md.push_str(description);
        md.push('\n');
    }
    md
}

pub(crate) fn number_markdown(
    literal: &str,
    value: i64,
) -> String {
    format!("`{literal}` = {}", describe_number(value))
}
