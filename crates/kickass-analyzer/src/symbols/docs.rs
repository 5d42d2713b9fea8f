use crate::scope::{LineRecord, line_comment_start};

use super::types::{Parameter, ParameterKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DocStyle {
    Trailing,
    LineRun,
    Block,
}

/// Raw documentation lines attached to a declaration, before annotations are
/// folded into parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DocComment {
    pub(crate) style: DocStyle,
    pub(crate) lines: Vec<String>,
}

/// Find the documentation for a declaration starting at `column` of `line`.
///
/// Tried in order: a `//` comment trailing the declaration, a run of `//`
/// lines above it, a `/** ... */` block above it.
pub(crate) fn extract(
    lines: &[LineRecord],
    line: u32,
    column: u32,
) -> Option<DocComment> {
    let record = lines.get(line as usize)?;
    trailing_comment(&record.raw_text, column as usize)
        .or_else(|| line_run_above(lines, line as usize))
        .or_else(|| block_above(lines, line as usize))
}

fn trailing_comment(
    raw: &str,
    column: usize,
) -> Option<DocComment> {
    let start = line_comment_start(raw)?;
    if start < column {
        return None;
    }
    let text: String = raw.chars().skip(start).skip_while(|c| *c == '/').collect();
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    Some(DocComment {
        style: DocStyle::Trailing,
        lines: vec![text.to_string()],
    })
}

fn line_run_above(
    lines: &[LineRecord],
    line: usize,
) -> Option<DocComment> {
    let mut collected = Vec::new();
    for record in lines[..line].iter().rev() {
        let trimmed = record.raw_text.trim();
        if trimmed.is_empty() {
            continue;
        }
        let Some(body) = trimmed.strip_prefix("//") else {
            break;
        };
        collected.push(body.trim_start_matches('/').trim().to_string());
    }
    if collected.iter().all(|l| l.is_empty()) {
        return None;
    }
    collected.reverse();
    Some(DocComment {
        style: DocStyle::LineRun,
        lines: collected,
    })
}

fn block_above(
    lines: &[LineRecord],
    line: usize,
) -> Option<DocComment> {
    let end = lines[..line].iter().rposition(|r| !r.raw_text.trim().is_empty())?;
    if !lines[end].raw_text.trim_end().ends_with("*/") {
        return None;
    }
    let start = lines[..=end].iter().rposition(|r| r.raw_text.contains("/*"))?;
    if !lines[start].raw_text.trim_start().starts_with("/**") {
        return None;
    }

    let collected: Vec<String> = lines[start..=end]
        .iter()
        .map(|record| {
            let text = record.raw_text.trim();
            let text = text.strip_prefix("/**").unwrap_or(text);
            let text = text.strip_suffix("*/").unwrap_or(text).trim();
            text.trim_start_matches('*').trim().to_string()
        })
        .filter(|text| !text.is_empty())
        .collect();
    if collected.is_empty() {
        return None;
    }
    Some(DocComment {
        style: DocStyle::Block,
        lines: collected,
    })
}

impl DocComment {
    /// Fold `@param` annotations into `parameters` and render what is left.
    pub(crate) fn render(
        self,
        mut parameters: Option<&mut Vec<Parameter>>,
    ) -> Option<String> {
        let separator = match self.style {
            DocStyle::Block => "\n\n",
            DocStyle::LineRun | DocStyle::Trailing => "\n",
        };

        let mut kept = Vec::with_capacity(self.lines.len());
        for line in self.lines {
            match parse_annotation(&line) {
                Some(annotation) => {
                    if let Some(parameters) = parameters.as_deref_mut() {
                        annotation.apply(parameters);
                    }
                }
                None => kept.push(line),
            }
        }

        while kept.last().is_some_and(|l| l.is_empty()) {
            kept.pop();
        }
        let text = kept.join(separator);
        let text = text.trim();
        (!text.is_empty()).then(|| text.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ParamAnnotation {
    pub(crate) name: String,
    pub(crate) kind: Option<ParameterKind>,
    pub(crate) optional: bool,
    pub(crate) description: Option<String>,
}

/// Parse `@param [string|file] name description` or the `@parameter` spelling.
/// A name written as `[name]` marks the parameter optional.
pub(crate) fn parse_annotation(line: &str) -> Option<ParamAnnotation> {
    let line = line.trim();
    let rest = line.strip_prefix("@parameter").or_else(|| line.strip_prefix("@param"))?;
    if !rest.is_empty() && !rest.starts_with(char::is_whitespace) {
        return None;
    }

    let mut tokens = rest.split_whitespace().peekable();
    let kind = match tokens.peek().map(|t| t.to_ascii_lowercase()) {
        Some(t) if t == "string" => Some(ParameterKind::String),
        Some(t) if t == "file" => Some(ParameterKind::File),
        _ => None,
    };
    if kind.is_some() {
        tokens.next();
    }

    let raw_name = tokens.next()?;
    let (name, optional) = match raw_name.strip_prefix('[').and_then(|n| n.strip_suffix(']')) {
        Some(inner) => (inner, true),
        None => (raw_name, false),
    };
    let description = tokens.collect::<Vec<_>>().join(" ");

    Some(ParamAnnotation {
        name: name.to_string(),
        kind,
        optional,
        description: (!description.is_empty()).then_some(description),
    })
}

impl ParamAnnotation {
    fn apply(
        self,
        parameters: &mut [Parameter],
    ) {
        let Some(parameter) = parameters.iter_mut().find(|p| p.name == self.name) else {
            return;
        };
        if let Some(kind) = self.kind {
            parameter.kind = kind;
        }
        parameter.optional |= self.optional;
        if self.description.is_some() {
            parameter.description = self.description;
        }
    }
}
