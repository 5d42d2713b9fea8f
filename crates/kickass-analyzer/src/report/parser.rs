use tracing::debug;

use super::types::{
    DirectiveRecord, ErrorRecord, ErrorSeverity, FileRecord, LibraryRecord, Report, ReportRange,
    SYNTHESIZED_SOURCE_MARKER, SourceRange, SyntaxKind, SyntaxToken,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    /// Before the first header, or inside a header we don't know.
    Ignored,
    Libraries,
    Directives,
    PpDirectives,
    Files,
    Syntax,
    Errors,
}

impl Section {
    fn from_header(line: &str) -> Option<Self> {
        let name = line.strip_prefix('[')?.strip_suffix(']')?;
        let section = match name.trim().to_ascii_lowercase().as_str() {
            "libraries" => Self::Libraries,
            "directives" => Self::Directives,
            "ppdirectives" => Self::PpDirectives,
            "files" => Self::Files,
            "syntax" => Self::Syntax,
            "errors" => Self::Errors,
            _ => Self::Ignored,
        };
        Some(section)
    }
}

/// Decodes Kick Assembler's `-asminfo` report into a [`Report`].
///
/// Parsing never fails: records that cannot be understood are skipped and
/// records with missing trailing fields are kept with defaults, so reports
/// from older assembler versions still index.
#[derive(Debug, Clone)]
pub struct ReportParser {
    synthesized_marker: String,
}

impl Default for ReportParser {
    fn default() -> Self {
        Self::new(SYNTHESIZED_SOURCE_MARKER)
    }
}

impl ReportParser {
    /// `synthesized_marker` identifies the ephemeral file holding the
    /// editor buffer's unsaved content.
    pub fn new(synthesized_marker: impl Into<String>) -> Self {
        Self {
            synthesized_marker: synthesized_marker.into(),
        }
    }

    pub fn parse(
        &self,
        text: &str,
    ) -> Report {
        let mut report = Report::default();
        let mut section = Section::Ignored;
        let mut skipped = 0usize;

        for raw_line in text.lines() {
            let line = raw_line.trim_end_matches('\r').trim();
            if line.is_empty() {
                continue;
            }
            if let Some(next) = Section::from_header(line) {
                section = next;
                continue;
            }

            let fields: Vec<&str> = line.split(';').collect();
            let accepted = match section {
                Section::Ignored => true,
                Section::Libraries => push_some(&mut report.libraries, LibraryRecord::from_fields(&fields)),
                Section::Directives => push_some(&mut report.directives, DirectiveRecord::from_fields(&fields)),
                Section::PpDirectives => {
                    push_some(&mut report.preprocessor_directives, DirectiveRecord::from_fields(&fields))
                },
                Section::Files => push_some(&mut report.files, self.parse_file(&fields)),
                Section::Syntax => push_some(&mut report.syntax, parse_syntax(&fields)),
                Section::Errors => push_some(&mut report.errors, parse_error(&fields)),
            };
            if !accepted {
                skipped += 1;
                debug!("Skipping unparseable report line in {section:?}: {line}");
            }
        }

        debug!(
            "Parsed report: {} file(s), {} syntax token(s), {} error(s), {} directive(s), {skipped} skipped line(s)",
            report.files.len(),
            report.syntax.len(),
            report.errors.len(),
            report.directives.len(),
        );
        report
    }

    fn parse_file(
        &self,
        fields: &[&str],
    ) -> Option<FileRecord> {
        let index: u32 = fields.first()?.trim().parse().ok()?;
        // Windows paths never contain ';', but keep anything after the first
        // separator intact just in case.
        let path = fields.get(1..).map(|rest| rest.join(";")).unwrap_or_default();
        Some(FileRecord::new(index, path.trim(), &self.synthesized_marker))
    }
}

fn push_some<T>(
    target: &mut Vec<T>,
    record: Option<T>,
) -> bool {
    match record {
        Some(record) => {
            target.push(record);
            true
        },
        None => false,
    }
}

fn parse_syntax(fields: &[&str]) -> Option<SyntaxToken> {
    let kind = fields.first()?.trim();
    if kind.is_empty() {
        return None;
    }
    Some(SyntaxToken {
        kind: SyntaxKind::from_wire(kind),
        range: parse_range(fields.get(1).copied()),
    })
}

fn parse_error(fields: &[&str]) -> Option<ErrorRecord> {
    let severity = fields.first()?.trim();
    Some(ErrorRecord {
        severity: ErrorSeverity::from_wire(severity),
        range: parse_range(fields.get(1).copied()),
        message: fields.get(2..).map(|rest| rest.join(";")).unwrap_or_default().trim().to_string(),
    })
}

/// Parse `startLine,startCol,endLine,endCol,fileIndex` (1-based positions).
///
/// Missing trailing components default to zero. Any present component that is
/// not a number makes the whole range unresolvable.
pub(crate) fn parse_range(field: Option<&str>) -> ReportRange {
    let Some(field) = field.map(str::trim).filter(|f| !f.is_empty()) else {
        return ReportRange::Unresolvable;
    };

    let mut values = [0u32; 5];
    for (slot, part) in values.iter_mut().zip(field.split(',')) {
        match part.trim().parse::<u32>() {
            Ok(value) => *slot = value,
            Err(_) => return ReportRange::Unresolvable,
        }
    }

    let [start_line, start_col, end_line, end_col, file_index] = values;
    ReportRange::Resolved(SourceRange::new(
        start_line.saturating_sub(1),
        start_col.saturating_sub(1),
        end_line.saturating_sub(1),
        end_col.saturating_sub(1),
        file_index,
    ))
}

#[cfg(test)]
#[path = "../../tests/src/report/parser_tests.rs"]
mod tests;
