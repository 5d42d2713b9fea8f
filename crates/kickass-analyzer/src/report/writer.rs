use std::fmt::Write;

use super::types::{Report, ReportRange};

impl Report {
    /// Serialize back to the `-asminfo` wire format.
    ///
    /// Positions are written 1-based; unresolvable ranges are written as `?`
    /// so they parse back as unresolvable.
    pub fn to_report_text(&self) -> String {
        let mut out = String::new();

        out.push_str("[Libraries]\n");
        for library in &self.libraries {
            let _ = writeln!(out, "{}", library.to_wire());
        }

        out.push_str("[Directives]\n");
        for directive in &self.directives {
            let _ = writeln!(out, "{}", directive.to_wire());
        }

        out.push_str("[PPDirectives]\n");
        for directive in &self.preprocessor_directives {
            let _ = writeln!(out, "{}", directive.to_wire());
        }

        out.push_str("[Files]\n");
        for file in &self.files {
            let _ = writeln!(out, "{};{}", file.index, file.path);
        }

        out.push_str("[Syntax]\n");
        for token in &self.syntax {
            let _ = writeln!(out, "{};{}", token.kind.as_wire(), range_to_wire(&token.range));
        }

        out.push_str("[Errors]\n");
        for error in &self.errors {
            let _ = writeln!(out, "{};{};{}", error.severity.as_wire(), range_to_wire(&error.range), error.message);
        }

        out
    }
}

fn range_to_wire(range: &ReportRange) -> String {
    match range {
        ReportRange::Resolved(r) => format!(
            "{},{},{},{},{}",
            r.start_line + 1,
            r.start_col + 1,
            r.end_line + 1,
            r.end_col + 1,
            r.file_index
        ),
        ReportRange::Unresolvable => "?".to_string(),
    }
}
