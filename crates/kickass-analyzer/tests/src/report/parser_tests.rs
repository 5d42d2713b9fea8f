use super::*;

const SAMPLE: &str = "\
[Libraries]
Math;constant;PI
Math;function;abs;1
[Directives]
.label;.label name = value;Declares a label with a fixed value.
.const;.const name = value;Declares a constant.
[PPDirectives]
#define;#define NAME;Defines a preprocessor symbol.
#if;#if NAME;Conditional assembly.
[Files]
0;KickAss.jar:/include/autoinclude.asm
1;/tmp/kickass-analyzer-1/.kickass-analyzer.source.42-1.asm
2;/home/user/project/lib/macros.asm
[Syntax]
label;3,1,3,6,1
directive;1,1,1,7,1
ppDirective;2,1,2,8,1
comment;1,18,1,33,1
[Errors]
Error;4,5,4,9,1;Unknown symbol 'fooo'
Warning;1,1,1,2,2;Deprecated; use .var instead
";

#[test]
fn parses_all_sections() {
    let report = ReportParser::default().parse(SAMPLE);

    assert_eq!(report.libraries.len(), 2);
    assert_eq!(report.libraries[1].arity, Some(1));
    assert_eq!(report.directives.len(), 2);
    assert_eq!(report.directives[0].name, ".label");
    assert_eq!(report.preprocessor_directives.len(), 2);
    assert_eq!(report.files.len(), 3);
    assert_eq!(report.syntax.len(), 4);
    assert_eq!(report.errors.len(), 2);
}

#[test]
fn classifies_system_include_and_synthesized_main() {
    let report = ReportParser::default().parse(SAMPLE);

    assert!(report.files[0].is_system_include);
    assert!(!report.files[0].is_synthesized_main);
    assert!(report.files[1].is_synthesized_main);
    assert!(!report.files[2].is_synthesized_main);
    assert_eq!(report.main_file().map(|f| f.index), Some(1));
}

#[test]
fn converts_positions_to_zero_based() {
    let report = ReportParser::default().parse(SAMPLE);
    let label = &report.syntax[0];

    assert_eq!(label.kind, SyntaxKind::Label);
    assert_eq!(label.range, ReportRange::Resolved(SourceRange::new(2, 0, 2, 5, 1)));
}

#[test]
fn syntax_kinds_are_case_insensitive() {
    let report = ReportParser::default().parse(SAMPLE);
    assert_eq!(report.syntax[2].kind, SyntaxKind::PpDirective);
    assert_eq!(report.syntax[3].kind, SyntaxKind::Comment);
}

#[test]
fn error_messages_keep_embedded_separators() {
    let report = ReportParser::default().parse(SAMPLE);
    assert_eq!(report.errors[0].severity, ErrorSeverity::Error);
    assert_eq!(report.errors[0].message, "Unknown symbol 'fooo'");
    assert_eq!(report.errors[1].severity, ErrorSeverity::Warning);
    assert_eq!(report.errors[1].message, "Deprecated; use .var instead");
}

#[test]
fn section_headers_are_case_insensitive_and_crlf_is_accepted() {
    let text = "junk before any header\r\n[FILES]\r\n0;/tmp/a.asm\r\n[syntax]\r\nlabel;1,1,1,4,0\r\n";
    let report = ReportParser::default().parse(text);

    assert_eq!(report.files.len(), 1);
    assert_eq!(report.files[0].path, "/tmp/a.asm");
    assert_eq!(report.syntax.len(), 1);
}

#[test]
fn unknown_sections_are_ignored() {
    let text = "[Files]\n0;/tmp/a.asm\n[Memory]\n0;garbage;line\n[Errors]\nError;1,1,1,2,0;boom\n";
    let report = ReportParser::default().parse(text);

    assert_eq!(report.files.len(), 1);
    assert_eq!(report.errors.len(), 1);
}

#[test]
fn non_numeric_range_is_unresolvable() {
    assert_eq!(parse_range(Some("1,x,1,4,0")), ReportRange::Unresolvable);
    assert_eq!(parse_range(Some("")), ReportRange::Unresolvable);
    assert_eq!(parse_range(None), ReportRange::Unresolvable);
}

#[test]
fn short_range_defaults_trailing_components() {
    assert_eq!(
        parse_range(Some("3,2")),
        ReportRange::Resolved(SourceRange::new(2, 1, 0, 0, 0))
    );
}

#[test]
fn records_with_missing_fields_degrade_gracefully() {
    let text = "[Files]\nnot-a-number;/tmp/a.asm\n1\n[Syntax]\nlabel\n[Errors]\nError\n";
    let report = ReportParser::default().parse(text);

    assert_eq!(report.files.len(), 1, "only the numeric index survives");
    assert_eq!(report.files[0].path, "");
    assert_eq!(report.syntax[0].range, ReportRange::Unresolvable);
    assert_eq!(report.errors[0].message, "");
}

#[test]
fn round_trip_is_stable_on_files_syntax_and_errors() {
    let parser = ReportParser::default();
    let first = parser.parse(SAMPLE);
    let second = parser.parse(&first.to_report_text());

    assert_eq!(first.files, second.files);
    assert_eq!(first.syntax, second.syntax);
    assert_eq!(first.errors, second.errors);
    assert_eq!(first.libraries, second.libraries);
}

#[test]
fn round_trip_keeps_unresolvable_ranges() {
    let parser = ReportParser::default();
    let first = parser.parse("[Syntax]\nlabel;a,b\n");
    let second = parser.parse(&first.to_report_text());
    assert_eq!(second.syntax[0].range, ReportRange::Unresolvable);
}

#[test]
fn comment_ranges_are_filtered_per_file() {
    let report = ReportParser::default().parse(SAMPLE);
    assert_eq!(report.comment_ranges(1), vec![SourceRange::new(0, 17, 0, 32, 1)]);
    assert!(report.comment_ranges(2).is_empty());
}
