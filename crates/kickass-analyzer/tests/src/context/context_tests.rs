use super::*;
use crate::report::{Report, ReportParser};
use crate::scope::ScopeArena;
use crate::symbols::{CatalogBuilder, SymbolCatalog};

fn fixtures() -> (SymbolCatalog, Report) {
    let report = ReportParser::default().parse(
        "[Directives]\n.byte;.byte 1,2;Emits bytes.\n[Libraries]\nMath;constant;PI\n",
    );
    let catalog = CatalogBuilder::new(ScopeArena::new()).build(&report, &[]);
    (catalog, report)
}

fn kind_at(line: &str) -> Option<ContextKind> {
    let (catalog, report) = fixtures();
    let lookups = Lookups {
        catalog: &catalog,
        report: &report,
    };
    resolve_context(line, line.chars().count()).map(|ctx| classify(&ctx, &lookups))
}

#[test]
fn splits_token_from_preceding_tokens() {
    let ctx = resolve_context("  lda #fo", 9).expect("context");
    assert_eq!(ctx.token, "#fo");
    assert_eq!(ctx.token_start, 6);
    assert_eq!(ctx.preceding_tokens, vec!["lda".to_string()]);
    assert_eq!(ctx.trigger, Some('o'));
}

#[test]
fn cursor_at_line_start_has_no_trigger() {
    let ctx = resolve_context("nop", 0).expect("context");
    assert_eq!(ctx.token, "");
    assert!(ctx.preceding_tokens.is_empty());
    assert_eq!(ctx.trigger, None);
}

#[test]
fn comments_and_strings_suppress_context() {
    assert!(resolve_context("lda #1 // lo", 12).is_none());
    assert!(resolve_context(".text \"hel", 10).is_none());
    assert!(resolve_context(".import source \"lib.asm\"", 24).is_none());
    assert!(resolve_context(".text \"a//b\" lda", 16).is_some());
}

#[test]
fn word_at_expands_to_whitespace() {
    let word = word_at("  sta $d020,x ", 6).expect("word");
    assert_eq!(word.text, "$d020,x");
    assert_eq!((word.start, word.end), (6, 13));
    assert!(word_at("a  b", 2).is_none());
}

#[test]
fn identifier_keeps_qualified_names() {
    assert_eq!(identifier_at("  jsr gfx.clear ", 9).map(|w| w.text), Some("gfx.clear".to_string()));
    assert_eq!(identifier_at("lda #$10", 6).map(|w| w.text), Some("#$10".to_string()));
    assert_eq!(identifier_at("  .label x = 1", 4).map(|w| w.text), Some(".label".to_string()));
}

#[test]
fn classifies_directive_starts() {
    assert_eq!(kind_at("#"), Some(ContextKind::PreprocessorDirectiveStart));
    assert_eq!(kind_at("  ."), Some(ContextKind::DirectiveStart));
    assert_eq!(kind_at("  .by"), Some(ContextKind::DirectiveStart));
}

#[test]
fn half_typed_directive_keeps_directive_start_after_trigger_moves_on() {
    let ctx = resolve_context("  .by", 5).expect("context");
    assert_eq!(ctx.trigger, Some('y'));
    assert_eq!(kind_at("  .by"), Some(ContextKind::DirectiveStart));

    let ctx = resolve_context("#imp", 4).expect("context");
    assert_eq!(ctx.trigger, Some('p'));
    assert_eq!(kind_at("#imp"), Some(ContextKind::PreprocessorDirectiveStart));

    assert_eq!(kind_at("  by"), Some(ContextKind::Bare));
}

#[test]
fn classifies_by_last_preceding_token() {
    assert_eq!(kind_at("  lda "), Some(ContextKind::AfterInstruction));
    assert_eq!(kind_at("  LDA.z fo"), Some(ContextKind::AfterInstruction));
    assert_eq!(kind_at("  .byte PI "), Some(ContextKind::AfterSymbol));
    assert_eq!(
        kind_at("#if DE"),
        Some(ContextKind::AfterPreprocessor {
            directive: "#if".to_string()
        })
    );
    assert_eq!(kind_at("  .byte "), Some(ContextKind::AfterSymbol));
    assert_eq!(kind_at("  foo bar"), Some(ContextKind::Bare));
    assert_eq!(kind_at("  "), Some(ContextKind::Bare));
}

#[test]
fn offered_table() {
    assert_eq!(ContextKind::Bare.offered(), &[
        Offer::Instructions,
        Offer::Macros,
        Offer::PseudoCommands,
        Offer::Namespaces
    ]);
    assert_eq!(ContextKind::DirectiveStart.offered(), &[Offer::Directives]);
    assert!(
        ContextKind::AfterPreprocessor {
            directive: "#define".to_string()
        }
        .offered()
        .is_empty()
    );
    assert_eq!(
        ContextKind::AfterPreprocessor {
            directive: "#if".to_string()
        }
        .offered(),
        &[Offer::Booleans]
    );
    assert!(ContextKind::AfterInstruction.offered().contains(&Offer::Functions));
    assert!(!ContextKind::AfterSymbol.offered().contains(&Offer::Macros));
}
