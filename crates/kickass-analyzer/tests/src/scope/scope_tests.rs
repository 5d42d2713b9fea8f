use expect_test::expect;

use super::*;
use crate::report::SourceRange;

fn track(text: &str) -> (ScopeTracker, TrackedFile) {
    let mut tracker = ScopeTracker::new();
    let file = tracker.track_file(0, text, &[]);
    (tracker, file)
}

fn scopes(file: &TrackedFile) -> Vec<u32> {
    file.lines.iter().map(|line| line.scope.0).collect()
}

#[test]
fn trailing_comment_is_blanked_without_moving_columns() {
    let lines = vec!["lda #1 // set A".to_string()];
    let stripped = strip_comments(&lines, &[SourceRange::new(0, 7, 0, 15, 0)]);

    assert_eq!(stripped[0], "lda #1         ");
    assert_eq!(stripped[0].len(), lines[0].len());
}

#[test]
fn multi_line_comment_blanks_every_covered_column() {
    let lines = split_lines("lda #1 /* first\nsecond {\nthird */ nop");
    let stripped = strip_comments(&lines, &[SourceRange::new(0, 7, 2, 8, 0)]);

    assert_eq!(stripped[0], "lda #1         ");
    assert_eq!(stripped[1], "        ");
    assert_eq!(stripped[2], "         nop");
    for (raw, clean) in lines.iter().zip(&stripped) {
        assert_eq!(raw.chars().count(), clean.chars().count());
    }
}

#[test]
fn comment_ranges_past_end_of_file_are_ignored() {
    let lines = split_lines("nop");
    let stripped = strip_comments(&lines, &[SourceRange::new(5, 0, 6, 3, 0)]);
    assert_eq!(stripped, lines);
}

#[test]
fn macro_body_gets_its_own_scope() {
    let (tracker, file) = track(".label foo = $10 // the foo label\n.macro bar(a,b) {\n  lda a\n}\n");

    assert_eq!(scopes(&file), vec![0, 0, 1, 1, 0]);
    let entry = tracker.arena().get(ScopeId(1)).expect("macro scope");
    assert_eq!(entry.name, "bar");
    assert_eq!(entry.kind, ScopeKind::Macro);
    assert_eq!(entry.parent, ScopeId::GLOBAL);
    assert_eq!(entry.declaring_line, Some(1));
}

#[test]
fn named_scopes_are_found_by_name_kind_and_declaration() {
    let (tracker, _) = track(".namespace gfx {\n.macro draw() {\n}\n}\n.macro draw()\n{\n}\n");
    let arena = tracker.arena();

    assert_eq!(arena.find_named("gfx", ScopeKind::Namespace).map(|e| e.id), Some(ScopeId(1)));
    assert_eq!(arena.find_named("draw", ScopeKind::Macro).map(|e| e.id), Some(ScopeId(2)));
    assert!(arena.find_named("gfx", ScopeKind::Macro).is_none());

    assert_eq!(arena.opened_by(0, ScopeId(1), "draw", ScopeKind::Macro, 1), Some(ScopeId(2)));
    assert_eq!(arena.opened_by(0, ScopeId::GLOBAL, "draw", ScopeKind::Macro, 4), Some(ScopeId(3)));
    assert_eq!(arena.opened_by(0, ScopeId::GLOBAL, "draw", ScopeKind::Macro, 6), None);
    assert_eq!(arena.opened_by(1, ScopeId::GLOBAL, "draw", ScopeKind::Macro, 4), None);
}

#[test]
fn closing_brace_before_opening_brace_closes_first() {
    let (tracker, file) = track(".if (x) {\n  nop\n} else {\n  nop\n}\n");

    assert_eq!(scopes(&file), vec![0, 1, 1, 2, 2, 0]);
    let else_scope = tracker.arena().get(ScopeId(2)).expect("else scope");
    assert_eq!(else_scope.parent, ScopeId::GLOBAL);
    assert_eq!(else_scope.name, "Anonymous");
    assert_eq!(else_scope.kind, ScopeKind::NamedLabel);
}

#[test]
fn single_line_block_opens_and_closes() {
    let (tracker, file) = track("loop: { nop }\nrts");

    assert_eq!(scopes(&file), vec![0, 0]);
    assert_eq!(tracker.arena().get(ScopeId(1)).map(|e| e.name.as_str()), Some("loop"));
}

#[test]
fn filenamespace_opens_scope_without_brace() {
    let (tracker, file) = track(".filenamespace Game\nstart: nop\n");

    assert_eq!(scopes(&file), vec![0, 1, 1]);
    let entry = tracker.arena().get(ScopeId(1)).expect("file namespace");
    assert_eq!(entry.name, "Game");
    assert_eq!(entry.kind, ScopeKind::Namespace);
}

#[test]
fn declared_name_carries_to_brace_on_next_line() {
    let (tracker, file) = track(".macro wait()\n{\n  nop\n}\n");

    assert_eq!(scopes(&file), vec![0, 0, 1, 1, 0]);
    let entry = tracker.arena().get(ScopeId(1)).expect("macro scope");
    assert_eq!(entry.name, "wait");
    assert_eq!(entry.declaring_line, Some(1));
}

#[test]
fn directives_are_case_insensitive_and_hoist_marker_is_dropped() {
    let (tracker, _) = track(".FUNCTION @Double(x) {\n .return x*2\n}\n");
    let entry = tracker.arena().get(ScopeId(1)).expect("function scope");
    assert_eq!(entry.name, "Double");
    assert_eq!(entry.kind, ScopeKind::Function);
}

#[test]
fn braces_inside_comments_do_not_open_scopes() {
    let text = "nop // {\nnop";
    let mut tracker = ScopeTracker::new();
    let file = tracker.track_file(0, text, &[SourceRange::new(0, 4, 0, 8, 0)]);

    assert_eq!(scopes(&file), vec![0, 0]);
    assert!(tracker.arena().is_empty());
    assert_eq!(file.lines[0].raw_text, "nop // {");
    assert_eq!(file.lines[0].stripped_text, "nop     ");
}

#[test]
fn unbalanced_closing_braces_never_pop_the_global_scope() {
    let (tracker, file) = track("}\n}\nfoo: {\n nop\n");

    assert_eq!(scopes(&file), vec![0, 0, 0, 1, 1]);
    assert_eq!(tracker.arena().len(), 2);
}

#[test]
fn scope_ids_are_unique_across_files() {
    let mut tracker = ScopeTracker::new();
    tracker.track_file(0, "a: {\n}\n", &[]);
    let second = tracker.track_file(1, "b: {\n nop\n}\n", &[]);

    assert_eq!(second.lines[1].scope, ScopeId(2));
    assert_eq!(tracker.arena().get(ScopeId(2)).and_then(|e| e.file_index), Some(1));
}

#[test]
fn parent_chains_end_at_global_within_nesting_depth() {
    let text = "a: {\n b: {\n  c: {\n   nop\n  }\n }\n}\nd: {\n}\n";
    let (tracker, _) = track(text);
    let max_depth = 3;

    for entry in tracker.arena().iter() {
        let chain = tracker.arena().ancestors(entry.id);
        assert_eq!(chain.last(), Some(&ScopeId::GLOBAL));
        assert!(tracker.arena().depth(entry.id) <= max_depth, "scope {} is too deep", entry.id);
    }
    assert!(tracker.arena().is_visible_from(ScopeId(1), ScopeId(3)));
    assert!(!tracker.arena().is_visible_from(ScopeId(3), ScopeId(4)));
}

#[test]
fn scope_registry_snapshot() {
    let text = "\
.namespace Sprites {
    init: {
        lda #0
    }
    .macro move(x, y) {
        nop
    }
}
";
    let (tracker, _) = track(text);
    let dump: String = tracker
        .arena()
        .iter()
        .map(|e| format!("{} <- {} {:?} {} @{:?}\n", e.id, e.parent, e.kind, e.name, e.declaring_line))
        .collect();

    expect![[r#"
        0 <- 0 Namespace Global @None
        1 <- 0 Namespace Sprites @Some(0)
        2 <- 1 NamedLabel init @Some(1)
        3 <- 1 Macro move @Some(4)
    "#]]
    .assert_eq(&dump);
}
