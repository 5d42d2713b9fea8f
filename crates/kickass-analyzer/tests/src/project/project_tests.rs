use tower_lsp::lsp_types::Url;

use super::*;
use crate::assembler::AssemblerOutput;
use crate::scope::ScopeId;

const REPORT: &str = "\
[Files]
0;KickAss.jar:/include/autoinclude.asm
1;/tmp/kickass-analyzer-7/.kickass-analyzer.source.3.asm
2;/work/game/lib.asm
[Syntax]
directive;1,1,1,7,1
directive;1,1,1,7,2
";

fn uri() -> Url {
    Url::parse("file:///work/game/main.asm").expect("uri")
}

fn snapshot(generation: u64) -> ProjectSnapshot {
    ProjectSnapshot::build(&uri(), generation, ".macro m() {\n  nop\n}\n", REPORT, |path| {
        (path == "/work/game/lib.asm").then(|| ".const LIB = 1\n".to_string())
    })
}

#[test]
fn project_id_is_sha256_of_uri() {
    let id = ProjectId::for_uri(&Url::parse("file:///a.asm").expect("uri"));
    assert_eq!(id.as_str().len(), 64);
    assert!(id.as_str().chars().all(|c| c.is_ascii_hexdigit()));
    assert_eq!(id, ProjectId::for_uri(&Url::parse("file:///a.asm").expect("uri")));
    assert_ne!(id, ProjectId::for_uri(&Url::parse("file:///b.asm").expect("uri")));
}

#[test]
fn build_tracks_buffer_and_imported_files() {
    let snapshot = snapshot(1);

    assert_eq!(snapshot.main_file_index(), Some(1));
    assert_eq!(snapshot.files.len(), 2);
    assert_eq!(snapshot.scope_at(1), ScopeId(1));
    assert_eq!(snapshot.catalog.by_name("m").len(), 1);
    assert_eq!(snapshot.catalog.by_name("LIB").len(), 1);
    assert_eq!(snapshot.file_uri(1), Some(uri()));
    assert_eq!(snapshot.file_uri(2), Url::from_file_path("/work/game/lib.asm").ok());
}

#[test]
fn unreadable_files_are_skipped() {
    let snapshot = ProjectSnapshot::build(&uri(), 1, "nop\n", REPORT, |_| None);
    assert_eq!(snapshot.files.len(), 1);
    assert!(snapshot.catalog.by_name("LIB").is_empty());
}

#[test]
fn garbage_report_yields_an_empty_catalogue() {
    let snapshot = ProjectSnapshot::build(&uri(), 1, "nop\n", "not a report\n;;;\n[Syntax]\nlabel;x,y\n", |_| None);
    assert!(snapshot.catalog.is_empty());
    assert_eq!(snapshot.scope_at(0), ScopeId::GLOBAL);
    assert!(snapshot.main_file().is_none());
}

#[test]
fn output_without_report_carries_the_first_error_line() {
    let output = AssemblerOutput {
        report_text: None,
        stdout: "Kick Assembler V5.25\n".to_string(),
        stderr: "\n  Error: Unable to access jarfile KickAss.jar\n".to_string(),
        exit_status: Some(1),
    };
    let snapshot = ProjectSnapshot::from_output(&uri(), 4, "nop\n", &output, |_| None);
    assert_eq!(snapshot.generation, 4);
    assert!(snapshot.catalog.is_empty());
    assert_eq!(snapshot.failure.as_deref(), Some("Error: Unable to access jarfile KickAss.jar"));

    let silent = AssemblerOutput {
        exit_status: Some(2),
        ..AssemblerOutput::default()
    };
    let snapshot = ProjectSnapshot::from_output(&uri(), 5, "nop\n", &silent, |_| None);
    assert_eq!(snapshot.failure.as_deref(), Some("Kick Assembler exited with status 2"));
}

#[test]
fn output_with_report_is_indexed() {
    let output = AssemblerOutput {
        report_text: Some(REPORT.to_string()),
        ..AssemblerOutput::default()
    };
    let snapshot = ProjectSnapshot::from_output(&uri(), 1, ".macro m() {\n}\n", &output, |_| None);
    assert!(snapshot.failure.is_none());
    assert_eq!(snapshot.catalog.by_name("m").len(), 1);
}

#[test]
fn generations_increase_per_buffer() {
    let store = ProjectStore::new();
    let other = Url::parse("file:///other.asm").expect("uri");

    assert_eq!(store.begin_rebuild(&uri()), 1);
    assert_eq!(store.begin_rebuild(&uri()), 2);
    assert_eq!(store.begin_rebuild(&other), 1);
    assert!(store.is_latest(&uri(), 2));
    assert!(!store.is_latest(&uri(), 1));
}

#[test]
fn stale_snapshot_does_not_replace_newer_one() {
    let store = ProjectStore::new();

    assert!(store.commit(snapshot(2)));
    assert!(!store.commit(snapshot(1)));
    assert!(!store.commit(snapshot(2)));
    assert_eq!(store.get(&uri()).map(|s| s.generation), Some(2));

    assert!(store.commit(snapshot(3)));
    assert_eq!(store.get(&uri()).map(|s| s.generation), Some(3));
}

#[test]
fn remove_forgets_snapshot_but_keeps_generation() {
    let store = ProjectStore::new();
    store.begin_rebuild(&uri());
    store.commit(snapshot(1));

    store.remove(&uri());
    assert!(store.get(&uri()).is_none());
    assert_eq!(store.latest_generation(&uri()), 1);
    assert!(store.is_empty());
}

#[test]
fn rebuild_from_before_close_never_lands_after_reopen() {
    let store = ProjectStore::new();
    store.begin_rebuild(&uri());
    store.begin_rebuild(&uri());
    let in_flight = store.begin_rebuild(&uri());

    store.remove(&uri());
    let reopened = store.begin_rebuild(&uri());
    assert!(reopened > in_flight);

    assert!(!store.commit(snapshot(in_flight)));
    assert!(store.get(&uri()).is_none());
    assert!(store.commit(snapshot(reopened)));
    assert_eq!(store.get(&uri()).map(|s| s.generation), Some(reopened));
    assert!(store.is_latest(&uri(), reopened));
}
