use super::*;

#[test]
fn log_file_is_noisier_than_stderr_by_default() {
    let (stderr, file) = filter_directives(false, false);
    assert_eq!(stderr, "kickass_analyzer=info,tower_lsp=warn");
    assert_eq!(file, "kickass_analyzer=debug,tower_lsp=info");
}

#[test]
fn verbose_raises_stderr_and_log_messages_raises_tower_lsp() {
    let (stderr, file) = filter_directives(true, false);
    assert_eq!(stderr, "kickass_analyzer=debug,tower_lsp=warn");
    assert_eq!(file, "kickass_analyzer=debug,tower_lsp=info");

    let (stderr, file) = filter_directives(false, true);
    assert_eq!(stderr, "kickass_analyzer=info,tower_lsp=debug");
    assert_eq!(file, "kickass_analyzer=debug,tower_lsp=debug");
}
