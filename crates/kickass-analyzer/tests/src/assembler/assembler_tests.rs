use std::path::{Path, PathBuf};

use super::*;

fn request() -> AssembleRequest {
    AssembleRequest {
        text: "nop\n".to_string(),
        path: Some(PathBuf::from("/work/game/main.asm")),
    }
}

#[test]
fn missing_jar_is_reported_without_spawning() {
    let assembler = KickAssembler::default();
    let err = assembler.assemble(&request()).expect_err("no jar configured");
    assert!(matches!(
        err,
        AssemblerError::MissingJar {
            path: None
        }
    ));
    assert_eq!(err.to_string(), "KickAss.jar not found");
}

#[test]
fn nonexistent_jar_path_is_missing() {
    let assembler = KickAssembler::new(AssemblerConfig {
        jar_path: Some(PathBuf::from("/definitely/not/here/KickAss.jar")),
        ..AssemblerConfig::default()
    });
    let err = assembler.assemble(&request()).expect_err("jar does not exist");
    assert_eq!(err.to_string(), "KickAss.jar not found at /definitely/not/here/KickAss.jar");
}

#[test]
fn configure_replaces_the_whole_config() {
    let assembler = KickAssembler::default();
    assembler.configure(AssemblerConfig {
        java_path: "/opt/java/bin/java".to_string(),
        jar_path: None,
        extra_args: vec!["-showmem".to_string()],
    });
    assert_eq!(assembler.config().java_path, "/opt/java/bin/java");
    assert_eq!(assembler.config().extra_args, vec!["-showmem".to_string()]);
}

#[test]
fn command_line_requests_the_full_report() {
    let config = AssemblerConfig {
        extra_args: vec!["-define".to_string(), "DEBUG".to_string()],
        ..AssemblerConfig::default()
    };
    let args = KickAssembler::arguments(
        &config,
        Path::new("/opt/KickAss.jar"),
        Path::new("/tmp/src.asm"),
        Path::new("/tmp/info.txt"),
        Path::new("/tmp/out.prg"),
        Some(Path::new("/work/game")),
    );
    assert_eq!(args, vec![
        "-jar",
        "/opt/KickAss.jar",
        "/tmp/src.asm",
        "-asminfo",
        "all",
        "-asminfofile",
        "/tmp/info.txt",
        "-o",
        "/tmp/out.prg",
        "-libdir",
        "/work/game",
        "-define",
        "DEBUG",
    ]);
}

#[test]
fn first_error_line_skips_blank_output() {
    let output = AssemblerOutput {
        stderr: "\n  Error: could not open file\nat line 3\n".to_string(),
        ..AssemblerOutput::default()
    };
    assert_eq!(output.first_error_line(), Some("Error: could not open file"));
    assert_eq!(AssemblerOutput::default().first_error_line(), None);
}
