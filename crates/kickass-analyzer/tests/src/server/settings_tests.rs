use serde_json::json;

use super::*;

#[test]
fn parses_namespaced_payload() {
    let payload = json!({
        "kickass-analyzer": {
            "assembler": {
                "javaPath": "/opt/jdk/bin/java",
                "jarPath": "/opt/kickass/KickAss.jar",
                "extraArgs": ["-define", " DEBUG "]
            },
            "diagnostics": {
                "onType": false,
                "debounceMs": 1200
            },
            "logging": {
                "level": "debug"
            }
        }
    });

    let settings = ServerSettings::from_lsp_payload(Some(&payload));
    assert_eq!(settings.assembler.java_path, "/opt/jdk/bin/java");
    assert_eq!(settings.assembler.jar_path.as_deref(), Some("/opt/kickass/KickAss.jar"));
    assert_eq!(settings.assembler.extra_args, vec!["-define", "DEBUG"]);
    assert!(!settings.diagnostics.on_type);
    assert!(settings.diagnostics.on_save);
    assert_eq!(settings.diagnostics.debounce_ms, 1200);
    assert_eq!(settings.logging.level, LoggingLevel::Debug);
}

#[test]
fn parses_direct_payload() {
    let payload = json!({
        "diagnostics": { "onSave": false },
        "assembler": { "jarPath": "KickAss.jar" }
    });

    let settings = ServerSettings::from_lsp_payload(Some(&payload));
    assert!(settings.diagnostics.on_type);
    assert!(!settings.diagnostics.on_save);
    assert_eq!(settings.assembler.jar_path.as_deref(), Some("KickAss.jar"));
}

#[test]
fn clamps_and_trims_values() {
    let payload = json!({
        "assembler": { "javaPath": "   ", "jarPath": " ", "extraArgs": ["", "  "] },
        "diagnostics": { "debounceMs": 1 }
    });

    let settings = ServerSettings::from_lsp_payload(Some(&payload));
    assert_eq!(settings.assembler.java_path, "java");
    assert_eq!(settings.assembler.jar_path, None);
    assert!(settings.assembler.extra_args.is_empty());
    assert_eq!(settings.diagnostics.debounce_ms, MIN_DIAGNOSTIC_DEBOUNCE_MS);

    let slow = ServerSettings::from_lsp_payload(Some(&json!({ "diagnostics": { "debounceMs": 999999 } })));
    assert_eq!(slow.diagnostics.debounce_ms, MAX_DIAGNOSTIC_DEBOUNCE_MS);
}

#[test]
fn preserves_existing_values_when_payload_is_partial() {
    let base = ServerSettings::from_lsp_payload(Some(&json!({ "assembler": { "jarPath": "/kick/KickAss.jar" } })));
    let merged = base.merged_with_payload(&json!({ "diagnostics": { "debounceMs": 900 } }));
    assert_eq!(merged.assembler.jar_path.as_deref(), Some("/kick/KickAss.jar"));
    assert_eq!(merged.diagnostics.debounce_ms, 900);
}

#[test]
fn ignores_payloads_of_the_wrong_shape() {
    let settings = ServerSettings::from_lsp_payload(Some(&json!({ "diagnostics": "yes" })));
    assert_eq!(settings, ServerSettings::default());
}

#[test]
fn workspace_toml_is_merged() {
    let content = r#"
[assembler]
jarPath = "/tools/KickAss.jar"
extraArgs = ["-vicesymbols"]

[diagnostics]
debounceMs = 750
"#;
    let settings = ServerSettings::default().merged_with_toml(content);
    assert_eq!(settings.assembler.jar_path.as_deref(), Some("/tools/KickAss.jar"));
    assert_eq!(settings.assembler.extra_args, vec!["-vicesymbols"]);
    assert_eq!(settings.diagnostics.debounce_ms, 750);

    let broken = settings.merged_with_toml("[assembler");
    assert_eq!(broken, settings);
}

#[test]
fn workspace_file_is_found_in_roots() {
    let root = std::env::temp_dir().join(format!("kickass-analyzer-settings-{}", std::process::id()));
    std::fs::create_dir_all(&root).unwrap();
    std::fs::write(root.join(WORKSPACE_SETTINGS_FILE), "[logging]\nlevel = \"warn\"\n").unwrap();

    let settings = ServerSettings::default().merged_with_workspace(&[PathBuf::from("/nonexistent"), root.clone()]);
    assert_eq!(settings.logging.level, LoggingLevel::Warn);
    assert!(!settings.logging.level.allows_info());

    std::fs::remove_dir_all(root).unwrap();
}

#[test]
fn converts_to_assembler_config() {
    let settings = ServerSettings::from_lsp_payload(Some(&json!({
        "assembler": { "jarPath": "/kick/KickAss.jar", "extraArgs": ["-showmem"] }
    })));
    let config = settings.assembler_config();
    assert_eq!(config.java_path, "java");
    assert_eq!(config.jar_path, Some(PathBuf::from("/kick/KickAss.jar")));
    assert_eq!(config.extra_args, vec!["-showmem"]);
}
