use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::assembler::AssemblerConfig;

pub(crate) const SETTINGS_SECTION_KEY: &str = "kickass-analyzer";
pub(crate) const WORKSPACE_SETTINGS_FILE: &str = "kickass-analyzer.toml";
pub(crate) const MIN_DIAGNOSTIC_DEBOUNCE_MS: u64 = 50;
pub(crate) const MAX_DIAGNOSTIC_DEBOUNCE_MS: u64 = 5000;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ServerSettings {
    pub(crate) assembler: AssemblerSettings,
    pub(crate) diagnostics: DiagnosticsSettings,
    pub(crate) logging: LoggingSettings,
}

impl ServerSettings {
    pub fn from_lsp_payload(payload: Option<&Value>) -> Self {
        let mut settings = Self::default();
        if let Some(payload) = payload {
            settings = settings.merged_with_payload(payload);
        }
        settings
    }

    /// Overlay a payload, bare or namespaced under `kickass-analyzer`. Keys
    /// the payload leaves out keep their current value.
    pub fn merged_with_payload(
        &self,
        payload: &Value,
    ) -> Self {
        let mut merged = self.clone();

        for candidate in payload_candidates(payload) {
            if let Ok(patch) = serde_json::from_value::<ServerSettingsPatch>(candidate.clone()) {
                merged.apply_patch(patch);
            }
        }

        merged.normalize();
        merged
    }

    /// Overlay the contents of a `kickass-analyzer.toml` file. Unparseable
    /// files leave the settings unchanged.
    pub fn merged_with_toml(
        &self,
        content: &str,
    ) -> Self {
        match toml::from_str::<Value>(content) {
            Ok(payload) => self.merged_with_payload(&payload),
            Err(err) => {
                debug!("Ignoring malformed {WORKSPACE_SETTINGS_FILE}: {err}");
                self.clone()
            },
        }
    }

    /// Merge the first workspace settings file found in `roots`.
    pub(crate) fn merged_with_workspace(
        &self,
        roots: &[PathBuf],
    ) -> Self {
        match roots.iter().find_map(|root| load_workspace_file(root)) {
            Some(content) => self.merged_with_toml(&content),
            None => self.clone(),
        }
    }

    pub(crate) fn assembler_config(&self) -> AssemblerConfig {
        AssemblerConfig {
            java_path: self.assembler.java_path.clone(),
            jar_path: self.assembler.jar_path.as_ref().map(PathBuf::from),
            extra_args: self.assembler.extra_args.clone(),
        }
    }

    fn apply_patch(
        &mut self,
        patch: ServerSettingsPatch,
    ) {
        if let Some(assembler) = patch.assembler {
            self.assembler.apply_patch(assembler);
        }
        if let Some(diagnostics) = patch.diagnostics {
            self.diagnostics.apply_patch(diagnostics);
        }
        if let Some(logging) = patch.logging {
            self.logging.apply_patch(logging);
        }
    }

    fn normalize(&mut self) {
        self.assembler.normalize();
        self.diagnostics.normalize();
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct AssemblerSettings {
    pub(crate) java_path: String,
    pub(crate) jar_path: Option<String>,
    pub(crate) extra_args: Vec<String>,
}

impl Default for AssemblerSettings {
    fn default() -> Self {
        Self {
            java_path: "java".to_string(),
            jar_path: None,
            extra_args: Vec::new(),
        }
    }
}

impl AssemblerSettings {
    fn apply_patch(
        &mut self,
        patch: AssemblerSettingsPatch,
    ) {
        if let Some(java_path) = patch.java_path {
            self.java_path = java_path;
        }
        if let Some(jar_path) = patch.jar_path {
            self.jar_path = Some(jar_path);
        }
        if let Some(extra_args) = patch.extra_args {
            self.extra_args = extra_args;
        }
    }

    fn normalize(&mut self) {
        self.java_path = self.java_path.trim().to_string();
        if self.java_path.is_empty() {
            self.java_path = "java".to_string();
        }
        self.jar_path = self.jar_path.as_deref().map(str::trim).filter(|p| !p.is_empty()).map(str::to_string);
        self.extra_args = self
            .extra_args
            .iter()
            .map(|arg| arg.trim().to_string())
            .filter(|arg| !arg.is_empty())
            .collect();
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct DiagnosticsSettings {
    pub(crate) on_type: bool,
    pub(crate) on_save: bool,
    pub(crate) debounce_ms: u64,
}

impl Default for DiagnosticsSettings {
    fn default() -> Self {
        Self {
            on_type: true,
            on_save: true,
            debounce_ms: 300,
        }
    }
}

impl DiagnosticsSettings {
    fn apply_patch(
        &mut self,
        patch: DiagnosticsSettingsPatch,
    ) {
        if let Some(on_type) = patch.on_type {
            self.on_type = on_type;
        }
        if let Some(on_save) = patch.on_save {
            self.on_save = on_save;
        }
        if let Some(debounce_ms) = patch.debounce_ms {
            self.debounce_ms = debounce_ms;
        }
    }

    fn normalize(&mut self) {
        self.debounce_ms = self.debounce_ms.clamp(MIN_DIAGNOSTIC_DEBOUNCE_MS, MAX_DIAGNOSTIC_DEBOUNCE_MS);
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub(crate) struct LoggingSettings {
    pub(crate) level: LoggingLevel,
}

impl LoggingSettings {
    fn apply_patch(
        &mut self,
        patch: LoggingSettingsPatch,
    ) {
        if let Some(level) = patch.level {
            self.level = level;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub(crate) enum LoggingLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LoggingLevel {
    pub(crate) fn allows_info(self) -> bool {
        self >= LoggingLevel::Info
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
struct ServerSettingsPatch {
    assembler: Option<AssemblerSettingsPatch>,
    diagnostics: Option<DiagnosticsSettingsPatch>,
    logging: Option<LoggingSettingsPatch>,
    #[serde(flatten)]
    _extra: HashMap<String, Value>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
struct AssemblerSettingsPatch {
    java_path: Option<String>,
    jar_path: Option<String>,
    extra_args: Option<Vec<String>>,
    #[serde(flatten)]
    _extra: HashMap<String, Value>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
struct DiagnosticsSettingsPatch {
    on_type: Option<bool>,
    on_save: Option<bool>,
    debounce_ms: Option<u64>,
    #[serde(flatten)]
    _extra: HashMap<String, Value>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
struct LoggingSettingsPatch {
    level: Option<LoggingLevel>,
    #[serde(flatten)]
    _extra: HashMap<String, Value>,
}

fn payload_candidates(payload: &Value) -> Vec<Value> {
    let mut candidates = vec![payload.clone()];

    if let Some(scoped) = payload.get(SETTINGS_SECTION_KEY) {
        candidates.push(scoped.clone());
    }

    candidates
}

fn load_workspace_file(root: &Path) -> Option<String> {
    let path = root.join(WORKSPACE_SETTINGS_FILE);
    if !path.is_file() {
        return None;
    }
    debug!("Loading workspace settings from {}", path.display());
    std::fs::read_to_string(path).ok()
}

#[cfg(test)]
#[path = "../../tests/src/server/settings_tests.rs"]
mod tests;
