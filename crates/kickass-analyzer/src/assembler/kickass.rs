use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, warn};

use super::{AssembleRequest, Assembler, AssemblerConfig, AssemblerError, AssemblerOutput};
use crate::report::SYNTHESIZED_SOURCE_MARKER;

static NEXT_ASSEMBLY_ID: AtomicU64 = AtomicU64::new(1);

/// Runs `java -jar KickAss.jar` on a scratch copy of the buffer and collects
/// the `-asminfo` report it writes.
pub struct KickAssembler {
    /// Private scratch directory for sources, reports and program output.
    temp_dir: PathBuf,
    config: RwLock<AssemblerConfig>,
}

impl Default for KickAssembler {
    fn default() -> Self {
        Self::new(AssemblerConfig::default())
    }
}

impl KickAssembler {
    pub fn new(config: AssemblerConfig) -> Self {
        let temp_dir = std::env::temp_dir().join(format!("kickass-analyzer-{}", std::process::id()));
        if let Err(e) = std::fs::create_dir_all(&temp_dir) {
            warn!("Failed to create temp directory {:?}: {}", temp_dir, e);
        }
        Self {
            temp_dir,
            config: RwLock::new(config),
        }
    }

    pub fn config(&self) -> AssemblerConfig {
        self.config.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Command line for one run, without the program name.
    pub(crate) fn arguments(
        config: &AssemblerConfig,
        jar: &Path,
        source: &Path,
        report: &Path,
        program: &Path,
        lib_dir: Option<&Path>,
    ) -> Vec<String> {
        let mut args = vec![
            "-jar".to_string(),
            jar.display().to_string(),
            source.display().to_string(),
            "-asminfo".to_string(),
            "all".to_string(),
            "-asminfofile".to_string(),
            report.display().to_string(),
            "-o".to_string(),
            program.display().to_string(),
        ];
        if let Some(dir) = lib_dir {
            args.push("-libdir".to_string());
            args.push(dir.display().to_string());
        }
        args.extend(config.extra_args.iter().cloned());
        args
    }
}

impl Assembler for KickAssembler {
    fn assemble(
        &self,
        request: &AssembleRequest,
    ) -> Result<AssemblerOutput, AssemblerError> {
        let config = self.config();
        let jar = match &config.jar_path {
            Some(jar) if jar.is_file() => jar.clone(),
            other => {
                return Err(AssemblerError::MissingJar {
                    path: other.clone(),
                });
            },
        };

        std::fs::create_dir_all(&self.temp_dir)
            .map_err(|e| AssemblerError::io(format!("creating {}", self.temp_dir.display()), e))?;

        let id = NEXT_ASSEMBLY_ID.fetch_add(1, Ordering::Relaxed);
        let source = self.temp_dir.join(format!("{SYNTHESIZED_SOURCE_MARKER}.{id}.asm"));
        let report = self.temp_dir.join(format!("asminfo-{id}.txt"));
        let program = self.temp_dir.join(format!("out-{id}.prg"));

        std::fs::write(&source, &request.text)
            .map_err(|e| AssemblerError::io(format!("writing {}", source.display()), e))?;

        let lib_dir = request.path.as_deref().and_then(Path::parent);
        let args = Self::arguments(&config, &jar, &source, &report, &program, lib_dir);
        debug!("Running: {} {}", config.java_path, args.join(" "));

        let mut command = Command::new(&config.java_path);
        if let Some(dir) = lib_dir {
            command.current_dir(dir);
        }
        let result = command.args(&args).output();

        let report_text = std::fs::read_to_string(&report).ok();
        for scratch in [&source, &report, &program] {
            let _ = std::fs::remove_file(scratch);
        }

        let output = result.map_err(|e| AssemblerError::Spawn {
            program: config.java_path.clone(),
            source: e,
        })?;

        Ok(AssemblerOutput {
            report_text,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_status: output.status.code(),
        })
    }

    fn configure(
        &self,
        config: AssemblerConfig,
    ) {
        *self.config.write().unwrap_or_else(|e| e.into_inner()) = config;
    }
}
