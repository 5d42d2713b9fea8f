use std::path::PathBuf;

/// Failures of the assembler collaborator itself, as opposed to errors it
/// reports about the source.
#[derive(Debug, thiserror::Error)]
pub enum AssemblerError {
    /// The Java runtime could not be started.
    #[error("failed to start `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Scratch files could not be written or read back.
    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// No usable `KickAss.jar` is configured.
    #[error("KickAss.jar not found{}", path.as_ref().map(|p| format!(" at {}", p.display())).unwrap_or_default())]
    MissingJar {
        path: Option<PathBuf>,
    },
}

impl AssemblerError {
    pub(crate) fn io(
        context: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}
