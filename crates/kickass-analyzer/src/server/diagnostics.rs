use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Instant;

use dashmap::DashMap;
use futures::FutureExt;
use tower_lsp::Client;
use tower_lsp::lsp_types::{Diagnostic, DiagnosticSeverity, Position, Range, Url};
use tracing::{debug, warn};

use super::state::KickAssLanguageServer;
use crate::assembler::{AssembleRequest, Assembler};
use crate::document::DocumentStore;
use crate::project::{ProjectSnapshot, ProjectStore};
use crate::report::{ErrorSeverity, ReportRange};
use crate::text_pos::lsp_range;

pub(crate) const DIAGNOSTIC_SOURCE: &str = "kickass";

impl KickAssLanguageServer {
    /// Create a lightweight handle suitable for passing into `tokio::spawn`.
    pub(crate) fn clone_for_background(&self) -> BackgroundHandle {
        BackgroundHandle {
            client: self.client.clone(),
            document_store: Arc::clone(&self.document_store),
            projects: Arc::clone(&self.projects),
            assembler: Arc::clone(&self.assembler),
        }
    }

    /// Clear any previously published diagnostics for a document.
    pub(crate) async fn clear_diagnostics(
        &self,
        uri: &Url,
    ) {
        self.client.publish_diagnostics(uri.clone(), Vec::new(), None).await;
    }
}

/// State a rebuild needs, detached from the server so it can run on a
/// spawned task.
#[derive(Clone)]
pub(crate) struct BackgroundHandle {
    client: Client,
    document_store: Arc<DocumentStore>,
    projects: Arc<ProjectStore>,
    assembler: Arc<dyn Assembler>,
}

impl BackgroundHandle {
    /// Assemble the current buffer content, commit the resulting snapshot
    /// and publish its diagnostics unless a newer rebuild has started.
    pub(crate) async fn rebuild(
        &self,
        uri: Url,
    ) {
        let Some(document) = self.document_store.get(&uri) else {
            debug!("Skipping rebuild of closed document {uri}");
            return;
        };
        let generation = self.projects.begin_rebuild(&uri);
        let version = document.version;
        let started = Instant::now();

        let assembler = Arc::clone(&self.assembler);
        let task_uri = uri.clone();
        let task = tokio::task::spawn_blocking(move || {
            let request = AssembleRequest {
                path: document.path(),
                text: document.text,
            };
            match assembler.assemble(&request) {
                Ok(output) => ProjectSnapshot::from_output(&task_uri, generation, &request.text, &output, |path| {
                    std::fs::read_to_string(path).ok()
                }),
                Err(err) => {
                    warn!("Assembler failed for {task_uri}: {err}");
                    ProjectSnapshot::empty(&task_uri, generation).with_failure(Some(err.to_string()))
                },
            }
        });
        let snapshot = match task.await {
            Ok(snapshot) => snapshot,
            Err(err) => {
                warn!("Rebuild task for {uri} did not complete: {err}");
                ProjectSnapshot::empty(&uri, generation)
            },
        };

        if self.document_store.get(&uri).is_none() {
            debug!("Dropping rebuild of {uri}: document was closed");
            return;
        }
        let diagnostics = snapshot_diagnostics(&snapshot);
        self.projects.commit(snapshot);
        if !self.projects.is_latest(&uri, generation) {
            debug!("Skipping stale diagnostics for {uri} (generation={generation})");
            return;
        }

        debug!(
            "Publishing {} diagnostic(s) for {uri} (v{version}, generation={generation}) after {:?}",
            diagnostics.len(),
            started.elapsed()
        );
        let result = AssertUnwindSafe(self.client.publish_diagnostics(uri, diagnostics, Some(version)))
            .catch_unwind()
            .await;
        if result.is_err() {
            warn!("publish_diagnostics panicked (client may have disconnected)");
        }
    }
}

/// Assembler errors that belong to the buffer itself, plus the failure line
/// of a run that produced no report.
pub(crate) fn snapshot_diagnostics(snapshot: &ProjectSnapshot) -> Vec<Diagnostic> {
    let main = snapshot.main_file_index();
    let mut diagnostics: Vec<Diagnostic> = snapshot
        .report
        .errors
        .iter()
        .filter_map(|error| {
            let range = match &error.range {
                ReportRange::Resolved(range) if Some(range.file_index) == main => {
                    lsp_range(range, |line| snapshot.line_text(range.file_index, line))
                },
                ReportRange::Resolved(_) => return None,
                ReportRange::Unresolvable => buffer_start(),
            };
            Some(diagnostic(range, severity(&error.severity), error.message.clone()))
        })
        .collect();

    if let Some(failure) = &snapshot.failure {
        diagnostics.push(diagnostic(buffer_start(), DiagnosticSeverity::ERROR, failure.clone()));
    }
    diagnostics
}

fn severity(severity: &ErrorSeverity) -> DiagnosticSeverity {
    match severity {
        ErrorSeverity::Error => DiagnosticSeverity::ERROR,
        ErrorSeverity::Warning => DiagnosticSeverity::WARNING,
        ErrorSeverity::Other(_) => DiagnosticSeverity::INFORMATION,
    }
}

fn buffer_start() -> Range {
    Range::new(Position::new(0, 0), Position::new(0, 0))
}

fn diagnostic(
    range: Range,
    severity: DiagnosticSeverity,
    message: String,
) -> Diagnostic {
    Diagnostic {
        range,
        severity: Some(severity),
        source: Some(DIAGNOSTIC_SOURCE.to_string()),
        message,
        ..Default::default()
    }
}

/// Bump the debounce generation of a document and return it.
pub(crate) fn next_edit_generation(
    generations: &DashMap<Url, u64>,
    uri: &Url,
) -> u64 {
    let mut entry = generations.entry(uri.clone()).or_insert(0);
    *entry += 1;
    *entry
}

pub(crate) fn is_latest_edit_generation(
    generations: &DashMap<Url, u64>,
    uri: &Url,
    generation: u64,
) -> bool {
    generations.get(uri).is_some_and(|current| *current == generation)
}

#[cfg(test)]
#[path = "../../tests/src/server/diagnostics_tests.rs"]
mod tests;
