use std::fmt;
use std::time::Instant;

use sha2::{Digest, Sha256};
use tower_lsp::lsp_types::Url;
use tracing::debug;

use crate::assembler::AssemblerOutput;
use crate::context::Lookups;
use crate::report::{Report, ReportParser};
use crate::scope::{ScopeId, ScopeTracker, TrackedFile};
use crate::symbols::{CatalogBuilder, SymbolCatalog};

/// Stable identity of one buffer's project: the hex SHA-256 of its URI.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectId(String);

impl ProjectId {
    pub fn for_uri(uri: &Url) -> Self {
        let digest = Sha256::digest(uri.as_str().as_bytes());
        Self(digest.iter().map(|b| format!("{b:02x}")).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Immutable result of one assemble cycle for one buffer.
#[derive(Debug, Clone)]
pub struct ProjectSnapshot {
    pub id: ProjectId,
    pub uri: Url,
    pub generation: u64,
    pub report: Report,
    pub files: Vec<TrackedFile>,
    pub catalog: SymbolCatalog,
    /// Assembler output line to surface when it produced no report.
    pub failure: Option<String>,
}

impl ProjectSnapshot {
    pub fn empty(
        uri: &Url,
        generation: u64,
    ) -> Self {
        Self {
            id: ProjectId::for_uri(uri),
            uri: uri.clone(),
            generation,
            report: Report::default(),
            files: Vec::new(),
            catalog: SymbolCatalog::default(),
            failure: None,
        }
    }

    /// Run the indexing pipeline over one report.
    ///
    /// The synthesized main file is tracked from `buffer_text`; every other
    /// reported file is loaded through `read_file`, and files it cannot load
    /// are left untracked. Never fails.
    pub fn build(
        uri: &Url,
        generation: u64,
        buffer_text: &str,
        report_text: &str,
        read_file: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let started = Instant::now();
        let report = ReportParser::default().parse(report_text);

        let mut tracker = ScopeTracker::new();
        let mut files = Vec::with_capacity(report.files.len());
        for record in &report.files {
            if record.is_system_include {
                continue;
            }
            let text = if record.is_synthesized_main { Some(buffer_text.to_string()) } else { read_file(&record.path) };
            let Some(text) = text else {
                debug!("Could not read reported file {}", record.path);
                continue;
            };
            files.push(tracker.track_file(record.index, &text, &report.comment_ranges(record.index)));
        }

        let catalog = CatalogBuilder::new(tracker.into_arena()).build(&report, &files);
        debug!(
            "Indexed {} file(s), {} symbol(s) for {} in {:?}",
            files.len(),
            catalog.len(),
            uri,
            started.elapsed()
        );

        Self {
            id: ProjectId::for_uri(uri),
            uri: uri.clone(),
            generation,
            report,
            files,
            catalog,
            failure: None,
        }
    }

    /// Snapshot of one assembler run. A run without a report yields an empty
    /// catalogue carrying the assembler's first error line.
    pub fn from_output(
        uri: &Url,
        generation: u64,
        buffer_text: &str,
        output: &AssemblerOutput,
        read_file: impl Fn(&str) -> Option<String>,
    ) -> Self {
        match &output.report_text {
            Some(report_text) => Self::build(uri, generation, buffer_text, report_text, read_file),
            None => {
                let failure = output
                    .first_error_line()
                    .map(str::to_string)
                    .or_else(|| output.exit_status.map(|status| format!("Kick Assembler exited with status {status}")));
                debug!("No report for {} (exit status {:?})", uri, output.exit_status);
                Self::empty(uri, generation).with_failure(failure)
            },
        }
    }

    pub fn with_failure(
        mut self,
        failure: Option<String>,
    ) -> Self {
        self.failure = failure;
        self
    }

    pub fn main_file_index(&self) -> Option<u32> {
        self.report.main_file().map(|f| f.index)
    }

    pub fn tracked(
        &self,
        file_index: u32,
    ) -> Option<&TrackedFile> {
        self.files.iter().find(|f| f.file_index == file_index)
    }

    pub fn main_file(&self) -> Option<&TrackedFile> {
        self.tracked(self.main_file_index()?)
    }

    /// Scope in effect at `line` of the buffer, global when unknown.
    pub fn scope_at(
        &self,
        line: u32,
    ) -> ScopeId {
        self.main_file().map(|f| f.scope_at(line)).unwrap_or(ScopeId::GLOBAL)
    }

    pub fn lookups(&self) -> Lookups<'_> {
        Lookups {
            catalog: &self.catalog,
            report: &self.report,
        }
    }

    /// Document URI of a reported file. The synthesized main file maps back
    /// to the buffer it was generated from.
    pub fn file_uri(
        &self,
        file_index: u32,
    ) -> Option<Url> {
        let record = self.report.file(file_index)?;
        if record.is_synthesized_main {
            return Some(self.uri.clone());
        }
        Url::from_file_path(&record.path).ok()
    }

    /// Raw text of one tracked line.
    pub fn line_text(
        &self,
        file_index: u32,
        line: u32,
    ) -> Option<&str> {
        self.tracked(file_index)?.line(line).map(|l| l.raw_text.as_str())
    }
}
