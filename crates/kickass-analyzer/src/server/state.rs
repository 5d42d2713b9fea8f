use std::path::PathBuf;
use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::RwLock;
use tower_lsp::Client;
use tower_lsp::lsp_types::{Url, WorkspaceFolder};

use crate::assembler::{Assembler, KickAssembler};
use crate::completion::CompletionProvider;
use crate::definition::DefinitionProvider;
use crate::document::DocumentStore;
use crate::hover::HoverProvider;
use crate::project::{ProjectSnapshot, ProjectStore};
use crate::server::settings::ServerSettings;
use crate::signature::SignatureHelpProvider;
use crate::symbols::SymbolProvider;

/// The kickass-analyzer backend that implements the Language Server Protocol.
pub struct KickAssLanguageServer {
    /// The LSP client handle, used to send notifications (e.g. diagnostics) back.
    pub(crate) client: Client,

    pub(crate) document_store: Arc<DocumentStore>,

    /// Latest committed snapshot per open buffer.
    pub(crate) projects: Arc<ProjectStore>,

    /// Produces the `-asminfo` report for a buffer.
    pub(crate) assembler: Arc<dyn Assembler>,

    pub(crate) completion_provider: CompletionProvider,
    pub(crate) hover_provider: HoverProvider,
    pub(crate) signature_provider: SignatureHelpProvider,
    pub(crate) definition_provider: DefinitionProvider,
    pub(crate) symbol_provider: SymbolProvider,

    /// Workspace root folders, populated during `initialize`.
    pub(crate) workspace_roots: RwLock<Vec<WorkspaceFolder>>,

    /// Debounce generation per buffer, bumped on every edit so only the
    /// last edit of a burst triggers a rebuild.
    pub(crate) edit_generation: Arc<DashMap<Url, u64>>,

    /// Runtime server settings updated from LSP configuration.
    pub(crate) settings: Arc<RwLock<ServerSettings>>,
}

impl KickAssLanguageServer {
    /// Create a server that assembles through `java -jar KickAss.jar`.
    pub fn new(client: Client) -> Self {
        Self::with_assembler(client, Arc::new(KickAssembler::default()))
    }

    /// Create a server around any assembler implementation.
    pub fn with_assembler(
        client: Client,
        assembler: Arc<dyn Assembler>,
    ) -> Self {
        Self {
            client,
            document_store: Arc::new(DocumentStore::new()),
            projects: Arc::new(ProjectStore::new()),
            assembler,
            completion_provider: CompletionProvider::new(),
            hover_provider: HoverProvider::new(),
            signature_provider: SignatureHelpProvider::new(),
            definition_provider: DefinitionProvider::new(),
            symbol_provider: SymbolProvider::new(),
            workspace_roots: RwLock::new(Vec::new()),
            edit_generation: Arc::new(DashMap::new()),
            settings: Arc::new(RwLock::new(ServerSettings::default())),
        }
    }

    pub(crate) async fn settings_snapshot(&self) -> ServerSettings {
        self.settings.read().await.clone()
    }

    pub(crate) async fn apply_settings(
        &self,
        settings: ServerSettings,
    ) {
        self.assembler.configure(settings.assembler_config());
        *self.settings.write().await = settings;
    }

    pub(crate) async fn workspace_paths(&self) -> Vec<PathBuf> {
        self.workspace_roots.read().await.iter().filter_map(|f| f.uri.to_file_path().ok()).collect()
    }

    /// Latest committed snapshot of `uri`; an empty one before the first
    /// rebuild finishes.
    pub(crate) fn snapshot(
        &self,
        uri: &Url,
    ) -> Arc<ProjectSnapshot> {
        self.projects.get(uri).unwrap_or_else(|| Arc::new(ProjectSnapshot::empty(uri, 0)))
    }
}
