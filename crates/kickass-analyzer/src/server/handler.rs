use std::panic::AssertUnwindSafe;
use std::time::Duration;

use futures::FutureExt;
use tower_lsp::LanguageServer;
use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tracing::{debug, info};

use crate::server::diagnostics::{is_latest_edit_generation, next_edit_generation};
use crate::server::settings::ServerSettings;
use crate::server::state::KickAssLanguageServer;

const CLIENT_NOTIFICATION_PREFIX: &str = "kickass-analyzer:";

#[tower_lsp::async_trait]
impl LanguageServer for KickAssLanguageServer {
    async fn initialize(
        &self,
        params: InitializeParams,
    ) -> Result<InitializeResult> {
        info!("Initializing kickass-analyzer...");

        if let Some(folders) = params.workspace_folders {
            *self.workspace_roots.write().await = folders;
        } else if let Some(root) = params.root_uri {
            *self.workspace_roots.write().await = vec![WorkspaceFolder {
                uri: root,
                name: "root".to_string(),
            }];
        }

        let mut settings = ServerSettings::default().merged_with_workspace(&self.workspace_paths().await);
        if let Some(options) = params.initialization_options.as_ref() {
            settings = settings.merged_with_payload(options);
        }
        self.apply_settings(settings).await;

        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                text_document_sync: Some(TextDocumentSyncCapability::Options(TextDocumentSyncOptions {
                    open_close: Some(true),
                    change: Some(TextDocumentSyncKind::FULL),
                    save: Some(TextDocumentSyncSaveOptions::Supported(true)),
                    ..Default::default()
                })),
                completion_provider: Some(CompletionOptions {
                    trigger_characters: Some(vec![".".to_string(), "#".to_string(), ":".to_string()]),
                    ..Default::default()
                }),
                hover_provider: Some(HoverProviderCapability::Simple(true)),
                signature_help_provider: Some(SignatureHelpOptions {
                    trigger_characters: Some(vec!["(".to_string(), ",".to_string(), ":".to_string()]),
                    retrigger_characters: None,
                    work_done_progress_options: Default::default(),
                }),
                definition_provider: Some(OneOf::Left(true)),
                document_symbol_provider: Some(OneOf::Left(true)),
                ..Default::default()
            },
            server_info: Some(ServerInfo {
                name: "kickass-analyzer".to_string(),
                version: Some(env!("CARGO_PKG_VERSION").to_string()),
            }),
        })
    }

    async fn initialized(
        &self,
        _: InitializedParams,
    ) {
        let settings = self.settings_snapshot().await;
        match &settings.assembler.jar_path {
            Some(jar) => info!("kickass-analyzer initialized (KickAss.jar at {jar})"),
            None => {
                info!("kickass-analyzer initialized without a KickAss.jar path");
                self.client
                    .show_message(
                        MessageType::WARNING,
                        prefixed_client_message(
                            "Set kickass-analyzer.assembler.jarPath to enable symbols and diagnostics.",
                        ),
                    )
                    .await;
            },
        }
    }

    async fn did_change_configuration(
        &self,
        params: DidChangeConfigurationParams,
    ) {
        let current = self.settings_snapshot().await;
        let merged = current.merged_with_payload(&params.settings);
        if merged == current {
            return;
        }
        let assembler_changed = merged.assembler != current.assembler;
        self.apply_settings(merged).await;
        info!("Applied updated kickass-analyzer settings");

        if assembler_changed {
            for uri in self.document_store.all_uris() {
                let handle = self.clone_for_background();
                tokio::spawn(async move {
                    handle.rebuild(uri).await;
                });
            }
        }
    }

    async fn shutdown(&self) -> Result<()> {
        info!("Shutting down kickass-analyzer");
        Ok(())
    }

    async fn did_open(
        &self,
        params: DidOpenTextDocumentParams,
    ) {
        let uri = params.text_document.uri;
        let text = params.text_document.text;
        let version = params.text_document.version;
        let filename = short_name(&uri);

        info!("Opened {filename} (v{version}, {} bytes)", text.len());
        if self.settings_snapshot().await.logging.level.allows_info() {
            let _ = AssertUnwindSafe(
                self.client.log_message(MessageType::INFO, prefixed_client_message(format!("Opened {filename}"))),
            )
            .catch_unwind()
            .await;
        }

        self.document_store.open(uri.clone(), text, version);

        // The first snapshot is needed for every feature, whatever the
        // on-type setting says.
        let handle = self.clone_for_background();
        tokio::spawn(async move {
            handle.rebuild(uri).await;
        });
    }

    async fn did_change(
        &self,
        params: DidChangeTextDocumentParams,
    ) {
        let uri = params.text_document.uri;
        let version = params.text_document.version;

        if !self.document_store.apply_changes(&uri, params.content_changes, version) {
            debug!("Change for unknown document {uri}");
            return;
        }

        let settings = self.settings_snapshot().await;
        if !settings.diagnostics.on_type {
            return;
        }

        let generation = next_edit_generation(&self.edit_generation, &uri);
        let generations = self.edit_generation.clone();
        let debounce = Duration::from_millis(settings.diagnostics.debounce_ms);
        let handle = self.clone_for_background();
        tokio::spawn(async move {
            tokio::time::sleep(debounce).await;
            if !is_latest_edit_generation(&generations, &uri, generation) {
                return;
            }
            handle.rebuild(uri).await;
        });
    }

    async fn did_save(
        &self,
        params: DidSaveTextDocumentParams,
    ) {
        let uri = params.text_document.uri;
        debug!("Saved {}", short_name(&uri));
        if let Some(text) = params.text {
            let version = self.document_store.version(&uri).unwrap_or_default();
            self.document_store.update(uri.clone(), text, version);
        }
        if self.settings_snapshot().await.diagnostics.on_save {
            self.clone_for_background().rebuild(uri).await;
        }
    }

    async fn did_close(
        &self,
        params: DidCloseTextDocumentParams,
    ) {
        let uri = params.text_document.uri;
        debug!("Closed {}", short_name(&uri));
        self.document_store.close(&uri);
        self.projects.remove(&uri);
        self.clear_diagnostics(&uri).await;
    }

    async fn completion(
        &self,
        params: CompletionParams,
    ) -> Result<Option<CompletionResponse>> {
        let uri = params.text_document_position.text_document.uri;
        let position = params.text_document_position.position;
        let Some(text) = self.document_store.get_content(&uri) else {
            return Ok(None);
        };
        let snapshot = self.snapshot(&uri);
        let items = self.completion_provider.provide(&text, position, &snapshot);
        Ok(Some(CompletionResponse::Array(items)))
    }

    async fn hover(
        &self,
        params: HoverParams,
    ) -> Result<Option<Hover>> {
        let uri = params.text_document_position_params.text_document.uri;
        let position = params.text_document_position_params.position;
        let Some(text) = self.document_store.get_content(&uri) else {
            return Ok(None);
        };
        Ok(self.hover_provider.provide(&text, position, &self.snapshot(&uri)))
    }

    async fn signature_help(
        &self,
        params: SignatureHelpParams,
    ) -> Result<Option<SignatureHelp>> {
        let uri = params.text_document_position_params.text_document.uri;
        let position = params.text_document_position_params.position;
        let Some(text) = self.document_store.get_content(&uri) else {
            return Ok(None);
        };
        Ok(self.signature_provider.provide(&text, position, &self.snapshot(&uri)))
    }

    async fn goto_definition(
        &self,
        params: GotoDefinitionParams,
    ) -> Result<Option<GotoDefinitionResponse>> {
        let uri = params.text_document_position_params.text_document.uri;
        let position = params.text_document_position_params.position;
        let Some(text) = self.document_store.get_content(&uri) else {
            return Ok(None);
        };

        let location = self.definition_provider.provide(&text, position, &self.snapshot(&uri));
        let filename = short_name(&uri);
        match &location {
            Some(loc) => debug!(
                "goto-def {filename}:{}:{} -> {}:{}",
                position.line + 1,
                position.character + 1,
                short_name(&loc.uri),
                loc.range.start.line + 1
            ),
            None => debug!("goto-def {filename}:{}:{} -> none", position.line + 1, position.character + 1),
        }
        Ok(location.map(GotoDefinitionResponse::Scalar))
    }

    async fn document_symbol(
        &self,
        params: DocumentSymbolParams,
    ) -> Result<Option<DocumentSymbolResponse>> {
        let snapshot = self.snapshot(&params.text_document.uri);
        let Some(file) = snapshot.main_file() else {
            return Ok(Some(DocumentSymbolResponse::Nested(Vec::new())));
        };
        let symbols = self.symbol_provider.document_symbols(&snapshot.catalog, file);
        Ok(Some(DocumentSymbolResponse::Nested(symbols)))
    }
}

fn short_name(uri: &Url) -> String {
    uri.path().rsplit('/').next().unwrap_or(uri.path()).to_owned()
}

fn prefixed_client_message(message: impl AsRef<str>) -> String {
    format!("{CLIENT_NOTIFICATION_PREFIX} {}", message.as_ref())
}
