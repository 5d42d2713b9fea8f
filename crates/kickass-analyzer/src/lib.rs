pub mod assembler;
pub mod completion;
pub mod context;
pub mod definition;
pub mod document;
pub mod hover;
pub mod language;
pub mod project;
pub mod report;
pub mod scope;
pub mod server;
pub mod signature;
pub mod symbols;
pub mod text_pos;

pub use assembler::{AssembleRequest, Assembler, AssemblerConfig, AssemblerError, AssemblerOutput, KickAssembler};
pub use completion::CompletionProvider;
pub use definition::DefinitionProvider;
pub use hover::HoverProvider;
pub use project::{ProjectId, ProjectSnapshot, ProjectStore};
pub use report::{Report, ReportParser};
pub use server::{KickAssLanguageServer, ServerSettings};
pub use signature::SignatureHelpProvider;
pub use symbols::{SymbolCatalog, SymbolProvider};
