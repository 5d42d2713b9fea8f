//! Typed view of the report Kick Assembler writes with `-asminfo all`.

mod parser;
mod types;
mod writer;

pub use parser::ReportParser;
pub use types::{
    DirectiveRecord, ErrorRecord, ErrorSeverity, FileRecord, LibraryEntryKind, LibraryRecord, Report, ReportRange,
    SYNTHESIZED_SOURCE_MARKER, SYSTEM_INCLUDE_MARKER, SourceRange, SyntaxKind, SyntaxToken,
};
