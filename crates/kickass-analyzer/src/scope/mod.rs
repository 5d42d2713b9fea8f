//! Brace-scope reconstruction from raw source text.
//!
//! The assembler's report does not expose lexical scopes, so they are
//! recovered here from braces and scope-opening directives, after blanking
//! the comment ranges the report does expose.

mod arena;
mod strip;
mod tracker;

pub use arena::{ScopeArena, ScopeEntry, ScopeId, ScopeKind};
pub use strip::{line_comment_start, split_lines, strip_comments};
pub use tracker::{LineRecord, ScopeTracker, TrackedFile};

#[cfg(test)]
#[path = "../../tests/src/scope/scope_tests.rs"]
mod tests;
