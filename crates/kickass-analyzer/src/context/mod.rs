//! Cursor-context resolution shared by completion, hover, signature help and
//! definition lookups.

mod classify;
mod token;

pub use classify::{ContextKind, Lookups, Offer, classify};
pub use token::{TokenContext, Word, identifier_at, resolve_context, word_at};

#[cfg(test)]
#[path = "../../tests/src/context/context_tests.rs"]
mod tests;
